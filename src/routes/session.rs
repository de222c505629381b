use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::{
    services::places_client::session::ClearOutcome,
    types::app_state::AppState,
    utils::app_error::AppError,
};

#[derive(Serialize, Deserialize)]
pub struct SessionResponseData {
    pub status: String,
}

#[derive(Serialize, Deserialize)]
pub struct SessionResponse {
    pub data: SessionResponseData,
}

pub async fn start_session(State(state): State<AppState>) -> Result<Response, AppError> {
    state.places_service.start_new_session().map_err(|e| {
        error!("Failed to start session: {}", e);
        AppError::from(e)
    })?;

    Ok(Json(SessionResponse {
        data: SessionResponseData {
            status: "CREATED".to_string(),
        },
    })
    .into_response())
}

pub async fn clear_session(State(state): State<AppState>) -> Result<Response, AppError> {
    let outcome = state.places_service.clear_session().map_err(|e| {
        error!("Failed to clear session: {}", e);
        AppError::from(e)
    })?;

    let status = match outcome {
        ClearOutcome::Cleared => "CLEARED",
        ClearOutcome::NoActiveSession => "NO_ACTIVE_SESSION",
    };

    Ok(Json(SessionResponse {
        data: SessionResponseData {
            status: status.to_string(),
        },
    })
    .into_response())
}
