use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;
use validator::Validate;

use crate::{
    types::{app_state::AppState, filters::PredictionFilters, prediction::PlacePrediction},
    utils::{app_error::AppError, validated_json::ValidatedJson},
};

#[derive(Validate, Deserialize)]
pub struct PlacePredictionsPayload {
    #[validate(length(min = 1, message = "Must be at least 1 character"))]
    pub query: String,

    #[serde(default)]
    pub filters: PredictionFilters,
}

#[derive(Serialize, Deserialize)]
pub struct PlacePredictionsResponseData {
    pub predictions: Vec<PlacePrediction>,
}

#[derive(Serialize, Deserialize)]
pub struct PlacePredictionsResponse {
    pub data: PlacePredictionsResponseData,
}

pub async fn post_place_predictions(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<PlacePredictionsPayload>,
) -> Result<Response, AppError> {
    let predictions = state
        .places_service
        .fetch_predictions(&payload.query, &payload.filters)
        .await
        .map_err(|e| {
            error!("Failed to fetch place predictions: {}", e);
            AppError::from(e)
        })?;

    Ok(Json(PlacePredictionsResponse {
        data: PlacePredictionsResponseData { predictions },
    })
    .into_response())
}
