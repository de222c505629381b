use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;
use validator::Validate;

use crate::{
    types::{app_state::AppState, place::Place},
    utils::{app_error::AppError, validated_query::ValidatedQuery},
};

#[derive(Validate, Deserialize)]
pub struct PlaceByIdQuery {
    /// Comma-separated abstract field names; unknown names are ignored and
    /// an empty list requests everything.
    pub fields: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct PlaceByIdResponseData {
    pub place: Place,
}

#[derive(Serialize, Deserialize)]
pub struct PlaceByIdResponse {
    pub data: PlaceByIdResponseData,
}

pub async fn get_place_by_id(
    State(state): State<AppState>,
    Path(place_id): Path<String>,
    ValidatedQuery(query): ValidatedQuery<PlaceByIdQuery>,
) -> Result<Response, AppError> {
    let fields: Vec<String> = query
        .fields
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .map(str::to_string)
        .collect();

    let place = state
        .places_service
        .fetch_place_by_id(&place_id, &fields)
        .await
        .map_err(|e| {
            error!("Failed to fetch place {}: {}", place_id, e);
            AppError::from(e)
        })?;

    Ok(Json(PlaceByIdResponse {
        data: PlaceByIdResponseData { place },
    })
    .into_response())
}
