use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;
use validator::Validate;

use crate::{
    types::{app_state::AppState, filters::CoordinateParam, place::Place},
    utils::{app_error::AppError, validated_json::ValidatedJson},
};

/// Center and radius are optional at the wire level so their absence can be
/// rejected as `InvalidParams` by the facade before any provider call,
/// rather than as a deserialization failure.
#[derive(Validate, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchNearbyPayload {
    pub center: Option<CoordinateParam>,
    pub radius_meters: Option<f64>,
    #[serde(default)]
    pub included_types: Vec<String>,
}

#[derive(Serialize, Deserialize)]
pub struct SearchNearbyResponseData {
    pub places: Vec<Place>,
}

#[derive(Serialize, Deserialize)]
pub struct SearchNearbyResponse {
    pub data: SearchNearbyResponseData,
}

pub async fn post_search_nearby(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<SearchNearbyPayload>,
) -> Result<Response, AppError> {
    let places = state
        .places_service
        .search_nearby(
            payload.center.as_ref(),
            payload.radius_meters,
            &payload.included_types,
        )
        .await
        .map_err(|e| {
            error!("Failed to search nearby places: {}", e);
            AppError::from(e)
        })?;

    Ok(Json(SearchNearbyResponse {
        data: SearchNearbyResponseData { places },
    })
    .into_response())
}
