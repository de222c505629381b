use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;
use validator::Validate;

use crate::{
    types::{app_state::AppState, filters::PredictionFilters, place::Place},
    utils::{app_error::AppError, validated_json::ValidatedJson},
};

#[derive(Validate, Deserialize)]
pub struct SearchByTextPayload {
    #[validate(length(min = 1, message = "Must be at least 1 character"))]
    pub query: String,

    #[serde(default)]
    pub filters: PredictionFilters,
}

#[derive(Serialize, Deserialize)]
pub struct SearchByTextResponseData {
    pub places: Vec<Place>,
}

#[derive(Serialize, Deserialize)]
pub struct SearchByTextResponse {
    pub data: SearchByTextResponseData,
}

pub async fn post_search_by_text(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<SearchByTextPayload>,
) -> Result<Response, AppError> {
    let places = state
        .places_service
        .search_by_text(&payload.query, &payload.filters)
        .await
        .map_err(|e| {
            error!("Failed to search places by text: {}", e);
            AppError::from(e)
        })?;

    Ok(Json(SearchByTextResponse {
        data: SearchByTextResponseData { places },
    })
    .into_response())
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use super::*;
    use crate::{
        app::gen_mock_app,
        services::places_client::types::provider_response::{
            RawGeometry, RawLatLng, RawPlace, RawSearchResponse,
        },
    };

    #[tokio::test]
    async fn text_search_returns_normalized_places() {
        let mut mock_app = gen_mock_app().await;

        let mock_response = RawSearchResponse {
            status: "OK".to_string(),
            error_message: None,
            html_attributions: vec!["Listings by Example".to_string()],
            results: vec![RawPlace {
                name: Some("Louvre Museum".to_string()),
                place_id: Some("louvre-1".to_string()),
                formatted_address: Some("Rue de Rivoli, Paris".to_string()),
                geometry: Some(RawGeometry {
                    location: Some(RawLatLng {
                        lat: 48.8606,
                        lng: 2.3376,
                    }),
                    viewport: None,
                }),
                ..RawPlace::default()
            }],
        };

        let mock_server = mock_app
            .provider_server
            .mock("GET", "/maps/api/place/textsearch/json")
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&mock_response).unwrap())
            .match_query(mockito::Matcher::Regex("query=museum".to_string()))
            .create_async()
            .await;

        let response = mock_app
            .app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/places/search-by-text")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"query":"museum"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        mock_server.assert();
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: SearchByTextResponse = serde_json::from_slice(&body).unwrap();

        assert_eq!(body.data.places.len(), 1);
        let place = &body.data.places[0];
        assert_eq!(place.name.as_deref(), Some("Louvre Museum"));
        assert_eq!(place.coordinate.unwrap().latitude, 48.8606);
        assert_eq!(place.attributions.as_deref(), Some("Listings by Example"));
    }

    #[tokio::test]
    async fn zero_results_maps_to_not_found() {
        let mut mock_app = gen_mock_app().await;

        let mock_response = RawSearchResponse {
            status: "ZERO_RESULTS".to_string(),
            error_message: None,
            html_attributions: vec![],
            results: vec![],
        };

        mock_app
            .provider_server
            .mock("GET", "/maps/api/place/textsearch/json")
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&mock_response).unwrap())
            .match_query(mockito::Matcher::Regex(".*".to_string()))
            .create_async()
            .await;

        let response = mock_app
            .app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/places/search-by-text")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"query":"nothing here"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
