use axum::{
    body::Body,
    http::{Response, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Serialize;

use crate::services::places_client::types::places_error::PlacesError;

#[derive(Debug)]
pub struct AppError {
    pub code: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn new(code: StatusCode, message: &str) -> Self {
        AppError {
            code,
            message: message.to_string(),
        }
    }
}

impl From<PlacesError> for AppError {
    fn from(err: PlacesError) -> Self {
        let code = match &err {
            PlacesError::NotInitialized => StatusCode::SERVICE_UNAVAILABLE,
            PlacesError::InvalidParams(_) => StatusCode::BAD_REQUEST,
            PlacesError::Provider { .. } => StatusCode::BAD_GATEWAY,
            PlacesError::NoResults => StatusCode::NOT_FOUND,
        };

        AppError {
            code,
            message: err.to_string(),
        }
    }
}

#[derive(Serialize)]
struct ResponseJson {
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response<Body> {
        (
            self.code,
            Json(ResponseJson {
                message: self.message,
            }),
        )
            .into_response()
    }
}
