use axum::{
    extract::{Request, State},
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};

use crate::{types::app_state::AppState, utils::app_error::AppError};

/// Gates every route on the configured gateway key. When no key is
/// configured the gateway is open, which is the local-development mode.
pub async fn auth_middleware(
    State(state): State<AppState>,
    headers: HeaderMap,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Some(auth_key) = &state.auth_key else {
        return Ok(next.run(request).await);
    };

    match headers.get("authorization") {
        Some(header) if header == auth_key => Ok(next.run(request).await),
        _ => Err(AppError::new(StatusCode::UNAUTHORIZED, "Unauthorized")),
    }
}
