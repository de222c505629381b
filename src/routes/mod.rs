use axum::{
    routing::{get, post},
    Router,
};

use crate::types::app_state::AppState;

mod get_place_by_id;
mod post_place_predictions;
mod post_search_by_text;
mod post_search_nearby;
mod session;

pub fn apply_routes(app: Router<AppState>) -> Router<AppState> {
    app.route(
        "/place-predictions",
        post(post_place_predictions::post_place_predictions),
    )
    .route("/places/:id", get(get_place_by_id::get_place_by_id))
    .route(
        "/places/search-by-text",
        post(post_search_by_text::post_search_by_text),
    )
    .route(
        "/places/search-nearby",
        post(post_search_nearby::post_search_nearby),
    )
    .route(
        "/session",
        post(session::start_session).delete(session::clear_session),
    )
}
