use crate::{
    middlewares::auth::auth_middleware,
    routes::apply_routes,
    services::places_client::places_service::PlacesService,
    types::app_state::AppState,
};
use axum::{middleware, routing::get, Router};
use tower_http::cors::CorsLayer;

pub fn gen_app(provider_host: &str, provider_api_key: &str, auth_key: Option<String>) -> Router {
    let places_service = PlacesService::new(provider_host);
    places_service.initialize(provider_api_key);

    let state = AppState {
        places_service,
        auth_key,
    };

    apply_routes(Router::new())
        .route("/", get(root))
        .layer(CorsLayer::new())
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ))
        .with_state(state)
}

async fn root() -> &'static str {
    "places-api"
}

#[cfg(test)]
pub struct MockApp {
    pub app: Router,
    pub provider_server: mockito::ServerGuard,
}

/// Builds an app whose provider host points at a fresh mockito server.
#[cfg(test)]
pub async fn gen_mock_app() -> MockApp {
    let provider_server = mockito::Server::new_async().await;

    MockApp {
        app: gen_app(provider_server.url().as_str(), "test-key", None),
        provider_server,
    }
}
