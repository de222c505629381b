mod app;
mod middlewares;
mod routes;
mod services;
mod types;
mod utils;

use std::env;
use tracing::info;

const DEFAULT_PROVIDER_HOST: &str = "https://maps.googleapis.com";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();
    info!("Starting places gateway...");

    let provider_api_key =
        env::var("GOOGLE_PLACES_API_KEY").expect("GOOGLE_PLACES_API_KEY must be set");
    let provider_host =
        env::var("PLACES_PROVIDER_HOST").unwrap_or_else(|_| DEFAULT_PROVIDER_HOST.to_string());
    let auth_key = env::var("GATEWAY_AUTH_KEY").ok();

    let app = app::gen_app(&provider_host, &provider_api_key, auth_key);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
