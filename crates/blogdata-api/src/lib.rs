//! Blog Data API — HTTP surface of the blog data service.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Builds the application router with all routes and middleware.
#[must_use]
pub fn app(app_state: AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .merge(routes::blog::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
