pub mod dto;
pub mod middleware;
pub mod routes;
pub mod sse;

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

// Re-export for convenience
pub use crate::infrastructure::app_state::AppState;

/// Requests taking longer than this are answered with 408
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Full HTTP surface: `/api/*` plus `/health`
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .nest("/api", routes::create_api_router(state.clone()))
        .route("/health", axum::routing::get(routes::health::health_handler))
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
