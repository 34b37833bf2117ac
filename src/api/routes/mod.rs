pub mod attendance;
pub mod auth;
pub mod health;
pub mod players;
pub mod teams;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};

use crate::api::middleware::auth_middleware;
use crate::api::sse;
use crate::api::AppState;

/// Create the main API router
pub fn create_api_router(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .nest("/auth", auth::create_auth_router())
        .nest("/players", create_players_router(state.clone()))
        .nest("/attendance", create_attendance_router(state.clone()))
        .nest("/teams", create_teams_router(state.clone()))
        .route("/events", get(sse::sse_handler))
        .with_state(state)
}

/// Create players router
fn create_players_router(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(players::list_players).post(players::add_player))
        .route(
            "/:playerId",
            put(players::update_player).delete(players::delete_player),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware))
        .with_state(state)
}

/// Create attendance router
fn create_attendance_router(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/",
            get(attendance::get_attendance).put(attendance::set_all_attendance),
        )
        .route("/:playerId", put(attendance::set_attendance))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware))
        .with_state(state)
}

/// Create teams router
fn create_teams_router(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(teams::get_teams).post(teams::generate_teams))
        .route("/coin-toss", post(teams::coin_toss))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware))
        .with_state(state)
}
