use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
};

use crate::infrastructure::app_state::AppState;

// Re-export Claims for use in route handlers
pub use crate::infrastructure::auth::Claims;

/// Header carrying the shared roster key
pub const ROSTER_KEY_HEADER: &str = "X-Roster-Key";

/// Extract authenticated user from request
pub async fn auth_middleware(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let token = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .ok_or(StatusCode::UNAUTHORIZED)?;

    let claims = state.jwt_service.verify(token).map_err(|e| {
        tracing::debug!("Rejected bearer token: {}", e);
        StatusCode::UNAUTHORIZED
    })?;

    request.extensions_mut().insert(claims);

    Ok(next.run(request).await)
}

/// Roster key sent with the request, if any
pub fn roster_key(headers: &axum::http::HeaderMap) -> Option<String> {
    headers
        .get(ROSTER_KEY_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(str::to_string)
}
