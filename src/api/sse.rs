use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::sse::{Event, KeepAlive, Sse},
};
use futures::stream::Stream;
use serde::Deserialize;

use crate::infrastructure::app_state::AppState;

#[derive(Deserialize)]
pub struct SseParams {
    token: Option<String>,
}

/// GET /api/events?token= - Live roster updates for the token's owner
pub async fn sse_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SseParams>,
) -> Result<Sse<impl Stream<Item = Result<Event, Infallible>>>, StatusCode> {
    // EventSource cannot set headers, so the token travels in the query
    let claims = params
        .token
        .as_deref()
        .and_then(|token| state.jwt_service.verify(token).ok())
        .ok_or(StatusCode::UNAUTHORIZED)?;

    let mut receiver = state.event_receiver.activate_cloned();
    let owner_id = claims.user_id;

    let stream = async_stream::stream! {
        tracing::debug!("SSE stream started for {}", owner_id);

        yield Ok(Event::default()
            .event("connected")
            .data(serde_json::json!({
                "message": "Connected to SSE stream",
                "timestamp": chrono::Utc::now().timestamp_millis()
            }).to_string()));

        let mut heartbeat_interval = tokio::time::interval(Duration::from_secs(20));

        loop {
            tokio::select! {
                _ = heartbeat_interval.tick() => {
                    yield Ok(Event::default().comment("heartbeat"));
                }
                result = receiver.recv() => {
                    match result {
                        Ok(event) if event.owner_id == owner_id => {
                            tracing::debug!("SSE sending '{}' to {}", event.event_type, owner_id);
                            let json = serde_json::to_string(&event).unwrap_or_default();
                            yield Ok(Event::default().event("event").data(json));
                        }
                        Ok(_) => {}
                        Err(async_broadcast::RecvError::Overflowed(missed)) => {
                            tracing::warn!("SSE subscriber {} lagging, skipped {} events", owner_id, missed);
                        }
                        Err(e) => {
                            tracing::warn!("SSE receiver error: {:?}, closing stream", e);
                            break;
                        }
                    }
                }
            }
        }

        tracing::debug!("SSE stream closed for {}", owner_id);
    };

    Ok(Sse::new(stream).keep_alive(KeepAlive::default()))
}
