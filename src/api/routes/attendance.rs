use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    Extension,
};
use serde::{Deserialize, Serialize};

use crate::api::dto::{api_error, date_or_today, internal_error, ApiError, PlayerResponse};
use crate::api::middleware::Claims;
use crate::api::AppState;
use crate::application::attendance::{
    GetAttendance, SetAllAttendance, SetAllAttendanceInput, SetAttendance, SetAttendanceError,
    SetAttendanceInput,
};
use crate::infrastructure::app_state::RosterEvent;

// ============================================================================
// Request/Response DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct DateQuery {
    pub date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SetAttendanceRequest {
    /// Omitted means toggle
    pub attending: Option<bool>,
    pub date: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceResponse {
    pub success: bool,
    pub date: String,
    pub attendee_ids: Vec<String>,
    pub attendees: Vec<PlayerResponse>,
    pub count: usize,
    pub roster_size: usize,
    pub average_rating: f64,
    pub ready_for_teams: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetAttendanceResponse {
    pub success: bool,
    pub player_id: String,
    pub date: String,
    pub is_attending: bool,
    pub teams_cleared: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetAllAttendanceResponse {
    pub success: bool,
    pub date: String,
    pub is_attending: bool,
    pub updated: usize,
    pub teams_cleared: bool,
}

fn format_date(date: chrono::NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /api/attendance?date= - Who is in on a day
pub async fn get_attendance(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Query(query): Query<DateQuery>,
) -> Result<Json<AttendanceResponse>, ApiError> {
    let date = date_or_today(query.date.as_deref())?;

    let output = GetAttendance::new(state.player_repo.clone(), state.attendance_repo.clone())
        .execute(&claims.user_id, date)
        .await
        .map_err(|e| internal_error("ATTENDANCE_ERROR", "Failed to load attendance", e))?;

    Ok(Json(AttendanceResponse {
        success: true,
        date: format_date(output.date),
        attendee_ids: output.attendee_ids(),
        attendees: output.attendees.iter().map(PlayerResponse::from).collect(),
        count: output.attendees.len(),
        roster_size: output.roster_size,
        average_rating: output.average_rating(),
        ready_for_teams: output.ready_for_teams(),
    }))
}

/// PUT /api/attendance/:playerId - Mark or toggle one player
pub async fn set_attendance(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(player_id): Path<String>,
    Json(body): Json<SetAttendanceRequest>,
) -> Result<Json<SetAttendanceResponse>, ApiError> {
    let date = date_or_today(body.date.as_deref())?;

    let use_case = SetAttendance::new(
        state.player_repo.clone(),
        state.attendance_repo.clone(),
        state.team_sheets.clone(),
    );
    let output = use_case
        .execute(SetAttendanceInput {
            owner_id: claims.user_id.clone(),
            player_id,
            attending: body.attending,
            date,
        })
        .await
        .map_err(|e| match e {
            SetAttendanceError::PlayerNotFound => {
                api_error(StatusCode::NOT_FOUND, "PLAYER_NOT_FOUND", "Player not found")
            }
            SetAttendanceError::Repository(e) => {
                internal_error("ATTENDANCE_ERROR", "Failed to update attendance", e)
            }
        })?;

    state.broadcast_event(
        RosterEvent::new("attendanceUpdated", &claims.user_id)
            .with_player(&output.record.player_id)
            .with_data(serde_json::json!({
                "date": format_date(output.record.date),
                "isAttending": output.record.is_attending,
            })),
    );
    if output.teams_cleared {
        state.broadcast_event(RosterEvent::new("teamsCleared", &claims.user_id));
    }

    Ok(Json(SetAttendanceResponse {
        success: true,
        date: format_date(output.record.date),
        player_id: output.record.player_id,
        is_attending: output.record.is_attending,
        teams_cleared: output.teams_cleared,
    }))
}

/// PUT /api/attendance - Select all / clear all
pub async fn set_all_attendance(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Json(body): Json<SetAttendanceRequest>,
) -> Result<Json<SetAllAttendanceResponse>, ApiError> {
    let date = date_or_today(body.date.as_deref())?;

    let use_case = SetAllAttendance::new(
        state.player_repo.clone(),
        state.attendance_repo.clone(),
        state.team_sheets.clone(),
    );
    let output = use_case
        .execute(SetAllAttendanceInput {
            owner_id: claims.user_id.clone(),
            attending: body.attending,
            date,
        })
        .await
        .map_err(|e| internal_error("ATTENDANCE_ERROR", "Failed to update attendance", e))?;

    state.broadcast_event(
        RosterEvent::new("attendanceUpdated", &claims.user_id).with_data(serde_json::json!({
            "date": format_date(output.date),
            "isAttending": output.is_attending,
            "all": true,
        })),
    );
    if output.teams_cleared {
        state.broadcast_event(RosterEvent::new("teamsCleared", &claims.user_id));
    }

    Ok(Json(SetAllAttendanceResponse {
        success: true,
        date: format_date(output.date),
        is_attending: output.is_attending,
        updated: output.updated,
        teams_cleared: output.teams_cleared,
    }))
}
