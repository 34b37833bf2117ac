use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    Extension,
};
use serde::{Deserialize, Serialize};

use crate::api::dto::{api_error, date_or_today, internal_error, ApiError, TeamSheetResponse};
use crate::api::middleware::Claims;
use crate::api::AppState;
use crate::application::teams::{
    GenerateTeams, GenerateTeamsError, GenerateTeamsInput, GetTeams, GetTeamsError, TossCoin, TOSS_PRIZE,
};
use crate::domain::entities::TeamSide;
use crate::infrastructure::app_state::RosterEvent;

// ============================================================================
// Request/Response DTOs
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct GenerateTeamsRequest {
    pub date: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TeamsEnvelope {
    pub success: bool,
    pub teams: TeamSheetResponse,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinTossResponse {
    pub success: bool,
    pub winner: TeamSide,
    pub winner_name: String,
    pub choice: String,
    pub message: String,
}

fn not_generated() -> ApiError {
    api_error(
        StatusCode::UNPROCESSABLE_ENTITY,
        "TEAMS_NOT_GENERATED",
        GetTeamsError::NotGenerated.to_string(),
    )
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST /api/teams - Balance the day's attendees into two teams
pub async fn generate_teams(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    body: Option<Json<GenerateTeamsRequest>>,
) -> Result<Json<TeamsEnvelope>, ApiError> {
    let body = body.map(|Json(b)| b).unwrap_or_default();
    let date = date_or_today(body.date.as_deref())?;

    let use_case = GenerateTeams::new(
        state.player_repo.clone(),
        state.attendance_repo.clone(),
        state.team_sheets.clone(),
    );
    let sheet = use_case
        .execute(GenerateTeamsInput {
            owner_id: claims.user_id.clone(),
            date,
        })
        .await
        .map_err(|e| match e {
            GenerateTeamsError::NotEnoughPlayers { .. } => {
                api_error(StatusCode::UNPROCESSABLE_ENTITY, "NOT_ENOUGH_PLAYERS", e.to_string())
            }
            GenerateTeamsError::Repository(e) => {
                internal_error("GENERATE_TEAMS_ERROR", "Failed to generate teams", e)
            }
        })?;

    let teams = TeamSheetResponse::from(&sheet);
    state.broadcast_event(
        RosterEvent::new("teamsGenerated", &claims.user_id).with_data(serde_json::json!({ "teams": &teams })),
    );

    Ok(Json(TeamsEnvelope { success: true, teams }))
}

/// GET /api/teams - Current team split
pub async fn get_teams(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<TeamsEnvelope>, ApiError> {
    let sheet = GetTeams::new(state.team_sheets.clone())
        .execute(&claims.user_id)
        .await
        .map_err(|_| not_generated())?;

    Ok(Json(TeamsEnvelope {
        success: true,
        teams: TeamSheetResponse::from(&sheet),
    }))
}

/// POST /api/teams/coin-toss - Decide who picks ball or side
pub async fn coin_toss(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<CoinTossResponse>, ApiError> {
    let output = TossCoin::new(state.team_sheets.clone())
        .execute(&claims.user_id)
        .await
        .map_err(|_| not_generated())?;

    state.broadcast_event(
        RosterEvent::new("coinTossed", &claims.user_id).with_data(serde_json::json!({ "winner": output.winner })),
    );

    Ok(Json(CoinTossResponse {
        success: true,
        winner: output.winner,
        winner_name: output.winner.display_name().to_string(),
        choice: TOSS_PRIZE.to_string(),
        message: output.message(),
    }))
}
