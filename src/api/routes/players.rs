use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::Json,
    Extension,
};
use serde::{Deserialize, Serialize};

use crate::api::dto::{api_error, internal_error, ApiError, PlayerResponse};
use crate::api::middleware::{roster_key, Claims};
use crate::api::AppState;
use crate::application::roster::{
    AddPlayer, AddPlayerError, AddPlayerInput, DeletePlayer, DeletePlayerError, DeletePlayerInput,
    ListPlayers, UpdatePlayer, UpdatePlayerError, UpdatePlayerInput,
};
use crate::domain::services::GateError;
use crate::infrastructure::app_state::RosterEvent;

// ============================================================================
// Request/Response DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct PlayerRequest {
    pub name: Option<String>,
    pub rating: Option<f64>,
    pub position: Option<String>,
    pub avatar: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ListPlayersResponse {
    pub success: bool,
    pub players: Vec<PlayerResponse>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct PlayerEnvelope {
    pub success: bool,
    pub player: PlayerResponse,
    #[serde(rename = "teamsCleared")]
    pub teams_cleared: bool,
}

#[derive(Debug, Serialize)]
pub struct DeletePlayerResponse {
    pub success: bool,
    pub message: String,
    #[serde(rename = "deletedPlayerId")]
    pub deleted_player_id: String,
    #[serde(rename = "deletedPlayerName")]
    pub deleted_player_name: String,
    #[serde(rename = "teamsCleared")]
    pub teams_cleared: bool,
}

fn gate_error(e: GateError) -> ApiError {
    let code = match e {
        GateError::MissingKey => "KEY_REQUIRED",
        GateError::InvalidKey => "INVALID_KEY",
    };
    api_error(StatusCode::FORBIDDEN, code, e.to_string())
}

fn player_not_found() -> ApiError {
    api_error(StatusCode::NOT_FOUND, "PLAYER_NOT_FOUND", "Player not found")
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /api/players - List the roster, newest first
pub async fn list_players(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<ListPlayersResponse>, ApiError> {
    let players = ListPlayers::new(state.player_repo.clone())
        .execute(&claims.user_id)
        .await
        .map_err(|e| internal_error("LIST_PLAYERS_ERROR", "Failed to load players", e))?;

    Ok(Json(ListPlayersResponse {
        success: true,
        total: players.len(),
        players: players.iter().map(PlayerResponse::from).collect(),
    }))
}

/// POST /api/players - Add a player
pub async fn add_player(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    headers: HeaderMap,
    Json(body): Json<PlayerRequest>,
) -> Result<(StatusCode, Json<PlayerEnvelope>), ApiError> {
    let use_case = AddPlayer::new(state.player_repo.clone(), state.roster_gate.clone());
    let result = use_case
        .execute(AddPlayerInput {
            owner_id: claims.user_id.clone(),
            name: body.name.unwrap_or_default(),
            rating: body.rating,
            position: body.position,
            avatar: body.avatar,
            key: roster_key(&headers),
        })
        .await
        .map_err(|e| match e {
            AddPlayerError::Validation(msg) => api_error(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg),
            AddPlayerError::Gate(e) => gate_error(e),
            AddPlayerError::Repository(e) => internal_error("ADD_PLAYER_ERROR", "Failed to add player", e),
        })?;

    let player = PlayerResponse::from(&result.player);
    state.broadcast_event(
        RosterEvent::new("playerAdded", &claims.user_id)
            .with_player(&result.player.id)
            .with_data(serde_json::json!({ "player": &player })),
    );

    Ok((
        StatusCode::CREATED,
        Json(PlayerEnvelope {
            success: true,
            player,
            teams_cleared: false,
        }),
    ))
}

/// PUT /api/players/:playerId - Edit a player
pub async fn update_player(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(player_id): Path<String>,
    headers: HeaderMap,
    Json(body): Json<PlayerRequest>,
) -> Result<Json<PlayerEnvelope>, ApiError> {
    let use_case = UpdatePlayer::new(
        state.player_repo.clone(),
        state.roster_gate.clone(),
        state.team_sheets.clone(),
    );
    let result = use_case
        .execute(UpdatePlayerInput {
            owner_id: claims.user_id.clone(),
            player_id,
            name: body.name,
            rating: body.rating,
            position: body.position,
            avatar: body.avatar,
            key: roster_key(&headers),
        })
        .await
        .map_err(|e| match e {
            UpdatePlayerError::Validation(msg) => api_error(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg),
            UpdatePlayerError::Gate(e) => gate_error(e),
            UpdatePlayerError::PlayerNotFound => player_not_found(),
            UpdatePlayerError::Repository(e) => {
                internal_error("UPDATE_PLAYER_ERROR", "Failed to update player", e)
            }
        })?;

    let player = PlayerResponse::from(&result.player);
    state.broadcast_event(
        RosterEvent::new("playerUpdated", &claims.user_id)
            .with_player(&result.player.id)
            .with_data(serde_json::json!({ "player": &player })),
    );
    if result.teams_cleared {
        state.broadcast_event(RosterEvent::new("teamsCleared", &claims.user_id));
    }

    Ok(Json(PlayerEnvelope {
        success: true,
        player,
        teams_cleared: result.teams_cleared,
    }))
}

/// DELETE /api/players/:playerId - Remove a player
pub async fn delete_player(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(player_id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<DeletePlayerResponse>, ApiError> {
    let use_case = DeletePlayer::new(
        state.player_repo.clone(),
        state.roster_gate.clone(),
        state.team_sheets.clone(),
    );
    let result = use_case
        .execute(DeletePlayerInput {
            owner_id: claims.user_id.clone(),
            player_id,
            key: roster_key(&headers),
        })
        .await
        .map_err(|e| match e {
            DeletePlayerError::Gate(e) => gate_error(e),
            DeletePlayerError::PlayerNotFound => player_not_found(),
            DeletePlayerError::Repository(e) => {
                internal_error("DELETE_PLAYER_ERROR", "Failed to delete player", e)
            }
        })?;

    state.broadcast_event(RosterEvent::new("playerRemoved", &claims.user_id).with_player(&result.deleted_player_id));
    if result.teams_cleared {
        state.broadcast_event(RosterEvent::new("teamsCleared", &claims.user_id));
    }

    Ok(Json(DeletePlayerResponse {
        success: true,
        message: format!("{} removed from the squad", result.deleted_player_name),
        deleted_player_id: result.deleted_player_id,
        deleted_player_name: result.deleted_player_name,
        teams_cleared: result.teams_cleared,
    }))
}
