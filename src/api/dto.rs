use axum::{http::StatusCode, Json};
use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::entities::{self, Player, TeamSheet, TeamSide, TeamSplit};

/// Error body shared by every route
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

pub type ApiError = (StatusCode, Json<ErrorResponse>);

pub fn api_error(status: StatusCode, code: &str, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
            code: code.to_string(),
            details: None,
        }),
    )
}

/// 500 carrying the underlying failure in `details`
pub fn internal_error(code: &str, message: &str, cause: impl ToString) -> ApiError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: message.to_string(),
            code: code.to_string(),
            details: Some(cause.to_string()),
        }),
    )
}

/// Convert timestamp to RFC3339 string
pub fn timestamp_to_rfc3339(ts: i64) -> String {
    chrono::DateTime::from_timestamp(ts, 0)
        .map(|dt| dt.to_rfc3339())
        .unwrap_or_else(|| "1970-01-01T00:00:00Z".to_string())
}

/// `?date=` value, today when absent
pub fn date_or_today(date: Option<&str>) -> Result<NaiveDate, ApiError> {
    match date.filter(|d| !d.is_empty()) {
        None => Ok(entities::today()),
        Some(d) => entities::parse_date(d).ok_or_else(|| {
            api_error(
                StatusCode::BAD_REQUEST,
                "INVALID_DATE",
                format!("Invalid date '{}', expected YYYY-MM-DD", d),
            )
        }),
    }
}

// ============================================================================
// Shared response DTOs
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerResponse {
    pub id: String,
    pub name: String,
    pub rating: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    pub avatar: String,
    pub games_played: i64,
    pub total_rating: f64,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Player> for PlayerResponse {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id.clone(),
            name: player.name.clone(),
            rating: player.rating.value(),
            position: player.position.map(|p| p.as_str().to_string()),
            avatar: player.avatar.clone(),
            games_played: player.games_played,
            total_rating: player.total_rating,
            created_at: timestamp_to_rfc3339(player.created_at),
            updated_at: timestamp_to_rfc3339(player.updated_at),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamResponse {
    pub side: TeamSide,
    pub name: String,
    pub icon: String,
    pub players: Vec<PlayerResponse>,
    pub total_rating: f64,
    pub average_rating: f64,
}

impl TeamResponse {
    fn new(split: &TeamSplit, side: TeamSide) -> Self {
        Self {
            side,
            name: side.display_name().to_string(),
            icon: side.icon().to_string(),
            players: split.players(side).iter().map(PlayerResponse::from).collect(),
            total_rating: split.total_rating(side),
            average_rating: split.average_rating(side),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSheetResponse {
    pub date: String,
    pub team1: TeamResponse,
    pub team2: TeamResponse,
    pub average_gap: f64,
    pub well_balanced: bool,
    pub generated_at: String,
}

impl From<&TeamSheet> for TeamSheetResponse {
    fn from(sheet: &TeamSheet) -> Self {
        Self {
            date: sheet.date.format("%Y-%m-%d").to_string(),
            team1: TeamResponse::new(&sheet.split, TeamSide::Team1),
            team2: TeamResponse::new(&sheet.split, TeamSide::Team2),
            average_gap: sheet.split.average_gap(),
            well_balanced: sheet.split.is_well_balanced(),
            generated_at: timestamp_to_rfc3339(sheet.generated_at),
        }
    }
}
