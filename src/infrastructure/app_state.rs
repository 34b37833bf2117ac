use std::sync::Arc;
use std::time::Instant;

use async_broadcast::{broadcast, InactiveReceiver, Sender, TrySendError};
use sqlx::SqlitePool;

use crate::domain::services::RosterGate;
use crate::infrastructure::auth::JwtService;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::database;
use crate::infrastructure::database::repositories::{
    SqliteAttendanceRepository, SqlitePlayerRepository, SqliteUserRepository,
};
use crate::infrastructure::services::TeamSheetStore;

/// Events kept for slow SSE subscribers before the oldest are dropped
const EVENT_CAPACITY: usize = 256;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,

    /// JWT service for token management
    pub jwt_service: Arc<JwtService>,

    /// Shared-key check for roster edits
    pub roster_gate: Arc<RosterGate>,

    /// User repository
    pub user_repo: Arc<SqliteUserRepository>,

    /// Roster store
    pub player_repo: Arc<SqlitePlayerRepository>,

    /// Attendance store
    pub attendance_repo: Arc<SqliteAttendanceRepository>,

    /// Current team split per owner
    pub team_sheets: Arc<TeamSheetStore>,

    /// Event broadcaster for SSE
    pub event_sender: Sender<RosterEvent>,
    /// Keeps the channel open while nobody is subscribed
    pub event_receiver: InactiveReceiver<RosterEvent>,

    /// When the service came up, for health uptime
    pub started_at: Instant,
}

impl AppState {
    pub async fn new(config: &AppConfig) -> anyhow::Result<Self> {
        tracing::info!("Connecting to database: {}", config.database_url);

        let db = database::connect(&config.database_url).await?;

        let jwt_service = Arc::new(JwtService::new(&config.jwt_secret));
        let roster_gate = Arc::new(RosterGate::new(config.roster_key.clone()));
        tracing::debug!("Roster key configured: {}", roster_gate.is_configured());

        let user_repo = Arc::new(SqliteUserRepository::new(db.clone()));
        let player_repo = Arc::new(SqlitePlayerRepository::new(db.clone()));
        let attendance_repo = Arc::new(SqliteAttendanceRepository::new(db.clone()));

        let (mut event_sender, event_receiver) = broadcast(EVENT_CAPACITY);
        event_sender.set_overflow(true);

        Ok(Self {
            db,
            jwt_service,
            roster_gate,
            user_repo,
            player_repo,
            attendance_repo,
            team_sheets: Arc::new(TeamSheetStore::new()),
            event_sender,
            event_receiver: event_receiver.deactivate(),
            started_at: Instant::now(),
        })
    }

    /// Broadcast an event to the owner's connected SSE clients
    pub fn broadcast_event(&self, event: RosterEvent) {
        tracing::debug!(
            "Broadcasting event '{}' to {} receivers",
            event.event_type,
            self.event_sender.receiver_count()
        );
        match self.event_sender.try_broadcast(event) {
            Ok(None) => {}
            Ok(Some(dropped)) => {
                tracing::debug!("Event queue full, dropped oldest '{}'", dropped.event_type);
            }
            Err(TrySendError::Inactive(_)) => {
                tracing::trace!("No active subscribers");
            }
            Err(e) => {
                tracing::warn!("Failed to broadcast event: {:?}", e);
            }
        }
    }
}

/// Roster change event for SSE broadcasting
#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterEvent {
    #[serde(rename = "type")]
    pub event_type: String,
    /// Only subscribers authenticated as this owner receive the event
    #[serde(skip)]
    pub owner_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_id: Option<String>,
    /// Additional data fields (flattened into root)
    #[serde(flatten)]
    pub data: serde_json::Value,
    pub timestamp: i64,
}

impl RosterEvent {
    pub fn new(event_type: &str, owner_id: &str) -> Self {
        Self {
            event_type: event_type.to_string(),
            owner_id: owner_id.to_string(),
            player_id: None,
            data: serde_json::Value::Object(serde_json::Map::new()),
            timestamp: chrono::Utc::now().timestamp_millis(),
        }
    }

    pub fn with_player(mut self, player_id: &str) -> Self {
        self.player_id = Some(player_id.to_string());
        self
    }

    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = data;
        self
    }
}
