use std::sync::Arc;

use crate::domain::repositories::{PlayerRepository, RepositoryError};
use crate::domain::services::{GateError, RosterGate};
use crate::infrastructure::services::TeamSheetStore;

/// Delete player input
pub struct DeletePlayerInput {
    pub owner_id: String,
    pub player_id: String,
    pub key: Option<String>,
}

/// Delete player output
#[derive(Debug)]
pub struct DeletePlayerOutput {
    pub deleted_player_id: String,
    pub deleted_player_name: String,
    pub teams_cleared: bool,
}

/// Delete player use case
pub struct DeletePlayer<P: PlayerRepository> {
    player_repo: Arc<P>,
    gate: Arc<RosterGate>,
    team_sheets: Arc<TeamSheetStore>,
}

impl<P: PlayerRepository> DeletePlayer<P> {
    pub fn new(player_repo: Arc<P>, gate: Arc<RosterGate>, team_sheets: Arc<TeamSheetStore>) -> Self {
        Self {
            player_repo,
            gate,
            team_sheets,
        }
    }

    pub async fn execute(&self, input: DeletePlayerInput) -> Result<DeletePlayerOutput, DeletePlayerError> {
        if let Err(e) = self.gate.check_edit(input.key.as_deref()) {
            tracing::warn!("Rejected removal of player {}: {}", input.player_id, e);
            return Err(e.into());
        }

        let player = self
            .player_repo
            .find_by_id(&input.owner_id, &input.player_id)
            .await?
            .ok_or(DeletePlayerError::PlayerNotFound)?;

        if !self.player_repo.delete(&input.owner_id, &player.id).await? {
            return Err(DeletePlayerError::PlayerNotFound);
        }

        let teams_cleared = self.team_sheets.discard(&input.owner_id).await;

        tracing::info!("Player {} ({}) removed from the squad", player.name, player.id);

        Ok(DeletePlayerOutput {
            deleted_player_id: player.id,
            deleted_player_name: player.name,
            teams_cleared,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DeletePlayerError {
    #[error(transparent)]
    Gate(#[from] GateError),
    #[error("Player not found")]
    PlayerNotFound,
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}
