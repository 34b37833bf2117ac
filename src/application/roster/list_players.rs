use std::sync::Arc;

use crate::domain::entities::Player;
use crate::domain::repositories::{PlayerRepository, RepositoryError};

/// List players use case
pub struct ListPlayers<P: PlayerRepository> {
    player_repo: Arc<P>,
}

impl<P: PlayerRepository> ListPlayers<P> {
    pub fn new(player_repo: Arc<P>) -> Self {
        Self { player_repo }
    }

    /// The owner's roster, newest first
    pub async fn execute(&self, owner_id: &str) -> Result<Vec<Player>, RepositoryError> {
        let players = self.player_repo.find_by_owner(owner_id).await?;
        tracing::debug!("Loaded {} players for {}", players.len(), owner_id);
        Ok(players)
    }
}
