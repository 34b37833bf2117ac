use std::sync::Arc;

use crate::domain::entities::Player;
use crate::domain::repositories::{PlayerRepository, RepositoryError};
use crate::domain::services::{GateError, RosterGate};
use crate::domain::value_objects::ProfileChanges;
use crate::infrastructure::services::TeamSheetStore;

/// Update player input
pub struct UpdatePlayerInput {
    pub owner_id: String,
    pub player_id: String,
    /// Fields left as `None` keep their stored value
    pub name: Option<String>,
    pub rating: Option<f64>,
    pub position: Option<String>,
    pub avatar: Option<String>,
    pub key: Option<String>,
}

/// Update player output
#[derive(Debug)]
pub struct UpdatePlayerOutput {
    pub player: Player,
    /// The owner's team sheet was dropped because a rating may have changed
    pub teams_cleared: bool,
}

/// Update player use case
pub struct UpdatePlayer<P: PlayerRepository> {
    player_repo: Arc<P>,
    gate: Arc<RosterGate>,
    team_sheets: Arc<TeamSheetStore>,
}

impl<P: PlayerRepository> UpdatePlayer<P> {
    pub fn new(player_repo: Arc<P>, gate: Arc<RosterGate>, team_sheets: Arc<TeamSheetStore>) -> Self {
        Self {
            player_repo,
            gate,
            team_sheets,
        }
    }

    pub async fn execute(&self, input: UpdatePlayerInput) -> Result<UpdatePlayerOutput, UpdatePlayerError> {
        let changes = ProfileChanges::parse(
            input.name.as_deref(),
            input.rating,
            input.position.as_deref(),
            input.avatar.as_deref(),
        )
        .map_err(|e| UpdatePlayerError::Validation(e.to_string()))?;

        if let Err(e) = self.gate.check_edit(input.key.as_deref()) {
            tracing::warn!("Rejected edit of player {}: {}", input.player_id, e);
            return Err(e.into());
        }

        let mut player = self
            .player_repo
            .find_by_id(&input.owner_id, &input.player_id)
            .await?
            .ok_or(UpdatePlayerError::PlayerNotFound)?;

        player.apply_changes(changes);
        match self.player_repo.update(&player).await {
            Ok(()) => {}
            Err(RepositoryError::NotFound(_)) => return Err(UpdatePlayerError::PlayerNotFound),
            Err(e) => return Err(e.into()),
        }

        let teams_cleared = self.team_sheets.discard(&input.owner_id).await;

        tracing::info!("Player {} updated", player.id);

        Ok(UpdatePlayerOutput {
            player,
            teams_cleared,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum UpdatePlayerError {
    #[error("Validation error: {0}")]
    Validation(String),
    #[error(transparent)]
    Gate(#[from] GateError),
    #[error("Player not found")]
    PlayerNotFound,
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{date, player, InMemoryPlayers, KEY, OWNER};
    use crate::domain::entities::{Position, TeamSheet, TeamSplit};

    fn input(player_id: &str, key: Option<&str>) -> UpdatePlayerInput {
        UpdatePlayerInput {
            owner_id: OWNER.to_string(),
            player_id: player_id.to_string(),
            name: Some("Renamed".to_string()),
            rating: Some(9.0),
            position: Some("Forward".to_string()),
            avatar: Some("🔥".to_string()),
            key: key.map(str::to_string),
        }
    }

    fn use_case(repo: Arc<InMemoryPlayers>, sheets: Arc<TeamSheetStore>) -> UpdatePlayer<InMemoryPlayers> {
        UpdatePlayer::new(repo, Arc::new(RosterGate::new(Some(KEY.to_string()))), sheets)
    }

    #[tokio::test]
    async fn test_update_with_key() {
        let repo = Arc::new(InMemoryPlayers::with(vec![player("p1", 5.0)]));
        let sheets = Arc::new(TeamSheetStore::new());
        sheets.put(OWNER, TeamSheet::new(TeamSplit::default(), date())).await;

        let output = use_case(repo.clone(), sheets.clone())
            .execute(input("p1", Some(KEY)))
            .await
            .unwrap();

        assert!(output.teams_cleared);
        assert!(sheets.get(OWNER).await.is_none());

        let stored = &repo.snapshot()[0];
        assert_eq!(stored.name, "Renamed");
        assert_eq!(stored.rating.value(), 9.0);
        assert_eq!(stored.position, Some(Position::Forward));
        assert_eq!(stored.total_rating, 5.0);
    }

    #[tokio::test]
    async fn test_update_rejects_wrong_key() {
        let repo = Arc::new(InMemoryPlayers::with(vec![player("p1", 5.0)]));

        let err = use_case(repo.clone(), Arc::new(TeamSheetStore::new()))
            .execute(input("p1", Some("nope")))
            .await
            .unwrap_err();

        assert!(matches!(err, UpdatePlayerError::Gate(GateError::InvalidKey)));
        assert_eq!(repo.snapshot()[0].name, "p1");
    }

    #[tokio::test]
    async fn test_update_unknown_player() {
        let repo = Arc::new(InMemoryPlayers::default());

        let err = use_case(repo, Arc::new(TeamSheetStore::new()))
            .execute(input("ghost", Some(KEY)))
            .await
            .unwrap_err();

        assert!(matches!(err, UpdatePlayerError::PlayerNotFound));
    }

    #[tokio::test]
    async fn test_name_only_update_keeps_rating_and_profile() {
        let repo = Arc::new(InMemoryPlayers::with(vec![player("p1", 9.5)]));
        let update = UpdatePlayerInput {
            name: Some("Star Renamed".to_string()),
            rating: None,
            position: None,
            avatar: None,
            ..input("p1", Some(KEY))
        };

        let output = use_case(repo.clone(), Arc::new(TeamSheetStore::new()))
            .execute(update)
            .await
            .unwrap();

        assert_eq!(output.player.name, "Star Renamed");
        let stored = &repo.snapshot()[0];
        assert_eq!(stored.rating.value(), 9.5);
        assert_eq!(stored.avatar, player("p1", 9.5).avatar);
    }

    #[tokio::test]
    async fn test_blank_name_is_rejected_before_the_store() {
        let repo = Arc::new(InMemoryPlayers::with(vec![player("p1", 5.0)]));
        let update = UpdatePlayerInput {
            name: Some("   ".to_string()),
            ..input("p1", Some(KEY))
        };

        let err = use_case(repo.clone(), Arc::new(TeamSheetStore::new()))
            .execute(update)
            .await
            .unwrap_err();

        assert!(matches!(err, UpdatePlayerError::Validation(_)));
        assert_eq!(repo.snapshot()[0].name, "p1");
    }
}
