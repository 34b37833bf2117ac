use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::Player;
use crate::domain::repositories::{PlayerRepository, RepositoryError};
use crate::domain::services::{GateError, RosterGate};
use crate::domain::value_objects::PlayerProfile;

/// Add player input
pub struct AddPlayerInput {
    pub owner_id: String,
    pub name: String,
    pub rating: Option<f64>,
    pub position: Option<String>,
    pub avatar: Option<String>,
    /// Roster key; only checked once the roster is non-empty
    pub key: Option<String>,
}

/// Add player output
#[derive(Debug)]
pub struct AddPlayerOutput {
    pub player: Player,
}

/// Add player use case
pub struct AddPlayer<P: PlayerRepository> {
    player_repo: Arc<P>,
    gate: Arc<RosterGate>,
}

impl<P: PlayerRepository> AddPlayer<P> {
    pub fn new(player_repo: Arc<P>, gate: Arc<RosterGate>) -> Self {
        Self { player_repo, gate }
    }

    pub async fn execute(&self, input: AddPlayerInput) -> Result<AddPlayerOutput, AddPlayerError> {
        let profile = PlayerProfile::parse(
            &input.name,
            input.rating,
            input.position.as_deref(),
            input.avatar.as_deref(),
        )
        .map_err(|e| AddPlayerError::Validation(e.to_string()))?;

        let roster_size = self.player_repo.count_by_owner(&input.owner_id).await?;
        if let Err(e) = self.gate.check_add(roster_size, input.key.as_deref()) {
            tracing::warn!("Rejected new player for {}: {}", input.owner_id, e);
            return Err(e.into());
        }

        let player = Player::new(Uuid::new_v4().to_string(), input.owner_id, profile);
        self.player_repo.insert(&player).await?;

        tracing::info!("Player {} ({}) joined the squad of {}", player.name, player.rating, player.owner_id);

        Ok(AddPlayerOutput { player })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AddPlayerError {
    #[error("Validation error: {0}")]
    Validation(String),
    #[error(transparent)]
    Gate(#[from] GateError),
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{player, InMemoryPlayers, KEY, OWNER};

    fn input(name: &str, key: Option<&str>) -> AddPlayerInput {
        AddPlayerInput {
            owner_id: OWNER.to_string(),
            name: name.to_string(),
            rating: Some(7.5),
            position: Some("Defender".to_string()),
            avatar: None,
            key: key.map(str::to_string),
        }
    }

    fn use_case(repo: Arc<InMemoryPlayers>) -> AddPlayer<InMemoryPlayers> {
        AddPlayer::new(repo, Arc::new(RosterGate::new(Some(KEY.to_string()))))
    }

    #[tokio::test]
    async fn test_first_player_is_free() {
        let repo = Arc::new(InMemoryPlayers::default());

        let output = use_case(repo.clone()).execute(input("Kim", Some(""))).await.unwrap();

        assert_eq!(output.player.name, "Kim");
        assert_eq!(output.player.games_played, 0);
        assert_eq!(output.player.total_rating, 7.5);
        assert_eq!(repo.snapshot().len(), 1);
    }

    #[tokio::test]
    async fn test_second_player_needs_key() {
        let repo = Arc::new(InMemoryPlayers::with(vec![player("first", 6.0)]));
        let add = use_case(repo.clone());

        let err = add.execute(input("Kim", Some("wrong"))).await.unwrap_err();
        assert!(matches!(err, AddPlayerError::Gate(GateError::InvalidKey)));

        let err = add.execute(input("Kim", None)).await.unwrap_err();
        assert!(matches!(err, AddPlayerError::Gate(GateError::MissingKey)));
        assert_eq!(repo.snapshot().len(), 1);

        add.execute(input("Kim", Some(KEY))).await.unwrap();
        assert_eq!(repo.snapshot().len(), 2);
    }

    #[tokio::test]
    async fn test_other_owners_do_not_count() {
        let mut stranger = player("theirs", 6.0);
        stranger.owner_id = "owner-2".to_string();
        let repo = Arc::new(InMemoryPlayers::with(vec![stranger]));

        use_case(repo).execute(input("Kim", None)).await.unwrap();
    }

    #[tokio::test]
    async fn test_validation_runs_before_store() {
        let repo = Arc::new(InMemoryPlayers::default());
        repo.set_failing();

        let err = use_case(repo).execute(input("  ", None)).await.unwrap_err();
        assert!(matches!(err, AddPlayerError::Validation(_)));
    }

    #[tokio::test]
    async fn test_store_failure_surfaces() {
        let repo = Arc::new(InMemoryPlayers::default());
        repo.set_failing();

        let err = use_case(repo).execute(input("Kim", None)).await.unwrap_err();
        assert!(matches!(err, AddPlayerError::Repository(_)));
    }
}
