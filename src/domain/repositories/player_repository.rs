use async_trait::async_trait;

use crate::domain::entities::Player;
use crate::domain::repositories::RepositoryError;

/// Roster store. Every query is scoped to the owning user.
#[async_trait]
pub trait PlayerRepository: Send + Sync {
    /// Find one of the owner's players
    async fn find_by_id(&self, owner_id: &str, id: &str) -> Result<Option<Player>, RepositoryError>;

    /// The owner's roster, newest first
    async fn find_by_owner(&self, owner_id: &str) -> Result<Vec<Player>, RepositoryError>;

    async fn count_by_owner(&self, owner_id: &str) -> Result<usize, RepositoryError>;

    /// Insert a new player; fails with `AlreadyExists` on a duplicate id
    async fn insert(&self, player: &Player) -> Result<(), RepositoryError>;

    /// Overwrite the editable fields of an existing player
    async fn update(&self, player: &Player) -> Result<(), RepositoryError>;

    /// Delete a player and its attendance. Returns false if nothing matched.
    async fn delete(&self, owner_id: &str, id: &str) -> Result<bool, RepositoryError>;
}
