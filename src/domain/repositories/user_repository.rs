use async_trait::async_trait;

use crate::domain::entities::User;

/// Error type for repository operations
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Already exists: {0}")]
    AlreadyExists(String),
    #[error("Database error: {0}")]
    Database(String),
}

/// User repository trait
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by username
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError>;

    /// Check if username exists
    async fn exists_by_username(&self, username: &str) -> Result<bool, RepositoryError>;

    /// Save user (create or update)
    async fn save(&self, user: &User) -> Result<(), RepositoryError>;

    /// Update last login timestamp
    async fn update_last_login(&self, id: &str) -> Result<(), RepositoryError>;
}
