use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::User;
use crate::domain::repositories::{RepositoryError, UserRepository};
use crate::infrastructure::auth::{JwtService, PasswordService};

/// Register user input
pub struct RegisterUserInput {
    pub username: String,
    pub password: String,
}

/// Register user output
#[derive(Debug)]
pub struct RegisterUserOutput {
    pub user: User,
    pub token: String,
}

/// Register user use case
pub struct RegisterUser {
    user_repo: Arc<dyn UserRepository>,
    jwt_service: Arc<JwtService>,
}

impl RegisterUser {
    pub fn new(user_repo: Arc<dyn UserRepository>, jwt_service: Arc<JwtService>) -> Self {
        Self {
            user_repo,
            jwt_service,
        }
    }

    pub async fn execute(&self, input: RegisterUserInput) -> Result<RegisterUserOutput, RegisterError> {
        let username = input.username.trim();
        if username.is_empty() {
            return Err(RegisterError::Validation("Username is required".into()));
        }
        if username.len() < 3 {
            return Err(RegisterError::Validation("Username must be at least 3 characters".into()));
        }
        if input.password.len() < 6 {
            return Err(RegisterError::Validation("Password must be at least 6 characters".into()));
        }

        if self.user_repo.exists_by_username(username).await? {
            return Err(RegisterError::UsernameExists);
        }

        let password_hash = PasswordService::hash(&input.password)
            .map_err(|e| RegisterError::Internal(e.to_string()))?;

        let user = User::new(Uuid::new_v4().to_string(), username.to_string(), password_hash);

        match self.user_repo.save(&user).await {
            Ok(()) => {}
            // lost a race with another registration of the same name
            Err(RepositoryError::AlreadyExists(_)) => return Err(RegisterError::UsernameExists),
            Err(e) => return Err(e.into()),
        }

        let token = self
            .jwt_service
            .sign(&user.id, &user.username)
            .map_err(|e| RegisterError::Internal(e.to_string()))?;

        tracing::info!("Registered user {} ({})", user.username, user.id);

        Ok(RegisterUserOutput { user, token })
    }
}

/// Register error types
#[derive(Debug, thiserror::Error)]
pub enum RegisterError {
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Username already exists")]
    UsernameExists,
    #[error("Internal error: {0}")]
    Internal(String),
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}
