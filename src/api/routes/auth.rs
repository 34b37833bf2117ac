use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use crate::api::dto::{api_error, internal_error, timestamp_to_rfc3339, ApiError};
use crate::application::auth::{
    LoginError, LoginUser, LoginUserInput, RegisterError, RegisterUser, RegisterUserInput,
};
use crate::domain::entities::User;
use crate::infrastructure::app_state::AppState;

/// Create auth router
pub fn create_auth_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/register", post(register_handler))
        .route("/login", post(login_handler))
}

// ========== DTOs ==========

#[derive(Deserialize)]
pub struct CredentialsRequest {
    username: Option<String>,
    password: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    success: bool,
    user: UserInfo,
    token: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    id: String,
    username: String,
    created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_login_at: Option<String>,
}

impl From<&User> for UserInfo {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            username: user.username.clone(),
            created_at: timestamp_to_rfc3339(user.created_at),
            last_login_at: user.last_login_at.map(timestamp_to_rfc3339),
        }
    }
}

// ========== Handlers ==========

fn credentials(req: CredentialsRequest) -> Result<(String, String), ApiError> {
    match (
        req.username.filter(|s| !s.is_empty()),
        req.password.filter(|s| !s.is_empty()),
    ) {
        (Some(username), Some(password)) => Ok((username, password)),
        _ => Err(api_error(
            StatusCode::BAD_REQUEST,
            "MISSING_CREDENTIALS",
            "Username and password are required",
        )),
    }
}

async fn register_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CredentialsRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    let (username, password) = credentials(req)?;

    let use_case = RegisterUser::new(state.user_repo.clone(), state.jwt_service.clone());

    match use_case.execute(RegisterUserInput { username, password }).await {
        Ok(output) => Ok((
            StatusCode::CREATED,
            Json(AuthResponse {
                success: true,
                user: UserInfo::from(&output.user),
                token: output.token,
            }),
        )),
        Err(RegisterError::Validation(msg)) => Err(api_error(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg)),
        Err(RegisterError::UsernameExists) => Err(api_error(
            StatusCode::CONFLICT,
            "USERNAME_EXISTS",
            "Username already exists",
        )),
        Err(e) => {
            tracing::error!("Registration failed: {}", e);
            Err(internal_error("REGISTRATION_ERROR", "Registration failed", e))
        }
    }
}

async fn login_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CredentialsRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let (username, password) = credentials(req)?;

    let use_case = LoginUser::new(state.user_repo.clone(), state.jwt_service.clone());

    match use_case.execute(LoginUserInput { username, password }).await {
        Ok(output) => Ok(Json(AuthResponse {
            success: true,
            user: UserInfo::from(&output.user),
            token: output.token,
        })),
        Err(LoginError::Validation(msg)) => Err(api_error(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg)),
        Err(LoginError::InvalidCredentials) => Err(api_error(
            StatusCode::UNAUTHORIZED,
            "INVALID_CREDENTIALS",
            "Invalid username or password",
        )),
        Err(e) => {
            tracing::error!("Login failed: {}", e);
            Err(internal_error("LOGIN_ERROR", "Login failed", e))
        }
    }
}
