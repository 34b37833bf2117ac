use serde::{Deserialize, Serialize};

/// User entity - the owner every roster and attendance row is scoped to
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub last_login_at: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl User {
    pub fn new(id: String, username: String, password_hash: String) -> Self {
        let now = chrono::Utc::now().timestamp();
        Self {
            id,
            username,
            password_hash,
            last_login_at: None,
            created_at: now,
            updated_at: now,
        }
    }
}
