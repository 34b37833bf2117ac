/// Placeholder secret used when `JWT_SECRET` is unset
const DEV_JWT_SECRET: &str = "teamsheet-secret-key-change-in-production";

/// Process configuration, read from the environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// SQLite URL, always carrying the `sqlite:` prefix
    pub database_url: String,
    pub jwt_secret: String,
    /// Shared key for roster edits; `None` locks every gated edit
    pub roster_key: Option<String>,
    pub port: u16,
}

impl AppConfig {
    /// Build from environment variables. Call `dotenvy::dotenv()` first to
    /// pick up a `.env` file.
    pub fn from_env() -> Self {
        let db_path = std::env::var("DATABASE_URL")
            .or_else(|_| std::env::var("DB_PATH"))
            .unwrap_or_else(|_| "sqlite:./data/teamsheet.db".to_string());

        let jwt_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("JWT_SECRET not set - using the development secret");
            DEV_JWT_SECRET.to_string()
        });

        let roster_key = std::env::var("ROSTER_KEY")
            .or_else(|_| std::env::var("DELETION_KEY"))
            .ok()
            .filter(|k| !k.is_empty());
        if roster_key.is_none() {
            tracing::warn!("ROSTER_KEY not set - only the first player of a roster can be added");
        }

        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(9999);

        Self {
            database_url: normalize_database_url(db_path),
            jwt_secret,
            roster_key,
            port,
        }
    }

    /// In-memory database, for tests
    pub fn in_memory(jwt_secret: &str, roster_key: Option<&str>) -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            jwt_secret: jwt_secret.to_string(),
            roster_key: roster_key.map(str::to_string),
            port: 0,
        }
    }
}

/// Ensure the path has the `sqlite:` prefix
fn normalize_database_url(db_path: String) -> String {
    if db_path.starts_with("sqlite:") {
        db_path
    } else {
        format!("sqlite:{}", db_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_database_url() {
        assert_eq!(normalize_database_url("./data/x.db".into()), "sqlite:./data/x.db");
        assert_eq!(normalize_database_url("sqlite::memory:".into()), "sqlite::memory:");
    }

    #[test]
    fn test_in_memory_config() {
        let config = AppConfig::in_memory("secret", Some("key"));
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.roster_key.as_deref(), Some("key"));
    }
}
