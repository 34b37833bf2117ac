use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::entities::{Player, Position};
use crate::domain::repositories::{PlayerRepository, RepositoryError};
use crate::domain::value_objects::Rating;

/// SQLite implementation of PlayerRepository
pub struct SqlitePlayerRepository {
    pool: SqlitePool,
}

impl SqlitePlayerRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_player(row: &sqlx::sqlite::SqliteRow) -> Result<Player, RepositoryError> {
        use sqlx::Row;

        let id: String = row.get("id");
        let rating = Rating::from_half_points(row.get("rating_half_points"))
            .map_err(|e| RepositoryError::Database(format!("player {}: {}", id, e)))?;
        let position_str: Option<String> = row.get("position");

        Ok(Player {
            id,
            owner_id: row.get("owner_id"),
            name: row.get("name"),
            rating,
            position: position_str.as_deref().and_then(Position::from_str),
            avatar: row.get("avatar"),
            games_played: row.get("games_played"),
            total_rating: row.get("total_rating"),
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        })
    }
}

#[async_trait]
impl PlayerRepository for SqlitePlayerRepository {
    async fn find_by_id(&self, owner_id: &str, id: &str) -> Result<Option<Player>, RepositoryError> {
        let row = sqlx::query("SELECT * FROM players WHERE id = ? AND owner_id = ?")
            .bind(id)
            .bind(owner_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        row.as_ref().map(Self::row_to_player).transpose()
    }

    async fn find_by_owner(&self, owner_id: &str) -> Result<Vec<Player>, RepositoryError> {
        let rows = sqlx::query(
            "SELECT * FROM players WHERE owner_id = ? ORDER BY created_at DESC, rowid DESC",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::Database(e.to_string()))?;

        rows.iter().map(Self::row_to_player).collect()
    }

    async fn count_by_owner(&self, owner_id: &str) -> Result<usize, RepositoryError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM players WHERE owner_id = ?")
            .bind(owner_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        Ok(count as usize)
    }

    async fn insert(&self, player: &Player) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO players (id, owner_id, name, rating_half_points, position, avatar, games_played, total_rating, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&player.id)
        .bind(&player.owner_id)
        .bind(&player.name)
        .bind(i64::from(player.rating.half_points()))
        .bind(player.position.map(|p| p.as_str()))
        .bind(&player.avatar)
        .bind(player.games_played)
        .bind(player.total_rating)
        .bind(player.created_at)
        .bind(player.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                RepositoryError::AlreadyExists(player.id.clone())
            }
            e => RepositoryError::Database(e.to_string()),
        })?;

        Ok(())
    }

    async fn update(&self, player: &Player) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE players
            SET name = ?, rating_half_points = ?, position = ?, avatar = ?, updated_at = ?
            WHERE id = ? AND owner_id = ?
            "#,
        )
        .bind(&player.name)
        .bind(i64::from(player.rating.half_points()))
        .bind(player.position.map(|p| p.as_str()))
        .bind(&player.avatar)
        .bind(player.updated_at)
        .bind(&player.id)
        .bind(&player.owner_id)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(player.id.clone()));
        }

        Ok(())
    }

    async fn delete(&self, owner_id: &str, id: &str) -> Result<bool, RepositoryError> {
        // attendance rows go with it (ON DELETE CASCADE)
        let result = sqlx::query("DELETE FROM players WHERE id = ? AND owner_id = ?")
            .bind(id)
            .bind(owner_id)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}
