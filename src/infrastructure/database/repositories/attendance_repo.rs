use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::SqlitePool;

use crate::domain::entities::{parse_date, AttendanceRecord};
use crate::domain::repositories::{AttendanceRepository, RepositoryError};

const UPSERT_SQL: &str = r#"
    INSERT INTO attendance (owner_id, player_id, date, is_attending, updated_at)
    VALUES (?, ?, ?, ?, ?)
    ON CONFLICT(owner_id, player_id, date) DO UPDATE SET
        is_attending = excluded.is_attending,
        updated_at = excluded.updated_at
"#;

/// SQLite implementation of AttendanceRepository
pub struct SqliteAttendanceRepository {
    pool: SqlitePool,
}

impl SqliteAttendanceRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn format_date(date: NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    fn row_to_record(row: &sqlx::sqlite::SqliteRow) -> Result<AttendanceRecord, RepositoryError> {
        use sqlx::Row;

        let date_str: String = row.get("date");
        let date = parse_date(&date_str)
            .ok_or_else(|| RepositoryError::Database(format!("bad attendance date: {}", date_str)))?;

        Ok(AttendanceRecord {
            owner_id: row.get("owner_id"),
            player_id: row.get("player_id"),
            date,
            is_attending: row.get::<i32, _>("is_attending") != 0,
            updated_at: row.get("updated_at"),
        })
    }
}

#[async_trait]
impl AttendanceRepository for SqliteAttendanceRepository {
    async fn find_by_date(
        &self,
        owner_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<AttendanceRecord>, RepositoryError> {
        let rows = sqlx::query("SELECT * FROM attendance WHERE owner_id = ? AND date = ?")
            .bind(owner_id)
            .bind(Self::format_date(date))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        rows.iter().map(Self::row_to_record).collect()
    }

    async fn upsert(&self, record: &AttendanceRecord) -> Result<(), RepositoryError> {
        sqlx::query(UPSERT_SQL)
            .bind(&record.owner_id)
            .bind(&record.player_id)
            .bind(Self::format_date(record.date))
            .bind(record.is_attending as i32)
            .bind(record.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        Ok(())
    }

    async fn upsert_many(&self, records: &[AttendanceRecord]) -> Result<(), RepositoryError> {
        if records.is_empty() {
            return Ok(());
        }

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        for record in records {
            sqlx::query(UPSERT_SQL)
                .bind(&record.owner_id)
                .bind(&record.player_id)
                .bind(Self::format_date(record.date))
                .bind(record.is_attending as i32)
                .bind(record.updated_at)
                .execute(&mut *tx)
                .await
                .map_err(|e| RepositoryError::Database(e.to_string()))?;
        }

        tx.commit()
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        Ok(())
    }
}
