use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::entities::AttendanceRecord;
use crate::domain::repositories::RepositoryError;

/// Attendance store keyed by (owner, player, date)
#[async_trait]
pub trait AttendanceRepository: Send + Sync {
    /// All of the owner's records for one day
    async fn find_by_date(
        &self,
        owner_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<AttendanceRecord>, RepositoryError>;

    /// Insert or overwrite one record
    async fn upsert(&self, record: &AttendanceRecord) -> Result<(), RepositoryError>;

    /// Insert or overwrite a batch of records atomically
    async fn upsert_many(&self, records: &[AttendanceRecord]) -> Result<(), RepositoryError>;
}
