use std::sync::Arc;

use chrono::NaiveDate;

use super::get_attendance::load_attendees;
use crate::domain::entities::AttendanceRecord;
use crate::domain::repositories::{AttendanceRepository, PlayerRepository, RepositoryError};
use crate::infrastructure::services::TeamSheetStore;

/// Set all attendance input
pub struct SetAllAttendanceInput {
    pub owner_id: String,
    /// `None` clears everyone if the whole roster attends, else selects everyone
    pub attending: Option<bool>,
    pub date: NaiveDate,
}

/// Set all attendance output
#[derive(Debug)]
pub struct SetAllAttendanceOutput {
    pub date: NaiveDate,
    pub is_attending: bool,
    pub updated: usize,
    pub teams_cleared: bool,
}

/// Select all / clear all use case
pub struct SetAllAttendance<P: PlayerRepository, A: AttendanceRepository> {
    player_repo: Arc<P>,
    attendance_repo: Arc<A>,
    team_sheets: Arc<TeamSheetStore>,
}

impl<P: PlayerRepository, A: AttendanceRepository> SetAllAttendance<P, A> {
    pub fn new(player_repo: Arc<P>, attendance_repo: Arc<A>, team_sheets: Arc<TeamSheetStore>) -> Self {
        Self {
            player_repo,
            attendance_repo,
            team_sheets,
        }
    }

    pub async fn execute(&self, input: SetAllAttendanceInput) -> Result<SetAllAttendanceOutput, RepositoryError> {
        let (roster, attendees) = load_attendees(
            self.player_repo.as_ref(),
            self.attendance_repo.as_ref(),
            &input.owner_id,
            input.date,
        )
        .await?;

        let attending = input
            .attending
            .unwrap_or(attendees.len() != roster.len());

        let records: Vec<AttendanceRecord> = roster
            .iter()
            .map(|p| AttendanceRecord::new(input.owner_id.clone(), p.id.clone(), input.date, attending))
            .collect();
        self.attendance_repo.upsert_many(&records).await?;

        let teams_cleared = self.team_sheets.discard(&input.owner_id).await;

        tracing::info!(
            "Marked all {} players {} on {}",
            records.len(),
            if attending { "in" } else { "out" },
            input.date
        );

        Ok(SetAllAttendanceOutput {
            date: input.date,
            is_attending: attending,
            updated: records.len(),
            teams_cleared,
        })
    }
}
