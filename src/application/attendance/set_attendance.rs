use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::entities::AttendanceRecord;
use crate::domain::repositories::{AttendanceRepository, PlayerRepository, RepositoryError};
use crate::infrastructure::services::TeamSheetStore;

/// Set attendance input
pub struct SetAttendanceInput {
    pub owner_id: String,
    pub player_id: String,
    /// `None` flips the player's current state for the day
    pub attending: Option<bool>,
    pub date: NaiveDate,
}

/// Set attendance output
#[derive(Debug)]
pub struct SetAttendanceOutput {
    pub record: AttendanceRecord,
    pub teams_cleared: bool,
}

/// Set attendance use case
pub struct SetAttendance<P: PlayerRepository, A: AttendanceRepository> {
    player_repo: Arc<P>,
    attendance_repo: Arc<A>,
    team_sheets: Arc<TeamSheetStore>,
}

impl<P: PlayerRepository, A: AttendanceRepository> SetAttendance<P, A> {
    pub fn new(player_repo: Arc<P>, attendance_repo: Arc<A>, team_sheets: Arc<TeamSheetStore>) -> Self {
        Self {
            player_repo,
            attendance_repo,
            team_sheets,
        }
    }

    pub async fn execute(&self, input: SetAttendanceInput) -> Result<SetAttendanceOutput, SetAttendanceError> {
        let player = self
            .player_repo
            .find_by_id(&input.owner_id, &input.player_id)
            .await?
            .ok_or(SetAttendanceError::PlayerNotFound)?;

        let attending = match input.attending {
            Some(attending) => attending,
            None => {
                let current = self
                    .attendance_repo
                    .find_by_date(&input.owner_id, input.date)
                    .await?
                    .into_iter()
                    .any(|r| r.player_id == player.id && r.is_attending);
                !current
            }
        };

        let record = AttendanceRecord::new(input.owner_id, player.id, input.date, attending);
        self.attendance_repo.upsert(&record).await?;

        // Only after the store confirmed, so memory never runs ahead of it
        let teams_cleared = self.team_sheets.discard(&record.owner_id).await;

        tracing::info!(
            "{} {} on {}",
            player.name,
            if attending { "is in" } else { "is out" },
            record.date
        );

        Ok(SetAttendanceOutput {
            record,
            teams_cleared,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SetAttendanceError {
    #[error("Player not found")]
    PlayerNotFound,
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{date, player, InMemoryAttendance, InMemoryPlayers, OWNER};
    use crate::domain::entities::{TeamSheet, TeamSplit};

    struct Fixture {
        attendance: Arc<InMemoryAttendance>,
        sheets: Arc<TeamSheetStore>,
        use_case: SetAttendance<InMemoryPlayers, InMemoryAttendance>,
    }

    fn fixture() -> Fixture {
        let players = Arc::new(InMemoryPlayers::with(vec![player("p1", 5.0), player("p2", 7.0)]));
        let attendance = Arc::new(InMemoryAttendance::default());
        let sheets = Arc::new(TeamSheetStore::new());
        Fixture {
            use_case: SetAttendance::new(players, attendance.clone(), sheets.clone()),
            attendance,
            sheets,
        }
    }

    fn input(player_id: &str, attending: Option<bool>) -> SetAttendanceInput {
        SetAttendanceInput {
            owner_id: OWNER.to_string(),
            player_id: player_id.to_string(),
            attending,
            date: date(),
        }
    }

    #[tokio::test]
    async fn test_same_key_twice_keeps_one_record() {
        let f = fixture();

        f.use_case.execute(input("p1", Some(true))).await.unwrap();
        f.use_case.execute(input("p1", Some(false))).await.unwrap();

        let records = f.attendance.snapshot();
        assert_eq!(records.len(), 1);
        assert!(!records[0].is_attending);
    }

    #[tokio::test]
    async fn test_toggle_flips_current_state() {
        let f = fixture();

        let first = f.use_case.execute(input("p2", None)).await.unwrap();
        assert!(first.record.is_attending);

        let second = f.use_case.execute(input("p2", None)).await.unwrap();
        assert!(!second.record.is_attending);
        assert_eq!(f.attendance.snapshot().len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_player_is_rejected() {
        let f = fixture();

        let err = f.use_case.execute(input("ghost", Some(true))).await.unwrap_err();

        assert!(matches!(err, SetAttendanceError::PlayerNotFound));
        assert!(f.attendance.snapshot().is_empty());
    }

    #[tokio::test]
    async fn test_change_discards_team_sheet() {
        let f = fixture();
        f.sheets.put(OWNER, TeamSheet::new(TeamSplit::default(), date())).await;

        let output = f.use_case.execute(input("p1", Some(true))).await.unwrap();

        assert!(output.teams_cleared);
        assert!(f.sheets.get(OWNER).await.is_none());
    }

    #[tokio::test]
    async fn test_failed_write_keeps_team_sheet() {
        let f = fixture();
        f.sheets.put(OWNER, TeamSheet::new(TeamSplit::default(), date())).await;
        f.attendance.set_failing();

        let err = f.use_case.execute(input("p1", Some(true))).await.unwrap_err();

        assert!(matches!(err, SetAttendanceError::Repository(_)));
        assert!(f.sheets.get(OWNER).await.is_some());
    }
}
