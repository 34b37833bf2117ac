use std::collections::HashSet;
use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::entities::Player;
use crate::domain::repositories::{AttendanceRepository, PlayerRepository, RepositoryError};

/// Attendees needed before teams can be formed
pub const MIN_PLAYERS_FOR_TEAMS: usize = 2;

/// Get attendance output
#[derive(Debug)]
pub struct GetAttendanceOutput {
    pub date: NaiveDate,
    pub roster_size: usize,
    /// Attending players, in roster order
    pub attendees: Vec<Player>,
}

impl GetAttendanceOutput {
    pub fn attendee_ids(&self) -> Vec<String> {
        self.attendees.iter().map(|p| p.id.clone()).collect()
    }

    pub fn average_rating(&self) -> f64 {
        if self.attendees.is_empty() {
            return 0.0;
        }
        let total: f64 = self.attendees.iter().map(|p| p.rating.value()).sum();
        total / self.attendees.len() as f64
    }

    pub fn ready_for_teams(&self) -> bool {
        self.attendees.len() >= MIN_PLAYERS_FOR_TEAMS
    }
}

/// Get attendance use case
pub struct GetAttendance<P: PlayerRepository, A: AttendanceRepository> {
    player_repo: Arc<P>,
    attendance_repo: Arc<A>,
}

impl<P: PlayerRepository, A: AttendanceRepository> GetAttendance<P, A> {
    pub fn new(player_repo: Arc<P>, attendance_repo: Arc<A>) -> Self {
        Self {
            player_repo,
            attendance_repo,
        }
    }

    pub async fn execute(&self, owner_id: &str, date: NaiveDate) -> Result<GetAttendanceOutput, RepositoryError> {
        let (roster, attendees) =
            load_attendees(self.player_repo.as_ref(), self.attendance_repo.as_ref(), owner_id, date).await?;

        tracing::debug!("{} of {} attending on {} for {}", attendees.len(), roster.len(), date, owner_id);

        Ok(GetAttendanceOutput {
            date,
            roster_size: roster.len(),
            attendees,
        })
    }
}

/// Roster and the players attending on `date`.
///
/// A player without a record for the day is not attending.
pub async fn load_attendees<P, A>(
    player_repo: &P,
    attendance_repo: &A,
    owner_id: &str,
    date: NaiveDate,
) -> Result<(Vec<Player>, Vec<Player>), RepositoryError>
where
    P: PlayerRepository + ?Sized,
    A: AttendanceRepository + ?Sized,
{
    let roster = player_repo.find_by_owner(owner_id).await?;
    let attending: HashSet<String> = attendance_repo
        .find_by_date(owner_id, date)
        .await?
        .into_iter()
        .filter(|r| r.is_attending)
        .map(|r| r.player_id)
        .collect();

    let attendees = roster
        .iter()
        .filter(|p| attending.contains(&p.id))
        .cloned()
        .collect();

    Ok((roster, attendees))
}
