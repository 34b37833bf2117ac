use std::sync::Arc;

use chrono::NaiveDate;

use crate::application::attendance::{load_attendees, MIN_PLAYERS_FOR_TEAMS};
use crate::domain::entities::{TeamSheet, TeamSide};
use crate::domain::repositories::{AttendanceRepository, PlayerRepository, RepositoryError};
use crate::domain::services::team_balancer;
use crate::infrastructure::services::TeamSheetStore;

/// Generate teams input
pub struct GenerateTeamsInput {
    pub owner_id: String,
    pub date: NaiveDate,
}

/// Generate teams use case
pub struct GenerateTeams<P: PlayerRepository, A: AttendanceRepository> {
    player_repo: Arc<P>,
    attendance_repo: Arc<A>,
    team_sheets: Arc<TeamSheetStore>,
}

impl<P: PlayerRepository, A: AttendanceRepository> GenerateTeams<P, A> {
    pub fn new(player_repo: Arc<P>, attendance_repo: Arc<A>, team_sheets: Arc<TeamSheetStore>) -> Self {
        Self {
            player_repo,
            attendance_repo,
            team_sheets,
        }
    }

    pub async fn execute(&self, input: GenerateTeamsInput) -> Result<TeamSheet, GenerateTeamsError> {
        let (_, attendees) = load_attendees(
            self.player_repo.as_ref(),
            self.attendance_repo.as_ref(),
            &input.owner_id,
            input.date,
        )
        .await?;

        if attendees.len() < MIN_PLAYERS_FOR_TEAMS {
            return Err(GenerateTeamsError::NotEnoughPlayers {
                count: attendees.len(),
            });
        }

        let split = team_balancer::balance(&attendees);
        let sheet = TeamSheet::new(split, input.date);
        self.team_sheets.put(&input.owner_id, sheet.clone()).await;

        tracing::info!(
            "Teams generated for {} on {}: {} ({}) vs {} ({}), gap {:.2}",
            input.owner_id,
            input.date,
            sheet.split.team1.len(),
            sheet.split.total_rating(TeamSide::Team1),
            sheet.split.team2.len(),
            sheet.split.total_rating(TeamSide::Team2),
            sheet.split.average_gap()
        );

        Ok(sheet)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GenerateTeamsError {
    #[error("Need at least 2 players to generate teams, {count} attending")]
    NotEnoughPlayers { count: usize },
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}
