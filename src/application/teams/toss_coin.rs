use std::sync::Arc;

use crate::application::teams::GetTeamsError;
use crate::domain::entities::{TeamSheet, TeamSide};
use crate::domain::services::coin_toss;
use crate::infrastructure::services::TeamSheetStore;

/// What the toss winner gets to pick
pub const TOSS_PRIZE: &str = "ball possession or field side";

/// Toss coin output
#[derive(Debug)]
pub struct TossCoinOutput {
    pub winner: TeamSide,
    pub sheet: TeamSheet,
}

impl TossCoinOutput {
    pub fn message(&self) -> String {
        format!(
            "{} {} wins the toss and chooses {}!",
            self.winner.icon(),
            self.winner.display_name(),
            TOSS_PRIZE
        )
    }
}

/// Toss coin use case
pub struct TossCoin {
    team_sheets: Arc<TeamSheetStore>,
}

impl TossCoin {
    pub fn new(team_sheets: Arc<TeamSheetStore>) -> Self {
        Self { team_sheets }
    }

    pub async fn execute(&self, owner_id: &str) -> Result<TossCoinOutput, GetTeamsError> {
        let sheet = self
            .team_sheets
            .get(owner_id)
            .await
            .ok_or(GetTeamsError::NotGenerated)?;

        let winner = coin_toss::flip();
        tracing::info!("Coin toss for {}: {}", owner_id, winner.display_name());

        Ok(TossCoinOutput { winner, sheet })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{date, OWNER};
    use crate::domain::entities::TeamSplit;

    #[tokio::test]
    async fn test_toss_needs_teams() {
        let toss = TossCoin::new(Arc::new(TeamSheetStore::new()));

        let err = toss.execute(OWNER).await.err();

        assert!(matches!(err, Some(GetTeamsError::NotGenerated)));
    }

    #[tokio::test]
    async fn test_toss_names_the_winner() {
        let sheets = Arc::new(TeamSheetStore::new());
        sheets.put(OWNER, TeamSheet::new(TeamSplit::default(), date())).await;
        let toss = TossCoin::new(sheets);

        let output = toss.execute(OWNER).await.unwrap();

        assert!(matches!(output.winner, TeamSide::Team1 | TeamSide::Team2));
        assert!(output.message().contains(output.winner.display_name()));
        assert!(output.message().ends_with("ball possession or field side!"));
    }

    #[tokio::test]
    async fn test_repeated_tosses_reach_both_sides() {
        let sheets = Arc::new(TeamSheetStore::new());
        sheets.put(OWNER, TeamSheet::new(TeamSplit::default(), date())).await;
        let toss = TossCoin::new(sheets);

        let mut winners = Vec::new();
        for _ in 0..200 {
            winners.push(toss.execute(OWNER).await.unwrap().winner);
        }

        assert!(winners.contains(&TeamSide::Team1));
        assert!(winners.contains(&TeamSide::Team2));
    }
}
