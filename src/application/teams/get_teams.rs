use std::sync::Arc;

use crate::domain::entities::TeamSheet;
use crate::infrastructure::services::TeamSheetStore;

/// Get teams use case
pub struct GetTeams {
    team_sheets: Arc<TeamSheetStore>,
}

impl GetTeams {
    pub fn new(team_sheets: Arc<TeamSheetStore>) -> Self {
        Self { team_sheets }
    }

    pub async fn execute(&self, owner_id: &str) -> Result<TeamSheet, GetTeamsError> {
        self.team_sheets
            .get(owner_id)
            .await
            .ok_or(GetTeamsError::NotGenerated)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GetTeamsError {
    #[error("Generate teams first!")]
    NotGenerated,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{date, OWNER};
    use crate::domain::entities::TeamSplit;

    #[tokio::test]
    async fn test_get_teams() {
        let sheets = Arc::new(TeamSheetStore::new());
        let get_teams = GetTeams::new(sheets.clone());

        assert!(matches!(get_teams.execute(OWNER).await, Err(GetTeamsError::NotGenerated)));

        sheets.put(OWNER, TeamSheet::new(TeamSplit::default(), date())).await;
        assert!(get_teams.execute(OWNER).await.is_ok());
    }
}
