use std::collections::HashMap;

use tokio::sync::RwLock;

use crate::domain::entities::TeamSheet;

/// In-memory team sheets, one per owner.
///
/// A sheet lives until the owner's attendance or roster changes, or the
/// process restarts. Nothing here is persisted.
pub struct TeamSheetStore {
    sheets: RwLock<HashMap<String, TeamSheet>>,
}

impl TeamSheetStore {
    pub fn new() -> Self {
        Self {
            sheets: RwLock::new(HashMap::new()),
        }
    }

    /// Current sheet of an owner
    pub async fn get(&self, owner_id: &str) -> Option<TeamSheet> {
        let sheets = self.sheets.read().await;
        sheets.get(owner_id).cloned()
    }

    /// Replace the owner's sheet
    pub async fn put(&self, owner_id: &str, sheet: TeamSheet) {
        let mut sheets = self.sheets.write().await;
        sheets.insert(owner_id.to_string(), sheet);
    }

    /// Drop the owner's sheet. Returns true if there was one.
    pub async fn discard(&self, owner_id: &str) -> bool {
        let mut sheets = self.sheets.write().await;
        let removed = sheets.remove(owner_id).is_some();
        if removed {
            tracing::debug!("Discarded team sheet for {}", owner_id);
        }
        removed
    }

    /// Count owners with a sheet
    pub async fn count(&self) -> usize {
        let sheets = self.sheets.read().await;
        sheets.len()
    }
}

impl Default for TeamSheetStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::TeamSplit;

    fn sheet() -> TeamSheet {
        let date = chrono::NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        TeamSheet::new(TeamSplit::default(), date)
    }

    #[tokio::test]
    async fn test_sheets_are_per_owner() {
        let store = TeamSheetStore::new();
        store.put("alice", sheet()).await;

        assert!(store.get("alice").await.is_some());
        assert!(store.get("bob").await.is_none());
        assert_eq!(store.count().await, 1);
    }

    #[tokio::test]
    async fn test_discard() {
        let store = TeamSheetStore::new();
        store.put("alice", sheet()).await;

        assert!(store.discard("alice").await);
        assert!(!store.discard("alice").await);
        assert!(store.get("alice").await.is_none());
    }
}
