//! Shared-secret check in front of roster edits.
//!
//! The first player of a roster can always be added. Every later addition,
//! every edit and every deletion needs the configured key. This keeps a
//! shared link from being used to scribble over the roster; it is not access
//! control (ownership of the rows is decided by the authenticated user).

/// Roster mutation gate
#[derive(Debug, Clone, Default)]
pub struct RosterGate {
    secret: Option<String>,
}

impl RosterGate {
    /// An empty secret counts as not configured, which locks every gated action
    pub fn new(secret: Option<String>) -> Self {
        Self {
            secret: secret.filter(|s| !s.is_empty()),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.secret.is_some()
    }

    /// Adding a player, given how many the owner already has
    pub fn check_add(&self, roster_size: usize, provided: Option<&str>) -> Result<(), GateError> {
        if roster_size == 0 {
            return Ok(());
        }
        self.check(provided)
    }

    /// Editing or deleting a player
    pub fn check_edit(&self, provided: Option<&str>) -> Result<(), GateError> {
        self.check(provided)
    }

    fn check(&self, provided: Option<&str>) -> Result<(), GateError> {
        let provided = match provided {
            Some(key) if !key.is_empty() => key,
            _ => return Err(GateError::MissingKey),
        };

        match &self.secret {
            Some(secret) if secret == provided => Ok(()),
            _ => Err(GateError::InvalidKey),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GateError {
    #[error("Please enter the key to change the roster")]
    MissingKey,
    #[error("Invalid key")]
    InvalidKey,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate() -> RosterGate {
        RosterGate::new(Some("letmein".to_string()))
    }

    #[test]
    fn test_first_player_needs_no_key() {
        assert_eq!(gate().check_add(0, None), Ok(()));
        assert_eq!(gate().check_add(0, Some("")), Ok(()));
        assert_eq!(gate().check_add(0, Some("whatever")), Ok(()));
        assert_eq!(RosterGate::new(None).check_add(0, None), Ok(()));
    }

    #[test]
    fn test_later_players_need_the_key() {
        assert_eq!(gate().check_add(1, Some("letmein")), Ok(()));
        assert_eq!(gate().check_add(1, Some("LETMEIN")), Err(GateError::InvalidKey));
        assert_eq!(gate().check_add(3, None), Err(GateError::MissingKey));
    }

    #[test]
    fn test_edits_always_need_the_key() {
        assert_eq!(gate().check_edit(Some("letmein")), Ok(()));
        assert_eq!(gate().check_edit(Some("letmein ")), Err(GateError::InvalidKey));
        assert_eq!(gate().check_edit(None), Err(GateError::MissingKey));
    }

    #[test]
    fn test_unconfigured_gate_rejects_everything_gated() {
        let gate = RosterGate::new(Some(String::new()));
        assert!(!gate.is_configured());
        assert_eq!(gate.check_edit(Some("anything")), Err(GateError::InvalidKey));
        assert_eq!(gate.check_add(2, Some("anything")), Err(GateError::InvalidKey));
    }
}
