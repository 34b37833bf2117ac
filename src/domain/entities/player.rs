use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{PlayerProfile, ProfileChanges, Rating};

/// Avatar shown when a player has not picked one
pub const DEFAULT_AVATAR: &str = "⚽";

/// Playing position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Position {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
    Winger,
}

impl Position {
    pub const ALL: [Position; 5] = [
        Position::Goalkeeper,
        Position::Defender,
        Position::Midfielder,
        Position::Forward,
        Position::Winger,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Goalkeeper => "Goalkeeper",
            Position::Defender => "Defender",
            Position::Midfielder => "Midfielder",
            Position::Forward => "Forward",
            Position::Winger => "Winger",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Goalkeeper" => Some(Position::Goalkeeper),
            "Defender" => Some(Position::Defender),
            "Midfielder" => Some(Position::Midfielder),
            "Forward" => Some(Position::Forward),
            "Winger" => Some(Position::Winger),
            _ => None,
        }
    }
}

/// Player entity - one member of an owner's roster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    pub rating: Rating,
    pub position: Option<Position>,
    pub avatar: String,
    pub games_played: i64,
    pub total_rating: f64,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Player {
    /// Create a new roster entry; counters start from the initial rating
    pub fn new(id: String, owner_id: String, profile: PlayerProfile) -> Self {
        let now = chrono::Utc::now().timestamp();
        Self {
            id,
            owner_id,
            total_rating: profile.rating.value(),
            name: profile.name,
            rating: profile.rating,
            position: profile.position,
            avatar: profile.avatar,
            games_played: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the editable fields, leaving the running counters alone
    pub fn apply_changes(&mut self, changes: ProfileChanges) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(rating) = changes.rating {
            self.rating = rating;
        }
        if let Some(position) = changes.position {
            self.position = position;
        }
        if let Some(avatar) = changes.avatar {
            self.avatar = avatar;
        }
        self.updated_at = chrono::Utc::now().timestamp();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(name: &str, rating: f64) -> PlayerProfile {
        PlayerProfile::parse(name, Some(rating), None, None).unwrap()
    }

    #[test]
    fn test_new_player_counters() {
        let player = Player::new("p1".into(), "owner".into(), profile("Sam", 8.5));

        assert_eq!(player.games_played, 0);
        assert_eq!(player.total_rating, 8.5);
        assert_eq!(player.avatar, DEFAULT_AVATAR);
    }

    #[test]
    fn test_apply_changes_keeps_counters() {
        let mut player = Player::new("p1".into(), "owner".into(), profile("Sam", 8.5));
        player.games_played = 4;

        player.apply_changes(ProfileChanges::parse(Some("Samuel"), Some(6.0), None, None).unwrap());

        assert_eq!(player.name, "Samuel");
        assert_eq!(player.rating.value(), 6.0);
        assert_eq!(player.games_played, 4);
        assert_eq!(player.total_rating, 8.5);
    }

    #[test]
    fn test_apply_changes_keeps_unsent_fields() {
        let full = PlayerProfile::parse("Sam", Some(9.5), Some("Goalkeeper"), Some("🧤")).unwrap();
        let mut player = Player::new("p1".into(), "owner".into(), full);

        player.apply_changes(ProfileChanges::parse(Some("Sammy"), None, None, None).unwrap());

        assert_eq!(player.name, "Sammy");
        assert_eq!(player.rating.value(), 9.5);
        assert_eq!(player.position, Some(Position::Goalkeeper));
        assert_eq!(player.avatar, "🧤");

        player.apply_changes(ProfileChanges::parse(None, None, Some(""), None).unwrap());
        assert_eq!(player.position, None);
    }

    #[test]
    fn test_position_round_trips_through_str() {
        for position in Position::ALL {
            assert_eq!(Position::from_str(position.as_str()), Some(position));
        }
        assert_eq!(Position::from_str("Striker"), None);
    }
}
