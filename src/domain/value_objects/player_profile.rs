use crate::domain::entities::{Position, DEFAULT_AVATAR};
use crate::domain::value_objects::{Rating, RatingError};

/// Editable part of a player, validated
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerProfile {
    pub name: String,
    pub rating: Rating,
    pub position: Option<Position>,
    pub avatar: String,
}

impl PlayerProfile {
    /// Validate raw form input.
    ///
    /// The name is trimmed and must not be empty. A missing rating falls back
    /// to [`Rating::DEFAULT`]; empty position and avatar strings count as unset.
    pub fn parse(
        name: &str,
        rating: Option<f64>,
        position: Option<&str>,
        avatar: Option<&str>,
    ) -> Result<Self, ProfileError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ProfileError::MissingName);
        }

        let rating = match rating {
            Some(value) => Rating::new(value)?,
            None => Rating::DEFAULT,
        };

        Ok(Self {
            name: name.to_string(),
            rating,
            position: parse_position(position)?,
            avatar: parse_avatar(avatar),
        })
    }
}

/// Fields sent with an edit. `None` keeps what is stored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileChanges {
    pub name: Option<String>,
    pub rating: Option<Rating>,
    /// `Some(None)` clears the position
    pub position: Option<Option<Position>>,
    pub avatar: Option<String>,
}

impl ProfileChanges {
    /// Validate the fields present in an edit.
    ///
    /// A present name must not be blank. An empty position clears it and an
    /// empty avatar goes back to the default.
    pub fn parse(
        name: Option<&str>,
        rating: Option<f64>,
        position: Option<&str>,
        avatar: Option<&str>,
    ) -> Result<Self, ProfileError> {
        let name = match name.map(str::trim) {
            Some("") => return Err(ProfileError::MissingName),
            Some(n) => Some(n.to_string()),
            None => None,
        };

        Ok(Self {
            name,
            rating: rating.map(Rating::new).transpose()?,
            position: position.map(|p| parse_position(Some(p))).transpose()?,
            avatar: avatar.map(|a| parse_avatar(Some(a))),
        })
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn parse_position(position: Option<&str>) -> Result<Option<Position>, ProfileError> {
    match position.map(str::trim).filter(|p| !p.is_empty()) {
        Some(p) => Position::from_str(p)
            .map(Some)
            .ok_or_else(|| ProfileError::UnknownPosition(p.to_string())),
        None => Ok(None),
    }
}

fn parse_avatar(avatar: Option<&str>) -> String {
    avatar
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .unwrap_or(DEFAULT_AVATAR)
        .to_string()
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProfileError {
    #[error("Player name is required")]
    MissingName,
    #[error(transparent)]
    Rating(#[from] RatingError),
    #[error("Unknown position: {0}")]
    UnknownPosition(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_and_defaults() {
        let profile = PlayerProfile::parse("  Alex ", None, Some(""), None).unwrap();

        assert_eq!(profile.name, "Alex");
        assert_eq!(profile.rating, Rating::DEFAULT);
        assert_eq!(profile.position, None);
        assert_eq!(profile.avatar, "⚽");
    }

    #[test]
    fn test_parse_rejects_blank_name() {
        assert_eq!(
            PlayerProfile::parse("   ", Some(5.0), None, None),
            Err(ProfileError::MissingName)
        );
    }

    #[test]
    fn test_parse_rejects_bad_rating_and_position() {
        assert!(matches!(
            PlayerProfile::parse("Alex", Some(12.0), None, None),
            Err(ProfileError::Rating(RatingError::OutOfRange(_)))
        ));
        assert_eq!(
            PlayerProfile::parse("Alex", Some(5.0), Some("Libero"), None),
            Err(ProfileError::UnknownPosition("Libero".into()))
        );
    }

    #[test]
    fn test_parse_keeps_position_and_avatar() {
        let profile = PlayerProfile::parse("Jo", Some(9.5), Some("Winger"), Some("🔥")).unwrap();

        assert_eq!(profile.position, Some(Position::Winger));
        assert_eq!(profile.avatar, "🔥");
        assert_eq!(profile.rating.value(), 9.5);
    }

    #[test]
    fn test_changes_only_carry_sent_fields() {
        let changes = ProfileChanges::parse(Some(" Star Renamed "), None, None, None).unwrap();

        assert_eq!(changes.name.as_deref(), Some("Star Renamed"));
        assert_eq!(changes.rating, None);
        assert_eq!(changes.position, None);
        assert_eq!(changes.avatar, None);
        assert!(ProfileChanges::parse(None, None, None, None).unwrap().is_empty());
    }

    #[test]
    fn test_changes_validate_present_fields() {
        assert_eq!(
            ProfileChanges::parse(Some("  "), None, None, None),
            Err(ProfileError::MissingName)
        );
        assert!(matches!(
            ProfileChanges::parse(None, Some(6.3), None, None),
            Err(ProfileError::Rating(RatingError::OffStep(_)))
        ));

        let changes = ProfileChanges::parse(None, None, Some(""), Some("")).unwrap();
        assert_eq!(changes.position, Some(None));
        assert_eq!(changes.avatar.as_deref(), Some("⚽"));
    }
}
