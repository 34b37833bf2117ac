use std::fmt;

use serde::{Deserialize, Serialize};

/// Player rating on a 1-10 scale in half point steps.
///
/// Stored as a count of half points (2..=20) so that ordering and team
/// totals are exact. Serialized as a plain number, e.g. `7.5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: Rating = Rating(2);
    pub const MAX: Rating = Rating(20);
    /// Rating preselected for a new player
    pub const DEFAULT: Rating = Rating(14);

    pub fn new(value: f64) -> Result<Self, RatingError> {
        if !value.is_finite() {
            return Err(RatingError::NotANumber);
        }

        let doubled = value * 2.0;
        if doubled.fract() != 0.0 {
            return Err(RatingError::OffStep(value));
        }
        if doubled < f64::from(Self::MIN.0) || doubled > f64::from(Self::MAX.0) {
            return Err(RatingError::OutOfRange(value));
        }

        Ok(Rating(doubled as u8))
    }

    pub fn from_half_points(half_points: i64) -> Result<Self, RatingError> {
        if half_points < i64::from(Self::MIN.0) || half_points > i64::from(Self::MAX.0) {
            return Err(RatingError::OutOfRange(half_points as f64 / 2.0));
        }
        Ok(Rating(half_points as u8))
    }

    pub fn half_points(self) -> u8 {
        self.0
    }

    pub fn value(self) -> f64 {
        f64::from(self.0) / 2.0
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<f64> for Rating {
    type Error = RatingError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Rating::new(value)
    }
}

impl From<Rating> for f64 {
    fn from(rating: Rating) -> Self {
        rating.value()
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RatingError {
    #[error("Rating must be a number")]
    NotANumber,
    #[error("Rating {0} is outside 1-10")]
    OutOfRange(f64),
    #[error("Rating {0} is not a multiple of 0.5")]
    OffStep(f64),
}
