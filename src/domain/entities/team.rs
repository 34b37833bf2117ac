use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::entities::Player;

/// Average-rating gap under which two teams count as well balanced
pub const WELL_BALANCED_GAP: f64 = 0.5;

/// One of the two sides of a team split
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamSide {
    Team1,
    Team2,
}

impl TeamSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            TeamSide::Team1 => "team1",
            TeamSide::Team2 => "team2",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TeamSide::Team1 => "Blue Team",
            TeamSide::Team2 => "Red Team",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            TeamSide::Team1 => "🔵",
            TeamSide::Team2 => "🔴",
        }
    }

    pub fn other(&self) -> Self {
        match self {
            TeamSide::Team1 => TeamSide::Team2,
            TeamSide::Team2 => TeamSide::Team1,
        }
    }
}

/// Two disjoint teams drawn from one attendee set
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSplit {
    pub team1: Vec<Player>,
    pub team2: Vec<Player>,
}

impl TeamSplit {
    pub fn players(&self, side: TeamSide) -> &[Player] {
        match side {
            TeamSide::Team1 => &self.team1,
            TeamSide::Team2 => &self.team2,
        }
    }

    /// Number of players across both teams
    pub fn len(&self) -> usize {
        self.team1.len() + self.team2.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn total_half_points(&self, side: TeamSide) -> u32 {
        self.players(side)
            .iter()
            .map(|p| u32::from(p.rating.half_points()))
            .sum()
    }

    pub fn total_rating(&self, side: TeamSide) -> f64 {
        f64::from(self.total_half_points(side)) / 2.0
    }

    /// Average player rating, 0 for an empty team
    pub fn average_rating(&self, side: TeamSide) -> f64 {
        let count = self.players(side).len();
        if count == 0 {
            return 0.0;
        }
        self.total_rating(side) / count as f64
    }

    pub fn average_gap(&self) -> f64 {
        (self.average_rating(TeamSide::Team1) - self.average_rating(TeamSide::Team2)).abs()
    }

    pub fn is_well_balanced(&self) -> bool {
        self.average_gap() < WELL_BALANCED_GAP
    }

    /// Both sides have at least one player
    pub fn is_ready(&self) -> bool {
        !self.team1.is_empty() && !self.team2.is_empty()
    }
}

/// The team split currently on display for one owner
#[derive(Debug, Clone, PartialEq)]
pub struct TeamSheet {
    pub split: TeamSplit,
    pub date: NaiveDate,
    pub generated_at: i64,
}

impl TeamSheet {
    pub fn new(split: TeamSplit, date: NaiveDate) -> Self {
        Self {
            split,
            date,
            generated_at: chrono::Utc::now().timestamp(),
        }
    }
}
