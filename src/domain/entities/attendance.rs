use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Attendance flag for one player on one day.
///
/// Keyed by (owner, player, date); writing the same key again overwrites.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub owner_id: String,
    pub player_id: String,
    pub date: NaiveDate,
    pub is_attending: bool,
    pub updated_at: i64,
}

impl AttendanceRecord {
    pub fn new(owner_id: String, player_id: String, date: NaiveDate, is_attending: bool) -> Self {
        Self {
            owner_id,
            player_id,
            date,
            is_attending,
            updated_at: chrono::Utc::now().timestamp(),
        }
    }
}

/// Current calendar day (UTC), the default for every attendance operation
pub fn today() -> NaiveDate {
    chrono::Utc::now().date_naive()
}

/// Parse a `YYYY-MM-DD` day
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}
