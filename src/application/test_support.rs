//! In-memory stores for use case tests

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::entities::{AttendanceRecord, Player};
use crate::domain::repositories::{AttendanceRepository, PlayerRepository, RepositoryError};
use crate::domain::value_objects::PlayerProfile;

pub const OWNER: &str = "owner-1";
pub const KEY: &str = "sesame";

pub fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

pub fn player(id: &str, rating: f64) -> Player {
    let profile = PlayerProfile::parse(id, Some(rating), None, None).unwrap();
    Player::new(id.to_string(), OWNER.to_string(), profile)
}

#[derive(Default)]
pub struct InMemoryPlayers {
    pub players: Mutex<Vec<Player>>,
    pub fail: Mutex<bool>,
}

impl InMemoryPlayers {
    pub fn with(players: Vec<Player>) -> Self {
        Self {
            players: Mutex::new(players),
            fail: Mutex::new(false),
        }
    }

    pub fn set_failing(&self) {
        *self.fail.lock().unwrap() = true;
    }

    pub fn snapshot(&self) -> Vec<Player> {
        self.players.lock().unwrap().clone()
    }

    fn check(&self) -> Result<(), RepositoryError> {
        if *self.fail.lock().unwrap() {
            return Err(RepositoryError::Database("connection lost".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl PlayerRepository for InMemoryPlayers {
    async fn find_by_id(&self, owner_id: &str, id: &str) -> Result<Option<Player>, RepositoryError> {
        self.check()?;
        Ok(self
            .snapshot()
            .into_iter()
            .find(|p| p.id == id && p.owner_id == owner_id))
    }

    async fn find_by_owner(&self, owner_id: &str) -> Result<Vec<Player>, RepositoryError> {
        self.check()?;
        let mut players: Vec<Player> = self
            .snapshot()
            .into_iter()
            .filter(|p| p.owner_id == owner_id)
            .collect();
        players.reverse();
        Ok(players)
    }

    async fn count_by_owner(&self, owner_id: &str) -> Result<usize, RepositoryError> {
        Ok(self.find_by_owner(owner_id).await?.len())
    }

    async fn insert(&self, player: &Player) -> Result<(), RepositoryError> {
        self.check()?;
        let mut players = self.players.lock().unwrap();
        if players.iter().any(|p| p.id == player.id) {
            return Err(RepositoryError::AlreadyExists(player.id.clone()));
        }
        players.push(player.clone());
        Ok(())
    }

    async fn update(&self, player: &Player) -> Result<(), RepositoryError> {
        self.check()?;
        let mut players = self.players.lock().unwrap();
        match players
            .iter_mut()
            .find(|p| p.id == player.id && p.owner_id == player.owner_id)
        {
            Some(existing) => {
                *existing = player.clone();
                Ok(())
            }
            None => Err(RepositoryError::NotFound(player.id.clone())),
        }
    }

    async fn delete(&self, owner_id: &str, id: &str) -> Result<bool, RepositoryError> {
        self.check()?;
        let mut players = self.players.lock().unwrap();
        let before = players.len();
        players.retain(|p| !(p.id == id && p.owner_id == owner_id));
        Ok(players.len() != before)
    }
}

#[derive(Default)]
pub struct InMemoryAttendance {
    pub records: Mutex<Vec<AttendanceRecord>>,
    pub fail: Mutex<bool>,
}

impl InMemoryAttendance {
    pub fn set_failing(&self) {
        *self.fail.lock().unwrap() = true;
    }

    pub fn snapshot(&self) -> Vec<AttendanceRecord> {
        self.records.lock().unwrap().clone()
    }

    fn put(records: &mut Vec<AttendanceRecord>, record: &AttendanceRecord) {
        match records.iter_mut().find(|r| {
            r.owner_id == record.owner_id && r.player_id == record.player_id && r.date == record.date
        }) {
            Some(existing) => *existing = record.clone(),
            None => records.push(record.clone()),
        }
    }
}

#[async_trait]
impl AttendanceRepository for InMemoryAttendance {
    async fn find_by_date(
        &self,
        owner_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<AttendanceRecord>, RepositoryError> {
        Ok(self
            .snapshot()
            .into_iter()
            .filter(|r| r.owner_id == owner_id && r.date == date)
            .collect())
    }

    async fn upsert(&self, record: &AttendanceRecord) -> Result<(), RepositoryError> {
        self.upsert_many(std::slice::from_ref(record)).await
    }

    async fn upsert_many(&self, records: &[AttendanceRecord]) -> Result<(), RepositoryError> {
        if *self.fail.lock().unwrap() {
            return Err(RepositoryError::Database("connection lost".into()));
        }
        let mut stored = self.records.lock().unwrap();
        for record in records {
            Self::put(&mut stored, record);
        }
        Ok(())
    }
}
