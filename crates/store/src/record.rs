//! Leaderboard records and ordering.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::types::{Difficulty, LEADERBOARD_SIZE};

/// Name recorded when the player leaves it blank.
pub const DEFAULT_PLAYER_NAME: &str = "Player";

/// One leaderboard entry.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ScoreRecord {
    pub name: String,
    pub score: u32,
    #[serde(default = "default_difficulty")]
    pub difficulty: String,
    /// Milliseconds since the Unix epoch.
    #[serde(default)]
    pub timestamp: u64,
}

fn default_difficulty() -> String {
    Difficulty::default().as_str().to_string()
}

impl ScoreRecord {
    pub fn new(name: &str, score: u32, difficulty: Difficulty, timestamp: u64) -> Self {
        Self {
            name: normalize_name(name),
            score,
            difficulty: difficulty.as_str().to_string(),
            timestamp,
        }
    }

    /// Record stamped with the current time.
    pub fn now(name: &str, score: u32, difficulty: Difficulty) -> Self {
        Self::new(name, score, difficulty, now_millis())
    }
}

/// Trimmed name, or [`DEFAULT_PLAYER_NAME`] when nothing is left.
pub fn normalize_name(name: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        DEFAULT_PLAYER_NAME.to_string()
    } else {
        trimmed.to_string()
    }
}

pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Top scores, highest first; ties go to the newer record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Leaderboard {
    records: Vec<ScoreRecord>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from records in any order, keeping only the best ones.
    pub fn from_records(records: Vec<ScoreRecord>) -> Self {
        let mut board = Self { records };
        board.normalize();
        board
    }

    pub fn insert(&mut self, record: ScoreRecord) {
        self.records.push(record);
        self.normalize();
    }

    /// Would `score` make it onto the board right now?
    pub fn qualifies(&self, score: u32) -> bool {
        self.records.len() < LEADERBOARD_SIZE
            || self.records.last().map_or(true, |r| score >= r.score)
    }

    pub fn records(&self) -> &[ScoreRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<ScoreRecord> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn normalize(&mut self) {
        self.records.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then_with(|| b.timestamp.cmp(&a.timestamp))
        });
        self.records.truncate(LEADERBOARD_SIZE);
    }
}
