//! Score persistence in a key/value storage.

use log::warn;

use crate::core::HighScoreStore;
use crate::record::{Leaderboard, ScoreRecord};
use crate::storage::{KeyValueStorage, MemoryStorage};
use crate::types::Difficulty;
use crate::ScoreStore;

pub const HIGH_SCORE_KEY: &str = "tetrisHighScore";
pub const TOP_SCORES_KEY: &str = "tetrisTopScores";

pub struct LocalScoreStore {
    storage: Box<dyn KeyValueStorage>,
}

impl LocalScoreStore {
    pub fn new(storage: impl KeyValueStorage + 'static) -> Self {
        Self {
            storage: Box::new(storage),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(MemoryStorage::new())
    }

    /// Stored leaderboard. Missing or malformed data is an empty board.
    pub fn read_leaderboard(&self) -> anyhow::Result<Leaderboard> {
        let Some(text) = self.storage.get_item(TOP_SCORES_KEY)? else {
            return Ok(Leaderboard::new());
        };
        let records: Vec<ScoreRecord> = serde_json::from_str(&text).unwrap_or_default();
        Ok(Leaderboard::from_records(records))
    }

    pub fn save_record(&mut self, record: ScoreRecord) -> anyhow::Result<()> {
        let mut board = self.read_leaderboard()?;
        board.insert(record);
        let text = serde_json::to_string(board.records())?;
        self.storage.set_item(TOP_SCORES_KEY, &text)
    }

    pub fn read_high_score(&self) -> anyhow::Result<u32> {
        let value = self.storage.get_item(HIGH_SCORE_KEY)?;
        Ok(value.and_then(|s| s.trim().parse().ok()).unwrap_or(0))
    }

    pub fn write_high_score(&mut self, score: u32) -> anyhow::Result<()> {
        self.storage.set_item(HIGH_SCORE_KEY, &score.to_string())
    }

    /// Save without propagating storage errors.
    pub(crate) fn save_local(&mut self, record: ScoreRecord) -> bool {
        match self.save_record(record) {
            Ok(()) => true,
            Err(e) => {
                warn!("failed to save score: {:#}", e);
                false
            }
        }
    }
}

impl Default for LocalScoreStore {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl HighScoreStore for LocalScoreStore {
    fn load_high_score(&self) -> u32 {
        self.read_high_score().unwrap_or_else(|e| {
            warn!("failed to load high score: {:#}", e);
            0
        })
    }

    fn save_high_score(&mut self, score: u32) {
        if let Err(e) = self.write_high_score(score) {
            warn!("failed to save high score: {:#}", e);
        }
    }
}

impl ScoreStore for LocalScoreStore {
    fn top_scores(&self) -> Vec<ScoreRecord> {
        match self.read_leaderboard() {
            Ok(board) => board.into_records(),
            Err(e) => {
                warn!("failed to load top scores: {:#}", e);
                Vec::new()
            }
        }
    }

    fn save_score(&mut self, name: &str, score: u32, difficulty: Difficulty) -> bool {
        self.save_local(ScoreRecord::now(name, score, difficulty))
    }
}
