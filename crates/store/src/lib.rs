//! Score persistence: local storage, a remote leaderboard, and its server.
//!
//! Every public store method is infallible. Errors are logged with
//! `log::warn!` and answered from local storage, so nothing here can stop a
//! game.

pub mod config;
pub mod local;
pub mod protocol;
pub mod record;
pub mod remote;
pub mod server;
pub mod storage;

pub use tetris_lite_core as core;
pub use tetris_lite_types as types;

pub use config::{ScoreBackend, StoreConfig};
pub use local::{LocalScoreStore, HIGH_SCORE_KEY, TOP_SCORES_KEY};
pub use protocol::{ClientMessage, ServerMessage};
pub use record::{normalize_name, Leaderboard, ScoreRecord, DEFAULT_PLAYER_NAME};
pub use remote::{RemoteScoreStore, RETRY_AFTER};
pub use server::{run_server, ServerConfig};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};

use crate::core::HighScoreStore;
use crate::types::Difficulty;

/// Leaderboard access on top of the session's high-score persistence.
pub trait ScoreStore: HighScoreStore {
    /// Best scores first, at most ten.
    fn top_scores(&self) -> Vec<ScoreRecord>;

    /// Record a finished game. The name is trimmed (blank becomes "Player")
    /// and the record is stamped with the current time.
    fn save_score(&mut self, name: &str, score: u32, difficulty: Difficulty) -> bool;
}
