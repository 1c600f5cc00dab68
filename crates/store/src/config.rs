//! Which score store to use, read from the environment.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::core::HighScoreStore;
use crate::local::LocalScoreStore;
use crate::record::ScoreRecord;
use crate::remote::RemoteScoreStore;
use crate::storage::FileStorage;
use crate::types::Difficulty;
use crate::ScoreStore;

pub const DEFAULT_STORE_PATH: &str = "tetris-scores.json";
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Leaderboard server as `host:port`.
    pub api_addr: Option<String>,
    pub use_local_storage: bool,
    pub timeout_ms: u64,
    pub store_path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            api_addr: None,
            use_local_storage: true,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
        }
    }
}

impl StoreConfig {
    pub fn from_env() -> Self {
        let api_addr = env::var("TETRIS_SCORE_API")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        // Local unless a server is configured, and always overridable.
        let use_local_storage = env::var("TETRIS_USE_LOCAL_STORAGE")
            .ok()
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(api_addr.is_none());

        let timeout_ms = env::var("TETRIS_SCORE_TIMEOUT_MS")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_MS);

        let store_path = env::var("TETRIS_STORE_PATH")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_PATH));

        Self {
            api_addr,
            use_local_storage,
            timeout_ms,
            store_path,
        }
    }

    /// Point at a leaderboard server (or none) and choose local mode.
    pub fn with_api(mut self, api_addr: Option<String>, use_local_storage: bool) -> Self {
        if api_addr.is_some() {
            self.api_addr = api_addr;
        }
        self.use_local_storage = use_local_storage;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// The remote server is used only when configured and local mode is off.
    pub fn uses_remote(&self) -> bool {
        !self.use_local_storage && self.api_addr.is_some()
    }

    pub fn open(&self) -> anyhow::Result<ScoreBackend> {
        let local = LocalScoreStore::new(FileStorage::new(&self.store_path));
        match self.api_addr.as_deref() {
            Some(addr) if self.uses_remote() => Ok(ScoreBackend::Remote(RemoteScoreStore::new(
                addr,
                self.timeout(),
                local,
            )?)),
            _ => Ok(ScoreBackend::Local(local)),
        }
    }
}

/// The store picked by [`StoreConfig::open`].
pub enum ScoreBackend {
    Local(LocalScoreStore),
    Remote(RemoteScoreStore),
}

impl HighScoreStore for ScoreBackend {
    fn load_high_score(&self) -> u32 {
        match self {
            Self::Local(store) => store.load_high_score(),
            Self::Remote(store) => store.load_high_score(),
        }
    }

    fn save_high_score(&mut self, score: u32) {
        match self {
            Self::Local(store) => store.save_high_score(score),
            Self::Remote(store) => store.save_high_score(score),
        }
    }
}

impl ScoreStore for ScoreBackend {
    fn top_scores(&self) -> Vec<ScoreRecord> {
        match self {
            Self::Local(store) => store.top_scores(),
            Self::Remote(store) => store.top_scores(),
        }
    }

    fn save_score(&mut self, name: &str, score: u32, difficulty: Difficulty) -> bool {
        match self {
            Self::Local(store) => store.save_score(name, score, difficulty),
            Self::Remote(store) => store.save_score(name, score, difficulty),
        }
    }
}
