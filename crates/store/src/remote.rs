//! Leaderboard client with local fallback.
//!
//! Each call opens a connection, sends one request line, reads one reply
//! line, all under a single timeout. Any failure logs a warning and the call
//! is answered from the local store instead. After a failure the server is
//! left alone for [`RETRY_AFTER`], so a dead server costs one timeout rather
//! than one per call. The high score never leaves the machine.

use std::cell::Cell;
use std::time::{Duration, Instant};

use anyhow::{anyhow, bail, Context};
use log::warn;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tokio::runtime::Runtime;

use crate::core::HighScoreStore;
use crate::local::LocalScoreStore;
use crate::protocol::{ClientMessage, ServerMessage};
use crate::record::{Leaderboard, ScoreRecord};
use crate::types::Difficulty;
use crate::ScoreStore;

/// How long calls skip the server after it failed.
pub const RETRY_AFTER: Duration = Duration::from_secs(30);

pub struct RemoteScoreStore {
    addr: String,
    timeout: Duration,
    local: LocalScoreStore,
    /// Set after a failed request; calls before this instant go straight to
    /// the local store.
    offline_until: Cell<Option<Instant>>,
    // Drives the async client from synchronous callers.
    rt: Runtime,
}

impl RemoteScoreStore {
    pub fn new(addr: impl Into<String>, timeout: Duration, local: LocalScoreStore) -> anyhow::Result<Self> {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .context("building leaderboard client runtime")?;

        Ok(Self {
            addr: addr.into(),
            timeout,
            local,
            offline_until: Cell::new(None),
            rt,
        })
    }

    pub fn addr(&self) -> &str {
        &self.addr
    }

    pub fn local(&self) -> &LocalScoreStore {
        &self.local
    }

    /// Whether calls are currently skipping the server.
    pub fn is_backing_off(&self) -> bool {
        matches!(self.offline_until.get(), Some(until) if Instant::now() < until)
    }

    /// Top scores from the server, re-ranked and truncated locally.
    pub fn fetch_scores(&self) -> anyhow::Result<Vec<ScoreRecord>> {
        match self.request(&ClientMessage::GetScores)? {
            ServerMessage::Scores { scores } => Ok(Leaderboard::from_records(scores).into_records()),
            ServerMessage::Error { message } => bail!("server error: {}", message),
            other => bail!("unexpected reply: {:?}", other),
        }
    }

    pub fn push_score(&self, record: ScoreRecord) -> anyhow::Result<bool> {
        match self.request(&ClientMessage::SaveScore { score: record })? {
            ServerMessage::Saved { success } => Ok(success),
            ServerMessage::Error { message } => bail!("server error: {}", message),
            other => bail!("unexpected reply: {:?}", other),
        }
    }

    fn request(&self, message: &ClientMessage) -> anyhow::Result<ServerMessage> {
        if self.is_backing_off() {
            bail!("{} failed recently, not retrying yet", self.addr);
        }

        // The timer must be created inside the runtime.
        let result = self.rt.block_on(async {
            tokio::time::timeout(self.timeout, exchange(&self.addr, message)).await
        });
        let result = match result {
            Ok(result) => result,
            Err(_) => Err(anyhow!(
                "no reply from {} within {}ms",
                self.addr,
                self.timeout.as_millis()
            )),
        };

        let retry_at = if result.is_err() {
            Some(Instant::now() + RETRY_AFTER)
        } else {
            None
        };
        self.offline_until.set(retry_at);
        result
    }
}

async fn exchange(addr: &str, message: &ClientMessage) -> anyhow::Result<ServerMessage> {
    let stream = TcpStream::connect(addr)
        .await
        .with_context(|| format!("connecting to {}", addr))?;
    let (reader, mut writer) = stream.into_split();

    let mut line = serde_json::to_string(message)?;
    line.push('\n');
    writer.write_all(line.as_bytes()).await?;
    writer.flush().await?;

    let mut reader = BufReader::new(reader);
    let mut reply = String::new();
    if reader.read_line(&mut reply).await? == 0 {
        bail!("connection closed before reply");
    }
    serde_json::from_str(reply.trim()).context("parsing reply")
}

impl HighScoreStore for RemoteScoreStore {
    fn load_high_score(&self) -> u32 {
        self.local.load_high_score()
    }

    fn save_high_score(&mut self, score: u32) {
        self.local.save_high_score(score);
    }
}

impl ScoreStore for RemoteScoreStore {
    fn top_scores(&self) -> Vec<ScoreRecord> {
        match self.fetch_scores() {
            Ok(scores) => scores,
            Err(e) => {
                warn!("failed to fetch scores from {}, using local storage: {:#}", self.addr, e);
                self.local.top_scores()
            }
        }
    }

    fn save_score(&mut self, name: &str, score: u32, difficulty: Difficulty) -> bool {
        let record = ScoreRecord::now(name, score, difficulty);
        match self.push_score(record.clone()) {
            Ok(success) => success,
            Err(e) => {
                warn!("failed to save score to {}, using local storage: {:#}", self.addr, e);
                self.local.save_local(record)
            }
        }
    }
}
