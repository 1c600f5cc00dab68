//! TCP leaderboard server
//!
//! Speaks the line protocol in [`crate::protocol`]. The board lives in memory
//! behind an `RwLock`; every connection may issue any number of requests.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use log::{debug, info, warn};
use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::{oneshot, RwLock};

use crate::protocol::{ClientMessage, ServerMessage};
use crate::record::{normalize_name, Leaderboard};

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 7878;

/// Longest request line accepted before the connection is dropped.
const MAX_LINE_BYTES: usize = 64 * 1024;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Create from `TETRIS_LEADERBOARD_HOST` / `TETRIS_LEADERBOARD_PORT`.
    pub fn from_env() -> Self {
        use std::env;

        let host = env::var("TETRIS_LEADERBOARD_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = env::var("TETRIS_LEADERBOARD_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Self { host, port }
    }

    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid listen address {}:{}", self.host, self.port))
    }
}

type SharedBoard = Arc<RwLock<Leaderboard>>;

/// Start the TCP server
///
/// Sends the bound address on `ready_tx` once listening (useful with port 0).
pub async fn run_server(
    config: ServerConfig,
    ready_tx: Option<oneshot::Sender<SocketAddr>>,
) -> anyhow::Result<()> {
    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(&addr).await?;
    let bound = listener.local_addr()?;
    info!("leaderboard listening on {}", bound);
    if let Some(tx) = ready_tx {
        let _ = tx.send(bound);
    }

    let board: SharedBoard = Arc::new(RwLock::new(Leaderboard::new()));
    let mut client_id_counter = 0usize;

    // Accept incoming connections
    loop {
        let (socket, peer) = listener.accept().await?;
        client_id_counter += 1;
        let client_id = client_id_counter;
        debug!("client {} connected from {}", client_id, peer);

        let board = Arc::clone(&board);
        tokio::spawn(async move {
            if let Err(e) = handle_client(socket, board).await {
                warn!("client {} error: {:#}", client_id, e);
            }
            debug!("client {} disconnected", client_id);
        });
    }
}

/// Handle a single client connection
async fn handle_client(socket: TcpStream, board: SharedBoard) -> anyhow::Result<()> {
    let (reader, mut writer) = socket.into_split();
    let mut reader = BufReader::new(reader);
    let mut line = String::new();

    loop {
        line.clear();
        // Never buffer more than one byte past the limit.
        let limit = MAX_LINE_BYTES as u64 + 1;
        if (&mut reader).take(limit).read_line(&mut line).await? == 0 {
            return Ok(());
        }
        if line.len() > MAX_LINE_BYTES {
            anyhow::bail!("request line longer than {} bytes", MAX_LINE_BYTES);
        }
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let reply = match serde_json::from_str::<ClientMessage>(trimmed) {
            Ok(message) => handle_message(message, &board).await,
            Err(e) => ServerMessage::error(format!("invalid request: {}", e)),
        };

        let mut out = serde_json::to_string(&reply)?;
        out.push('\n');
        writer.write_all(out.as_bytes()).await?;
        writer.flush().await?;
    }
}

async fn handle_message(message: ClientMessage, board: &SharedBoard) -> ServerMessage {
    match message {
        ClientMessage::GetScores => {
            let board = board.read().await;
            ServerMessage::Scores {
                scores: board.records().to_vec(),
            }
        }
        ClientMessage::SaveScore { mut score } => {
            score.name = normalize_name(&score.name);
            info!("saving score {} for {}", score.score, score.name);
            board.write().await.insert(score);
            ServerMessage::Saved { success: true }
        }
    }
}
