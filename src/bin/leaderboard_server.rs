//! Leaderboard server (optional binary).
//!
//! Serves the line-delimited JSON score protocol that `RemoteScoreStore`
//! speaks. Listens on `TETRIS_LEADERBOARD_HOST:TETRIS_LEADERBOARD_PORT`
//! (default 127.0.0.1:7878); scores live in memory.

use anyhow::Result;

use tetris_lite::store::{run_server, ServerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ServerConfig::from_env();
    run_server(config, None).await
}
