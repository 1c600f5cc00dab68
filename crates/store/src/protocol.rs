//! Leaderboard wire protocol: one JSON object per line, tagged by `type`.
//!
//! ```text
//! -> {"type":"get_scores"}
//! <- {"type":"scores","scores":[{"name":..,"score":..,"difficulty":..,"timestamp":..}]}
//! -> {"type":"save_score","score":{..}}
//! <- {"type":"saved","success":true}
//! ```

use serde::{Deserialize, Serialize};

use crate::record::ScoreRecord;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    GetScores,
    SaveScore { score: ScoreRecord },
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    Scores {
        #[serde(default)]
        scores: Vec<ScoreRecord>,
    },
    Saved {
        #[serde(default)]
        success: bool,
    },
    Error {
        message: String,
    },
}

impl ServerMessage {
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }
}
