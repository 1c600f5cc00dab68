use crate::piece::Piece;
use crate::types::{Cell, Difficulty, Lifecycle, PieceKind, COLS, ROWS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceSnapshot {
    pub kind: PieceKind,
    pub rotation: u8,
    pub x: i8,
    pub y: i8,
}

impl From<Piece> for PieceSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            x: value.x,
            y: value.y,
        }
    }
}

/// Copy of everything a front end needs to draw one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[Cell; COLS]; ROWS],
    pub active: Option<PieceSnapshot>,
    pub lifecycle: Lifecycle,
    pub difficulty: Difficulty,
    pub score: u32,
    pub high_score: u32,
    pub lines: u32,
    pub pieces_locked: u32,
    pub drop_accumulator_ms: u32,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        self.lifecycle.is_running()
    }

    pub fn paused(&self) -> bool {
        self.lifecycle == Lifecycle::Paused
    }

    pub fn game_over(&self) -> bool {
        self.lifecycle == Lifecycle::Over
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0; COLS]; ROWS],
            active: None,
            lifecycle: Lifecycle::Running,
            difficulty: Difficulty::default(),
            score: 0,
            high_score: 0,
            lines: 0,
            pieces_locked: 0,
            drop_accumulator_ms: 0,
        }
    }
}
