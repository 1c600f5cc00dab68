//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no external dependencies, so they can be used
//! by the simulation core, the renderers, the input mapping and the score store.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 is the top)
//! - **Spawn position**: (`COLS / 2 - 2`, 0) = (3, 0)
//!
//! # Drop Intervals by Difficulty
//!
//! | Difficulty | Interval |
//! |------------|----------|
//! | Easy | 1500ms |
//! | Medium | 1000ms |
//! | Hard | 600ms |
//! | Expert | 300ms |
//!
//! # Examples
//!
//! ```
//! use tetris_lite_types::{Difficulty, Intent, PieceKind, COLS, ROWS};
//!
//! assert_eq!(PieceKind::from_id(3), Some(PieceKind::T));
//! assert_eq!(PieceKind::T.id(), 3);
//!
//! assert_eq!(Difficulty::from_str("HARD"), Difficulty::Hard);
//! assert_eq!(Difficulty::from_str("nightmare"), Difficulty::Medium);
//! assert_eq!(Difficulty::Expert.drop_interval_ms(), 300);
//!
//! assert_eq!(Intent::from_str("hardDrop"), Some(Intent::HardDrop));
//!
//! assert_eq!(COLS, 10);
//! assert_eq!(ROWS, 20);
//! ```

/// Board width in cells (10 columns)
pub const COLS: usize = 10;

/// Board height in cells (20 rows)
pub const ROWS: usize = 20;

/// Spawn column of the piece grid origin.
pub const SPAWN_X: i8 = (COLS / 2) as i8 - 2;

/// Spawn row of the piece grid origin.
pub const SPAWN_Y: i8 = 0;

/// Points awarded per cleared line (no multi-line bonus).
pub const POINTS_PER_LINE: u32 = 100;

/// Maximum number of records kept on a leaderboard.
pub const LEADERBOARD_SIZE: usize = 10;

/// A settled board cell.
///
/// `0` is empty; `1..=7` is the [`PieceKind::id`] of the piece that left it.
/// The value is only used for colour lookup.
pub type Cell = u8;

/// Empty cell value.
pub const EMPTY: Cell = 0;

/// The seven tetromino piece kinds
///
/// Ids (and default colours) match the classic browser palette:
/// - **I** = 1: Cyan
/// - **O** = 2: Yellow
/// - **T** = 3: Purple
/// - **S** = 4: Green
/// - **Z** = 5: Red
/// - **J** = 6: Blue
/// - **L** = 7: Orange
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds in id order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Cell value written to the board for this kind (1..=7).
    pub fn id(&self) -> Cell {
        match self {
            PieceKind::I => 1,
            PieceKind::O => 2,
            PieceKind::T => 3,
            PieceKind::S => 4,
            PieceKind::Z => 5,
            PieceKind::J => 6,
            PieceKind::L => 7,
        }
    }

    /// Inverse of [`PieceKind::id`]. Returns `None` for `0` and out-of-range values.
    pub fn from_id(id: Cell) -> Option<Self> {
        match id {
            1 => Some(PieceKind::I),
            2 => Some(PieceKind::O),
            3 => Some(PieceKind::T),
            4 => Some(PieceKind::S),
            5 => Some(PieceKind::Z),
            6 => Some(PieceKind::J),
            7 => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_lite_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Uppercase letter, used by the side panel.
    pub fn letter(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::J => "J",
            PieceKind::L => "L",
        }
    }
}

/// Difficulty level, selecting the gravity drop interval.
///
/// Chosen once per session; unknown names fall back to [`Difficulty::Medium`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
    Expert,
}

impl Difficulty {
    /// Parse a difficulty name (case-insensitive, surrounding whitespace ignored).
    ///
    /// Anything unrecognised maps to `Medium`.
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "easy" => Difficulty::Easy,
            "medium" => Difficulty::Medium,
            "hard" => Difficulty::Hard,
            "expert" => Difficulty::Expert,
            _ => Difficulty::Medium,
        }
    }

    /// Extract the `difficulty` parameter from a URL query string.
    ///
    /// Accepts an optional leading `?`. A missing parameter maps to `Medium`.
    ///
    /// ```
    /// use tetris_lite_types::Difficulty;
    ///
    /// assert_eq!(Difficulty::from_query("?difficulty=expert"), Difficulty::Expert);
    /// assert_eq!(Difficulty::from_query("mode=x&difficulty=easy"), Difficulty::Easy);
    /// assert_eq!(Difficulty::from_query(""), Difficulty::Medium);
    /// ```
    pub fn from_query(query: &str) -> Self {
        query
            .trim_start_matches('?')
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(key, _)| *key == "difficulty")
            .map(|(_, value)| Self::from_str(value))
            .unwrap_or_default()
    }

    /// Convert to lowercase string (the persisted form)
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Expert => "expert",
        }
    }

    /// Milliseconds between gravity drops.
    pub fn drop_interval_ms(&self) -> u32 {
        match self {
            Difficulty::Easy => 1500,
            Difficulty::Medium => 1000,
            Difficulty::Hard => 600,
            Difficulty::Expert => 300,
        }
    }
}

/// Discrete player intents delivered to the game session.
///
/// These are device independent; mapping from keys or gestures lives in the
/// input crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down (never locks)
    SoftDrop,
    /// Rotate to the next rotation state
    Rotate,
    /// Pause or resume
    TogglePause,
    /// Drop to the lowest valid position and lock
    HardDrop,
}

impl Intent {
    /// Parse intent from its camelCase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_lite_types::Intent;
    ///
    /// assert_eq!(Intent::from_str("moveLeft"), Some(Intent::MoveLeft));
    /// assert_eq!(Intent::from_str("togglepause"), Some(Intent::TogglePause));
    /// assert_eq!(Intent::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(Intent::MoveLeft),
            "moveright" => Some(Intent::MoveRight),
            "softdrop" => Some(Intent::SoftDrop),
            "rotate" => Some(Intent::Rotate),
            "togglepause" => Some(Intent::TogglePause),
            "harddrop" => Some(Intent::HardDrop),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::MoveLeft => "moveLeft",
            Intent::MoveRight => "moveRight",
            Intent::SoftDrop => "softDrop",
            Intent::Rotate => "rotate",
            Intent::TogglePause => "togglePause",
            Intent::HardDrop => "hardDrop",
        }
    }
}

/// Events announced to the audio cue sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioCue {
    Move,
    Rotate,
    LineClear,
    GameOver,
    Pause,
}

/// Session lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lifecycle {
    Running,
    Paused,
    Over,
}

impl Lifecycle {
    /// Whether the session accepts piece input and advances gravity.
    pub fn is_running(&self) -> bool {
        matches!(self, Lifecycle::Running)
    }
}
