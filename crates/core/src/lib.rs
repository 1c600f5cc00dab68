//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds the rules and the simulation of a falling-block puzzle on
//! a 10x20 board. It has no dependency on terminals, audio devices, storage or
//! networking: those are reached through the traits in [`collab`], and every
//! one of them has a silent or in-memory default.
//!
//! # Module Structure
//!
//! - [`shapes`]: pre-rotated 4x4 grids for the seven piece kinds
//! - [`board`]: the settled-cell grid and line clearing
//! - [`collision`]: the single collision oracle every mutation goes through
//! - [`piece`]: the falling piece, validated moves and kick-assisted rotation
//! - [`rng`]: seeded uniform piece selection
//! - [`scheduler`]: elapsed-time accumulator driving gravity
//! - [`session`]: the game session and its lifecycle
//! - [`snapshot`]: plain copies of session state for front ends
//!
//! # Rules
//!
//! - Pieces are chosen uniformly at random, with no bag.
//! - A blocked rotation tries one column left, then one column right.
//! - A piece that cannot fall locks immediately (no lock delay).
//! - Each cleared row is worth 100 points, with no multi-line bonus.
//!
//! # Example
//!
//! ```
//! use tetris_lite_core::GameSession;
//! use tetris_lite_types::{Difficulty, Intent};
//!
//! let mut game = GameSession::new(Difficulty::Medium, 12345);
//!
//! game.handle_intent(Intent::MoveRight);
//! game.handle_intent(Intent::Rotate);
//! game.handle_intent(Intent::HardDrop);
//!
//! assert_eq!(game.pieces_locked(), 1);
//! assert_eq!(game.score(), 0);
//! ```
//!
//! # Timing
//!
//! Hosts either call [`GameSession::tick`] with a millisecond delta, or
//! [`GameSession::frame`] with a wall-clock instant. A drop fires once the
//! accumulated time strictly exceeds the difficulty's interval.

pub mod board;
pub mod collab;
pub mod collision;
pub mod piece;
pub mod rng;
pub mod scheduler;
pub mod session;
pub mod shapes;
pub mod snapshot;

pub use tetris_lite_types as types;

// Re-export commonly used types for convenience
pub use board::{clear_lines, Board};
pub use collab::{AudioCueSink, HighScoreStore, MemoryHighScore, NoAudio, Renderer};
pub use collision::collides;
pub use piece::{Piece, WALL_KICKS};
pub use rng::SimpleRng;
pub use scheduler::DropScheduler;
pub use session::{GameSession, SessionBuilder};
pub use shapes::{get_grid, get_shape, rotation_count};
pub use snapshot::{GameSnapshot, PieceSnapshot};
