//! Terminal front end.
//!
//! A small, game-oriented rendering layer: the session draws into a
//! framebuffer through the core `Renderer` trait, and the framebuffer is
//! flushed to the terminal with diffing. Also hosts the terminal-bell audio
//! output.

pub mod bell;
pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod throttle;

pub use tetris_lite_audio as audio;
pub use tetris_lite_core as core;
pub use tetris_lite_types as types;

pub use bell::BellOutput;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, BoardFrame, GameView, Hud, LeaderRow, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use throttle::RenderThrottle;
