//! Terminal input module.
//!
//! Maps `crossterm` key and mouse events into [`crate::types::Intent`]s.
//! Restart, mute and quit are reported separately because they are host commands,
//! not session intents.

pub mod gesture;
pub mod map;

pub use tetris_lite_types as types;

pub use gesture::{classify_swipe, GestureTracker, DEFAULT_MIN_SWIPE};
pub use map::{handle_key_event, is_mute_toggle, is_restart, should_quit};
