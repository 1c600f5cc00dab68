//! tetris-lite (workspace facade crate).
//!
//! Re-exports the member crates under one name so binaries, integration tests
//! and benches can write `tetris_lite::{core, input, audio, store, term, types}`.

pub use tetris_lite_audio as audio;
pub use tetris_lite_core as core;
pub use tetris_lite_input as input;
pub use tetris_lite_store as store;
pub use tetris_lite_term as term;
pub use tetris_lite_types as types;
