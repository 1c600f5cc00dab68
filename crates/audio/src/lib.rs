//! Audio cues as tone plans.
//!
//! [`SoundManager`] implements the session's `AudioCueSink`: each cue becomes
//! a short list of tones handed to a [`ToneOutput`]. The terminal build plays
//! them on the bell; tests record them.

pub mod manager;
pub mod tone;

pub use tetris_lite_core as core;
pub use tetris_lite_types as types;

pub use manager::{AudioSettings, SoundManager, DEFAULT_VOLUME};
pub use tone::{tone_plan, RecordingOutput, Tone, ToneOutput, TonePlan, MAX_TONES};
