//! Collaborator interfaces consumed by the game session.
//!
//! The session only talks to these traits. Every collaborator has a
//! do-nothing or in-memory default, so an unconfigured session is valid.

use std::cell::RefCell;
use std::rc::Rc;

use crate::board::Board;
use crate::piece::Piece;
use crate::types::AudioCue;

/// Draws read-only views of the simulation. Never feeds back into it.
pub trait Renderer {
    fn draw_board(&mut self, board: &Board);
    fn draw_piece(&mut self, piece: &Piece);
}

/// Receives audio cues. Fire and forget.
pub trait AudioCueSink {
    fn cue(&mut self, cue: AudioCue);
}

/// Silent sink used when no audio is wired in.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAudio;

impl AudioCueSink for NoAudio {
    fn cue(&mut self, _cue: AudioCue) {}
}

/// High-score persistence as seen by the session.
///
/// Implementations must not fail: storage problems read as `0` and failed
/// writes are dropped.
pub trait HighScoreStore {
    fn load_high_score(&self) -> u32;
    fn save_high_score(&mut self, score: u32);
}

/// Process-local high score, used when nothing is persisted.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryHighScore {
    high_score: u32,
}

impl MemoryHighScore {
    pub fn new(high_score: u32) -> Self {
        Self { high_score }
    }
}

impl HighScoreStore for MemoryHighScore {
    fn load_high_score(&self) -> u32 {
        self.high_score
    }

    fn save_high_score(&mut self, score: u32) {
        self.high_score = score;
    }
}

// Shared handles let the host keep using a collaborator after handing it to
// a session.

impl<T: AudioCueSink + ?Sized> AudioCueSink for Rc<RefCell<T>> {
    fn cue(&mut self, cue: AudioCue) {
        self.borrow_mut().cue(cue);
    }
}

impl<T: HighScoreStore + ?Sized> HighScoreStore for Rc<RefCell<T>> {
    fn load_high_score(&self) -> u32 {
        self.borrow().load_high_score()
    }

    fn save_high_score(&mut self, score: u32) {
        self.borrow_mut().save_high_score(score);
    }
}

impl AudioCueSink for Vec<AudioCue> {
    fn cue(&mut self, cue: AudioCue) {
        self.push(cue);
    }
}
