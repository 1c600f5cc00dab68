//! Terminal bell as a tone output.
//!
//! A bell has no pitch or length, so each cue rings once: on the first tone
//! of its plan (the one with no start delay). Silent tones never ring.

use std::io::{self, Write};

use crate::audio::{Tone, ToneOutput};

const BEL: &[u8] = b"\x07";

pub struct BellOutput<W: Write = io::Stdout> {
    out: W,
    rung: u32,
}

impl BellOutput<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> BellOutput<W> {
    pub fn new(out: W) -> Self {
        Self { out, rung: 0 }
    }

    /// How many times the bell has rung.
    pub fn rung(&self) -> u32 {
        self.rung
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }
}

impl<W: Write> ToneOutput for BellOutput<W> {
    fn play(&mut self, tone: &Tone) {
        if tone.delay_ms != 0 || tone.volume <= 0.0 {
            return;
        }
        // A failed bell is not worth interrupting the game for.
        if self.out.write_all(BEL).and_then(|_| self.out.flush()).is_ok() {
            self.rung += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::SoundManager;
    use crate::core::AudioCueSink;
    use crate::types::AudioCue;

    #[test]
    fn test_one_ring_per_cue() {
        let mut sound = SoundManager::new(BellOutput::new(Vec::new()));
        sound.cue(AudioCue::Move);
        sound.cue(AudioCue::GameOver);
        sound.cue(AudioCue::LineClear);

        assert_eq!(sound.output().rung(), 3);
        assert_eq!(sound.output().get_ref().as_slice(), b"\x07\x07\x07");
    }

    #[test]
    fn test_zero_volume_is_silent() {
        let mut sound = SoundManager::new(BellOutput::new(Vec::new()));
        sound.set_volume(0.0);
        sound.cue(AudioCue::Rotate);
        assert_eq!(sound.output().rung(), 0);
    }
}
