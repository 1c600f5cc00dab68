use std::env;

use crate::core::AudioCueSink;
use crate::tone::{tone_plan, ToneOutput, TonePlan};
use crate::types::AudioCue;

pub const DEFAULT_VOLUME: f32 = 0.3;

/// Mute and volume settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AudioSettings {
    pub muted: bool,
    pub volume: f32,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            muted: false,
            volume: DEFAULT_VOLUME,
        }
    }
}

impl AudioSettings {
    /// Read `TETRIS_MUTED` and `TETRIS_VOLUME`.
    pub fn from_env() -> Self {
        let muted = env::var("TETRIS_MUTED")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        let volume = env::var("TETRIS_VOLUME")
            .ok()
            .and_then(|s| s.trim().parse::<f32>().ok())
            .map(clamp_volume)
            .unwrap_or(DEFAULT_VOLUME);

        Self { muted, volume }
    }
}

fn clamp_volume(volume: f32) -> f32 {
    if volume.is_nan() {
        return 0.0;
    }
    volume.clamp(0.0, 1.0)
}

/// Turns session cues into tone plans and plays them on an output.
#[derive(Debug, Clone)]
pub struct SoundManager<O: ToneOutput> {
    output: O,
    muted: bool,
    volume: f32,
}

impl<O: ToneOutput> SoundManager<O> {
    pub fn new(output: O) -> Self {
        Self::with_settings(output, AudioSettings::default())
    }

    pub fn with_settings(output: O, settings: AudioSettings) -> Self {
        Self {
            output,
            muted: settings.muted,
            volume: clamp_volume(settings.volume),
        }
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Flip mute and return the new state.
    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// Set the volume, clamped to [0, 1].
    pub fn set_volume(&mut self, volume: f32) {
        self.volume = clamp_volume(volume);
    }

    pub fn plan(&self, cue: AudioCue) -> TonePlan {
        tone_plan(cue, self.volume)
    }

    pub fn play(&mut self, cue: AudioCue) {
        if self.muted {
            return;
        }
        for tone in self.plan(cue).iter() {
            self.output.play(tone);
        }
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }
}

impl<O: ToneOutput> AudioCueSink for SoundManager<O> {
    fn cue(&mut self, cue: AudioCue) {
        self.play(cue);
    }
}
