//! Tone plans: which tones a cue plays, and where they go.

use arrayvec::ArrayVec;

use crate::types::AudioCue;

/// Longest plan any cue produces (the game-over sweep).
pub const MAX_TONES: usize = 10;

pub type TonePlan = ArrayVec<Tone, MAX_TONES>;

/// One tone: pitch, length, start offset from the cue, and gain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub frequency_hz: f32,
    pub duration_ms: u32,
    /// Delay before this tone starts, relative to the cue.
    pub delay_ms: u32,
    pub volume: f32,
}

/// Device that actually makes (or records) a sound.
pub trait ToneOutput {
    fn play(&mut self, tone: &Tone);
}

/// Output that keeps every tone it is given.
#[derive(Debug, Clone, Default)]
pub struct RecordingOutput {
    pub tones: Vec<Tone>,
}

impl ToneOutput for RecordingOutput {
    fn play(&mut self, tone: &Tone) {
        self.tones.push(*tone);
    }
}

/// Tones for `cue` at `volume`.
pub fn tone_plan(cue: AudioCue, volume: f32) -> TonePlan {
    let mut plan = TonePlan::new();
    match cue {
        AudioCue::Move => plan.push(single(400.0, 50, volume)),
        AudioCue::Rotate => plan.push(single(600.0, 80, volume)),
        AudioCue::Pause => plan.push(single(200.0, 100, volume)),
        AudioCue::LineClear => sweep(&mut plan, 300.0, 800.0, 5, 100, 50, volume),
        AudioCue::GameOver => sweep(&mut plan, 800.0, 200.0, 10, 150, 30, volume),
    }
    plan
}

fn single(frequency_hz: f32, duration_ms: u32, volume: f32) -> Tone {
    Tone {
        frequency_hz,
        duration_ms,
        delay_ms: 0,
        volume,
    }
}

// Step i of n sits at start + (end - start) * i / n, so `end` is never reached.
fn sweep(
    plan: &mut TonePlan,
    start_hz: f32,
    end_hz: f32,
    steps: u32,
    duration_ms: u32,
    spacing_ms: u32,
    volume: f32,
) {
    for i in 0..steps {
        let frequency_hz = start_hz + (end_hz - start_hz) * (i as f32 / steps as f32);
        plan.push(Tone {
            frequency_hz,
            duration_ms,
            delay_ms: i * spacing_ms,
            volume,
        });
    }
}
