//! Drop scheduler - converts elapsed frame time into gravity drops
//!
//! Fixed-timestep accumulator: each frame adds its delta, and once the total
//! strictly exceeds the drop interval a single drop fires and the accumulator
//! goes back to zero. Excess time past the interval is discarded rather than
//! carried over, so slow frames lose time instead of producing drop bursts.

use crate::types::Difficulty;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropScheduler {
    interval_ms: u32,
    accumulator_ms: u32,
    /// Wall-clock instant of the previous frame, if any.
    last_frame_ms: Option<u64>,
}

impl DropScheduler {
    pub fn new(difficulty: Difficulty) -> Self {
        Self::with_interval(difficulty.drop_interval_ms())
    }

    pub fn with_interval(interval_ms: u32) -> Self {
        Self {
            interval_ms,
            accumulator_ms: 0,
            last_frame_ms: None,
        }
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub fn accumulator_ms(&self) -> u32 {
        self.accumulator_ms
    }

    /// Add `delta_ms` and report whether a drop is due.
    pub fn advance(&mut self, delta_ms: u32) -> bool {
        self.accumulator_ms = self.accumulator_ms.saturating_add(delta_ms);
        if self.accumulator_ms > self.interval_ms {
            self.accumulator_ms = 0;
            true
        } else {
            false
        }
    }

    /// Record a frame instant and return the time since the previous one.
    ///
    /// The first frame after construction, [`reset`](Self::reset) or
    /// [`forget_clock`](Self::forget_clock) only sets the reference and yields 0.
    pub fn elapsed_since_last(&mut self, now_ms: u64) -> u32 {
        let delta = match self.last_frame_ms {
            Some(prev) => now_ms.saturating_sub(prev),
            None => 0,
        };
        self.last_frame_ms = Some(now_ms);
        u32::try_from(delta).unwrap_or(u32::MAX)
    }

    /// Move the wall-clock reference to `now_ms` without accumulating.
    pub fn resync(&mut self, now_ms: u64) {
        self.last_frame_ms = Some(now_ms);
    }

    /// Drop the wall-clock reference; the next frame resynchronises.
    pub fn forget_clock(&mut self) {
        self.last_frame_ms = None;
    }

    /// Zero the accumulator and the clock reference.
    pub fn reset(&mut self) {
        self.accumulator_ms = 0;
        self.last_frame_ms = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_from_difficulty() {
        assert_eq!(DropScheduler::new(Difficulty::Easy).interval_ms(), 1500);
        assert_eq!(DropScheduler::new(Difficulty::Expert).interval_ms(), 300);
    }

    #[test]
    fn test_fires_only_after_exceeding_interval() {
        let mut s = DropScheduler::new(Difficulty::Medium);
        assert!(!s.advance(500));
        assert!(!s.advance(500)); // exactly 1000 is not "exceeds"
        assert!(s.advance(1));
        assert_eq!(s.accumulator_ms(), 0);
    }

    #[test]
    fn test_excess_time_is_discarded() {
        let mut s = DropScheduler::new(Difficulty::Hard);
        // One huge frame produces exactly one drop and no carry-over.
        assert!(s.advance(5000));
        assert_eq!(s.accumulator_ms(), 0);
        assert!(!s.advance(600));
    }

    #[test]
    fn test_clock_reference() {
        let mut s = DropScheduler::new(Difficulty::Medium);
        assert_eq!(s.elapsed_since_last(10_000), 0);
        assert_eq!(s.elapsed_since_last(10_016), 16);

        s.forget_clock();
        assert_eq!(s.elapsed_since_last(50_000), 0);

        s.resync(60_000);
        assert_eq!(s.elapsed_since_last(60_020), 20);
    }

    #[test]
    fn test_clock_going_backwards_is_zero() {
        let mut s = DropScheduler::new(Difficulty::Medium);
        s.resync(1_000);
        assert_eq!(s.elapsed_since_last(900), 0);
    }
}
