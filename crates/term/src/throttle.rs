use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::core::GameSnapshot;

/// Skips redraws of frames that look the same.
///
/// While the game is live every changed snapshot is drawn. While paused or
/// over, an unchanged screen is refreshed at most once per `idle_interval_ms`
/// (enough to pick up terminal resizes).
#[derive(Debug, Clone)]
pub struct RenderThrottle {
    idle_interval_ms: u64,
    last_render_ms: u64,
    last_fingerprint: Option<u64>,
}

impl RenderThrottle {
    pub fn new(idle_interval_ms: u64) -> Self {
        Self {
            idle_interval_ms,
            last_render_ms: 0,
            last_fingerprint: None,
        }
    }

    /// Forget the last frame so the next call always renders.
    pub fn invalidate(&mut self) {
        self.last_fingerprint = None;
    }

    pub fn should_render(&mut self, now_ms: u64, snap: &GameSnapshot) -> bool {
        let fingerprint = fingerprint(snap);
        let changed = self.last_fingerprint != Some(fingerprint);
        let idle_due = !snap.playable()
            && now_ms.saturating_sub(self.last_render_ms) >= self.idle_interval_ms;

        if changed || idle_due {
            self.last_render_ms = now_ms;
            self.last_fingerprint = Some(fingerprint);
            true
        } else {
            false
        }
    }
}

fn fingerprint(snap: &GameSnapshot) -> u64 {
    let mut hasher = DefaultHasher::new();
    snap.hash(&mut hasher);
    hasher.finish()
}
