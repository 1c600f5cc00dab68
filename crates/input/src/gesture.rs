//! Pointer gestures: a press-drag-release is read as one swipe.
//!
//! Terminal cells are roughly twice as tall as they are wide, so vertical
//! travel counts double when comparing axes and checking the threshold.

use crate::types::Intent;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

/// Minimum travel (in column units) for a drag to count as a swipe.
pub const DEFAULT_MIN_SWIPE: u16 = 4;

/// Classify a completed drag by its travel in terminal cells.
///
/// Short drags are taps and rotate. Otherwise the dominant axis wins:
/// left/right move, down hard-drops, up rotates.
pub fn classify_swipe(dx: i32, dy: i32, min_distance: u16) -> Intent {
    let horizontal = dx.abs();
    let vertical = dy.abs() * 2;

    if horizontal.max(vertical) < i32::from(min_distance) {
        return Intent::Rotate;
    }

    if horizontal >= vertical {
        if dx < 0 {
            Intent::MoveLeft
        } else {
            Intent::MoveRight
        }
    } else if dy > 0 {
        Intent::HardDrop
    } else {
        Intent::Rotate
    }
}

/// Tracks the left button between press and release.
#[derive(Debug, Clone)]
pub struct GestureTracker {
    start: Option<(u16, u16)>,
    min_distance: u16,
}

impl GestureTracker {
    pub fn new(min_distance: u16) -> Self {
        Self {
            start: None,
            min_distance,
        }
    }

    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }

    /// Feed a mouse event; a release that ends a tracked press yields an intent.
    pub fn handle_mouse_event(&mut self, event: MouseEvent) -> Option<Intent> {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.start = Some((event.column, event.row));
                None
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let (col, row) = self.start.take()?;
                let dx = i32::from(event.column) - i32::from(col);
                let dy = i32::from(event.row) - i32::from(row);
                Some(classify_swipe(dx, dy, self.min_distance))
            }
            _ => None,
        }
    }
}

impl Default for GestureTracker {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_SWIPE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn swipe(tracker: &mut GestureTracker, from: (u16, u16), to: (u16, u16)) -> Option<Intent> {
        assert_eq!(
            tracker.handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), from.0, from.1)),
            None
        );
        tracker.handle_mouse_event(mouse(MouseEventKind::Drag(MouseButton::Left), to.0, to.1));
        tracker.handle_mouse_event(mouse(MouseEventKind::Up(MouseButton::Left), to.0, to.1))
    }

    #[test]
    fn test_classify_directions() {
        assert_eq!(classify_swipe(-6, 1, 4), Intent::MoveLeft);
        assert_eq!(classify_swipe(6, -1, 4), Intent::MoveRight);
        assert_eq!(classify_swipe(1, 5, 4), Intent::HardDrop);
        assert_eq!(classify_swipe(0, -5, 4), Intent::Rotate);
    }

    #[test]
    fn test_short_drag_is_tap() {
        assert_eq!(classify_swipe(0, 0, 4), Intent::Rotate);
        assert_eq!(classify_swipe(3, 1, 4), Intent::Rotate);
    }

    #[test]
    fn test_tracker_swipes() {
        let mut tracker = GestureTracker::default();
        assert_eq!(swipe(&mut tracker, (20, 10), (10, 10)), Some(Intent::MoveLeft));
        assert_eq!(swipe(&mut tracker, (10, 10), (20, 11)), Some(Intent::MoveRight));
        assert_eq!(swipe(&mut tracker, (15, 3), (15, 12)), Some(Intent::HardDrop));
        assert_eq!(swipe(&mut tracker, (15, 5), (15, 5)), Some(Intent::Rotate));
        assert!(!tracker.is_tracking());
    }

    #[test]
    fn test_release_without_press_is_ignored() {
        let mut tracker = GestureTracker::default();
        assert_eq!(
            tracker.handle_mouse_event(mouse(MouseEventKind::Up(MouseButton::Left), 5, 5)),
            None
        );
        assert_eq!(
            tracker.handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Right), 5, 5)),
            None
        );
        assert!(!tracker.is_tracking());
    }
}
