//! Drag session bookkeeping: click/drag classification and dominant-axis deltas.
//!
//! All positions stored here are already y-inverted, so moving the pointer up (or right)
//! produces a positive change.

use super::host::{EventSource, PointerCapture};
use crate::core::geom::Pos;

/// True once either axis has moved by at least `threshold` since `last`.
pub fn has_moved_enough(new: Pos, last: Pos, threshold: f64) -> bool {
    (new.x - last.x).abs() >= threshold || (new.y - last.y).abs() >= threshold
}

/// Signed change along the axis that moved the most. Ties go to the y-axis.
pub fn largest_delta(new: Pos, old: Pos) -> f64 {
    let delta = new.delta_from(old);
    if delta.x.abs() > delta.y.abs() {
        delta.x
    } else {
        delta.y
    }
}

/// The period between a pointer press on the label and its release.
#[derive(Debug)]
pub struct DragSession {
    last_position: Pos,
    dragged: bool,
    capture: PointerCapture,
}

impl DragSession {
    /// `start` must already be y-inverted.
    pub fn start(start: Pos, capture: PointerCapture) -> Self {
        Self {
            last_position: start,
            dragged: false,
            capture,
        }
    }

    /// Whether this session has crossed the threshold, i.e. will not count as a click.
    pub fn is_dragged(&self) -> bool {
        self.dragged
    }

    /// Feeds one pointer sample (already y-inverted).
    ///
    /// Returns the dominant-axis delta to apply, or `None` while the movement is still
    /// below the threshold. Once a session is dragged it stays dragged and every later
    /// sample yields a delta.
    pub fn step(&mut self, new: Pos, threshold: f64) -> Option<f64> {
        if has_moved_enough(new, self.last_position, threshold) {
            self.dragged = true;
        }
        if !self.dragged {
            return None;
        }

        let delta = largest_delta(new, self.last_position);
        self.last_position = new;
        Some(delta)
    }

    /// Ends the session and drops its host-wide subscriptions. Returns whether it was a drag.
    pub fn finish(self, events: &mut dyn EventSource) -> bool {
        self.capture.release(events);
        self.dragged
    }
}

#[cfg(test)]
#[path = "../../tests/unit/field/drag.rs"]
mod tests;
