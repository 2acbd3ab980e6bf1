//! Pointer samples to smoothed erase path
//!
//! The tracker is a small state machine (idle -> tracking -> idle). While
//! tracking it appends one quadratic segment per accepted sample, using
//! the previous raw sample as control point and the midpoint as endpoint.
//! That rounds the trace using O(1) history and no lookahead, so it can
//! run per-sample in the event handler.

use glam::Vec2;
use tracing::debug;

use crate::path::ErasePath;

/// Converts raw pointer positions into a smoothed [`ErasePath`]
///
/// Owns only path geometry; the completed path is handed back from
/// [`on_up`](Self::on_up) for the caller to commit onto a mask.
#[derive(Debug, Default)]
pub struct StrokeTracker {
    path: ErasePath,
    /// Last accepted sample; `None` while idle
    anchor: Option<Vec2>,
    touch_tolerance: f32,
}

impl StrokeTracker {
    /// Create a tracker with the given touch tolerance
    ///
    /// Tolerance is the minimum per-axis movement before a sample is
    /// accepted; 0.0 accepts every sample.
    pub fn new(touch_tolerance: f32) -> Self {
        Self {
            path: ErasePath::new(),
            anchor: None,
            touch_tolerance,
        }
    }

    #[inline]
    pub fn touch_tolerance(&self) -> f32 {
        self.touch_tolerance
    }

    pub fn set_touch_tolerance(&mut self, tolerance: f32) {
        self.touch_tolerance = tolerance;
    }

    /// Whether a stroke is in progress
    #[inline]
    pub fn is_tracking(&self) -> bool {
        self.anchor.is_some()
    }

    /// The in-progress path, for live preview rendering
    #[inline]
    pub fn current_path(&self) -> &ErasePath {
        &self.path
    }

    /// Begin a stroke at `(x, y)`
    ///
    /// Any unfinished previous path is abandoned.
    pub fn on_down(&mut self, x: f32, y: f32) {
        let point = Vec2::new(x, y);
        self.path.clear();
        self.path.move_to(point);
        self.anchor = Some(point);
    }

    /// Continue the stroke with a new sample
    ///
    /// Appends one quadratic segment when the sample moved at least the
    /// touch tolerance on either axis; jitter below the tolerance is
    /// dropped without moving the anchor. Returns whether the sample was
    /// accepted. A move without a preceding down is ignored.
    pub fn on_move(&mut self, x: f32, y: f32) -> bool {
        let Some(anchor) = self.anchor else {
            debug!("on_move: no active stroke, ignoring sample");
            return false;
        };

        let dx = (x - anchor.x).abs();
        let dy = (y - anchor.y).abs();
        if dx < self.touch_tolerance && dy < self.touch_tolerance {
            return false;
        }

        let point = Vec2::new(x, y);
        let midpoint = (anchor + point) * 0.5;
        self.path.quad_to(anchor, midpoint);
        self.anchor = Some(point);
        true
    }

    /// Finish the stroke at `(x, y)` and hand back the completed path
    ///
    /// Appends a final straight segment from the anchor to the release
    /// point. The tracker returns to idle; an up without a preceding down
    /// is ignored and returns `None`.
    pub fn on_up(&mut self, x: f32, y: f32) -> Option<ErasePath> {
        if self.anchor.is_none() {
            debug!("on_up: no active stroke, ignoring");
            return None;
        }

        self.path.line_to(Vec2::new(x, y));
        self.anchor = None;
        Some(std::mem::take(&mut self.path))
    }

    /// Abandon any in-progress stroke and return to idle
    pub fn reset(&mut self) {
        self.path.clear();
        self.anchor = None;
    }
}
