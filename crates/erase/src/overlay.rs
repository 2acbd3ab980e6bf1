//! Erase overlay glue
//!
//! [`EraseOverlay`] composes one [`MaskSurface`] and one [`StrokeTracker`]
//! per erasable region and wires them to the host through two capability
//! traits: [`TouchSink`] (inbound pointer events) and [`Paintable`]
//! (outbound frame content). The host renders its text first and
//! composites the overlay's frame second; no widget subclassing.

use std::borrow::Cow;

use tracing::{debug, error, info};

use scratchoff_config::EraseConfig;

use crate::error::EraseError;
use crate::mask::{DirtyRect, MaskSurface};
use crate::surface::MaskBuffer;
use crate::tracker::StrokeTracker;

/// Receives serialized pointer events for one erasable region
pub trait TouchSink {
    fn pointer_down(&mut self, x: f32, y: f32);
    fn pointer_move(&mut self, x: f32, y: f32);
    fn pointer_up(&mut self, x: f32, y: f32);
}

/// Supplies pixel content the host composites over its own rendering
pub trait Paintable {
    /// The content to composite this redraw, or `None` when there is
    /// nothing to draw (erase mode off or mask uninitialized)
    fn frame(&self) -> Option<Cow<'_, MaskBuffer>>;
}

/// One erasable overlay region: mask, tracker, and configuration
///
/// The mask is allocated when erase mode is enabled and replaced on every
/// re-enable, so enabling again after scratching restores a fresh opaque
/// overlay. While a gesture is in progress the committed mask is left
/// untouched; live feedback is computed into a disposable copy.
#[derive(Debug, Default)]
pub struct EraseOverlay {
    config: EraseConfig,
    mask: Option<MaskSurface>,
    tracker: StrokeTracker,
}

impl EraseOverlay {
    pub fn new(config: EraseConfig) -> Self {
        let tracker = StrokeTracker::new(config.touch_tolerance);
        Self {
            config,
            mask: None,
            tracker,
        }
    }

    #[inline]
    pub fn config(&self) -> &EraseConfig {
        &self.config
    }

    /// Set the mask dimensions
    ///
    /// While erase mode is on, the mask is replaced immediately (erased
    /// regions are discarded); a failed rebuild is logged and leaves the
    /// overlay without a mask, like any other enable.
    pub fn set_dimensions(&mut self, width: i32, height: i32) {
        self.config.width = width;
        self.config.height = height;
        if self.config.enabled {
            let _ = self.enable();
        }
    }

    pub fn stroke_width(&self) -> f32 {
        self.config.stroke_width
    }

    pub fn set_stroke_width(&mut self, width: f32) {
        self.config.stroke_width = width;
    }

    pub fn background(&self) -> [f32; 4] {
        self.config.background
    }

    /// Set the mask background color; applied on the next enable or reset
    pub fn set_background(&mut self, background: [f32; 4]) {
        self.config.background = background;
    }

    pub fn touch_tolerance(&self) -> f32 {
        self.config.touch_tolerance
    }

    pub fn set_touch_tolerance(&mut self, tolerance: f32) {
        self.config.touch_tolerance = tolerance;
        self.tracker.set_touch_tolerance(tolerance);
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Whether a drag gesture is currently erasing
    #[inline]
    pub fn is_erasing(&self) -> bool {
        self.tracker.is_tracking()
    }

    /// Replace the configuration and enable erase mode
    pub fn enable_with(&mut self, config: EraseConfig) -> Result<(), EraseError> {
        self.config = config;
        self.enable()
    }

    /// Turn erase mode on, (re)creating the mask from the current config
    ///
    /// Any previous mask and its erased regions are discarded. With
    /// non-positive dimensions the mask stays uninitialized and the error
    /// is returned; the overlay then renders nothing until dimensions are
    /// corrected and enable is called again.
    pub fn enable(&mut self) -> Result<(), EraseError> {
        self.config.enabled = true;
        self.tracker.set_touch_tolerance(self.config.touch_tolerance);
        self.tracker.reset();

        match MaskSurface::new(
            self.config.width,
            self.config.height,
            self.config.background,
        ) {
            Ok(mask) => {
                info!(
                    "erase mode enabled with {}x{} mask",
                    mask.width(),
                    mask.height()
                );
                self.mask = Some(mask);
                Ok(())
            }
            Err(err) => {
                error!("erase mask left uninitialized: {err}");
                self.mask = None;
                Err(err)
            }
        }
    }

    /// Turn erase mode off, dropping the mask and any unfinished stroke
    pub fn disable(&mut self) {
        self.config.enabled = false;
        self.mask = None;
        self.tracker.reset();
    }

    #[inline]
    fn is_active(&self) -> bool {
        self.config.enabled && self.mask.is_some()
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) {
        if !self.is_active() {
            return;
        }
        self.tracker.on_down(x, y);
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        if !self.is_active() {
            return;
        }
        self.tracker.on_move(x, y);
    }

    /// Finish the gesture and commit the completed path onto the mask
    pub fn pointer_up(&mut self, x: f32, y: f32) {
        if !self.is_active() {
            return;
        }
        if let Some(path) = self.tracker.on_up(x, y) {
            if let Some(mask) = &mut self.mask {
                debug!("committing stroke with {} segments", path.segment_count());
                mask.punch(&path, self.config.stroke_width);
            }
        }
    }

    /// The last committed mask content; `None` when no mask exists
    pub fn snapshot(&self) -> Option<&MaskBuffer> {
        self.mask.as_ref().map(MaskSurface::snapshot)
    }

    /// Take the committed region modified since the last call
    pub fn take_dirty(&mut self) -> Option<DirtyRect> {
        self.mask.as_mut().and_then(MaskSurface::take_dirty)
    }
}

impl TouchSink for EraseOverlay {
    fn pointer_down(&mut self, x: f32, y: f32) {
        EraseOverlay::pointer_down(self, x, y);
    }

    fn pointer_move(&mut self, x: f32, y: f32) {
        EraseOverlay::pointer_move(self, x, y);
    }

    fn pointer_up(&mut self, x: f32, y: f32) {
        EraseOverlay::pointer_up(self, x, y);
    }
}

impl Paintable for EraseOverlay {
    /// Committed content when idle; mid-gesture, a disposable copy with
    /// the in-progress path punched in, leaving the committed buffer
    /// untouched
    fn frame(&self) -> Option<Cow<'_, MaskBuffer>> {
        let mask = self.mask.as_ref()?;
        if self.tracker.is_tracking() && !self.tracker.current_path().is_empty() {
            let mut live = mask.clone();
            live.punch(self.tracker.current_path(), self.config.stroke_width);
            Some(Cow::Owned(live.into_buffer()))
        } else {
            Some(Cow::Borrowed(mask.snapshot()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRAY: [f32; 4] = [0.5, 0.5, 0.5, 1.0];

    fn enabled_overlay(width: i32, height: i32) -> EraseOverlay {
        let mut config = EraseConfig::new(width, height);
        config.background = GRAY;
        let mut overlay = EraseOverlay::new(config);
        overlay.enable().unwrap();
        overlay
    }

    #[test]
    fn test_enable_with_invalid_dimensions() {
        let mut overlay = EraseOverlay::new(EraseConfig::default());
        let err = overlay.enable().unwrap_err();
        assert_eq!(
            err,
            EraseError::InvalidDimensions {
                width: 0,
                height: 0
            }
        );

        // Degrades to "no overlay": nothing to composite, events ignored
        assert!(overlay.snapshot().is_none());
        assert!(overlay.frame().is_none());
        overlay.pointer_down(10.0, 10.0);
        assert!(!overlay.is_erasing());
    }

    #[test]
    fn test_enable_after_correcting_dimensions() {
        let mut overlay = EraseOverlay::new(EraseConfig::default());
        assert!(overlay.enable().is_err());

        overlay.set_dimensions(100, 50);
        overlay.enable().unwrap();
        assert_eq!(overlay.snapshot().unwrap().width, 100);
    }

    #[test]
    fn test_enable_with_replaces_configuration() {
        let mut overlay = EraseOverlay::new(EraseConfig::default());
        let mut config = EraseConfig::new(30, 20);
        config.stroke_width = 12.0;

        overlay.enable_with(config).unwrap();
        assert!(overlay.is_enabled());
        assert_eq!(overlay.stroke_width(), 12.0);
        assert_eq!(overlay.snapshot().unwrap().width, 30);
    }

    #[test]
    fn test_scratch_gesture_end_to_end() {
        let mut overlay = enabled_overlay(100, 50);

        overlay.pointer_down(10.0, 10.0);
        overlay.pointer_move(15.0, 10.0);
        overlay.pointer_up(20.0, 10.0);

        let committed = overlay.snapshot().unwrap();
        for x in 10..=19 {
            assert_eq!(committed.get_pixel(x, 10).unwrap()[3], 0.0);
        }
        assert_eq!(committed.get_pixel(60, 25), Some(GRAY));
        assert!(!overlay.is_erasing());
    }

    #[test]
    fn test_live_frame_leaves_committed_untouched() {
        let mut overlay = enabled_overlay(100, 50);

        overlay.pointer_down(10.0, 10.0);
        overlay.pointer_move(40.0, 10.0);

        // Live frame shows the in-progress stroke
        let live = overlay.frame().unwrap();
        assert!(matches!(live, Cow::Owned(_)));
        assert!(live.get_pixel(20, 10).unwrap()[3] < 1.0);
        drop(live);

        // Committed state is still fully opaque mid-gesture
        let committed = overlay.snapshot().unwrap();
        for y in 0..50 {
            for x in 0..100 {
                assert_eq!(committed.get_pixel(x, y), Some(GRAY));
            }
        }

        // The commit happens on release
        overlay.pointer_up(40.0, 10.0);
        assert_eq!(overlay.snapshot().unwrap().get_pixel(20, 10).unwrap()[3], 0.0);
    }

    #[test]
    fn test_idle_frame_borrows_committed() {
        let overlay = enabled_overlay(40, 40);
        assert!(matches!(overlay.frame().unwrap(), Cow::Borrowed(_)));
    }

    #[test]
    fn test_reenable_discards_erase_history() {
        let mut overlay = enabled_overlay(100, 50);
        overlay.pointer_down(10.0, 25.0);
        overlay.pointer_up(90.0, 25.0);
        assert_eq!(overlay.snapshot().unwrap().get_pixel(50, 25).unwrap()[3], 0.0);

        overlay.enable().unwrap();
        let fresh = overlay.snapshot().unwrap();
        for y in 0..50 {
            for x in 0..100 {
                assert_eq!(fresh.get_pixel(x, y), Some(GRAY));
            }
        }
    }

    #[test]
    fn test_set_dimensions_while_enabled_replaces_mask() {
        let mut overlay = enabled_overlay(100, 50);
        overlay.pointer_down(10.0, 25.0);
        overlay.pointer_up(90.0, 25.0);

        overlay.set_dimensions(60, 30);
        let mask = overlay.snapshot().unwrap();
        assert_eq!((mask.width, mask.height), (60, 30));
        // Fresh mask, no erase history
        assert_eq!(mask.get_pixel(30, 15), Some(GRAY));
    }

    #[test]
    fn test_pointer_events_ignored_when_disabled() {
        let mut overlay = enabled_overlay(40, 40);
        overlay.disable();

        overlay.pointer_down(5.0, 5.0);
        overlay.pointer_move(20.0, 20.0);
        overlay.pointer_up(30.0, 30.0);
        assert!(overlay.snapshot().is_none());
        assert!(!overlay.is_erasing());
    }

    #[test]
    fn test_take_dirty_covers_committed_stroke() {
        let mut overlay = enabled_overlay(100, 50);
        // Fresh mask is fully dirty
        assert_eq!(overlay.take_dirty(), Some(DirtyRect::full(100, 50)));
        assert_eq!(overlay.take_dirty(), None);

        overlay.pointer_down(10.0, 10.0);
        // Nothing committed yet
        assert_eq!(overlay.take_dirty(), None);
        overlay.pointer_up(30.0, 10.0);

        let dirty = overlay.take_dirty().unwrap();
        assert!(dirty.x <= 10 && dirty.x + dirty.width >= 30);
    }

    #[test]
    fn test_touch_tolerance_reaches_tracker() {
        let mut overlay = enabled_overlay(100, 50);
        overlay.set_touch_tolerance(5.0);

        overlay.pointer_down(10.0, 10.0);
        overlay.pointer_move(12.0, 12.0);
        overlay.pointer_up(12.0, 12.0);

        // The dropped sample leaves only down + final line: a short dot-like
        // stroke near the down point, nothing erased further out
        let committed = overlay.snapshot().unwrap();
        assert_eq!(committed.get_pixel(40, 10), Some(GRAY));
    }
}
