//! Shared configuration for scratchoff
//!
//! This crate provides the single source of truth for erase-overlay
//! settings shared between the core library and the demo host: brush
//! width, mask background color, touch tolerance, and mask dimensions.

use serde::{Deserialize, Serialize};

/// Default erase-brush thickness in pixels
pub const DEFAULT_STROKE_WIDTH: f32 = 8.0;

/// Default mask background: neutral opaque gray
pub const DEFAULT_BACKGROUND: [f32; 4] = [0.5, 0.5, 0.5, 1.0];

/// Default touch tolerance (0.0 = every move sample is accepted)
pub const DEFAULT_TOUCH_TOLERANCE: f32 = 0.0;

/// Configuration for one erasable overlay region
///
/// Pure value object with no behavior. `width`/`height` default to 0 and
/// must be set to positive values before erase mode can be enabled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EraseConfig {
    /// Erase-brush thickness in pixels
    pub stroke_width: f32,
    /// Opaque color the mask is filled with
    pub background: [f32; 4],
    /// Minimum per-axis movement before a drag sample is accepted
    pub touch_tolerance: f32,
    /// Mask width in pixels
    pub width: i32,
    /// Mask height in pixels
    pub height: i32,
    /// Whether erase mode is on
    pub enabled: bool,
}

impl Default for EraseConfig {
    fn default() -> Self {
        Self {
            stroke_width: DEFAULT_STROKE_WIDTH,
            background: DEFAULT_BACKGROUND,
            touch_tolerance: DEFAULT_TOUCH_TOLERANCE,
            width: 0,
            height: 0,
            enabled: false,
        }
    }
}

impl EraseConfig {
    /// Create a config with the given mask dimensions and all other
    /// settings at their defaults
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Whether the configured dimensions can back a mask buffer
    pub fn has_valid_dimensions(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Width as f32 for geometry calculations
    pub fn width_f32(&self) -> f32 {
        self.width as f32
    }

    /// Height as f32 for geometry calculations
    pub fn height_f32(&self) -> f32 {
        self.height as f32
    }
}
