//! Scratch-off erase overlay core
//!
//! This crate provides the erasable-mask machinery for a scratch-off
//! reveal effect:
//! - [`surface::MaskBuffer`] - RGBA pixel storage with an idempotent
//!   destination-out primitive
//! - [`mask::MaskSurface`] - the committed overlay image and its erase
//!   operations (punch, reset, snapshot, dirty tracking)
//! - [`path::ErasePath`] - stroke geometry (move/quad/line segments)
//! - [`tracker::StrokeTracker`] - pointer samples to smoothed path
//! - [`overlay::EraseOverlay`] - glue the host attaches to a renderable
//!   surface via the [`overlay::Paintable`]/[`overlay::TouchSink`] traits
//!
//! The host renders its own content (text), then composites the mask
//! frame over it. This crate never renders text and never talks to a
//! window system.

pub mod constants;
pub mod error;
pub mod mask;
pub mod overlay;
pub mod path;
pub mod surface;
pub mod tracker;

pub use constants::*;
pub use error::*;
pub use mask::*;
pub use overlay::*;
pub use path::*;
pub use surface::*;
pub use tracker::*;
