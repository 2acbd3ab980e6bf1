//! The committed erase-mask overlay
//!
//! A [`MaskSurface`] owns the opaque overlay image drawn over the host's
//! text. Drag gestures are committed onto it with [`MaskSurface::punch`],
//! which clears alpha under the stroke (destination-out). The host reads
//! the committed content back with [`MaskSurface::snapshot`].

mod dirty;
mod punch;

pub use dirty::DirtyRect;

use crate::error::EraseError;
use crate::surface::MaskBuffer;

/// The erasable overlay image
///
/// Exclusively owns its pixel buffer; the only writers are `punch` and
/// `reset`. Constructed only with positive dimensions.
#[derive(Debug, Clone)]
pub struct MaskSurface {
    pub(crate) buffer: MaskBuffer,
    background: [f32; 4],
    pub(crate) dirty: Option<DirtyRect>,
}

impl MaskSurface {
    /// Allocate the mask and fill it with `background`
    ///
    /// Fails with [`EraseError::InvalidDimensions`] when either dimension
    /// is non-positive. The failure is recoverable: the caller keeps no
    /// mask and simply skips overlay rendering.
    pub fn new(width: i32, height: i32, background: [f32; 4]) -> Result<Self, EraseError> {
        if width <= 0 || height <= 0 {
            return Err(EraseError::InvalidDimensions { width, height });
        }
        let mut buffer = MaskBuffer::new(width as u32, height as u32);
        buffer.fill(background);
        let dirty = Some(DirtyRect::full(buffer.width, buffer.height));
        Ok(Self {
            buffer,
            background,
            dirty,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.buffer.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.buffer.height
    }

    #[inline]
    pub fn background(&self) -> [f32; 4] {
        self.background
    }

    /// Re-fill the whole mask opaque, discarding all erased regions
    pub fn reset(&mut self, background: [f32; 4]) {
        self.background = background;
        self.buffer.fill(background);
        self.dirty = Some(DirtyRect::full(self.buffer.width, self.buffer.height));
    }

    /// The committed mask content, for host compositing. Read-only.
    #[inline]
    pub fn snapshot(&self) -> &MaskBuffer {
        &self.buffer
    }

    /// Consume the surface, keeping only its pixel buffer
    pub fn into_buffer(self) -> MaskBuffer {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::ErasePath;
    use glam::Vec2;

    const GRAY: [f32; 4] = [0.5, 0.5, 0.5, 1.0];

    #[test]
    fn test_new_fills_background() {
        let mask = MaskSurface::new(100, 50, GRAY).unwrap();
        assert_eq!(mask.width(), 100);
        assert_eq!(mask.height(), 50);
        for y in [0, 25, 49] {
            for x in [0, 50, 99] {
                assert_eq!(mask.snapshot().get_pixel(x, y), Some(GRAY));
            }
        }
    }

    #[test]
    fn test_new_rejects_non_positive_dimensions() {
        let err = MaskSurface::new(0, 50, GRAY).unwrap_err();
        assert_eq!(
            err,
            EraseError::InvalidDimensions {
                width: 0,
                height: 50
            }
        );
        let err = MaskSurface::new(100, -3, GRAY).unwrap_err();
        assert_eq!(
            err,
            EraseError::InvalidDimensions {
                width: 100,
                height: -3
            }
        );
    }

    #[test]
    fn test_reset_restores_opaque_background() {
        let mut mask = MaskSurface::new(60, 60, GRAY).unwrap();

        let mut path = ErasePath::new();
        path.move_to(Vec2::new(10.0, 30.0));
        path.line_to(Vec2::new(50.0, 30.0));
        mask.punch(&path, 8.0);
        assert_eq!(mask.snapshot().get_pixel(30, 30).unwrap()[3], 0.0);

        mask.reset(GRAY);
        for y in 0..60 {
            for x in 0..60 {
                assert_eq!(mask.snapshot().get_pixel(x, y), Some(GRAY));
            }
        }
    }
}
