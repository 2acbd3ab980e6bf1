//! Dirty-region accumulation for host redraw hints

use super::MaskSurface;

/// Modified region in mask pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirtyRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl DirtyRect {
    /// A rect covering an entire surface of the given size
    pub fn full(width: u32, height: u32) -> Self {
        Self {
            x: 0,
            y: 0,
            width,
            height,
        }
    }

    /// Smallest rect containing both `self` and `other`
    pub fn union(self, other: Self) -> Self {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let x_end = (self.x + self.width).max(other.x + other.width);
        let y_end = (self.y + self.height).max(other.y + other.height);
        Self {
            x,
            y,
            width: x_end - x,
            height: y_end - y,
        }
    }
}

impl MaskSurface {
    /// Fold a modified region into the pending dirty rect
    pub(crate) fn mark_region_dirty(&mut self, x: u32, y: u32, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        let region = DirtyRect {
            x,
            y,
            width,
            height,
        };
        self.dirty = Some(match self.dirty {
            Some(pending) => pending.union(region),
            None => region,
        });
    }

    /// Take the accumulated modified region, clearing it
    pub fn take_dirty(&mut self) -> Option<DirtyRect> {
        self.dirty.take()
    }

    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty.is_some()
    }
}
