//! Stroke rasterization onto the mask
//!
//! A punched path is stroked as a coverage field: every pixel near the
//! flattened polyline gets a coverage in [0, 1] from its distance to the
//! nearest segment, with a one-pixel anti-aliased band at the stroke
//! edge. Distance-to-segment gives round caps and round joins, and
//! because coverage is a pure function of position, overlapping segments
//! cannot erase a pixel twice.

use glam::Vec2;
use tracing::debug;

use super::MaskSurface;
use crate::constants::{EDGE_FEATHER, MIN_BRUSH_RADIUS};
use crate::path::ErasePath;

impl MaskSurface {
    /// Erase along `path`, stroked at `stroke_width`
    ///
    /// Destination-out: wherever the stroke covers a pixel, that pixel's
    /// alpha is clamped toward fully transparent. Idempotent per call;
    /// re-punching the same path changes nothing.
    pub fn punch(&mut self, path: &ErasePath, stroke_width: f32) {
        let Some((min, max)) = path.bounds() else {
            debug!("punch: empty path, nothing to erase");
            return;
        };

        let radius = (stroke_width * 0.5).max(MIN_BRUSH_RADIUS);
        let pad = radius + EDGE_FEATHER;

        let x_min = ((min.x - pad).floor().max(0.0) as u32).min(self.buffer.width);
        let y_min = ((min.y - pad).floor().max(0.0) as u32).min(self.buffer.height);
        let x_max = ((max.x + pad).ceil().max(0.0) as u32).min(self.buffer.width);
        let y_max = ((max.y + pad).ceil().max(0.0) as u32).min(self.buffer.height);

        if x_min >= x_max || y_min >= y_max {
            debug!("punch: path outside mask bounds");
            return;
        }

        let polyline = path.flatten();

        for py in y_min..y_max {
            for px in x_min..x_max {
                let center = Vec2::new(px as f32 + 0.5, py as f32 + 0.5);
                let dist = polyline_distance(center, &polyline);
                let coverage = ((radius - dist) / EDGE_FEATHER + 0.5).clamp(0.0, 1.0);
                if coverage > 0.0 {
                    self.buffer.punch_pixel(px, py, coverage);
                }
            }
        }

        self.mark_region_dirty(x_min, y_min, x_max - x_min, y_max - y_min);
        debug!(
            "punch: {} polyline points, width {:.1}, region ({}, {}) {}x{}",
            polyline.len(),
            stroke_width,
            x_min,
            y_min,
            x_max - x_min,
            y_max - y_min
        );
    }
}

/// Distance from `p` to the nearest point on the polyline
fn polyline_distance(p: Vec2, points: &[Vec2]) -> f32 {
    match points {
        [] => f32::INFINITY,
        [only] => p.distance(*only),
        _ => points
            .windows(2)
            .map(|pair| segment_distance(p, pair[0], pair[1]))
            .fold(f32::INFINITY, f32::min),
    }
}

/// Distance from `p` to the segment `a`..`b`
fn segment_distance(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= f32::EPSILON {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}
