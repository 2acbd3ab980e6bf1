//! Stroke path geometry
//!
//! An [`ErasePath`] is the smoothed trace of one drag gesture: a move-to
//! start, quadratic segments while the pointer moves, and a final line
//! segment at release. The mask rasterizes it as a flattened polyline.

use glam::Vec2;

use crate::constants::{FLATTEN_STEP, MAX_FLATTEN_STEPS};

/// A single path segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    MoveTo(Vec2),
    QuadTo { ctrl: Vec2, end: Vec2 },
    LineTo(Vec2),
}

/// Ordered segments of one stroke
#[derive(Debug, Clone, Default)]
pub struct ErasePath {
    segments: Vec<PathSegment>,
}

impl ErasePath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the path at the given point, discarding nothing; callers
    /// that reuse a path should [`clear`](Self::clear) first
    pub fn move_to(&mut self, point: Vec2) {
        self.segments.push(PathSegment::MoveTo(point));
    }

    /// Append a quadratic segment ending at `end` with control point `ctrl`
    pub fn quad_to(&mut self, ctrl: Vec2, end: Vec2) {
        self.segments.push(PathSegment::QuadTo { ctrl, end });
    }

    /// Append a straight segment to `end`
    pub fn line_to(&mut self, end: Vec2) {
        self.segments.push(PathSegment::LineTo(end));
    }

    pub fn clear(&mut self) {
        self.segments.clear();
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    #[inline]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    #[inline]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Conservative bounding box over all segment points
    ///
    /// Quadratic segments are bounded by their control polygon, so
    /// including control points covers the curve without evaluating it.
    pub fn bounds(&self) -> Option<(Vec2, Vec2)> {
        let mut min: Option<Vec2> = None;
        let mut max: Option<Vec2> = None;
        let mut extend = |p: Vec2| {
            min = Some(min.map_or(p, |m| m.min(p)));
            max = Some(max.map_or(p, |m| m.max(p)));
        };
        for segment in &self.segments {
            match *segment {
                PathSegment::MoveTo(p) | PathSegment::LineTo(p) => extend(p),
                PathSegment::QuadTo { ctrl, end } => {
                    extend(ctrl);
                    extend(end);
                }
            }
        }
        min.zip(max)
    }

    /// Flatten the path to a polyline
    ///
    /// Quadratic segments are subdivided so chords stay near
    /// [`FLATTEN_STEP`] pixels, capped at [`MAX_FLATTEN_STEPS`] per
    /// segment. The result is the ordered list of points the stroke
    /// passes through.
    pub fn flatten(&self) -> Vec<Vec2> {
        let mut points = Vec::new();
        let mut cursor: Option<Vec2> = None;

        for segment in &self.segments {
            match *segment {
                PathSegment::MoveTo(p) => {
                    points.push(p);
                    cursor = Some(p);
                }
                PathSegment::LineTo(p) => {
                    points.push(p);
                    cursor = Some(p);
                }
                PathSegment::QuadTo { ctrl, end } => {
                    let start = cursor.unwrap_or(ctrl);
                    let control_len =
                        (ctrl - start).length() + (end - ctrl).length();
                    let steps = ((control_len / FLATTEN_STEP).ceil() as usize)
                        .clamp(1, MAX_FLATTEN_STEPS);
                    if cursor.is_none() {
                        points.push(start);
                    }
                    for i in 1..=steps {
                        let t = i as f32 / steps as f32;
                        points.push(quad_point(start, ctrl, end, t));
                    }
                    cursor = Some(end);
                }
            }
        }

        points
    }
}

/// Evaluate a quadratic Bezier at parameter `t`
#[inline]
fn quad_point(start: Vec2, ctrl: Vec2, end: Vec2, t: f32) -> Vec2 {
    let u = 1.0 - t;
    start * (u * u) + ctrl * (2.0 * u * t) + end * (t * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_path() {
        let path = ErasePath::new();
        assert!(path.is_empty());
        assert!(path.bounds().is_none());
        assert!(path.flatten().is_empty());
    }

    #[test]
    fn test_move_and_line_flatten() {
        let mut path = ErasePath::new();
        path.move_to(Vec2::new(1.0, 2.0));
        path.line_to(Vec2::new(5.0, 2.0));

        let points = path.flatten();
        assert_eq!(points.first(), Some(&Vec2::new(1.0, 2.0)));
        assert_eq!(points.last(), Some(&Vec2::new(5.0, 2.0)));
    }

    #[test]
    fn test_quad_passes_through_curve_midpoint() {
        // B(0.5) = 0.25*start + 0.5*ctrl + 0.25*end
        let start = Vec2::new(0.0, 0.0);
        let ctrl = Vec2::new(10.0, 0.0);
        let end = Vec2::new(10.0, 10.0);

        let mut path = ErasePath::new();
        path.move_to(start);
        path.quad_to(ctrl, end);

        let expected = start * 0.25 + ctrl * 0.5 + end * 0.25;
        let points = path.flatten();
        let nearest = points
            .iter()
            .map(|p| p.distance(expected))
            .fold(f32::INFINITY, f32::min);
        assert!(nearest < 0.5, "no flattened point near B(0.5): {nearest}");
    }

    #[test]
    fn test_flatten_ends_at_segment_endpoints() {
        let mut path = ErasePath::new();
        path.move_to(Vec2::ZERO);
        path.quad_to(Vec2::new(4.0, 0.0), Vec2::new(8.0, 0.0));
        path.line_to(Vec2::new(12.0, 4.0));

        let points = path.flatten();
        assert_eq!(points.last(), Some(&Vec2::new(12.0, 4.0)));
        assert!(points.contains(&Vec2::new(8.0, 0.0)));
    }

    #[test]
    fn test_bounds_cover_control_points() {
        let mut path = ErasePath::new();
        path.move_to(Vec2::new(2.0, 2.0));
        path.quad_to(Vec2::new(9.0, -3.0), Vec2::new(4.0, 6.0));

        let (min, max) = path.bounds().unwrap();
        assert!(min.x <= 2.0 && min.y <= -3.0);
        assert!(max.x >= 9.0 && max.y >= 6.0);
    }

    #[test]
    fn test_clear() {
        let mut path = ErasePath::new();
        path.move_to(Vec2::ZERO);
        path.line_to(Vec2::ONE);
        assert_eq!(path.segment_count(), 2);

        path.clear();
        assert!(path.is_empty());
    }
}
