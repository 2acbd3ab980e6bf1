/// Target chord length when flattening quadratic segments (pixels).
pub const FLATTEN_STEP: f32 = 2.0;

/// Upper bound on subdivisions per quadratic segment.
pub const MAX_FLATTEN_STEPS: usize = 32;

/// Width of the anti-aliased edge band on punched strokes (pixels).
pub const EDGE_FEATHER: f32 = 1.0;

/// Smallest usable brush radius.
pub const MIN_BRUSH_RADIUS: f32 = 0.5;
