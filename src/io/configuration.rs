//! Default values and display constants

/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Default requested knot width in cells
pub const DEFAULT_KNOT_WIDTH: usize = 5;

/// Default requested knot height in cells
pub const DEFAULT_KNOT_HEIGHT: usize = 5;

/// Default percent chance per node for random junction toggling
pub const DEFAULT_PROBABILITY: u32 = 50;

/// Default pixel size of one primary-grid unit in SVG output
pub const DEFAULT_SCALE: f64 = 40.0;

// Grids are bounded by interactive use; reject sizes beyond this
/// Maximum requested knot dimension
pub const MAX_KNOT_DIMENSION: usize = 100;

/// Minimum requested knot dimension able to hold a frame
pub const MIN_KNOT_DIMENSION: usize = 2;

// Display settings
/// Edge divisor for wide band gaps
pub const WIDE_GAP_DIVISOR: f64 = 8.0;
/// Edge divisor for narrow band gaps
pub const NARROW_GAP_DIVISOR: f64 = 16.0;
/// Stroke multiplier applied to junction bridges
pub const JUNCTION_STROKE_MULTIPLIER: f64 = 2.0;
