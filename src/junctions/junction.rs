//! Junction type connecting two nodes through a median point

/// Axis of a junction
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Direction {
    /// Bridge along the y axis
    NS,
    /// Bridge along the x axis
    EW,
}

/// A bridge between two secondary nodes two cells apart
///
/// The median is the primary point exactly between source and target; it has
/// mismatched coordinate parity and marks the crossing as bridged. The
/// grid's median index is the sole source of truth for junction presence.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Junction {
    /// Node the bridge was drawn from
    pub source: (usize, usize),
    /// Primary point between the endpoints
    pub median: (usize, usize),
    /// Node the bridge was drawn to
    pub target: (usize, usize),
    /// Bridge axis
    pub direction: Direction,
}

impl Junction {
    /// Construct a junction; validity is checked on insertion into a grid
    pub const fn new(
        source: (usize, usize),
        median: (usize, usize),
        target: (usize, usize),
        direction: Direction,
    ) -> Self {
        Self {
            source,
            median,
            target,
            direction,
        }
    }
}
