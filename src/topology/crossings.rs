//! Crossing counting
//!
//! An unbridged primary point is a visual crossing of two bands; bridging it
//! merges the bands and removes the crossing. Secondary cells never cross.

use crate::lattice::grid::Grid;

/// Number of free, non-secondary primary points
///
/// Together with the bridged-point count this partitions the non-secondary
/// points: `crossing_count + junction_count == non-secondary total`.
pub fn crossing_count(grid: &Grid) -> usize {
    grid.points()
        .filter(|p| !p.is_on_secondary() && p.junction().is_none())
        .count()
}
