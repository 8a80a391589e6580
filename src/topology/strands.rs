//! Local strand model at each crossing
//!
//! A strand is an unordered pair of compass exits that one band edge
//! connects while passing a non-secondary primary point. A free point
//! carries the two pass-through strands of the over-under weave; a bridged
//! point diverts the weave around the bridge, one strand per side, and a
//! side is dropped when the grid edge truncates it.

use crate::lattice::grid::Grid;
use crate::lattice::point::{Compass, PointRef};

/// One band edge's transit of a single primary point
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Strand {
    /// The non-secondary point this strand passes
    pub point: (usize, usize),
    /// The pair of compass exits the band edge connects
    pub ends: (Compass, Compass),
}

impl Strand {
    /// Whether the strand owns a given compass end
    pub fn has_end(self, end: Compass) -> bool {
        self.ends.0 == end || self.ends.1 == end
    }

    /// The end opposite a given entry end
    ///
    /// Callers check ownership with [`Self::has_end`] first; an unowned
    /// entry falls back to the first end.
    pub fn other_end(self, entry: Compass) -> Compass {
        if self.ends.0 == entry {
            self.ends.1
        } else {
            self.ends.0
        }
    }
}

/// Strands local to one non-secondary point under its junction state
///
/// Returns an empty vector for secondary cells.
pub fn point_strands(point: PointRef<'_>) -> Vec<Strand> {
    if point.is_on_secondary() {
        return Vec::new();
    }
    let position = point.position();
    let mut strands = Vec::with_capacity(2);

    if point.has_ns_junction() {
        // Weave diverted around the vertical bridge, one strand per side
        if point.east().is_some() {
            strands.push(Strand {
                point: position,
                ends: (Compass::East, Compass::South),
            });
        }
        if point.west().is_some() {
            strands.push(Strand {
                point: position,
                ends: (Compass::North, Compass::West),
            });
        }
    } else if point.has_ew_junction() {
        if point.north().is_some() {
            strands.push(Strand {
                point: position,
                ends: (Compass::North, Compass::East),
            });
        }
        if point.south().is_some() {
            strands.push(Strand {
                point: position,
                ends: (Compass::South, Compass::West),
            });
        }
    } else {
        // Free crossing: vertical and horizontal pass-through
        strands.push(Strand {
            point: position,
            ends: (Compass::North, Compass::South),
        });
        strands.push(Strand {
            point: position,
            ends: (Compass::East, Compass::West),
        });
    }
    strands
}

/// All strands across every non-secondary point, in point iteration order
pub fn collect_strands(grid: &Grid) -> Vec<Strand> {
    grid.points().flat_map(point_strands).collect()
}

#[cfg(test)]
mod tests {
    use super::point_strands;
    use crate::lattice::grid::Grid;
    use crate::lattice::point::Compass;

    #[test]
    fn free_point_carries_both_pass_throughs() {
        let grid = Grid::new(3, 3);
        let strands: Vec<_> = grid.point(2, 1).map(point_strands).unwrap_or_default();
        assert_eq!(strands.len(), 2);
        assert!(strands.iter().any(|s| s.has_end(Compass::North) && s.has_end(Compass::South)));
        assert!(strands.iter().any(|s| s.has_end(Compass::East) && s.has_end(Compass::West)));
    }

    #[test]
    fn bridged_point_diverts_around_the_bridge() {
        let mut grid = Grid::new(3, 3);
        assert!(grid.connect((2, 0), (2, 2)));
        let strands: Vec<_> = grid.point(2, 1).map(point_strands).unwrap_or_default();
        assert_eq!(strands.len(), 2);
        assert!(strands.iter().any(|s| s.ends == (Compass::East, Compass::South)));
        assert!(strands.iter().any(|s| s.ends == (Compass::North, Compass::West)));
    }

    #[test]
    fn edge_truncates_the_missing_side() {
        let mut grid = Grid::new(3, 3);
        // (0, 1) sits on the west edge; a NS bridge there keeps only the east side
        assert!(grid.connect((0, 0), (0, 2)));
        let strands: Vec<_> = grid.point(0, 1).map(point_strands).unwrap_or_default();
        assert_eq!(strands.len(), 1);
        assert!(strands.iter().all(|s| s.ends == (Compass::East, Compass::South)));
    }

    #[test]
    fn secondary_cells_have_no_strands() {
        let grid = Grid::new(3, 3);
        assert!(grid.point(2, 2).map(point_strands).unwrap_or_default().is_empty());
    }
}
