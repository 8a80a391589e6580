//! Grid state for a single knot
//!
//! The grid owns the primary lattice dimensions and the junction index: a
//! dense 2-D table mapping each primary coordinate to the junction bridging
//! it, if any. A cell holds at most one junction, so a point is either free
//! or bridged in exactly one direction; the double-bridge violation cannot
//! be represented.

use ndarray::Array2;

use crate::junctions::junction::{Direction, Junction};
use crate::lattice::point::{NodeRef, PointRef};

/// Primary and secondary lattice for one knot, plus its junction index
///
/// Dimensions are derived from the requested knot size as `2*n - 1`, so both
/// are always odd. Cells whose coordinates share parity are secondary nodes;
/// the remaining cells are potential crossings and junction medians.
#[derive(Debug, Clone)]
pub struct Grid {
    xdim: usize,
    ydim: usize,
    /// Junction per primary coordinate, `None` where the crossing is free
    cells: Array2<Option<Junction>>,
    /// All secondary-node coordinates in iteration order
    nodes: Vec<(usize, usize)>,
}

impl Grid {
    /// Create an empty grid for a requested knot size
    ///
    /// A `width × height` knot uses a `(2*width-1) × (2*height-1)` primary
    /// lattice. Sizes below 1 are clamped to 1.
    pub fn new(width: usize, height: usize) -> Self {
        let xdim = 2 * width.max(1) - 1;
        let ydim = 2 * height.max(1) - 1;

        let cells = Array2::from_elem((xdim, ydim), None);
        let mut nodes = Vec::new();
        for x in 0..xdim {
            for y in 0..ydim {
                if x % 2 == y % 2 {
                    nodes.push((x, y));
                }
            }
        }

        Self {
            xdim,
            ydim,
            cells,
            nodes,
        }
    }

    /// Primary lattice width
    pub const fn xdim(&self) -> usize {
        self.xdim
    }

    /// Primary lattice height
    pub const fn ydim(&self) -> usize {
        self.ydim
    }

    /// Whether a coordinate lies on the primary lattice
    pub const fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.xdim && y < self.ydim
    }

    /// Whether a coordinate belongs to the secondary lattice (matching parity)
    pub const fn is_secondary(x: usize, y: usize) -> bool {
        x % 2 == y % 2
    }

    /// Handle for the point at a coordinate, if in bounds
    pub fn point(&self, x: usize, y: usize) -> Option<PointRef<'_>> {
        self.in_bounds(x, y).then(|| PointRef::new(self, x, y))
    }

    /// Handle for the node at a coordinate, if in bounds and secondary
    pub fn node(&self, x: usize, y: usize) -> Option<NodeRef<'_>> {
        self.point(x, y).and_then(PointRef::as_node)
    }

    /// All primary points, x-major then y
    pub fn points(&self) -> impl Iterator<Item = PointRef<'_>> {
        (0..self.xdim)
            .flat_map(move |x| (0..self.ydim).map(move |y| PointRef::new(self, x, y)))
    }

    /// All secondary nodes in construction order
    pub fn nodes(&self) -> impl Iterator<Item = NodeRef<'_>> {
        self.nodes
            .iter()
            .filter_map(move |&(x, y)| self.node(x, y))
    }

    /// Coordinates of all secondary nodes in construction order
    pub fn node_positions(&self) -> &[(usize, usize)] {
        &self.nodes
    }

    /// The junction bridging a primary coordinate, if any
    pub fn junction_at(&self, x: usize, y: usize) -> Option<Junction> {
        self.cells.get([x, y]).copied().flatten()
    }

    /// All junctions currently registered
    pub fn junctions(&self) -> impl Iterator<Item = Junction> + '_ {
        self.cells.iter().filter_map(|cell| *cell)
    }

    /// Number of bridged primary points
    pub fn junction_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Register a junction at its median, enforcing structural invariants
    ///
    /// Returns `false` without mutating when the median is out of range,
    /// secondary, or already bridged, or when the endpoints are not two
    /// nodes straddling the median along the junction's axis. Callers treat
    /// a rejected insert as a silent no-op.
    pub(crate) fn insert_junction(&mut self, junction: Junction) -> bool {
        let (mx, my) = junction.median;
        if !self.in_bounds(mx, my) || Self::is_secondary(mx, my) {
            return false;
        }
        if self.junction_at(mx, my).is_some() {
            return false;
        }

        let (sx, sy) = junction.source;
        let (tx, ty) = junction.target;
        if !self.in_bounds(sx, sy) || !self.in_bounds(tx, ty) {
            return false;
        }
        if !Self::is_secondary(sx, sy) || !Self::is_secondary(tx, ty) {
            return false;
        }

        let aligned = match junction.direction {
            Direction::NS => {
                sx == mx && tx == mx && sy.abs_diff(ty) == 2 && sy.min(ty) + 1 == my
            }
            Direction::EW => {
                sy == my && ty == my && sx.abs_diff(tx) == 2 && sx.min(tx) + 1 == mx
            }
        };
        if !aligned {
            return false;
        }

        if let Some(cell) = self.cells.get_mut([mx, my]) {
            *cell = Some(junction);
            return true;
        }
        false
    }

    /// Clear the junction at a median coordinate, if any
    pub(crate) fn clear_junction(&mut self, x: usize, y: usize) {
        if let Some(cell) = self.cells.get_mut([x, y]) {
            *cell = None;
        }
    }
}
