//! Frame construction and single junction edits
//!
//! All operations silently no-op on out-of-range or boundary targets;
//! out-of-bounds edits are ignored rather than reported.

use crate::junctions::junction::{Direction, Junction};
use crate::lattice::grid::Grid;

/// Outcome of one position along a frame side
enum Scan {
    /// Grid edge or missing node reached, stop walking this side
    Stop,
    /// Position handled (bridged or already occupied), keep walking
    Continue,
}

impl Grid {
    /// Bridge the four border edges of a rectangular extent
    ///
    /// Walks each side in steps of two cells, creating an east-west junction
    /// per horizontal pair and a north-south junction per vertical pair.
    /// Occupied medians are skipped, so reframing is idempotent; a side stops
    /// early where the aligned node or its two-cell sibling runs off the
    /// grid. Corners with mismatched x parity produce no change.
    pub fn box_frame(&mut self, corner1: (usize, usize), corner2: (usize, usize)) {
        if corner1.0 % 2 != corner2.0 % 2 {
            return;
        }

        let x_min = corner1.0.min(corner2.0);
        let x_max = corner1.0.max(corner2.0);
        let y_min = corner1.1.min(corner2.1);
        let y_max = corner1.1.max(corner2.1);

        for x in (x_min..x_max).step_by(2) {
            if matches!(self.frame_east(x, y_min), Scan::Stop) {
                break;
            }
        }
        for x in (x_min..x_max).step_by(2) {
            if matches!(self.frame_east(x, y_max), Scan::Stop) {
                break;
            }
        }
        for y in (y_min..y_max).step_by(2) {
            if matches!(self.frame_south(x_min, y), Scan::Stop) {
                break;
            }
        }
        for y in (y_min..y_max).step_by(2) {
            if matches!(self.frame_south(x_max, y), Scan::Stop) {
                break;
            }
        }
    }

    /// Frame the full grid extent, producing the closed outer border
    pub fn borders(&mut self) {
        self.box_frame((0, 0), (self.xdim() - 1, self.ydim() - 1));
    }

    /// Frame an extent inset by `step` double-units on all sides
    ///
    /// Repeated calls with increasing steps yield concentric frames. Insets
    /// past the grid center produce no change.
    pub fn inner_frame(&mut self, step: usize) {
        let inset = 2 * step;
        let (Some(far_x), Some(far_y)) = (
            self.xdim().checked_sub(inset + 1),
            self.ydim().checked_sub(inset + 1),
        ) else {
            return;
        };
        self.box_frame((inset, inset), (far_x, far_y));
    }

    /// Remove the junction registered at a median coordinate
    ///
    /// No-op when the coordinate is out of range, on the outermost ring, or
    /// already free; removing twice equals removing once.
    pub fn remove_junction_at(&mut self, x: usize, y: usize) {
        if !self.in_bounds(x, y) {
            return;
        }
        if x == 0 || y == 0 || x == self.xdim() - 1 || y == self.ydim() - 1 {
            return;
        }
        self.clear_junction(x, y);
    }

    /// Bridge two nodes two cells apart along one axis
    ///
    /// Returns `true` when a junction was created. Nodes that are not
    /// axis-aligned neighbors, or whose median is already bridged, leave the
    /// grid unchanged.
    pub fn connect(&mut self, a: (usize, usize), b: (usize, usize)) -> bool {
        let Some(node_a) = self.node(a.0, a.1) else {
            return false;
        };
        let Some(node_b) = self.node(b.0, b.1) else {
            return false;
        };
        if !node_a.is_node_neighbor(node_b) {
            return false;
        }
        let Some(direction) = node_a.directional_relationship(node_b) else {
            return false;
        };
        let median = ((a.0 + b.0) / 2, (a.1 + b.1) / 2);
        self.insert_junction(Junction::new(a, median, b, direction))
    }

    /// Bridge a node to its eastern sibling through the median at `(x+1, y)`
    fn frame_east(&mut self, x: usize, y: usize) -> Scan {
        if self.node(x, y).is_none() {
            return Scan::Stop;
        }
        if x + 2 >= self.xdim() {
            return Scan::Stop;
        }
        if self.junction_at(x + 1, y).is_some() {
            return Scan::Continue;
        }
        self.insert_junction(Junction::new(
            (x, y),
            (x + 1, y),
            (x + 2, y),
            Direction::EW,
        ));
        Scan::Continue
    }

    /// Bridge a node to its southern sibling through the median at `(x, y+1)`
    fn frame_south(&mut self, x: usize, y: usize) -> Scan {
        if self.node(x, y).is_none() {
            return Scan::Stop;
        }
        if y + 2 >= self.ydim() {
            return Scan::Stop;
        }
        if self.junction_at(x, y + 1).is_some() {
            return Scan::Continue;
        }
        self.insert_junction(Junction::new(
            (x, y),
            (x, y + 1),
            (x, y + 2),
            Direction::NS,
        ));
        Scan::Continue
    }
}
