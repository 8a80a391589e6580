//! Coordinate handles over the primary and secondary lattice
//!
//! Points and nodes are not stored objects; they are cheap copyable handles
//! borrowing the grid. Navigation is bounded: stepping past an edge returns
//! `None`, never wraps.

use crate::junctions::junction::{Direction, Junction};
use crate::lattice::grid::Grid;

/// Compass direction on the primary lattice
///
/// Also serves as a strand end label during path tracing. North is toward
/// decreasing `y`, matching screen coordinates.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Compass {
    /// Toward decreasing y
    North,
    /// Toward increasing x
    East,
    /// Toward increasing y
    South,
    /// Toward decreasing x
    West,
}

impl Compass {
    /// All four directions in N, E, S, W order
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];
}

/// Handle for one primary-lattice point
#[derive(Clone, Copy, Debug)]
pub struct PointRef<'a> {
    grid: &'a Grid,
    x: usize,
    y: usize,
}

impl<'a> PointRef<'a> {
    pub(crate) const fn new(grid: &'a Grid, x: usize, y: usize) -> Self {
        Self { grid, x, y }
    }

    /// X coordinate on the primary lattice
    pub const fn x(self) -> usize {
        self.x
    }

    /// Y coordinate on the primary lattice
    pub const fn y(self) -> usize {
        self.y
    }

    /// Coordinate pair
    pub const fn position(self) -> (usize, usize) {
        (self.x, self.y)
    }

    /// The adjacent point to the west, unless at the x=0 edge
    pub fn west(self) -> Option<Self> {
        (self.x > 0).then(|| Self::new(self.grid, self.x - 1, self.y))
    }

    /// The adjacent point to the east, unless at the far edge
    pub fn east(self) -> Option<Self> {
        (self.x + 1 < self.grid.xdim()).then(|| Self::new(self.grid, self.x + 1, self.y))
    }

    /// The adjacent point to the north, unless at the y=0 edge
    pub fn north(self) -> Option<Self> {
        (self.y > 0).then(|| Self::new(self.grid, self.x, self.y - 1))
    }

    /// The adjacent point to the south, unless at the far edge
    pub fn south(self) -> Option<Self> {
        (self.y + 1 < self.grid.ydim()).then(|| Self::new(self.grid, self.x, self.y + 1))
    }

    /// Step one point in a compass direction
    pub fn step(self, direction: Compass) -> Option<Self> {
        match direction {
            Compass::North => self.north(),
            Compass::East => self.east(),
            Compass::South => self.south(),
            Compass::West => self.west(),
        }
    }

    /// Whether the x coordinate is even; box framing pairs corners by this
    pub const fn is_even(self) -> bool {
        self.x % 2 == 0
    }

    /// True iff x and y parity match, marking a secondary-lattice cell
    pub const fn is_on_secondary(self) -> bool {
        self.x % 2 == self.y % 2
    }

    /// The junction bridging this point, if any
    pub fn junction(self) -> Option<Junction> {
        self.grid.junction_at(self.x, self.y)
    }

    /// Whether this point carries a north-south junction
    pub fn has_ns_junction(self) -> bool {
        self.junction()
            .is_some_and(|j| j.direction == Direction::NS)
    }

    /// Whether this point carries an east-west junction
    pub fn has_ew_junction(self) -> bool {
        self.junction()
            .is_some_and(|j| j.direction == Direction::EW)
    }

    /// Promote to a node handle when this cell is on the secondary lattice
    pub fn as_node(self) -> Option<NodeRef<'a>> {
        self.is_on_secondary().then_some(NodeRef { point: self })
    }
}

/// Handle for one secondary-lattice node
///
/// Nodes anchor the visual knotwork and navigate in two-cell steps, skipping
/// the intermediate primary point. Junction-presence queries inspect that
/// intermediate point, not the node itself.
#[derive(Clone, Copy, Debug)]
pub struct NodeRef<'a> {
    point: PointRef<'a>,
}

impl<'a> NodeRef<'a> {
    /// X coordinate on the primary lattice
    pub const fn x(self) -> usize {
        self.point.x()
    }

    /// Y coordinate on the primary lattice
    pub const fn y(self) -> usize {
        self.point.y()
    }

    /// Coordinate pair
    pub const fn position(self) -> (usize, usize) {
        self.point.position()
    }

    /// The underlying primary point
    pub const fn point(self) -> PointRef<'a> {
        self.point
    }

    /// The node two cells north, if in bounds
    pub fn north_north(self) -> Option<Self> {
        self.point
            .north()
            .and_then(PointRef::north)
            .and_then(PointRef::as_node)
    }

    /// The node two cells south, if in bounds
    pub fn south_south(self) -> Option<Self> {
        self.point
            .south()
            .and_then(PointRef::south)
            .and_then(PointRef::as_node)
    }

    /// The node two cells east, if in bounds
    pub fn east_east(self) -> Option<Self> {
        self.point
            .east()
            .and_then(PointRef::east)
            .and_then(PointRef::as_node)
    }

    /// The node two cells west, if in bounds
    pub fn west_west(self) -> Option<Self> {
        self.point
            .west()
            .and_then(PointRef::west)
            .and_then(PointRef::as_node)
    }

    /// The node two cells away in a compass direction
    pub fn neighbor(self, direction: Compass) -> Option<Self> {
        match direction {
            Compass::North => self.north_north(),
            Compass::East => self.east_east(),
            Compass::South => self.south_south(),
            Compass::West => self.west_west(),
        }
    }

    /// Whether a flanking intermediate point carries a north-south junction
    pub fn has_ns_junction(self) -> bool {
        self.point.north().is_some_and(PointRef::has_ns_junction)
            || self.point.south().is_some_and(PointRef::has_ns_junction)
    }

    /// Whether a flanking intermediate point carries an east-west junction
    pub fn has_ew_junction(self) -> bool {
        self.point.east().is_some_and(PointRef::has_ew_junction)
            || self.point.west().is_some_and(PointRef::has_ew_junction)
    }

    /// Whether any flanking intermediate point is bridged toward this node
    pub fn has_junction(self) -> bool {
        self.has_ns_junction() || self.has_ew_junction()
    }

    /// Whether another node sits exactly two cells away along one axis
    pub fn is_node_neighbor(self, other: Self) -> bool {
        let dx = self.x().abs_diff(other.x());
        let dy = self.y().abs_diff(other.y());
        (dx == 2 && dy == 0) || (dx == 0 && dy == 2)
    }

    /// Whether this node lies directly north of `other`
    pub fn is_north_neighbor(self, other: Self) -> bool {
        self.is_node_neighbor(other) && self.y() + 2 == other.y()
    }

    /// Whether this node lies directly south of `other`
    pub fn is_south_neighbor(self, other: Self) -> bool {
        self.is_node_neighbor(other) && other.y() + 2 == self.y()
    }

    /// Whether this node lies directly east of `other`
    pub fn is_east_neighbor(self, other: Self) -> bool {
        self.is_node_neighbor(other) && other.x() + 2 == self.x()
    }

    /// Whether this node lies directly west of `other`
    pub fn is_west_neighbor(self, other: Self) -> bool {
        self.is_node_neighbor(other) && self.x() + 2 == other.x()
    }

    /// Junction axis implied by two nodes sharing a row or column
    pub fn directional_relationship(self, other: Self) -> Option<Direction> {
        if self.x() == other.x() {
            Some(Direction::NS)
        } else if self.y() == other.y() {
            Some(Direction::EW)
        } else {
            None
        }
    }

    /// This node plus every node reachable across one bridged intermediate
    ///
    /// The self-inclusion means an isolated node still forms a singleton
    /// region.
    pub fn one_step_connected(self) -> Vec<Self> {
        let mut connected = vec![self];
        if self.point.north().is_some_and(PointRef::has_ns_junction) {
            connected.extend(self.north_north());
        }
        if self.point.south().is_some_and(PointRef::has_ns_junction) {
            connected.extend(self.south_south());
        }
        if self.point.east().is_some_and(PointRef::has_ew_junction) {
            connected.extend(self.east_east());
        }
        if self.point.west().is_some_and(PointRef::has_ew_junction) {
            connected.extend(self.west_west());
        }
        connected
    }
}
