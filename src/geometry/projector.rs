//! Polygon and weave-segment computation per node
//!
//! The junction state of the four flanking medians decides the outline: a
//! bridged side is beveled in, two bridged sides meeting along a corner pull
//! the outline into the node center, and four bridged sides collapse the
//! outline to the full two-cell square. Weave segments appear only across
//! free medians, slanted by the node's x parity to produce the over-under
//! lattice.

use crate::geometry::style::{NodeShape, Styling};
use crate::lattice::grid::Grid;
use crate::lattice::point::{NodeRef, PointRef};

/// Fractional position in primary-grid units
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Coord {
    /// X in grid units
    pub x: f64,
    /// Y in grid units
    pub y: f64,
}

impl Coord {
    /// Construct a coordinate
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A straight weave segment between two fractional positions
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Segment {
    /// Segment start
    pub source: Coord,
    /// Segment end
    pub target: Coord,
}

impl Segment {
    const fn new(source: Coord, target: Coord) -> Self {
        Self { source, target }
    }
}

/// Rendered geometry for one node
#[derive(Clone, Debug)]
pub struct NodeGeometry {
    /// Node coordinate on the primary lattice
    pub position: (usize, usize),
    /// Outline vertices in draw order
    pub polygon: Vec<Coord>,
    /// Weave segments toward free flanking medians
    pub lines: Vec<Segment>,
}

/// Project every node's polygon and weave segments
pub fn project(grid: &Grid, styling: &Styling) -> Vec<NodeGeometry> {
    grid.nodes()
        .enumerate()
        .map(|(ordinal, node)| {
            let style = styling.get(ordinal);
            let polygon = match style.shape {
                NodeShape::Plain => plain_polygon(node),
                NodeShape::Stylized => stylized_polygon(node, style.bevel),
            };
            NodeGeometry {
                position: node.position(),
                polygon,
                lines: weave_segments(node),
            }
        })
        .collect()
}

/// Half-unit diamond centered on the node
fn plain_polygon(node: NodeRef<'_>) -> Vec<Coord> {
    let x = node.x() as f64;
    let y = node.y() as f64;
    vec![
        Coord::new(x + 0.5, y),
        Coord::new(x, y + 0.5),
        Coord::new(x - 0.5, y),
        Coord::new(x, y - 0.5),
    ]
}

/// Junction-aware outline with beveled sides and corner in-fills
fn stylized_polygon(node: NodeRef<'_>, bevel: f64) -> Vec<Coord> {
    let x = node.x() as f64;
    let y = node.y() as f64;
    let point = node.point();
    let north = point.north();
    let east = point.east();
    let south = point.south();
    let west = point.west();

    let mut polygon = Vec::new();
    let mut beveled_sides = 0;

    // North side
    if north.is_some_and(|p| !p.has_ew_junction()) {
        polygon.push(Coord::new(x, y - 0.5));
    } else {
        beveled_sides += 1;
        polygon.push(Coord::new(x - bevel, y - bevel));
        polygon.push(Coord::new(x + bevel, y - bevel));
    }
    if north.is_some_and(PointRef::has_ns_junction) && east.is_some_and(PointRef::has_ew_junction)
    {
        polygon.push(Coord::new(x, y));
    }

    // East side
    if east.is_some_and(|p| !p.has_ns_junction()) {
        polygon.push(Coord::new(x + 0.5, y));
    } else {
        beveled_sides += 1;
        polygon.push(Coord::new(x + bevel, y - bevel));
        polygon.push(Coord::new(x + bevel, y + bevel));
    }
    if east.is_some_and(PointRef::has_ew_junction) && south.is_some_and(PointRef::has_ns_junction)
    {
        polygon.push(Coord::new(x, y));
    }

    // South side
    if south.is_some_and(|p| !p.has_ew_junction()) {
        polygon.push(Coord::new(x, y + 0.5));
    } else {
        beveled_sides += 1;
        polygon.push(Coord::new(x + bevel, y + bevel));
        polygon.push(Coord::new(x - bevel, y + bevel));
    }
    if south.is_some_and(PointRef::has_ns_junction) && west.is_some_and(PointRef::has_ew_junction)
    {
        polygon.push(Coord::new(x, y));
    }

    // West side
    if west.is_some_and(|p| !p.has_ns_junction()) {
        polygon.push(Coord::new(x - 0.5, y));
    } else {
        beveled_sides += 1;
        polygon.push(Coord::new(x - bevel, y + bevel));
        polygon.push(Coord::new(x - bevel, y - bevel));
    }
    if west.is_some_and(PointRef::has_ew_junction) && north.is_some_and(PointRef::has_ns_junction)
    {
        polygon.push(Coord::new(x, y));
    }

    // Fully enclosed node fills the whole two-cell square
    if beveled_sides == 4 {
        return vec![
            Coord::new(x - 1.0, y - 1.0),
            Coord::new(x - 1.0, y + 1.0),
            Coord::new(x + 1.0, y + 1.0),
            Coord::new(x + 1.0, y - 1.0),
        ];
    }
    polygon
}

/// Diagonal half-step segments across each free flanking median
///
/// The slant flips with x parity; that alternation is what weaves the bands
/// over and under one another.
fn weave_segments(node: NodeRef<'_>) -> Vec<Segment> {
    let x = node.x() as f64;
    let y = node.y() as f64;
    let point = node.point();
    let free = |p: PointRef<'_>| p.junction().is_none();
    let mut lines = Vec::new();

    if node.x() % 2 == 0 {
        if point.east().is_some_and(free) {
            lines.push(Segment::new(
                Coord::new(x + 0.5, y),
                Coord::new(x + 1.0, y - 0.5),
            ));
        }
        if point.south().is_some_and(free) {
            lines.push(Segment::new(
                Coord::new(x, y + 0.5),
                Coord::new(x + 0.5, y + 1.0),
            ));
        }
        if point.west().is_some_and(free) {
            lines.push(Segment::new(
                Coord::new(x - 0.5, y),
                Coord::new(x - 1.0, y + 0.5),
            ));
        }
        if point.north().is_some_and(free) {
            lines.push(Segment::new(
                Coord::new(x, y - 0.5),
                Coord::new(x - 0.5, y - 1.0),
            ));
        }
    } else {
        if point.east().is_some_and(free) {
            lines.push(Segment::new(
                Coord::new(x + 0.5, y),
                Coord::new(x + 1.0, y + 0.5),
            ));
        }
        if point.south().is_some_and(free) {
            lines.push(Segment::new(
                Coord::new(x, y + 0.5),
                Coord::new(x - 0.5, y + 1.0),
            ));
        }
        if point.west().is_some_and(free) {
            lines.push(Segment::new(
                Coord::new(x - 0.5, y),
                Coord::new(x - 1.0, y - 0.5),
            ));
        }
        if point.north().is_some_and(free) {
            lines.push(Segment::new(
                Coord::new(x, y - 0.5),
                Coord::new(x + 0.5, y - 1.0),
            ));
        }
    }
    lines
}
