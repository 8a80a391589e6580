//! Geometry projection for rendering
//!
//! Converts junction state into per-node polygon outlines and weave
//! segments. Projection is a pure function of the grid and the styling; it
//! never mutates junctions, and nothing here is cached across edits.

/// Polygon and weave-segment computation
pub mod projector;
/// Per-node shape and bevel styling
pub mod style;

pub use projector::{Coord, NodeGeometry, Segment, project};
pub use style::{NodeShape, NodeStyle, Styling, SLIGHT_BEVEL, STANDARD_BEVEL};
