//! Procedural Celtic knot generation over a dual grid of crossing points and nodes
//!
//! The system models knotwork as a primary lattice of crossing points with a
//! sparse secondary lattice of nodes. Junctions bridge pairs of nodes through
//! a primary point; the junction configuration fully determines the weave,
//! its structural invariants, and the rendered geometry.

#![forbid(unsafe_code)]

/// Polygon and weave-segment projection for rendering
pub mod geometry;
/// Command-line interface, configuration constants, and error handling
pub mod io;
/// Junction types and the editing operations that maintain them
pub mod junctions;
/// Dual-grid construction and bounded directional navigation
pub mod lattice;
/// SVG, TikZ, and LaTeX output builders
pub mod render;
/// Structural invariants derived from the junction configuration
pub mod topology;

pub use io::error::{KnotError, Result};
