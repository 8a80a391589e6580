//! Dual-grid model for knotwork
//!
//! This module contains the lattice foundation:
//! - Grid construction and the median-point junction index
//! - Point and node handles with bounded directional navigation

/// Grid ownership and junction index
pub mod grid;
/// Point and node coordinate handles
pub mod point;

pub use grid::Grid;
pub use point::{Compass, NodeRef, PointRef};
