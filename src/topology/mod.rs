//! Structural invariants derived from the junction configuration
//!
//! All functions here are stateless: they scan the grid's current junction
//! state and derive counts. Nothing is cached, so callers may mutate
//! junctions freely and re-query.
//!
//! - Crossing count: free primary points where two bands cross
//! - Region count: connected components of nodes under junction adjacency
//! - Loop count: closed bands reconstructed by strand tracing

/// Crossing counting
pub mod crossings;
/// Path reconstruction and loop counting
pub mod paths;
/// Node connectivity and region counting
pub mod regions;
/// Local strand model at each crossing
pub mod strands;

pub use crossings::crossing_count;
pub use paths::{Path, PathSet, loop_count, trace_paths};
pub use regions::{full_connected, region_count};
pub use strands::{Strand, collect_strands};
