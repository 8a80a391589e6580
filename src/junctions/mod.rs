//! Junction model and editing operations
//!
//! This module contains everything that mutates the junction configuration:
//! - The junction type itself
//! - Box framing and concentric frames
//! - Single-point removal and node-to-node connection
//! - Randomized junction toggling

/// Frame and single-edit operations
pub mod editing;
/// Junction and direction types
pub mod junction;
/// Probabilistic junction toggling
pub mod random;

pub use junction::{Direction, Junction};
