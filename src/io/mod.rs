//! Command-line interface, configuration, and error handling

/// Command-line argument parsing and the knot runner
pub mod cli;
/// Default values and display constants
pub mod configuration;
/// Error types for the crate
pub mod error;
