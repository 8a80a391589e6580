//! Error types for the crate
//!
//! Core editing and topology operations never fail; they no-op on invalid
//! targets. Errors exist at the outer surface: parameter validation and
//! writing output files.

use std::fmt;
use std::path::PathBuf;

/// Main error type for knot generation
#[derive(Debug)]
pub enum KnotError {
    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// File system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for KnotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for KnotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            Self::InvalidParameter { .. } => None,
        }
    }
}

impl From<std::io::Error> for KnotError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Convenience type alias for knot generation results
pub type Result<T> = std::result::Result<T, KnotError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> KnotError {
    KnotError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a file system error with path context
pub fn file_system_error(
    path: PathBuf,
    operation: &'static str,
    source: std::io::Error,
) -> KnotError {
    KnotError::FileSystem {
        path,
        operation,
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::{KnotError, invalid_parameter};

    #[test]
    fn invalid_parameter_formats_all_fields() {
        let error = invalid_parameter("width", &0, &"must be at least 2");
        let message = error.to_string();
        assert!(message.contains("width"));
        assert!(message.contains('0'));
        assert!(message.contains("at least 2"));
    }

    #[test]
    fn file_system_errors_expose_their_source() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let error = KnotError::from(io_error);
        assert!(std::error::Error::source(&error).is_some());
    }
}
