//! Error types for puzzle generation, exact-cover solving and export

use crate::io::configuration::SUPPORTED_SIZES;
use std::fmt;
use std::path::PathBuf;

/// Main error type for all generation operations
#[derive(Debug)]
pub enum AlgorithmError {
    /// A configuration value was rejected
    ///
    /// Values are never clamped into range; the caller must supply a valid one.
    InvalidConfiguration {
        /// Name of the rejected parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Grid size has no unconditional merge count and no override was given
    UnsupportedSize {
        /// The requested grid size
        size: usize,
    },

    /// Piece index outside the current piece list, or a piece paired with itself
    InvalidPieceIndex {
        /// The offending index
        index: usize,
        /// Number of pieces in the state
        piece_count: usize,
    },

    /// Pieces no longer partition the grid
    PartitionViolation {
        /// Description of the first broken cell
        reason: String,
    },

    /// A solver row referenced a column outside the declared universe
    ///
    /// Indicates a formulation bug rather than a recoverable condition.
    UnknownColumn {
        /// Index of the row being registered
        row: usize,
        /// The unknown column index
        column: usize,
        /// Number of declared columns
        column_count: usize,
    },

    /// Numerical input or computation produced an invalid result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },

    /// Failed to save a rendered puzzle to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system or stream failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for AlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid configuration '{parameter}' = '{value}': {reason}")
            }
            Self::UnsupportedSize { size } => {
                write!(
                    f,
                    "Grid size {size}x{size} is not supported without an explicit merge count \
                     (tuned sizes: {SUPPORTED_SIZES:?})"
                )
            }
            Self::InvalidPieceIndex { index, piece_count } => {
                write!(
                    f,
                    "Piece index {index} is invalid for a state with {piece_count} pieces"
                )
            }
            Self::PartitionViolation { reason } => {
                write!(f, "Partition invariant violated: {reason}")
            }
            Self::UnknownColumn {
                row,
                column,
                column_count,
            } => {
                write!(
                    f,
                    "Row {row} references column {column} but only {column_count} columns exist"
                )
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
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

impl std::error::Error for AlgorithmError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for generation results
pub type Result<T> = std::result::Result<T, AlgorithmError>;

impl From<std::io::Error> for AlgorithmError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid configuration error
pub fn invalid_configuration(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> AlgorithmError {
    AlgorithmError::InvalidConfiguration {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> AlgorithmError {
    AlgorithmError::Computation {
        operation,
        reason: reason.to_string(),
    }
}
