//! Error types for triangulation and Voronoi construction

use thiserror::Error;

/// Errors that can occur while building a diagram
///
/// Geometric degeneracies (a no-op clip, a collapsed cell, a point that culls
/// no triangles) are reported through return values, never through this type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DiagramError {
    /// A required input was malformed (non-finite coordinates, bad indices, mismatched sizes)
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Too few points for the requested operation
    ///
    /// This is permanent for the given input; retrying will not help.
    #[error("insufficient input: expected at least {expected} points, got {actual}")]
    InsufficientInput {
        /// Minimum number of points required
        expected: usize,
        /// Number of points supplied
        actual: usize,
    },

    /// Configuration validation failed
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for diagram operations
pub type Result<T> = std::result::Result<T, DiagramError>;
