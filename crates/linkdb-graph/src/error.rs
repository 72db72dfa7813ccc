//! Error types for adjacency index operations.

use thiserror::Error;

/// Errors that can occur in adjacency index operations.
#[derive(Debug, Error)]
pub enum GraphError {
    /// An argument was rejected before any mutation took place.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The operation is not available on this view.
    #[error("unsupported operation: {0}")]
    Unsupported(&'static str),
}

/// Result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
