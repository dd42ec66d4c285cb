//! Error types for the adjgraph library.

use thiserror::Error;

/// Errors raised by the fallible surfaces around the graph.
///
/// Core graph operations never fail; a missing node is reported as `None`.
#[derive(Error, Debug)]
pub enum GraphError {
    /// No node carries the requested value.
    #[error("Node {0:?} not found")]
    NodeNotFound(String),

    /// An edge argument was not of the form `SRC:DST`.
    #[error("Invalid edge spec {0:?}: expected SRC:DST")]
    InvalidEdgeSpec(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON rendering error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result type for adjgraph operations.
pub type GraphResult<T> = Result<T, GraphError>;
