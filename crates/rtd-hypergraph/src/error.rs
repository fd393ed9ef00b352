//! Error types for rtd-hypergraph

use thiserror::Error;

/// Hypergraph error type
///
/// These use the `G` prefix so they never collide with the `DC`/`E` codes
/// raised by rtd-core.
#[derive(Error, Debug)]
pub enum GraphError {
    /// G001: Target attribute is not part of the attribute universe
    #[error("[G001] Attribute '{attribute}' does not appear in any constraint")]
    AttributeNotFound { attribute: String },

    /// G002: Target cell is not referenced by any constraint
    #[error("[G002] Cell '{cell}' does not appear in any constraint")]
    CellNotFound { cell: String },

    /// G003: Rule violates the non-empty / disjoint tail and head invariant
    #[error("[G003] Invalid rule: {reason}")]
    InvalidRule { reason: String },

    /// G004: Core error propagation
    #[error("[G004] Core error: {0}")]
    Core(#[from] rtd_core::CoreError),
}

/// Result type alias for GraphError
pub type GraphResult<T> = Result<T, GraphError>;
