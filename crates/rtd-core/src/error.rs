//! Error types for rtd-core

use thiserror::Error;

/// Core error type for rtd
#[derive(Error, Debug)]
pub enum CoreError {
    /// DC001: Constraint could not be ingested
    #[error("[DC001] Malformed constraint #{index}: {reason}")]
    MalformedConstraint { index: usize, reason: String },

    /// DC002: Attribute reference is not of the form `tupleVar.attribute`
    #[error("[DC002] Invalid attribute reference '{reference}': expected '<tupleVar>.<attribute>'")]
    InvalidReference { reference: String },

    /// DC003: Comparison operator outside the supported set
    #[error("[DC003] Unknown operator '{operator}': expected one of ==, !=, <, >, <=, >=")]
    UnknownOperator { operator: String },

    /// DC004: Predicate text is not `left op right`
    #[error("[DC004] Invalid predicate '{text}': expected '<tupleVar>.<attribute> <op> <tupleVar>.<attribute>'")]
    InvalidPredicate { text: String },

    /// E001: Configuration file not found
    #[error("[E001] Config file not found: {path}")]
    ConfigNotFound { path: String },

    /// E002: Invalid configuration value
    #[error("[E002] Invalid config: {message}")]
    ConfigInvalid { message: String },

    /// E003: IO error with file path context
    #[error("[E003] Failed to read '{path}': {source}")]
    IoWithPath {
        path: String,
        source: std::io::Error,
    },

    /// E004: YAML parse error
    #[error("[E004] Config parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
