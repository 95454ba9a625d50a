use thiserror::Error;

/// Failures reported by a key-value store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Store rejected `{key}`: {reason}")]
    Rejected { key: String, reason: String },
}

/// Reasons a draft entry is refused before anything is created.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    #[error("description is empty")]
    EmptyDescription,
    #[error("amount `{0}` is not a number")]
    UnparsableAmount(String),
    #[error("amount {0} must be greater than zero")]
    NonPositiveAmount(f64),
}

/// Errors raised while reading or writing the tracker configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(String),
}
