//! Error types for the noninterval search library.

use thiserror::Error;

/// Main error type for search operations.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Invalid configuration or input parameters
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    /// A witness template that cannot be evaluated (e.g. empty forbidden-edge set)
    #[error("Malformed witness template: {0}")]
    MalformedTemplate(String),

    /// Invalid spatial dimension specified
    #[error("Unsupported dimension: {0}. Points must live in at least 2 dimensions")]
    UnsupportedDimension(usize),

    /// Writing or reading a successful configuration failed
    #[error("Persistence failed: {0}")]
    Persistence(#[from] std::io::Error),
}

/// Result type for search operations.
pub type SearchResult<T> = Result<T, SearchError>;
