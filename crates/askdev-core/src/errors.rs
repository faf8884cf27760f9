//! Error types for the askdev core.

/// Core result type
pub type Result<T> = std::result::Result<T, AskdevError>;

/// Core errors.
#[derive(Debug, thiserror::Error)]
pub enum AskdevError {
    /// Catalog document is not a valid JSON entry list.
    #[error("catalog parse error: {0}")]
    CatalogParse(#[from] serde_json::Error),

    /// A catalog pattern failed to compile.
    #[error("invalid catalog pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Catalog contains the same pattern twice.
    #[error("duplicate catalog pattern: {0}")]
    DuplicatePattern(String),
}
