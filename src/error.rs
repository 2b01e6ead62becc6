//! Crate-wide error types.

use thiserror::Error;

/// Result type for store, config and document operations.
pub type SpecflowResult<T> = Result<T, SpecflowError>;

/// Errors that can occur outside the pure classification and parsing code.
#[derive(Debug, Error)]
pub enum SpecflowError {
    /// No spec with the given ID exists.
    #[error("Spec not found: {0}")]
    NotFound(String),

    /// A stored document has unreadable front matter.
    #[error("Invalid front matter in {id}: {reason}")]
    FrontMatter {
        /// Document the front matter belongs to.
        id: String,
        /// Why parsing failed.
        reason: String,
    },

    /// The underlying storage failed.
    #[error("Store error: {0}")]
    Store(String),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(String),
}
