//! Error types for the subword BPE library.

use thiserror::Error;

/// Main error type for the subword BPE library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenizerError {
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Invalid merge rule
    #[error("Invalid merge rule: {0}")]
    InvalidMerge(String),
}

/// Result type alias for tokenizer operations.
pub type Result<T> = std::result::Result<T, TokenizerError>;
