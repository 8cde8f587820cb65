//! Error types for the subword tokenizer library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for tokenizer operations.
#[derive(Error, Debug)]
pub enum TokenizerError {
    /// Error loading a vocabulary or priority file
    #[error("Load error: {0}")]
    Load(String),

    /// Error saving a tokenizer
    #[error("Save error: {0}")]
    Save(String),

    /// I/O error with file context
    #[error("I/O error for {path}: {err}")]
    Io {
        path: PathBuf,
        #[source]
        err: std::io::Error,
    },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The unknown-token index does not address any vocabulary entry.
    ///
    /// Raised only when an out-of-range id falls back to the unk token
    /// and no replacement string was supplied.
    #[error("unk index {unk_idx} out of range for vocabulary of {vocab_len} tokens")]
    UnkIndexOutOfRange { unk_idx: i64, vocab_len: usize },
}

/// Result type alias for tokenizer operations.
pub type Result<T> = std::result::Result<T, TokenizerError>;
