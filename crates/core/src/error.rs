//! Error types for the tokenizer library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the tokenizer library.
///
/// Every error aborts the call that raised it; nothing is retried or
/// recovered internally.
#[derive(Error, Debug)]
pub enum TokenizerError {
    /// The vocabulary ids do not form exactly `{0, ..., size - 1}`.
    #[error("Malformed vocabulary: id {id} is out of range or duplicated (vocabulary size {size})")]
    MalformedVocabulary { id: u32, size: usize },

    /// A merge description is not exactly two parts separated by one space.
    #[error("Malformed merge rule #{rank}: '{rule}'")]
    MalformedMergeRule { rank: usize, rule: String },

    /// A merge rule names a left, right or merged string missing from the vocabulary.
    #[error("Merge rule #{rank} references unknown token '{token}'")]
    UnknownMergeToken { rank: usize, token: String },

    /// A character of the input has no singleton token.
    #[error("Unknown symbol {0:?}: character is outside the tokenizer's vocabulary")]
    UnknownSymbol(char),

    /// Unknown token ID
    #[error("Unknown token ID: {0}")]
    UnknownTokenId(u32),

    /// Error loading a tokenizer artifact
    #[error("Load error: {0}")]
    Load(String),

    /// Error saving a tokenizer artifact
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
}

/// Result type alias for tokenizer operations.
pub type Result<T> = std::result::Result<T, TokenizerError>;
