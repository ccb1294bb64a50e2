//! Error handling utilities shared across the crate.

use std::path::PathBuf;

use thiserror::Error;

use crate::vocab::TokenId;

/// Convenient result type used throughout the crate.
pub type Result<T, E = MinitokError> = std::result::Result<T, E>;

/// Domain-specific error describing failures during configuration, IO, or codec operations.
#[derive(Debug, Error)]
pub enum MinitokError {
    /// Decoding encountered a token id with no corresponding vocabulary entry.
    #[error("token id {id} has no entry in a vocabulary of size {vocab_size}")]
    UnknownId {
        /// The offending token id.
        id: TokenId,
        /// Total vocabulary size at the time of the lookup.
        vocab_size: usize,
    },
    /// Configuration failed validation, or corpus discovery found nothing usable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// Filesystem IO error with optional context path.
    #[error("io error while processing {path:?}: {source}")]
    Io {
        /// Underlying IO error returned by the standard library.
        source: std::io::Error,
        /// Target path associated with the IO failure if available.
        path: Option<PathBuf>,
    },
    /// Serialization or deserialization failure.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for MinitokError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl MinitokError {
    /// Helper constructor that attaches an optional path when wrapping IO errors.
    pub fn io(source: std::io::Error, path: Option<PathBuf>) -> Self {
        Self::Io { source, path }
    }
}
