//! Error types for the correction collaborators.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by dictionary loading and grammar-service calls.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CorrectError {
    /// A word list file could not be read.
    #[error("cannot read word list {path}: {source}")]
    WordListRead {
        /// Path of the word list file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A word list file contained no usable entries.
    #[error("word list {path} contains no words")]
    WordListEmpty {
        /// Path of the word list file.
        path: PathBuf,
    },

    /// The grammar service could not be reached at startup.
    ///
    /// This is a configuration error and fails the whole run before any
    /// cell is processed.
    #[error("grammar service unreachable at {url}: {reason}")]
    GrammarUnavailable {
        /// Base URL of the configured service.
        url: String,
        /// Human-readable failure description.
        reason: String,
    },

    /// A per-cell grammar request failed (timeout, transport fault).
    #[error("grammar request failed: {0}")]
    GrammarRequest(String),

    /// The grammar service answered with a non-success status.
    #[error("grammar service returned HTTP {status}")]
    GrammarStatus {
        /// HTTP status code of the response.
        status: u16,
    },
}
