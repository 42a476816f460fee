//! Error types for CSV ingest and output.

use std::path::PathBuf;

use thiserror::Error;

use scrub_model::ModelError;

/// Errors raised while reading or writing tables.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IngestError {
    /// File could not be opened or created.
    #[error("cannot access {path}: {source}")]
    Io {
        /// Path involved in the failed operation.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Malformed CSV content.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The parsed file violates the table shape invariants.
    #[error(transparent)]
    Model(#[from] ModelError),
}
