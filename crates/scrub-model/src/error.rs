//! Error types for table construction.

use thiserror::Error;

/// Errors raised when a [`crate::Table`] would violate its shape invariants.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ModelError {
    /// A column name appears more than once.
    #[error("duplicate column name: {0}")]
    DuplicateColumn(String),

    /// A column has an empty name.
    #[error("column {index} has an empty name")]
    EmptyColumnName {
        /// Zero-based position of the offending column.
        index: usize,
    },

    /// Columns disagree on the number of rows.
    #[error("column {column} has {actual} rows, expected {expected}")]
    RowCountMismatch {
        /// Name of the offending column.
        column: String,
        /// Row count of the first column.
        expected: usize,
        /// Row count of the offending column.
        actual: usize,
    },
}
