//! CSV ingest and output for cellscrub tables.
//!
//! CSV is untyped on disk, so ingest infers cell types: numeric and
//! boolean fields become opaque cells the pipeline cannot touch, and
//! everything else stays free text. Output renders the inverse mapping
//! and preserves column and row order.

mod csv_io;
mod error;
mod naming;

pub use csv_io::{infer_cell, read_csv_table, render_cell, write_csv_table};
pub use error::IngestError;
pub use naming::timestamped_name;
