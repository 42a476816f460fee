//! Data model for cellscrub tables.
//!
//! A [`Table`] is an ordered sequence of named [`Column`]s whose cells are
//! aligned by row index. Cells are either free text (subject to the cleaning
//! pipeline) or opaque scalars (numbers, booleans, missing values) that pass
//! through every transform unchanged.

mod error;
mod table;

pub use error::ModelError;
pub use table::{CellValue, Column, Table};
