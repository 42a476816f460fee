use serde::{Deserialize, Serialize};

use crate::ModelError;

/// A single table cell.
///
/// Only `Text` cells are touched by the cleaning pipeline; every other
/// variant is an opaque scalar that must survive a pipeline run bit-for-bit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Text(String),
    Integer(i64),
    Number(f64),
    Boolean(bool),
    Missing,
}

impl CellValue {
    /// Returns true for free-text cells.
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    /// Borrow the text content, if any.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value.as_str()),
            _ => None,
        }
    }
}

/// A named, ordered sequence of cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub cells: Vec<CellValue>,
}

impl Column {
    pub fn new(name: impl Into<String>, cells: Vec<CellValue>) -> Self {
        Self {
            name: name.into(),
            cells,
        }
    }
}

/// An ordered collection of equally long, uniquely named columns.
///
/// Column order and row order are significant and preserved everywhere.
/// The constructor is the only way to build a `Table`, so a constructed
/// table always satisfies the shape invariants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    /// Build a table, validating column names and row alignment.
    pub fn new(columns: Vec<Column>) -> Result<Self, ModelError> {
        let expected = columns.first().map_or(0, |c| c.cells.len());
        for (index, column) in columns.iter().enumerate() {
            if column.name.trim().is_empty() {
                return Err(ModelError::EmptyColumnName { index });
            }
            if columns[..index].iter().any(|c| c.name == column.name) {
                return Err(ModelError::DuplicateColumn(column.name.clone()));
            }
            if column.cells.len() != expected {
                return Err(ModelError::RowCountMismatch {
                    column: column.name.clone(),
                    expected,
                    actual: column.cells.len(),
                });
            }
        }
        Ok(Self { columns })
    }

    /// Number of rows (length shared by every column).
    pub fn n_rows(&self) -> usize {
        self.columns.first().map_or(0, |c| c.cells.len())
    }

    /// Number of columns.
    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    /// Total number of cells.
    pub fn n_cells(&self) -> usize {
        self.n_rows() * self.n_cols()
    }

    /// Column names in table order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// All columns in table order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Apply a transform to every text cell, producing a new table.
    ///
    /// Non-text cells are copied through untouched, so the result has the
    /// same shape as `self` by construction.
    pub fn map_text_cells<F>(&self, mut transform: F) -> Self
    where
        F: FnMut(&str) -> String,
    {
        let columns = self
            .columns
            .iter()
            .map(|column| Column {
                name: column.name.clone(),
                cells: column
                    .cells
                    .iter()
                    .map(|cell| match cell {
                        CellValue::Text(value) => CellValue::Text(transform(value)),
                        other => other.clone(),
                    })
                    .collect(),
            })
            .collect();
        Self { columns }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: &str) -> CellValue {
        CellValue::Text(value.to_string())
    }

    #[test]
    fn new_accepts_aligned_columns() {
        let table = Table::new(vec![
            Column::new("a", vec![text("x"), CellValue::Missing]),
            Column::new("b", vec![CellValue::Integer(1), text("y")]),
        ])
        .unwrap();
        assert_eq!(table.n_rows(), 2);
        assert_eq!(table.n_cols(), 2);
        assert_eq!(table.column_names(), vec!["a", "b"]);
    }

    #[test]
    fn new_rejects_duplicate_names() {
        let err = Table::new(vec![
            Column::new("a", vec![]),
            Column::new("a", vec![]),
        ])
        .unwrap_err();
        assert!(matches!(err, ModelError::DuplicateColumn(name) if name == "a"));
    }

    #[test]
    fn new_rejects_empty_name() {
        let err = Table::new(vec![Column::new("  ", vec![])]).unwrap_err();
        assert!(matches!(err, ModelError::EmptyColumnName { index: 0 }));
    }

    #[test]
    fn new_rejects_ragged_columns() {
        let err = Table::new(vec![
            Column::new("a", vec![text("x")]),
            Column::new("b", vec![]),
        ])
        .unwrap_err();
        assert!(matches!(
            err,
            ModelError::RowCountMismatch { expected: 1, actual: 0, .. }
        ));
    }

    #[test]
    fn map_text_cells_leaves_opaque_cells_alone() {
        let table = Table::new(vec![Column::new(
            "a",
            vec![
                text("hi"),
                CellValue::Integer(7),
                CellValue::Number(1.5),
                CellValue::Boolean(false),
                CellValue::Missing,
            ],
        )])
        .unwrap();

        let mapped = table.map_text_cells(|s| s.to_uppercase());
        let cells = &mapped.column("a").unwrap().cells;
        assert_eq!(cells[0], text("HI"));
        assert_eq!(cells[1..], table.column("a").unwrap().cells[1..]);
    }
}
