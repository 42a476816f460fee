//! CSV reading and writing with cell type inference.

use std::fs::File;
use std::path::Path;

use tracing::debug;

use scrub_model::{CellValue, Column, Table};

use crate::IngestError;

/// Infer a typed cell from one CSV field.
///
/// Empty (or whitespace-only) fields become `Missing`; integer, float, and
/// boolean fields become the matching opaque variant so the pipeline
/// cannot rewrite them; everything else is free text, kept verbatim.
pub fn infer_cell(raw: &str) -> CellValue {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return CellValue::Missing;
    }
    if let Ok(value) = trimmed.parse::<i64>() {
        return CellValue::Integer(value);
    }
    if trimmed.eq_ignore_ascii_case("true") {
        return CellValue::Boolean(true);
    }
    if trimmed.eq_ignore_ascii_case("false") {
        return CellValue::Boolean(false);
    }
    // Numeric-looking fields only; keeps words like "nan" or "inf" as text.
    if trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'))
        && let Ok(value) = trimmed.parse::<f64>()
        && value.is_finite()
    {
        return CellValue::Number(value);
    }
    CellValue::Text(raw.to_string())
}

/// Render a cell back to one CSV field.
pub fn render_cell(cell: &CellValue) -> String {
    match cell {
        CellValue::Text(value) => value.clone(),
        CellValue::Integer(value) => value.to_string(),
        CellValue::Number(value) => value.to_string(),
        CellValue::Boolean(value) => value.to_string(),
        CellValue::Missing => String::new(),
    }
}

/// Read a CSV file into a typed table.
///
/// The header row supplies the column names; every following record must
/// have the same number of fields.
pub fn read_csv_table(path: &Path) -> Result<Table, IngestError> {
    let file = File::open(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = csv::ReaderBuilder::new().has_headers(true).from_reader(file);

    let headers = reader.headers()?.clone();
    let mut columns: Vec<Column> = headers
        .iter()
        .map(|name| Column::new(name, Vec::new()))
        .collect();

    for record in reader.records() {
        let record = record?;
        for (column, field) in columns.iter_mut().zip(record.iter()) {
            column.cells.push(infer_cell(field));
        }
    }

    let table = Table::new(columns)?;
    debug!(
        path = %path.display(),
        rows = table.n_rows(),
        cols = table.n_cols(),
        "read CSV table"
    );
    Ok(table)
}

/// Write a table to a CSV file, preserving column and row order.
pub fn write_csv_table(table: &Table, path: &Path) -> Result<(), IngestError> {
    let file = File::create(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = csv::Writer::from_writer(file);

    writer.write_record(table.column_names())?;
    for row in 0..table.n_rows() {
        let record: Vec<String> = table
            .columns()
            .iter()
            .map(|column| render_cell(&column.cells[row]))
            .collect();
        writer.write_record(&record)?;
    }
    writer.flush().map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), rows = table.n_rows(), "wrote CSV table");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infer_cell_types_fields() {
        assert_eq!(infer_cell(""), CellValue::Missing);
        assert_eq!(infer_cell("   "), CellValue::Missing);
        assert_eq!(infer_cell("42"), CellValue::Integer(42));
        assert_eq!(infer_cell("-7"), CellValue::Integer(-7));
        assert_eq!(infer_cell("3.5"), CellValue::Number(3.5));
        assert_eq!(infer_cell("TRUE"), CellValue::Boolean(true));
        assert_eq!(infer_cell("false"), CellValue::Boolean(false));
        assert_eq!(
            infer_cell("hello world"),
            CellValue::Text("hello world".to_string())
        );
    }

    #[test]
    fn infer_cell_keeps_numeric_words_as_text() {
        assert_eq!(infer_cell("nan"), CellValue::Text("nan".to_string()));
        assert_eq!(infer_cell("inf"), CellValue::Text("inf".to_string()));
        assert_eq!(infer_cell("1-2"), CellValue::Text("1-2".to_string()));
    }

    #[test]
    fn read_infers_types_and_preserves_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.csv");
        std::fs::write(&path, "note,count,flag\nhello,3,true\n,2.5,\n").unwrap();

        let table = read_csv_table(&path).unwrap();
        assert_eq!(table.column_names(), vec!["note", "count", "flag"]);
        assert_eq!(table.n_rows(), 2);
        assert_eq!(
            table.column("note").unwrap().cells,
            vec![CellValue::Text("hello".to_string()), CellValue::Missing]
        );
        assert_eq!(
            table.column("count").unwrap().cells,
            vec![CellValue::Integer(3), CellValue::Number(2.5)]
        );
        assert_eq!(
            table.column("flag").unwrap().cells,
            vec![CellValue::Boolean(true), CellValue::Missing]
        );
    }

    #[test]
    fn write_then_read_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.csv");
        std::fs::write(&path, "a,b\nx y,1\n,true\n").unwrap();

        let table = read_csv_table(&path).unwrap();
        let out_path = dir.path().join("output.csv");
        write_csv_table(&table, &out_path).unwrap();

        let back = read_csv_table(&out_path).unwrap();
        assert_eq!(back, table);
    }

    #[test]
    fn read_rejects_duplicate_headers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dup.csv");
        std::fs::write(&path, "a,a\n1,2\n").unwrap();
        let err = read_csv_table(&path).unwrap_err();
        assert!(matches!(err, IngestError::Model(_)));
    }

    #[test]
    fn read_missing_file_reports_path() {
        let err = read_csv_table(Path::new("/nonexistent/input.csv")).unwrap_err();
        assert!(matches!(err, IngestError::Io { .. }));
    }
}
