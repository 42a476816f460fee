//! Serialization behavior of the table model.

use scrub_model::{CellValue, Column, Table};

#[test]
fn cell_value_serializes_with_kind_tag() {
    let json = serde_json::to_value(CellValue::Text("hi".to_string())).unwrap();
    assert_eq!(json["kind"], "Text");
    assert_eq!(json["value"], "hi");

    let json = serde_json::to_value(CellValue::Missing).unwrap();
    assert_eq!(json["kind"], "Missing");
}

#[test]
fn table_round_trips_through_json() {
    let table = Table::new(vec![
        Column::new(
            "name",
            vec![
                CellValue::Text("alpha".to_string()),
                CellValue::Text("beta".to_string()),
            ],
        ),
        Column::new(
            "count",
            vec![CellValue::Integer(3), CellValue::Missing],
        ),
    ])
    .unwrap();

    let json = serde_json::to_string(&table).unwrap();
    let back: Table = serde_json::from_str(&json).unwrap();
    assert_eq!(back, table);
}
