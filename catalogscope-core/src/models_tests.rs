//! Tests for the catalog row models.

use super::*;

fn column(table: &str, name: &str, position: i32, nullable: &str, data_type: &str) -> ColumnRow {
    ColumnRow {
        table_catalog: "app".to_string(),
        table_schema: "public".to_string(),
        table_name: table.to_string(),
        column_name: name.to_string(),
        ordinal_position: position,
        is_nullable: nullable.to_string(),
        data_type: data_type.to_string(),
        table_comment: None,
        column_comment: None,
    }
}

#[test]
fn test_is_not_null_is_case_insensitive() {
    assert!(!column("users", "email", 2, "YES", "text").is_not_null());
    assert!(!column("users", "email", 2, "yes", "text").is_not_null());
    assert!(!column("users", "email", 2, "Yes", "text").is_not_null());
    assert!(column("users", "id", 1, "NO", "integer").is_not_null());
    // Unknown flags are treated as NOT NULL
    assert!(column("users", "id", 1, "", "integer").is_not_null());
}

#[test]
fn test_compact_column_from_row() {
    let mut row = column("users", "email", 2, "YES", "character varying");
    row.column_comment = Some("login address".to_string());

    let compact = CompactColumn::from(&row);
    assert_eq!(compact.name, "email");
    assert_eq!(compact.data_type, "character varying");
    assert!(!compact.not_null);
    assert_eq!(compact.description.as_deref(), Some("login address"));
    assert!(compact.properties.is_empty());
}

#[test]
fn test_compact_table_keying() {
    let table = CompactTable::new("users".to_string(), "public".to_string(), "app".to_string());
    assert!(table.is_keyed_by("users", "public"));
    assert!(!table.is_keyed_by("users", "audit"));
    assert!(!table.is_keyed_by("orders", "public"));
    assert!(table.columns.is_empty());
    assert!(table.description.is_none());
}

#[test]
fn test_column_row_serializes_camel_case() {
    let row = column("users", "id", 1, "NO", "integer");
    let json = serde_json::to_value(&row).unwrap();

    assert_eq!(json["tableCatalog"], "app");
    assert_eq!(json["tableSchema"], "public");
    assert_eq!(json["tableName"], "users");
    assert_eq!(json["columnName"], "id");
    assert_eq!(json["ordinalPosition"], 1);
    assert_eq!(json["isNullable"], "NO");
    assert_eq!(json["dataType"], "integer");
    assert!(json.get("columnComment").is_none());
}

#[test]
fn test_constraint_row_serializes_contract_keys() {
    let row = ConstraintRow {
        constraint_name: "orders_user_id_fkey".to_string(),
        constraint_type: FOREIGN_KEY.to_string(),
        constraint_table: "orders".to_string(),
        constraint_column: "user_id".to_string(),
        constrainted_table: "users".to_string(),
        constrainted_column: "id".to_string(),
    };
    let json = serde_json::to_value(&row).unwrap();

    assert_eq!(json["constraintType"], "FOREIGN KEY");
    assert_eq!(json["constraintTable"], "orders");
    assert_eq!(json["constraintColumn"], "user_id");
    assert_eq!(json["constraintedTable"], "users");
    assert_eq!(json["constraintedColumn"], "id");
}

#[test]
fn test_compact_column_type_key() {
    let compact = CompactColumn::from(&column("orders", "id", 1, "NO", "integer"));
    let json = serde_json::to_value(&compact).unwrap();

    assert_eq!(json["type"], "integer");
    assert_eq!(json["notNull"], true);
    assert!(json["properties"].as_object().unwrap().is_empty());

    let back: CompactColumn = serde_json::from_value(json).unwrap();
    assert_eq!(back, compact);
}
