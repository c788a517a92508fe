//! Row and tree types produced by catalog introspection.
//!
//! Every value here is transient: it is rebuilt on each call and carries no
//! identity beyond its fields. Serialized keys are camelCase so the JSON
//! shape is stable for whatever consumes the listings.

use serde::{Deserialize, Serialize};

/// Constraint type reported for every [`ConstraintRow`].
pub const FOREIGN_KEY: &str = "FOREIGN KEY";

/// One (table, column) pair from `information_schema.columns`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnRow {
    /// Database the table lives in
    pub table_catalog: String,
    /// Schema the table lives in
    pub table_schema: String,
    /// Table or view name
    pub table_name: String,
    /// Column name
    pub column_name: String,
    /// 1-based position of the column within its table
    pub ordinal_position: i32,
    /// Raw nullability flag as reported by the catalog ("YES" / "NO")
    pub is_nullable: String,
    /// SQL type name, e.g. "integer" or "character varying"
    pub data_type: String,
    /// Comment on the table, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_comment: Option<String>,
    /// Comment on the column, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_comment: Option<String>,
}

impl ColumnRow {
    /// Returns true when the catalog marks the column as NOT NULL.
    ///
    /// Anything other than a case-insensitive "yes" counts as not nullable.
    pub fn is_not_null(&self) -> bool {
        !self.is_nullable.eq_ignore_ascii_case("yes")
    }
}

/// One foreign-key column mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstraintRow {
    /// Constraint name, unique per table
    pub constraint_name: String,
    /// Always [`FOREIGN_KEY`]
    pub constraint_type: String,
    /// Referencing table
    pub constraint_table: String,
    /// Referencing column
    pub constraint_column: String,
    /// Referenced table
    pub constrainted_table: String,
    /// Referenced column
    pub constrainted_column: String,
}

/// A table with its columns folded underneath it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompactTable {
    /// Table or view name
    pub name: String,
    /// Schema the table lives in
    pub schema: String,
    /// Database the table lives in
    pub catalog: String,
    /// Table comment, if any
    pub description: Option<String>,
    /// Columns in ordinal order
    pub columns: Vec<CompactColumn>,
}

impl CompactTable {
    /// Creates an empty table entry keyed by (name, schema).
    pub fn new(name: String, schema: String, catalog: String) -> Self {
        Self {
            name,
            schema,
            catalog,
            description: None,
            columns: Vec::new(),
        }
    }

    /// Returns true when this entry is keyed by the given (name, schema) pair.
    pub fn is_keyed_by(&self, name: &str, schema: &str) -> bool {
        self.name == name && self.schema == schema
    }

    /// Finds a column by name.
    pub fn column(&self, name: &str) -> Option<&CompactColumn> {
        self.columns.iter().find(|c| c.name == name)
    }
}

/// A column within a [`CompactTable`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompactColumn {
    /// Column name
    pub name: String,
    #[serde(rename = "type")]
    /// SQL type name
    pub data_type: String,
    /// True when the column rejects NULL
    pub not_null: bool,
    /// Column comment, if any
    pub description: Option<String>,
    /// Free-form extra attributes, empty when read from the catalog
    #[serde(default)]
    pub properties: serde_json::Map<String, serde_json::Value>,
}

impl From<&ColumnRow> for CompactColumn {
    fn from(row: &ColumnRow) -> Self {
        Self {
            name: row.column_name.clone(),
            data_type: row.data_type.clone(),
            not_null: row.is_not_null(),
            description: row.column_comment.clone(),
            properties: serde_json::Map::new(),
        }
    }
}

#[cfg(test)]
#[path = "models_tests.rs"]
mod tests;
