//! Folding flat column rows into per-table trees.

use crate::models::{ColumnRow, CompactColumn, CompactTable};

/// Folds ordered column rows into one [`CompactTable`] per (name, schema).
///
/// Rows are consumed left to right. Tables appear in the order their first
/// column is seen, and columns keep the order they arrive in, so callers
/// that pass rows sorted by (schema, table, ordinal) get ordinal order
/// within each table.
///
/// The accumulator is searched linearly; catalog listings are small and
/// this runs once per call.
pub fn format_to_compact_table(rows: &[ColumnRow]) -> Vec<CompactTable> {
    let mut tables: Vec<CompactTable> = Vec::new();

    for row in rows {
        let position = tables
            .iter()
            .position(|t| t.is_keyed_by(&row.table_name, &row.table_schema));

        let table = match position {
            Some(index) => &mut tables[index],
            None => {
                let mut table = CompactTable::new(
                    row.table_name.clone(),
                    row.table_schema.clone(),
                    row.table_catalog.clone(),
                );
                table.description = row.table_comment.clone();
                tables.push(table);
                let last = tables.len().saturating_sub(1);
                &mut tables[last]
            }
        };

        table.columns.push(CompactColumn::from(row));
    }

    tracing::debug!(
        "Folded {} column rows into {} compact tables",
        rows.len(),
        tables.len()
    );

    tables
}
