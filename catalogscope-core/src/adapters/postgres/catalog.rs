//! `information_schema` queries and row mapping.
//!
//! Catalog columns are domain types (`sql_identifier`, `cardinal_number`,
//! `yes_or_no`); every selected column is cast to a base type so the
//! driver can decode it.

use crate::Result;
use crate::adapters::helpers::RowExt;
use crate::error::CatalogError;
use crate::models::{ColumnRow, ConstraintRow, FOREIGN_KEY};
use sqlx::PgConnection;
use sqlx::postgres::PgRow;

const COLUMNS_VIEW: &str = "information_schema.columns";
const CONSTRAINTS_VIEW: &str = "information_schema.table_constraints";

/// Columns of every base table and view outside the system schemas.
pub(crate) const TABLES_QUERY: &str = r#"
    SELECT
        c.table_catalog::text AS table_catalog,
        c.table_schema::text AS table_schema,
        c.table_name::text AS table_name,
        c.column_name::text AS column_name,
        c.ordinal_position::int4 AS ordinal_position,
        c.is_nullable::text AS is_nullable,
        c.data_type::text AS data_type,
        obj_description(pc.oid, 'pg_class') AS table_comment,
        col_description(pc.oid, pa.attnum::int4) AS column_comment
    FROM information_schema.tables t
    JOIN information_schema.columns c
        ON c.table_catalog = t.table_catalog
        AND c.table_schema = t.table_schema
        AND c.table_name = t.table_name
    LEFT JOIN pg_catalog.pg_namespace pn ON pn.nspname = t.table_schema
    LEFT JOIN pg_catalog.pg_class pc
        ON pc.relnamespace = pn.oid AND pc.relname = t.table_name
    LEFT JOIN pg_catalog.pg_attribute pa
        ON pa.attrelid = pc.oid AND pa.attname = c.column_name
    WHERE t.table_type IN ('BASE TABLE', 'VIEW')
    AND t.table_schema NOT IN ('information_schema', 'pg_catalog')
    ORDER BY c.table_schema, c.table_name, c.ordinal_position
"#;

/// One row per foreign-key column mapping.
///
/// `information_schema.table_constraints` decides which constraints are
/// visible. Constraint names are only unique per table, so the constraint is
/// resolved in `pg_constraint` by owning table and name, and its local and
/// referenced key arrays are unnested in step: a composite key yields one
/// row per column pair, in key order.
pub(crate) const CONSTRAINTS_QUERY: &str = r#"
    SELECT
        tc.constraint_name::text AS constraint_name,
        tc.table_name::text AS constraint_table,
        la.attname::text AS constraint_column,
        rcl.relname::text AS constrainted_table,
        ra.attname::text AS constrainted_column
    FROM information_schema.table_constraints tc
    JOIN pg_catalog.pg_namespace lns ON lns.nspname = tc.table_schema
    JOIN pg_catalog.pg_class lcl
        ON lcl.relnamespace = lns.oid AND lcl.relname = tc.table_name
    JOIN pg_catalog.pg_constraint con
        ON con.conrelid = lcl.oid
        AND con.conname = tc.constraint_name
        AND con.contype = 'f'
    JOIN pg_catalog.pg_class rcl ON rcl.oid = con.confrelid
    CROSS JOIN LATERAL unnest(con.conkey, con.confkey)
        WITH ORDINALITY AS k(local_attnum, referenced_attnum, key_position)
    JOIN pg_catalog.pg_attribute la
        ON la.attrelid = con.conrelid AND la.attnum = k.local_attnum
    JOIN pg_catalog.pg_attribute ra
        ON ra.attrelid = con.confrelid AND ra.attnum = k.referenced_attnum
    WHERE tc.constraint_type = 'FOREIGN KEY'
    ORDER BY tc.table_schema, tc.table_name, tc.constraint_name, k.key_position
"#;

/// Runs the column listing query and maps every row.
pub(crate) async fn fetch_columns(conn: &mut PgConnection) -> Result<Vec<ColumnRow>> {
    let rows = sqlx::query(TABLES_QUERY)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list table columns: {}", e);
            CatalogError::query_failed("Failed to list table columns", e)
        })?;

    let columns = rows
        .iter()
        .map(map_column_row)
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!("Listed {} columns", columns.len());
    Ok(columns)
}

/// Runs the foreign-key listing query and maps every row.
pub(crate) async fn fetch_foreign_keys(conn: &mut PgConnection) -> Result<Vec<ConstraintRow>> {
    let rows = sqlx::query(CONSTRAINTS_QUERY)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list foreign key constraints: {}", e);
            CatalogError::query_failed("Failed to list foreign key constraints", e)
        })?;

    let constraints = rows
        .iter()
        .map(map_constraint_row)
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!("Listed {} foreign key column mappings", constraints.len());
    Ok(constraints)
}

fn map_column_row(row: &PgRow) -> Result<ColumnRow> {
    let view = Some(COLUMNS_VIEW);
    Ok(ColumnRow {
        table_catalog: row.get_field("table_catalog", view)?,
        table_schema: row.get_field("table_schema", view)?,
        table_name: row.get_field("table_name", view)?,
        column_name: row.get_field("column_name", view)?,
        ordinal_position: row.get_field("ordinal_position", view)?,
        is_nullable: row.get_field("is_nullable", view)?,
        data_type: row.get_field("data_type", view)?,
        table_comment: row.get_field("table_comment", view)?,
        column_comment: row.get_field("column_comment", view)?,
    })
}

fn map_constraint_row(row: &PgRow) -> Result<ConstraintRow> {
    let view = Some(CONSTRAINTS_VIEW);
    Ok(ConstraintRow {
        constraint_name: row.get_field("constraint_name", view)?,
        constraint_type: FOREIGN_KEY.to_string(),
        constraint_table: row.get_field("constraint_table", view)?,
        constraint_column: row.get_field("constraint_column", view)?,
        constrainted_table: row.get_field("constrainted_table", view)?,
        constrainted_column: row.get_field("constrainted_column", view)?,
    })
}
