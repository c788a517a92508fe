//! Helper utilities for connector implementations.

use crate::{Result, error::CatalogError};
use sqlx::{Row, postgres::PgRow};

/// Extension trait for extracting typed values from catalog rows
/// with consistent error handling.
///
/// # Example
/// ```rust,ignore
/// use catalogscope_core::adapters::helpers::RowExt;
///
/// let name: String = row.get_field("column_name", Some("information_schema.columns"))?;
/// let comment: Option<String> = row.get_field("column_comment", None)?;
/// ```
pub trait RowExt {
    /// Extracts a typed field from the row with proper error context.
    ///
    /// # Arguments
    /// * `field_name` - Name of the column to extract
    /// * `view_context` - Optional catalog view name for error messages
    fn get_field<'r, T>(&'r self, field_name: &str, view_context: Option<&str>) -> Result<T>
    where
        T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>;
}

impl RowExt for PgRow {
    fn get_field<'r, T>(&'r self, field_name: &str, view_context: Option<&str>) -> Result<T>
    where
        T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
    {
        self.try_get(field_name)
            .map_err(|e| CatalogError::parse_field(field_name, view_context, e))
    }
}
