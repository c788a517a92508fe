//! Catalog introspection for relational databases.
//!
//! This crate reads `information_schema` to list tables, columns and
//! foreign-key constraints, optionally folding columns into one compact
//! entry per table.
//!
//! # Security Guarantees
//! - Only catalog views are queried; no user data is read
//! - Passwords are held in zeroizing buffers and never logged
//!
//! # Architecture
//! - [`adapters::SchemaConnector`] is the connector capability, generic over
//!   its row types
//! - [`adapters::postgres::PostgresConnector`] implements it over a single
//!   lazily opened client
//! - Logging goes to an injected [`tracing::Dispatch`] rather than a
//!   process-wide logger

pub mod adapters;
pub mod compact;
pub mod error;
pub mod logging;
pub mod models;

// Re-export commonly used types
pub use adapters::{ConnectionConfig, ListTablesOptions, SchemaConnector, SslMode, TableListing};
pub use compact::format_to_compact_table;
pub use error::{CatalogError, Result};
pub use models::{ColumnRow, CompactColumn, CompactTable, ConstraintRow, FOREIGN_KEY};

#[cfg(feature = "postgresql")]
pub use adapters::postgres::PostgresConnector;
