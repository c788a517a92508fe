//! Connector trait for catalog introspection.
//!
//! A connector owns at most one live database client and exposes four
//! operations: a soft-failing connectivity check, two strict list
//! operations, and an idempotent close.
//!
//! # Module Structure
//! - `config`: Connection configuration
//! - `helpers`: Typed row-field extraction
//! - `postgres`: PostgreSQL implementation over `information_schema`

use crate::Result;
use crate::models::CompactTable;
use async_trait::async_trait;

pub mod config;

pub use config::{ConnectionConfig, SslMode};

/// Options for [`SchemaConnector::list_tables`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListTablesOptions {
    /// Fold flat column rows into one entry per table
    pub format: bool,
}

impl ListTablesOptions {
    /// Options requesting the flat row listing.
    pub fn flat() -> Self {
        Self { format: false }
    }

    /// Options requesting the compact per-table listing.
    pub fn compact() -> Self {
        Self { format: true }
    }
}

/// Result of [`SchemaConnector::list_tables`].
#[derive(Debug, Clone, PartialEq)]
pub enum TableListing<C> {
    /// One entry per (table, column) pair
    Flat(Vec<C>),
    /// One entry per table with its columns nested
    Compact(Vec<CompactTable>),
}

impl<C> TableListing<C> {
    /// Returns the flat rows, or `None` for a compact listing.
    pub fn into_flat(self) -> Option<Vec<C>> {
        match self {
            Self::Flat(rows) => Some(rows),
            Self::Compact(_) => None,
        }
    }

    /// Returns the compact tables, or `None` for a flat listing.
    pub fn into_compact(self) -> Option<Vec<CompactTable>> {
        match self {
            Self::Flat(_) => None,
            Self::Compact(tables) => Some(tables),
        }
    }

    /// Number of top-level entries in the listing.
    pub fn len(&self) -> usize {
        match self {
            Self::Flat(rows) => rows.len(),
            Self::Compact(tables) => tables.len(),
        }
    }

    /// Returns true when the listing has no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Catalog connector over a single lazily opened database client.
///
/// Operations take `&mut self`: a connector issues one query at a time and
/// concurrent callers need their own instance.
///
/// # Error policy
/// [`connect`](Self::connect) is advisory and reports failure as `false`.
/// The list operations are strict and return the client's error.
#[async_trait]
pub trait SchemaConnector: Send {
    /// Row type produced for each (table, column) pair.
    type Column: Send;
    /// Row type produced for each constraint column mapping.
    type Constraint: Send;

    /// Opens the client if needed and runs a verification round trip.
    ///
    /// Never fails: errors are logged and reported as `false`.
    async fn connect(&mut self) -> bool;

    /// Lists columns of all user tables and views.
    ///
    /// # Errors
    /// Returns the underlying client error if opening the connection or
    /// running the catalog query fails.
    async fn list_tables(&mut self, options: ListTablesOptions) -> Result<TableListing<Self::Column>>;

    /// Lists foreign-key column mappings.
    ///
    /// # Errors
    /// Returns the underlying client error if opening the connection or
    /// running the catalog query fails.
    async fn list_constraints(&mut self) -> Result<Vec<Self::Constraint>>;

    /// Terminates the client if one is open. Safe to call repeatedly.
    async fn close(&mut self);
}

// Shared helper utilities
#[cfg(feature = "postgresql")]
pub mod helpers;

#[cfg(feature = "postgresql")]
pub mod postgres;
