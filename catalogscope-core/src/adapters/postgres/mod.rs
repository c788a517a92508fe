//! PostgreSQL catalog connector.
//!
//! # Module Structure
//! - `connection`: Lifecycle of the single client (lazy open, connectivity check, close)
//! - `catalog`: `information_schema` queries and row mapping
//!
//! # Security Guarantees
//! - Only catalog views are read (SELECT only)
//! - The password never reaches a log line or error message

mod catalog;
mod connection;


use super::{ConnectionConfig, ListTablesOptions, SchemaConnector, TableListing};
use crate::Result;
use crate::compact::format_to_compact_table;
use crate::models::{ColumnRow, ConstraintRow};
use async_trait::async_trait;
use tracing::Dispatch;
use tracing::instrument::WithSubscriber;

pub use connection::ConnectionState;

/// Connector reading table, column and foreign-key metadata from
/// `information_schema`.
///
/// The client is opened on first use and kept until [`close`](SchemaConnector::close).
/// All log events, including the driver's own, go to the dispatcher the
/// connector was built with.
///
/// # Example
/// ```rust,no_run
/// use catalogscope_core::adapters::{
///     ConnectionConfig, ListTablesOptions, SchemaConnector, postgres::PostgresConnector,
/// };
///
/// # async fn example() -> catalogscope_core::Result<()> {
/// let config = ConnectionConfig::new("localhost", "postgres", "postgres", "postgres");
/// let mut connector = PostgresConnector::new(config);
///
/// if connector.connect().await {
///     let tables = connector.list_tables(ListTablesOptions::compact()).await?;
///     let foreign_keys = connector.list_constraints().await?;
///     println!("{} tables, {} foreign key columns", tables.len(), foreign_keys.len());
/// }
/// connector.close().await;
/// # Ok(())
/// # }
/// ```
pub struct PostgresConnector {
    config: ConnectionConfig,
    logger: Dispatch,
    state: ConnectionState,
}

impl std::fmt::Debug for PostgresConnector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostgresConnector")
            .field("config", &self.config)
            .field("connected", &self.state.is_connected())
            .finish()
    }
}

impl PostgresConnector {
    /// Creates an unconnected connector logging to the caller's current
    /// dispatcher.
    pub fn new(config: ConnectionConfig) -> Self {
        Self::with_logger(config, crate::logging::current_dispatch())
    }

    /// Creates an unconnected connector logging to `logger`.
    pub fn with_logger(config: ConnectionConfig, logger: Dispatch) -> Self {
        Self {
            config,
            logger,
            state: ConnectionState::default(),
        }
    }

    /// Gets the connection configuration.
    pub fn config(&self) -> &ConnectionConfig {
        &self.config
    }

    /// Returns true while a client is held.
    pub fn is_connected(&self) -> bool {
        self.state.is_connected()
    }

    async fn fetch_tables(&mut self, options: ListTablesOptions) -> Result<TableListing<ColumnRow>> {
        let conn = self.ensure_connected().await?;
        let rows = catalog::fetch_columns(conn).await?;

        if options.format {
            Ok(TableListing::Compact(format_to_compact_table(&rows)))
        } else {
            Ok(TableListing::Flat(rows))
        }
    }

    async fn fetch_constraints(&mut self) -> Result<Vec<ConstraintRow>> {
        let conn = self.ensure_connected().await?;
        catalog::fetch_foreign_keys(conn).await
    }
}

#[async_trait]
impl SchemaConnector for PostgresConnector {
    type Column = ColumnRow;
    type Constraint = ConstraintRow;

    async fn connect(&mut self) -> bool {
        let logger = self.logger.clone();
        async move {
            match self.check_connectivity().await {
                Ok(()) => {
                    tracing::info!("Connected to {}", self.config);
                    true
                }
                Err(e) => {
                    let cause = std::error::Error::source(&e)
                        .map(ToString::to_string)
                        .unwrap_or_default();
                    tracing::error!("Failed to connect to {}: {} ({})", self.config, e, cause);
                    false
                }
            }
        }
        .with_subscriber(logger)
        .await
    }

    async fn list_tables(&mut self, options: ListTablesOptions) -> Result<TableListing<ColumnRow>> {
        let logger = self.logger.clone();
        self.fetch_tables(options).with_subscriber(logger).await
    }

    async fn list_constraints(&mut self) -> Result<Vec<ConstraintRow>> {
        let logger = self.logger.clone();
        self.fetch_constraints().with_subscriber(logger).await
    }

    async fn close(&mut self) {
        let logger = self.logger.clone();
        self.shutdown().with_subscriber(logger).await;
    }
}
