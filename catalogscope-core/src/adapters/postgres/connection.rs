//! Connection lifecycle for the PostgreSQL connector.
//!
//! The connector is either unconnected or holds exactly one client. A
//! client is only stored after it finished its startup handshake, so a
//! failed open leaves the connector unconnected and the next operation
//! simply tries again.

use super::PostgresConnector;
use crate::Result;
use crate::adapters::ConnectionConfig;
use crate::adapters::config::SslMode;
use crate::error::CatalogError;
use sqlx::postgres::{PgConnectOptions, PgSslMode};
use sqlx::{Connection, PgConnection};

/// The single client owned by a connector, absent until first use and
/// after [`close`](crate::SchemaConnector::close).
#[derive(Debug, Default)]
pub struct ConnectionState {
    client: Option<PgConnection>,
}

impl ConnectionState {
    /// Returns true when a client is held.
    pub fn is_connected(&self) -> bool {
        self.client.is_some()
    }
}

/// Maps the configured TLS policy onto the driver's mode.
pub(crate) fn ssl_mode(mode: SslMode) -> PgSslMode {
    match mode {
        SslMode::Disable => PgSslMode::Disable,
        SslMode::Allow => PgSslMode::Allow,
        SslMode::Prefer => PgSslMode::Prefer,
        SslMode::Require => PgSslMode::Require,
        SslMode::VerifyCa => PgSslMode::VerifyCa,
        SslMode::VerifyFull => PgSslMode::VerifyFull,
    }
}

/// Builds driver options from the connection configuration.
pub(crate) fn connect_options(config: &ConnectionConfig) -> PgConnectOptions {
    PgConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.user)
        .password(config.password())
        .database(&config.database)
        .ssl_mode(ssl_mode(config.ssl_mode))
}

/// Checks the `SELECT 1` answer of the connectivity check.
pub(crate) fn verify_check_result(result: i32) -> Result<()> {
    if result == 1 {
        return Ok(());
    }

    let unexpected = std::io::Error::new(
        std::io::ErrorKind::InvalidData,
        format!("expected 1, got {}", result),
    );
    Err(CatalogError::query_failed(
        "Connectivity check returned an unexpected result",
        unexpected,
    ))
}

async fn open(config: &ConnectionConfig) -> Result<PgConnection> {
    tracing::debug!("Opening connection to {}", config);
    PgConnection::connect_with(&connect_options(config))
        .await
        .map_err(|e| CatalogError::Connection {
            context: format!("Failed to open connection to {}", config),
            source: Box::new(e),
        })
}

impl PostgresConnector {
    /// Returns the live client, opening one first if necessary.
    ///
    /// At most one client exists per connector; an open client is reused.
    pub(crate) async fn ensure_connected(&mut self) -> Result<&mut PgConnection> {
        match &mut self.state.client {
            Some(conn) => Ok(conn),
            slot @ None => {
                let conn = open(&self.config).await?;
                Ok(slot.insert(conn))
            }
        }
    }

    /// Opens the client if needed and runs `SELECT 1`.
    pub(crate) async fn check_connectivity(&mut self) -> Result<()> {
        let conn = self.ensure_connected().await?;

        let result: i32 = sqlx::query_scalar("SELECT 1")
            .fetch_one(&mut *conn)
            .await
            .map_err(|e| CatalogError::query_failed("Connectivity check failed", e))?;

        verify_check_result(result)
    }

    /// Terminates the client, if any, and returns to the unconnected state.
    pub(crate) async fn shutdown(&mut self) {
        match self.state.client.take() {
            Some(conn) => {
                tracing::debug!("Closing connection to {}", self.config);
                if let Err(e) = conn.close().await {
                    tracing::warn!("Error while closing connection: {}", e);
                }
            }
            None => {
                tracing::debug!("Close requested with no open connection");
            }
        }
    }
}
