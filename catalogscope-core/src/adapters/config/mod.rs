//! Configuration types for connectors.
//!
//! - `ConnectionConfig`: credentials and address of the target database
//! - `SslMode`: TLS policy for the client

mod connection;

pub use connection::{ConnectionConfig, DEFAULT_PORT, SslMode};
