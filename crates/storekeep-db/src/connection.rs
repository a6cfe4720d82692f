//! # Connection Provider
//!
//! Opens one fresh database connection per call.
//!
//! ## No Pool, On Purpose
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Connection Lifecycle                             │
//! │                                                                     │
//! │  Store operation begins                                             │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ConnectionProvider::connect() ← new physical connection            │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  One SQL statement executes                                         │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  Connection dropped at scope exit (every path, success or failure)  │
//! │                                                                     │
//! │  Cost: a connection handshake per operation. Known performance      │
//! │  liability under load; documented behavior of this system.          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection, SqliteJournalMode};
use sqlx::ConnectOptions;
use tracing::{debug, error};

use crate::config::DbConfig;
use crate::error::{DbError, DbResult};

/// Hands out one fresh [`SqliteConnection`] per call.
///
/// Cheap to clone; every store holds its own copy. Connections are never
/// cached, shared or reused: the connection a store receives lives exactly
/// as long as the one operation that requested it.
#[derive(Debug, Clone)]
pub struct ConnectionProvider {
    config: DbConfig,
}

impl ConnectionProvider {
    /// Creates a provider around an injected configuration.
    pub fn new(config: DbConfig) -> Self {
        ConnectionProvider { config }
    }

    /// Returns the configuration this provider was built with.
    pub fn config(&self) -> &DbConfig {
        &self.config
    }

    /// Opens a new physical connection to the configured database.
    ///
    /// Acquisition failure is logged here and surfaces as
    /// [`DbError::ConnectionFailed`], which flows through callers exactly
    /// like any other data-access failure: swallowing operations collapse it
    /// to false/empty, propagating operations hand it to the controller.
    ///
    /// ## Returns
    /// * `Ok(SqliteConnection)` - ready for a single operation
    /// * `Err(DbError::ConnectionFailed)` - bad URL or unreachable file
    pub async fn connect(&self) -> DbResult<SqliteConnection> {
        let options = SqliteConnectOptions::from_str(&self.config.url)
            .map_err(|e| {
                error!(url = %self.config.url, error = %e, "Invalid database URL");
                DbError::ConnectionFailed(e.to_string())
            })?
            // Create the database file on first contact
            .create_if_missing(true)
            // WAL mode: readers and writers do not block each other
            .journal_mode(SqliteJournalMode::Wal);

        let conn = options.connect().await.map_err(|e| {
            error!(url = %self.config.url, error = %e, "Failed to open connection");
            DbError::ConnectionFailed(e.to_string())
        })?;

        debug!(url = %self.config.url, "Opened connection");
        Ok(conn)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connect_creates_database_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storekeep.db");
        let config = DbConfig::new(
            format!("sqlite://{}", path.display()),
            "keeper",
            "secret",
        );

        let provider = ConnectionProvider::new(config);
        let conn = provider.connect().await;
        assert!(conn.is_ok());
        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_connect_rejects_malformed_url() {
        let config = DbConfig::new("postgres://not-sqlite/db", "keeper", "secret");
        let provider = ConnectionProvider::new(config);

        match provider.connect().await {
            Err(DbError::ConnectionFailed(_)) => {}
            other => panic!("expected ConnectionFailed, got {:?}", other.map(|_| ())),
        }
    }
}
