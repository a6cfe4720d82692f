//! # Database Error Types
//!
//! Error types for database operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Error Propagation                              │
//! │                                                                     │
//! │  SQLite Error (sqlx::Error)                                         │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  DbError (this module) ← Adds context and categorization            │
//! │       │                                                             │
//! │       ├── swallowing store ops: logged, collapsed to false/empty    │
//! │       │                                                             │
//! │       └── propagating store ops: DbResult flows to the controller,  │
//! │           which logs and collapses to false/None                    │
//! │                                                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Database operation errors.
///
/// These errors wrap sqlx errors and provide additional context. Absent rows
/// are NOT errors in this system: lookups return `Option` and mutations
/// report affected-row counts, so no `NotFound` variant exists.
#[derive(Debug, Error)]
pub enum DbError {
    /// Opening a connection failed.
    ///
    /// ## When This Occurs
    /// - Malformed database URL
    /// - Database file can't be created or opened
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// A table constraint rejected the statement.
    ///
    /// ## When This Occurs
    /// - NOT NULL violation (the only constraints this schema declares)
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// Query execution failed.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Migration failed.
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// Internal database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

/// Convert sqlx errors to DbError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::Database  → Analyze message for constraint failures
/// Other                  → DbError::Internal
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => {
                let msg = db_err.message();

                // SQLite reports every constraint class with the same
                // "<KIND> constraint failed: ..." message shape.
                if msg.contains("constraint failed") {
                    DbError::ConstraintViolation(msg.to_string())
                } else {
                    DbError::QueryFailed(msg.to_string())
                }
            }

            _ => DbError::Internal(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DbError::MigrationFailed(err.to_string())
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;
