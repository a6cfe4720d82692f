//! # Database Migrations
//!
//! Embedded SQL migrations for Storekeep.
//!
//! The stores assume the schema exists; nothing in the store layer creates
//! tables implicitly. Run the migrator once at startup (or at the top of a
//! test) before touching either store.
//!
//! ## Adding New Migrations
//!
//! 1. Create a new file in `migrations/sqlite/` with the next sequence number
//! 2. Name format: `NNN_description.sql` (e.g., `002_add_audit_table.sql`)
//! 3. **NEVER** modify existing migrations - always add new ones

use tracing::info;

use crate::connection::ConnectionProvider;
use crate::error::DbResult;

/// Embedded migrations from the `migrations/sqlite` directory.
///
/// The `sqlx::migrate!()` macro embeds all SQL files from the specified
/// directory into the binary at compile time. No runtime file access needed.
static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("../../migrations/sqlite");

/// Runs all pending database migrations.
///
/// Opens its own connection through the provider, like every other database
/// operation in this crate, and releases it on return.
///
/// ## Safety
/// - Idempotent: safe to run multiple times
/// - Ordered: migrations run in filename order (001, 002, ...)
///
/// ## Example
/// ```rust,ignore
/// migrations::run(&provider).await?;
/// ```
pub async fn run(provider: &ConnectionProvider) -> DbResult<()> {
    info!("Checking for pending migrations");

    let mut conn = provider.connect().await?;
    MIGRATOR.run(&mut conn).await?;

    info!("All migrations applied");
    Ok(())
}
