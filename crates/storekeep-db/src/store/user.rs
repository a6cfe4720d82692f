//! # User Store
//!
//! Database operations for users.
//!
//! Every operation here follows the swallow-and-log policy: a driver failure
//! is logged and collapses into the same false/absent result a legitimate
//! "no rows matched" produces. Callers cannot tell "not found" apart from
//! "database unreachable" - inherited behavior, preserved.

use tracing::{debug, error};

use crate::connection::ConnectionProvider;
use crate::error::DbResult;
use storekeep_core::User;

/// Store for user database operations.
#[derive(Debug, Clone)]
pub struct UserStore {
    provider: ConnectionProvider,
}

impl UserStore {
    /// Creates a new UserStore.
    pub fn new(provider: ConnectionProvider) -> Self {
        UserStore { provider }
    }

    /// Inserts a new user row.
    ///
    /// Uniqueness of the username is NOT checked here; that pre-check lives
    /// in the controller's registration flow.
    pub async fn insert(&self, username: &str, password: &str) -> bool {
        debug!(username = %username, "Inserting user");

        match self.try_insert(username, password).await {
            Ok(rows) => rows > 0,
            Err(e) => {
                error!(username = %username, error = %e, "Failed to insert user");
                false
            }
        }
    }

    async fn try_insert(&self, username: &str, password: &str) -> DbResult<u64> {
        let mut conn = self.provider.connect().await?;
        let result = sqlx::query("INSERT INTO users (username, password) VALUES (?1, ?2)")
            .bind(username)
            .bind(password)
            .execute(&mut conn)
            .await?;
        Ok(result.rows_affected())
    }

    /// Deletes a user by username.
    pub async fn remove(&self, username: &str) -> bool {
        debug!(username = %username, "Deleting user");

        match self.try_remove(username).await {
            Ok(rows) => rows > 0,
            Err(e) => {
                error!(username = %username, error = %e, "Failed to delete user");
                false
            }
        }
    }

    async fn try_remove(&self, username: &str) -> DbResult<u64> {
        let mut conn = self.provider.connect().await?;
        let result = sqlx::query("DELETE FROM users WHERE username = ?1")
            .bind(username)
            .execute(&mut conn)
            .await?;
        Ok(result.rows_affected())
    }

    /// Replaces the stored password for a username.
    ///
    /// ## Returns
    /// * `true` - at least one row was updated
    /// * `false` - no such username, or any failure (logged)
    pub async fn update_password(&self, username: &str, new_password: &str) -> bool {
        debug!(username = %username, "Updating password");

        match self.try_update_password(username, new_password).await {
            Ok(rows) => rows > 0,
            Err(e) => {
                error!(username = %username, error = %e, "Failed to update password");
                false
            }
        }
    }

    async fn try_update_password(&self, username: &str, new_password: &str) -> DbResult<u64> {
        let mut conn = self.provider.connect().await?;
        let result = sqlx::query("UPDATE users SET password = ?1 WHERE username = ?2")
            .bind(new_password)
            .bind(username)
            .execute(&mut conn)
            .await?;
        Ok(result.rows_affected())
    }

    /// Looks up a user by exact username.
    ///
    /// Case-sensitive, unlike the product lookup: inserting "Alice" and
    /// looking up "alice" returns `None`. Also `None` on any failure
    /// (logged), indistinguishable from not-found.
    pub async fn find_by_username(&self, username: &str) -> Option<User> {
        debug!(username = %username, "Looking up user");

        match self.try_find_by_username(username).await {
            Ok(user) => user,
            Err(e) => {
                error!(username = %username, error = %e, "Failed to look up user");
                None
            }
        }
    }

    async fn try_find_by_username(&self, username: &str) -> DbResult<Option<User>> {
        let mut conn = self.provider.connect().await?;
        let user = sqlx::query_as::<_, User>(
            "SELECT username, password FROM users WHERE username = ?1",
        )
        .bind(username)
        .fetch_optional(&mut conn)
        .await?;
        Ok(user)
    }

    /// Deletes every row in the users table.
    ///
    /// Same affected-rows quirk as the product store: clearing an already
    /// empty table reports `false`.
    pub async fn clear(&self) -> bool {
        debug!("Clearing users table");

        match self.try_clear().await {
            Ok(rows) => rows > 0,
            Err(e) => {
                error!(error = %e, "Failed to clear users table");
                false
            }
        }
    }

    async fn try_clear(&self) -> DbResult<u64> {
        let mut conn = self.provider.connect().await?;
        let result = sqlx::query("DELETE FROM users").execute(&mut conn).await?;
        Ok(result.rows_affected())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DbConfig;
    use crate::migrations;
    use tempfile::TempDir;

    async fn test_store() -> (TempDir, UserStore) {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}", dir.path().join("test.db").display());
        let provider = ConnectionProvider::new(DbConfig::new(url, "tester", "secret"));
        migrations::run(&provider).await.unwrap();
        (dir, UserStore::new(provider))
    }

    #[tokio::test]
    async fn test_insert_then_find() {
        let (_dir, store) = test_store().await;

        assert!(store.insert("alice", "pw1").await);

        let user = store.find_by_username("alice").await.unwrap();
        assert_eq!(user, User::new("alice", "pw1"));
    }

    #[tokio::test]
    async fn test_lookup_is_exact_case() {
        let (_dir, store) = test_store().await;
        store.insert("Alice", "pw1").await;

        assert!(store.find_by_username("alice").await.is_none());
        assert!(store.find_by_username("ALICE").await.is_none());
        assert!(store.find_by_username("Alice").await.is_some());
    }

    #[tokio::test]
    async fn test_remove_then_find_absent() {
        let (_dir, store) = test_store().await;
        store.insert("alice", "pw1").await;

        assert!(store.remove("alice").await);
        assert!(store.find_by_username("alice").await.is_none());
        assert!(!store.remove("alice").await);
    }

    #[tokio::test]
    async fn test_update_password() {
        let (_dir, store) = test_store().await;
        store.insert("alice", "pw1").await;

        assert!(store.update_password("alice", "pw2").await);
        let user = store.find_by_username("alice").await.unwrap();
        assert_eq!(user.password, "pw2");
    }

    #[tokio::test]
    async fn test_update_password_missing_user_is_false() {
        let (_dir, store) = test_store().await;
        assert!(!store.update_password("nobody", "pw2").await);
    }

    #[tokio::test]
    async fn test_clear_quirk() {
        let (_dir, store) = test_store().await;

        assert!(!store.clear().await);

        store.insert("alice", "pw1").await;
        store.insert("bob", "pw2").await;
        assert!(store.clear().await);
        assert!(store.find_by_username("alice").await.is_none());
    }

    #[tokio::test]
    async fn test_failures_collapse_to_absent() {
        // No migrations: statements fail, every operation swallows.
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}", dir.path().join("bare.db").display());
        let provider = ConnectionProvider::new(DbConfig::new(url, "tester", "secret"));
        let store = UserStore::new(provider);

        assert!(!store.insert("alice", "pw1").await);
        assert!(!store.remove("alice").await);
        assert!(!store.update_password("alice", "pw2").await);
        assert!(store.find_by_username("alice").await.is_none());
        assert!(!store.clear().await);
    }
}
