//! # User Controller
//!
//! Facade over [`UserStore`]: authentication, registration and removal with
//! application-level duplicate/existence checks, and the password change.
//!
//! ## Check-Then-Act, Not Atomic
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  register("bob", pw)                                                │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  find_by_username("bob")  ── present ──► false (no insert)          │
//! │       │ absent                                                      │
//! │       ▼                                                             │
//! │  insert("bob", pw)        ──────────────► store result              │
//! │                                                                     │
//! │  The check and the insert run on separate connections with no       │
//! │  transaction around them. Two concurrent registrations of the same  │
//! │  username can both pass the check; the schema has no UNIQUE         │
//! │  constraint to catch the second insert. Accepted, unaddressed gap.  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{debug, warn};

use storekeep_core::AuthOutcome;
use storekeep_db::UserStore;

/// Controller for user operations.
#[derive(Debug, Clone)]
pub struct UserController {
    store: UserStore,
}

impl UserController {
    /// Creates a new UserController.
    pub fn new(store: UserStore) -> Self {
        UserController { store }
    }

    /// Authenticates a username/password pair.
    ///
    /// Plaintext, exact-equality comparison. No hashing, no timing-safe
    /// compare - a documented weakness of this system, not a goal to fix.
    ///
    /// ## Returns
    /// * [`AuthOutcome::UnknownUser`] - no such username
    /// * [`AuthOutcome::WrongPassword`] - stored password differs
    /// * [`AuthOutcome::Authenticated`] - exact match
    pub async fn authenticate(&self, username: &str, password: &str) -> AuthOutcome {
        debug!(username = %username, "Authenticating");

        match self.store.find_by_username(username).await {
            None => AuthOutcome::UnknownUser,
            Some(user) if user.password != password => AuthOutcome::WrongPassword,
            Some(_) => AuthOutcome::Authenticated,
        }
    }

    /// Changes a user's password, unconditionally.
    ///
    /// Calls the store update whether or not the user exists and reports
    /// success to the console either way; the affected-row outcome is only
    /// noted in the log. Known gap, preserved as existing behavior.
    pub async fn change_password(&self, username: &str, new_password: &str) {
        let updated = self.store.update_password(username, new_password).await;
        if !updated {
            warn!(username = %username, "Password update matched no row");
        }
        println!("Password updated.");
    }

    /// Registers a new user.
    ///
    /// Pre-checks for an existing username; if present, returns `false`
    /// without attempting the insert. The check-then-insert sequence is not
    /// atomic against concurrent registration of the same username.
    pub async fn register(&self, username: &str, password: &str) -> bool {
        debug!(username = %username, "Registering");

        if self.store.find_by_username(username).await.is_some() {
            return false;
        }
        self.store.insert(username, password).await
    }

    /// Removes a user.
    ///
    /// Pre-checks existence; if absent, returns `false` without attempting
    /// the delete. Same non-atomic shape as [`UserController::register`].
    pub async fn unregister(&self, username: &str) -> bool {
        debug!(username = %username, "Unregistering");

        if self.store.find_by_username(username).await.is_none() {
            return false;
        }
        self.store.remove(username).await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
