//! # Domain Types
//!
//! Core domain types used throughout Storekeep.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐   │
//! │  │    Product      │   │      User       │   │   AuthOutcome   │   │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │   │
//! │  │  name (key)     │   │  username (key) │   │  UnknownUser    │   │
//! │  │  quantity       │   │  password       │   │  WrongPassword  │   │
//! │  │  price          │   │                 │   │  Authenticated  │   │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Natural-Key Identity
//! Neither entity carries a surrogate id. `Product::name` and
//! `User::username` are the only lookup keys: product lookups fold case on
//! both sides, user lookups are exact-case.

use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// Product
// =============================================================================

/// A product held in inventory.
///
/// A `Product` is a plain value snapshot. Mutating its fields changes nothing
/// in the database; persistence happens only through explicit store calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    /// Display name; the natural key for all lookups, updates and deletes.
    pub name: String,

    /// Units on hand.
    pub quantity: i64,

    /// Unit price.
    pub price: f64,
}

impl Product {
    /// Creates a new product snapshot.
    pub fn new(name: impl Into<String>, quantity: i64, price: f64) -> Self {
        Product {
            name: name.into(),
            quantity,
            price,
        }
    }
}

/// Textual form consumed by the inventory listing.
impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (quantity: {}, price: {:.2})",
            self.name, self.quantity, self.price
        )
    }
}

// =============================================================================
// User
// =============================================================================

/// A registered user.
///
/// The password is stored and compared in plaintext. That is the documented
/// behavior of this system, not an oversight to patch here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct User {
    /// Login name; the natural key, matched exact-case.
    pub username: String,

    /// Plaintext password.
    pub password: String,
}

impl User {
    /// Creates a new user snapshot.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        User {
            username: username.into(),
            password: password.into(),
        }
    }
}

// =============================================================================
// Authentication Outcome
// =============================================================================

/// Result of an authentication attempt.
///
/// ## Variants
/// - `UnknownUser` - no row with the given username
/// - `WrongPassword` - user exists, stored password differs
/// - `Authenticated` - exact password match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthOutcome {
    UnknownUser,
    WrongPassword,
    Authenticated,
}

impl AuthOutcome {
    /// True only for a successful authentication.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthOutcome::Authenticated)
    }
}

/// Console-facing message for each outcome.
impl fmt::Display for AuthOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            AuthOutcome::UnknownUser => "User does not exist",
            AuthOutcome::WrongPassword => "Incorrect password",
            AuthOutcome::Authenticated => "Authenticated",
        };
        f.write_str(msg)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_display() {
        let product = Product::new("Widget", 3, 2.5);
        assert_eq!(product.to_string(), "Widget (quantity: 3, price: 2.50)");
    }

    #[test]
    fn test_product_is_a_plain_snapshot() {
        let mut product = Product::new("Widget", 3, 2.5);
        product.quantity = 7;
        product.price = 9.99;
        assert_eq!(product, Product::new("Widget", 7, 9.99));
    }

    #[test]
    fn test_auth_outcome_messages() {
        assert_eq!(AuthOutcome::UnknownUser.to_string(), "User does not exist");
        assert_eq!(AuthOutcome::WrongPassword.to_string(), "Incorrect password");
        assert_eq!(AuthOutcome::Authenticated.to_string(), "Authenticated");
        assert!(AuthOutcome::Authenticated.is_authenticated());
        assert!(!AuthOutcome::WrongPassword.is_authenticated());
    }
}
