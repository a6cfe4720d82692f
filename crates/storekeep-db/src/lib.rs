//! # storekeep-db: Database Layer for Storekeep
//!
//! This crate provides database access for Storekeep. It uses SQLite through
//! sqlx, opening one fresh connection per operation.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Storekeep Data Flow                           │
//! │                                                                     │
//! │  Controller call (e.g. ProductController::find)                     │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ┌───────────────────────────────────────────────────────────────┐ │
//! │  │                   storekeep-db (THIS CRATE)                   │ │
//! │  │                                                               │ │
//! │  │   ┌──────────────┐   ┌──────────────┐   ┌──────────────┐     │ │
//! │  │   │   DbConfig   │──►│ Connection   │◄──│    Stores    │     │ │
//! │  │   │ (config.rs)  │   │ Provider     │   │ ProductStore │     │ │
//! │  │   │ DB_URL, ...  │   │ (one conn    │   │ UserStore    │     │ │
//! │  │   └──────────────┘   │  per call)   │   └──────────────┘     │ │
//! │  │                      └──────────────┘                         │ │
//! │  └───────────────────────────────────────────────────────────────┘ │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  SQLite database (tables: products, users)                          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`config`] - Configuration loaded from the environment
//! - [`connection`] - Per-call connection provider
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`store`] - Store implementations (product, user)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use storekeep_db::{ConnectionProvider, DbConfig, ProductStore};
//!
//! let config = DbConfig::from_env()?;
//! let provider = ConnectionProvider::new(config);
//! storekeep_db::migrations::run(&provider).await?;
//!
//! let products = ProductStore::new(provider);
//! let found = products.find_by_name("Widget").await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod connection;
pub mod error;
pub mod migrations;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::{ConfigError, DbConfig};
pub use connection::ConnectionProvider;
pub use error::{DbError, DbResult};

// Store re-exports for convenience
pub use store::product::ProductStore;
pub use store::user::UserStore;
