//! # storekeep-core: Pure Domain Types for Storekeep
//!
//! This crate contains the domain types shared by every layer of Storekeep.
//! It has zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Storekeep Architecture                         │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐ │
//! │  │                 Presentation (console layer)                  │ │
//! │  │     inventory listing ── auth messages ── status output       │ │
//! │  └─────────────────────────────┬─────────────────────────────────┘ │
//! │                                │                                   │
//! │  ┌─────────────────────────────▼─────────────────────────────────┐ │
//! │  │                    storekeep-control                          │ │
//! │  │     ProductController, UserController (facades)               │ │
//! │  └─────────────────────────────┬─────────────────────────────────┘ │
//! │                                │                                   │
//! │  ┌─────────────────────────────▼─────────────────────────────────┐ │
//! │  │                      storekeep-db                             │ │
//! │  │     ProductStore, UserStore, ConnectionProvider               │ │
//! │  └─────────────────────────────┬─────────────────────────────────┘ │
//! │                                │                                   │
//! │  ┌─────────────────────────────▼─────────────────────────────────┐ │
//! │  │              ★ storekeep-core (THIS CRATE) ★                  │ │
//! │  │     Product, User, AuthOutcome                                │ │
//! │  │     NO I/O • NO DATABASE • NO NETWORK                         │ │
//! │  └───────────────────────────────────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, User, AuthOutcome)
//!
//! ## Design Principles
//!
//! 1. **Plain snapshots**: a `Product` or `User` is a value copied out of the
//!    store; it is never synchronized with the backing row after construction.
//! 2. **No I/O**: database, network, file system access is FORBIDDEN here.
//! 3. **Natural keys**: `name` / `username` is the sole key; there are no
//!    surrogate identifiers.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use storekeep_core::Product` instead of
// `use storekeep_core::types::Product`

pub use types::{AuthOutcome, Product, User};
