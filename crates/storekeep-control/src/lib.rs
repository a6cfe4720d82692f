//! # storekeep-control: Controller Facades for Storekeep
//!
//! Thin controllers exposing the stores to callers.
//!
//! ## What This Layer Does
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Controller Responsibilities                     │
//! │                                                                     │
//! │  Presentation layer (console, UI, ...)                              │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ProductController / UserController (THIS CRATE)                    │
//! │  ├── delegate each call to the matching store                       │
//! │  ├── convert propagated store failures into false/None + a log      │
//! │  ├── duplicate-checked registration, existence-checked removal      │
//! │  ├── plaintext password authentication → AuthOutcome                │
//! │  └── inventory rendering (the one non-delegating behavior)          │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  storekeep-db stores                                                │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Failure information that reaches this layer is logged and discarded;
//! callers see only the simplified result. That blurring is the documented
//! contract of the system, not an accident.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod product;
pub mod user;

// =============================================================================
// Re-exports
// =============================================================================

pub use product::ProductController;
pub use user::UserController;
