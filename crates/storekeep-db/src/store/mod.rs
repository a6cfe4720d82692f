//! # Store Module
//!
//! Store implementations for Storekeep.
//!
//! ## Store Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Store Pattern                                 │
//! │                                                                     │
//! │  A store mediates all reads/writes to one entity's backing table.   │
//! │                                                                     │
//! │  Controller call                                                    │
//! │       │                                                             │
//! │       │  products.find_by_name("Widget")                            │
//! │       ▼                                                             │
//! │  ProductStore                                                       │
//! │  ├── opens its own connection (one per operation)                   │
//! │  ├── executes one parameterized statement                           │
//! │  └── returns a result or failure indicator                          │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  SQLite database                                                    │
//! │                                                                     │
//! │  Two failure policies coexist, faithfully:                          │
//! │  • most operations log the failure and report false/empty           │
//! │  • the product update/lookup operations propagate DbResult and      │
//! │    leave the failure boundary to the controller                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Stores
//!
//! - [`product::ProductStore`] - Product CRUD against `products`
//! - [`user::UserStore`] - User CRUD against `users`

pub mod product;
pub mod user;
