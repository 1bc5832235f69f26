//! # Rejestr Architecture
//!
//! Rejestr keeps a small register of user records in a single JSON document
//! and validates the Polish identifiers (PESEL, NIP, REGON) they carry. It is
//! a library: there is no CLI or network surface, callers use [`api`].
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - load / add / edit / remove                               │
//! │  - Read-modify-write of the whole document                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DataStore trait                                 │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! [`identifiers`] and [`password`] are pure functions with no dependency on
//! the layers above.
//!
//! ## Record Lifecycle
//!
//! Records enter as `active` through `add` (only when all three identifiers
//! pass), can be patched through `edit`, and are soft-deleted through
//! `remove`. `removed` is final: nothing deletes a record from the document
//! and nothing makes it active again.
//!
//! `user_id` is assigned by the caller and not checked for uniqueness. Edit
//! and remove act on the first record with a matching id.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `UserRecord`, `Status`, patch merging
//! - [`identifiers`]: NIP, PESEL and REGON checksums
//! - [`password`]: Password generation and strength checks
//! - [`config`]: Configuration management
//! - [`logging`]: Optional `tracing` subscriber setup
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod identifiers;
pub mod logging;
pub mod model;
pub mod password;
pub mod store;
