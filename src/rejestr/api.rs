//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for
//! register operations. It dispatches to `commands::*`, returns structured
//! `Result<CmdResult>` values and does no printing of its own.
//!
//! `RejestrApi<S: DataStore>` is generic over the storage backend:
//! - Production: `RejestrApi<FileStore>`
//! - Testing: `RejestrApi<InMemoryStore>`
//!
//! Every operation shares one error policy: a missing id is
//! [`RejestrError::UserNotFound`](crate::error::RejestrError::UserNotFound),
//! rejected input is `InvalidIdentifier` / `InvalidRecord`, and storage
//! problems are `Io` / `Serialization`. Nothing is swallowed.

use crate::commands;
use crate::config::RejestrConfig;
use crate::error::Result;
use crate::model::{UserPatch, UserRecord};
use crate::store::fs::FileStore;
use crate::store::DataStore;

/// The main API facade for register operations.
pub struct RejestrApi<S: DataStore> {
    store: S,
}

impl RejestrApi<FileStore> {
    /// Builds a file-backed API from configuration. No I/O happens until
    /// [`init`](RejestrApi::init) or the first operation.
    pub fn from_config(config: &RejestrConfig) -> Self {
        Self::new(FileStore::from_config(config))
    }
}

impl<S: DataStore> RejestrApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn init(&mut self) -> Result<commands::CmdResult> {
        commands::init::run(&mut self.store)
    }

    /// Every record, in document order.
    pub fn load_users(&self) -> Result<commands::CmdResult> {
        commands::load::run(&self.store, StatusFilter::All)
    }

    pub fn list_users(&self, filter: StatusFilter) -> Result<commands::CmdResult> {
        commands::load::run(&self.store, filter)
    }

    pub fn add_user(&mut self, user: UserRecord) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, user)
    }

    pub fn edit_user(&mut self, user_id: i64, patch: &UserPatch) -> Result<commands::CmdResult> {
        commands::edit::run(&mut self.store, user_id, patch)
    }

    pub fn remove_user(&mut self, user_id: i64) -> Result<commands::CmdResult> {
        commands::remove::run(&mut self.store, user_id)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use commands::load::StatusFilter;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
