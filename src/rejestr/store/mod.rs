//! # Storage Layer
//!
//! The [`DataStore`] trait abstracts where the user document lives, so the
//! command layer never touches the filesystem directly.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage
//!   - The whole document is one JSON array in a single file
//!   - Every save rewrites the file atomically (temp file + rename)
//!   - A missing file reads as an empty document
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!
//! ## Storage Format
//!
//! ```text
//! data/
//! └── users.json      # [{"user_id": 1, "pesel": "...", "status": "active", ...}, ...]
//! ```
//!
//! There is no locking. Two processes writing the same document race and the
//! last rename wins.

use crate::error::Result;
use crate::model::UserRecord;

pub mod fs;
pub mod memory;

/// Abstract interface for the user document.
///
/// Records are always read and written as a whole, in document order.
pub trait DataStore {
    /// Prepare the backing storage (e.g. create the document directory)
    fn init(&mut self) -> Result<()>;

    /// Load every record. An absent document is an empty one.
    fn load_users(&self) -> Result<Vec<UserRecord>>;

    /// Replace the document with the given records
    fn save_users(&mut self, users: &[UserRecord]) -> Result<()>;
}
