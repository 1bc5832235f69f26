//! # Command Layer
//!
//! Business logic for each register operation. Commands are generic over
//! [`DataStore`](crate::store::DataStore), take plain Rust values and return
//! [`CmdResult`]. They never print; callers decide what to do with the
//! messages and records in the result.
//!
//! Every mutating command loads the full document, changes it in memory and
//! saves it back. Lookups by `user_id` take the first match in document order.

use crate::model::UserRecord;

pub mod add;
pub mod edit;
pub mod helpers;
pub mod init;
pub mod load;
pub mod remove;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Records created or changed by the command, as stored
    pub affected_users: Vec<UserRecord>,
    /// Records returned by read commands, in document order
    pub listed_users: Vec<UserRecord>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_users(mut self, users: Vec<UserRecord>) -> Self {
        self.affected_users = users;
        self
    }

    pub fn with_listed_users(mut self, users: Vec<UserRecord>) -> Self {
        self.listed_users = users;
        self
    }
}
