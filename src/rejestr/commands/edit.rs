use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::UserPatch;
use crate::store::DataStore;
use tracing::info;

use super::helpers::find_user;

/// Merges `patch` into the first record with `user_id` and saves the document.
///
/// Patch fields overwrite, everything else is kept. Identifiers are not
/// re-checked here. On any error the document is not written.
pub fn run<S: DataStore>(store: &mut S, user_id: i64, patch: &UserPatch) -> Result<CmdResult> {
    let mut users = store.load_users()?;
    let position = find_user(&users, user_id)?;

    let updated = users[position].patched(patch)?;
    users[position] = updated.clone();
    store.save_users(&users)?;
    info!(user_id, fields = patch.len(), "edited user");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("User updated: {}", user_id)));
    Ok(result.with_affected_users(vec![updated]))
}
