use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;
use tracing::info;

use super::helpers::find_user;

/// Soft-deletes the first record with `user_id`.
///
/// The record stays in the document with status `removed`. Removing an
/// already removed user succeeds and changes nothing but the save.
pub fn run<S: DataStore>(store: &mut S, user_id: i64) -> Result<CmdResult> {
    let mut users = store.load_users()?;
    let position = find_user(&users, user_id)?;

    let already_removed = users[position].is_removed();
    users[position].mark_removed();
    store.save_users(&users)?;

    let mut result = CmdResult::default();
    if already_removed {
        result.add_message(CmdMessage::info(format!(
            "User already removed: {}",
            user_id
        )));
    } else {
        info!(user_id, "removed user");
        result.add_message(CmdMessage::success(format!("User removed: {}", user_id)));
    }
    Ok(result.with_affected_users(vec![users[position].clone()]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::model::Status;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn marks_user_as_removed() {
        let mut fixture = StoreFixture::new().with_users(2);
        let result = run(&mut fixture.store, 2).unwrap();

        let users = fixture.store.load_users().unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[1].status, Status::Removed);
        assert!(users[1].removed_at.is_some());
        assert_eq!(users[0].status, Status::Active);
        assert_eq!(result.affected_users[0].user_id, 2);
    }

    #[test]
    fn removal_is_idempotent() {
        let mut fixture = StoreFixture::new().with_users(1);
        run(&mut fixture.store, 1).unwrap();
        let first = fixture.store.load_users().unwrap();

        let result = run(&mut fixture.store, 1).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Info);
        assert_eq!(fixture.store.load_users().unwrap(), first);
    }

    #[test]
    fn missing_user_is_not_found() {
        let mut fixture = StoreFixture::new().with_users(1);
        let err = run(&mut fixture.store, 7).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(fixture.store.save_count(), 0);
    }

    #[test]
    fn removes_first_duplicate_only() {
        let mut fixture = StoreFixture::new()
            .with_active_user(3, "a")
            .with_active_user(3, "b");
        run(&mut fixture.store, 3).unwrap();

        let users = fixture.store.load_users().unwrap();
        assert!(users[0].is_removed());
        assert!(!users[1].is_removed());
    }
}
