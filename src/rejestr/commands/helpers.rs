use crate::error::{RejestrError, Result};
use crate::model::UserRecord;

/// Position of the first record carrying `user_id`.
///
/// Ids are not unique; later duplicates are never reached through this lookup.
pub fn find_user(users: &[UserRecord], user_id: i64) -> Result<usize> {
    users
        .iter()
        .position(|user| user.user_id == user_id)
        .ok_or(RejestrError::UserNotFound(user_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::valid_user;

    #[test]
    fn finds_first_duplicate() {
        let users = vec![
            valid_user(1),
            valid_user(2).with_field("copy", 1),
            valid_user(2).with_field("copy", 2),
        ];
        assert_eq!(find_user(&users, 2).unwrap(), 1);
    }

    #[test]
    fn missing_id_is_not_found() {
        let users = vec![valid_user(1)];
        let err = find_user(&users, 9).unwrap_err();
        assert!(matches!(err, RejestrError::UserNotFound(9)));
    }
}
