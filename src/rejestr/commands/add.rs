use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::identifiers::check_identifiers;
use crate::model::UserRecord;
use crate::store::DataStore;
use tracing::{info, warn};

/// Appends a record after checking its PESEL, NIP and REGON, in that order.
///
/// A record with a bad identifier is rejected with
/// [`RejestrError::InvalidIdentifier`](crate::error::RejestrError::InvalidIdentifier)
/// and the document is left untouched. Duplicate ids are accepted.
///
/// Reserved keys found in `extra` are first moved onto the typed fields, so
/// they are the values that get checked and stored.
pub fn run<S: DataStore>(store: &mut S, user: UserRecord) -> Result<CmdResult> {
    let user = user.normalized()?;
    if let Err(e) = check_identifiers(&user.pesel, &user.nip, &user.regon) {
        warn!(user_id = user.user_id, error = %e, "rejected user");
        return Err(e.into());
    }

    let mut users = store.load_users()?;
    let duplicate = users.iter().any(|existing| existing.user_id == user.user_id);
    users.push(user.clone());
    store.save_users(&users)?;
    info!(user_id = user.user_id, "added user");

    let mut result = CmdResult::default();
    if duplicate {
        warn!(user_id = user.user_id, "user id already present");
        result.add_message(CmdMessage::warning(format!(
            "Another user already has id {}",
            user.user_id
        )));
    }
    result.add_message(CmdMessage::success(format!(
        "User added: {}",
        user.user_id
    )));
    Ok(result.with_affected_users(vec![user]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::error::RejestrError;
    use crate::identifiers::IdentifierError;
    use crate::store::memory::fixtures::{valid_user, StoreFixture};
    use crate::store::memory::InMemoryStore;
    use serde_json::json;

    #[test]
    fn adds_valid_user() {
        let mut store = InMemoryStore::new();
        let user = valid_user(1).with_field("name", "Jan");
        let result = run(&mut store, user.clone()).unwrap();

        let users = store.load_users().unwrap();
        assert_eq!(users, vec![user.clone()]);
        assert_eq!(result.affected_users, vec![user]);
    }

    #[test]
    fn appends_to_existing_document() {
        let mut fixture = StoreFixture::new().with_users(2);
        run(&mut fixture.store, valid_user(3)).unwrap();

        let users = fixture.store.load_users().unwrap();
        assert_eq!(users.len(), 3);
        assert_eq!(users[2], valid_user(3));
    }

    #[test]
    fn rejects_invalid_pesel() {
        let mut fixture = StoreFixture::new().with_users(1);
        let mut user = valid_user(2);
        user.pesel = "44051401358".to_string();

        let err = run(&mut fixture.store, user).unwrap_err();
        assert!(matches!(
            err,
            RejestrError::InvalidIdentifier(IdentifierError::Pesel(_))
        ));
        assert_eq!(fixture.store.load_users().unwrap().len(), 1);
        assert_eq!(fixture.store.save_count(), 0);
    }

    #[test]
    fn rejects_invalid_nip() {
        let mut store = InMemoryStore::new();
        let mut user = valid_user(1);
        user.nip = "1234567890".to_string();

        let err = run(&mut store, user).unwrap_err();
        assert!(matches!(
            err,
            RejestrError::InvalidIdentifier(IdentifierError::Nip(_))
        ));
        assert!(store.load_users().unwrap().is_empty());
    }

    #[test]
    fn rejects_invalid_regon() {
        let mut store = InMemoryStore::new();
        let mut user = valid_user(1);
        user.regon = "12345678512340".to_string();

        let err = run(&mut store, user).unwrap_err();
        assert!(matches!(
            err,
            RejestrError::InvalidIdentifier(IdentifierError::Regon(_))
        ));
    }

    #[test]
    fn stores_reserved_extra_keys_once() {
        let mut store = InMemoryStore::new();
        let mut user = valid_user(1);
        user.extra.insert("status".to_string(), json!("removed"));

        let result = run(&mut store, user).unwrap();
        let stored = &result.affected_users[0];
        assert!(stored.is_removed());
        assert!(stored.extra.is_empty());
        assert_eq!(store.load_users().unwrap()[0], *stored);
    }

    #[test]
    fn checks_identifiers_taken_from_extra() {
        let mut store = InMemoryStore::new();
        let mut user = valid_user(1);
        user.extra.insert("pesel".to_string(), json!("44051401358"));

        let err = run(&mut store, user).unwrap_err();
        assert!(matches!(
            err,
            RejestrError::InvalidIdentifier(IdentifierError::Pesel(_))
        ));
    }

    #[test]
    fn rejects_unfit_reserved_value() {
        let mut store = InMemoryStore::new();
        let mut user = valid_user(1);
        user.extra.insert("user_id".to_string(), json!("one"));

        let err = run(&mut store, user).unwrap_err();
        assert!(matches!(err, RejestrError::InvalidRecord(_)));
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn accepts_duplicate_ids() {
        let mut store = InMemoryStore::new();
        run(&mut store, valid_user(1)).unwrap();
        let result = run(&mut store, valid_user(1).with_field("second", true)).unwrap();

        assert_eq!(store.load_users().unwrap().len(), 2);
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
    }
}
