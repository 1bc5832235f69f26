use super::DataStore;
use crate::error::Result;
use crate::model::UserRecord;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    users: Vec<UserRecord>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times the document was written
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn init(&mut self) -> Result<()> {
        Ok(())
    }

    fn load_users(&self) -> Result<Vec<UserRecord>> {
        Ok(self.users.clone())
    }

    fn save_users(&mut self, users: &[UserRecord]) -> Result<()> {
        self.users = users.to_vec();
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub const VALID_PESEL: &str = "44051401359";
    pub const VALID_NIP: &str = "5260001246";
    pub const VALID_REGON: &str = "123456785";

    /// A record whose identifiers all pass validation
    pub fn valid_user(user_id: i64) -> UserRecord {
        UserRecord::new(user_id, VALID_PESEL, VALID_NIP, VALID_REGON)
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        fn push(mut self, user: UserRecord) -> Self {
            self.store.users.push(user);
            self
        }

        pub fn with_users(mut self, count: usize) -> Self {
            for i in 0..count {
                let user = valid_user(i as i64 + 1).with_field("name", format!("User {}", i + 1));
                self = self.push(user);
            }
            self
        }

        pub fn with_active_user(self, user_id: i64, name: &str) -> Self {
            self.push(valid_user(user_id).with_field("name", name))
        }

        pub fn with_removed_user(self, user_id: i64, name: &str) -> Self {
            let mut user = valid_user(user_id).with_field("name", name);
            user.mark_removed();
            self.push(user)
        }
    }
}
