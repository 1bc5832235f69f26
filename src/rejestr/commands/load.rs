use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::{Status, UserRecord};
use crate::store::DataStore;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Removed,
}

impl StatusFilter {
    fn matches(&self, user: &UserRecord) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => user.status == Status::Active,
            StatusFilter::Removed => user.status == Status::Removed,
        }
    }
}

pub fn run<S: DataStore>(store: &S, filter: StatusFilter) -> Result<CmdResult> {
    let users: Vec<_> = store
        .load_users()?
        .into_iter()
        .filter(|user| filter.matches(user))
        .collect();

    Ok(CmdResult::default().with_listed_users(users))
}
