use std::collections::HashMap;
use tracing::info;

use crate::types::user::UserInDb;

/// In-memory credential store. Filled once at construction and never
/// written afterwards, so it can be shared across workers without locking.
#[derive(Clone, Debug, Default)]
pub struct MemoryService {
    pub(crate) users: HashMap<String, UserInDb>,
}

impl MemoryService {
    pub fn new(users: impl IntoIterator<Item = UserInDb>) -> Self {
        let users: HashMap<_, _> = users
            .into_iter()
            .map(|u| (u.username().to_string(), u))
            .collect();
        info!("Loaded {} users into the credential store.", users.len());
        Self { users }
    }

    pub fn with_fixture_users() -> Self {
        Self::new(super::user::fixture_users())
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
