use async_trait::async_trait;

use crate::db::{memory_service::MemoryService, UserRepository};
use crate::types::{
    error::AppError,
    user::{User, UserInDb},
};

#[async_trait]
impl UserRepository for MemoryService {
    async fn find_by_username(&self, username: &str) -> Result<Option<UserInDb>, AppError> {
        Ok(self.users.get(username).cloned())
    }
}

/// The two demo accounts. `johndoe` logs in with `secret`, `alice` with
/// `secret2`.
pub fn fixture_users() -> Vec<UserInDb> {
    vec![
        UserInDb {
            user: User {
                username: "johndoe".to_string(),
                email: Some("johndoe@example.com".to_string()),
                full_name: Some("John Doe".to_string()),
                disabled: false,
            },
            hashed_password: "fakehashedsecret".to_string(),
        },
        UserInDb {
            user: User {
                username: "alice".to_string(),
                email: Some("alice@example.com".to_string()),
                full_name: Some("Alice Wonderson".to_string()),
                disabled: true,
            },
            hashed_password: "fakehashedsecret2".to_string(),
        },
    ]
}
