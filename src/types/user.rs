use serde::{Deserialize, Serialize};

/// Public view of an account, safe to return to clients.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct User {
    pub username: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub disabled: bool,
}

/// Stored account record. Never serialized.
#[derive(Debug, Clone, PartialEq)]
pub struct UserInDb {
    pub user: User,
    pub hashed_password: String,
}

impl UserInDb {
    pub fn username(&self) -> &str {
        &self.user.username
    }
}

impl From<UserInDb> for User {
    fn from(record: UserInDb) -> Self {
        record.user
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RUserRegister {
    pub name: String,
    pub password: String,
    pub email: String,
}

impl RUserRegister {
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.password.is_empty() && !self.email.is_empty()
    }
}
