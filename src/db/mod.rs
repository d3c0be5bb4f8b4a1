use async_trait::async_trait;
use std::sync::Arc;

use crate::types::{error::AppError, user::UserInDb};

pub mod memory_service;
pub mod user;

/// Read-only source of account records consulted by the token flow.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_username(&self, username: &str) -> Result<Option<UserInDb>, AppError>;
}

/// Shared handle stored in actix app data.
pub type UserStore = Arc<dyn UserRepository>;
