use tracing::debug;

use crate::db::UserRepository;
use crate::types::{
    error::{AppError, AuthError},
    token::AccessToken,
    user::User,
};

// Not a hash. Stands in for a real password hasher in the demo.
pub fn fake_hash_password(password: &str) -> String {
    format!("fakehashed{password}")
}

/// Password grant: the issued token is the username itself. Nothing is
/// signed and nothing expires.
pub async fn issue_token<R>(db: &R, username: &str, password: &str) -> Result<AccessToken, AppError>
where
    R: UserRepository + ?Sized,
{
    let user = db
        .find_by_username(username)
        .await?
        .ok_or(AuthError::UnknownUser)?;

    // Plain string equality, not constant time.
    if fake_hash_password(password) != user.hashed_password {
        return Err(AuthError::BadCredential.into());
    }

    debug!("issued bearer token for {}", user.username());
    Ok(AccessToken::bearer(user.user.username))
}

/// Resolves a presented bearer token to its account.
pub async fn decode_token<R>(db: &R, token: &str) -> Result<User, AppError>
where
    R: UserRepository + ?Sized,
{
    db.find_by_username(token)
        .await?
        .map(User::from)
        .ok_or_else(|| AuthError::InvalidCredential.into())
}
