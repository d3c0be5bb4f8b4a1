use actix_multipart::form::{text::Text, MultipartForm};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Bearer,
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenType::Bearer => write!(f, "bearer"),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AccessToken {
    pub access_token: String,
    pub token_type: TokenType,
}

impl AccessToken {
    pub fn bearer(token: impl Into<String>) -> Self {
        Self { access_token: token.into(), token_type: TokenType::Bearer }
    }
}

/// OAuth2 password-grant form. `scope`, `client_id` and `client_secret` are
/// accepted on the wire but play no part in this flow.
#[derive(Serialize, Deserialize, Debug)]
pub struct RTokenRequest {
    pub grant_type: Option<String>,
    pub username: String,
    pub password: String,
}

impl RTokenRequest {
    /// `grant_type` is optional, but when sent it has to be `password`.
    pub fn grant_type_ok(&self) -> bool {
        self.grant_type.as_deref().map_or(true, |g| g == "password")
    }
}

/// The same credentials sent as `multipart/form-data`.
#[derive(MultipartForm)]
pub struct RTokenMultipart {
    pub grant_type: Option<Text<String>>,
    pub username: Text<String>,
    pub password: Text<String>,
}

impl From<RTokenMultipart> for RTokenRequest {
    fn from(form: RTokenMultipart) -> Self {
        Self {
            grant_type: form.grant_type.map(|g| g.0),
            username: form.username.0,
            password: form.password.0,
        }
    }
}
