use actix_web::{http::header, http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

/// Failures of the password-bearer flow.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    #[error("Incorrect username")]
    UnknownUser,
    #[error("Incorrect password")]
    BadCredential,
    #[error("Invalid authentication credentials")]
    InvalidCredential,
}

#[derive(Debug, Error)]
pub enum AppError {
    // standard web stuffs
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("validation error: {0}")]
    Validation(String),
    #[error("bad request: {0}")]
    BadRequest(String),

    // infra things
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("internal error: {0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    detail: &'a str,
}

impl AppError {
    fn kind(&self) -> &'static str {
        match self {
            Self::Auth(AuthError::UnknownUser) => "UNKNOWN_USER",
            Self::Auth(AuthError::BadCredential) => "BAD_CREDENTIAL",
            Self::Auth(AuthError::InvalidCredential) => "INVALID_CREDENTIAL",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Conflict(_) => "CONFLICT",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::Io(_) => "IO_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Client-facing message. Server-side causes stay in the logs.
    pub fn detail(&self) -> String {
        match self {
            Self::Auth(e) => e.to_string(),
            Self::NotFound(m) | Self::Conflict(m) | Self::Validation(m) | Self::BadRequest(m) => {
                m.clone()
            }
            Self::Io(_) | Self::Internal(_) => "Internal Server Error".to_string(),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Auth(AuthError::InvalidCredential) => StatusCode::UNAUTHORIZED,
            Self::Auth(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Io(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            error!(kind = self.kind(), "request failed: {}", self);
        } else {
            warn!(kind = self.kind(), "request rejected: {}", self);
        }

        let detail = self.detail();
        let mut res = HttpResponse::build(status);
        if status == StatusCode::UNAUTHORIZED {
            res.insert_header((header::WWW_AUTHENTICATE, "Bearer"));
        }
        res.json(ErrorBody { detail: &detail })
    }
}
