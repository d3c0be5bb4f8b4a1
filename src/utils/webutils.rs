use actix_web::{dev::ServiceRequest, web, HttpMessage, HttpRequest};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::fmt::Display;
use tracing::{debug, error};

use crate::db::UserStore;
use crate::types::error::AppError;
use crate::utils::token::decode_token;

/// Bearer gate for protected scopes. On success the resolved [`User`] is
/// stored in the request extensions, where handlers pick it up with
/// `web::ReqData<User>`.
///
/// [`User`]: crate::types::user::User
pub async fn validate_token(
    req: ServiceRequest,
    credentials: BearerAuth,
) -> Result<ServiceRequest, (actix_web::Error, ServiceRequest)> {
    let Some(db) = req.app_data::<web::Data<UserStore>>().cloned() else {
        error!("user store missing from app data");
        return Err((AppError::Internal("user store not configured".into()).into(), req));
    };

    match decode_token(&**db.get_ref(), credentials.token()).await {
        Ok(user) => {
            debug!("authenticated {} for {}", user.username, req.path());
            req.extensions_mut().insert(user);
            Ok(req)
        }
        Err(e) => Err((e.into(), req)),
    }
}

/// Shared error handler for the JSON, form, path, query and multipart
/// extractors. Malformed input is a 422, the way request validation reports it.
pub fn validation_error<E: Display>(err: E, req: &HttpRequest) -> actix_web::Error {
    debug!("rejected input on {}: {}", req.path(), err);
    AppError::Validation(err.to_string()).into()
}
