use actix_web::{post, web};
use tracing::info;

use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult, MessageRes};
use crate::types::user::RUserRegister;

/// Validates a sign-up request and reports success.
///
/// This is a stub: nothing is written to the credential store, so a
/// registered user cannot log in afterwards.
#[post("")]
async fn register(data: web::Json<RUserRegister>) -> ApiResult<MessageRes> {
    if !data.is_complete() {
        return Err(AppError::BadRequest("Missing required fields".to_string()));
    }

    info!("accepted registration for {} (not persisted)", data.email);
    Ok(ApiResponse::Ok(MessageRes::new("User successfully registered")))
}
