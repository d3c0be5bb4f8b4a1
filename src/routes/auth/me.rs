use actix_web::{get, web};

use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::User;

/// Reached only through the bearer gate, which has already resolved the
/// principal into the request extensions.
#[get("")]
async fn read_users_me(current_user: web::ReqData<User>) -> ApiResult<User> {
    Ok(ApiResponse::Ok(current_user.into_inner()))
}
