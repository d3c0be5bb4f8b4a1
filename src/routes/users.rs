use actix_web::{get, web};
use serde::Serialize;

use crate::types::response::{ApiResponse, ApiResult, MessageRes};

#[derive(Serialize)]
pub struct UserIdRes {
    pub user_id: String,
}

// Registered before `/{user_id}` so that `me` is not captured as an id.
#[get("/me")]
async fn current_user_placeholder() -> ApiResult<MessageRes> {
    Ok(ApiResponse::Ok(MessageRes::new("getting current user")))
}

#[get("/{user_id}")]
async fn get_user(path: web::Path<String>) -> ApiResult<UserIdRes> {
    Ok(ApiResponse::Ok(UserIdRes { user_id: path.into_inner() }))
}
