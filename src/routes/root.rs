use actix_web::{get, post, web};
use serde::{Deserialize, Serialize};

use crate::types::response::{ApiResponse, ApiResult, MessageRes};

#[derive(Serialize, Deserialize, Debug)]
pub struct REcho {
    pub cmd: String,
}

#[get("/")]
async fn root_get() -> ApiResult<MessageRes> {
    Ok(ApiResponse::Ok(MessageRes::new("sample get route to root page")))
}

#[post("/")]
async fn root_post() -> ApiResult<MessageRes> {
    Ok(ApiResponse::Ok(MessageRes::new("sample post route to root page")))
}

#[get("/deprecated")]
async fn deprecated() -> ApiResult<MessageRes> {
    Ok(ApiResponse::Deprecated(MessageRes::new("this route is deprecated, dont' use it!")))
}

#[post("/echo")]
async fn echo(body: web::Json<REcho>) -> ApiResult<String> {
    Ok(ApiResponse::Ok(body.into_inner().cmd))
}
