use serde::Serialize;
use crate::types::error::AppError;
use actix_web::{HttpResponse, Responder};

pub enum ApiResponse<T> {
    Ok(T),
    /// 200 with a `Deprecation` header for routes kept only for old clients.
    Deprecated(T),
}

impl<T: Serialize> Responder for ApiResponse<T> {
    type Body = actix_web::body::BoxBody;
    fn respond_to(self, _: &actix_web::HttpRequest) -> HttpResponse {
        match self {
            ApiResponse::Ok(v) => HttpResponse::Ok().json(v),
            ApiResponse::Deprecated(v) => HttpResponse::Ok()
                .insert_header(("Deprecation", "true"))
                .json(v),
        }
    }
}

pub type ApiResult<T> = Result<ApiResponse<T>, AppError>;

/// Plain `{"message": ...}` body shared by the demo routes.
#[derive(Serialize, Debug)]
pub struct MessageRes {
    pub message: String,
}

impl MessageRes {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}
