use actix_multipart::form::MultipartForm;
use actix_web::{get, http::header::ContentType, post, web, HttpResponse};

use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::upload::{RUpload, UploadRes};
use crate::utils::upload::UploadStore;

const UPLOAD_FORM: &str = include_str!("../../../templates/basic-upload.html");

#[get("/upload")]
async fn upload_form() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(UPLOAD_FORM)
}

/// Any body that is not a well-formed multipart form with `in_file`,
/// including a wrong content type, is a 422.
#[post("/upload")]
async fn upload(
    store: web::Data<UploadStore>,
    form: Result<MultipartForm<RUpload>, actix_web::Error>,
) -> ApiResult<UploadRes> {
    let RUpload { in_file } = form.map_err(malformed_upload)?.0;
    let filename = in_file
        .file_name
        .ok_or_else(|| AppError::Validation("in_file: missing filename".to_string()))?;

    let file = store.store(&filename, &in_file.data).await?;
    Ok(ApiResponse::Ok(UploadRes { file }))
}

fn malformed_upload(err: actix_web::Error) -> AppError {
    let detail = err
        .as_error::<AppError>()
        .map(AppError::detail)
        .unwrap_or_else(|| err.to_string());
    AppError::Validation(detail)
}
