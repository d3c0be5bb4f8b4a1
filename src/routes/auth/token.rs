use actix_multipart::form::MultipartForm;
use actix_web::{post, web, Either};
use tracing::info;

use crate::db::UserStore;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::token::{AccessToken, RTokenMultipart, RTokenRequest};
use crate::utils::token::issue_token;

/// Credentials come as `application/x-www-form-urlencoded` or
/// `multipart/form-data`.
#[post("/token")]
async fn token(
    db: web::Data<UserStore>,
    form: Either<web::Form<RTokenRequest>, MultipartForm<RTokenMultipart>>,
) -> ApiResult<AccessToken> {
    let form = match form {
        Either::Left(form) => form.into_inner(),
        Either::Right(form) => RTokenRequest::from(form.0),
    };

    if !form.grant_type_ok() {
        return Err(AppError::Validation(
            "grant_type must be 'password'".to_string(),
        ));
    }

    let issued = issue_token(&**db.get_ref(), &form.username, &form.password).await?;

    info!("issued {} token for {}", issued.token_type, form.username);
    Ok(ApiResponse::Ok(issued))
}
