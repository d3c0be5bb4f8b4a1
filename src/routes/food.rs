use actix_web::{get, web};

use crate::types::error::AppError;
use crate::types::food::{Food, FoodRes};
use crate::types::response::{ApiResponse, ApiResult};

#[get("/{food_name}")]
async fn get_food(path: web::Path<String>) -> ApiResult<FoodRes> {
    let food_name: Food = path.parse().map_err(AppError::Validation)?;
    Ok(ApiResponse::Ok(FoodRes { food_name }))
}
