use actix_web::{get, web};
use serde::{Deserialize, Serialize};

use crate::types::error::AppError;
use crate::types::item::{find_fake_item, page, FakeItem, FAKE_ITEMS};
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::params::deserialize_flag;

fn default_limit() -> i64 {
    FAKE_ITEMS.len() as i64
}

/// Negative values are allowed and count from the end of the list.
#[derive(Deserialize, Debug)]
pub struct PageQuery {
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

#[derive(Deserialize, Debug)]
pub struct LookupQuery {
    pub q: Option<String>,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub update: bool,
}

/// One of three shapes depending on the query.
#[derive(Serialize, Debug)]
#[serde(untagged)]
pub enum FakeItemRes {
    Query { q: String },
    Updated { item_id: i64, desc: &'static str },
    Found(FakeItem),
}

#[get("")]
async fn list_fake_items(query: web::Query<PageQuery>) -> ApiResult<&'static [FakeItem]> {
    Ok(ApiResponse::Ok(page(query.skip, query.limit)))
}

#[get("/{item_id}")]
async fn get_fake_item(path: web::Path<i64>, query: web::Query<LookupQuery>) -> ApiResult<FakeItemRes> {
    let item_id = path.into_inner();
    let LookupQuery { q, update } = query.into_inner();

    if let Some(q) = q.filter(|q| !q.is_empty()) {
        return Ok(ApiResponse::Ok(FakeItemRes::Query { q }));
    }
    if update {
        return Ok(ApiResponse::Ok(FakeItemRes::Updated { item_id, desc: "lorem ipsum" }));
    }

    find_fake_item(item_id)
        .map(|item| ApiResponse::Ok(FakeItemRes::Found(item)))
        .ok_or_else(|| AppError::NotFound("item not found".to_string()))
}
