use actix_web::{get, post, put, web};
use serde::Serialize;
use tracing::debug;

use crate::types::item::{FakeItem, Item, ItemWithId, PricedItem, FAKE_ITEMS};
use crate::types::response::{ApiResponse, ApiResult};

#[derive(Serialize)]
pub struct ItemIdRes {
    pub item_id: i64,
}

#[get("")]
async fn list_items() -> ApiResult<&'static [FakeItem]> {
    Ok(ApiResponse::Ok(&FAKE_ITEMS[..]))
}

#[get("/{item_id}")]
async fn get_item(path: web::Path<i64>) -> ApiResult<ItemIdRes> {
    Ok(ApiResponse::Ok(ItemIdRes { item_id: path.into_inner() }))
}

#[post("")]
async fn create_item(data: web::Json<Item>) -> ApiResult<PricedItem> {
    let priced = data.into_inner().with_tax();
    debug!("priced item {} -> {:?}", priced.item.name, priced.price_with_tax);
    Ok(ApiResponse::Ok(priced))
}

#[put("/{item_id}")]
async fn update_item(path: web::Path<i64>, data: web::Json<Item>) -> ApiResult<ItemWithId> {
    Ok(ApiResponse::Ok(ItemWithId {
        item_id: path.into_inner(),
        item: data.into_inner(),
    }))
}
