//! Apartment Endpoints

use super::{page_query, ApiClient};
use crate::error::ApiResult;
use crate::models::{Apartment, ApartmentRequest, Page};

pub async fn list_apartments(api: &ApiClient, page: u32, size: u32) -> ApiResult<Page<Apartment>> {
    api.get_json("apartments", &page_query(page, size)).await
}

pub async fn get_apartment(api: &ApiClient, id: i64) -> ApiResult<Apartment> {
    api.get_json(&format!("apartments/{}", id), &[]).await
}

pub async fn create_apartment(api: &ApiClient, request: &ApartmentRequest) -> ApiResult<()> {
    api.post("apartments", request).await?;
    Ok(())
}

pub async fn update_apartment(api: &ApiClient, id: i64, request: &ApartmentRequest) -> ApiResult<()> {
    api.put(&format!("apartments/{}", id), request).await?;
    Ok(())
}

pub async fn delete_apartment(api: &ApiClient, id: i64) -> ApiResult<()> {
    api.delete(&format!("apartments/{}", id)).await
}
