//! Resident Endpoints

use super::{page_query, ApiClient};
use crate::error::ApiResult;
use crate::models::{Page, Resident, ResidentRequest};

/// Filters accepted by the resident listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResidentFilter {
    pub search: String,
    pub gender: String,
}

pub async fn list_residents(api: &ApiClient, page: u32, size: u32, filter: &ResidentFilter) -> ApiResult<Page<Resident>> {
    let mut query = page_query(page, size);
    query.push(("search", filter.search.trim().to_string()));
    query.push(("gender", filter.gender.clone()));
    api.get_json("residents", &query).await
}

pub async fn get_resident(api: &ApiClient, id: i64) -> ApiResult<Resident> {
    api.get_json(&format!("residents/{}", id), &[]).await
}

pub async fn create_resident(api: &ApiClient, request: &ResidentRequest) -> ApiResult<()> {
    api.post("residents", request).await?;
    Ok(())
}

pub async fn update_resident(api: &ApiClient, id: i64, request: &ResidentRequest) -> ApiResult<()> {
    api.put(&format!("residents/{}", id), request).await?;
    Ok(())
}

pub async fn delete_resident(api: &ApiClient, id: i64) -> ApiResult<()> {
    api.delete(&format!("residents/{}", id)).await
}
