//! Fee Endpoints

use super::{page_query, ApiClient};
use crate::error::ApiResult;
use crate::models::{Fee, FeeRequest, Page};

pub async fn list_fees(api: &ApiClient, page: u32, size: u32) -> ApiResult<Page<Fee>> {
    api.get_json("fees", &page_query(page, size)).await
}

/// Server-side search on fee type
pub async fn search_fees(api: &ApiClient, fee_type: &str, page: u32, size: u32) -> ApiResult<Page<Fee>> {
    let mut query = vec![("type", fee_type.to_string())];
    query.extend(page_query(page, size));
    api.get_json("fees/search", &query).await
}

/// All fees of one month, unpaginated
pub async fn fees_by_month(api: &ApiClient, year: i32, month: u32) -> ApiResult<Vec<Fee>> {
    api.get_json("fees/month", &[("year", year.to_string()), ("month", month.to_string())])
        .await
}

pub async fn create_fee(api: &ApiClient, request: &FeeRequest) -> ApiResult<()> {
    api.post("fees", request).await?;
    Ok(())
}

pub async fn update_fee(api: &ApiClient, id: i64, request: &FeeRequest) -> ApiResult<()> {
    api.put(&format!("fees/{}", id), request).await?;
    Ok(())
}

pub async fn delete_fee(api: &ApiClient, id: i64) -> ApiResult<()> {
    api.delete(&format!("fees/{}", id)).await
}
