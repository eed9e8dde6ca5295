use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{Collection, PagedResource, RemoteData};
use crate::api::{self, ApiClient, ResidentFilter};
use crate::context::use_app_context;
use crate::error::ApiResult;
use crate::models::{Page, Resident, ResidentRequest};

/// `/residents` with free-text search and gender filter
pub struct Residents;

impl Collection for Residents {
    type Record = Resident;
    type Request = ResidentRequest;
    type Filter = ResidentFilter;

    const NOUN: &'static str = "Resident";

    async fn list(api: &ApiClient, filter: &ResidentFilter, page: u32, size: u32) -> ApiResult<Page<Resident>> {
        api::list_residents(api, page, size, filter).await
    }

    async fn create(api: &ApiClient, request: &ResidentRequest) -> ApiResult<()> {
        api::create_resident(api, request).await
    }

    async fn update(api: &ApiClient, id: i64, request: &ResidentRequest) -> ApiResult<()> {
        api::update_resident(api, id, request).await
    }

    async fn delete(api: &ApiClient, id: i64) -> ApiResult<()> {
        api::delete_resident(api, id).await
    }
}

pub type ResidentsResource = PagedResource<Residents>;

pub fn use_residents() -> ResidentsResource {
    PagedResource::new()
}

/// A single resident, fetched once
pub fn use_resident(id: i64) -> RemoteData<Resident> {
    let api = use_app_context().api.get_value();
    let resident = RemoteData::new();
    spawn_local(async move {
        resident.fetch(async move { api::get_resident(&api, id).await }).await;
    });
    resident
}
