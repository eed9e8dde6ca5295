use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{Collection, PagedResource, RemoteData};
use crate::api::{self, ApiClient};
use crate::context::use_app_context;
use crate::error::ApiResult;
use crate::models::{Apartment, ApartmentRequest, Page};

pub struct Apartments;

impl Collection for Apartments {
    type Record = Apartment;
    type Request = ApartmentRequest;
    type Filter = ();

    const NOUN: &'static str = "Apartment";

    async fn list(api: &ApiClient, _filter: &(), page: u32, size: u32) -> ApiResult<Page<Apartment>> {
        api::list_apartments(api, page, size).await
    }

    async fn create(api: &ApiClient, request: &ApartmentRequest) -> ApiResult<()> {
        api::create_apartment(api, request).await
    }

    async fn update(api: &ApiClient, id: i64, request: &ApartmentRequest) -> ApiResult<()> {
        api::update_apartment(api, id, request).await
    }

    async fn delete(api: &ApiClient, id: i64) -> ApiResult<()> {
        api::delete_apartment(api, id).await
    }
}

pub type ApartmentsResource = PagedResource<Apartments>;

pub fn use_apartments() -> ApartmentsResource {
    PagedResource::new()
}

/// Page size used to fill apartment pickers in one request
const OPTIONS_PAGE_SIZE: u32 = 200;

/// Apartments for select inputs
pub fn use_apartment_options() -> ApartmentsResource {
    PagedResource::with_page_size(OPTIONS_PAGE_SIZE)
}

pub fn use_apartment(id: i64) -> RemoteData<Apartment> {
    let api = use_app_context().api.get_value();
    let apartment = RemoteData::new();
    spawn_local(async move {
        apartment.fetch(async move { api::get_apartment(&api, id).await }).await;
    });
    apartment
}
