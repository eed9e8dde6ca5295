use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{Collection, PagedResource, RemoteData};
use crate::api::{self, ApiClient};
use crate::context::use_app_context;
use crate::error::{ApiError, ApiResult};
use crate::format::{month_key, parse_month, today};
use crate::models::{Fee, FeeRequest, Page};

/// `/fees`, filtered by fee type through `/fees/search`
pub struct Fees;

impl Collection for Fees {
    type Record = Fee;
    type Request = FeeRequest;
    type Filter = String;

    const NOUN: &'static str = "Fee";

    async fn list(api: &ApiClient, fee_type: &String, page: u32, size: u32) -> ApiResult<Page<Fee>> {
        let fee_type = fee_type.trim();
        if fee_type.is_empty() {
            api::list_fees(api, page, size).await
        } else {
            api::search_fees(api, fee_type, page, size).await
        }
    }

    async fn create(api: &ApiClient, request: &FeeRequest) -> ApiResult<()> {
        api::create_fee(api, request).await
    }

    async fn update(api: &ApiClient, id: i64, request: &FeeRequest) -> ApiResult<()> {
        api::update_fee(api, id, request).await
    }

    async fn delete(api: &ApiClient, id: i64) -> ApiResult<()> {
        api::delete_fee(api, id).await
    }
}

pub type FeesResource = PagedResource<Fees>;

pub fn use_fees() -> FeesResource {
    PagedResource::new()
}

/// Unpaginated fees of one month
#[derive(Clone, Copy)]
pub struct MonthFeesResource {
    pub data: RemoteData<Vec<Fee>>,
    /// `YYYY-MM`
    pub month: RwSignal<String>,
    api: StoredValue<ApiClient>,
}

impl MonthFeesResource {
    pub fn rows(&self) -> Vec<Fee> {
        self.data.data.get().unwrap_or_default()
    }

    pub fn count(&self) -> usize {
        self.data.data.with(|d| d.as_ref().map_or(0, Vec::len))
    }

    pub fn refetch(&self) {
        let this = *self;
        spawn_local(async move {
            this.fetch().await;
        });
    }

    pub async fn fetch(self) -> bool {
        let month = self.month.get_untracked();
        let api = self.api.get_value();
        self.data
            .fetch(async move {
                let (year, month_no) = parse_month(&month).ok_or_else(|| ApiError::Encode(format!("Invalid month: {}", month)))?;
                api::fees_by_month(&api, year, month_no).await
            })
            .await
    }
}

/// Fees of the selected month, starting with the current one. Reloads when the
/// month changes or `fees` is mutated.
pub fn use_fees_by_month(fees: FeesResource) -> MonthFeesResource {
    let ctx = use_app_context();
    let resource = MonthFeesResource {
        data: RemoteData::new(),
        month: RwSignal::new(month_key(today())),
        api: ctx.api,
    };

    Effect::new(move |_| {
        let month = resource.month.get();
        let revision = fees.revision.get();
        tracing::debug!("Loading fees for {} (revision {})", month, revision);
        resource.refetch();
    });

    resource
}
