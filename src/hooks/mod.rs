//! Data Hooks
//!
//! Per-resource reactive state over the REST client: the current data,
//! loading/error flags, and mutation functions that refetch on success.

mod apartments;
mod auth;
mod fees;
mod residents;

use std::fmt::Debug;
use std::future::Future;
use std::marker::PhantomData;

use futures::future::{FutureExt, LocalBoxFuture};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::context::use_app_context;
use crate::error::ApiResult;
use crate::models::{Entity, Page};
use crate::table::{delete_all, BulkDeleteReport, PaginationMode, RequestGate};

pub use apartments::{use_apartment, use_apartment_options, use_apartments};
pub use auth::use_auth;
pub use fees::{use_fees, use_fees_by_month};
pub use residents::{use_resident, use_residents};

/// Loading/error/data triple for one remote value
pub struct RemoteData<T: Send + Sync + 'static> {
    pub data: RwSignal<Option<T>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    gate: RwSignal<RequestGate>,
}

impl<T: Send + Sync + 'static> Clone for RemoteData<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for RemoteData<T> {}

impl<T: Send + Sync + 'static> RemoteData<T> {
    pub fn new() -> Self {
        Self {
            data: RwSignal::new(None),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            gate: RwSignal::new(RequestGate::default()),
        }
    }

    /// Await `request` and store its outcome, unless a later fetch was started
    /// in the meantime. On failure the previous data stays in place.
    /// Returns whether the outcome was applied.
    pub async fn fetch(self, request: impl Future<Output = ApiResult<T>>) -> bool {
        let mut generation = 0;
        self.gate.update(|g| generation = g.issue());
        self.loading.set(true);

        let result = request.await;

        let current = self
            .gate
            .try_get_untracked()
            .is_some_and(|g| g.is_current(generation));
        if !current {
            tracing::debug!("Dropping stale response (generation {})", generation);
            return false;
        }

        self.loading.set(false);
        match result {
            Ok(value) => {
                self.data.set(Some(value));
                self.error.set(None);
            }
            Err(e) => {
                tracing::error!("Fetch failed: {}", e);
                self.error.set(Some(e.to_string()));
            }
        }
        true
    }
}

/// Pending flag around one kind of mutation
#[derive(Clone, Copy)]
pub struct Mutation {
    pending: RwSignal<bool>,
}

impl Mutation {
    pub fn new() -> Self {
        Self {
            pending: RwSignal::new(false),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }

    /// Mark pending while `work` runs
    pub async fn track<T>(self, work: impl Future<Output = T>) -> T {
        self.pending.set(true);
        let out = work.await;
        self.pending.set(false);
        out
    }

    /// Like `track`, recording the outcome in the activity log
    pub async fn run<T>(self, action: String, work: impl Future<Output = ApiResult<T>>) -> ApiResult<T> {
        let result = self.track(work).await;
        match &result {
            Ok(_) => tracing::info!(target: "activity", "{}", action),
            Err(e) => tracing::error!(status = ?e.status(), "{} failed: {}", action, e),
        }
        result
    }
}

type Handler<T> = Box<dyn Fn(T) -> LocalBoxFuture<'static, Result<(), String>>>;

/// Copyable async handler for dialogs: the dialog awaits the outcome to decide
/// whether to close
pub struct AsyncCallback<T: 'static>(StoredValue<Handler<T>, LocalStorage>);

impl<T: 'static> Clone for AsyncCallback<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for AsyncCallback<T> {}

impl<T: 'static> AsyncCallback<T> {
    pub fn new<F, Fut>(handler: F) -> Self
    where
        F: Fn(T) -> Fut + 'static,
        Fut: Future<Output = Result<(), String>> + 'static,
    {
        let boxed: Handler<T> = Box::new(move |value| handler(value).boxed_local());
        Self(StoredValue::new_local(boxed))
    }

    pub async fn call(self, value: T) -> Result<(), String> {
        match self.0.try_with_value(|handler| handler(value)) {
            Some(fut) => fut.await,
            None => Err("The form was closed before it could be submitted".to_string()),
        }
    }
}

/// A server-paged REST collection with create/update/delete
#[allow(async_fn_in_trait)]
pub trait Collection: 'static {
    type Record: Entity<Id = i64>;
    type Request: 'static;
    type Filter: Clone + Default + PartialEq + Debug + Send + Sync + 'static;

    /// Singular display name, used in activity entries
    const NOUN: &'static str;

    async fn list(api: &ApiClient, filter: &Self::Filter, page: u32, size: u32) -> ApiResult<Page<Self::Record>>;
    async fn create(api: &ApiClient, request: &Self::Request) -> ApiResult<()>;
    async fn update(api: &ApiClient, id: i64, request: &Self::Request) -> ApiResult<()>;
    async fn delete(api: &ApiClient, id: i64) -> ApiResult<()>;
}

/// Filter plus 0-based page request
#[derive(Debug, Clone, PartialEq)]
pub struct PageQuery<F> {
    pub filter: F,
    pub page: u32,
    pub size: u32,
}

pub struct PagedResource<C: Collection> {
    pub data: RemoteData<Page<C::Record>>,
    pub query: RwSignal<PageQuery<C::Filter>>,
    pub creating: Mutation,
    pub updating: Mutation,
    pub deleting: Mutation,
    /// Bumped after every successful mutation
    pub revision: RwSignal<u32>,
    api: StoredValue<ApiClient>,
    _collection: PhantomData<fn() -> C>,
}

impl<C: Collection> Clone for PagedResource<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: Collection> Copy for PagedResource<C> {}

impl<C: Collection> PagedResource<C> {
    /// Create the resource and fetch the first page
    pub fn new() -> Self {
        let size = use_app_context().config.with_value(|c| c.default_page_size);
        Self::with_page_size(size)
    }

    pub fn with_page_size(size: u32) -> Self {
        let ctx = use_app_context();
        let resource = Self {
            data: RemoteData::new(),
            query: RwSignal::new(PageQuery {
                filter: C::Filter::default(),
                page: 0,
                size,
            }),
            creating: Mutation::new(),
            updating: Mutation::new(),
            deleting: Mutation::new(),
            revision: RwSignal::new(0),
            api: ctx.api,
            _collection: PhantomData,
        };
        resource.refetch();
        resource
    }

    /// Rows of the current page
    pub fn rows(&self) -> Vec<C::Record> {
        self.data
            .data
            .with(|page| page.as_ref().map(|p| p.content.clone()).unwrap_or_default())
    }

    pub fn is_loading(&self) -> bool {
        self.data.loading.get()
    }

    pub fn error(&self) -> Option<String> {
        self.data.error.get()
    }

    /// Page controls for the last response, or an empty first page before one arrives
    pub fn mode(&self) -> PaginationMode {
        self.data.data.with(|page| match page {
            Some(page) => PaginationMode::from_page(page),
            None => self.query.with(|q| PaginationMode::from_page(&Page::<C::Record>::empty(q.size))),
        })
    }

    /// Fetch `page` (0-based) of `size`, keeping the filter
    pub fn load(&self, page: u32, size: u32) {
        self.query.update(|q| {
            q.page = page;
            q.size = size;
        });
        self.refetch();
    }

    /// Replace the filter and fetch its first page
    pub async fn apply_filter(self, filter: C::Filter) -> bool {
        self.query.update(|q| {
            q.filter = filter;
            q.page = 0;
        });
        self.fetch().await
    }

    pub fn refetch(&self) {
        let this = *self;
        spawn_local(async move {
            this.fetch().await;
        });
    }

    pub async fn fetch(self) -> bool {
        let query = self.query.get_untracked();
        let api = self.api.get_value();
        self.data
            .fetch(async move { C::list(&api, &query.filter, query.page, query.size).await })
            .await
    }

    pub async fn create(self, request: C::Request) -> ApiResult<()> {
        let api = self.api.get_value();
        let action = format!("{} created", C::NOUN);
        self.creating
            .run(action, async move { C::create(&api, &request).await })
            .await?;
        self.after_mutation().await;
        Ok(())
    }

    pub async fn update(self, id: i64, request: C::Request) -> ApiResult<()> {
        let api = self.api.get_value();
        let action = format!("{} #{} updated", C::NOUN, id);
        self.updating
            .run(action, async move { C::update(&api, id, &request).await })
            .await?;
        self.after_mutation().await;
        Ok(())
    }

    pub async fn delete(self, id: i64) -> ApiResult<()> {
        let api = self.api.get_value();
        let action = format!("{} #{} deleted", C::NOUN, id);
        self.deleting
            .run(action, async move { C::delete(&api, id).await })
            .await?;
        self.after_mutation().await;
        Ok(())
    }

    /// Delete every id concurrently and refetch. Failures do not roll back
    /// the deletes that succeeded.
    pub async fn bulk_delete(self, ids: Vec<i64>) -> BulkDeleteReport<i64> {
        let api = self.api.get_value();
        let report = self
            .deleting
            .track(delete_all(ids, |id| {
                let api = api.clone();
                async move { C::delete(&api, id).await }
            }))
            .await;
        tracing::info!(target: "activity", "Bulk {} delete: {}", C::NOUN.to_lowercase(), report.summary());
        if !report.succeeded.is_empty() {
            self.after_mutation().await;
        }
        report
    }

    async fn after_mutation(self) {
        self.revision.update(|r| *r += 1);
        self.fetch().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use futures::channel::oneshot;
    use futures::executor::block_on;

    #[test]
    fn test_stale_response_is_dropped() {
        let remote = RemoteData::<u32>::new();
        let (tx_old, rx_old) = oneshot::channel::<ApiResult<u32>>();

        let older = remote.fetch(async move { rx_old.await.unwrap_or(Ok(0)) });
        let newer = remote.fetch(async move {
            let _ = tx_old.send(Ok(1));
            Ok(2)
        });
        let (older_applied, newer_applied) = block_on(async { futures::join!(older, newer) });

        assert!(newer_applied);
        assert!(!older_applied);
        assert_eq!(remote.data.get_untracked(), Some(2));
        assert!(!remote.loading.get_untracked());
    }

    #[test]
    fn test_failure_keeps_previous_data() {
        let remote = RemoteData::<u32>::new();
        block_on(remote.fetch(async { Ok(5) }));
        block_on(remote.fetch(async { Err(ApiError::Network("offline".into())) }));

        assert_eq!(remote.data.get_untracked(), Some(5));
        assert_eq!(remote.error.get_untracked().as_deref(), Some("Network error: offline"));

        block_on(remote.fetch(async { Ok(6) }));
        assert_eq!(remote.error.get_untracked(), None);
    }

    #[test]
    fn test_mutation_pending_flag() {
        let mutation = Mutation::new();
        let out = block_on(mutation.track(async { 3 }));
        assert_eq!(out, 3);
        assert!(!mutation.pending.get_untracked());
    }
}
