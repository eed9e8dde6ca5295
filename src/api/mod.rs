//! REST API Client
//!
//! Frontend bindings to the backend endpoints, organized by domain.

mod apartment;
mod auth;
mod fee;
mod resident;

use gloo_net::http::{Request, RequestBuilder, Response};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{ApiError, ApiResult};

// Re-export all public items
pub use apartment::*;
pub use auth::*;
pub use fee::*;
pub use resident::*;

/// Base-URL holder shared through context
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str, query: &[(&str, String)]) -> String {
        build_url(&self.base_url, path, query)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> ApiResult<T> {
        let resp = Request::get(&self.url(path, query)).send().await?;
        let resp = ensure_ok(resp).await?;
        Ok(resp.json::<T>().await?)
    }

    async fn post<B: Serialize>(&self, path: &str, body: &B) -> ApiResult<Response> {
        send_body(Request::post(&self.url(path, &[])), body).await
    }

    async fn put<B: Serialize>(&self, path: &str, body: &B) -> ApiResult<Response> {
        send_body(Request::put(&self.url(path, &[])), body).await
    }

    async fn delete(&self, path: &str) -> ApiResult<()> {
        let resp = Request::delete(&self.url(path, &[])).send().await?;
        ensure_ok(resp).await?;
        Ok(())
    }
}

/// Join base, path and percent-encoded query parameters. Empty values are skipped.
pub fn build_url(base: &str, path: &str, query: &[(&str, String)]) -> String {
    let mut url = format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'));
    let mut first = true;
    for (key, value) in query {
        if value.is_empty() {
            continue;
        }
        url.push(if first { '?' } else { '&' });
        first = false;
        url.push_str(key);
        url.push('=');
        url.extend(utf8_percent_encode(value, NON_ALPHANUMERIC));
    }
    url
}

/// Standard `page`/`size` query pair
pub(crate) fn page_query(page: u32, size: u32) -> Vec<(&'static str, String)> {
    vec![("page", page.to_string()), ("size", size.to_string())]
}

async fn send_body<B: Serialize>(builder: RequestBuilder, body: &B) -> ApiResult<Response> {
    let request = builder.json(body).map_err(|e| ApiError::Encode(e.to_string()))?;
    let resp = request.send().await?;
    ensure_ok(resp).await
}

async fn ensure_ok(resp: Response) -> ApiResult<Response> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::from_status(status, &body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url() {
        let url = build_url(
            "http://localhost:8080/api/",
            "/fees/search",
            &[("type", "water & power".to_string()), ("page", "0".to_string()), ("size", "10".to_string())],
        );
        assert_eq!(
            url,
            "http://localhost:8080/api/fees/search?type=water%20%26%20power&page=0&size=10"
        );
    }

    #[test]
    fn test_build_url_skips_empty() {
        let url = build_url("http://h/api", "residents", &[("search", String::new()), ("page", "1".to_string())]);
        assert_eq!(url, "http://h/api/residents?page=1");
        assert_eq!(build_url("http://h/api", "fees/3", &[]), "http://h/api/fees/3");
    }

    #[test]
    fn test_client_trims_base() {
        assert_eq!(ApiClient::new("http://h/api//").base_url(), "http://h/api");
    }
}
