//! Application Context
//!
//! Shared services provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::config::AppConfig;

/// Configuration and REST client, provided once at the root
#[derive(Clone, Copy)]
pub struct AppContext {
    pub config: StoredValue<AppConfig>,
    pub api: StoredValue<ApiClient>,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        let api = ApiClient::new(config.api_base_url.clone());
        tracing::debug!("REST client at {}", api.base_url());
        Self {
            config: StoredValue::new(config),
            api: StoredValue::new(api),
        }
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
