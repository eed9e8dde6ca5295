//! Application Configuration
//!
//! Defaults can be overridden at build time (`ESTATE_API_BASE`) or at load
//! time through a `window.__ESTATE_CONFIG__` object set by the host page.

use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

use crate::table::SelectionPolicy;

const DEFAULT_API_BASE: &str = "http://localhost:8080/api";
pub const GLOBAL_CONFIG_KEY: &str = "__ESTATE_CONFIG__";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api_base_url: String,
    pub default_page_size: u32,
    pub page_size_options: Vec<u32>,
    pub search_debounce_ms: u32,
    /// Number of months offered by the current-period selector
    pub month_options: usize,
    pub log_capacity: usize,
    pub disable_search_while_pending: bool,
    /// Selection left behind by a bulk delete (`clear_all` or `keep_failed`)
    pub bulk_delete_selection: SelectionPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: option_env!("ESTATE_API_BASE").unwrap_or(DEFAULT_API_BASE).to_string(),
            default_page_size: 10,
            page_size_options: vec![10, 20, 30, 40, 50],
            search_debounce_ms: 300,
            month_options: 11,
            log_capacity: rolling_logger::DEFAULT_CAPACITY,
            disable_search_while_pending: true,
            bulk_delete_selection: SelectionPolicy::ClearAll,
        }
    }
}

impl AppConfig {
    /// Read `window.__ESTATE_CONFIG__`. A missing object yields the defaults;
    /// one that does not decode is an error so the caller can log it once
    /// logging is up.
    pub fn load() -> Result<Self, serde_wasm_bindgen::Error> {
        let Some(window) = web_sys::window() else {
            return Ok(Self::default());
        };
        let raw = js_sys::Reflect::get(&window, &JsValue::from_str(GLOBAL_CONFIG_KEY)).unwrap_or(JsValue::UNDEFINED);
        if raw.is_undefined() || raw.is_null() {
            return Ok(Self::default());
        }
        serde_wasm_bindgen::from_value::<AppConfig>(raw).map(Self::normalized)
    }

    /// Clamp values the UI cannot work with
    pub fn normalized(mut self) -> Self {
        self.page_size_options.retain(|s| *s > 0);
        if self.page_size_options.is_empty() {
            self.page_size_options = Self::default().page_size_options;
        }
        if self.default_page_size == 0 {
            self.default_page_size = self.page_size_options[0];
        }
        if !self.page_size_options.contains(&self.default_page_size) {
            self.page_size_options.push(self.default_page_size);
            self.page_size_options.sort_unstable();
        }
        while self.api_base_url.ends_with('/') {
            self.api_base_url.pop();
        }
        self.month_options = self.month_options.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.search_debounce_ms, 300);
        assert_eq!(config.default_page_size, 10);
        assert_eq!(config.page_size_options, vec![10, 20, 30, 40, 50]);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"api_base_url":"https://estate.example/api/"}"#).unwrap();
        let config = config.normalized();
        assert_eq!(config.api_base_url, "https://estate.example/api");
        assert_eq!(config.month_options, 11);
        assert_eq!(config.bulk_delete_selection, SelectionPolicy::ClearAll);
    }

    #[test]
    fn test_bulk_delete_selection_from_json() {
        let config: AppConfig = serde_json::from_str(r#"{"bulk_delete_selection":"keep_failed"}"#).unwrap();
        assert_eq!(config.bulk_delete_selection, SelectionPolicy::KeepFailed);
        assert!(serde_json::from_str::<AppConfig>(r#"{"bulk_delete_selection":"retry"}"#).is_err());
    }

    #[test]
    fn test_normalize_page_sizes() {
        let config = AppConfig {
            default_page_size: 25,
            page_size_options: vec![0, 50, 10],
            ..AppConfig::default()
        }
        .normalized();
        assert_eq!(config.page_size_options, vec![10, 25, 50]);

        let empty = AppConfig {
            default_page_size: 0,
            page_size_options: vec![],
            ..AppConfig::default()
        }
        .normalized();
        assert_eq!(empty.default_page_size, 10);
    }
}
