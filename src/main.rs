//! Estate Admin Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod error;
mod format;
mod forms;
mod hooks;
mod logging;
mod models;
mod pagination;
mod store;
mod table;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };
    logging::init(&config);
    if let Some(e) = config_error {
        tracing::warn!("Ignoring invalid {}: {}", config::GLOBAL_CONFIG_KEY, e);
    }
    tracing::info!("Starting with API base {}", config.api_base_url);

    mount_to_body(move || view! { <App config=config.clone() /> });
}
