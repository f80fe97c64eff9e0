//! Storefront UI Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod enhancers;
mod error;
mod flash;
mod models;
mod pricing;
mod requests;
mod stock;
mod store;
mod timing;
mod validation;

use config::StorefrontConfig;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match StorefrontConfig::from_window() {
        Ok(config) => (config, None),
        Err(err) => (StorefrontConfig::default(), Some(err)),
    };
    if let Err(err) = console_log::init_with_level(config.log_level()) {
        web_sys::console::error_1(&format!("[APP] Logger init failed: {}", err).into());
    }
    if let Some(err) = config_error {
        log::warn!("[APP] Ignoring invalid STOREFRONT_CONFIG: {}", err);
    }

    leptos_enhance::on_ready(move || app::start(config));
}
