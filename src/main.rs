#![allow(warnings)]
//! Trailmark Frontend Entry Point

mod models;
mod error;
mod config;
mod notify;
mod geolocation;
mod map_view;
mod form;
mod controller;
mod store;
mod components;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    let logs = match console_logger::init(config.log_level()) {
        Ok(buffer) => Some(buffer),
        Err(e) => {
            web_sys::console::warn_1(&e.into());
            None
        }
    };
    if let Some(e) = config_error {
        tracing::warn!("[APP] {}, using defaults", e);
    }
    tracing::info!("[APP] starting, zoom={} map=#{}", config.zoom, config.map_element_id);

    mount_to_body(move || view! { <App config=config logs=logs /> });
}
