//! Fleet Dashboard Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod controller;
mod error;
mod models;
mod notify;
mod store;

use app::App;
use config::DashboardConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, warnings) = DashboardConfig::from_build_env();
    if console_logger::init(config.log_level).is_err() {
        web_sys::console::warn_1(&"[APP] Logger already installed".into());
    }
    for warning in warnings {
        log::warn!("[APP] {}", warning);
    }

    mount_to_body(move || view! { <App config=config /> });
}
