//! Task Boards Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod error;
mod logging;
mod models;
mod moves;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_env();
    logging::init(config.log_level);
    log::info!("Task Boards starting, API at {}", config.api_base_url);

    mount_to_body(move || view! { <App config=config /> });
}
