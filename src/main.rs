//! To-Do List Frontend Entry Point

mod app;
mod auth;
mod components;
mod config;
mod context;
mod controller;
mod error;
mod gateway;
mod models;
mod pages;
mod routing;
mod storage;
mod store;
mod toast;

use app::App;
use config::AppConfig;
use leptos::prelude::*;
use tracing::{info, warn};

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_env();
    if let Err(err) = console_logger::init(config.logger()) {
        warn!(%err, "logger already installed");
    }
    info!(api = %config.api_base_url, source = ?config.data_source, "starting to-do list");

    mount_to_body(move || view! { <App config=config.clone() /> });
}
