//! Todo Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod controller;
mod error;
mod form;
mod logging;
mod models;
mod store;

use leptos::prelude::*;

use api::StoreClient;
use app::App;
use config::{page_origin, AppConfig};

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_build_env();
    logging::init(&config);

    let base = match config.resolve_api_base(page_origin().as_deref()) {
        Ok(base) => base,
        Err(e) => {
            tracing::error!(error = %e, "cannot start todo app");
            return;
        }
    };
    tracing::info!(api_base = %base, "starting todo app");

    let client = StoreClient::http(base);
    mount_to_body(move || view! { <App client=client.clone() /> });
}
