#![allow(warnings)]
//! SocialIC Frontend Entry Point

mod models;
mod error;
mod config;
mod routes;
mod backend;
mod commands;
mod shell;
mod handlers;
mod context;
mod store;
mod components;
mod app;
#[cfg(test)]
mod testing;

use app::App;
use config::ClientConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let loaded = ClientConfig::load();
    let config = loaded.clone().unwrap_or_default();
    if console_logger::init_logger("SocialIC", config.log_level()).is_err() {
        web_sys::console::warn_1(&"[SocialIC] logger already installed".into());
    }
    if let Err(e) = loaded {
        log::warn!("Ignoring config block: {}", e);
    }

    mount_to_body(move || view! { <App config=config.clone() /> });
}
