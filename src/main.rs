#![allow(warnings)]
//! Cat Gallery Frontend Entry Point

mod models;
mod error;
mod config;
mod storage;
mod favorites;
mod api;
mod feed;
mod render;
mod context;
mod components;
mod app;

use app::App;
use config::GalleryConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = GalleryConfig::default();
    if let Err(e) = console_logger::init(config.log_level) {
        web_sys::console::warn_1(&format!("[APP] Logger already set: {}", e).into());
    }

    mount_to_body(move || view! { <App config=config /> });
}
