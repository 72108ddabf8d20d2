//! Orphée Frontend Entry Point

mod app;
mod catalog;
mod components;
mod config;
mod context;
mod models;
mod pages;
mod store;
mod tracker;

#[cfg(test)]
mod testing;

use app::App;
use config::SiteConfig;
use leptos::prelude::*;
use log::LevelFilter;

fn main() {
    console_error_panic_hook::set_once();

    let level = SiteConfig::load().level().unwrap_or_else(|e| {
        web_sys::console::warn_1(&e.to_string().into());
        LevelFilter::Info
    });
    if let Err(e) = console_logger::init_logger("Orphee", level) {
        web_sys::console::error_1(&format!("logger init failed: {}", e).into());
    }
    log::info!("starting, log level {}", level);

    mount_to_body(App);
}
