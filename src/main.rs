//! Mentorship Directory Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod error;
mod logging;
mod models;
mod page;
mod store;
mod timer;

use models::PagePayload;

fn main() {
    console_error_panic_hook::set_once();

    let loaded = page::read_payload();
    let log_level = loaded
        .as_ref()
        .map(|payload| payload.config.log_level.clone())
        .unwrap_or_else(|_| config::FilterConfig::default().log_level);
    if !logging::init(&log_level) {
        log::warn!("[APP] console logger was already installed");
    }

    let payload = loaded.unwrap_or_else(|e| {
        log::warn!("[APP] {}; continuing with empty directories", e);
        PagePayload::default()
    });
    app::mount(payload);
}
