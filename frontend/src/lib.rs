use leptos::*;

pub mod api;
pub mod components;
pub mod config;
mod pages;
pub mod router;
pub mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::error_1(&format!("logger init failed: {}", err).into());
    }
    log::info!("Starting Internship Portal frontend");

    // Resolve the API base URL up front; requests wait on the same cache.
    spawn_local(async move {
        config::init().await;
    });

    router::mount_app();
}
