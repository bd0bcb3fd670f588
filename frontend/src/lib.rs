pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod router;
pub mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("logger already initialized: {err}").into());
    }
    log::info!("Starting LeaveDesk frontend");

    // Values from window.__LEAVEDESK_ENV win over ./config.json.
    leptos::spawn_local(async move {
        config::init().await;
    });

    router::mount_app();
}
