#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

#[cfg(target_arch = "wasm32")]
mod app;
#[path = "lib/mod.rs"]
mod app_lib;
#[cfg(target_arch = "wasm32")]
mod components;
mod features;
#[cfg(target_arch = "wasm32")]
mod routes;

#[cfg(target_arch = "wasm32")]
pub fn main() {
    use leptos::prelude::mount_to_body;

    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!(
        "airwatch-web starting (commit {})",
        app_lib::build_info::git_commit_hash()
    );

    mount_to_body(crate::app::App);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
