//! Todo Widget Frontend Entry Point

mod app;
mod components;
mod context;
mod storage;
mod store;
mod view;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    wasm_tracing::set_as_global_default();
    mount_to_body(App);
}
