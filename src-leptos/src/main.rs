//! pagewin - Leptos Frontend
//!
//! Demo page mounting the pagination control over a generated list.

// Dependencies used in lib.rs submodules, acknowledged here for bin target
use pagewin_core as _;
use wasm_bindgen as _;

use leptos::prelude::*;
use pagewin_leptos::app::App;

fn main() {
    // Initialize panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging (ignore error if already initialized)
    drop(console_log::init_with_level(log::Level::Debug));

    log::info!("pagewin demo {} starting...", env!("GIT_VERSION"));

    mount_to_body(App);
}
