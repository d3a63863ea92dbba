//! Lúmina Landing Page Entry Point

mod app;
mod components;
mod config;
mod links;
mod loader;
mod menu;
mod models;
mod search;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
