//! TaskFlow Board Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod logger;
mod storage;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init(AppConfig::load().log_level);
    mount_to_body(App);
}
