#![allow(warnings)]
//! Activity Signup Frontend Entry Point

mod models;
mod error;
mod config;
mod commands;
mod view_state;
mod message;
mod intent;
mod confirm;
mod client;
mod context;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_logger::init(log::LevelFilter::Info) {
        web_sys::console::warn_1(&format!("[APP] Logger not installed: {}", err).into());
    }
    mount_to_body(App);
}
