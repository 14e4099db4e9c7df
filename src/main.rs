//! NetWorth Frontend Entry Point

mod app;
mod chart;
mod components;
mod context;
mod nav;
mod store;

use app::App;
use leptos::prelude::*;
use log::LevelFilter;

fn main() {
    console_error_panic_hook::set_once();
    let logger = match rolling_logger::init(LevelFilter::Debug, rolling_logger::DEFAULT_CAPACITY) {
        Ok(logger) => Some(logger),
        Err(err) => {
            web_sys::console::warn_1(&format!("logger already installed: {}", err).into());
            None
        }
    };
    log::info!("starting NetWorth dashboard");
    mount_to_body(move || view! { <App logger=logger /> });
}
