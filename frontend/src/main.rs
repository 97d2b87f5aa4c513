#![recursion_limit = "1024"]
#![allow(clippy::needless_return)]

mod app;
mod components;
mod config;
mod layout;
mod location;
mod pages;
mod route;
mod utils;

use wasm_bindgen::prelude::*;

#[cfg(not(debug_assertions))]
const LOG_LEVEL: log::Level = log::Level::Info;
#[cfg(debug_assertions)]
const LOG_LEVEL: log::Level = log::Level::Trace;

pub fn main() -> Result<(), JsValue> {
    wasm_logger::init(wasm_logger::Config::new(LOG_LEVEL));
    log::info!("Kallari site {}", kallari_site::version());
    yew::Renderer::<app::Application>::new().render();
    Ok(())
}
