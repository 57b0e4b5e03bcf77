mod api;
mod app;
mod components;
mod config;
mod containers;
mod models;
mod pages;
mod routes;

#[cfg(test)]
mod api_test;
#[cfg(test)]
mod routes_test;

use app::App;
use config::FrontendConfig;
use yew::Renderer;

fn main() {
    // Forward panic payloads to the browser console instead of "unreachable".
    console_error_panic_hook::set_once();

    let config = FrontendConfig::new();
    wasm_logger::init(wasm_logger::Config::new(config.log_level()));
    log::info!(
        "Starting Reactive Playground (api: {})",
        config.api_base_url()
    );

    Renderer::<App>::new().render();
}
