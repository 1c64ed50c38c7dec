use api::ApiConfig;
use dioxus::prelude::*;

fn main() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");

    // API_BASE_URL is baked in at build time for the browser bundle.
    let config = ApiConfig::from_env().expect("invalid API_BASE_URL");
    dioxus_logger::tracing::info!("pricing backend: {}", config.base_url());

    dioxus::LaunchBuilder::new().with_context(config).launch(App);
}

#[component]
fn App() -> Element {
    ui::App()
}
