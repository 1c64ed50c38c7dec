use api::ApiConfig;
use dioxus::prelude::*;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");

    let config = ApiConfig::from_env().expect("invalid API_BASE_URL");
    dioxus_logger::tracing::info!("pricing backend: {}", config.base_url());

    dioxus::LaunchBuilder::new().with_context(config).launch(App);
}

#[component]
fn App() -> Element {
    ui::App()
}
