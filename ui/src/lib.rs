// The client-side Dioxus application logic.

use dioxus::prelude::*;

pub mod calculator_state;
mod components;
pub mod hooks;

use components::pico::Container;
use components::price_calculator::PriceCalculator;

const PICO_CSS: &str = "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.cyan.min.css";

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

/// The page frame. Expects an [`api::ApiConfig`] root context, which the
/// launchers provide.
#[allow(non_snake_case)]
pub fn App() -> Element {
    let page_css = r#"
    .app-main-container main {
        padding-top: 2rem;
        max-width: 40rem;
    }

    .app-main-container header h1 {
        margin-bottom: 1rem;
    }

    /* hide the spinner arrows; quantities are typed, not stepped */
    .app-main-container input[type=number]::-webkit-inner-spin-button,
    .app-main-container input[type=number]::-webkit-outer-spin-button {
        -webkit-appearance: none;
        margin: 0;
    }
    .app-main-container input[type=number] {
        -moz-appearance: textfield;
    }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Link {
            rel: "stylesheet",
            href: PICO_CSS,
        }
        style {
            "{page_css}"
        }
        div {
            class: "app-main-container",
            Container {
                header {
                    h1 { "Price Calculator" }
                }
                PriceCalculator {}
            }
        }
    }
}
