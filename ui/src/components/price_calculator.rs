use dioxus::prelude::*;

use crate::components::pico::Card;
use crate::components::pico::NumberInput;
use crate::hooks::use_price_calculator::use_price_calculator;

/// Prices a BTC quantity in USDC against the orderbook backend.
///
/// A failed request leaves the last price on screen. The failure is only
/// logged.
#[component]
pub fn PriceCalculator() -> Element {
    let mut calculator = use_price_calculator();

    rsx! {
        Card {
            h2 { "Orderbook Price" }
            div {
                NumberInput {
                    value: calculator.input(),
                    placeholder: "Enter quantity of BTC",
                    on_input: move |raw: String| calculator.on_input(raw),
                }
                p { "{calculator.price_label()}" }
            }
        }
    }
}
