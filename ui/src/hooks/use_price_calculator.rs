use api::ApiConfig;
use api::HttpPriceProvider;
use api::PriceProvider;
use api::Quantity;
use dioxus::prelude::*;

use crate::calculator_state::CalculatorState;
use crate::calculator_state::PriceStatus;

/// Handle to the calculator state owned by the component that called
/// [`use_price_calculator`].
#[derive(Clone, Copy)]
pub struct CalculatorHandle {
    input: Signal<String>,
    state: Signal<CalculatorState>,
}

impl CalculatorHandle {
    /// The text currently in the quantity field.
    pub fn input(&self) -> String {
        self.input.read().clone()
    }

    pub fn price_label(&self) -> String {
        self.state.read().price_label()
    }

    pub fn status(&self) -> PriceStatus {
        self.state.read().status().clone()
    }

    /// Handles one input event from the quantity field.
    ///
    /// The field text is always taken as typed. The quantity only changes when
    /// the text coerces to a different number, and only then is a new price
    /// requested.
    ///
    /// A browser `type=number` field reports `""` while its text is not yet a
    /// number (`1e`, `-`), so such text prices as zero.
    pub fn on_input(&mut self, raw: String) {
        let parsed = Quantity::from_input(&raw);
        if parsed.is_none() {
            dioxus_logger::tracing::debug!("ignoring non-numeric quantity {:?}", raw);
        }
        self.input.set(raw);

        if let Some(quantity) = parsed {
            if self.state.peek().quantity() != quantity {
                self.state.write().set_quantity(quantity);
            }
        }
    }
}

/// Owns the quantity and price of one calculator and keeps the price in
/// step with the quantity, pricing against the HTTP backend.
///
/// Requires an [`ApiConfig`] in context.
pub fn use_price_calculator() -> CalculatorHandle {
    let config = use_context::<ApiConfig>();
    let provider = use_hook(|| HttpPriceProvider::new(&config));
    use_price_calculator_with(provider)
}

/// Same as [`use_price_calculator`], with the price source supplied by the caller.
///
/// A price request is issued on first render and again each time the
/// quantity changes. A change cancels the request still in flight, and a
/// response that arrives for a superseded quantity is dropped.
pub fn use_price_calculator_with<P>(provider: P) -> CalculatorHandle
where
    P: PriceProvider + Clone + 'static,
{
    let provider = use_hook(|| provider);

    let input = use_signal(|| Quantity::ZERO.to_string());
    let state = use_signal(CalculatorState::new);

    // Only notifies when the quantity actually changes, not on every write to `state`.
    let quantity = use_memo(move || state.read().quantity());

    let _price_request = use_resource(move || {
        let provider = provider.clone();
        let quantity = quantity();
        let mut state = state;
        async move {
            dioxus_logger::tracing::debug!("pricing btc_quantity={}", quantity);
            let ticket = state.write().begin_request();
            let outcome = provider.quote(ticket.quantity()).await;
            state.write().complete(ticket, outcome);
        }
    });

    CalculatorHandle { input, state }
}
