//! The state behind the price calculator, kept free of Dioxus so it can be
//! driven directly from tests.

use api::FetchError;
use api::PriceQuote;
use api::Quantity;
use dioxus_logger::tracing::debug;
use dioxus_logger::tracing::error;

/// What happened to the most recent price request.
#[derive(Clone, PartialEq, Debug, Default, strum::EnumIs)]
pub enum PriceStatus {
    /// No request has been issued yet.
    #[default]
    Idle,
    Pending,
    Fetched,
    /// The request failed. The shown price is left over from an earlier request.
    Failed(String),
}

/// Identifies one issued request.
///
/// Only the ticket from the latest [`CalculatorState::begin_request`] call
/// may change the state. Earlier tickets are stale.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct RequestTicket {
    generation: u64,
    quantity: Quantity,
}

impl RequestTicket {
    /// The quantity this request is pricing.
    pub fn quantity(&self) -> Quantity {
        self.quantity
    }
}

/// Quantity and price, plus the bookkeeping that keeps them in step.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct CalculatorState {
    quantity: Quantity,
    price: f64,
    status: PriceStatus,
    generation: u64,
}

impl CalculatorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Price in USDC of the last successfully priced quantity.
    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn status(&self) -> &PriceStatus {
        &self.status
    }

    pub fn price_label(&self) -> String {
        format!("Price in USDC: {}", self.price)
    }

    /// Returns `false` when `quantity` is what we already have, in which case
    /// no new request is needed.
    pub fn set_quantity(&mut self, quantity: Quantity) -> bool {
        if self.quantity == quantity {
            return false;
        }
        self.quantity = quantity;
        true
    }

    /// Starts a request for the current quantity, superseding any in flight.
    pub fn begin_request(&mut self) -> RequestTicket {
        self.generation += 1;
        self.status = PriceStatus::Pending;
        RequestTicket {
            generation: self.generation,
            quantity: self.quantity,
        }
    }

    /// Applies the outcome of the request identified by `ticket`.
    ///
    /// Outcomes of superseded requests are dropped. A failure keeps the
    /// current price. Returns whether the outcome was applied.
    pub fn complete(
        &mut self,
        ticket: RequestTicket,
        outcome: Result<PriceQuote, FetchError>,
    ) -> bool {
        if ticket.generation != self.generation {
            debug!(
                "dropping stale price response for btc_quantity={}",
                ticket.quantity
            );
            return false;
        }

        match outcome {
            Ok(quote) => {
                self.price = quote.price_usdc();
                self.status = PriceStatus::Fetched;
            }
            Err(e) => {
                error!("Error fetching price for btc_quantity={}: {}", ticket.quantity, e);
                self.status = PriceStatus::Failed(e.to_string());
            }
        }
        true
    }
}
