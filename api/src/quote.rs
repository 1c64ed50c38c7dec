//! Wire types of the `/price/` endpoint.

use serde::Deserialize;

use crate::error::FetchError;

/// The price, in USDC, of the quantity that was asked for.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct PriceQuote {
    price_usdc: f64,
}

impl PriceQuote {
    pub fn new(price_usdc: f64) -> Self {
        Self { price_usdc }
    }

    pub fn price_usdc(&self) -> f64 {
        self.price_usdc
    }
}

/// Everything the endpoint may answer with a 200.
///
/// When the backend has no order book for the pair yet it still answers
/// 200, with `{"error": "..."}` instead of a price.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum PriceResponse {
    Quote(PriceQuote),
    Error { error: String },
}

impl PriceResponse {
    pub(crate) fn into_quote(self) -> Result<PriceQuote, FetchError> {
        match self {
            Self::Quote(quote) => Ok(quote),
            Self::Error { error } => Err(FetchError::Backend(error)),
        }
    }
}
