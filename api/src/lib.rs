//! This crate contains the client side of the orderbook pricing API.
//!
//! It has no UI dependencies, so the same code runs in the browser (wasm32)
//! and in the desktop webview.

pub mod config;
pub mod error;
pub mod price_provider;
pub mod quantity;
pub mod quote;

pub use config::ApiConfig;
pub use error::FetchError;
pub use price_provider::{HttpPriceProvider, PriceProvider};
pub use quantity::Quantity;
pub use quote::PriceQuote;
