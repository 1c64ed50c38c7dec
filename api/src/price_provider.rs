//! Defines the trait and the HTTP implementation for pricing a BTC quantity.

use dioxus_logger::tracing::debug;
use reqwest::Url;

use crate::config::ApiConfig;
use crate::error::FetchError;
use crate::quantity::Quantity;
use crate::quote::PriceQuote;
use crate::quote::PriceResponse;

/// A trait for any service that can price a BTC quantity in USDC.
pub trait PriceProvider {
    /// Fetches the price of `quantity`.
    async fn quote(&self, quantity: Quantity) -> Result<PriceQuote, FetchError>;
}

/// Prices quantities against the orderbook backend's `GET /price/` endpoint.
///
/// Cloning is cheap: the underlying `reqwest::Client` is reference counted.
#[derive(Clone, Debug)]
pub struct HttpPriceProvider {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpPriceProvider {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: config.price_endpoint().clone(),
        }
    }

    /// `{base}/price/?btc_quantity={quantity}`
    pub fn request_url(&self, quantity: Quantity) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("btc_quantity", &quantity.to_string());
        url
    }
}

impl PriceProvider for HttpPriceProvider {
    async fn quote(&self, quantity: Quantity) -> Result<PriceQuote, FetchError> {
        let url = self.request_url(quantity);
        debug!("requesting price: {}", url);

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        response.json::<PriceResponse>().await?.into_quote()
    }
}
