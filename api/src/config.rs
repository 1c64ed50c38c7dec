//! Where the pricing backend lives.

use std::env;

use reqwest::Url;
use thiserror::Error;

/// Name of the variable that overrides the backend base URL.
///
/// It is read at runtime on native targets and at compile time for every
/// target, since a wasm bundle has no process environment.
pub const BASE_URL_VAR: &str = "API_BASE_URL";

/// Used when `API_BASE_URL` is not set anywhere.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid base url {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("unsupported scheme {0:?} in base url, expected http or https")]
    UnsupportedScheme(String),
}

/// Connection settings for the pricing backend.
///
/// Built once at launch and handed to the UI as a root context, so nothing
/// downstream looks the URL up on its own.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: Url,
    price_endpoint: Url,
}

impl ApiConfig {
    /// Parses and normalizes `base_url`.
    ///
    /// The path always ends with `/` afterwards, so that `http://host/api`
    /// prices against `http://host/api/price/` rather than `http://host/price/`.
    /// Query and fragment are dropped.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidUrl {
            url: base_url.to_string(),
            reason,
        };

        let mut url = Url::parse(base_url.trim()).map_err(|e| invalid(e.to_string()))?;
        match url.scheme() {
            "http" | "https" => {}
            other => return Err(ConfigError::UnsupportedScheme(other.to_string())),
        }

        url.set_query(None);
        url.set_fragment(None);
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }

        let price_endpoint = url.join("price/").map_err(|e| invalid(e.to_string()))?;

        Ok(Self {
            base_url: url,
            price_endpoint,
        })
    }

    /// Reads `API_BASE_URL`, falling back to [`DEFAULT_BASE_URL`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(&resolve_base_url(env::var(BASE_URL_VAR).ok()))
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `{base_url}/price/`, without query parameters.
    pub fn price_endpoint(&self) -> &Url {
        &self.price_endpoint
    }
}

/// Runtime value first, then the value baked in at build time, then the default.
fn resolve_base_url(runtime: Option<String>) -> String {
    runtime
        .filter(|s| !s.trim().is_empty())
        .or_else(|| {
            option_env!("API_BASE_URL")
                .filter(|s| !s.trim().is_empty())
                .map(str::to_string)
        })
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_host_gets_trailing_slash() {
        let config = ApiConfig::new("http://localhost:8000").unwrap();
        assert_eq!(config.base_url().as_str(), "http://localhost:8000/");
        assert_eq!(
            config.price_endpoint().as_str(),
            "http://localhost:8000/price/"
        );
    }

    #[test]
    fn base_path_is_kept() {
        let without_slash = ApiConfig::new("https://example.com/api").unwrap();
        let with_slash = ApiConfig::new("https://example.com/api/").unwrap();

        assert_eq!(
            without_slash.price_endpoint().as_str(),
            "https://example.com/api/price/"
        );
        assert_eq!(without_slash, with_slash);
    }

    #[test]
    fn query_and_fragment_are_dropped() {
        let config = ApiConfig::new("http://example.com/?debug=1#top").unwrap();
        assert_eq!(config.price_endpoint().as_str(), "http://example.com/price/");
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let config = ApiConfig::new("  http://example.com  ").unwrap();
        assert_eq!(config.base_url().as_str(), "http://example.com/");
    }

    #[test]
    fn rejects_garbage() {
        let err = ApiConfig::new("not a url").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl { .. }));
    }

    #[test]
    fn rejects_non_http_schemes() {
        assert_eq!(
            ApiConfig::new("ftp://example.com").unwrap_err(),
            ConfigError::UnsupportedScheme("ftp".to_string())
        );
    }

    #[test]
    fn runtime_value_wins() {
        assert_eq!(
            resolve_base_url(Some("http://pricing:9000".to_string())),
            "http://pricing:9000"
        );
    }

    #[test]
    fn blank_runtime_value_falls_through() {
        let expected = option_env!("API_BASE_URL")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(DEFAULT_BASE_URL);
        assert_eq!(resolve_base_url(Some("   ".to_string())), expected);
        assert_eq!(resolve_base_url(None), expected);
    }
}
