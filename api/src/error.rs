//! Errors returned by price providers.

use thiserror::Error;

/// A price lookup that did not produce a usable price.
///
/// The calculator treats every variant the same way: it logs it and keeps
/// the previous price. The variants only exist to make the log useful.
#[derive(Error, Debug, Clone, PartialEq, Eq, strum::EnumIs)]
pub enum FetchError {
    /// The request never produced a response (DNS, refused connection, CORS, ...).
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered with a non-success status code.
    #[error("server responded with status {0}")]
    Status(u16),
    /// The response body was not a price quote.
    #[error("malformed response body: {0}")]
    Decode(String),
    /// The server answered, but reported an error instead of a price.
    #[error("backend error: {0}")]
    Backend(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            Self::Status(status.as_u16())
        } else {
            Self::Transport(err.to_string())
        }
    }
}
