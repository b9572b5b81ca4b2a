// exchange/errors.rs

use thiserror::Error;

/// Error types for exchange operations
#[derive(Error, Debug)]
pub enum ExchangeError {
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Binance rejected the request with its own `{"code", "msg"}` body
    #[error("API error (status {status}, code {code}): {msg}")]
    Api { status: u16, code: i64, msg: String },

    #[error("HTTP error (status {status}): {body}")]
    Http { status: u16, body: String },

    #[error("Invalid symbol: {0}")]
    InvalidSymbol(String),

    #[error("Data parsing error: {0}")]
    ParseError(String),

    #[error("Signing error: {0}")]
    SigningError(String),

    #[error("Missing API credentials for signed endpoint {0}")]
    MissingCredentials(&'static str),
}

// Convert from common error types
impl From<serde_json::Error> for ExchangeError {
    fn from(err: serde_json::Error) -> Self {
        ExchangeError::ParseError(err.to_string())
    }
}

impl From<reqwest::Error> for ExchangeError {
    fn from(err: reqwest::Error) -> Self {
        ExchangeError::NetworkError(err.to_string())
    }
}
