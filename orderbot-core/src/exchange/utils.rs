// exchange/utils.rs
// Utility functions for the Binance futures REST API

use super::ExchangeError;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;

/// Parse a decimal string as returned by the exchange (`"0.01000000"`)
pub fn parse_decimal(field: &str, value: &str) -> Result<Decimal, ExchangeError> {
    Decimal::from_str(value.trim())
        .map_err(|e| ExchangeError::ParseError(format!("Invalid {} '{}': {}", field, value, e)))
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    code: i64,
    msg: String,
}

/// Map a non-2xx response to an error, keeping Binance's code when present
pub fn error_from_response(status: u16, body: &str) -> ExchangeError {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(err) => ExchangeError::Api {
            status,
            code: err.code,
            msg: err.msg,
        },
        Err(_) => ExchangeError::Http {
            status,
            body: body.to_string(),
        },
    }
}
