// orderbot-common/src/utils.rs
// Input normalisation shared by the CLI and the exchange layer

use crate::errors::{ValidationError, ValidationResult};

const MIN_SYMBOL_LEN: usize = 2;
const MAX_SYMBOL_LEN: usize = 20;

/// Validate and upper-case a futures symbol such as `btcusdt`
pub fn normalize_symbol(symbol: &str) -> ValidationResult<String> {
    let symbol = symbol.trim();
    if symbol.is_empty() {
        return Err(ValidationError::InvalidSymbol(
            "Symbol cannot be empty".to_string(),
        ));
    }

    let symbol = symbol.to_uppercase();

    if !symbol.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ValidationError::InvalidSymbol(format!(
            "Symbol '{}' contains invalid characters",
            symbol
        )));
    }

    if symbol.len() < MIN_SYMBOL_LEN || symbol.len() > MAX_SYMBOL_LEN {
        return Err(ValidationError::InvalidSymbol(format!(
            "Symbol '{}' has invalid length",
            symbol
        )));
    }

    Ok(symbol)
}
