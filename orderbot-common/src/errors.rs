// orderbot-common/src/errors.rs

use rust_decimal::Decimal;
use thiserror::Error;

use crate::types::OrderType;

/// Reasons an order is rejected locally, before it reaches the exchange
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} {value} below minPrice {min_price}")]
    PriceBelowMin {
        field: &'static str,
        value: Decimal,
        min_price: Decimal,
    },

    #[error("{field} {value} above maxPrice {max_price}")]
    PriceAboveMax {
        field: &'static str,
        value: Decimal,
        max_price: Decimal,
    },

    #[error("{field} {value} not aligned with tickSize {tick_size}")]
    PriceNotAligned {
        field: &'static str,
        value: Decimal,
        tick_size: Decimal,
    },

    #[error("Qty {qty} below minQty {min_qty}")]
    QtyBelowMin { qty: Decimal, min_qty: Decimal },

    #[error("Qty {qty} above maxQty {max_qty}")]
    QtyAboveMax { qty: Decimal, max_qty: Decimal },

    #[error("Qty {qty} not aligned with stepSize {step_size}")]
    QtyNotAligned { qty: Decimal, step_size: Decimal },

    #[error("Qty must be positive, got {0}")]
    NonPositiveQty(Decimal),

    #[error("{0} order requires --price")]
    MissingPrice(OrderType),

    #[error("{0} order requires --price and --stop")]
    MissingStopPrice(OrderType),

    #[error("Invalid symbol: {0}")]
    InvalidSymbol(String),
}

pub type ValidationResult<T> = Result<T, ValidationError>;
