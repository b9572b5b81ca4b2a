// orderbot-core/src/lib.rs
// Binance futures testnet order bot: connector, settings, logging, services

pub mod config;
pub mod exchange;
pub mod logging;
pub mod service;

// Re-export the order domain for convenience
pub use orderbot_common::{
    OrderParams, OrderRequest, OrderType, Side, SymbolFilters, ValidationError,
};
