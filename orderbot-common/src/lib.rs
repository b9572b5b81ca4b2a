// orderbot-common/src/lib.rs
// Order domain shared by the bot binaries: request types, filters, validation

pub mod errors;
pub mod filters;
pub mod order;
pub mod types;
pub mod utils;

pub use errors::{ValidationError, ValidationResult};
pub use filters::{LotSize, PriceFilter, SymbolFilters};
pub use order::OrderParams;
pub use types::{OrderRequest, OrderType, Side, TimeInForce};
