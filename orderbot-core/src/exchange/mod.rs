// orderbot-core/src/exchange/mod.rs

pub mod connector;
pub mod errors;
pub mod signer;
pub mod traits;
pub mod types;
pub mod utils;

pub use connector::BinanceFuturesConnector;
pub use errors::ExchangeError;
pub use signer::RequestSigner;
pub use traits::FuturesExchange;
pub use types::*;
