// orderbot-core/src/exchange/traits.rs

use async_trait::async_trait;
use orderbot_common::{OrderParams, SymbolFilters};

use crate::exchange::errors::ExchangeError;
use crate::exchange::types::{OpenOrder, OrderResponse, PositionRisk};

/// The calls the order flow needs from a futures venue
#[async_trait]
pub trait FuturesExchange: Send + Sync {
    /// Current PRICE_FILTER / LOT_SIZE rules for `symbol`
    async fn symbol_filters(&self, symbol: &str) -> Result<SymbolFilters, ExchangeError>;

    /// Submit an order that has already passed local validation
    async fn create_order(&self, params: &OrderParams) -> Result<OrderResponse, ExchangeError>;

    async fn open_orders(&self, symbol: &str) -> Result<Vec<OpenOrder>, ExchangeError>;

    async fn position_information(&self, symbol: &str) -> Result<Vec<PositionRisk>, ExchangeError>;
}
