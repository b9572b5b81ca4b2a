// orderbot-core/src/service/submitter.rs

use orderbot_common::{OrderParams, OrderRequest};
use tracing::{error, info};

use super::errors::ServiceError;
use crate::exchange::{FuturesExchange, OrderResponse};

/// Validates an order against live symbol filters and sends it once.
pub struct OrderSubmitter<'a, E: FuturesExchange + ?Sized> {
    exchange: &'a E,
}

impl<'a, E: FuturesExchange + ?Sized> OrderSubmitter<'a, E> {
    pub fn new(exchange: &'a E) -> Self {
        Self { exchange }
    }

    /// Missing price/stop fields are rejected before anything touches the
    /// network; filter violations are rejected before the order is sent.
    pub async fn place_order(&self, request: &OrderRequest) -> Result<OrderResponse, ServiceError> {
        let params = OrderParams::from_request(request)?;

        let filters = self.exchange.symbol_filters(&params.symbol).await?;
        filters.validate_order(&params)?;

        match self.exchange.create_order(&params).await {
            Ok(resp) => {
                info!(
                    order_id = resp.order_id,
                    symbol = %resp.symbol,
                    status = %resp.status,
                    executed_qty = %resp.executed_qty,
                    "Order placed"
                );
                Ok(resp)
            }
            Err(e) => {
                error!(
                    error = %e,
                    symbol = %params.symbol,
                    side = %params.side,
                    order_type = %params.order_type,
                    quantity = %params.quantity,
                    price = ?params.price,
                    stop_price = ?params.stop_price,
                    "Order failed"
                );
                Err(e.into())
            }
        }
    }
}
