// orderbot-common/src/order.rs
// Turns a user request into the exact parameter set sent to the exchange

use rust_decimal::Decimal;
use tracing::warn;

use crate::errors::{ValidationError, ValidationResult};
use crate::types::{OrderRequest, OrderType, Side, TimeInForce};
use crate::utils::normalize_symbol;

/// Ask the exchange for the filled result instead of a bare ACK.
const RESPONSE_TYPE_RESULT: &str = "RESULT";

/// Payload for `POST /fapi/v1/order`.
///
/// Only fields the order type actually uses are populated, so every
/// `Some` here is something the validator has to look at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderParams {
    pub symbol: String,
    pub side: Side,
    pub order_type: OrderType,
    pub quantity: Decimal,
    pub price: Option<Decimal>,
    pub stop_price: Option<Decimal>,
    pub time_in_force: Option<TimeInForce>,
}

impl OrderParams {
    /// Build the payload, failing fast when the order type is missing a
    /// field it needs. No I/O happens here.
    pub fn from_request(request: &OrderRequest) -> ValidationResult<Self> {
        let symbol = normalize_symbol(&request.symbol)?;

        if request.quantity <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveQty(request.quantity));
        }

        let mut params = Self {
            symbol,
            side: request.side,
            order_type: request.order_type,
            quantity: request.quantity,
            price: None,
            stop_price: None,
            time_in_force: None,
        };

        let kind = request.order_type;
        if kind.requires_stop_price() {
            match (request.price, request.stop_price) {
                (Some(price), Some(stop)) => {
                    params.price = Some(price);
                    params.stop_price = Some(stop);
                }
                _ => return Err(ValidationError::MissingStopPrice(kind)),
            }
        } else if kind.requires_price() {
            params.price = Some(request.price.ok_or(ValidationError::MissingPrice(kind))?);
        } else if request.price.is_some() || request.stop_price.is_some() {
            warn!(
                symbol = %params.symbol,
                "{} order ignores --price/--stop",
                kind
            );
        }

        // Resting kinds stay on the book until filled or cancelled
        if kind.requires_price() {
            params.time_in_force = Some(TimeInForce::GoodTillCancel);
        }

        Ok(params)
    }

    /// Key/value pairs in the order Binance documents them.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("symbol", self.symbol.clone()),
            ("side", self.side.as_str().to_string()),
            ("type", self.order_type.wire_name().to_string()),
        ];
        if let Some(tif) = self.time_in_force {
            pairs.push(("timeInForce", tif.as_str().to_string()));
        }
        pairs.push(("quantity", self.quantity.to_string()));
        if let Some(price) = self.price {
            pairs.push(("price", price.to_string()));
        }
        if let Some(stop) = self.stop_price {
            pairs.push(("stopPrice", stop.to_string()));
        }
        pairs.push(("newOrderRespType", RESPONSE_TYPE_RESULT.to_string()));
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_market_order_drops_price_fields() {
        let mut request = OrderRequest::market("btcusdt", Side::Buy, dec!(0.01));
        request.price = Some(dec!(100));
        let params = OrderParams::from_request(&request).unwrap();

        assert_eq!(params.symbol, "BTCUSDT");
        assert_eq!(params.price, None);
        assert_eq!(params.time_in_force, None);
        let keys: Vec<_> = params.to_query_pairs().iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["symbol", "side", "type", "quantity", "newOrderRespType"]);
    }

    #[test]
    fn test_limit_requires_price() {
        let mut request = OrderRequest::limit("BTCUSDT", Side::Sell, dec!(1), dec!(100));
        request.price = None;
        let err = OrderParams::from_request(&request).unwrap_err();
        assert_eq!(err, ValidationError::MissingPrice(OrderType::Limit));
        assert_eq!(err.to_string(), "LIMIT order requires --price");
    }

    #[test]
    fn test_stop_limit_requires_both_prices() {
        let mut request =
            OrderRequest::stop_limit("BTCUSDT", Side::Buy, dec!(1), dec!(100), dec!(99));
        request.stop_price = None;
        assert_eq!(
            OrderParams::from_request(&request).unwrap_err(),
            ValidationError::MissingStopPrice(OrderType::StopLimit)
        );

        request.stop_price = Some(dec!(99));
        request.price = None;
        assert!(matches!(
            OrderParams::from_request(&request),
            Err(ValidationError::MissingStopPrice(_))
        ));
    }

    #[test]
    fn test_stop_limit_pairs() {
        let request = OrderRequest::stop_limit(
            "ethusdt",
            Side::Buy,
            dec!(0.5),
            dec!(2500.10),
            dec!(2499.90),
        );
        let pairs = OrderParams::from_request(&request).unwrap().to_query_pairs();

        assert!(pairs.contains(&("type", "STOP".to_string())));
        assert!(pairs.contains(&("timeInForce", "GTC".to_string())));
        assert!(pairs.contains(&("price", "2500.10".to_string())));
        assert!(pairs.contains(&("stopPrice", "2499.90".to_string())));
        assert!(pairs.contains(&("quantity", "0.5".to_string())));
    }

    #[test]
    fn test_rejects_zero_qty() {
        let request = OrderRequest::market("BTCUSDT", Side::Buy, Decimal::ZERO);
        assert!(matches!(
            OrderParams::from_request(&request),
            Err(ValidationError::NonPositiveQty(_))
        ));
    }
}
