// orderbot-core/src/exchange/types.rs
// Wire types of the USDⓈ-M futures REST API. Decimals stay strings until
// something needs the number.

use orderbot_common::{LotSize, PriceFilter, SymbolFilters};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::utils::parse_decimal;
use super::ExchangeError;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerTime {
    pub server_time: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExchangeInfo {
    pub symbols: Vec<SymbolInfo>,
}

const STATUS_TRADING: &str = "TRADING";

impl ExchangeInfo {
    pub fn symbol(&self, symbol: &str) -> Result<&SymbolInfo, ExchangeError> {
        self.symbols
            .iter()
            .find(|s| s.symbol == symbol)
            .ok_or_else(|| {
                ExchangeError::InvalidSymbol(format!("{} not listed on exchange", symbol))
            })
    }

    /// Like [`ExchangeInfo::symbol`], but only for symbols accepting orders
    pub fn tradable_symbol(&self, symbol: &str) -> Result<&SymbolInfo, ExchangeError> {
        let info = self.symbol(symbol)?;
        if info.status != STATUS_TRADING {
            return Err(ExchangeError::InvalidSymbol(format!(
                "{} is not trading (status {})",
                symbol, info.status
            )));
        }
        Ok(info)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymbolInfo {
    pub symbol: String,
    pub status: String,
    #[serde(default)]
    pub filters: Vec<RawFilter>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "filterType")]
pub enum RawFilter {
    #[serde(rename = "PRICE_FILTER")]
    Price {
        #[serde(rename = "minPrice")]
        min_price: String,
        #[serde(rename = "maxPrice")]
        max_price: String,
        #[serde(rename = "tickSize")]
        tick_size: String,
    },
    #[serde(rename = "LOT_SIZE")]
    LotSize {
        #[serde(rename = "minQty")]
        min_qty: String,
        #[serde(rename = "maxQty")]
        max_qty: String,
        #[serde(rename = "stepSize")]
        step_size: String,
    },
    #[serde(rename = "MARKET_LOT_SIZE")]
    MarketLotSize {
        #[serde(rename = "minQty")]
        min_qty: String,
        #[serde(rename = "maxQty")]
        max_qty: String,
        #[serde(rename = "stepSize")]
        step_size: String,
    },
    /// PERCENT_PRICE, MIN_NOTIONAL, MAX_NUM_ORDERS, ...
    #[serde(other)]
    Other,
}

impl SymbolInfo {
    pub fn symbol_filters(&self) -> Result<SymbolFilters, ExchangeError> {
        let mut filters = SymbolFilters::default();
        for raw in &self.filters {
            match raw {
                RawFilter::Price {
                    min_price,
                    max_price,
                    tick_size,
                } => {
                    filters.price = Some(PriceFilter {
                        min_price: parse_decimal("minPrice", min_price)?,
                        max_price: parse_decimal("maxPrice", max_price)?,
                        tick_size: parse_decimal("tickSize", tick_size)?,
                    });
                }
                RawFilter::LotSize {
                    min_qty,
                    max_qty,
                    step_size,
                } => filters.lot_size = Some(parse_lot(min_qty, max_qty, step_size)?),
                RawFilter::MarketLotSize {
                    min_qty,
                    max_qty,
                    step_size,
                } => filters.market_lot_size = Some(parse_lot(min_qty, max_qty, step_size)?),
                RawFilter::Other => {}
            }
        }
        Ok(filters)
    }
}

fn parse_lot(min_qty: &str, max_qty: &str, step_size: &str) -> Result<LotSize, ExchangeError> {
    Ok(LotSize {
        min_qty: parse_decimal("minQty", min_qty)?,
        max_qty: parse_decimal("maxQty", max_qty)?,
        step_size: parse_decimal("stepSize", step_size)?,
    })
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub order_id: i64,
    pub symbol: String,
    pub status: String,
    #[serde(default)]
    pub client_order_id: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub avg_price: String,
    #[serde(default)]
    pub orig_qty: String,
    #[serde(default)]
    pub executed_qty: String,
    #[serde(default)]
    pub stop_price: String,
    #[serde(default)]
    pub time_in_force: String,
    #[serde(rename = "type")]
    pub order_type: String,
    pub side: String,
    #[serde(default)]
    pub update_time: i64,
    /// Every field not named above (reduceOnly, positionSide, workingType, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Entry of `GET /fapi/v1/openOrders`; same shape as an order response
pub type OpenOrder = OrderResponse;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionRisk {
    pub symbol: String,
    pub position_amt: String, // signed, negative = short
    pub entry_price: String,
    #[serde(default)]
    pub mark_price: String,
    #[serde(default)]
    pub un_realized_profit: String,
    #[serde(default)]
    pub liquidation_price: String,
    #[serde(default)]
    pub leverage: String,
    #[serde(default)]
    pub margin_type: String,
    #[serde(default)]
    pub position_side: String,
    /// isolatedMargin, notional, maxNotionalValue, ...
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const EXCHANGE_INFO: &str = r#"{
        "timezone": "UTC",
        "symbols": [{
            "symbol": "BTCUSDT",
            "status": "TRADING",
            "filters": [
                {"filterType": "PRICE_FILTER", "minPrice": "261.10", "maxPrice": "809484", "tickSize": "0.10"},
                {"filterType": "LOT_SIZE", "minQty": "0.001", "maxQty": "1000", "stepSize": "0.001"},
                {"filterType": "MARKET_LOT_SIZE", "minQty": "0.001", "maxQty": "120", "stepSize": "0.001"},
                {"filterType": "MAX_NUM_ORDERS", "limit": 200},
                {"filterType": "MIN_NOTIONAL", "notional": "100"},
                {"filterType": "PERCENT_PRICE", "multiplierUp": "1.0500", "multiplierDown": "0.9500", "multiplierDecimal": "4"}
            ]
        }]
    }"#;

    #[test]
    fn test_filters_from_exchange_info() {
        let info: ExchangeInfo = serde_json::from_str(EXCHANGE_INFO).unwrap();
        let filters = info.symbol("BTCUSDT").unwrap().symbol_filters().unwrap();

        let price = filters.price.unwrap();
        assert_eq!(price.min_price, dec!(261.10));
        assert_eq!(price.tick_size, dec!(0.1));
        assert_eq!(filters.lot_size.unwrap().step_size, dec!(0.001));
        assert_eq!(filters.market_lot_size.unwrap().max_qty, dec!(120));
    }

    #[test]
    fn test_unknown_symbol() {
        let info: ExchangeInfo = serde_json::from_str(EXCHANGE_INFO).unwrap();
        assert!(matches!(
            info.symbol("DOGEUSDT"),
            Err(ExchangeError::InvalidSymbol(_))
        ));
    }

    #[test]
    fn test_non_trading_symbol_is_rejected() {
        let mut info: ExchangeInfo = serde_json::from_str(EXCHANGE_INFO).unwrap();
        assert!(info.tradable_symbol("BTCUSDT").is_ok());

        info.symbols[0].status = "SETTLING".to_string();
        assert!(info.symbol("BTCUSDT").is_ok());
        match info.tradable_symbol("BTCUSDT") {
            Err(ExchangeError::InvalidSymbol(msg)) => assert!(msg.contains("SETTLING")),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_order_response_decodes() {
        let body = r#"{
            "clientOrderId": "testOrder", "cumQty": "0", "cumQuote": "0",
            "executedQty": "0", "orderId": 22542179, "avgPrice": "0.00000",
            "origQty": "10", "price": "0", "reduceOnly": false, "side": "BUY",
            "positionSide": "SHORT", "status": "NEW", "stopPrice": "9300",
            "closePosition": false, "symbol": "BTCUSDT", "timeInForce": "GTD",
            "type": "TRAILING_STOP_MARKET", "origType": "TRAILING_STOP_MARKET",
            "updateTime": 1566818724722, "workingType": "CONTRACT_PRICE",
            "priceProtect": false
        }"#;
        let resp: OrderResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.order_id, 22542179);
        assert_eq!(resp.status, "NEW");
        assert_eq!(resp.order_type, "TRAILING_STOP_MARKET");
        assert_eq!(resp.orig_qty, "10");
        assert_eq!(resp.extra.get("reduceOnly"), Some(&Value::Bool(false)));
        assert_eq!(resp.extra.get("workingType"), Some(&Value::from("CONTRACT_PRICE")));
        assert!(!resp.extra.contains_key("orderId"));
    }
}
