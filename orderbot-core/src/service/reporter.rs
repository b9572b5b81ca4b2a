// orderbot-core/src/service/reporter.rs
// Prints the order result plus the open orders / positions left behind

use serde_json::{Map, Value};
use std::io::Write;
use tracing::debug;

use super::errors::ServiceError;
use crate::exchange::{FuturesExchange, OpenOrder, OrderResponse, PositionRisk};

pub struct Reporter<'a, E: FuturesExchange + ?Sized> {
    exchange: &'a E,
}

impl<'a, E: FuturesExchange + ?Sized> Reporter<'a, E> {
    pub fn new(exchange: &'a E) -> Self {
        Self { exchange }
    }

    /// Fetch and print open orders, then positions, for `symbol`
    pub async fn report_account<W: Write>(
        &self,
        symbol: &str,
        out: &mut W,
    ) -> Result<(), ServiceError> {
        let orders = self.exchange.open_orders(symbol).await?;
        debug!(%symbol, count = orders.len(), "open orders");
        write_open_orders(&orders, out)?;

        let positions = self.exchange.position_information(symbol).await?;
        debug!(%symbol, count = positions.len(), "positions");
        write_positions(&positions, out)?;
        Ok(())
    }
}

pub fn write_order_result<W: Write>(resp: &OrderResponse, out: &mut W) -> std::io::Result<()> {
    writeln!(out, "\n=== Order Result ===")?;
    writeln!(out, "symbol: {}", resp.symbol)?;
    writeln!(out, "side: {}", resp.side)?;
    writeln!(out, "type: {}", resp.order_type)?;
    writeln!(out, "status: {}", resp.status)?;
    writeln!(out, "orderId: {}", resp.order_id)?;
    writeln!(out, "price: {}", resp.price)?;
    writeln!(out, "origQty: {}", resp.orig_qty)?;
    writeln!(out, "executedQty: {}", resp.executed_qty)?;
    Ok(())
}

pub fn write_open_orders<W: Write>(orders: &[OpenOrder], out: &mut W) -> std::io::Result<()> {
    writeln!(out, "\n=== Open Orders ===")?;
    if orders.is_empty() {
        writeln!(out, "(none)")?;
    }
    for o in orders {
        write!(
            out,
            "{} #{} {} {} qty={} filled={} price={} stop={} status={}",
            o.symbol,
            o.order_id,
            o.side,
            o.order_type,
            o.orig_qty,
            o.executed_qty,
            o.price,
            o.stop_price,
            o.status
        )?;
        write_extra(&o.extra, out)?;
    }
    Ok(())
}

pub fn write_positions<W: Write>(positions: &[PositionRisk], out: &mut W) -> std::io::Result<()> {
    writeln!(out, "\n=== Open Positions ===")?;
    if positions.is_empty() {
        writeln!(out, "(none)")?;
    }
    for p in positions {
        write!(
            out,
            "{} side={} amt={} entry={} mark={} uPnL={} leverage={} margin={}",
            p.symbol,
            p.position_side,
            p.position_amt,
            p.entry_price,
            p.mark_price,
            p.un_realized_profit,
            p.leverage,
            p.margin_type
        )?;
        write_extra(&p.extra, out)?;
    }
    Ok(())
}

/// Remaining response fields, printed as the exchange sent them
fn write_extra<W: Write>(extra: &Map<String, Value>, out: &mut W) -> std::io::Result<()> {
    for (key, value) in extra {
        match value {
            Value::String(s) => write!(out, " {}={}", key, s)?,
            other => write!(out, " {}={}", key, other)?,
        }
    }
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response() -> OrderResponse {
        serde_json::from_value(serde_json::json!({
            "orderId": 4071512,
            "symbol": "BTCUSDT",
            "status": "NEW",
            "price": "30000.00",
            "origQty": "0.010",
            "executedQty": "0.000",
            "type": "LIMIT",
            "side": "BUY"
        }))
        .unwrap()
    }

    #[test]
    fn test_order_result_keys() {
        let mut out = Vec::new();
        write_order_result(&response(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let keys: Vec<&str> = text
            .lines()
            .filter_map(|l| l.split_once(": ").map(|(k, _)| k))
            .collect();
        assert_eq!(
            keys,
            vec!["symbol", "side", "type", "status", "orderId", "price", "origQty", "executedQty"]
        );
        assert!(text.contains("orderId: 4071512"));
    }

    #[test]
    fn test_unlisted_fields_pass_through() {
        let position: PositionRisk = serde_json::from_value(serde_json::json!({
            "symbol": "BTCUSDT",
            "positionAmt": "-0.010",
            "entryPrice": "61000.0",
            "isolatedMargin": "0.00000000",
            "isAutoAddMargin": "false"
        }))
        .unwrap();
        let mut order = response();
        order.extra.insert("reduceOnly".to_string(), Value::Bool(true));

        let mut out = Vec::new();
        write_open_orders(&[order], &mut out).unwrap();
        write_positions(&[position], &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("status=NEW reduceOnly=true\n"));
        assert!(text.contains("amt=-0.010"));
        assert!(text.contains(" isAutoAddMargin=false isolatedMargin=0.00000000\n"));
    }

    #[test]
    fn test_empty_sections() {
        let mut out = Vec::new();
        write_open_orders(&[], &mut out).unwrap();
        write_positions(&[], &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("=== Open Orders ===\n(none)"));
        assert!(text.contains("=== Open Positions ===\n(none)"));
    }
}
