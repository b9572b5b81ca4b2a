// orderbot-common/src/filters.rs
// Exchange-specific filters (PRICE_FILTER, LOT_SIZE, MARKET_LOT_SIZE)

use rust_decimal::Decimal;

use crate::errors::{ValidationError, ValidationResult};
use crate::order::OrderParams;
use crate::types::OrderType;

/// Quantity bounds from either LOT_SIZE or MARKET_LOT_SIZE.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LotSize {
    pub min_qty: Decimal,
    pub max_qty: Decimal,
    pub step_size: Decimal,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PriceFilter {
    pub min_price: Decimal,
    pub max_price: Decimal,
    pub tick_size: Decimal,
}

/// Filter set for one symbol, fetched fresh for every order.
///
/// A `None` means the exchange did not publish that filter for the symbol,
/// in which case the matching checks are skipped. Inside a filter a zero
/// `max_*` or increment disables that single rule, as the exchange does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolFilters {
    pub price: Option<PriceFilter>,
    pub lot_size: Option<LotSize>,
    pub market_lot_size: Option<LotSize>,
}

impl SymbolFilters {
    pub fn validate_price(&self, price: Decimal) -> ValidationResult<()> {
        self.check_price("Price", price)
    }

    pub fn validate_stop_price(&self, stop_price: Decimal) -> ValidationResult<()> {
        self.check_price("Stop price", stop_price)
    }

    /// MARKET orders are bound by MARKET_LOT_SIZE when the symbol has one.
    pub fn validate_qty(&self, qty: Decimal, order_type: OrderType) -> ValidationResult<()> {
        let lot = match order_type {
            OrderType::Market => self.market_lot_size.or(self.lot_size),
            _ => self.lot_size,
        };
        let Some(lot) = lot else {
            return Ok(());
        };

        if qty < lot.min_qty {
            return Err(ValidationError::QtyBelowMin {
                qty,
                min_qty: lot.min_qty,
            });
        }
        if lot.max_qty > Decimal::ZERO && qty > lot.max_qty {
            return Err(ValidationError::QtyAboveMax {
                qty,
                max_qty: lot.max_qty,
            });
        }
        if !is_multiple_of(qty, lot.step_size) {
            return Err(ValidationError::QtyNotAligned {
                qty,
                step_size: lot.step_size,
            });
        }
        Ok(())
    }

    /// Check every price and quantity the payload is about to send.
    pub fn validate_order(&self, params: &OrderParams) -> ValidationResult<()> {
        if let Some(price) = params.price {
            self.validate_price(price)?;
        }
        if let Some(stop_price) = params.stop_price {
            self.validate_stop_price(stop_price)?;
        }
        self.validate_qty(params.quantity, params.order_type)
    }

    fn check_price(&self, field: &'static str, value: Decimal) -> ValidationResult<()> {
        let Some(filter) = self.price else {
            return Ok(());
        };

        if value < filter.min_price {
            return Err(ValidationError::PriceBelowMin {
                field,
                value,
                min_price: filter.min_price,
            });
        }
        if filter.max_price > Decimal::ZERO && value > filter.max_price {
            return Err(ValidationError::PriceAboveMax {
                field,
                value,
                max_price: filter.max_price,
            });
        }
        if !is_multiple_of(value, filter.tick_size) {
            return Err(ValidationError::PriceNotAligned {
                field,
                value,
                tick_size: filter.tick_size,
            });
        }
        Ok(())
    }
}

/// Exact in decimal arithmetic; a zero increment means "any value".
fn is_multiple_of(value: Decimal, increment: Decimal) -> bool {
    if increment <= Decimal::ZERO {
        return true;
    }
    (value % increment).is_zero()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{OrderRequest, Side};
    use rust_decimal_macros::dec;

    fn btc_filters() -> SymbolFilters {
        SymbolFilters {
            price: Some(PriceFilter {
                min_price: dec!(0.10),
                max_price: dec!(1000000),
                tick_size: dec!(0.01),
            }),
            lot_size: Some(LotSize {
                min_qty: dec!(0.001),
                max_qty: dec!(1000),
                step_size: dec!(0.001),
            }),
            market_lot_size: Some(LotSize {
                min_qty: dec!(0.001),
                max_qty: dec!(120),
                step_size: dec!(0.001),
            }),
        }
    }

    #[test]
    fn test_tick_alignment() {
        let filters = btc_filters();
        assert!(filters.validate_price(dec!(100.00)).is_ok());
        assert!(filters.validate_price(dec!(100.01)).is_ok());

        let err = filters.validate_price(dec!(100.005)).unwrap_err();
        assert!(matches!(err, ValidationError::PriceNotAligned { .. }));
        assert_eq!(err.to_string(), "Price 100.005 not aligned with tickSize 0.01");
    }

    #[test]
    fn test_price_bounds() {
        let filters = btc_filters();
        assert!(matches!(
            filters.validate_price(dec!(0.05)),
            Err(ValidationError::PriceBelowMin { .. })
        ));
        assert!(matches!(
            filters.validate_price(dec!(2000000)),
            Err(ValidationError::PriceAboveMax { .. })
        ));
        assert!(filters.validate_price(dec!(0.10)).is_ok());
    }

    #[test]
    fn test_zero_max_and_tick_disable_rule() {
        let filters = SymbolFilters {
            price: Some(PriceFilter {
                min_price: dec!(1),
                max_price: Decimal::ZERO,
                tick_size: Decimal::ZERO,
            }),
            ..Default::default()
        };
        assert!(filters.validate_price(dec!(123456789.123456)).is_ok());
    }

    #[test]
    fn test_missing_filters_are_skipped() {
        let filters = SymbolFilters::default();
        assert!(filters.validate_price(dec!(0.000001)).is_ok());
        assert!(filters.validate_qty(dec!(0.000001), OrderType::Limit).is_ok());
    }

    #[test]
    fn test_qty_rules() {
        let filters = btc_filters();
        assert!(filters.validate_qty(dec!(0.002), OrderType::Limit).is_ok());
        assert!(matches!(
            filters.validate_qty(dec!(0.0005), OrderType::Limit),
            Err(ValidationError::QtyBelowMin { .. })
        ));
        assert!(matches!(
            filters.validate_qty(dec!(0.0015), OrderType::Limit),
            Err(ValidationError::QtyNotAligned { .. })
        ));
        assert!(matches!(
            filters.validate_qty(dec!(1001), OrderType::Limit),
            Err(ValidationError::QtyAboveMax { .. })
        ));
    }

    #[test]
    fn test_market_uses_market_lot_size() {
        let filters = btc_filters();
        // Within LOT_SIZE, beyond MARKET_LOT_SIZE
        assert!(filters.validate_qty(dec!(500), OrderType::Limit).is_ok());
        assert!(matches!(
            filters.validate_qty(dec!(500), OrderType::Market),
            Err(ValidationError::QtyAboveMax { .. })
        ));

        let no_market = SymbolFilters {
            market_lot_size: None,
            ..btc_filters()
        };
        assert!(no_market.validate_qty(dec!(500), OrderType::Market).is_ok());
    }

    #[test]
    fn test_validate_order_checks_stop_price() {
        let filters = btc_filters();
        let request = OrderRequest::stop_limit(
            "BTCUSDT",
            Side::Sell,
            dec!(0.010),
            dec!(100.00),
            dec!(99.995),
        );
        let params = OrderParams::from_request(&request).unwrap();

        let err = filters.validate_order(&params).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Stop price 99.995 not aligned with tickSize 0.01"
        );
    }

    #[test]
    fn test_every_aligned_price_passes() {
        let filters = btc_filters();
        for ticks in [10_i64, 11, 999, 10_000, 6_543_210] {
            let price = Decimal::new(ticks, 2);
            assert!(filters.validate_price(price).is_ok(), "{} should pass", price);
            let off = price + dec!(0.001);
            assert!(filters.validate_price(off).is_err(), "{} should fail", off);
        }
    }
}
