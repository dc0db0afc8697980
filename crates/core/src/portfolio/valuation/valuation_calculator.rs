use crate::errors::{CalculatorError, Result};
use crate::portfolio::valuation::PositionValuation;
use crate::trades::Trade;

use invtrack_market_data::PriceSeries;
use log::{debug, warn};
use rust_decimal::Decimal;

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Values every trade on `symbol` against `series`.
///
/// Each trade buys `amount / close_on(trade.date)` shares; the summed shares are
/// priced at the close of the latest date in the series. A trade date absent
/// from the series fails the whole position with `NoPriceOnDate`.
///
/// # Arguments
///
/// * `symbol` - The symbol to value. Trades on other symbols are ignored.
/// * `trades` - The account's trades.
/// * `series` - Daily closes for `symbol`.
pub fn calculate_position<'a, I>(
    symbol: &str,
    trades: I,
    series: &PriceSeries,
) -> Result<PositionValuation>
where
    I: IntoIterator<Item = &'a Trade>,
{
    let (latest_date, latest_close) = series
        .latest()
        .ok_or_else(|| CalculatorError::NoPriceData(symbol.to_string()))?;

    let mut shares = Decimal::ZERO;
    let mut invested = Decimal::ZERO;
    let mut trade_count = 0usize;

    for trade in trades.into_iter().filter(|t| t.symbol == symbol) {
        let price_at_purchase = series.close_on(trade.date).ok_or_else(|| {
            warn!(
                "No close for {} on {}; series covers {:?}..={}",
                symbol,
                trade.date,
                series.earliest_date(),
                latest_date
            );
            CalculatorError::NoPriceOnDate {
                symbol: symbol.to_string(),
                date: trade.date,
            }
        })?;
        shares = checked_add(shares, shares_for(trade, price_at_purchase)?, symbol)?;
        invested = checked_add(invested, trade.amount, symbol)?;
        trade_count += 1;
    }

    let current_value = shares.checked_mul(latest_close).ok_or_else(|| {
        CalculatorError::Overflow(format!(
            "{} shares of {} at {}",
            shares, symbol, latest_close
        ))
    })?;
    debug!(
        "Valued {} trades on {}: {} shares x {} ({}) = {}",
        trade_count, symbol, shares, latest_close, latest_date, current_value
    );

    Ok(PositionValuation {
        symbol: symbol.to_string(),
        trade_count,
        shares,
        invested,
        latest_date,
        latest_close,
        current_value,
    })
}

fn checked_add(total: Decimal, value: Decimal, symbol: &str) -> Result<Decimal> {
    total
        .checked_add(value)
        .ok_or_else(|| CalculatorError::Overflow(format!("running total for {}", symbol)).into())
}

/// Shares bought by `trade` at `price`.
pub fn shares_for(trade: &Trade, price: Decimal) -> Result<Decimal> {
    if price.is_zero() {
        return Err(CalculatorError::DivisionByZero(format!(
            "close price for {} on {} is {}",
            trade.symbol, trade.date, price
        ))
        .into());
    }
    trade.amount.checked_div(price).ok_or_else(|| {
        CalculatorError::Overflow(format!(
            "{} of {} at {} on {}",
            trade.amount, trade.symbol, price, trade.date
        ))
        .into()
    })
}

/// `(total_value / total_invested) * 100 - 100`.
pub fn percentage_change(total_value: Decimal, total_invested: Decimal) -> Result<Decimal> {
    if total_invested.is_zero() {
        return Err(CalculatorError::DivisionByZero("total invested is zero".to_string()).into());
    }
    total_value
        .checked_div(total_invested)
        .and_then(|ratio| ratio.checked_mul(HUNDRED))
        .and_then(|pct| pct.checked_sub(HUNDRED))
        .ok_or_else(|| {
            CalculatorError::Overflow(format!(
                "percentage change of {} over {}",
                total_value, total_invested
            ))
            .into()
        })
}

/// `total_value - total_invested`.
pub fn monetary_change(total_value: Decimal, total_invested: Decimal) -> Decimal {
    total_value - total_invested
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn trade(symbol: &str, d: NaiveDate, amount: Decimal) -> Trade {
        Trade {
            symbol: symbol.to_string(),
            date: d,
            amount,
        }
    }

    fn abc_series() -> PriceSeries {
        PriceSeries::from_closes(
            "ABC",
            "TEST",
            vec![(date(2024, 1, 2), dec!(50)), (date(2024, 1, 3), dec!(55))],
        )
    }

    #[test]
    fn test_single_trade_position() {
        let trades = vec![trade("ABC", date(2024, 1, 2), dec!(1000))];
        let position = calculate_position("ABC", &trades, &abc_series()).unwrap();

        assert_eq!(position.shares, dec!(20));
        assert_eq!(position.invested, dec!(1000));
        assert_eq!(position.latest_date, date(2024, 1, 3));
        assert_eq!(position.latest_close, dec!(55));
        assert_eq!(position.current_value, dec!(1100));
        assert_eq!(position.trade_count, 1);
    }

    #[test]
    fn test_multiple_trades_sum_shares() {
        let trades = vec![
            trade("ABC", date(2024, 1, 2), dec!(500)),
            trade("XYZ", date(2024, 1, 2), dec!(999)),
            trade("ABC", date(2024, 1, 3), dec!(550)),
        ];
        let position = calculate_position("ABC", &trades, &abc_series()).unwrap();

        // 10 shares + 10 shares
        assert_eq!(position.shares, dec!(20));
        assert_eq!(position.invested, dec!(1050));
        assert_eq!(position.current_value, dec!(1100));
        assert_eq!(position.trade_count, 2);
    }

    #[test]
    fn test_missing_trade_date_fails() {
        let trades = vec![
            trade("ABC", date(2024, 1, 2), dec!(500)),
            trade("ABC", date(2024, 1, 6), dec!(500)),
        ];
        let err = calculate_position("ABC", &trades, &abc_series()).unwrap_err();
        match err {
            Error::Calculation(CalculatorError::NoPriceOnDate { symbol, date: d }) => {
                assert_eq!(symbol, "ABC");
                assert_eq!(d, date(2024, 1, 6));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_empty_series_fails() {
        let trades = vec![trade("ABC", date(2024, 1, 2), dec!(500))];
        let err = calculate_position("ABC", &trades, &PriceSeries::new("ABC", "TEST"))
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Calculation(CalculatorError::NoPriceData(_))
        ));
    }

    #[test]
    fn test_zero_close_is_division_by_zero() {
        let series = PriceSeries::from_closes("ABC", "TEST", vec![(date(2024, 1, 2), dec!(0))]);
        let trades = vec![trade("ABC", date(2024, 1, 2), dec!(500))];
        let err = calculate_position("ABC", &trades, &series).unwrap_err();
        assert!(matches!(
            err,
            Error::Calculation(CalculatorError::DivisionByZero(_))
        ));
    }

    #[test]
    fn test_tiny_close_overflow_is_not_division_by_zero() {
        let series = PriceSeries::from_closes(
            "ABC",
            "TEST",
            vec![(date(2024, 1, 2), dec!(0.0000001))],
        );
        let trades = vec![trade("ABC", date(2024, 1, 2), Decimal::MAX)];

        let err = calculate_position("ABC", &trades, &series).unwrap_err();
        assert!(matches!(
            err,
            Error::Calculation(CalculatorError::Overflow(_))
        ));
    }

    #[test]
    fn test_large_position_value_overflow() {
        let series = PriceSeries::from_closes(
            "ABC",
            "TEST",
            vec![(date(2024, 1, 2), dec!(1)), (date(2024, 1, 3), dec!(1000))],
        );
        let trades = vec![trade("ABC", date(2024, 1, 2), dec!(50000000000000000000000000000))];

        let err = calculate_position("ABC", &trades, &series).unwrap_err();
        assert!(matches!(
            err,
            Error::Calculation(CalculatorError::Overflow(_))
        ));
    }

    #[test]
    fn test_percentage_change_overflow() {
        let err = percentage_change(dec!(50000000000000000000000000000), dec!(0.01)).unwrap_err();
        assert!(matches!(
            err,
            Error::Calculation(CalculatorError::Overflow(_))
        ));
    }

    #[test]
    fn test_percentage_change() {
        assert_eq!(percentage_change(dec!(1100), dec!(1000)).unwrap(), dec!(10));
        assert_eq!(percentage_change(dec!(750), dec!(1000)).unwrap(), dec!(-25));
        assert_eq!(percentage_change(dec!(0), dec!(1000)).unwrap(), dec!(-100));
    }

    #[test]
    fn test_percentage_change_zero_invested() {
        let err = percentage_change(dec!(0), dec!(0)).unwrap_err();
        assert!(matches!(
            err,
            Error::Calculation(CalculatorError::DivisionByZero(_))
        ));
    }

    #[test]
    fn test_monetary_change() {
        assert_eq!(monetary_change(dec!(1100), dec!(1000)), dec!(100));
        assert_eq!(monetary_change(dec!(900), dec!(1000)), dec!(-100));
    }
}
