use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Daily closing prices for a single symbol.
///
/// Dates are kept in a `BTreeMap`, so the most recent close is the
/// chronologically greatest key rather than the lexically greatest string.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    /// Ticker symbol the closes belong to
    pub symbol: String,

    /// Source of the closes (ALPHA_VANTAGE, MANUAL, etc.)
    pub source: String,

    closes: BTreeMap<NaiveDate, Decimal>,
}

impl PriceSeries {
    /// Create an empty series
    pub fn new(symbol: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            source: source.into(),
            closes: BTreeMap::new(),
        }
    }

    /// Create a series from (date, close) pairs. Later duplicates win.
    pub fn from_closes<I>(symbol: impl Into<String>, source: impl Into<String>, closes: I) -> Self
    where
        I: IntoIterator<Item = (NaiveDate, Decimal)>,
    {
        Self {
            symbol: symbol.into(),
            source: source.into(),
            closes: closes.into_iter().collect(),
        }
    }

    pub fn insert(&mut self, date: NaiveDate, close: Decimal) {
        self.closes.insert(date, close);
    }

    /// Close on exactly `date`. No fill-forward or fill-backward.
    pub fn close_on(&self, date: NaiveDate) -> Option<Decimal> {
        self.closes.get(&date).copied()
    }

    /// Most recent (date, close) in the series.
    pub fn latest(&self) -> Option<(NaiveDate, Decimal)> {
        self.closes
            .last_key_value()
            .map(|(date, close)| (*date, *close))
    }

    pub fn latest_date(&self) -> Option<NaiveDate> {
        self.latest().map(|(date, _)| date)
    }

    pub fn earliest_date(&self) -> Option<NaiveDate> {
        self.closes.first_key_value().map(|(date, _)| *date)
    }

    pub fn len(&self) -> usize {
        self.closes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.closes.is_empty()
    }

    /// Iterate closes in ascending date order
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, Decimal)> + '_ {
        self.closes.iter().map(|(date, close)| (*date, *close))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_latest_uses_date_order() {
        let series = PriceSeries::from_closes(
            "ABC",
            "TEST",
            vec![
                (date(2024, 1, 3), dec!(55)),
                (date(2023, 12, 29), dec!(48)),
                (date(2024, 1, 2), dec!(50)),
            ],
        );

        assert_eq!(series.latest(), Some((date(2024, 1, 3), dec!(55))));
        assert_eq!(series.earliest_date(), Some(date(2023, 12, 29)));
        assert_eq!(series.len(), 3);
    }

    #[test]
    fn test_close_on_exact_date_only() {
        let mut series = PriceSeries::new("ABC", "TEST");
        series.insert(date(2024, 1, 2), dec!(50));
        series.insert(date(2024, 1, 4), dec!(52));

        assert_eq!(series.close_on(date(2024, 1, 2)), Some(dec!(50)));
        assert_eq!(series.close_on(date(2024, 1, 3)), None);
    }

    #[test]
    fn test_empty_series() {
        let series = PriceSeries::new("ABC", "TEST");
        assert!(series.is_empty());
        assert_eq!(series.latest(), None);
        assert_eq!(series.latest_date(), None);
    }

    #[test]
    fn test_iter_is_ascending() {
        let series = PriceSeries::from_closes(
            "ABC",
            "TEST",
            vec![(date(2024, 2, 1), dec!(2)), (date(2024, 1, 1), dec!(1))],
        );
        let dates: Vec<NaiveDate> = series.iter().map(|(d, _)| d).collect();
        assert_eq!(dates, vec![date(2024, 1, 1), date(2024, 2, 1)]);
    }
}
