//! Investment account domain model.

use chrono::NaiveDate;
use invtrack_market_data::{PriceSeries, QuoteProvider};
use log::{debug, info};
use rust_decimal::Decimal;
use std::collections::HashMap;

use crate::errors::{CalculatorError, ValidationError};
use crate::portfolio::comparison::PerformanceMeasure;
use crate::portfolio::valuation::{self, PositionValuation};
use crate::trades::{normalize_symbol, NewTrade, Trade};
use crate::Result;

/// A named account holding an append-only list of trades.
///
/// Price series are fetched lazily on the first trade of a symbol and kept for
/// the lifetime of the account. Current values are cached per symbol and only
/// change when [`valuate`](Self::valuate) runs, so callers must re-valuate a
/// symbol after recording new trades on it before reading aggregates.
#[derive(Debug, Clone, Default)]
pub struct InvestmentAccount {
    name: String,
    trades: Vec<Trade>,
    /// Symbols in the order they were first traded
    symbols: Vec<String>,
    price_cache: HashMap<String, PriceSeries>,
    invested: HashMap<String, Decimal>,
    current_values: HashMap<String, Decimal>,
    shares: HashMap<String, Decimal>,
    /// Number of trades on each symbol covered by its cached current value
    valued_trade_counts: HashMap<String, usize>,
}

impl InvestmentAccount {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn trades(&self) -> &[Trade] {
        &self.trades
    }

    /// Symbols in first-traded order.
    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    /// Fetches and memoizes the daily closes for `symbol`.
    ///
    /// The provider is called at most once per symbol for this account.
    pub async fn ensure_prices(
        &mut self,
        provider: &dyn QuoteProvider,
        symbol: &str,
    ) -> Result<&PriceSeries> {
        let symbol = normalize_symbol(symbol)?;
        if !self.price_cache.contains_key(&symbol) {
            let series = provider.fetch_daily_closes(&symbol).await?;
            info!(
                "Fetched {} daily closes for {} from {}",
                series.len(),
                symbol,
                provider.id()
            );
            self.price_cache.insert(symbol.clone(), series);
        }
        self.price_cache
            .get(&symbol)
            .ok_or_else(|| CalculatorError::NoPriceData(symbol).into())
    }

    /// Stores an already-fetched series, replacing nothing that is cached.
    pub fn cache_prices(&mut self, series: PriceSeries) {
        let symbol = series.symbol.trim().to_uppercase();
        self.price_cache.entry(symbol).or_insert(series);
    }

    pub fn price_series(&self, symbol: &str) -> Option<&PriceSeries> {
        self.price_cache.get(&symbol.trim().to_uppercase())
    }

    /// Close of `symbol` on exactly `date`, when its prices are cached.
    pub fn close_on(&self, symbol: &str, date: NaiveDate) -> Option<Decimal> {
        self.price_series(symbol)
            .and_then(|series| series.close_on(date))
    }

    /// Records a purchase of `amount` of `symbol` on `date`.
    ///
    /// Fetches the symbol's prices if they are not cached yet. The trade is
    /// rejected when `amount` is not positive, when it would push the account
    /// total past what a `Decimal` can hold, or when `date` is after the latest
    /// available close. On error the account is left unchanged apart from the
    /// price cache.
    pub async fn record_trade(
        &mut self,
        provider: &dyn QuoteProvider,
        symbol: &str,
        date: NaiveDate,
        amount: Decimal,
    ) -> Result<&Trade> {
        let trade = self.prepare_trade(provider, symbol, date, amount).await?;
        Ok(self.commit_trade(trade))
    }

    /// Records a trade and valuates its symbol in one step.
    ///
    /// The position is computed with the new trade included before anything is
    /// stored, so a trade whose symbol cannot be valued (no close on its date,
    /// zero close, overflow) is not recorded at all.
    pub async fn record_and_valuate(
        &mut self,
        provider: &dyn QuoteProvider,
        symbol: &str,
        date: NaiveDate,
        amount: Decimal,
    ) -> Result<PositionValuation> {
        let trade = self.prepare_trade(provider, symbol, date, amount).await?;
        let series = self
            .price_cache
            .get(&trade.symbol)
            .ok_or_else(|| CalculatorError::NoPriceData(trade.symbol.clone()))?;
        let position = valuation::calculate_position(
            &trade.symbol,
            self.trades.iter().chain(std::iter::once(&trade)),
            series,
        )?;
        self.check_total_value(&position)?;

        self.commit_trade(trade);
        self.store_valuation(&position);
        Ok(position)
    }

    async fn prepare_trade(
        &mut self,
        provider: &dyn QuoteProvider,
        symbol: &str,
        date: NaiveDate,
        amount: Decimal,
    ) -> Result<Trade> {
        let trade = NewTrade::new(symbol, date, amount).validate()?;
        if self.total_invested().checked_add(trade.amount).is_none() {
            return Err(ValidationError::InvalidAmount(format!(
                "{} would overflow the total invested in account {}",
                trade.amount, self.name
            ))
            .into());
        }

        let series = self.ensure_prices(provider, &trade.symbol).await?;
        let latest = series
            .latest_date()
            .ok_or_else(|| CalculatorError::NoPriceData(trade.symbol.clone()))?;
        if trade.date > latest {
            return Err(ValidationError::TradeAfterLatestClose {
                symbol: trade.symbol,
                date: trade.date,
                latest,
            }
            .into());
        }
        Ok(trade)
    }

    fn commit_trade(&mut self, trade: Trade) -> &Trade {
        if !self.symbols.contains(&trade.symbol) {
            self.symbols.push(trade.symbol.clone());
        }
        // Bounded by the account total checked in prepare_trade.
        let invested = self.invested_in(&trade.symbol) + trade.amount;
        self.invested.insert(trade.symbol.clone(), invested);

        debug!(
            "Account {}: recorded {} of {} on {}",
            self.name, trade.amount, trade.symbol, trade.date
        );
        self.trades.push(trade);
        &self.trades[self.trades.len() - 1]
    }

    /// Recomputes and stores the current value of `symbol`.
    ///
    /// Fails with `NoPriceData` when no prices are cached for the symbol, with
    /// `NoPriceOnDate` when a trade date has no close and with `Overflow` when
    /// the account total would no longer fit. Nothing is stored on failure.
    pub fn valuate(&mut self, symbol: &str) -> Result<PositionValuation> {
        let symbol = normalize_symbol(symbol)?;
        let series = self
            .price_cache
            .get(&symbol)
            .ok_or_else(|| CalculatorError::NoPriceData(symbol.clone()))?;

        let position = valuation::calculate_position(&symbol, &self.trades, series)?;
        self.check_total_value(&position)?;

        self.store_valuation(&position);
        Ok(position)
    }

    /// Keeps the sum of current values representable.
    fn check_total_value(&self, position: &PositionValuation) -> Result<()> {
        self.current_values
            .iter()
            .filter(|(symbol, _)| **symbol != position.symbol)
            .try_fold(position.current_value, |total, (_, value)| {
                total.checked_add(*value)
            })
            .map(|_| ())
            .ok_or_else(|| {
                CalculatorError::Overflow(format!(
                    "total value of account {} with {} at {}",
                    self.name, position.symbol, position.current_value
                ))
                .into()
            })
    }

    fn store_valuation(&mut self, position: &PositionValuation) {
        self.current_values
            .insert(position.symbol.clone(), position.current_value);
        self.shares.insert(position.symbol.clone(), position.shares);
        self.valued_trade_counts
            .insert(position.symbol.clone(), position.trade_count);
    }

    /// Valuates every traded symbol in first-traded order.
    ///
    /// Stops at the first failing symbol; symbols valued before it keep their
    /// new values.
    pub fn valuate_all(&mut self) -> Result<Decimal> {
        let symbols = self.symbols.clone();
        for symbol in &symbols {
            self.valuate(symbol)?;
        }
        Ok(self.total_value())
    }

    /// True when trades were recorded on `symbol` after its last valuation.
    pub fn is_stale(&self, symbol: &str) -> bool {
        let symbol = symbol.trim().to_uppercase();
        let traded = self.trades.iter().filter(|t| t.symbol == symbol).count();
        let valued = self.valued_trade_counts.get(&symbol).copied().unwrap_or(0);
        traded != valued
    }

    /// Total invested in `symbol`.
    pub fn invested_in(&self, symbol: &str) -> Decimal {
        self.invested
            .get(&symbol.trim().to_uppercase())
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    /// Cached current value of `symbol`, if it has been valuated.
    pub fn current_value_of(&self, symbol: &str) -> Option<Decimal> {
        self.current_values
            .get(&symbol.trim().to_uppercase())
            .copied()
    }

    /// Shares of `symbol` as of its last valuation.
    pub fn shares_held(&self, symbol: &str) -> Option<Decimal> {
        self.shares.get(&symbol.trim().to_uppercase()).copied()
    }

    /// (symbol, total invested) in first-traded order.
    pub fn invested_by_symbol(&self) -> Vec<(&str, Decimal)> {
        self.symbols
            .iter()
            .map(|s| (s.as_str(), self.invested.get(s).copied().unwrap_or(Decimal::ZERO)))
            .collect()
    }

    /// (symbol, current value) in first-traded order, valuated symbols only.
    pub fn current_values(&self) -> Vec<(&str, Decimal)> {
        self.symbols
            .iter()
            .filter_map(|s| self.current_values.get(s).map(|v| (s.as_str(), *v)))
            .collect()
    }

    pub fn total_invested(&self) -> Decimal {
        self.invested.values().copied().sum()
    }

    /// Sum of cached current values. Symbols never valuated contribute nothing.
    pub fn total_value(&self) -> Decimal {
        self.current_values.values().copied().sum()
    }

    pub fn percentage_change(&self) -> Result<Decimal> {
        valuation::percentage_change(self.total_value(), self.total_invested())
    }

    pub fn monetary_change(&self) -> Decimal {
        valuation::monetary_change(self.total_value(), self.total_invested())
    }
}

impl PerformanceMeasure for InvestmentAccount {
    fn name(&self) -> &str {
        InvestmentAccount::name(self)
    }

    fn percentage_change(&self) -> Result<Decimal> {
        InvestmentAccount::percentage_change(self)
    }

    fn monetary_change(&self) -> Decimal {
        InvestmentAccount::monetary_change(self)
    }
}
