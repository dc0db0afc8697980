//! Position valuation domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Valuation of every trade on one symbol against its latest close.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PositionValuation {
    pub symbol: String,
    pub trade_count: usize,
    pub shares: Decimal,
    pub invested: Decimal,
    pub latest_date: NaiveDate,
    pub latest_close: Decimal,
    pub current_value: Decimal,
}
