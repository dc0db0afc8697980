use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The winning account for one metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BestAccount {
    pub name: String,
    pub value: Decimal,
}

/// Best accounts by percentage and by monetary change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountComparison {
    pub best_percentage: BestAccount,
    pub best_monetary: BestAccount,
}
