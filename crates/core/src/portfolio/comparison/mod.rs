//! Cross-account comparison.

mod comparison_calculator;
mod comparison_model;
mod comparison_traits;

pub use comparison_calculator::compare_accounts;
pub use comparison_model::{AccountComparison, BestAccount};
pub use comparison_traits::PerformanceMeasure;
