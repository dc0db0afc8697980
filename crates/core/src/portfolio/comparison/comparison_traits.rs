//! Trait describing what the comparator needs from an account.

use rust_decimal::Decimal;

use crate::errors::Result;

/// Read-only performance figures of a named account.
pub trait PerformanceMeasure {
    fn name(&self) -> &str;

    /// Relative gain or loss in percent. Fails when nothing was invested.
    fn percentage_change(&self) -> Result<Decimal>;

    /// Absolute gain or loss.
    fn monetary_change(&self) -> Decimal;
}
