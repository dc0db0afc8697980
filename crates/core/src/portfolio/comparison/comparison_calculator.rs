use log::debug;

use super::comparison_model::{AccountComparison, BestAccount};
use super::comparison_traits::PerformanceMeasure;
use crate::errors::Result;

/// Finds the accounts with the highest percentage and monetary change.
///
/// A single linear scan keeps the first strictly greater value, so ties go to
/// the account seen first. Returns `None` when `accounts` is empty.
pub fn compare_accounts<A: PerformanceMeasure>(accounts: &[A]) -> Result<Option<AccountComparison>> {
    let mut best_percentage: Option<BestAccount> = None;
    let mut best_monetary: Option<BestAccount> = None;

    for account in accounts {
        let percentage = account.percentage_change()?;
        let monetary = account.monetary_change();

        if best_percentage
            .as_ref()
            .map_or(true, |best| percentage > best.value)
        {
            best_percentage = Some(BestAccount {
                name: account.name().to_string(),
                value: percentage,
            });
        }

        if best_monetary
            .as_ref()
            .map_or(true, |best| monetary > best.value)
        {
            best_monetary = Some(BestAccount {
                name: account.name().to_string(),
                value: monetary,
            });
        }
    }

    let comparison = best_percentage
        .zip(best_monetary)
        .map(|(best_percentage, best_monetary)| AccountComparison {
            best_percentage,
            best_monetary,
        });

    if let Some(ref c) = comparison {
        debug!(
            "Compared {} accounts: best % {} ({}), best $ {} ({})",
            accounts.len(),
            c.best_percentage.name,
            c.best_percentage.value,
            c.best_monetary.name,
            c.best_monetary.value
        );
    }

    Ok(comparison)
}
