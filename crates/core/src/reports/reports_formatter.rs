//! Text rendering of account summaries.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::accounts::InvestmentAccount;
use crate::portfolio::comparison::{compare_accounts, AccountComparison};

/// Rule printed above and below every account block.
pub const SEPARATOR: &str = "========================================";

/// Formats a value with exactly two decimals, rounding half away from zero.
pub fn format_money(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", rounded)
}

/// Renders the summary block of one account.
///
/// Symbols are listed in first-traded order; only valuated symbols appear
/// under "Current Values". A percentage change that cannot be computed
/// (nothing invested) is shown as `N/A`.
pub fn render_account_summary(account: &InvestmentAccount) -> String {
    let mut out = format!("Investment Account Summary: {}\n", account.name());
    out.push_str(SEPARATOR);
    out.push('\n');

    out.push_str("Original Investments:\n");
    for (symbol, amount) in account.invested_by_symbol() {
        out.push_str(&money_line(symbol, amount));
    }

    out.push_str("\nCurrent Values:\n");
    for (symbol, value) in account.current_values() {
        out.push_str(&money_line(symbol, value));
    }

    let percentage = match account.percentage_change() {
        Ok(pct) => format!("{}%", format_money(pct)),
        Err(_) => "N/A".to_string(),
    };
    out.push_str(&format!(
        "\nTotal Invested: ${}\n\
         Total Current Value: ${}\n\
         Percentage Change: {}\n\
         Monetary Change: ${}\n",
        format_money(account.total_invested()),
        format_money(account.total_value()),
        percentage,
        format_money(account.monetary_change()),
    ));
    out.push_str(SEPARATOR);
    out.push('\n');

    out
}

fn money_line(symbol: &str, amount: Decimal) -> String {
    format!("  - {}: ${}\n", symbol, format_money(amount))
}

/// Renders the "Comparison of Accounts" section.
pub fn render_comparison(comparison: &AccountComparison) -> String {
    format!(
        "Comparison of Accounts:\n\
         The account with the highest percentage growth is {} with {}%.\n\
         The account with the highest monetary growth is {} with ${}.\n",
        comparison.best_percentage.name,
        format_money(comparison.best_percentage.value),
        comparison.best_monetary.name,
        format_money(comparison.best_monetary.value),
    )
}

/// Renders every account block followed by the comparison section.
///
/// When the accounts cannot be compared (one of them has nothing invested)
/// the blocks are still rendered and the section says why.
pub fn render_comparison_report(accounts: &[InvestmentAccount]) -> String {
    let mut out = String::new();
    for account in accounts {
        out.push_str(&render_account_summary(account));
        out.push('\n');
    }
    match compare_accounts(accounts) {
        Ok(Some(comparison)) => {
            out.push('\n');
            out.push_str(&render_comparison(&comparison));
        }
        Ok(None) => {}
        Err(err) => {
            out.push_str(&format!("\nComparison of Accounts:\nNot available: {}\n", err));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::comparison::BestAccount;
    use chrono::NaiveDate;
    use invtrack_market_data::{MarketDataError, PriceSeries, QuoteProvider};
    use rust_decimal_macros::dec;

    struct UnusedProvider;

    #[async_trait::async_trait]
    impl QuoteProvider for UnusedProvider {
        fn id(&self) -> &'static str {
            "UNUSED"
        }

        async fn fetch_daily_closes(&self, symbol: &str) -> std::result::Result<PriceSeries, MarketDataError> {
            Err(MarketDataError::DataUnavailable {
                symbol: symbol.to_string(),
                detail: "not cached".to_string(),
            })
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    async fn abc_account(name: &str, amount: Decimal) -> InvestmentAccount {
        let mut account = InvestmentAccount::new(name);
        account.cache_prices(PriceSeries::from_closes(
            "ABC",
            "TEST",
            vec![(date(2024, 1, 2), dec!(50)), (date(2024, 1, 3), dec!(55))],
        ));
        account
            .record_trade(&UnusedProvider, "ABC", date(2024, 1, 2), amount)
            .await
            .unwrap();
        account.valuate("ABC").unwrap();
        account
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(dec!(1100)), "1100.00");
        assert_eq!(format_money(dec!(10.005)), "10.01");
        assert_eq!(format_money(dec!(-100)), "-100.00");
        assert_eq!(format_money(dec!(3.14159)), "3.14");
        assert_eq!(format_money(dec!(0)), "0.00");
    }

    #[tokio::test]
    async fn test_render_account_summary() {
        let account = abc_account("Main", dec!(1000)).await;

        let expected = "\
Investment Account Summary: Main
========================================
Original Investments:
  - ABC: $1000.00

Current Values:
  - ABC: $1100.00

Total Invested: $1000.00
Total Current Value: $1100.00
Percentage Change: 10.00%
Monetary Change: $100.00
========================================
";
        assert_eq!(render_account_summary(&account), expected);
    }

    #[test]
    fn test_render_empty_account_shows_na() {
        let account = InvestmentAccount::new("Empty");
        let text = render_account_summary(&account);
        assert!(text.contains("Percentage Change: N/A\n"));
        assert!(text.contains("Total Invested: $0.00\n"));
    }

    #[tokio::test]
    async fn test_render_comparison_report_with_empty_account() {
        let accounts = vec![
            abc_account("Funded", dec!(1000)).await,
            InvestmentAccount::new("Empty"),
        ];

        let report = render_comparison_report(&accounts);

        assert!(report.contains("Investment Account Summary: Funded\n"));
        assert!(report.contains("Investment Account Summary: Empty\n"));
        assert!(report.ends_with(
            "\n\nComparison of Accounts:\n\
             Not available: Valuation failed: Division by zero: total invested is zero\n"
        ));
    }

    #[test]
    fn test_render_comparison() {
        let comparison = AccountComparison {
            best_percentage: BestAccount {
                name: "Growth".to_string(),
                value: dec!(12.345),
            },
            best_monetary: BestAccount {
                name: "Large".to_string(),
                value: dec!(250),
            },
        };
        assert_eq!(
            render_comparison(&comparison),
            "Comparison of Accounts:\n\
             The account with the highest percentage growth is Growth with 12.35%.\n\
             The account with the highest monetary growth is Large with $250.00.\n"
        );
    }

    #[tokio::test]
    async fn test_render_comparison_report() {
        let accounts = vec![
            abc_account("First", dec!(1000)).await,
            abc_account("Second", dec!(2000)).await,
        ];

        let report = render_comparison_report(&accounts);
        let first = render_account_summary(&accounts[0]);
        let second = render_account_summary(&accounts[1]);

        assert!(report.starts_with(&format!("{}\n{}\n", first, second)));
        assert!(report.contains("\n\nComparison of Accounts:\n"));
        assert!(report.ends_with(
            "The account with the highest percentage growth is First with 10.00%.\n\
             The account with the highest monetary growth is Second with $200.00.\n"
        ));
    }
}
