//! Interactive collection of accounts and presentation of the results.

use std::io::{self, BufRead, Write};

use invtrack_core::errors::Error;
use invtrack_core::reports::{render_account_summary, render_comparison, ReportWriter};
use invtrack_core::{compare_accounts, InvestmentAccount};
use invtrack_market_data::QuoteProvider;

use crate::prompt::Prompter;

pub const API_KEY_PROMPT: &str = "Please enter API Key: ";
const ACCOUNT_NAME_PROMPT: &str = "What would you like to name your investment account? ";
const SYMBOL_PROMPT: &str = "Please enter stock symbol you would like to invest in (XXX format): ";
const DATE_PROMPT: &str =
    "Please enter the date of this investment in year-month-day format (xxxx-xx-xx): ";
const MORE_TRADES_PROMPT: &str = "Do you have any more investments? (Y/N): ";
const MORE_ACCOUNTS_PROMPT: &str = "Do you want to add another investment account? (Y/N): ";

/// Asks for accounts and their trades until the user declines to add more.
pub async fn collect_accounts<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    provider: &dyn QuoteProvider,
) -> io::Result<Vec<InvestmentAccount>> {
    let mut accounts = Vec::new();
    loop {
        let name = prompter.ask(ACCOUNT_NAME_PROMPT)?;
        accounts.push(collect_account(prompter, provider, name).await?);
        if !prompter.ask_yes_no(MORE_ACCOUNTS_PROMPT)? {
            break;
        }
    }
    Ok(accounts)
}

async fn collect_account<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    provider: &dyn QuoteProvider,
    name: String,
) -> io::Result<InvestmentAccount> {
    let mut account = InvestmentAccount::new(name);
    loop {
        let symbol = prompter.ask_symbol(SYMBOL_PROMPT)?;
        let date = prompter.ask_trade_date(DATE_PROMPT)?;
        let amount =
            prompter.ask_amount(&format!("How much did you invest in {} on {}? ", symbol, date))?;

        if let Err(err) = account
            .record_and_valuate(provider, &symbol, date, amount)
            .await
        {
            tracing::warn!("Skipping {} trade in account {}: {}", symbol, account.name(), err);
            prompter.say(&describe_rejected_trade(&err))?;
        }

        if !prompter.ask_yes_no(MORE_TRADES_PROMPT)? {
            break;
        }
    }
    Ok(account)
}

fn describe_rejected_trade(err: &Error) -> String {
    match err {
        Error::MarketData(e) if e.is_transport() => {
            format!("Investment not recorded, the quote service could not be reached: {}", e)
        }
        e if e.is_missing_price() => {
            format!("Investment not recorded, that date was not a trading day: {}", e)
        }
        e => format!("Investment not recorded: {}", e),
    }
}

/// Prints every summary, then compares and saves the reports.
///
/// With more than one account only the comparison file is written; a single
/// account gets its own summary file. Save failures are reported and do not
/// stop the remaining files.
pub fn present<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    accounts: &[InvestmentAccount],
    writer: &ReportWriter,
) -> io::Result<()> {
    prompter.say("\nStep 2: Displaying account summaries.")?;
    for account in accounts {
        prompter.print(&format!("\n{}", render_account_summary(account)))?;
    }

    if accounts.len() > 1 {
        prompter.say("\nStep 3: Comparing accounts.")?;
        match compare_accounts(accounts) {
            Ok(Some(comparison)) => {
                prompter.print(&format!("\n{}", render_comparison(&comparison)))?
            }
            Ok(None) => {}
            Err(err) => prompter.say(&format!("\nCould not compare accounts: {}", err))?,
        }

        prompter.say("\nStep 4: Saving account summaries and comparison to a file.")?;
        match writer.write_comparison(accounts) {
            Ok(path) => prompter.say(&format!("Comparison saved to {}", path.display()))?,
            Err(err) => report_save_error(prompter, err)?,
        }
    } else {
        prompter.say("\nStep 3: Saving account summaries to files.")?;
        for account in accounts {
            match writer.write_account_summary(account) {
                Ok(path) => prompter.say(&format!(
                    "Summary for {} saved to {}",
                    account.name(),
                    path.display()
                ))?,
                Err(err) => report_save_error(prompter, err)?,
            }
        }
    }

    prompter.say("\nAll steps completed. Thank you for using the Investment Tracker!")
}

fn report_save_error<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    err: Error,
) -> io::Result<()> {
    tracing::error!("{}", err);
    prompter.say(&err.to_string())
}
