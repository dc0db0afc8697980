//! Persists rendered reports as text files.

use log::info;
use std::fs;
use std::path::{Path, PathBuf};

use super::reports_formatter::{render_account_summary, render_comparison_report};
use crate::accounts::InvestmentAccount;
use crate::errors::Error;
use crate::Result;

/// File name of the multi-account comparison report.
pub const COMPARISON_FILE_NAME: &str = "accounts_comparison.txt";

/// `<account-name>_summary.txt`, with path separators replaced by `_`.
pub fn summary_file_name(account_name: &str) -> String {
    let safe: String = account_name
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect();
    format!("{}_summary.txt", safe)
}

/// Writes report files into a single directory.
#[derive(Debug, Clone)]
pub struct ReportWriter {
    dir: PathBuf,
}

impl ReportWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Writes the summary of `account` and returns the file path.
    pub fn write_account_summary(&self, account: &InvestmentAccount) -> Result<PathBuf> {
        let path = self.dir.join(summary_file_name(account.name()));
        self.write(&path, &render_account_summary(account))?;
        Ok(path)
    }

    /// Writes every account block plus the comparison section.
    pub fn write_comparison(&self, accounts: &[InvestmentAccount]) -> Result<PathBuf> {
        let path = self.dir.join(COMPARISON_FILE_NAME);
        self.write(&path, &render_comparison_report(accounts))?;
        Ok(path)
    }

    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        fs::write(path, contents).map_err(|source| Error::FileWrite {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Wrote report {}", path.display());
        Ok(())
    }
}
