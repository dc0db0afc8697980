//! Reports module - plain-text account summaries and comparisons.

mod reports_formatter;
mod reports_writer;

pub use reports_formatter::{
    format_money, render_account_summary, render_comparison, render_comparison_report,
    SEPARATOR,
};
pub use reports_writer::{summary_file_name, ReportWriter, COMPARISON_FILE_NAME};
