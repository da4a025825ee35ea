// crates/report-client/src/export.rs

use clap::ValueEnum;

use report_protocol::{export_csv, CsvError};

use crate::app::AccountData;

/// Which table of an account to export as CSV.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportKind {
    /// Parsed trade records.
    Trades,
    /// Cumulative profit series.
    Cumulative,
    /// Per-symbol profit ranking.
    Symbols,
}

impl ExportKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ExportKind::Trades => "trades",
            ExportKind::Cumulative => "cumulative",
            ExportKind::Symbols => "symbols",
        }
    }

    /// `{account}-{kind}.csv`
    pub fn file_name(self, account: &str) -> String {
        format!("{}-{}.csv", account, self.as_str())
    }
}

pub fn export_account(kind: ExportKind, data: &AccountData) -> Result<String, CsvError> {
    match kind {
        ExportKind::Trades => export_csv(&data.trades),
        ExportKind::Cumulative => export_csv(&data.report.series.cumulative_profit),
        ExportKind::Symbols => export_csv(&data.report.series.top_symbols),
    }
}
