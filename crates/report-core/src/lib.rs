//! report-core
//!
//! Pure trade-report logic:
//! - trade records (one closed position per record)
//! - account summary statistics
//! - chart-ready series (cumulative profit, per-symbol profit)
//! - the per-account report handed to presentation

pub mod trade_type;
pub mod trade;
pub mod summary;
pub mod series;
pub mod report;

pub use trade_type::TradeType;
pub use trade::{sort_chronologically, Trade};
pub use summary::{total_profit, win_rate, AccountSummary};
pub use series::{
    cumulative_profit_series,
    top_symbol_performance,
    ProfitPoint,
    SymbolProfit,
    DEFAULT_TOP_SYMBOLS,
};
pub use report::{AccountReport, ReportSeries};
