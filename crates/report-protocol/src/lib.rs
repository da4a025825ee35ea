//! report-protocol
//!
//! Text encoding/decoding for trade reports.
//!
//! - [`tsv_codec`] : broker trade logs (tab-separated) into `report_core::Trade`
//! - [`csv_codec`] : any tabular aggregate to CSV for download / tooling

pub mod error;
pub mod tsv_codec;
pub mod csv_codec;

pub use error::{CsvError, ParseError};
pub use tsv_codec::{parse_report, parse_row, ParsePolicy, MIN_FIELDS};
pub use csv_codec::export_csv;
