//! Error types for the report codecs.

use thiserror::Error;

/// Why a trade-log row (or a whole log, in strict mode) was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The row does not carry every column up to `profit`.
    #[error("expected at least {expected} tab-separated fields, found {found}")]
    TooFewFields { expected: usize, found: usize },

    /// Strict parsing stopped at a bad row (1-based line number in the log).
    #[error("line {line}: {source}")]
    Strict {
        line: usize,
        #[source]
        source: Box<ParseError>,
    },
}

/// Errors from CSV export.
#[derive(Debug, Error)]
pub enum CsvError {
    /// Records must serialize to flat objects (structs / maps).
    #[error("record {index} is not an object")]
    NotAnObject { index: usize },

    #[error("could not serialize record: {0}")]
    Serialize(#[from] serde_json::Error),
}
