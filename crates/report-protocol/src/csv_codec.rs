// crates/report-protocol/src/csv_codec.rs

//! CSV export for tabular aggregates.
//!
//! Any serializable record that flattens to an object can be exported:
//!
//! - header row: field names of the first record, in declaration order
//! - one row per record, values in header order
//! - rows joined with `\n`, no trailing newline
//!
//! Numbers and plain strings are written as-is. A value containing a
//! comma, quote or line break is quoted (`"a,b"`, `"say ""hi"""`).

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::CsvError;

/// Serialize `records` as CSV. An empty slice gives an empty string.
pub fn export_csv<T: Serialize>(records: &[T]) -> Result<String, CsvError> {
    let rows = records
        .iter()
        .enumerate()
        .map(|(index, record)| match serde_json::to_value(record)? {
            Value::Object(map) => Ok(map),
            _ => Err(CsvError::NotAnObject { index }),
        })
        .collect::<Result<Vec<Map<String, Value>>, CsvError>>()?;

    let Some(first) = rows.first() else {
        return Ok(String::new());
    };

    let headers: Vec<&String> = first.keys().collect();

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(
        headers
            .iter()
            .map(|h| escape_field(h))
            .collect::<Vec<_>>()
            .join(","),
    );

    for row in &rows {
        let cells: Vec<String> = headers
            .iter()
            .map(|h| row.get(h.as_str()).map(format_value).unwrap_or_default())
            .collect();
        lines.push(cells.join(","));
    }

    Ok(lines.join("\n"))
}

// -----------------------------------------------------------------------------
// Helpers
// -----------------------------------------------------------------------------

fn format_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => escape_field(s),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        nested => escape_field(&nested.to_string()),
    }
}

fn escape_field(s: &str) -> String {
    if s.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
