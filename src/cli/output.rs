//! Output formatting for the CLI.

use crate::core::Record;
use rusqlite::types::Value;
use std::io::{self, Write};

/// Line printed after every listing.
pub const SEPARATOR: &str = "------------------------------------------------------";

/// Format a single column value.
///
/// Text is quoted and escaped, NULL shows as `None`.
pub fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "None".to_string(),
        Value::Integer(i) => i.to_string(),
        Value::Real(f) => format!("{f:?}"),
        Value::Text(s) => format!("{s:?}"),
        Value::Blob(bytes) => {
            let hex: String = bytes.iter().map(|b| format!("{b:02x}")).collect();
            format!("x'{hex}'")
        }
    }
}

/// Format a row as a tuple, e.g. `(1, "SISK", "London")`.
pub fn format_tuple<R: Record>(record: &R) -> String {
    let values = record
        .values()
        .iter()
        .map(format_value)
        .collect::<Vec<_>>()
        .join(", ");
    format!("({values})")
}

/// Write every row as a tuple, then the separator line.
pub fn write_rows<W: Write, R: Record>(out: &mut W, rows: &[R]) -> io::Result<()> {
    for row in rows {
        writeln!(out, "{}", format_tuple(row))?;
    }
    writeln!(out, "{SEPARATOR}")
}
