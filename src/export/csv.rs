//! CSV report encoding
//!
//! Header row plus one row per record. The description is always quoted;
//! other fields are quoted only when they need it. Embedded quotes are
//! doubled. No summary row is written.

use std::io::{self, Write};

use crate::reports::Report;

/// Column header row
pub const HEADER: &str = "Date,Type,Account,Category,Amount,Description";

/// Write all records as CSV
pub fn write_report<W: Write>(report: &Report, writer: &mut W) -> io::Result<()> {
    writeln!(writer, "{}", HEADER)?;

    for record in report.records() {
        writeln!(
            writer,
            "{},{},{},{},{},{}",
            escape_csv(&record.date),
            escape_csv(&record.kind),
            escape_csv(&record.account),
            escape_csv(&record.category),
            record.amount,
            quote_csv(&record.description)
        )?;
    }

    Ok(())
}

/// Escape a string for CSV format
fn escape_csv(s: &str) -> String {
    if s.contains([',', '"', '\n', '\r']) {
        quote_csv(s)
    } else {
        s.to_string()
    }
}

fn quote_csv(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}
