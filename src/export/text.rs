//! Plain text report encoding

use std::io::{self, Write};

use crate::reports::Report;

/// Write the text report: header, one line per record, summary block
pub fn write_report<W: Write>(report: &Report, writer: &mut W) -> io::Result<()> {
    writeln!(writer, "=== {} ===", report.title())?;
    writeln!(writer, "Format: {}", report.format().tag())?;
    writeln!(writer, "Transactions: {}", report.len())?;
    writeln!(writer)?;

    for record in report.records() {
        writeln!(writer, "{}", record)?;
    }

    let summary = report.summary();
    writeln!(writer)?;
    writeln!(writer, "=== SUMMARY ===")?;
    writeln!(writer, "Total Income: {}", summary.total_income)?;
    writeln!(writer, "Total Expenses: {}", summary.total_expenses)?;
    writeln!(writer, "Net Balance: {}", summary.net_balance)?;

    Ok(())
}
