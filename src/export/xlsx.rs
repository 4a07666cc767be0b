//! Spreadsheet placeholder
//!
//! No workbook is produced; rendering only states what would be written.

use std::io::{self, Write};

use crate::reports::Report;

pub fn write_notice<W: Write>(report: &Report, writer: &mut W) -> io::Result<()> {
    writeln!(writer, "XLSX Report: {}", report.title())?;
    writeln!(
        writer,
        "This would generate an Excel file with {} transactions",
        report.len()
    )
}
