//! Transaction report
//!
//! A [`Report`] collects records in arrival order and renders them, with
//! income/expense totals, in one fixed [`ReportFormat`]. Totals are always
//! computed from the current records.

use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::record::ReportRecord;
use super::sink::{Rendered, Sink};
use crate::error::{FintrackError, FintrackResult};
use crate::export;
use crate::models::Money;

/// Output encoding of a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Human-readable text with a summary block
    Text,
    /// Spreadsheet-compatible CSV, one row per transaction
    Csv,
    /// Machine-readable JSON with a summary object
    Json,
    /// Placeholder; no spreadsheet is produced
    Xlsx,
}

impl ReportFormat {
    /// Formats that produce real output files
    pub const WRITABLE: [ReportFormat; 3] = [Self::Text, Self::Csv, Self::Json];

    /// Tag embedded in text and JSON output
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Text => "TEXT",
            Self::Csv => "CSV",
            Self::Json => "JSON",
            Self::Xlsx => "XLSX",
        }
    }

    /// File extension for the default output file
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Xlsx => "xlsx",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Totals over a report's records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub total_income: Money,
    /// Negative or zero
    pub total_expenses: Money,
    pub net_balance: Money,
}

impl Summary {
    pub fn from_records(records: &[ReportRecord]) -> Self {
        let (total_income, total_expenses) =
            records
                .iter()
                .fold((Money::zero(), Money::zero()), |(income, expenses), r| {
                    if r.is_income() {
                        (income + r.amount, expenses)
                    } else if r.is_expense() {
                        (income, expenses + r.amount)
                    } else {
                        (income, expenses)
                    }
                });

        Self {
            total_income,
            total_expenses,
            net_balance: total_income + total_expenses,
        }
    }
}

/// A titled collection of transaction records with a fixed output format
#[derive(Debug, Clone)]
pub struct Report {
    title: String,
    format: ReportFormat,
    records: Vec<ReportRecord>,
}

impl Report {
    /// Create an empty report
    pub fn new(title: impl Into<String>, format: ReportFormat) -> Self {
        Self {
            title: title.into(),
            format,
            records: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn format(&self) -> ReportFormat {
        self.format
    }

    /// Records in insertion order
    pub fn records(&self) -> &[ReportRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append a record
    pub fn add_record(&mut self, record: ReportRecord) {
        self.records.push(record);
    }

    /// Sum of positive amounts
    pub fn total_income(&self) -> Money {
        self.records
            .iter()
            .filter(|r| r.is_income())
            .map(|r| r.amount)
            .sum()
    }

    /// Sum of negative amounts (a negative value)
    pub fn total_expenses(&self) -> Money {
        self.records
            .iter()
            .filter(|r| r.is_expense())
            .map(|r| r.amount)
            .sum()
    }

    pub fn net_balance(&self) -> Money {
        self.total_income() + self.total_expenses()
    }

    /// All three totals in one pass
    pub fn summary(&self) -> Summary {
        Summary::from_records(&self.records)
    }

    /// Write the full report in this report's format
    pub fn render<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        match self.format {
            ReportFormat::Text => export::text::write_report(self, writer),
            ReportFormat::Csv => export::csv::write_report(self, writer),
            ReportFormat::Json => export::json::write_report(self, writer),
            ReportFormat::Xlsx => export::xlsx::write_notice(self, writer),
        }
    }

    /// Render to the given sink
    pub fn render_to(&self, sink: &Sink) -> FintrackResult<Rendered> {
        tracing::debug!(
            title = %self.title,
            format = self.format.tag(),
            records = self.records.len(),
            %sink,
            "rendering report"
        );

        match sink {
            Sink::Display => {
                let stdout = io::stdout();
                let mut out = stdout.lock();
                self.render(&mut out)?;
                out.flush()?;
                Ok(Rendered::Displayed)
            }
            Sink::File(path) => self.write_file(path),
        }
    }

    /// Save the report to `path`, returning an outcome naming the file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> FintrackResult<Rendered> {
        self.render_to(&Sink::File(path.as_ref().to_path_buf()))
    }

    fn write_file(&self, path: &Path) -> FintrackResult<Rendered> {
        if self.format == ReportFormat::Xlsx {
            tracing::info!(path = %path.display(), "spreadsheet output is simulated, no file written");
            return Ok(Rendered::Simulated {
                path: path.to_path_buf(),
            });
        }

        let file = File::create(path).map_err(|e| FintrackError::sink(path, e))?;
        let mut writer = BufWriter::new(file);
        self.render(&mut writer)
            .and_then(|()| writer.flush())
            .map_err(|e| FintrackError::sink(path, e))?;

        tracing::info!(path = %path.display(), format = self.format.tag(), "report saved");
        Ok(Rendered::Written {
            format: self.format,
            path: PathBuf::from(path),
        })
    }
}

impl Extend<ReportRecord> for Report {
    fn extend<I: IntoIterator<Item = ReportRecord>>(&mut self, iter: I) {
        self.records.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn record(units: i64, description: &str) -> ReportRecord {
        let kind = if units >= 0 { "DEPOSIT" } else { "WITHDRAWAL" };
        ReportRecord::new(Money::from_units(units), description, "2025-01-31 10:00:00", kind)
            .with_account("Main")
    }

    fn monthly(format: ReportFormat) -> Report {
        let mut report = Report::new("Monthly", format);
        report.add_record(record(50000, "Salary").with_category("Salary"));
        report.add_record(record(-1500, "Groceries").with_category("Groceries"));
        report
    }

    fn rendered(report: &Report) -> String {
        let mut buf = Vec::new();
        report.render(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_monthly_totals() {
        let report = monthly(ReportFormat::Text);
        assert_eq!(report.total_income(), Money::from_units(50000));
        assert_eq!(report.total_expenses(), Money::from_units(-1500));
        assert_eq!(report.net_balance(), Money::from_units(48500));
        assert_eq!(
            report.summary(),
            Summary {
                total_income: Money::from_units(50000),
                total_expenses: Money::from_units(-1500),
                net_balance: Money::from_units(48500),
            }
        );
    }

    #[test]
    fn test_empty_report_totals_are_zero() {
        let report = Report::new("Empty", ReportFormat::Json);
        assert!(report.is_empty());
        assert!(report.total_income().is_zero());
        assert!(report.total_expenses().is_zero());
        assert!(report.net_balance().is_zero());
    }

    #[test]
    fn test_totals_follow_sign_and_stay_consistent() {
        let mut report = Report::new("Mixed", ReportFormat::Text);
        let amounts = [120, -30, 0, -45, 7, 0, -1, 300];

        for (i, units) in amounts.iter().enumerate() {
            let before_income = report.total_income();
            let before_expenses = report.total_expenses();
            report.add_record(record(*units, &format!("#{i}")));

            let amount = Money::from_units(*units);
            if amount.is_positive() {
                assert_eq!(report.total_income(), before_income + amount);
                assert_eq!(report.total_expenses(), before_expenses);
            } else {
                assert_eq!(report.total_income(), before_income);
                assert_eq!(report.total_expenses(), before_expenses + amount);
            }

            assert!(!report.total_income().is_negative());
            assert!(!report.total_expenses().is_positive());
            assert_eq!(
                report.net_balance(),
                report.total_income() + report.total_expenses()
            );
            assert_eq!(report.summary(), Summary::from_records(report.records()));
        }
    }

    #[test]
    fn test_records_keep_order_and_duplicates() {
        let mut report = Report::new("Dupes", ReportFormat::Csv);
        report.add_record(record(10, "a"));
        report.extend(vec![record(10, "a"), record(-5, "b")]);

        let descriptions: Vec<_> = report.records().iter().map(|r| r.description.as_str()).collect();
        assert_eq!(descriptions, ["a", "a", "b"]);
        assert_eq!(report.len(), 3);
        assert_eq!(report.total_income(), Money::from_units(20));
    }

    #[test]
    fn test_format_tags() {
        assert_eq!(ReportFormat::Text.tag(), "TEXT");
        assert_eq!(ReportFormat::Csv.tag(), "CSV");
        assert_eq!(ReportFormat::Json.tag(), "JSON");
        assert_eq!(ReportFormat::Xlsx.tag(), "XLSX");
        assert_eq!(monthly(ReportFormat::Csv).format(), ReportFormat::Csv);
    }

    #[test]
    fn test_rendering_is_repeatable() {
        for format in [
            ReportFormat::Text,
            ReportFormat::Csv,
            ReportFormat::Json,
            ReportFormat::Xlsx,
        ] {
            let report = monthly(format);
            assert_eq!(rendered(&report), rendered(&report));
        }
    }

    #[test]
    fn test_file_matches_rendered_bytes() {
        let temp_dir = TempDir::new().unwrap();

        for format in ReportFormat::WRITABLE {
            let report = monthly(format);
            let path = temp_dir.path().join(format!("report.{}", format.extension()));

            let outcome = report.save_to_file(&path).unwrap();
            assert_eq!(outcome.path(), Some(path.as_path()));
            assert!(outcome.to_string().contains(&path.display().to_string()));

            let written = std::fs::read_to_string(&path).unwrap();
            assert_eq!(written, rendered(&report));
        }
    }

    #[test]
    fn test_xlsx_save_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("report.xlsx");

        let outcome = monthly(ReportFormat::Xlsx).save_to_file(&path).unwrap();

        assert!(matches!(outcome, Rendered::Simulated { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn test_unopenable_file_is_sink_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("report.txt");

        let err = monthly(ReportFormat::Text).save_to_file(&path).unwrap_err();

        match &err {
            FintrackError::Sink { path: failed, source } => {
                assert_eq!(failed, &path);
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("expected sink error, got {other:?}"),
        }
        assert!(err.to_string().contains("report.txt"));
    }
}
