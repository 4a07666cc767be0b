//! JSON report encoding
//!
//! Produces a single object with two-space indentation:
//!
//! ```text
//! {
//!   "title": "...",
//!   "format": "JSON",
//!   "transactions": [ { "date", "type", "account", "category", "amount", "description" } ],
//!   "summary": { "totalIncome", "totalExpenses", "netBalance" }
//! }
//! ```
//!
//! Monetary values are bare numbers with exactly two decimals.

use std::io::{self, Write};

use serde::Serialize;
use serde_json::value::RawValue;

use crate::models::Money;
use crate::reports::{Report, ReportRecord, Summary};

#[derive(Serialize)]
struct JsonReport<'a> {
    title: &'a str,
    format: &'static str,
    transactions: Vec<JsonRecord<'a>>,
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonRecord<'a> {
    date: &'a str,
    #[serde(rename = "type")]
    kind: &'a str,
    account: &'a str,
    category: &'a str,
    amount: Box<RawValue>,
    description: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonSummary {
    total_income: Box<RawValue>,
    total_expenses: Box<RawValue>,
    net_balance: Box<RawValue>,
}

/// Money as a fixed two-decimal JSON number
fn money_number(amount: Money) -> serde_json::Result<Box<RawValue>> {
    RawValue::from_string(amount.to_string())
}

impl<'a> JsonRecord<'a> {
    fn from_record(record: &'a ReportRecord) -> serde_json::Result<Self> {
        Ok(Self {
            date: &record.date,
            kind: &record.kind,
            account: &record.account,
            category: &record.category,
            amount: money_number(record.amount)?,
            description: &record.description,
        })
    }
}

impl JsonSummary {
    fn from_summary(summary: Summary) -> serde_json::Result<Self> {
        Ok(Self {
            total_income: money_number(summary.total_income)?,
            total_expenses: money_number(summary.total_expenses)?,
            net_balance: money_number(summary.net_balance)?,
        })
    }
}

/// Write the report as a pretty-printed JSON object followed by a newline
pub fn write_report<W: Write>(report: &Report, writer: &mut W) -> io::Result<()> {
    let transactions = report
        .records()
        .iter()
        .map(JsonRecord::from_record)
        .collect::<serde_json::Result<Vec<_>>>()?;

    let document = JsonReport {
        title: report.title(),
        format: report.format().tag(),
        transactions,
        summary: JsonSummary::from_summary(report.summary())?,
    };

    serde_json::to_writer_pretty(&mut *writer, &document)?;
    writeln!(writer)
}
