//! fintrack - personal finance tracker with transaction reports
//!
//! Users hold accounts and categories, transactions move money between
//! them, and reports summarize a set of transactions as text, CSV or JSON.
//!
//! # Architecture
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Accounts, categories, transactions and the user aggregate
//! - `reports`: The report engine (records, totals, sinks)
//! - `export`: Text, CSV, JSON and spreadsheet-stub encodings
//! - `util`: Date formatting and balance aggregates
//! - `demo`: The built-in demo data set
//! - `cli`: Command handlers for the `fintrack` binary
//!
//! # Example
//!
//! ```
//! use fintrack::models::Money;
//! use fintrack::reports::{Report, ReportFormat, ReportRecord};
//!
//! let mut report = Report::new("Monthly", ReportFormat::Csv);
//! report.add_record(
//!     ReportRecord::new(Money::from_units(50000), "Salary", "2025-01-31", "DEPOSIT")
//!         .with_account("Main"),
//! );
//! report.add_record(
//!     ReportRecord::new(Money::from_units(-1500), "Groceries", "2025-02-01", "WITHDRAWAL")
//!         .with_account("Main"),
//! );
//!
//! assert_eq!(report.net_balance(), Money::from_units(48500));
//!
//! let mut csv = Vec::new();
//! report.render(&mut csv)?;
//! assert_eq!(String::from_utf8_lossy(&csv).lines().count(), 3);
//! # Ok::<(), std::io::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod demo;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod util;

pub use error::{FintrackError, FintrackResult};
