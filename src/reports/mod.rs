//! Reports module for fintrack
//!
//! Collects transaction records and renders them as text, CSV or JSON, to
//! the terminal or to a file. The encodings themselves live in
//! [`crate::export`].

pub mod record;
pub mod report;
pub mod sink;

pub use record::{ReportRecord, NO_ACCOUNT, UNCATEGORIZED};
pub use report::{Report, ReportFormat, Summary};
pub use sink::{Rendered, Sink};
