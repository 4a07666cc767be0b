//! Report encodings
//!
//! Each encoder writes a whole [`Report`](crate::reports::Report) to any
//! `std::io::Write`, so terminal and file output share one code path:
//! - text: human-readable listing with a summary block
//! - csv: one row per transaction (spreadsheet-compatible)
//! - json: transactions plus a summary object
//! - xlsx: placeholder notice only

pub mod csv;
pub mod json;
pub mod text;
pub mod xlsx;
