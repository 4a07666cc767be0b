//! Small helpers shared by the CLI and reports

pub mod balances;
pub mod date;

pub use balances::{find_max_balance, total_balance};
pub use date::{format_timestamp, validate_date_format, DEFAULT_DATE_FORMAT};
