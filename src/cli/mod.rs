//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the demo data set and the report engine.

pub mod demo;
pub mod report;

pub use demo::{handle_demo_command, list_accounts, list_categories, DemoCommands};
pub use report::{handle_report_command, ReportArgs};
