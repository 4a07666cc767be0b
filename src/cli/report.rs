//! CLI command for generating reports
//!
//! Displays reports over the demo transactions and saves each one to
//! `report.<ext>` in the output directory.

use std::path::PathBuf;

use clap::Args;

use crate::config::{FormatSelection, Settings};
use crate::demo::{build_report, demo_transactions};
use crate::error::FintrackResult;
use crate::models::User;
use crate::reports::Sink;

/// Report arguments
#[derive(Args, Debug, Default)]
pub struct ReportArgs {
    /// Report format (defaults to the configured format)
    #[arg(short, long, value_enum)]
    pub format: Option<FormatSelection>,

    /// Report title
    #[arg(short, long)]
    pub title: Option<String>,

    /// Directory to write report files to
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Only display reports, don't write files
    #[arg(long)]
    pub no_save: bool,
}

/// Handle the report command
pub fn handle_report_command(
    user: &User,
    settings: &Settings,
    args: ReportArgs,
) -> FintrackResult<()> {
    let formats = args.format.unwrap_or(settings.default_format).formats();
    let title = args.title.unwrap_or_else(|| settings.report_title.clone());
    let output_dir = args.output_dir.unwrap_or_else(|| settings.output_dir());

    let transactions = demo_transactions(user)?;
    let reports: Vec<_> = formats
        .iter()
        .map(|format| build_report(&title, *format, user, &transactions, &settings.date_format))
        .collect();

    let numbered = reports.len() > 1;
    for (i, report) in reports.iter().enumerate() {
        if numbered {
            println!("\n{}. {} report:", i + 1, report.format().tag());
        }
        report.render_to(&Sink::Display)?;
    }

    if args.no_save {
        return Ok(());
    }

    if numbered {
        println!();
    }
    for report in &reports {
        let path = output_dir.join(format!("report.{}", report.format().extension()));
        let outcome = report.save_to_file(&path)?;
        println!("{}", outcome);
    }

    Ok(())
}
