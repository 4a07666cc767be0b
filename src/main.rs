use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use fintrack::cli::{
    handle_demo_command, handle_report_command, list_accounts, list_categories, DemoCommands,
    ReportArgs,
};
use fintrack::config::{FintrackPaths, Settings};
use fintrack::demo::demo_user;

#[derive(Parser)]
#[command(
    name = "fintrack",
    version,
    about = "Personal finance tracker with text, CSV and JSON reports",
    long_about = "fintrack models a user's accounts, categories and transactions \
                  and summarizes transactions into text, CSV or JSON reports."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the demo user's accounts
    Accounts,

    /// List the demo user's categories
    Categories,

    /// Demonstrate account operations and aggregates
    #[command(subcommand)]
    Demo(DemoCommands),

    /// Display and save transaction reports
    Report(ReportArgs),

    /// Write the default configuration file
    Init,

    /// Show current configuration and paths
    Config,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("fintrack=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let paths = FintrackPaths::new()?;
    let user = demo_user();

    match cli.command {
        Some(Commands::Accounts) => list_accounts(&user),
        Some(Commands::Categories) => list_categories(&user),
        Some(Commands::Demo(cmd)) => handle_demo_command(&user, cmd)?,
        Some(Commands::Report(args)) => {
            let settings = Settings::load_or_create(&paths)?;
            handle_report_command(&user, &settings, args)?
        }
        Some(Commands::Init) => {
            // A file that no longer loads is replaced with defaults
            let settings = Settings::load_or_create(&paths).unwrap_or_else(|err| {
                tracing::warn!(error = %err, "existing configuration unreadable, writing defaults");
                Settings::default()
            });
            settings.save(&paths)?;
            println!("Configuration written to: {}", paths.settings_file().display());
        }
        Some(Commands::Config) => {
            let settings = Settings::load_or_create(&paths)?;
            println!("fintrack Configuration");
            println!("======================");
            println!("Config file: {}", paths.settings_file().display());
            println!("Initialized: {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Report title:   {}", settings.report_title);
            println!("  Output dir:     {}", settings.output_dir().display());
            println!("  Date format:    {}", settings.date_format);
            println!("  Default format: {:?}", settings.default_format);
        }
        None => {
            println!("fintrack - personal finance tracker");
            println!();
            println!("Run 'fintrack --help' for usage information.");
            println!("Run 'fintrack report' to generate the demo reports.");
        }
    }

    Ok(())
}
