//! CLI commands for browsing the demo data set

use clap::Subcommand;

use crate::error::FintrackResult;
use crate::models::{Money, User};
use crate::util::{find_max_balance, total_balance};

/// Demo subcommands
#[derive(Subcommand, Debug)]
pub enum DemoCommands {
    /// Show deposit and equality on accounts
    Operators,
    /// Show the largest balance and the total across accounts
    Aggregates,
    /// Show what each demo transaction would do when executed and undone
    Transactions,
}

/// Print every account of `user`
pub fn list_accounts(user: &User) {
    println!("Accounts of {}:", user.name);
    for account in user.accounts() {
        println!("  {}", account);
    }
}

/// Print every category of `user`
pub fn list_categories(user: &User) {
    println!("Categories of {}:", user.name);
    for category in user.categories() {
        println!("  {}", category);
    }
}

/// Handle demo commands
pub fn handle_demo_command(user: &User, cmd: DemoCommands) -> FintrackResult<()> {
    match cmd {
        DemoCommands::Operators => demo_operators(user),
        DemoCommands::Aggregates => {
            demo_aggregates(user);
            Ok(())
        }
        DemoCommands::Transactions => demo_transactions(user),
    }
}

fn demo_operators(user: &User) -> FintrackResult<()> {
    let mut first = user.find_account("Main")?.clone();
    let second = user.find_account("Credit Card")?;

    println!("Before: {}", first);
    println!("Before: {}", second);

    first += Money::from_units(1000);
    println!("After += 1000: {}", first);

    println!("Main == Main: {}", first == *user.find_account("Main")?);
    println!("Main == Credit Card: {}", first == *second);
    Ok(())
}

fn demo_aggregates(user: &User) {
    match find_max_balance(user.accounts()) {
        Some(account) => println!("Largest balance: {}", account),
        None => println!("No accounts."),
    }
    println!("Total balance: {}", total_balance(user.accounts()));
}

fn demo_transactions(user: &User) -> FintrackResult<()> {
    for txn in crate::demo::demo_transactions(user)? {
        tracing::debug!(transaction = %txn, "describing demo transaction");
        let record = user.record_for(&txn);

        println!("{}", record);
        println!("  {}", txn.execute(&record.account));
        println!("  {}", txn.undo(&record.account));
    }
    Ok(())
}
