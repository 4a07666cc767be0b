//! Built-in demo data set
//!
//! The CLI works against a fixed user and transaction list so every command
//! can be tried without any stored data.

use crate::error::FintrackResult;
use crate::models::{Account, Category, Money, Transaction, User};
use crate::reports::{Report, ReportFormat, ReportRecord};

/// Alice, with three categories and three accounts
pub fn demo_user() -> User {
    let mut user = User::new("Alice");

    user.add_category(Category::expense("Groceries", Money::from_units(5000)));
    user.add_category(Category::income("Salary"));
    user.add_category(Category::general("Misc"));

    user.add_account(Account::debit("Main", Money::from_units(25000)));
    user.add_account(Account::credit(
        "Credit Card",
        Money::from_units(10000),
        Money::from_units(50000),
    ));
    user.add_account(Account::savings("Savings", Money::from_units(75000)));

    user
}

/// Salary, a grocery run and an interest accrual, all on the Main account
pub fn demo_transactions(user: &User) -> FintrackResult<Vec<Transaction>> {
    let main = user.find_account("Main")?.id;
    let salary = user.find_category("Salary")?.id;
    let groceries = user.find_category("Groceries")?.id;

    Ok(vec![
        Transaction::deposit(Money::from_units(50000), "Monthly salary")
            .with_category(salary)
            .with_account(main),
        Transaction::withdrawal(Money::from_units(1500), "Grocery shopping")
            .with_category(groceries)
            .with_account(main),
        Transaction::compounding(Money::from_units(10000), "Interest accrual", 30, 5.0)
            .with_account(main),
    ])
}

/// Build a report of `format` over `transactions`
pub fn build_report(
    title: &str,
    format: ReportFormat,
    user: &User,
    transactions: &[Transaction],
    date_format: &str,
) -> Report {
    let mut report = Report::new(title, format);
    report.extend(
        transactions
            .iter()
            .map(|txn| ReportRecord::from_transaction(txn, user, date_format)),
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::DEFAULT_DATE_FORMAT;

    #[test]
    fn test_demo_user() {
        let user = demo_user();
        assert_eq!(user.name, "Alice");
        assert_eq!(user.accounts().len(), 3);
        assert_eq!(user.categories().len(), 3);
    }

    #[test]
    fn test_demo_report_totals() {
        let user = demo_user();
        let transactions = demo_transactions(&user).unwrap();
        let report = build_report(
            "Monthly Report",
            ReportFormat::Text,
            &user,
            &transactions,
            DEFAULT_DATE_FORMAT,
        );

        assert_eq!(report.len(), 3);
        assert_eq!(report.total_income(), Money::from_units(60000));
        assert_eq!(report.total_expenses(), Money::from_units(-1500));
        assert_eq!(report.net_balance(), Money::from_units(58500));

        let interest = &report.records()[2];
        assert_eq!(interest.kind, "COMPOUNDING");
        assert_eq!(interest.account, "Main");
        assert_eq!(interest.category, "Uncategorized");
    }
}
