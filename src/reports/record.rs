//! Report records
//!
//! A record is a value copy of the fields a report shows for one
//! transaction. Account and category names are resolved once, when the
//! record is built, so reports keep no link back into the domain model.

use std::fmt;

use crate::models::{Money, Transaction, User};
use crate::util::format_timestamp;

/// Category name used when a transaction has no category
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Account name used when a transaction has no account
pub const NO_ACCOUNT: &str = "No Account";

/// One transaction as seen by a report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRecord {
    /// Signed amount: positive is income, negative is expense
    pub amount: Money,
    pub description: String,
    /// Pre-rendered timestamp
    pub date: String,
    /// Type tag such as "DEPOSIT"
    pub kind: String,
    pub category: String,
    pub account: String,
}

impl ReportRecord {
    /// Create a record without account or category links
    pub fn new(
        amount: Money,
        description: impl Into<String>,
        date: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            amount,
            description: description.into(),
            date: date.into(),
            kind: kind.into(),
            category: UNCATEGORIZED.to_string(),
            account: NO_ACCOUNT.to_string(),
        }
    }

    pub fn with_account(mut self, account: impl Into<String>) -> Self {
        self.account = account.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Build a record from a transaction, resolving names through `user`.
    ///
    /// Links that are unset or point at nothing fall back to
    /// [`NO_ACCOUNT`] and [`UNCATEGORIZED`].
    pub fn from_transaction(txn: &Transaction, user: &User, date_format: &str) -> Self {
        let account = txn
            .account_id
            .and_then(|id| user.account(id))
            .map(|a| a.name.as_str())
            .unwrap_or(NO_ACCOUNT);
        let category = txn
            .category_id
            .and_then(|id| user.category(id))
            .map(|c| c.name.as_str())
            .unwrap_or(UNCATEGORIZED);

        Self::new(
            txn.amount(),
            txn.description.as_str(),
            format_timestamp(&txn.date, date_format),
            txn.kind.tag(),
        )
        .with_account(account)
        .with_category(category)
    }

    pub fn is_income(&self) -> bool {
        self.amount.is_positive()
    }

    pub fn is_expense(&self) -> bool {
        self.amount.is_negative()
    }
}

/// `<date> | <type> | <account> | <category> | <signed amount> | <description>`
impl fmt::Display for ReportRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} | {} | {} | {}",
            self.date,
            self.kind,
            self.account,
            self.category,
            self.amount.to_signed_string(),
            self.description
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Account, Category};
    use chrono::{Local, TimeZone};

    #[test]
    fn test_defaults() {
        let record = ReportRecord::new(Money::from_units(5), "Gift", "2025-01-01", "DEPOSIT");
        assert_eq!(record.account, "No Account");
        assert_eq!(record.category, "Uncategorized");
        assert!(record.is_income());
        assert!(!record.is_expense());
    }

    #[test]
    fn test_zero_is_neither_income_nor_expense() {
        let record = ReportRecord::new(Money::zero(), "Nothing", "", "DEPOSIT");
        assert!(!record.is_income());
        assert!(!record.is_expense());
    }

    #[test]
    fn test_display_line() {
        let income = ReportRecord::new(Money::from_units(50000), "Salary", "2025-01-31", "DEPOSIT")
            .with_account("Main")
            .with_category("Salary");
        assert_eq!(
            income.to_string(),
            "2025-01-31 | DEPOSIT | Main | Salary | +50000.00 | Salary"
        );

        let expense =
            ReportRecord::new(Money::from_units(-1500), "Groceries", "2025-02-01", "WITHDRAWAL");
        assert_eq!(
            expense.to_string(),
            "2025-02-01 | WITHDRAWAL | No Account | Uncategorized | -1500.00 | Groceries"
        );
    }

    #[test]
    fn test_from_transaction_resolves_names() {
        let mut user = User::new("Alice");
        let main = user.add_account(Account::debit("Main", Money::zero()));
        let salary = user.add_category(Category::income("Salary"));
        let date = Local.with_ymd_and_hms(2025, 1, 31, 12, 0, 0).unwrap();

        let txn = Transaction::deposit(Money::from_units(50000), "Monthly salary")
            .with_account(main)
            .with_category(salary)
            .with_date(date);
        let record = ReportRecord::from_transaction(&txn, &user, "%Y-%m-%d");

        assert_eq!(record.account, "Main");
        assert_eq!(record.category, "Salary");
        assert_eq!(record.date, "2025-01-31");
        assert_eq!(record.kind, "DEPOSIT");
        assert_eq!(record.amount, Money::from_units(50000));
    }

    #[test]
    fn test_from_transaction_defaults_missing_links() {
        let user = User::new("Alice");
        let orphan = Transaction::withdrawal(Money::from_units(10), "Cash")
            .with_account(crate::models::AccountId::new());
        let record = ReportRecord::from_transaction(&orphan, &user, "%Y");

        assert_eq!(record.account, NO_ACCOUNT);
        assert_eq!(record.category, UNCATEGORIZED);
        assert_eq!(record.amount, Money::from_units(-10));
    }
}
