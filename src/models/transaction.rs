//! Transaction model
//!
//! Transactions record money moving in or out of an account. The amount
//! sign carries the direction: deposits and interest are positive,
//! withdrawals are stored negated.

use std::fmt;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use super::ids::{AccountId, CategoryId, TransactionId};
use super::money::Money;
use crate::reports::ReportRecord;
use crate::util::{format_timestamp, DEFAULT_DATE_FORMAT};

/// What kind of money movement a transaction is
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind")]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
    /// Interest accrual over `period_days` at `rate_percent` per year
    Compounding { period_days: u32, rate_percent: f64 },
}

impl TransactionKind {
    /// Short type tag shown in reports
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Deposit => "DEPOSIT",
            Self::Withdrawal => "WITHDRAWAL",
            Self::Compounding { .. } => "COMPOUNDING",
        }
    }
}

/// A single transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub kind: TransactionKind,
    amount: Money,
    pub description: String,
    pub date: DateTime<Local>,
    pub category_id: Option<CategoryId>,
    pub account_id: Option<AccountId>,
}

impl Transaction {
    fn new(kind: TransactionKind, amount: Money, description: impl Into<String>) -> Self {
        Self {
            id: TransactionId::new(),
            kind,
            amount,
            description: description.into(),
            date: Local::now(),
            category_id: None,
            account_id: None,
        }
    }

    /// Money coming into an account
    pub fn deposit(amount: Money, description: impl Into<String>) -> Self {
        Self::new(TransactionKind::Deposit, amount, description)
    }

    /// Money leaving an account; `amount` is given as a positive value
    pub fn withdrawal(amount: Money, description: impl Into<String>) -> Self {
        Self::new(TransactionKind::Withdrawal, -amount, description)
    }

    /// Interest accrual on `amount`
    pub fn compounding(
        amount: Money,
        description: impl Into<String>,
        period_days: u32,
        rate_percent: f64,
    ) -> Self {
        Self::new(
            TransactionKind::Compounding {
                period_days,
                rate_percent,
            },
            amount,
            description,
        )
    }

    pub fn with_account(mut self, account_id: AccountId) -> Self {
        self.account_id = Some(account_id);
        self
    }

    pub fn with_category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn with_date(mut self, date: DateTime<Local>) -> Self {
        self.date = date;
        self
    }

    /// Signed amount: positive for income, negative for expenses
    pub fn amount(&self) -> Money {
        self.amount
    }

    /// Interest earned by a compounding transaction, zero for other kinds
    pub fn compound_interest(&self) -> Money {
        match self.kind {
            TransactionKind::Compounding {
                period_days,
                rate_percent,
            } => {
                let principal = self.amount.as_f64();
                let growth = (1.0 + rate_percent / 100.0).powf(f64::from(period_days) / 365.0);
                Money::from_f64(principal * growth - principal)
            }
            TransactionKind::Deposit | TransactionKind::Withdrawal => Money::zero(),
        }
    }

    /// Describe applying this transaction to the named account.
    ///
    /// Nothing is mutated; balances are managed on [`super::Account`].
    pub fn execute(&self, account_name: &str) -> String {
        match self.kind {
            TransactionKind::Deposit => {
                format!("Deposit executed: {} to {}", self.amount.to_signed_string(), account_name)
            }
            TransactionKind::Withdrawal => {
                format!("Withdrawal executed: {} from {}", self.amount, account_name)
            }
            TransactionKind::Compounding { period_days, .. } => format!(
                "Compounding executed: {} interest for {} days on {}",
                self.compound_interest(),
                period_days,
                account_name
            ),
        }
    }

    /// Describe reverting this transaction on the named account
    pub fn undo(&self, account_name: &str) -> String {
        match self.kind {
            TransactionKind::Deposit => {
                format!("Deposit undone: {} from {}", -self.amount, account_name)
            }
            TransactionKind::Withdrawal => format!(
                "Withdrawal undone: {} to {}",
                (-self.amount).to_signed_string(),
                account_name
            ),
            TransactionKind::Compounding { .. } => {
                format!("Compounding undone on {}", account_name)
            }
        }
    }
}

/// The Text report line for this transaction. A transaction only holds
/// ids, so account and category show as unresolved; use
/// [`super::User::record_for`] for the named line.
impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let record = ReportRecord::new(
            self.amount,
            self.description.as_str(),
            format_timestamp(&self.date, DEFAULT_DATE_FORMAT),
            self.kind.tag(),
        );
        fmt::Display::fmt(&record, f)
    }
}
