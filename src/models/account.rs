//! Account model
//!
//! Represents the user's money holders: debit, credit and savings accounts.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::AddAssign;

use super::ids::AccountId;
use super::money::Money;

/// Kind of account, with the rules that differ between kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind")]
pub enum AccountKind {
    /// Balance must not go below zero
    Debit,
    /// Balance may go down to `-limit`
    Credit { limit: Money },
    Savings,
}

impl AccountKind {
    /// Type label used when listing accounts
    pub fn label(&self) -> &'static str {
        match self {
            Self::Debit => "DebitAccount",
            Self::Credit { .. } => "CreditAccount",
            Self::Savings => "SavingsAccount",
        }
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A financial account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    pub name: String,
    pub kind: AccountKind,
    balance: Money,
}

impl Account {
    /// Create a new account with an opening balance
    pub fn new(name: impl Into<String>, kind: AccountKind, opening_balance: Money) -> Self {
        Self {
            id: AccountId::new(),
            name: name.into(),
            kind,
            balance: opening_balance,
        }
    }

    pub fn debit(name: impl Into<String>, opening_balance: Money) -> Self {
        Self::new(name, AccountKind::Debit, opening_balance)
    }

    pub fn credit(name: impl Into<String>, opening_balance: Money, limit: Money) -> Self {
        Self::new(name, AccountKind::Credit { limit }, opening_balance)
    }

    pub fn savings(name: impl Into<String>, opening_balance: Money) -> Self {
        Self::new(name, AccountKind::Savings, opening_balance)
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Add funds to the account
    pub fn deposit(&mut self, amount: Money) {
        self.balance += amount;
    }

    /// Take funds from the account
    ///
    /// Returns `false` and leaves the balance untouched when the account
    /// cannot cover the amount. Credit accounts may draw down to their limit.
    pub fn withdraw(&mut self, amount: Money) -> bool {
        let available = match self.kind {
            AccountKind::Credit { limit } => self.balance + limit,
            AccountKind::Debit | AccountKind::Savings => self.balance,
        };

        if available >= amount {
            self.balance -= amount;
            true
        } else {
            tracing::warn!(account = %self.name, %amount, %available, "withdrawal refused");
            false
        }
    }
}

impl AddAssign<Money> for Account {
    fn add_assign(&mut self, amount: Money) {
        self.deposit(amount);
    }
}

/// Accounts are the same account when their names match
impl PartialEq for Account {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} | Balance: {}", self.kind, self.name, self.balance)
    }
}
