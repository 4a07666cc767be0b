//! Aggregates over collections of accounts

use crate::models::{Account, Money};

/// The account holding the most money.
///
/// Ties keep the earliest account; an empty slice gives `None`.
pub fn find_max_balance(accounts: &[Account]) -> Option<&Account> {
    accounts.iter().fold(None, |best, account| match best {
        Some(current) if current.balance() >= account.balance() => Some(current),
        _ => Some(account),
    })
}

/// Sum of all account balances
pub fn total_balance(accounts: &[Account]) -> Money {
    accounts.iter().map(Account::balance).sum()
}
