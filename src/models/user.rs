//! User aggregate
//!
//! A flat owner of accounts and categories. Transactions refer to these by
//! id and resolve names through the user.

use serde::{Deserialize, Serialize};

use super::account::Account;
use super::category::Category;
use super::ids::{AccountId, CategoryId};
use super::transaction::Transaction;
use crate::error::{FintrackError, FintrackResult};
use crate::reports::ReportRecord;
use crate::util::DEFAULT_DATE_FORMAT;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    accounts: Vec<Account>,
    categories: Vec<Category>,
}

impl User {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            accounts: Vec::new(),
            categories: Vec::new(),
        }
    }

    /// Add an account, returning its id
    pub fn add_account(&mut self, account: Account) -> AccountId {
        let id = account.id;
        self.accounts.push(account);
        id
    }

    /// Add a category, returning its id
    pub fn add_category(&mut self, category: Category) -> CategoryId {
        let id = category.id;
        self.categories.push(category);
        id
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn account(&self, id: AccountId) -> Option<&Account> {
        self.accounts.iter().find(|a| a.id == id)
    }

    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// The report record for `txn`, with this user's account and category
    /// names and the default date format
    pub fn record_for(&self, txn: &Transaction) -> ReportRecord {
        ReportRecord::from_transaction(txn, self, DEFAULT_DATE_FORMAT)
    }

    /// Find an account by name (case-insensitive)
    pub fn find_account(&self, name: &str) -> FintrackResult<&Account> {
        self.accounts
            .iter()
            .find(|a| a.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| FintrackError::account_not_found(name))
    }

    /// Find a category by name (case-insensitive)
    pub fn find_category(&self, name: &str) -> FintrackResult<&Category> {
        self.categories
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| FintrackError::category_not_found(name))
    }
}
