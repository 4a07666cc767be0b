//! Category model
//!
//! Categories classify transactions as income, spending with a budget, or
//! general.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;
use super::money::Money;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind")]
pub enum CategoryKind {
    General,
    /// Spending category with a budget limit
    Expense { budget_limit: Money },
    Income,
}

impl CategoryKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::General => "Category",
            Self::Expense { .. } => "ExpenseCategory",
            Self::Income => "IncomeCategory",
        }
    }
}

/// A transaction category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub kind: CategoryKind,
}

impl Category {
    pub fn new(name: impl Into<String>, kind: CategoryKind) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into(),
            kind,
        }
    }

    pub fn general(name: impl Into<String>) -> Self {
        Self::new(name, CategoryKind::General)
    }

    pub fn expense(name: impl Into<String>, budget_limit: Money) -> Self {
        Self::new(name, CategoryKind::Expense { budget_limit })
    }

    pub fn income(name: impl Into<String>) -> Self {
        Self::new(name, CategoryKind::Income)
    }

    /// Budget limit, zero for categories without one
    pub fn budget_limit(&self) -> Money {
        match self.kind {
            CategoryKind::Expense { budget_limit } => budget_limit,
            CategoryKind::General | CategoryKind::Income => Money::zero(),
        }
    }
}

impl PartialEq for Category {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind.label(), self.name)?;
        let limit = self.budget_limit();
        if limit.is_positive() {
            write!(f, " (Budget: {})", limit)?;
        }
        Ok(())
    }
}
