//! Core data models for fintrack
//!
//! Accounts, categories, transactions and the user who owns them. Reports
//! never hold references into these; they copy the fields they need.

pub mod account;
pub mod category;
pub mod ids;
pub mod money;
pub mod transaction;
pub mod user;

pub use account::{Account, AccountKind};
pub use category::{Category, CategoryKind};
pub use ids::{AccountId, CategoryId, TransactionId};
pub use money::Money;
pub use transaction::{Transaction, TransactionKind};
pub use user::User;
