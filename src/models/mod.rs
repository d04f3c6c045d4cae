//! Core data models for spendtrack
//!
//! This module contains all the data structures that represent the expense
//! tracking domain: expenses, categories, users, and money.

pub mod category;
pub mod expense;
pub mod ids;
pub mod money;
pub mod user;

pub use category::{default_categories, Category};
pub use expense::Expense;
pub use ids::{CategoryId, ExpenseId, UserId};
pub use money::Money;
pub use user::UserIdentity;
