//! Data access layer for spendtrack
//!
//! The services depend on the [`DataStore`] trait only; persistence is a
//! collaborator concern. Two implementations ship with the crate: an
//! in-memory store for tests and embedding, and a JSON file store used by
//! the CLI.

pub mod file_io;
pub mod json;
pub mod memory;

pub use file_io::{read_json, write_json_atomic};
pub use json::JsonStore;
pub use memory::MemoryStore;

use chrono::NaiveDate;

use crate::error::TrackerResult;
use crate::models::{Category, CategoryId, Expense, ExpenseId, UserId};

/// Data access interface for expenses and categories
///
/// `find_expenses` filters by owner and, when given, an inclusive date
/// range, returning records in chronological order (oldest first).
pub trait DataStore {
    /// Find a user's expenses, optionally restricted to `[start, end]` inclusive
    fn find_expenses(
        &self,
        owner: UserId,
        range: Option<(NaiveDate, NaiveDate)>,
    ) -> TrackerResult<Vec<Expense>>;

    /// Look up a single expense by id
    fn get_expense(&self, id: ExpenseId) -> TrackerResult<Option<Expense>>;

    /// Insert or replace an expense
    fn save_expense(&mut self, expense: Expense) -> TrackerResult<Expense>;

    /// Remove an expense
    fn delete_expense(&mut self, id: ExpenseId) -> TrackerResult<()>;

    /// Look up a category by id
    fn get_category(&self, id: CategoryId) -> TrackerResult<Option<Category>>;

    /// List all categories
    fn list_categories(&self) -> TrackerResult<Vec<Category>>;

    /// Insert or replace a category
    fn save_category(&mut self, category: Category) -> TrackerResult<Category>;
}
