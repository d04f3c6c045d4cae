//! In-memory data store
//!
//! Backs the service tests and is useful for embedding the tracker core
//! without any filesystem footprint.

use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::error::TrackerResult;
use crate::models::{Category, CategoryId, Expense, ExpenseId, UserId};

use super::DataStore;

/// A [`DataStore`] holding everything in memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    expenses: BTreeMap<ExpenseId, Expense>,
    categories: BTreeMap<CategoryId, Category>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with categories
    pub fn with_categories(categories: Vec<Category>) -> Self {
        let mut store = Self::new();
        for category in categories {
            store.categories.insert(category.id, category);
        }
        store
    }

    /// Number of stored expenses
    pub fn expense_count(&self) -> usize {
        self.expenses.len()
    }
}

impl DataStore for MemoryStore {
    fn find_expenses(
        &self,
        owner: UserId,
        range: Option<(NaiveDate, NaiveDate)>,
    ) -> TrackerResult<Vec<Expense>> {
        let mut matches: Vec<Expense> = self
            .expenses
            .values()
            .filter(|e| e.owner_id == owner)
            .filter(|e| match range {
                Some((start, end)) => e.expense_date >= start && e.expense_date <= end,
                None => true,
            })
            .cloned()
            .collect();
        matches.sort_by(|a, b| {
            a.expense_date
                .cmp(&b.expense_date)
                .then(a.created_at.cmp(&b.created_at))
        });
        Ok(matches)
    }

    fn get_expense(&self, id: ExpenseId) -> TrackerResult<Option<Expense>> {
        Ok(self.expenses.get(&id).cloned())
    }

    fn save_expense(&mut self, expense: Expense) -> TrackerResult<Expense> {
        self.expenses.insert(expense.id, expense.clone());
        Ok(expense)
    }

    fn delete_expense(&mut self, id: ExpenseId) -> TrackerResult<()> {
        self.expenses.remove(&id);
        Ok(())
    }

    fn get_category(&self, id: CategoryId) -> TrackerResult<Option<Category>> {
        Ok(self.categories.get(&id).cloned())
    }

    fn list_categories(&self) -> TrackerResult<Vec<Category>> {
        Ok(self.categories.values().cloned().collect())
    }

    fn save_category(&mut self, category: Category) -> TrackerResult<Category> {
        self.categories.insert(category.id, category.clone());
        Ok(category)
    }
}
