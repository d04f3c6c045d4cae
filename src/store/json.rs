//! JSON file-backed data store
//!
//! Used by the CLI. Records are cached in memory and every mutation is
//! persisted immediately with an atomic write, so a crash never leaves a
//! half-written file behind.

use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::path::PathBuf;

use tracing::debug;

use crate::error::TrackerResult;
use crate::models::{Category, CategoryId, Expense, ExpenseId, UserId};

use super::file_io::{read_json, write_json_atomic};
use super::DataStore;

/// A [`DataStore`] persisted as JSON files
pub struct JsonStore {
    expenses_path: PathBuf,
    categories_path: PathBuf,
    expenses: BTreeMap<ExpenseId, Expense>,
    categories: BTreeMap<CategoryId, Category>,
}

impl JsonStore {
    /// Open a store, loading any existing data from disk
    pub fn open(expenses_path: PathBuf, categories_path: PathBuf) -> TrackerResult<Self> {
        let expense_list: Vec<Expense> = read_json(&expenses_path)?;
        let category_list: Vec<Category> = read_json(&categories_path)?;

        debug!(
            expenses = expense_list.len(),
            categories = category_list.len(),
            "loaded store"
        );

        Ok(Self {
            expenses_path,
            categories_path,
            expenses: expense_list.into_iter().map(|e| (e.id, e)).collect(),
            categories: category_list.into_iter().map(|c| (c.id, c)).collect(),
        })
    }

    fn persist_expenses(&self) -> TrackerResult<()> {
        let list: Vec<&Expense> = self.expenses.values().collect();
        write_json_atomic(&self.expenses_path, &list)
    }

    fn persist_categories(&self) -> TrackerResult<()> {
        let list: Vec<&Category> = self.categories.values().collect();
        write_json_atomic(&self.categories_path, &list)
    }
}

impl DataStore for JsonStore {
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
        self.persist_expenses()?;
        Ok(expense)
    }

    fn delete_expense(&mut self, id: ExpenseId) -> TrackerResult<()> {
        if self.expenses.remove(&id).is_some() {
            self.persist_expenses()?;
        }
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
        self.persist_categories()?;
        Ok(category)
    }
}
