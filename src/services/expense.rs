//! Expense service
//!
//! The use-case layer for expense records: sequences ownership checks,
//! payment-method encryption, and data access. The decryption fallback on
//! the read path lives here and cannot be bypassed per-call: a record whose
//! payment method no longer decrypts is still returned, with the raw stored
//! value and a degraded flag instead of an error.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use tracing::warn;

use crate::auth::ensure_owner;
use crate::crypto::FieldCipher;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{CategoryId, Expense, ExpenseId, Money, UserIdentity};
use crate::store::DataStore;

/// Service for expense management
pub struct ExpenseService<'a, S: DataStore> {
    store: &'a mut S,
    cipher: &'a FieldCipher,
}

/// Input for creating or replacing an expense
///
/// The payment method arrives as plaintext; the service encrypts it before
/// anything touches the store.
#[derive(Debug, Clone)]
pub struct ExpenseInput {
    pub category_id: CategoryId,
    pub amount: Money,
    pub description: Option<String>,
    pub expense_date: NaiveDate,
    pub payment_method: Option<String>,
    pub location: Option<String>,
    pub notes: Option<String>,
}

/// An expense decorated for display: category resolved, payment method
/// decrypted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpenseView {
    pub id: ExpenseId,
    pub category_id: CategoryId,
    pub category_name: String,
    pub category_icon: String,
    pub amount: Money,
    pub description: Option<String>,
    pub expense_date: NaiveDate,
    /// Decrypted payment method, or the raw stored value when decryption
    /// failed (see `payment_method_degraded`)
    pub payment_method: Option<String>,
    /// True when the payment method could not be decrypted and the raw
    /// stored value is being surfaced instead
    pub payment_method_degraded: bool,
    pub location: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl<'a, S: DataStore> ExpenseService<'a, S> {
    /// Create a new expense service
    pub fn new(store: &'a mut S, cipher: &'a FieldCipher) -> Self {
        Self { store, cipher }
    }

    /// Record a new expense owned by the requester
    ///
    /// No ownership check here: the record is stamped with the requester's
    /// identity at creation.
    pub fn create(
        &mut self,
        requester: &UserIdentity,
        input: ExpenseInput,
    ) -> TrackerResult<ExpenseView> {
        self.require_category(input.category_id)?;

        let mut expense = Expense::new(
            requester.id,
            input.category_id,
            input.amount,
            input.expense_date,
        );
        expense.description = input.description;
        expense.payment_method = self.cipher.encrypt_opt(input.payment_method.as_deref())?;
        expense.location = input.location;
        expense.notes = input.notes;

        expense
            .validate()
            .map_err(|e| TrackerError::Validation(e.to_string()))?;

        let saved = self.store.save_expense(expense)?;
        self.decorate(saved)
    }

    /// Replace an expense's mutable fields
    ///
    /// `id`, `owner_id`, and `created_at` never change.
    pub fn update(
        &mut self,
        requester: &UserIdentity,
        id: ExpenseId,
        input: ExpenseInput,
    ) -> TrackerResult<ExpenseView> {
        let mut expense = self.require_owned(requester, id)?;
        self.require_category(input.category_id)?;

        expense.category_id = input.category_id;
        expense.amount = input.amount;
        expense.description = input.description;
        expense.expense_date = input.expense_date;
        expense.payment_method = self.cipher.encrypt_opt(input.payment_method.as_deref())?;
        expense.location = input.location;
        expense.notes = input.notes;

        expense
            .validate()
            .map_err(|e| TrackerError::Validation(e.to_string()))?;

        let saved = self.store.save_expense(expense)?;
        self.decorate(saved)
    }

    /// Delete an expense owned by the requester
    pub fn delete(&mut self, requester: &UserIdentity, id: ExpenseId) -> TrackerResult<()> {
        let expense = self.require_owned(requester, id)?;
        self.store.delete_expense(expense.id)
    }

    /// Fetch one expense for display
    pub fn get(&self, requester: &UserIdentity, id: ExpenseId) -> TrackerResult<ExpenseView> {
        let expense = self.require_owned(requester, id)?;
        self.decorate(expense)
    }

    /// List the requester's expenses, newest expense date first
    pub fn list(&self, requester: &UserIdentity) -> TrackerResult<Vec<ExpenseView>> {
        let mut expenses = self.store.find_expenses(requester.id, None)?;
        expenses.reverse(); // store returns oldest first
        expenses.into_iter().map(|e| self.decorate(e)).collect()
    }

    /// Load an expense and verify the requester owns it
    fn require_owned(&self, requester: &UserIdentity, id: ExpenseId) -> TrackerResult<Expense> {
        let expense = self
            .store
            .get_expense(id)?
            .ok_or_else(|| TrackerError::expense_not_found(id.to_string()))?;
        ensure_owner(&expense, requester)?;
        Ok(expense)
    }

    fn require_category(&self, id: CategoryId) -> TrackerResult<()> {
        self.store
            .get_category(id)?
            .ok_or_else(|| TrackerError::category_not_found(id.to_string()))?;
        Ok(())
    }

    /// Resolve the category and decrypt the payment method for display
    fn decorate(&self, expense: Expense) -> TrackerResult<ExpenseView> {
        let (category_name, category_icon) = match self.store.get_category(expense.category_id)? {
            Some(c) => (c.name, c.icon),
            None => ("Uncategorized".to_string(), String::new()),
        };

        let (payment_method, degraded) = match &expense.payment_method {
            None => (None, false),
            Some(stored) => match self.cipher.decrypt_field(stored) {
                Ok(plain) => (Some(plain), false),
                Err(_) => {
                    warn!(expense_id = %expense.id, "payment method failed to decrypt, surfacing stored value");
                    (Some(stored.clone()), true)
                }
            },
        };

        Ok(ExpenseView {
            id: expense.id,
            category_id: expense.category_id,
            category_name,
            category_icon,
            amount: expense.amount,
            description: expense.description,
            expense_date: expense.expense_date,
            payment_method,
            payment_method_degraded: degraded,
            location: expense.location,
            notes: expense.notes,
            created_at: expense.created_at,
        })
    }
}
