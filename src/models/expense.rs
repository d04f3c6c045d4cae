//! Expense record model
//!
//! An expense belongs to exactly one user and references a category by id.
//! The `payment_method` field holds the cipher wire form when encryption is
//! in play; the record itself never decrypts anything.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{CategoryId, ExpenseId, UserId};
use super::money::Money;

/// A single recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier, assigned at creation and immutable
    pub id: ExpenseId,

    /// The user who owns this expense, immutable
    pub owner_id: UserId,

    /// The category this expense is filed under
    pub category_id: CategoryId,

    /// Amount spent, strictly positive
    pub amount: Money,

    /// Free-text description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Calendar date the expense occurred on
    pub expense_date: NaiveDate,

    /// Payment method, stored in encrypted form when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,

    /// Where the expense occurred
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Additional notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// When the record was created, set once and immutable
    pub created_at: DateTime<Utc>,
}

impl Expense {
    /// Create a new expense stamped with its owner and the current time
    pub fn new(
        owner_id: UserId,
        category_id: CategoryId,
        amount: Money,
        expense_date: NaiveDate,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            owner_id,
            category_id,
            amount,
            description: None,
            expense_date,
            payment_method: None,
            location: None,
            notes: None,
            created_at: Utc::now(),
        }
    }

    /// Check whether `user_id` owns this expense
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.owner_id == user_id
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount(self.amount));
        }
        Ok(())
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    NonPositiveAmount(Money),
}

impl std::fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Expense amount must be positive, got {}", amount)
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_expense() -> Expense {
        Expense::new(
            UserId::new(),
            CategoryId::new(),
            Money::from_cents(3000),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        )
    }

    #[test]
    fn test_new_expense() {
        let expense = sample_expense();
        assert_eq!(expense.amount, Money::from_cents(3000));
        assert!(expense.description.is_none());
        assert!(expense.payment_method.is_none());
    }

    #[test]
    fn test_ownership() {
        let expense = sample_expense();
        assert!(expense.is_owned_by(expense.owner_id));
        assert!(!expense.is_owned_by(UserId::new()));
    }

    #[test]
    fn test_validation() {
        let mut expense = sample_expense();
        assert!(expense.validate().is_ok());

        expense.amount = Money::zero();
        assert!(matches!(
            expense.validate(),
            Err(ExpenseValidationError::NonPositiveAmount(_))
        ));

        expense.amount = Money::from_cents(-100);
        assert!(expense.validate().is_err());
    }

    #[test]
    fn test_serialization_skips_absent_fields() {
        let expense = sample_expense();
        let json = serde_json::to_string(&expense).unwrap();
        assert!(!json.contains("payment_method"));

        let deserialized: Expense = serde_json::from_str(&json).unwrap();
        assert_eq!(expense, deserialized);
    }
}
