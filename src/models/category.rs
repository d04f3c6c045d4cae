//! Expense category model
//!
//! Categories are shared reference data: expenses point at them by id and
//! never embed them. From the tracker core's perspective they are read-only
//! once seeded.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;

/// A spending category (e.g., "Food", "Transport")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: CategoryId,

    /// Category name (unique)
    pub name: String,

    /// Display glyph for UIs
    #[serde(default)]
    pub icon: String,
}

impl Category {
    /// Create a new category
    pub fn new(name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into(),
            icon: icon.into(),
        }
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        if self.name.len() > 50 {
            return Err(CategoryValidationError::NameTooLong(self.name.len()));
        }

        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.icon.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{} {}", self.icon, self.name)
        }
    }
}

/// Default categories seeded for new trackers
pub fn default_categories() -> Vec<Category> {
    [
        ("Food", "🍔"),
        ("Transport", "🚗"),
        ("Shopping", "🛍️"),
        ("Entertainment", "🎬"),
        ("Bills", "📄"),
        ("Healthcare", "🏥"),
        ("Travel", "✈️"),
        ("Other", "📌"),
    ]
    .into_iter()
    .map(|(name, icon)| Category::new(name, icon))
    .collect()
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NameTooLong(usize),
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Category name too long ({} chars, max 50)", len)
            }
        }
    }
}

impl std::error::Error for CategoryValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_category() {
        let category = Category::new("Food", "🍔");
        assert_eq!(category.name, "Food");
        assert_eq!(category.icon, "🍔");
    }

    #[test]
    fn test_category_validation() {
        let mut category = Category::new("Valid", "");
        assert!(category.validate().is_ok());

        category.name = String::new();
        assert_eq!(category.validate(), Err(CategoryValidationError::EmptyName));

        category.name = "a".repeat(51);
        assert!(matches!(
            category.validate(),
            Err(CategoryValidationError::NameTooLong(_))
        ));
    }

    #[test]
    fn test_default_categories() {
        let defaults = default_categories();
        assert_eq!(defaults.len(), 8);
        assert_eq!(defaults[0].name, "Food");
        assert!(defaults.iter().all(|c| c.validate().is_ok()));
    }

    #[test]
    fn test_display() {
        let category = Category::new("Food", "🍔");
        assert_eq!(category.to_string(), "🍔 Food");

        let plain = Category::new("Misc", "");
        assert_eq!(plain.to_string(), "Misc");
    }

    #[test]
    fn test_serialization() {
        let category = Category::new("Travel", "✈️");
        let json = serde_json::to_string(&category).unwrap();
        let deserialized: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(category, deserialized);
    }
}
