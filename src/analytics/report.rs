//! Analytics report types
//!
//! A report is derived data: recomputed per request from a user's expenses
//! and never persisted.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;

use crate::models::{CategoryId, Money};

/// Spending totals for one category within a report window
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySpending {
    /// Category ID
    pub category_id: CategoryId,
    /// Category display name
    pub category_name: String,
    /// Category display glyph
    pub category_icon: String,
    /// Total spent in this category
    pub total_amount: Money,
    /// Number of expenses in this category
    pub transaction_count: usize,
}

/// Spending total for one calendar day
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailySpending {
    /// The calendar day (ISO date)
    pub date: NaiveDate,
    /// Total spent that day
    pub amount: Money,
}

/// Aggregate spending report over an inclusive date window
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyticsReport {
    /// Total spent across the window
    pub total_amount: Money,
    /// Average spend per day, rounded half-up to the cent
    pub average_daily_amount: Money,
    /// Number of expenses in the window
    pub transaction_count: usize,
    /// Per-category totals, highest spending first
    pub by_category: Vec<CategorySpending>,
    /// Per-day totals, chronological
    pub by_day: Vec<DailySpending>,
    /// Per-month totals keyed by "YYYY-MM"; rendering order is the consumer's concern
    pub by_month: HashMap<String, Money>,
}

impl AnalyticsReport {
    /// The defined result for a window with no expenses
    pub fn empty() -> Self {
        Self {
            total_amount: Money::zero(),
            average_daily_amount: Money::zero(),
            transaction_count: 0,
            by_category: Vec::new(),
            by_day: Vec::new(),
            by_month: HashMap::new(),
        }
    }
}
