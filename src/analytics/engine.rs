//! Aggregation engine
//!
//! Pure computation of an [`AnalyticsReport`] from a slice of expenses and a
//! date window. No I/O, no side effects: callers are responsible for
//! restricting the input to one owner and to the inclusive window before
//! invoking [`compute_report`].

use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Category, CategoryId, Expense, Money};

use super::report::{AnalyticsReport, CategorySpending, DailySpending};

/// Display name used when an expense references a category the caller
/// did not supply
const UNKNOWN_CATEGORY: &str = "Uncategorized";

/// Compute an aggregate spending report for `[start, end]` inclusive
///
/// `expenses` must already be filtered to one owner and the window;
/// `categories` supplies display names and icons for the breakdown.
///
/// A window with no expenses yields the all-zero report. A window with
/// `start > end` is rejected with [`TrackerError::InvalidRange`] before any
/// arithmetic happens, so the inclusive day count is always at least one.
pub fn compute_report(
    expenses: &[Expense],
    categories: &[Category],
    start: NaiveDate,
    end: NaiveDate,
) -> TrackerResult<AnalyticsReport> {
    if start > end {
        return Err(TrackerError::InvalidRange { start, end });
    }

    if expenses.is_empty() {
        return Ok(AnalyticsReport::empty());
    }

    let total_amount: Money = expenses.iter().map(|e| e.amount).sum();

    let day_count = (end - start).num_days() + 1;
    let average_daily_amount = total_amount.div_round_half_up(day_count);

    let category_map: HashMap<CategoryId, &Category> =
        categories.iter().map(|c| (c.id, c)).collect();

    // Group by category, preserving first-seen order so that equal totals
    // keep their grouping order through the stable sort below.
    let mut by_category: Vec<CategorySpending> = Vec::new();
    let mut category_index: HashMap<CategoryId, usize> = HashMap::new();

    // Day and month totals accumulate alongside; BTreeMap gives by_day its
    // chronological order for free.
    let mut day_totals: BTreeMap<NaiveDate, Money> = BTreeMap::new();
    let mut by_month: HashMap<String, Money> = HashMap::new();

    for expense in expenses {
        let idx = *category_index.entry(expense.category_id).or_insert_with(|| {
            let (name, icon) = match category_map.get(&expense.category_id) {
                Some(c) => (c.name.clone(), c.icon.clone()),
                None => (UNKNOWN_CATEGORY.to_string(), String::new()),
            };
            by_category.push(CategorySpending {
                category_id: expense.category_id,
                category_name: name,
                category_icon: icon,
                total_amount: Money::zero(),
                transaction_count: 0,
            });
            by_category.len() - 1
        });
        by_category[idx].total_amount += expense.amount;
        by_category[idx].transaction_count += 1;

        *day_totals.entry(expense.expense_date).or_insert_with(Money::zero) += expense.amount;

        let month_key = expense.expense_date.format("%Y-%m").to_string();
        *by_month.entry(month_key).or_insert_with(Money::zero) += expense.amount;
    }

    // Highest spending first; sort_by is stable, ties keep grouping order.
    by_category.sort_by(|a, b| b.total_amount.cmp(&a.total_amount));

    let by_day = day_totals
        .into_iter()
        .map(|(date, amount)| DailySpending { date, amount })
        .collect();

    Ok(AnalyticsReport {
        total_amount,
        average_daily_amount,
        transaction_count: expenses.len(),
        by_category,
        by_day,
        by_month,
    })
}
