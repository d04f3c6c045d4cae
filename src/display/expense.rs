//! Expense display formatting
//!
//! Provides utilities for formatting expenses for terminal display.

use crate::services::ExpenseView;

use super::truncate;

/// Format a single expense for display (list row)
pub fn format_expense_row(view: &ExpenseView) -> String {
    let description = view.description.as_deref().unwrap_or("(no description)");

    format!(
        "{} {:10} {:<24} {:<16} {:>12}",
        view.id,
        view.expense_date.format("%Y-%m-%d").to_string(),
        truncate(description, 24),
        truncate(&view.category_name, 16),
        view.amount.to_string()
    )
}

/// Format a list of expenses as a table
pub fn format_expense_list(views: &[ExpenseView]) -> String {
    if views.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:12} {:10} {:<24} {:<16} {:>12}\n",
        "Id", "Date", "Description", "Category", "Amount"
    ));
    output.push_str(&"-".repeat(78));
    output.push('\n');

    for view in views {
        output.push_str(&format_expense_row(view));
        output.push('\n');
    }

    output
}

/// Format the full detail view of one expense
pub fn format_expense_detail(view: &ExpenseView) -> String {
    let mut output = String::new();
    output.push_str(&format!("Expense {}\n", view.id));
    output.push_str(&format!("  Date:        {}\n", view.expense_date));
    output.push_str(&format!(
        "  Category:    {} {}\n",
        view.category_icon, view.category_name
    ));
    output.push_str(&format!("  Amount:      {}\n", view.amount));

    if let Some(description) = &view.description {
        output.push_str(&format!("  Description: {}\n", description));
    }
    if let Some(payment) = &view.payment_method {
        if view.payment_method_degraded {
            output.push_str(&format!("  Payment:     {} (undecryptable)\n", payment));
        } else {
            output.push_str(&format!("  Payment:     {}\n", payment));
        }
    }
    if let Some(location) = &view.location {
        output.push_str(&format!("  Location:    {}\n", location));
    }
    if let Some(notes) = &view.notes {
        output.push_str(&format!("  Notes:       {}\n", notes));
    }
    output.push_str(&format!(
        "  Created:     {}\n",
        view.created_at.format("%Y-%m-%d %H:%M UTC")
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryId, ExpenseId, Money};
    use chrono::{NaiveDate, Utc};

    fn sample_view() -> ExpenseView {
        ExpenseView {
            id: ExpenseId::new(),
            category_id: CategoryId::new(),
            category_name: "Food".to_string(),
            category_icon: "🍔".to_string(),
            amount: Money::from_cents(3000),
            description: Some("lunch".to_string()),
            expense_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            payment_method: Some("Visa **** 4242".to_string()),
            payment_method_degraded: false,
            location: None,
            notes: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_row_contains_fields() {
        let row = format_expense_row(&sample_view());
        assert!(row.contains("2024-01-15"));
        assert!(row.contains("lunch"));
        assert!(row.contains("Food"));
        assert!(row.contains("$30.00"));
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(format_expense_list(&[]), "No expenses found.\n");
    }

    #[test]
    fn test_detail_flags_degraded_payment() {
        let mut view = sample_view();
        view.payment_method_degraded = true;
        let detail = format_expense_detail(&view);
        assert!(detail.contains("undecryptable"));
    }
}
