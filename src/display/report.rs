//! Report formatting for terminal output

use chrono::NaiveDate;

use crate::analytics::AnalyticsReport;

/// Format an analytics report for terminal display
pub fn format_report(report: &AnalyticsReport, start: NaiveDate, end: NaiveDate) -> String {
    let mut output = String::new();

    output.push_str(&format!("Spending Report: {} to {}\n", start, end));
    output.push_str(&"=".repeat(60));
    output.push('\n');
    output.push_str(&format!("Total Spending:  {}\n", report.total_amount));
    output.push_str(&format!("Daily Average:   {}\n", report.average_daily_amount));
    output.push_str(&format!("Expenses:        {}\n", report.transaction_count));

    if report.transaction_count == 0 {
        output.push_str("\nNo expenses in this period.\n");
        return output;
    }

    output.push_str("\nBy Category\n");
    output.push_str(&format!(
        "{:<28} {:>12} {:>8}\n",
        "Category", "Amount", "Count"
    ));
    output.push_str(&"-".repeat(60));
    output.push('\n');
    for row in &report.by_category {
        let label = if row.category_icon.is_empty() {
            row.category_name.clone()
        } else {
            format!("{} {}", row.category_icon, row.category_name)
        };
        output.push_str(&format!(
            "{:<28} {:>12} {:>8}\n",
            label,
            row.total_amount.to_string(),
            row.transaction_count
        ));
    }

    output.push_str("\nBy Day\n");
    for day in &report.by_day {
        output.push_str(&format!("{}  {:>12}\n", day.date, day.amount.to_string()));
    }

    output.push_str("\nBy Month\n");
    let mut months: Vec<_> = report.by_month.iter().collect();
    months.sort_by_key(|(month, _)| month.clone());
    for (month, amount) in months {
        output.push_str(&format!("{}  {:>12}\n", month, amount.to_string()));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::{CategorySpending, DailySpending};
    use crate::models::{CategoryId, Money};
    use std::collections::HashMap;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_empty_report() {
        let output = format_report(
            &AnalyticsReport::empty(),
            date(2024, 1, 1),
            date(2024, 1, 31),
        );
        assert!(output.contains("No expenses in this period."));
        assert!(output.contains("$0.00"));
    }

    #[test]
    fn test_populated_report() {
        let report = AnalyticsReport {
            total_amount: Money::from_cents(10000),
            average_daily_amount: Money::from_cents(5000),
            transaction_count: 3,
            by_category: vec![CategorySpending {
                category_id: CategoryId::new(),
                category_name: "Food".to_string(),
                category_icon: "🍔".to_string(),
                total_amount: Money::from_cents(10000),
                transaction_count: 3,
            }],
            by_day: vec![DailySpending {
                date: date(2024, 1, 1),
                amount: Money::from_cents(10000),
            }],
            by_month: HashMap::from([("2024-01".to_string(), Money::from_cents(10000))]),
        };

        let output = format_report(&report, date(2024, 1, 1), date(2024, 1, 2));
        assert!(output.contains("Food"));
        assert!(output.contains("$100.00"));
        assert!(output.contains("2024-01"));
    }
}
