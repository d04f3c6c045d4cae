//! Expense analytics for spendtrack
//!
//! The engine is a pure function over in-memory expenses; fetching and
//! owner/date filtering are the store's job, presentation is the caller's.

pub mod engine;
pub mod report;

pub use engine::compute_report;
pub use report::{AnalyticsReport, CategorySpending, DailySpending};
