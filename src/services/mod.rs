//! Business logic layer for spendtrack
//!
//! Services sequence authorization, encryption, and data access on behalf of
//! whatever boundary layer hosts them (the CLI here, HTTP elsewhere).

pub mod analytics;
pub mod expense;

pub use analytics::AnalyticsService;
pub use expense::{ExpenseInput, ExpenseService, ExpenseView};
