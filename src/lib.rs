//! spendtrack - personal expense tracking with spending analytics
//!
//! This library provides the core functionality for spendtrack: recording
//! personal expenses against categories and computing aggregate spending
//! reports, with the sensitive payment-method field held under field-level
//! encryption.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, categories, users, money)
//! - `crypto`: Argon2id key derivation and AES-256-GCM field encryption
//! - `analytics`: Pure aggregation of expenses into spending reports
//! - `auth`: Ownership authorization and identity resolution
//! - `store`: The `DataStore` trait plus in-memory and JSON file stores
//! - `services`: Business logic layer sequencing the above
//! - `display`: Terminal formatting for the CLI
//! - `cli`: clap command handlers
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use spendtrack::models::{default_categories, Money, UserIdentity};
//! use spendtrack::services::{AnalyticsService, ExpenseInput, ExpenseService};
//! use spendtrack::store::MemoryStore;
//! use spendtrack::crypto::{FieldCipher, KeyDerivationParams};
//!
//! # fn main() -> spendtrack::error::TrackerResult<()> {
//! let categories = default_categories();
//! let mut store = MemoryStore::with_categories(categories.clone());
//! let params = KeyDerivationParams {
//!     memory_cost: 1024,
//!     time_cost: 1,
//!     parallelism: 1,
//!     ..KeyDerivationParams::new()
//! };
//! let cipher = FieldCipher::new("passphrase", &params)?;
//! let user = UserIdentity::new("alex");
//!
//! let mut expenses = ExpenseService::new(&mut store, &cipher);
//! expenses.create(&user, ExpenseInput {
//!     category_id: categories[0].id,
//!     amount: Money::from_cents(3000),
//!     description: Some("lunch".into()),
//!     expense_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
//!     payment_method: Some("Visa **** 4242".into()),
//!     location: None,
//!     notes: None,
//! })?;
//!
//! let report = AnalyticsService::new(&store).report(
//!     &user,
//!     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
//!     NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
//! )?;
//! assert_eq!(report.total_amount, Money::from_cents(3000));
//! # Ok(())
//! # }
//! ```

pub mod analytics;
pub mod auth;
pub mod cli;
pub mod config;
pub mod crypto;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod store;

pub use error::{TrackerError, TrackerResult};
