//! Analytics service
//!
//! Thin sequencing layer over the aggregation engine: validates the window,
//! loads the requester's expenses and the category list from the store, and
//! hands both to the pure engine.

use chrono::NaiveDate;
use tracing::debug;

use crate::analytics::{compute_report, AnalyticsReport};
use crate::error::{TrackerError, TrackerResult};
use crate::models::UserIdentity;
use crate::store::DataStore;

/// Service for spending reports
pub struct AnalyticsService<'a, S: DataStore> {
    store: &'a S,
}

impl<'a, S: DataStore> AnalyticsService<'a, S> {
    /// Create a new analytics service
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Compute the requester's spending report for `[start, end]` inclusive
    ///
    /// An inverted window is rejected before the store is touched.
    pub fn report(
        &self,
        requester: &UserIdentity,
        start: NaiveDate,
        end: NaiveDate,
    ) -> TrackerResult<AnalyticsReport> {
        if start > end {
            return Err(TrackerError::InvalidRange { start, end });
        }

        let expenses = self.store.find_expenses(requester.id, Some((start, end)))?;
        let categories = self.store.list_categories()?;

        debug!(
            user = %requester.username,
            expenses = expenses.len(),
            %start,
            %end,
            "computing spending report"
        );

        compute_report(&expenses, &categories, start, end)
    }
}
