//! Report CLI command

use chrono::{Datelike, Local, NaiveDate};

use crate::auth::IdentityResolver;
use crate::config::Settings;
use crate::display::format_report;
use crate::error::{TrackerError, TrackerResult};
use crate::services::AnalyticsService;
use crate::store::DataStore;

/// Handle `spendtrack report`
///
/// Defaults to the current calendar month when no range is given.
pub fn handle_report_command<S: DataStore>(
    store: &S,
    settings: &Settings,
    from: Option<String>,
    to: Option<String>,
) -> TrackerResult<()> {
    let user = settings.current_user()?;
    let (start, end) = resolve_range(from.as_deref(), to.as_deref())?;

    let service = AnalyticsService::new(store);
    let report = service.report(&user, start, end)?;

    print!("{}", format_report(&report, start, end));
    Ok(())
}

fn resolve_range(from: Option<&str>, to: Option<&str>) -> TrackerResult<(NaiveDate, NaiveDate)> {
    let today = Local::now().date_naive();

    let start = match from {
        Some(s) => parse_date(s)?,
        None => today.with_day(1).unwrap_or(today),
    };
    let end = match to {
        Some(s) => parse_date(s)?,
        None => today,
    };

    Ok((start, end))
}

fn parse_date(s: &str) -> TrackerResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| TrackerError::Validation(format!("Invalid date '{}', expected YYYY-MM-DD", s)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_explicit_range() {
        let (start, end) = resolve_range(Some("2024-01-01"), Some("2024-01-31")).unwrap();
        assert_eq!(start, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());
    }

    #[test]
    fn test_default_range_is_current_month() {
        let (start, end) = resolve_range(None, None).unwrap();
        assert_eq!(start.day(), 1);
        assert!(start <= end);
    }

    #[test]
    fn test_bad_date_rejected() {
        assert!(resolve_range(Some("Jan 1"), None).is_err());
    }
}
