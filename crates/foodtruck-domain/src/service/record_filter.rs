//! Cleaning and user-facing filters over truck records

use chrono::{Local, NaiveDateTime};
use tracing::debug;

use crate::model::TruckRecord;
use crate::service::schedule::is_open_at;

/// Permit statuses that are dropped right after loading
pub const EXCLUDED_STATUSES: [&str; 2] = ["SUSPENDED", "EXPIRED"];

/// Drop rows without both coordinates, then rows whose status is excluded.
///
/// Status comparison is exact and case-sensitive. Order is preserved.
pub fn clean_records(records: Vec<TruckRecord>) -> Vec<TruckRecord> {
    let total = records.len();
    let cleaned: Vec<TruckRecord> = records
        .into_iter()
        .filter(TruckRecord::has_location)
        .filter(|r| {
            !r.status
                .as_deref()
                .is_some_and(|status| EXCLUDED_STATUSES.contains(&status))
        })
        .collect();

    debug!(total, kept = cleaned.len(), "cleaned truck records");
    cleaned
}

/// User-selected filters for the list command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TruckFilter {
    pub cuisine: Option<String>,
    pub facility_type: Option<String>,
    pub open_now: bool,
}

impl TruckFilter {
    pub fn is_empty(&self) -> bool {
        active(&self.cuisine).is_none() && active(&self.facility_type).is_none() && !self.open_now
    }
}

/// An empty needle counts as "not provided"
fn active(needle: &Option<String>) -> Option<&str> {
    needle.as_deref().filter(|s| !s.is_empty())
}

/// Case-insensitive literal substring; a missing field never matches
fn contains_ignore_case(haystack: Option<&str>, needle: &str) -> bool {
    haystack.is_some_and(|h| h.to_lowercase().contains(&needle.to_lowercase()))
}

/// Apply `filter` using the local wall clock for the open-now check
pub fn filter_records(records: Vec<TruckRecord>, filter: &TruckFilter) -> Vec<TruckRecord> {
    filter_records_at(records, filter, Local::now().naive_local())
}

/// Apply cuisine, then facility type, then open-now. Filters combine with AND.
pub fn filter_records_at(
    records: Vec<TruckRecord>,
    filter: &TruckFilter,
    now: NaiveDateTime,
) -> Vec<TruckRecord> {
    if filter.is_empty() {
        debug!(count = records.len(), "no filters selected");
        return records;
    }

    let mut result = records;

    if let Some(cuisine) = active(&filter.cuisine) {
        result.retain(|r| contains_ignore_case(r.food_items.as_deref(), cuisine));
        debug!(cuisine, remaining = result.len(), "applied cuisine filter");
    }

    if let Some(facility_type) = active(&filter.facility_type) {
        result.retain(|r| contains_ignore_case(r.facility_type.as_deref(), facility_type));
        debug!(facility_type, remaining = result.len(), "applied facility type filter");
    }

    if filter.open_now {
        result.retain(|r| is_open_at(r.days_hours.as_deref(), now));
        debug!(%now, remaining = result.len(), "applied open-now filter");
    }

    result
}
