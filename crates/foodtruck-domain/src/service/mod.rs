//! Domain services

pub mod record_filter;
pub mod schedule;

pub use record_filter::{clean_records, filter_records, filter_records_at, TruckFilter};
pub use schedule::{is_open_at, is_open_now, DaySet, ScheduleEntry};
