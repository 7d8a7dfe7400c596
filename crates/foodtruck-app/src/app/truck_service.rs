//! Download and list use cases

use chrono::NaiveDateTime;
use tracing::info;

use foodtruck_domain::model::{TruckListing, TruckRecord};
use foodtruck_domain::repository::TruckRecordRepository;
use foodtruck_domain::service::{filter_records, filter_records_at, TruckFilter};
use foodtruck_infra::fetcher::fetch;
use foodtruck_types::Result;

use crate::config::Config;

/// Fetch the dataset into the configured data file
pub fn download_dataset(config: &Config) -> Result<u64> {
    let bytes = fetch(&config.data_url, &config.data_path)?;
    info!(bytes, path = %config.data_path.display(), "dataset cached");
    Ok(bytes)
}

/// Cleaned records matching `filter`, projected for display
pub fn list_trucks<R: TruckRecordRepository>(
    repo: &R,
    filter: &TruckFilter,
) -> Result<Vec<TruckListing>> {
    let records = repo.find_all()?;
    Ok(project(filter_records(records, filter)))
}

/// [`list_trucks`] with an explicit "now" for the open-now filter
pub fn list_trucks_at<R: TruckRecordRepository>(
    repo: &R,
    filter: &TruckFilter,
    now: NaiveDateTime,
) -> Result<Vec<TruckListing>> {
    let records = repo.find_all()?;
    Ok(project(filter_records_at(records, filter, now)))
}

fn project(matched: Vec<TruckRecord>) -> Vec<TruckListing> {
    info!(matched = matched.len(), "filtered truck records");
    matched.iter().map(TruckRecord::to_listing).collect()
}
