//! CSV loader for the mobile food facility permit dataset
//!
//! The upstream export has a header row and a few dozen columns. Only the
//! columns in [`REQUIRED_COLUMNS`] are read. They are located by name, so the
//! column order and any extra columns do not matter.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use foodtruck_domain::model::TruckRecord;
use foodtruck_domain::service::clean_records;
use foodtruck_types::DataFormatError;
use tracing::{debug, info};

/// Header names the loader needs, as spelled in the upstream export
pub const REQUIRED_COLUMNS: [&str; 8] = [
    "Applicant",
    "FoodItems",
    "Address",
    "FacilityType",
    "Status",
    "Latitude",
    "Longitude",
    "dayshours",
];

/// Load the dataset and drop rows that are unusable for listing
pub fn load_clean<P: AsRef<Path>>(path: P) -> Result<Vec<TruckRecord>, DataFormatError> {
    let records = load_truck_records(path)?;
    let cleaned = clean_records(records);
    info!(count = cleaned.len(), "truck records after cleaning");
    Ok(cleaned)
}

/// Load every row of the dataset file without cleaning
pub fn load_truck_records<P: AsRef<Path>>(path: P) -> Result<Vec<TruckRecord>, DataFormatError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => DataFormatError::NotFound(path.to_path_buf()),
        _ => DataFormatError::Io(e),
    })?;

    read_truck_records(BufReader::new(file))
}

/// Parse dataset rows from any reader
pub fn read_truck_records<R: Read>(reader: R) -> Result<Vec<TruckRecord>, DataFormatError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers().map_err(csv_error)?.clone();
    debug!(columns = ?headers.iter().collect::<Vec<_>>(), "dataset header");
    let columns = ColumnIndex::resolve(&headers)?;

    let mut records = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let row = result.map_err(csv_error)?;
        let row_num = row_idx + 2; // header is row 1

        records.push(columns.parse_row(&row, row_num)?);
    }

    info!(count = records.len(), "loaded truck records");
    Ok(records)
}

fn csv_error(e: csv::Error) -> DataFormatError {
    DataFormatError::Csv(e.to_string())
}

/// Positions of the required columns within a header row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ColumnIndex {
    applicant: usize,
    food_items: usize,
    address: usize,
    facility_type: usize,
    status: usize,
    latitude: usize,
    longitude: usize,
    days_hours: usize,
}

impl ColumnIndex {
    fn resolve(headers: &csv::StringRecord) -> Result<Self, DataFormatError> {
        let [applicant, food_items, address, facility_type, status, latitude, longitude, days_hours] =
            REQUIRED_COLUMNS;

        Ok(Self {
            applicant: resolve_column(headers, applicant)?,
            food_items: resolve_column(headers, food_items)?,
            address: resolve_column(headers, address)?,
            facility_type: resolve_column(headers, facility_type)?,
            status: resolve_column(headers, status)?,
            latitude: resolve_column(headers, latitude)?,
            longitude: resolve_column(headers, longitude)?,
            days_hours: resolve_column(headers, days_hours)?,
        })
    }

    fn parse_row(&self, row: &csv::StringRecord, row_num: usize) -> Result<TruckRecord, DataFormatError> {
        Ok(TruckRecord {
            applicant: text(row, self.applicant).unwrap_or_default(),
            food_items: text(row, self.food_items),
            address: text(row, self.address),
            facility_type: text(row, self.facility_type),
            status: text(row, self.status),
            latitude: coordinate(row, self.latitude, row_num, "Latitude")?,
            longitude: coordinate(row, self.longitude, row_num, "Longitude")?,
            days_hours: text(row, self.days_hours),
        })
    }
}

/// Exact header match first, then a unique case-insensitive one
/// (the live export has shipped both `dayshours` and `DaysHours`).
fn resolve_column(headers: &csv::StringRecord, name: &str) -> Result<usize, DataFormatError> {
    let normalized = || headers.iter().map(|h| h.trim_start_matches('\u{feff}')).enumerate();

    if let Some((idx, _)) = normalized().find(|(_, h)| *h == name) {
        return Ok(idx);
    }

    let mut candidates = normalized().filter(|(_, h)| h.eq_ignore_ascii_case(name));
    match (candidates.next(), candidates.next()) {
        (Some((idx, found)), None) => {
            debug!(expected = name, found, "resolved column ignoring case");
            Ok(idx)
        }
        _ => Err(DataFormatError::MissingColumn(name.to_string())),
    }
}

/// Empty cells are missing values
fn text(row: &csv::StringRecord, idx: usize) -> Option<String> {
    row.get(idx).filter(|s| !s.is_empty()).map(str::to_string)
}

/// Parse a Latitude/Longitude cell. Empty is missing.
///
/// A non-empty cell that is not a number is an `InvalidNumber` error, and that
/// error fails the whole load. A loader that coerced bad values to missing
/// would instead keep going and drop just that row during cleaning.
fn coordinate(
    row: &csv::StringRecord,
    idx: usize,
    row_num: usize,
    column: &str,
) -> Result<Option<f64>, DataFormatError> {
    match row.get(idx).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(s) => s.parse::<f64>().map(Some).map_err(|_| DataFormatError::InvalidNumber {
            row: row_num,
            column: column.to_string(),
            value: s.to_string(),
        }),
    }
}
