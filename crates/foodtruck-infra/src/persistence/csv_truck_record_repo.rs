//! CSV-backed implementation of TruckRecordRepository

use std::path::PathBuf;

use foodtruck_domain::model::TruckRecord;
use foodtruck_domain::repository::TruckRecordRepository;
use foodtruck_types::DataFormatError;

use crate::truck_csv::load_clean;

/// Reads the cached dataset file on every query
pub struct CsvTruckRecordRepository {
    csv_path: PathBuf,
}

impl CsvTruckRecordRepository {
    pub fn new(csv_path: PathBuf) -> Self {
        Self { csv_path }
    }
}

impl TruckRecordRepository for CsvTruckRecordRepository {
    fn find_all(&self) -> Result<Vec<TruckRecord>, DataFormatError> {
        load_clean(&self.csv_path)
    }
}
