//! Repository adapters for persistence layer

use foodtruck_infra::persistence::CsvTruckRecordRepository;

use crate::config::Config;

/// Open the CSV-backed record repository at the configured data path
pub fn open_truck_repo(config: &Config) -> CsvTruckRecordRepository {
    CsvTruckRecordRepository::new(config.data_path.clone())
}
