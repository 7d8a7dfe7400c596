//! Persistence implementations
//!
//! This module provides file-based implementations of the repository traits.

mod csv_truck_record_repo;

pub use csv_truck_record_repo::CsvTruckRecordRepository;
