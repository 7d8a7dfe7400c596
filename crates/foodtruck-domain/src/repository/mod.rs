//! Repository trait definitions for data access

use foodtruck_types::DataFormatError;

use crate::model::TruckRecord;

/// Source of cleaned truck records
pub trait TruckRecordRepository {
    /// Load every record that survives cleaning, in dataset order
    fn find_all(&self) -> Result<Vec<TruckRecord>, DataFormatError>;
}
