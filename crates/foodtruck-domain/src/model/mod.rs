//! Domain model types

pub mod truck_record;

pub use truck_record::{TruckListing, TruckRecord};
