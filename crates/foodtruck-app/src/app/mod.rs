//! Use cases

pub mod truck_service;

pub use truck_service::{download_dataset, list_trucks, list_trucks_at};
