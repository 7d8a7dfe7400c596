//! Infrastructure layer - dataset download, CSV loading, repositories

pub mod fetcher;
pub mod persistence;
pub mod truck_csv;
