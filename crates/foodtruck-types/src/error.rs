//! Error types for foodtruck

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while fetching the dataset
#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("Download from {url} failed with HTTP status {status}")]
    Status { url: String, status: u16 },

    #[error("Request failed: {0}")]
    Request(String),

    #[error("Failed to write downloaded data: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while loading the cached dataset
#[derive(Debug, Error)]
pub enum DataFormatError {
    #[error("Data file not found: {} (run `foodtruck download` first)", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read data file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse CSV: {0}")]
    Csv(String),

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Invalid number format in row {row}, column {column}: {value}")]
    InvalidNumber {
        row: usize,
        column: String,
        value: String,
    },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Download error: {0}")]
    Download(#[from] DownloadError),

    #[error("Data format error: {0}")]
    DataFormat(#[from] DataFormatError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_mentions_download() {
        let err = DataFormatError::NotFound(PathBuf::from("food_trucks.csv"));
        let msg = err.to_string();
        assert!(msg.contains("food_trucks.csv"));
        assert!(msg.contains("download"));
    }

    #[test]
    fn test_status_error_carries_status() {
        let err: Error = DownloadError::Status {
            url: "http://example.invalid/rows.csv".to_string(),
            status: 404,
        }
        .into();
        assert!(matches!(
            err,
            Error::Download(DownloadError::Status { status: 404, .. })
        ));
        assert!(err.to_string().contains("404"));
    }
}
