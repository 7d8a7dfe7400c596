//! Dataset download
//!
//! One blocking GET, whole body buffered, written over the cache file only
//! after a success status. The body lands in a sibling temp file first, so a
//! failed write never clobbers the previous download.

use std::io::{self, Write};
use std::path::Path;

use foodtruck_types::DownloadError;
use reqwest::blocking::Client;
use tempfile::NamedTempFile;
use tracing::{debug, info};

const USER_AGENT: &str = concat!("foodtruck/", env!("CARGO_PKG_VERSION"));

/// Download `url` into `destination`, returning the number of bytes written
pub fn fetch<P: AsRef<Path>>(url: &str, destination: P) -> Result<u64, DownloadError> {
    let destination = destination.as_ref();
    info!(url, destination = %destination.display(), "downloading dataset");

    let client = Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| DownloadError::Request(format!("Failed to create HTTP client: {}", e)))?;

    let response = client
        .get(url)
        .send()
        .map_err(|e| DownloadError::Request(format!("Failed to fetch {}: {}", url, e)))?;

    let status = response.status();
    if !status.is_success() {
        return Err(DownloadError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response
        .bytes()
        .map_err(|e| DownloadError::Request(format!("Failed to read response: {}", e)))?;

    write_file(destination, &body)?;
    debug!(bytes = body.len(), "dataset written");

    Ok(body.len() as u64)
}

/// Write `contents` next to `path`, then rename over it
fn write_file(path: &Path, contents: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(contents)?;
    file.flush()?;
    file.persist(path).map_err(|e| e.error)?;
    Ok(())
}
