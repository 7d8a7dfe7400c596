//! Configuration management for foodtruck
//!
//! No config file is kept. Settings come from built-in defaults, then
//! environment variables, then command-line flags (applied by the caller).

use std::path::PathBuf;

use foodtruck_types::OutputFormat;
use serde::{Deserialize, Serialize};

/// San Francisco Mobile Food Facility Permit export
pub const DEFAULT_DATA_URL: &str = "https://data.sfgov.org/api/views/rqzj-sfat/rows.csv";

/// Cache file, relative to the working directory
pub const DEFAULT_DATA_FILE: &str = "food_trucks.csv";

pub const DATA_URL_ENV: &str = "FOODTRUCK_DATA_URL";
pub const DATA_FILE_ENV: &str = "FOODTRUCK_DATA_FILE";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Dataset source URL
    #[serde(default = "default_data_url")]
    pub data_url: String,

    /// Local cache of the downloaded dataset
    #[serde(default = "default_data_path")]
    pub data_path: PathBuf,

    /// Default output format (table, json)
    #[serde(default)]
    pub output_format: OutputFormat,
}

fn default_data_url() -> String {
    DEFAULT_DATA_URL.to_string()
}

fn default_data_path() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_url: default_data_url(),
            data_path: default_data_path(),
            output_format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Defaults overridden by `FOODTRUCK_DATA_URL` / `FOODTRUCK_DATA_FILE`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = non_empty(DATA_URL_ENV) {
            config.data_url = url;
        }
        if let Some(path) = non_empty(DATA_FILE_ENV) {
            config.data_path = PathBuf::from(path);
        }
        config
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Food Truck Finder Configuration")?;
        writeln!(f, "===============================")?;
        writeln!(f)?;
        writeln!(f, "Data URL:       {}", self.data_url)?;
        writeln!(f, "Data file:      {}", self.data_path.display())?;
        writeln!(f, "Output format:  {}", self.output_format)?;
        writeln!(f)?;
        writeln!(f, "Overrides:      {}, {}", DATA_URL_ENV, DATA_FILE_ENV)?;
        Ok(())
    }
}
