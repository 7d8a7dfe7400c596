//! Command handlers

use std::time::Duration;

use foodtruck_app::app::{download_dataset, list_trucks};
use foodtruck_app::config::Config;
use foodtruck_app::repository::open_truck_repo;
use foodtruck_domain::service::TruckFilter;
use foodtruck_types::{OutputFormat, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use crate::cli::{Cli, Commands};
use crate::output::output_listings;

pub fn execute(cli: Cli) -> Result<()> {
    let mut config = Config::from_env();

    // Override from CLI args
    if let Some(ref path) = cli.data_file {
        config.data_path = path.clone();
    }
    if let Some(ref url) = cli.url {
        config.data_url = url.clone();
    }
    if let Some(format) = cli.format {
        config.output_format = format;
    }
    debug!(?config, "effective configuration");

    match cli.command {
        Commands::Download => cmd_download(&config),

        Commands::ListTrucks {
            cuisine,
            facility_type,
            open_now,
        } => {
            let filter = TruckFilter {
                cuisine,
                facility_type,
                open_now,
            };
            cmd_list_trucks(&config, &filter)
        }

        Commands::Config => cmd_config(&config),
    }
}

fn cmd_download(config: &Config) -> Result<()> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(format!("Downloading {}", config.data_url));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = download_dataset(config);
    spinner.finish_and_clear();

    let bytes = result?;
    println!(
        "Data downloaded and saved to {} ({} bytes)",
        config.data_path.display(),
        bytes
    );
    Ok(())
}

fn cmd_list_trucks(config: &Config, filter: &TruckFilter) -> Result<()> {
    let repo = open_truck_repo(config);
    let listings = list_trucks(&repo, filter)?;
    output_listings(config.output_format, &listings)
}

fn cmd_config(config: &Config) -> Result<()> {
    match config.output_format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(config)?),
        OutputFormat::Table => print!("{}", config),
    }
    Ok(())
}
