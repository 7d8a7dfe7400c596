//! CLI definition using clap

use clap::{Parser, Subcommand};
use foodtruck_types::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "foodtruck")]
#[command(version)]
#[command(about = "Find San Francisco food trucks by cuisine, facility type and opening hours")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Local data file. Defaults to $FOODTRUCK_DATA_FILE or food_trucks.csv
    #[arg(long, global = true)]
    pub data_file: Option<PathBuf>,

    /// Dataset URL. Defaults to $FOODTRUCK_DATA_URL or the SF open data export
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Output format (table, json)
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Download the latest food truck data
    Download,

    /// List food trucks based on optional filters
    #[command(visible_alias = "list")]
    ListTrucks {
        /// Filter by type of cuisine (e.g., "tacos")
        #[arg(long)]
        cuisine: Option<String>,

        /// Filter by facility type (e.g., "Truck", "Push Cart")
        #[arg(long)]
        facility_type: Option<String>,

        /// Only trucks whose schedule covers the current local time
        #[arg(long)]
        open_now: bool,
    },

    /// Show the effective configuration
    Config,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_list_alias_and_flags() {
        let cli = Cli::try_parse_from([
            "foodtruck",
            "list",
            "--cuisine",
            "tacos",
            "--facility-type",
            "Push Cart",
            "--open-now",
            "-f",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.format, Some(OutputFormat::Json));
        match cli.command {
            Commands::ListTrucks {
                cuisine,
                facility_type,
                open_now,
            } => {
                assert_eq!(cuisine.as_deref(), Some("tacos"));
                assert_eq!(facility_type.as_deref(), Some("Push Cart"));
                assert!(open_now);
            }
            _ => panic!("expected list-trucks"),
        }
    }

    #[test]
    fn test_global_data_file_before_subcommand() {
        let cli = Cli::try_parse_from(["foodtruck", "--data-file", "/tmp/x.csv", "download"]).unwrap();
        assert_eq!(cli.data_file, Some(PathBuf::from("/tmp/x.csv")));
        assert!(matches!(cli.command, Commands::Download));
    }
}
