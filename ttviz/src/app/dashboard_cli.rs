use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::DashboardError;

/// command line tool building static travel time dashboards from a table of
/// 7x7 adjustment matrices per origin-destination pair
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct TtvizCliArguments {
    /// select the dashboard operation to run
    #[command(subcommand)]
    pub op: TtvizOperation,
}

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum TtvizOperation {
    /// builds the interactive dashboard (index.html) along with the
    /// figure descriptors under static/
    Dashboard {
        /// travel time table CSV with Origin, Destination and 49 value columns
        #[arg(short, long)]
        input_file: String,
        /// output directory path.
        #[arg(short, long, default_value_t = String::from("."))]
        output_directory: String,
        /// optional TOML dashboard configuration
        #[arg(short, long)]
        config_file: Option<String>,
    },
    /// builds the static grid of heatmaps with headers and a colorbar
    /// (heatmap.html)
    Heatmap {
        /// travel time table CSV with Origin, Destination and 49 value columns
        #[arg(short, long)]
        input_file: String,
        /// output directory path.
        #[arg(short, long, default_value_t = String::from("."))]
        output_directory: String,
        /// optional TOML dashboard configuration
        #[arg(short, long)]
        config_file: Option<String>,
    },
    /// writes only the JSON figure descriptors, static/main-grid.json and
    /// one static/details/{origin}_{destination}.json per pair
    Figures {
        /// travel time table CSV with Origin, Destination and 49 value columns
        #[arg(short, long)]
        input_file: String,
        /// output directory path.
        #[arg(short, long, default_value_t = String::from("."))]
        output_directory: String,
        /// optional TOML dashboard configuration
        #[arg(short, long)]
        config_file: Option<String>,
    },
    /// geocodes every location of the table into the geocode cache file
    Geocode {
        /// travel time table CSV with Origin, Destination and 49 value columns
        #[arg(short, long)]
        input_file: String,
        /// optional TOML dashboard configuration
        #[arg(short, long)]
        config_file: Option<String>,
    },
}

impl TtvizOperation {
    pub fn run(&self) -> Result<(), DashboardError> {
        match self {
            TtvizOperation::Dashboard {
                input_file,
                output_directory,
                config_file,
            } => super::run_dashboard(
                Path::new(input_file),
                Path::new(output_directory),
                config_file.as_deref(),
            ),
            TtvizOperation::Heatmap {
                input_file,
                output_directory,
                config_file,
            } => super::run_heatmap(
                Path::new(input_file),
                Path::new(output_directory),
                config_file.as_deref(),
            ),
            TtvizOperation::Figures {
                input_file,
                output_directory,
                config_file,
            } => super::run_figures(
                Path::new(input_file),
                Path::new(output_directory),
                config_file.as_deref(),
            ),
            TtvizOperation::Geocode {
                input_file,
                config_file,
            } => super::run_geocode(Path::new(input_file), config_file.as_deref()),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_dashboard_arguments() {
        let args = TtvizCliArguments::try_parse_from([
            "ttviz",
            "dashboard",
            "--input-file",
            "data/comprehensive_travel_time_adjustments.csv",
            "--output-directory",
            "site",
        ])
        .expect("should parse arguments");
        match args.op {
            TtvizOperation::Dashboard {
                input_file,
                output_directory,
                config_file,
            } => {
                assert_eq!(input_file, "data/comprehensive_travel_time_adjustments.csv");
                assert_eq!(output_directory, "site");
                assert!(config_file.is_none());
            }
            other => panic!("expected dashboard operation, found {other:?}"),
        }
    }

    #[test]
    fn test_geocode_requires_input() {
        assert!(TtvizCliArguments::try_parse_from(["ttviz", "geocode"]).is_err());
        let args = TtvizCliArguments::try_parse_from(["ttviz", "geocode", "-i", "t.csv", "-c", "d.toml"])
            .expect("should parse arguments");
        assert!(matches!(
            args.op,
            TtvizOperation::Geocode { config_file: Some(ref c), .. } if c == "d.toml"
        ));
    }
}
