//! Command-line front end for the walkability engine.
//!
//! The `analyze` subcommand runs the full pipeline: resolve the centre
//! (explicit coordinates or a district preset), fetch the isochrone and the
//! POIs, score, and render a plain-text report, optionally exporting the
//! full report as JSON. The `districts` subcommand lists the built-in
//! presets.

#![forbid(unsafe_code)]

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use thiserror::Error;
use walkability_core::{Category, EngineError, FetchError};
use walkability_data::ClientBuildError;

mod analyze;
mod districts;
mod render;

/// Environment variable consulted for the OpenRouteService API key.
pub const ENV_ORS_API_KEY: &str = "WALKABILITY_ORS_API_KEY";

/// Run the CLI with the current process arguments and environment.
///
/// # Errors
/// Returns a [`CliError`] for argument, configuration, fetch, engine or
/// output failures; the binary prints it to stderr and exits non-zero.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Analyze(args) => analyze::run(&args),
        Command::Districts => {
            districts::print_districts();
            Ok(())
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "walkability",
    about = "Score how walkable a location is from its reachable amenities",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Analyse one location and print the walkability report.
    Analyze(AnalyzeArgs),
    /// List the built-in district presets.
    Districts,
}

/// CLI arguments for the `analyze` subcommand.
#[derive(Debug, Parser)]
struct AnalyzeArgs {
    /// Latitude of the centre point (WGS84 degrees).
    #[arg(long, requires = "lon", allow_negative_numbers = true)]
    lat: Option<f64>,
    /// Longitude of the centre point (WGS84 degrees).
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    lon: Option<f64>,
    /// Analyse a named district preset instead of raw coordinates.
    #[arg(long, conflicts_with_all = ["lat", "lon"])]
    district: Option<String>,
    /// Walking time limit in minutes (interactive range is 5-20).
    #[arg(long, default_value_t = 15)]
    minutes: u16,
    /// Categories to analyse, comma separated.
    #[arg(
        long,
        value_delimiter = ',',
        default_values_t = [
            Category::Supermarket,
            Category::Pharmacy,
            Category::Doctor,
            Category::School,
        ]
    )]
    categories: Vec<Category>,
    /// OpenRouteService API key.
    #[arg(long, env = ENV_ORS_API_KEY, hide_env_values = true)]
    api_key: String,
    /// Override the OpenRouteService base URL.
    #[arg(long, value_name = "url")]
    ors_url: Option<String>,
    /// Override the Overpass interpreter URL.
    #[arg(long, value_name = "url")]
    overpass_url: Option<String>,
    /// Also write the full report as JSON to this path.
    #[arg(long, value_name = "path")]
    json: Option<Utf8PathBuf>,
}

/// Errors emitted by the walkability CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Neither coordinates nor a district preset were given.
    #[error("specify a centre via --lat/--lon or --district")]
    MissingLocation,
    /// The requested district preset does not exist.
    #[error("unknown district '{name}' (see the districts subcommand)")]
    UnknownDistrict {
        /// Name as the user typed it.
        name: String,
    },
    /// Building an HTTP client failed.
    #[error(transparent)]
    ClientBuild(#[from] ClientBuildError),
    /// A fetch collaborator failed; no report was produced.
    #[error("failed to fetch analysis data: {0}")]
    Fetch(#[from] FetchError),
    /// The scoring engine rejected the input.
    #[error("invalid analysis input: {0}")]
    Engine(#[from] EngineError),
    /// Serialising the report to JSON failed.
    #[error("failed to serialise the report: {0}")]
    SerialiseReport(#[from] serde_json::Error),
    /// Writing the JSON report failed.
    #[error("failed to write report to {path}: {source}")]
    WriteReport {
        /// Target path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
}
