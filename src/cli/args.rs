//! Command-line argument definitions for the water monitor
//!
//! The CLI is a thin front end over the library: every subcommand maps onto
//! one catalog, spatial or analytics operation.

use crate::app::models::{StationStatus, WaterClass};
use crate::constants::DEFAULT_DATA_DIR_NAME;
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the water-quality station monitor
#[derive(Debug, Clone, Parser)]
#[command(
    name = "water-monitor",
    version,
    about = "Query water-quality monitoring stations and analyze their reading histories",
    long_about = "Loads a catalog of water-quality monitoring stations and answers spatial \
                  queries (nearby stations, map viewports, paginated listings) and temporal \
                  queries over station reading histories (trends, anomalies, risk, feature export)."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Station catalog JSON file
    ///
    /// An array of station objects or an object with a `stations` array.
    /// Defaults to stations.json in the user data directory.
    #[arg(long = "catalog", value_name = "FILE", global = true)]
    pub catalog: Option<PathBuf>,

    /// Reading history JSON file mapping station ids to reading arrays
    ///
    /// Defaults to history.json in the user data directory.
    #[arg(long = "history", value_name = "FILE", global = true)]
    pub history: Option<PathBuf>,

    /// Configuration file (JSON) overriding query and analytics defaults
    #[arg(short = 'c', long = "config", value_name = "FILE", global = true)]
    pub config_file: Option<PathBuf>,

    /// Output format for results
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        global = true,
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase logging verbosity (-v: debug, -vv: trace)"
    )]
    pub verbose: u8,

    /// Only log warnings and errors
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Suppress informational logging"
    )]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Spatial queries and summaries over the station catalog
    Stations(StationsArgs),
    /// Analyze the reading history of one station
    Analyze(AnalyzeArgs),
    /// Compare history statistics across stations
    Compare(CompareArgs),
}

#[derive(Debug, Clone, ClapArgs)]
pub struct StationsArgs {
    #[command(subcommand)]
    pub query: StationsQuery,
}

/// Catalog queries
#[derive(Debug, Clone, Subcommand)]
pub enum StationsQuery {
    /// Stations within a radius of a point, nearest first
    Nearby {
        /// Latitude of the query point in decimal degrees
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,

        /// Longitude of the query point in decimal degrees
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,

        /// Search radius in km (defaults to the configured radius)
        #[arg(short = 'r', long = "radius", value_name = "KM", allow_negative_numbers = true)]
        radius_km: Option<f64>,

        /// Maximum stations to collect (defaults to the configured limit)
        #[arg(short = 'l', long)]
        limit: Option<usize>,

        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Every station inside a map viewport
    Viewport {
        #[arg(long, allow_negative_numbers = true)]
        north: f64,
        #[arg(long, allow_negative_numbers = true)]
        south: f64,
        #[arg(long, allow_negative_numbers = true)]
        east: f64,
        #[arg(long, allow_negative_numbers = true)]
        west: f64,
    },

    /// Paginated station listing in catalog order
    List {
        /// Page number, starting at 1
        #[arg(short = 'p', long, default_value_t = 1)]
        page: usize,

        /// Stations per page; 1000 or more returns everything at once
        #[arg(long = "per-page")]
        per_page: Option<usize>,

        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Catalog-wide statistics
    Summary {
        /// Also list the stations carrying alerts
        #[arg(long)]
        alerts: bool,

        /// Also list the stations with this status (e.g. good, poor)
        #[arg(long)]
        status: Option<StationStatus>,

        /// Also list the stations in this water class (A-E)
        #[arg(long = "class", value_name = "CLASS")]
        water_class: Option<WaterClass>,
    },

    /// Details of a single station
    Show {
        /// Station id
        id: String,
    },
}

/// Optional exact-match filters shared by nearby and list
#[derive(Debug, Clone, Default, ClapArgs)]
pub struct FilterArgs {
    /// Only stations in this district
    #[arg(long)]
    pub district: Option<String>,

    /// Only stations of this type (e.g. surface_water, groundwater)
    #[arg(long = "type", value_name = "TYPE")]
    pub station_type: Option<String>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct AnalyzeArgs {
    /// Station id
    pub station_id: String,

    /// Report to produce
    #[arg(long, value_enum, default_value = "trend")]
    pub report: ReportKind,

    /// Number of newest readings in a prediction series
    #[arg(long)]
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct CompareArgs {
    /// Station ids to compare
    #[arg(required = true, num_args = 1..)]
    pub station_ids: Vec<String>,
}

/// Analytics reports available through `analyze`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportKind {
    /// Chronological series for forecasting models
    Series,
    /// WQI and parameter trends
    Trend,
    /// Variance-threshold anomalies
    Anomalies,
    /// Volatility, degradation and risk tier
    Risk,
    /// Flat feature records
    Export,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON for scripting
    Json,
}

impl Args {
    /// Log level implied by the verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            return "warn";
        }
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }

    /// Catalog path, falling back to the user data directory
    pub fn catalog_path(&self) -> Option<PathBuf> {
        self.catalog
            .clone()
            .or_else(|| default_data_dir().map(|dir| dir.join("stations.json")))
    }

    /// History path, falling back to the user data directory
    pub fn history_path(&self) -> Option<PathBuf> {
        self.history
            .clone()
            .or_else(|| default_data_dir().map(|dir| dir.join("history.json")))
    }
}

/// `<user data dir>/water-monitor`, if the platform has a data directory
pub fn default_data_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join(DEFAULT_DATA_DIR_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("water-monitor").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_nearby_parsing() {
        let args = parse(&[
            "stations", "nearby", "--lat", "18.52", "--lon", "73.85", "--radius", "10", "--type",
            "groundwater",
        ]);
        match args.command {
            Some(Commands::Stations(StationsArgs {
                query:
                    StationsQuery::Nearby {
                        lat,
                        lon,
                        radius_km,
                        limit,
                        filter,
                    },
            })) => {
                assert_eq!(lat, 18.52);
                assert_eq!(lon, 73.85);
                assert_eq!(radius_km, Some(10.0));
                assert_eq!(limit, None);
                assert_eq!(filter.station_type.as_deref(), Some("groundwater"));
                assert_eq!(filter.district, None);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_negative_coordinates() {
        let args = parse(&[
            "stations", "viewport", "--north", "-10", "--south", "-20", "--east", "-40", "--west",
            "-50",
        ]);
        match args.command {
            Some(Commands::Stations(StationsArgs {
                query:
                    StationsQuery::Viewport {
                        north,
                        south,
                        east,
                        west,
                    },
            })) => {
                assert_eq!((north, south, east, west), (-10.0, -20.0, -40.0, -50.0));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = parse(&[
            "analyze",
            "PUN-SW-001",
            "--report",
            "risk",
            "--format",
            "json",
            "--catalog",
            "/tmp/stations.json",
        ]);
        assert_eq!(args.output_format, OutputFormat::Json);
        assert_eq!(args.catalog, Some(PathBuf::from("/tmp/stations.json")));
        match args.command {
            Some(Commands::Analyze(analyze)) => {
                assert_eq!(analyze.station_id, "PUN-SW-001");
                assert_eq!(analyze.report, ReportKind::Risk);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_summary_classification_filters() {
        let args = parse(&["stations", "summary", "--status", "poor", "--class", "Class C"]);
        match args.command {
            Some(Commands::Stations(StationsArgs {
                query:
                    StationsQuery::Summary {
                        alerts,
                        status,
                        water_class,
                    },
            })) => {
                assert!(!alerts);
                assert_eq!(status, Some(StationStatus::Poor));
                assert_eq!(water_class, Some(WaterClass::C));
            }
            other => panic!("unexpected command: {:?}", other),
        }

        assert!(
            Args::try_parse_from(["water-monitor", "stations", "summary", "--class", "F"]).is_err()
        );
    }

    #[test]
    fn test_compare_requires_ids() {
        assert!(Args::try_parse_from(["water-monitor", "compare"]).is_err());

        let args = parse(&["compare", "A", "B"]);
        match args.command {
            Some(Commands::Compare(compare)) => assert_eq!(compare.station_ids, vec!["A", "B"]),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_log_level() {
        assert_eq!(parse(&[]).get_log_level(), "info");
        assert_eq!(parse(&["-v"]).get_log_level(), "debug");
        assert_eq!(parse(&["-vv"]).get_log_level(), "trace");
        assert_eq!(parse(&["-q"]).get_log_level(), "warn");
        assert!(Args::try_parse_from(["water-monitor", "-q", "-v"]).is_err());
    }

    #[test]
    fn test_explicit_paths_win() {
        let args = parse(&["--catalog", "a.json", "--history", "b.json"]);
        assert_eq!(args.catalog_path(), Some(PathBuf::from("a.json")));
        assert_eq!(args.history_path(), Some(PathBuf::from("b.json")));
    }
}
