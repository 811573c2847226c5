//! Command implementations for the water monitor CLI
//!
//! Each subcommand lives in its own module. Commands load their inputs
//! through [`shared`], call one library operation and render the result as
//! human-readable text or JSON.

pub mod analyze;
pub mod compare;
pub mod shared;
pub mod stations;

use crate::cli::args::{Args, Commands};
use anyhow::Result;

/// Dispatch to the subcommand handler
///
/// - `stations`: catalog queries and summaries
/// - `analyze`: analytics reports for one station history
/// - `compare`: side-by-side history statistics
pub async fn run(args: Args) -> Result<()> {
    shared::setup_logging(&args)?;

    match &args.command {
        Some(Commands::Stations(stations_args)) => {
            stations::run_stations(&args, stations_args).await
        }
        Some(Commands::Analyze(analyze_args)) => analyze::run_analyze(&args, analyze_args).await,
        Some(Commands::Compare(compare_args)) => compare::run_compare(&args, compare_args).await,
        None => Ok(()),
    }
}
