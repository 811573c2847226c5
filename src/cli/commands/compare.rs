//! Compare command: history statistics side by side

use super::shared::{colored_wqi, load_history, print_json, truncate};
use crate::app::services::comparison::StatisticsIndex;
use crate::cli::args::{Args, CompareArgs, OutputFormat};
use anyhow::Result;
use colored::*;

pub async fn run_compare(args: &Args, compare_args: &CompareArgs) -> Result<()> {
    let store = load_history(args).await?;
    let index = StatisticsIndex::from_store(&store);
    let comparison = index.compare(&compare_args.station_ids);

    if args.output_format == OutputFormat::Json {
        return print_json(&comparison);
    }

    if !comparison.has_data {
        println!(
            "{}",
            "None of the requested stations have reading history".bright_yellow()
        );
        return Ok(());
    }

    println!(
        "{} {} stations",
        "Comparison:".bright_green().bold(),
        comparison.total_stations
    );
    println!();
    println!(
        "{}",
        "ID           | Points |   Avg |   Min |   Max | Latest | Volatility | Trend"
            .bright_white()
            .bold()
    );
    for statistics in comparison.stations.values() {
        println!(
            "{:12} | {:6} | {} | {:5.1} | {:5.1} |  {} | {:10.2} | {}",
            truncate(&statistics.station_id, 12),
            statistics.data_points,
            colored_wqi(statistics.average_wqi),
            statistics.min_wqi,
            statistics.max_wqi,
            colored_wqi(statistics.latest_wqi),
            statistics.volatility,
            statistics.trend
        );
    }

    if !comparison.missing_stations.is_empty() {
        println!();
        println!(
            "{} {}",
            "No data for:".bright_black(),
            comparison.missing_stations.join(", ")
        );
    }

    Ok(())
}
