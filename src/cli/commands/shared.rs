//! Shared components for CLI commands
//!
//! Logging setup, input loading and output helpers used by every command.

use crate::app::models::{StationRecord, StationStatus};
use crate::app::services::history_store::HistoryStore;
use crate::app::services::station_catalog::StationCatalog;
use crate::cli::args::Args;
use crate::config::MonitorConfig;
use anyhow::{Context, Result};
use colored::*;
use serde::Serialize;
use tracing::debug;

/// Set up structured logging on stderr
///
/// `RUST_LOG` overrides the level implied by `--verbose`/`--quiet`.
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("water_monitor={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .try_init()
        .context("Failed to initialize logging")?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Configuration from `--config`, or defaults
pub fn load_config(args: &Args) -> Result<MonitorConfig> {
    match &args.config_file {
        Some(path) => MonitorConfig::from_json_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display())),
        None => Ok(MonitorConfig::default()),
    }
}

/// Load the station catalog named by `--catalog` or the default location
pub async fn load_catalog(args: &Args) -> Result<StationCatalog> {
    let path = args
        .catalog_path()
        .context("Could not determine user data directory; pass --catalog")?;

    let (catalog, stats) = StationCatalog::load_from_path(&path)
        .await
        .with_context(|| format!("Failed to load station catalog from {}", path.display()))?;

    debug!("{}", stats.summary());
    Ok(catalog)
}

/// Load reading histories named by `--history` or the default location
pub async fn load_history(args: &Args) -> Result<HistoryStore> {
    let path = args
        .history_path()
        .context("Could not determine user data directory; pass --history")?;

    HistoryStore::load_from_path(&path)
        .await
        .with_context(|| format!("Failed to load reading history from {}", path.display()))
}

/// Pretty-print a result as JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("Failed to serialize result")?;
    println!("{}", rendered);
    Ok(())
}

/// WQI value colored by its status bucket
pub fn colored_wqi(wqi: f64) -> ColoredString {
    let text = format!("{:5.1}", wqi);
    match StationStatus::from_wqi(wqi) {
        StationStatus::Excellent => text.bright_green(),
        StationStatus::Good => text.green(),
        StationStatus::Moderate => text.yellow(),
        StationStatus::Poor => text.bright_red(),
    }
}

/// Truncate a name for fixed-width tables
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() > width {
        let kept: String = text.chars().take(width.saturating_sub(3)).collect();
        kept + "..."
    } else {
        text.to_string()
    }
}

/// Print a station table, with an optional distance column
pub fn print_station_table<'a, I>(rows: I)
where
    I: IntoIterator<Item = (&'a StationRecord, Option<f64>)>,
{
    println!(
        "{}",
        "ID           | Name                     | District     | Type           |   WQI | Status    | Class | Dist(km)"
            .bright_white()
            .bold()
    );
    println!(
        "-------------|--------------------------|--------------|----------------|-------|-----------|-------|---------"
    );
    for (station, distance) in rows {
        let distance = distance
            .map(|d| format!("{:8.2}", d))
            .unwrap_or_else(|| "       -".to_string());
        println!(
            "{:12} | {:24} | {:12} | {:14} | {} | {:9} | {:5} | {}",
            truncate(&station.id, 12),
            truncate(&station.name, 24),
            truncate(&station.district, 12),
            truncate(&station.station_type, 14),
            colored_wqi(station.wqi),
            station.status.as_str(),
            station.water_class.as_str(),
            distance
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Mula River", 24), "Mula River");
        assert_eq!(truncate("Mula-Mutha Confluence Bund Garden", 12), "Mula-Muth...");
        assert_eq!(truncate("abcdef", 6), "abcdef");
    }
}
