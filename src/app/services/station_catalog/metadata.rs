//! Catalog load statistics and metadata

use std::path::PathBuf;
use std::time::Duration;

/// Statistics about a catalog load
#[derive(Debug, Clone, PartialEq)]
pub struct LoadStats {
    /// Number of records present in the input
    pub records_read: usize,

    /// Number of stations installed in the catalog
    pub stations_loaded: usize,

    /// Number of records that carried alerts after classification
    pub stations_with_alerts: usize,

    /// Time taken to parse, validate and index the input
    pub load_duration: Duration,
}

impl LoadStats {
    /// Create new empty load statistics
    pub fn new() -> Self {
        Self {
            records_read: 0,
            stations_loaded: 0,
            stations_with_alerts: 0,
            load_duration: Duration::ZERO,
        }
    }

    /// Loading rate in stations per second
    pub fn loading_rate(&self) -> f64 {
        if self.load_duration.is_zero() {
            0.0
        } else {
            self.stations_loaded as f64 / self.load_duration.as_secs_f64()
        }
    }

    /// Get a summary string of the load
    pub fn summary(&self) -> String {
        format!(
            "Read {} records, loaded {} stations ({} with alerts) in {:.3}s",
            self.records_read,
            self.stations_loaded,
            self.stations_with_alerts,
            self.load_duration.as_secs_f64()
        )
    }
}

impl Default for LoadStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Metadata about a loaded catalog
#[derive(Debug, Clone)]
pub struct CatalogMetadata {
    /// File the catalog was read from
    pub source: Option<PathBuf>,

    pub station_count: usize,

    /// Number of distinct districts
    pub district_count: usize,

    /// Number of distinct station types
    pub type_count: usize,
}

impl CatalogMetadata {
    /// Get a summary string of the catalog
    pub fn summary(&self) -> String {
        let source = self
            .source
            .as_ref()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "<memory>".to_string());
        format!(
            "{} stations across {} districts and {} station types (source: {})",
            self.station_count, self.district_count, self.type_count, source
        )
    }
}
