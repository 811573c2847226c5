//! Catalog loading from bulk JSON station data
//!
//! The input is either a top-level array of station objects or an object
//! with a `stations` array. Loading is all-or-nothing: the first malformed
//! record, invalid coordinate or duplicate id fails the whole load and no
//! partial catalog is returned.

use super::StationCatalog;
use super::metadata::LoadStats;
use crate::app::models::{RawStationRecord, StationRecord};
use crate::{Error, Result};
use serde_json::Value;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

impl StationCatalog {
    /// Load a catalog from a JSON file
    ///
    /// # Errors
    /// * Returns `Error::Io` if the file cannot be read
    /// * Returns `Error::Json` if the file is not valid JSON
    /// * Returns `Error::CatalogLoad` for malformed or invalid records
    /// * Returns `Error::DuplicateStation` if two records share an id
    pub async fn load_from_path(path: &Path) -> Result<(Self, LoadStats)> {
        info!("Loading station catalog from {}", path.display());

        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| Error::io_at(path, e))?;

        let (mut catalog, stats) = Self::load_from_json_str(&contents)?;
        catalog.source = Some(path.to_path_buf());
        Ok((catalog, stats))
    }

    /// Load a catalog from JSON text
    pub fn load_from_json_str(json: &str) -> Result<(Self, LoadStats)> {
        let document: Value = serde_json::from_str(json)
            .map_err(|e| Error::json("station catalog is not valid JSON", e))?;

        let entries = match document {
            Value::Array(entries) => entries,
            Value::Object(mut object) => match object.remove("stations") {
                Some(Value::Array(entries)) => entries,
                Some(_) => {
                    return Err(Error::catalog_load("'stations' field must be an array"));
                }
                None => {
                    return Err(Error::catalog_load(
                        "expected an array of stations or an object with a 'stations' array",
                    ));
                }
            },
            _ => {
                return Err(Error::catalog_load(
                    "expected an array of stations or an object with a 'stations' array",
                ));
            }
        };

        let mut records = Vec::with_capacity(entries.len());
        for (position, entry) in entries.into_iter().enumerate() {
            let record: RawStationRecord = serde_json::from_value(entry).map_err(|e| {
                Error::catalog_load(format!("station record {} is malformed: {}", position, e))
            })?;
            records.push(record);
        }

        Self::from_raw_records(records)
    }

    /// Validate raw records, derive classifications and index them
    pub fn from_raw_records(records: Vec<RawStationRecord>) -> Result<(Self, LoadStats)> {
        let start_time = Instant::now();
        let mut stats = LoadStats::new();
        stats.records_read = records.len();

        let mut stations = Vec::with_capacity(records.len());
        for (position, raw) in records.into_iter().enumerate() {
            let station = StationRecord::from_raw(raw).map_err(|e| {
                Error::catalog_load(format!("station record {} rejected: {}", position, e))
            })?;
            if station.has_alerts {
                stats.stations_with_alerts += 1;
            }
            stations.push(station);
        }

        let catalog = Self::from_records(stations)?;

        stats.stations_loaded = catalog.station_count();
        stats.load_duration = start_time.elapsed();

        if catalog.is_empty() {
            warn!("Station catalog input contained no stations");
        }

        info!("Station catalog loaded: {}", stats.summary());
        debug!("Catalog metadata: {}", catalog.metadata().summary());

        Ok((catalog, stats))
    }
}
