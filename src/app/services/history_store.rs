//! In-memory store of station reading histories
//!
//! Histories are loaded from a JSON object mapping station id to an array of
//! readings. Each history is sorted most-recent-first on load, which is the
//! order the analytics functions expect.

use crate::app::models::Reading;
use crate::{Error, Result};
use std::cmp::Reverse;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Reading histories keyed by station id
#[derive(Debug, Clone, Default)]
pub struct HistoryStore {
    histories: BTreeMap<String, Vec<Reading>>,
    source: Option<PathBuf>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from per-station readings, sorting each history
    pub fn from_histories<I>(histories: I) -> Self
    where
        I: IntoIterator<Item = (String, Vec<Reading>)>,
    {
        let mut store = Self::new();
        for (station_id, readings) in histories {
            store.insert(station_id, readings);
        }
        store
    }

    /// Load histories from a JSON file
    ///
    /// # Errors
    /// * Returns `Error::Io` if the file cannot be read
    /// * Returns `Error::Json` if the file is not a map of reading arrays
    pub async fn load_from_path(path: &Path) -> Result<Self> {
        info!("Loading reading histories from {}", path.display());

        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| Error::io_at(path, e))?;

        let mut store = Self::load_from_json_str(&contents)?;
        store.source = Some(path.to_path_buf());
        Ok(store)
    }

    /// Load histories from JSON text
    pub fn load_from_json_str(json: &str) -> Result<Self> {
        let raw: BTreeMap<String, Vec<Reading>> = serde_json::from_str(json)
            .map_err(|e| Error::json("history data must map station ids to reading arrays", e))?;

        let store = Self::from_histories(raw);
        info!(
            "Loaded {} readings for {} stations",
            store.reading_count(),
            store.station_count()
        );
        Ok(store)
    }

    /// Insert or replace the history of one station
    pub fn insert(&mut self, station_id: impl Into<String>, mut readings: Vec<Reading>) {
        let station_id = station_id.into();
        let unparsable = sort_most_recent_first(&mut readings);
        if unparsable > 0 {
            warn!(
                "Station {}: {} readings have unparsable timestamps and sort last",
                station_id, unparsable
            );
        }
        debug!("Station {}: {} readings", station_id, readings.len());
        self.histories.insert(station_id, readings);
    }

    /// History of a station, most recent first; empty if unknown
    pub fn history(&self, station_id: &str) -> &[Reading] {
        self.histories
            .get(station_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn contains_station(&self, station_id: &str) -> bool {
        self.histories.contains_key(station_id)
    }

    /// Station ids in sorted order
    pub fn station_ids(&self) -> impl Iterator<Item = &str> {
        self.histories.keys().map(String::as_str)
    }

    /// Iterate (station id, history) pairs in id order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Reading])> {
        self.histories
            .iter()
            .map(|(id, readings)| (id.as_str(), readings.as_slice()))
    }

    pub fn station_count(&self) -> usize {
        self.histories.len()
    }

    pub fn reading_count(&self) -> usize {
        self.histories.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.histories.is_empty()
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

/// Sort readings newest first and return how many timestamps failed to parse
///
/// Parseable timestamps are compared as instants. Unparsable ones sort after
/// them, in descending string order.
pub fn sort_most_recent_first(readings: &mut [Reading]) -> usize {
    let unparsable = readings
        .iter()
        .filter(|reading| reading.parsed_timestamp().is_none())
        .count();
    readings.sort_by_cached_key(|reading| {
        Reverse((reading.parsed_timestamp(), reading.timestamp.clone()))
    });
    unparsable
}
