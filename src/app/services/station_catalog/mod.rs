//! Station catalog holding the loaded set of monitoring stations
//!
//! The catalog keeps records in load order (the "catalog order" every query
//! preserves) and indexes them by id for O(1) lookups. A catalog is immutable
//! once built; reloading produces a new catalog that replaces the old one
//! wholesale (see [`CatalogHandle`]).

use crate::app::models::StationRecord;
use crate::{Error, Result};
use std::collections::HashMap;
use std::path::PathBuf;

pub mod handle;
pub mod loader;
pub mod metadata;
pub mod summary;

#[cfg(test)]
pub mod tests;

pub use handle::CatalogHandle;
pub use metadata::{CatalogMetadata, LoadStats};
pub use summary::{CatalogSummary, DistrictStatistics};

/// Read-only collection of station records in catalog order
#[derive(Debug, Clone)]
pub struct StationCatalog {
    /// Station records in the order they were loaded
    pub(crate) stations: Vec<StationRecord>,

    /// Position of each station in `stations`, keyed by id
    pub(crate) index: HashMap<String, usize>,

    /// File the catalog was loaded from, if any
    pub(crate) source: Option<PathBuf>,
}

impl StationCatalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self {
            stations: Vec::new(),
            index: HashMap::new(),
            source: None,
        }
    }

    /// Build a catalog from already-validated records, rejecting duplicate ids
    pub fn from_records(records: Vec<StationRecord>) -> Result<Self> {
        let mut index = HashMap::with_capacity(records.len());
        for (position, station) in records.iter().enumerate() {
            if index.insert(station.id.clone(), position).is_some() {
                return Err(Error::duplicate_station(station.id.clone()));
            }
        }

        Ok(Self {
            stations: records,
            index,
            source: None,
        })
    }

    /// Get a station by id (O(1) lookup)
    pub fn get_station(&self, id: &str) -> Option<&StationRecord> {
        self.index.get(id).map(|&position| &self.stations[position])
    }

    /// Get a station by id, failing if it is not in the catalog
    pub fn require_station(&self, id: &str) -> Result<&StationRecord> {
        self.get_station(id)
            .ok_or_else(|| Error::station_not_found(id))
    }

    /// Check if a station exists in the catalog
    pub fn contains_station(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Get the total number of stations in the catalog
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Iterate stations in catalog order
    pub fn iter(&self) -> std::slice::Iter<'_, StationRecord> {
        self.stations.iter()
    }

    /// Get catalog metadata
    pub fn metadata(&self) -> CatalogMetadata {
        let mut types: Vec<&str> = self
            .stations
            .iter()
            .map(|s| s.station_type.as_str())
            .collect();
        types.sort_unstable();
        types.dedup();

        CatalogMetadata {
            source: self.source.clone(),
            station_count: self.stations.len(),
            district_count: self.districts().len(),
            type_count: types.len(),
        }
    }
}

impl Default for StationCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a StationCatalog {
    type Item = &'a StationRecord;
    type IntoIter = std::slice::Iter<'a, StationRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.stations.iter()
    }
}
