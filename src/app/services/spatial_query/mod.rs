//! Spatial query engine over a station catalog
//!
//! Answers radius, viewport and paginated listing queries. The engine holds a
//! shared snapshot of a [`StationCatalog`] and never mutates it; every query
//! returns a freshly built result borrowing records from that snapshot.
//!
//! Invalid parameters (out-of-range coordinates, non-positive radius, zero
//! limits or page sizes) are reported as `Error::InvalidQuery`. An empty
//! result is not an error.

use crate::app::services::station_catalog::StationCatalog;
use crate::config::SpatialConfig;
use std::sync::Arc;

pub mod geo;
pub mod nearby;
pub mod pagination;
pub mod viewport;

#[cfg(test)]
pub mod tests;

pub use geo::haversine_km;
pub use nearby::NearbyQuery;
pub use pagination::ListQuery;

/// Optional exact-match filters on district and station type
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StationFilter {
    pub district: Option<String>,
    pub station_type: Option<String>,
}

impl StationFilter {
    pub fn new(district: Option<String>, station_type: Option<String>) -> Self {
        Self {
            district,
            station_type,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.district.is_none() && self.station_type.is_none()
    }

    pub fn matches(&self, station: &crate::app::models::StationRecord) -> bool {
        station.matches(self.district.as_deref(), self.station_type.as_deref())
    }
}

/// Location and listing queries over one catalog snapshot
#[derive(Debug, Clone)]
pub struct SpatialQueryEngine {
    catalog: Arc<StationCatalog>,
    config: SpatialConfig,
}

impl SpatialQueryEngine {
    /// Create an engine with default configuration
    pub fn new(catalog: Arc<StationCatalog>) -> Self {
        Self::with_config(catalog, SpatialConfig::default())
    }

    /// Create an engine with explicit configuration
    pub fn with_config(catalog: Arc<StationCatalog>, config: SpatialConfig) -> Self {
        Self { catalog, config }
    }

    /// The catalog snapshot this engine queries
    pub fn catalog(&self) -> &StationCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &SpatialConfig {
        &self.config
    }
}
