//! Water Monitor Library
//!
//! Spatial search and time-series analytics over a catalog of water-quality
//! monitoring stations.
//!
//! This library provides tools for:
//! - Loading station catalogs from JSON and deriving status, water class and
//!   alert fields from each station's water quality index (WQI)
//! - Radius search with Haversine distances, map viewport search and
//!   filtered, paginated listings
//! - Trend fitting, anomaly detection, volatility, degradation and risk
//!   scoring over station reading histories
//! - Prediction-ready series and flat feature exports for model training
//! - Side-by-side comparison of per-station history statistics
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use water_monitor::{NearbyQuery, SpatialQueryEngine, StationCatalog};
//!
//! # fn main() -> water_monitor::Result<()> {
//! let json = r#"[
//!     {"id": "PUN-SW-001", "name": "Mula River", "type": "surface_water",
//!      "district": "Pune", "latitude": 18.559, "longitude": 73.808, "wqi": 72.5}
//! ]"#;
//! let (catalog, _stats) = StationCatalog::load_from_json_str(json)?;
//! let engine = SpatialQueryEngine::new(Arc::new(catalog));
//!
//! let result = engine.nearby(&NearbyQuery::new(18.52, 73.85).with_radius(10.0))?;
//! assert_eq!(result.total_found, 1);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod constants;
pub mod error;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod analytics;
        pub mod comparison;
        pub mod history_store;
        pub mod spatial_query;
        pub mod station_catalog;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{
    BoundingBox, GeoPoint, Reading, StationRecord, StationStatus, WaterClass,
};
pub use app::services::analytics::HistoryAnalyzer;
pub use app::services::comparison::{Comparison, StatisticsIndex};
pub use app::services::history_store::HistoryStore;
pub use app::services::spatial_query::{ListQuery, NearbyQuery, SpatialQueryEngine};
pub use app::services::station_catalog::{CatalogHandle, StationCatalog};
pub use config::MonitorConfig;
pub use error::{Error, Result};
