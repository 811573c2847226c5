//! Shared test utilities and fixtures for station catalog tests

use crate::app::models::StationRecord;
use crate::app::services::station_catalog::StationCatalog;
use std::fs;
use std::path::{Path, PathBuf};


/// Create a test station with standard parameters
pub fn create_test_station(
    id: &str,
    name: &str,
    station_type: &str,
    district: &str,
    lat: f64,
    lon: f64,
    wqi: f64,
) -> StationRecord {
    StationRecord::new(id, name, station_type, district, lat, lon, wqi).unwrap()
}

/// Five stations across Pune, Mumbai and Nagpur covering every status bucket
pub fn create_test_catalog() -> StationCatalog {
    StationCatalog::from_records(vec![
        create_test_station(
            "PUN-SW-001",
            "Mula River at Aundh",
            "surface_water",
            "Pune",
            18.5590,
            73.8080,
            82.0,
        ),
        create_test_station(
            "PUN-GW-002",
            "Hadapsar Well",
            "groundwater",
            "Pune",
            18.5089,
            73.9260,
            64.0,
        ),
        create_test_station(
            "MUM-SW-001",
            "Mithi River at Kurla",
            "surface_water",
            "Mumbai",
            19.0728,
            72.8826,
            31.0,
        ),
        create_test_station(
            "NAG-GW-001",
            "Nagpur Well 1",
            "groundwater",
            "Nagpur",
            21.1458,
            79.0882,
            91.0,
        ),
        create_test_station(
            "PUN-SW-003",
            "Pavana at Pimpri",
            "surface_water",
            "Pune",
            18.6298,
            73.7997,
            48.0,
        ),
    ])
    .unwrap()
}

/// JSON for a two-station catalog in the array layout
pub const TWO_STATION_JSON: &str = r#"[
    {"id": "PUN-SW-001", "name": "Mula River at Aundh", "type": "surface_water",
     "district": "Pune", "latitude": 18.5590, "longitude": 73.8080, "wqi": 82.0},
    {"id": "MUM-SW-001", "name": "Mithi River at Kurla", "type": "surface_water",
     "district": "Mumbai", "latitude": 19.0728, "longitude": 72.8826, "wqi": 31.0}
]"#;

/// Write a catalog file into a test directory
pub fn write_catalog_file(dir: &Path, filename: &str, contents: &str) -> std::io::Result<PathBuf> {
    let path = dir.join(filename);
    fs::write(&path, contents)?;
    Ok(path)
}
