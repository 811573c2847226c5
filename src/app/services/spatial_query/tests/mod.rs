//! Shared fixtures for spatial query tests

use crate::app::models::StationRecord;
use crate::app::services::spatial_query::SpatialQueryEngine;
use crate::app::services::station_catalog::StationCatalog;
use std::sync::Arc;


/// Centre of the Mula River station, used as the default query point
pub const AUNDH: (f64, f64) = (18.5590, 73.8080);

fn station(id: &str, station_type: &str, district: &str, lat: f64, lon: f64, wqi: f64) -> StationRecord {
    StationRecord::new(id, format!("Station {}", id), station_type, district, lat, lon, wqi).unwrap()
}

/// Catalog order: PUN-SW-001, PUN-GW-002, MUM-SW-001, NAG-GW-001, PUN-SW-003
///
/// From AUNDH: PUN-SW-001 is 0 km, PUN-SW-003 about 8 km, PUN-GW-002 about
/// 14 km, MUM-SW-001 about 120 km and NAG-GW-001 over 500 km away.
pub fn create_test_catalog() -> StationCatalog {
    StationCatalog::from_records(vec![
        station("PUN-SW-001", "surface_water", "Pune", 18.5590, 73.8080, 82.0),
        station("PUN-GW-002", "groundwater", "Pune", 18.5089, 73.9260, 64.0),
        station("MUM-SW-001", "surface_water", "Mumbai", 19.0728, 72.8826, 31.0),
        station("NAG-GW-001", "groundwater", "Nagpur", 21.1458, 79.0882, 91.0),
        station("PUN-SW-003", "surface_water", "Pune", 18.6298, 73.7997, 48.0),
    ])
    .unwrap()
}

pub fn create_test_engine() -> SpatialQueryEngine {
    SpatialQueryEngine::new(Arc::new(create_test_catalog()))
}

/// A larger synthetic catalog laid out on a 0.05 degree grid around Pune
pub fn create_grid_engine(rows: usize, cols: usize) -> SpatialQueryEngine {
    let mut records = Vec::with_capacity(rows * cols);
    for row in 0..rows {
        for col in 0..cols {
            let district = if row % 2 == 0 { "Pune" } else { "Satara" };
            let station_type = if col % 3 == 0 { "groundwater" } else { "surface_water" };
            records.push(station(
                &format!("GRID-{:02}-{:02}", row, col),
                station_type,
                district,
                18.0 + row as f64 * 0.05,
                73.5 + col as f64 * 0.05,
                40.0 + ((row * cols + col) % 60) as f64,
            ));
        }
    }
    SpatialQueryEngine::new(Arc::new(StationCatalog::from_records(records).unwrap()))
}

pub fn ids<'a, I>(stations: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a StationRecord>,
{
    stations.into_iter().map(|s| s.id.as_str()).collect()
}
