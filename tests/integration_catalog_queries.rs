//! Integration tests for catalog loading and spatial queries
//!
//! These tests load catalogs from JSON files on disk and drive the public
//! query API end to end.

use std::sync::Arc;
use tempfile::NamedTempFile;
use water_monitor::app::models::{BoundingBox, StationStatus, WaterClass};
use water_monitor::app::services::spatial_query::haversine_km;
use water_monitor::{
    CatalogHandle, Error, GeoPoint, ListQuery, MonitorConfig, NearbyQuery, SpatialQueryEngine,
    StationCatalog,
};

/// Four Maharashtra stations mixing current and legacy field names
const CATALOG_JSON: &str = r#"{
    "generatedAt": "2024-05-05T00:00:00Z",
    "stations": [
        {"id": "PUN-SW-001", "name": "Mula River at Aundh", "type": "surface_water",
         "district": "Pune", "latitude": 18.5590, "longitude": 73.8080, "wqi": 82.0},
        {"station_id": "PUN-GW-002", "name": "Kharadi Borewell", "stationType": "groundwater",
         "district": "Pune", "latitude": 18.5089, "longitude": 73.9260, "wqi": 64.0},
        {"id": "MUM-SW-001", "name": "Mithi River at Mahim", "type": "surface_water",
         "district": "Mumbai", "latitude": 19.0728, "longitude": 72.8826, "wqi": 31.0,
         "state": "Maharashtra"},
        {"id": "NAG-GW-001", "name": "Nagpur City Well", "type": "groundwater",
         "district": "Nagpur", "latitude": 21.1458, "longitude": 79.0882, "wqi": 91.0}
    ]
}"#;

fn write_temp(contents: &str) -> NamedTempFile {
    let file = NamedTempFile::new().unwrap();
    std::fs::write(file.path(), contents).unwrap();
    file
}

async fn load_test_catalog() -> StationCatalog {
    let file = write_temp(CATALOG_JSON);
    let (catalog, stats) = StationCatalog::load_from_path(file.path()).await.unwrap();
    assert_eq!(stats.records_read, 4);
    assert_eq!(stats.stations_loaded, 4);
    assert_eq!(stats.stations_with_alerts, 2);
    catalog
}

#[tokio::test]
async fn test_load_derives_classifications() {
    let catalog = load_test_catalog().await;

    let kharadi = catalog.get_station("PUN-GW-002").unwrap();
    assert_eq!(kharadi.station_type, "groundwater");
    assert_eq!(kharadi.status, StationStatus::Moderate);
    assert_eq!(kharadi.water_class, WaterClass::C);
    assert!(kharadi.has_alerts);
    assert_eq!(kharadi.alert_count, 1);

    let mithi = catalog.get_station("MUM-SW-001").unwrap();
    assert_eq!(mithi.status, StationStatus::Poor);
    assert_eq!(mithi.water_class, WaterClass::E);
    assert_eq!(mithi.alert_count, 3);

    let nagpur = catalog.get_station("NAG-GW-001").unwrap();
    assert_eq!(nagpur.water_class, WaterClass::A);
    assert!(!nagpur.has_alerts);
}

#[tokio::test]
async fn test_load_failures_are_fatal() {
    let duplicate = write_temp(
        r#"[
            {"id": "A", "name": "a", "type": "t", "district": "d", "latitude": 1, "longitude": 1, "wqi": 50},
            {"id": "A", "name": "b", "type": "t", "district": "d", "latitude": 2, "longitude": 2, "wqi": 60}
        ]"#,
    );
    let result = StationCatalog::load_from_path(duplicate.path()).await;
    assert!(matches!(result, Err(Error::DuplicateStation { .. })));

    let out_of_range = write_temp(
        r#"[{"id": "A", "name": "a", "type": "t", "district": "d", "latitude": 95, "longitude": 1, "wqi": 50}]"#,
    );
    assert!(StationCatalog::load_from_path(out_of_range.path()).await.is_err());

    let truncated = write_temp(r#"[{"id": "A", "name": "a""#);
    assert!(matches!(
        StationCatalog::load_from_path(truncated.path()).await,
        Err(Error::Json { .. })
    ));
}

#[tokio::test]
async fn test_nearby_end_to_end() {
    let engine = SpatialQueryEngine::new(Arc::new(load_test_catalog().await));

    let result = engine.nearby(&NearbyQuery::new(18.52, 73.85)).unwrap();
    assert!(result.success);
    assert_eq!(result.radius_km, 30.0);
    assert_eq!(result.total_found, 2);
    assert_eq!(result.stations[0].station.id, "PUN-SW-001");
    assert_eq!(result.stations[1].station.id, "PUN-GW-002");
    assert!(result.stations[0].distance_km <= result.stations[1].distance_km);

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["totalFound"], 2);
    assert_eq!(json["queryLocation"]["latitude"], 18.52);
    assert_eq!(json["stations"][0]["id"], "PUN-SW-001");
    assert_eq!(json["stations"][0]["waterClass"], "B");
    assert!(json["stations"][0]["distanceKm"].as_f64().unwrap() < 10.0);

    let far = engine
        .nearby(&NearbyQuery::new(18.52, 73.85).with_radius(1000.0).with_type("groundwater"))
        .unwrap();
    let ids: Vec<&str> = far.stations.iter().map(|m| m.station.id.as_str()).collect();
    assert_eq!(ids, vec!["PUN-GW-002", "NAG-GW-001"]);
}

#[tokio::test]
async fn test_configured_defaults_apply() {
    let config = MonitorConfig::default()
        .with_default_radius(500.0)
        .with_default_per_page(3);
    config.validate().unwrap();

    let engine =
        SpatialQueryEngine::with_config(Arc::new(load_test_catalog().await), config.spatial);

    let nearby = engine.nearby(&NearbyQuery::new(18.52, 73.85)).unwrap();
    assert_eq!(nearby.radius_km, 500.0);
    assert_eq!(nearby.total_found, 3);

    let page = engine.list(&ListQuery::new()).unwrap();
    assert_eq!(page.pagination.per_page, 3);
    assert_eq!(page.pagination.total_pages, 2);
}

#[tokio::test]
async fn test_viewport_and_listing_end_to_end() {
    let engine = SpatialQueryEngine::new(Arc::new(load_test_catalog().await));

    let viewport = engine
        .in_viewport(BoundingBox::new(19.5, 18.0, 74.5, 72.5))
        .unwrap();
    let ids: Vec<&str> = viewport.stations.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["PUN-SW-001", "PUN-GW-002", "MUM-SW-001"]);

    let page = engine
        .list(&ListQuery::new().with_page(2).with_per_page(3))
        .unwrap();
    assert_eq!(page.stations.len(), 1);
    assert_eq!(page.stations[0].id, "NAG-GW-001");
    assert!(page.pagination.has_prev);
    assert!(!page.pagination.has_next);

    let bulk = engine.list(&ListQuery::new().with_per_page(1000)).unwrap();
    assert_eq!(bulk.count, 4);
    assert_eq!(bulk.pagination.total_pages, 1);

    let first = engine.list(&ListQuery::new().with_page(0)).unwrap();
    assert_eq!(first.count, 4);
    assert!(!first.pagination.has_prev);

    assert!(engine.list(&ListQuery::new().with_per_page(0)).is_err());
}

#[tokio::test]
async fn test_catalog_summary_and_alerts() {
    let catalog = load_test_catalog().await;
    let summary = catalog.summary();

    assert_eq!(summary.total_stations, 4);
    assert_eq!(summary.average_wqi, 67.0);
    assert_eq!(summary.total_alerts, 4);
    assert_eq!(summary.stations_with_alerts, 2);
    assert_eq!(summary.status_distribution[&StationStatus::Excellent], 2);
    assert_eq!(summary.type_counts["groundwater"], 2);
    assert_eq!(summary.district_statistics["Pune"].count, 2);
    assert_eq!(summary.district_statistics["Pune"].average_wqi, 73.0);

    let alerting: Vec<&str> = catalog
        .stations_with_alerts()
        .iter()
        .map(|s| s.id.as_str())
        .collect();
    assert_eq!(alerting, vec!["MUM-SW-001", "PUN-GW-002"]);
}

#[tokio::test]
async fn test_hot_reload_keeps_old_snapshots() {
    let handle = CatalogHandle::new(load_test_catalog().await);
    let before = handle.snapshot();
    let engine = SpatialQueryEngine::new(Arc::clone(&before));

    let (smaller, _) = StationCatalog::load_from_json_str(
        r#"[{"id": "X", "name": "x", "type": "t", "district": "d", "latitude": 0, "longitude": 0, "wqi": 10}]"#,
    )
    .unwrap();
    let replaced = handle.replace(smaller);

    assert_eq!(replaced.station_count(), 4);
    assert_eq!(handle.snapshot().station_count(), 1);
    assert_eq!(engine.catalog().station_count(), 4);
    assert_eq!(
        engine.list(&ListQuery::new()).unwrap().pagination.total_items,
        4
    );
}

#[test]
fn test_radius_monotonicity_on_grid() {
    let mut records = Vec::new();
    for row in 0..12 {
        for col in 0..12 {
            records.push(format!(
                r#"{{"id": "G-{row}-{col}", "name": "Grid {row}/{col}", "type": "surface_water",
                    "district": "Pune", "latitude": {}, "longitude": {}, "wqi": 60}}"#,
                18.0 + row as f64 * 0.1,
                73.0 + col as f64 * 0.1
            ));
        }
    }
    let json = format!("[{}]", records.join(","));
    let (catalog, _) = StationCatalog::load_from_json_str(&json).unwrap();
    let engine = SpatialQueryEngine::new(Arc::new(catalog));

    let center = (18.55, 73.55);
    let mut previous: Vec<String> = Vec::new();
    for radius in [1.0, 5.0, 10.0, 25.0, 50.0, 100.0, 200.0] {
        let result = engine
            .nearby(
                &NearbyQuery::new(center.0, center.1)
                    .with_radius(radius)
                    .with_limit(10_000),
            )
            .unwrap();

        let current: Vec<String> = result.stations.iter().map(|m| m.station.id.clone()).collect();
        assert!(previous.iter().all(|id| current.contains(id)), "radius {}", radius);

        for matched in &result.stations {
            let expected = haversine_km(
                GeoPoint::new(center.0, center.1),
                GeoPoint::new(matched.station.latitude, matched.station.longitude),
            );
            assert!((matched.distance_km - expected).abs() < 1e-9);
            assert!(matched.distance_km <= radius);
        }
        previous = current;
    }
    assert_eq!(previous.len(), 144);
}
