//! Integration tests for reading histories, analytics and comparison
//!
//! Histories are written to disk in arbitrary order, loaded through the
//! history store and analyzed through the public API.

use serde_json::{Value, json};
use tempfile::NamedTempFile;
use water_monitor::app::services::analytics::{RiskLevel, Severity, TrendDirection};
use water_monitor::{HistoryAnalyzer, HistoryStore, StatisticsIndex};

/// Twelve daily Mula River readings (WQI 70, with a 75 on 7 May) written
/// out of order, three declining Mithi River readings and an empty history
fn history_json() -> Value {
    let mut mula: Vec<Value> = (1..=12)
        .map(|day| {
            let wqi = if day == 7 { 75.0 } else { 70.0 };
            json!({
                "timestamp": format!("2024-05-{:02}T06:00:00Z", day),
                "wqi": wqi,
                "status": "Good",
                "parameters": {
                    "pH": {"value": 7.0 + day as f64 * 0.01, "unit": "pH"},
                    "turbidity": format!("{}", 2.0 + day as f64)
                },
                "alerts": []
            })
        })
        .collect();
    mula.rotate_left(5);

    json!({
        "PUN-SW-001": mula,
        "MUM-SW-001": [
            {"timestamp": "2024-05-02T06:00:00Z", "wqi": 35.0, "status": "Poor", "alerts": ["low DO"]},
            {"timestamp": "2024-05-03T06:00:00Z", "wqi": 30.0, "status": "Poor", "alerts": ["low DO"]},
            {"timestamp": "2024-05-01T06:00:00Z", "wqi": 40.0, "status": "Poor"}
        ],
        "NAG-GW-001": []
    })
}

async fn load_store() -> HistoryStore {
    let file = NamedTempFile::new().unwrap();
    std::fs::write(file.path(), history_json().to_string()).unwrap();
    HistoryStore::load_from_path(file.path()).await.unwrap()
}

#[tokio::test]
async fn test_histories_are_sorted_on_load() {
    let store = load_store().await;

    assert_eq!(store.station_count(), 3);
    assert_eq!(store.reading_count(), 15);

    let mula = store.history("PUN-SW-001");
    assert_eq!(mula[0].timestamp, "2024-05-12T06:00:00Z");
    assert_eq!(mula[11].timestamp, "2024-05-01T06:00:00Z");

    let mithi: Vec<f64> = store.history("MUM-SW-001").iter().map(|r| r.wqi).collect();
    assert_eq!(mithi, vec![30.0, 35.0, 40.0]);
}

#[tokio::test]
async fn test_analytics_reports_end_to_end() {
    let store = load_store().await;
    let analyzer = HistoryAnalyzer::default();
    let mula = store.history("PUN-SW-001");

    let series = analyzer.to_prediction_series(mula, Some(5));
    assert!(series.has_data);
    assert_eq!(
        series.timestamps.first().map(String::as_str),
        Some("2024-05-08T06:00:00Z")
    );
    assert_eq!(series.parameters["turbidity"].last(), Some(&Some(14.0)));

    let trend = analyzer.trend_report(mula);
    assert_eq!(trend.parameter_trends["turbidity"].direction, TrendDirection::Improving);
    assert_eq!(trend.parameter_trends["pH"].direction, TrendDirection::Stable);

    let anomalies = analyzer.anomalies(mula);
    assert_eq!(anomalies.len(), 1);
    assert_eq!(anomalies[0].timestamp, "2024-05-07T06:00:00Z");
    assert_eq!(anomalies[0].severity, Severity::Medium);

    let risk = analyzer.risk_assessment(mula);
    assert_eq!(risk.risk_level, Some(RiskLevel::Low));
    assert_eq!(risk.alert_frequency, 0.0);
    assert_eq!(risk.degradation_rate, 0.0);

    let export = analyzer.export_features("PUN-SW-001", mula);
    assert_eq!(export.data_points, 12);
    assert_eq!(export.features[0].timestamp, "2024-05-12T06:00:00Z");
}

#[tokio::test]
async fn test_declining_station_risk() {
    let store = load_store().await;
    let analyzer = HistoryAnalyzer::default();
    let mithi = store.history("MUM-SW-001");

    let trend = analyzer.trend_report(mithi);
    assert_eq!(trend.wqi_trend.direction, TrendDirection::Declining);

    let risk = analyzer.risk_assessment(mithi);
    assert_eq!(risk.risk_level, Some(RiskLevel::High));
    assert!((risk.alert_frequency - 2.0 / 3.0).abs() < 1e-9);
    assert!((risk.degradation_rate + 10.0 / 3.0).abs() < 1e-9);

    // Too few readings for anomaly detection
    assert!(analyzer.anomalies(mithi).is_empty());
}

#[tokio::test]
async fn test_empty_history_contracts() {
    let store = load_store().await;
    let analyzer = HistoryAnalyzer::default();

    for station_id in ["NAG-GW-001", "UNKNOWN"] {
        let history = store.history(station_id);
        assert!(!analyzer.to_prediction_series(history, None).has_data);
        assert!(!analyzer.trend_report(history).has_data);
        assert!(!analyzer.risk_assessment(history).has_data);
        assert!(!analyzer.export_features(station_id, history).success);
        assert!(analyzer.anomalies(history).is_empty());
    }
}

#[tokio::test]
async fn test_comparison_end_to_end() {
    let store = load_store().await;
    let index = StatisticsIndex::from_store(&store);

    let comparison = index.compare(&["PUN-SW-001", "MUM-SW-001", "NAG-GW-001"]);
    assert!(comparison.has_data);
    assert_eq!(comparison.total_stations, 2);
    assert_eq!(comparison.missing_stations, vec!["NAG-GW-001"]);
    assert_eq!(
        comparison.stations["MUM-SW-001"].trend,
        TrendDirection::Declining
    );
    assert_eq!(comparison.stations["MUM-SW-001"].latest_wqi, 30.0);

    let json = serde_json::to_value(&comparison).unwrap();
    assert_eq!(json["totalStations"], 2);
    assert_eq!(json["stations"]["PUN-SW-001"]["dataPoints"], 12);

    let empty: [&str; 0] = [];
    let nothing = index.compare(&empty);
    assert!(!nothing.has_data);
    assert_eq!(nothing.total_stations, 0);
}
