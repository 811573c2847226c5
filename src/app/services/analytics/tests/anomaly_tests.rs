//! Tests for anomaly detection

use super::*;
use crate::app::services::analytics::{Severity, anomalies};

#[test]
fn test_short_history_never_has_anomalies() {
    let wild = history_from_wqi(&[5.0, 95.0, 10.0, 90.0, 0.0, 100.0, 3.0, 97.0, 50.0]);
    assert_eq!(wild.len(), 9);
    assert!(anomalies(&wild).is_empty());
    assert!(anomalies(&[]).is_empty());
}

#[test]
fn test_high_severity_anomaly() {
    let mut values = vec![50.0; 10];
    values[3] = 51.0;
    let history = history_from_wqi(&values);

    let found = anomalies(&history);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].timestamp, history[3].timestamp);
    assert_eq!(found[0].wqi, 51.0);
    assert!((found[0].deviation - 0.9).abs() < 1e-9);
    assert_eq!(found[0].severity, Severity::High);
}

#[test]
fn test_medium_severity_anomalies() {
    // Mean 50, variance 0.8: deviation 2 lies between 2x and 3x the variance
    let mut values = vec![50.0; 10];
    values[0] = 52.0;
    values[9] = 48.0;
    let history = history_from_wqi(&values);

    let found = anomalies(&history);
    assert_eq!(found.len(), 2);
    assert!(found.iter().all(|a| a.severity == Severity::Medium));
    assert_eq!(found[0].wqi, 52.0);
    assert_eq!(found[1].wqi, 48.0);
}

#[test]
fn test_uniform_history_has_no_anomalies() {
    let history = history_from_wqi(&[60.0; 12]);
    assert!(anomalies(&history).is_empty());
}

#[test]
fn test_large_spread_hides_outliers() {
    // Deviations are compared against the variance, which grows quadratically
    let history = history_from_wqi(&[10.0, 90.0, 10.0, 90.0, 10.0, 90.0, 10.0, 90.0, 10.0, 90.0]);
    assert!(anomalies(&history).is_empty());
}

#[test]
fn test_anomaly_serialization() {
    let mut values = vec![50.0; 10];
    values[0] = 51.0;
    let found = anomalies(&history_from_wqi(&values));
    let value = serde_json::to_value(&found).unwrap();
    assert_eq!(value[0]["severity"], "high");
    assert_eq!(value[0]["timestamp"], "2024-01-28T00:00:00Z");
}
