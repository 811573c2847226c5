//! Shared fixtures for analytics tests

use crate::app::models::Reading;
use serde_json::json;

pub mod anomaly_tests;

/// Five daily readings, newest first, with WQI rising 46 -> 70 over time
///
/// Parameter values mix plain numbers, numeric strings and `{value, unit}`
/// records; `temperature` is never present. Readings 1, 2 and 4 carry alerts.
pub fn create_test_history() -> Vec<Reading> {
    vec![
        Reading::new("2024-05-05T08:00:00Z", 70.0, "Good")
            .with_parameter("pH", 7.4)
            .with_parameter("dissolvedOxygen", "6.8")
            .with_parameter("turbidity", json!({"value": 3.0, "unit": "NTU"})),
        Reading::new("2024-05-04T08:00:00Z", 64.0, "Moderate")
            .with_parameter("pH", 7.3)
            .with_parameter("dissolvedOxygen", 6.1)
            .with_parameter("turbidity", 4.0)
            .with_alert(json!({"type": "turbidity"})),
        Reading::new("2024-05-03T08:00:00Z", 58.0, "Moderate")
            .with_parameter("pH", 7.2)
            .with_parameter("dissolvedOxygen", 5.5)
            .with_alert(json!({"type": "dissolvedOxygen"})),
        Reading::new("2024-05-02T08:00:00Z", 52.0, "Moderate")
            .with_parameter("pH", 7.1)
            .with_parameter("dissolvedOxygen", "n/a")
            .with_parameter("turbidity", 6.0),
        Reading::new("2024-05-01T08:00:00Z", 46.0, "Poor")
            .with_parameter("pH", 7.0)
            .with_parameter("dissolvedOxygen", 4.3)
            .with_parameter("turbidity", 7.0)
            .with_alert(json!({"type": "wqi"}))
            .with_alert(json!({"type": "pH"})),
    ]
}

/// Readings with the given WQI values, newest first, without parameters
pub fn history_from_wqi(values: &[f64]) -> Vec<Reading> {
    values
        .iter()
        .enumerate()
        .map(|(i, &wqi)| Reading::new(format!("2024-01-{:02}T00:00:00Z", 28 - i), wqi, "Moderate"))
        .collect()
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}
