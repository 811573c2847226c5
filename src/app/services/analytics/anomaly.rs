//! Variance-threshold anomaly detection
//!
//! A reading is anomalous when its absolute deviation from the mean WQI
//! exceeds twice the population variance of the history. The comparison is
//! against the variance, not the standard deviation; severity tiers are
//! calibrated to that rule.

use super::stats::{mean, population_variance, wqi_values};
use crate::app::models::Reading;
use crate::constants::anomaly::{HIGH_MULTIPLIER, MEDIUM_MULTIPLIER, MIN_SAMPLE_SIZE};
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Medium,
    High,
}

/// A reading flagged as anomalous
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Anomaly {
    pub timestamp: String,
    pub wqi: f64,

    /// Absolute deviation from the history mean
    pub deviation: f64,

    pub severity: Severity,
}

/// Anomalous readings, in history order
///
/// Histories shorter than the minimum sample size never yield anomalies.
pub fn anomalies(history: &[Reading]) -> Vec<Anomaly> {
    if history.len() < MIN_SAMPLE_SIZE {
        return Vec::new();
    }

    let values = wqi_values(history);
    let (Some(average), Some(variance)) = (mean(&values), population_variance(&values)) else {
        return Vec::new();
    };

    let found: Vec<Anomaly> = history
        .iter()
        .filter_map(|reading| {
            let deviation = (reading.wqi - average).abs();
            if deviation <= MEDIUM_MULTIPLIER * variance {
                return None;
            }
            let severity = if deviation > HIGH_MULTIPLIER * variance {
                Severity::High
            } else {
                Severity::Medium
            };
            Some(Anomaly {
                timestamp: reading.timestamp.clone(),
                wqi: reading.wqi,
                deviation,
                severity,
            })
        })
        .collect();

    debug!(
        "Anomaly scan: {} of {} readings flagged (mean {:.2}, variance {:.2})",
        found.len(),
        history.len(),
        average,
        variance
    );

    found
}
