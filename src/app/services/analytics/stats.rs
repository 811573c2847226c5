//! Descriptive statistics over reading histories

use crate::app::models::Reading;
use serde::Serialize;

/// Arithmetic mean, `None` for an empty slice
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population variance, `None` for an empty slice
pub fn population_variance(values: &[f64]) -> Option<f64> {
    let mean = mean(values)?;
    let sum_sq: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
    Some(sum_sq / values.len() as f64)
}

/// Median of the values; sorts a copy
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

/// WQI values of a history in the supplied order
pub fn wqi_values(history: &[Reading]) -> Vec<f64> {
    history.iter().map(|r| r.wqi).collect()
}

/// Summary of a station's WQI history
///
/// `latest_*` refer to index 0, the newest reading of a most-recent-first
/// history.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistorySummary {
    pub count: usize,
    pub average_wqi: f64,
    pub min_wqi: f64,
    pub max_wqi: f64,
    pub latest_wqi: f64,
    pub latest_timestamp: String,
}

impl HistorySummary {
    /// Summarize a history, `None` when it is empty
    pub fn from_history(history: &[Reading]) -> Option<Self> {
        let latest = history.first()?;
        let values = wqi_values(history);
        let average_wqi = mean(&values)?;

        let (min_wqi, max_wqi) = values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), &v| {
                (min.min(v), max.max(v))
            });

        Some(Self {
            count: history.len(),
            average_wqi,
            min_wqi,
            max_wqi,
            latest_wqi: latest.wqi,
            latest_timestamp: latest.timestamp.clone(),
        })
    }
}

/// Statistics of one parameter across the readings where it could be extracted
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterStatistics {
    pub parameter: String,
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub average: f64,
    pub median: f64,
}

/// Statistics for `name`, `None` if no reading carries a numeric value for it
pub fn parameter_statistics(history: &[Reading], name: &str) -> Option<ParameterStatistics> {
    let values: Vec<f64> = history.iter().filter_map(|r| r.parameter(name)).collect();

    let average = mean(&values)?;
    let median = median(&values)?;
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    Some(ParameterStatistics {
        parameter: name.to_string(),
        count: values.len(),
        min,
        max,
        average,
        median,
    })
}
