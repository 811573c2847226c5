//! Prediction-ready series extraction

use super::stats::HistorySummary;
use super::{HistoryAnalyzer, TimeRange};
use crate::app::models::Reading;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

/// Parallel chronological arrays for forecasting models
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionSeries {
    pub has_data: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Timestamps, oldest first
    pub timestamps: Vec<String>,

    pub wqi: Vec<f64>,

    /// One entry per timestamp for each tracked parameter; `None` where the
    /// reading has no numeric value
    pub parameters: BTreeMap<String, Vec<Option<f64>>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<HistorySummary>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_range: Option<TimeRange>,
}

impl PredictionSeries {
    fn no_data(message: impl Into<String>) -> Self {
        Self {
            has_data: false,
            message: Some(message.into()),
            timestamps: Vec::new(),
            wqi: Vec::new(),
            parameters: BTreeMap::new(),
            statistics: None,
            time_range: None,
        }
    }

    /// Number of points in the series
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }
}

impl HistoryAnalyzer {
    /// Build a chronological series from the newest `limit` readings
    ///
    /// `limit` falls back to the configured prediction limit. Statistics and
    /// the time range describe the readings that made it into the series.
    pub fn to_prediction_series(
        &self,
        history: &[Reading],
        limit: Option<usize>,
    ) -> PredictionSeries {
        if history.is_empty() {
            return PredictionSeries::no_data("No historical readings available for this station");
        }

        let limit = limit.unwrap_or(self.config().prediction_limit);
        let window = &history[..limit.min(history.len())];
        if window.is_empty() {
            return PredictionSeries::no_data("Series limit of 0 leaves no readings");
        }

        let chronological = super::chronological(window);

        let timestamps = chronological.iter().map(|r| r.timestamp.clone()).collect();
        let wqi = chronological.iter().map(|r| r.wqi).collect();
        let parameters = self
            .tracked_parameters()
            .iter()
            .map(|name| {
                let values = chronological.iter().map(|r| r.parameter(name)).collect();
                (name.clone(), values)
            })
            .collect();

        debug!(
            "Prediction series: {} of {} readings",
            window.len(),
            history.len()
        );

        PredictionSeries {
            has_data: true,
            message: None,
            timestamps,
            wqi,
            parameters,
            statistics: HistorySummary::from_history(window),
            time_range: TimeRange::of_history(window),
        }
    }
}
