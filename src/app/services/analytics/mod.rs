//! Time-series analytics over station reading histories
//!
//! Every operation here is a pure function of the history it is handed: the
//! readings are borrowed, never retained or modified, and identical input
//! always produces an identical report.
//!
//! # Ordering
//!
//! Histories are supplied most-recent-first (index 0 is the newest reading),
//! which is the order [`HistoryStore`](crate::app::services::history_store::HistoryStore)
//! hands them out in. Operations that need chronological order reverse a
//! copy of the references internally.
//!
//! # No-data conditions
//!
//! Empty histories and samples below an algorithm's minimum size are not
//! errors. Reports carry `hasData`/`success` flags and a message instead, so
//! callers can render "no data" states without error handling.
//!
//! # Architecture
//!
//! - [`stats`] - means, variances, history and parameter summaries
//! - [`series`] - prediction-ready parallel arrays
//! - [`trend`] - least-squares trend fitting and the trend report
//! - [`anomaly`] - variance-threshold anomaly detection
//! - [`risk`] - volatility, degradation rate and risk tiers
//! - [`export`] - flat feature records for model training

use crate::app::models::Reading;
use crate::config::AnalyticsConfig;
use serde::Serialize;

pub mod anomaly;
pub mod export;
pub mod risk;
pub mod series;
pub mod stats;
pub mod trend;

#[cfg(test)]
pub mod tests;

pub use anomaly::{Anomaly, Severity, anomalies};
pub use export::{ExportMetadata, FeatureExport, FeatureRecord};
pub use risk::{RiskLevel, RiskReport, assess_risk_level, degradation_rate, risk_assessment, volatility};
pub use series::PredictionSeries;
pub use stats::{HistorySummary, ParameterStatistics, parameter_statistics};
pub use trend::{Trend, TrendDirection, TrendReport, parameter_trend, trend};

/// Oldest and newest timestamps covered by a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeRange {
    pub start: String,
    pub end: String,
}

impl TimeRange {
    /// Time range of a most-recent-first history, `None` when empty
    pub fn of_history(history: &[Reading]) -> Option<Self> {
        let newest = history.first()?;
        let oldest = history.last()?;
        Some(Self {
            start: oldest.timestamp.clone(),
            end: newest.timestamp.clone(),
        })
    }
}

/// Analytics operations that depend on configured parameter names and limits
#[derive(Debug, Clone, Default)]
pub struct HistoryAnalyzer {
    config: AnalyticsConfig,
}

impl HistoryAnalyzer {
    pub fn new(config: AnalyticsConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    /// Parameter names extracted from each reading
    pub fn tracked_parameters(&self) -> &[String] {
        &self.config.tracked_parameters
    }

    /// Anomalous readings in `history`; see [`anomalies`]
    pub fn anomalies(&self, history: &[Reading]) -> Vec<Anomaly> {
        anomalies(history)
    }

    /// Risk report for `history`; see [`risk_assessment`]
    pub fn risk_assessment(&self, history: &[Reading]) -> RiskReport {
        risk_assessment(history)
    }
}

/// Readings in chronological order (oldest first)
pub(crate) fn chronological(history: &[Reading]) -> Vec<&Reading> {
    history.iter().rev().collect()
}
