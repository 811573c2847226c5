//! Multi-station comparison over precomputed history statistics

use crate::app::models::Reading;
use crate::app::services::analytics::stats::{HistorySummary, wqi_values};
use crate::app::services::analytics::{TrendDirection, trend, volatility};
use crate::app::services::history_store::HistoryStore;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

/// Per-station statistics used for side-by-side comparison
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StationStatistics {
    pub station_id: String,
    pub data_points: usize,
    pub average_wqi: f64,
    pub min_wqi: f64,
    pub max_wqi: f64,
    pub latest_wqi: f64,
    pub latest_timestamp: String,
    pub volatility: f64,

    /// WQI trend fitted oldest first
    pub trend: TrendDirection,
    pub trend_slope: f64,
}

impl StationStatistics {
    /// Statistics for a most-recent-first history, `None` when it is empty
    pub fn from_history(station_id: impl Into<String>, history: &[Reading]) -> Option<Self> {
        let summary = HistorySummary::from_history(history)?;
        let values = wqi_values(history);

        let chronological: Vec<f64> = values.iter().rev().copied().collect();
        let fitted = trend(&chronological);

        Some(Self {
            station_id: station_id.into(),
            data_points: summary.count,
            average_wqi: summary.average_wqi,
            min_wqi: summary.min_wqi,
            max_wqi: summary.max_wqi,
            latest_wqi: summary.latest_wqi,
            latest_timestamp: summary.latest_timestamp,
            volatility: volatility(&values),
            trend: fitted.direction,
            trend_slope: fitted.slope,
        })
    }
}

/// Result of comparing several stations
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    /// True iff at least one requested station has statistics
    pub has_data: bool,

    pub stations: BTreeMap<String, StationStatistics>,

    /// Number of stations that contributed
    pub total_stations: usize,

    /// Requested ids skipped for lack of data, in request order
    pub missing_stations: Vec<String>,
}

/// Precomputed statistics for every station with history
#[derive(Debug, Clone, Default)]
pub struct StatisticsIndex {
    stations: BTreeMap<String, StationStatistics>,
}

impl StatisticsIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute statistics for every non-empty history in the store
    pub fn from_store(store: &HistoryStore) -> Self {
        let mut index = Self::new();
        for (station_id, history) in store.iter() {
            if let Some(statistics) = StationStatistics::from_history(station_id, history) {
                index.insert(statistics);
            }
        }
        debug!(
            "Statistics index: {} of {} stations have readings",
            index.len(),
            store.station_count()
        );
        index
    }

    pub fn insert(&mut self, statistics: StationStatistics) {
        self.stations
            .insert(statistics.station_id.clone(), statistics);
    }

    pub fn get(&self, station_id: &str) -> Option<&StationStatistics> {
        self.stations.get(station_id)
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Look up statistics for each requested id, skipping ids with no data
    ///
    /// Repeated ids are reported once.
    pub fn compare<S: AsRef<str>>(&self, station_ids: &[S]) -> Comparison {
        let mut stations = BTreeMap::new();
        let mut missing_stations = Vec::new();

        for id in station_ids.iter().map(AsRef::as_ref) {
            match self.get(id) {
                Some(statistics) => {
                    stations.insert(id.to_string(), statistics.clone());
                }
                None if !missing_stations.iter().any(|m| m == id) => {
                    missing_stations.push(id.to_string());
                }
                None => {}
            }
        }

        Comparison {
            has_data: !stations.is_empty(),
            total_stations: stations.len(),
            stations,
            missing_stations,
        }
    }
}
