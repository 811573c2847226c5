//! Least-squares trend fitting

use super::HistoryAnalyzer;
use crate::app::models::Reading;
use crate::constants::trend::{MIN_POINTS, SLOPE_THRESHOLD};
use serde::Serialize;
use std::collections::BTreeMap;

/// Direction of a fitted trend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Improving,
    Declining,
    Stable,
    NoData,
}

impl TrendDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Improving => "improving",
            Self::Declining => "declining",
            Self::Stable => "stable",
            Self::NoData => "no_data",
        }
    }
}

impl std::fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Trend {
    pub direction: TrendDirection,
    pub slope: f64,
    pub magnitude: f64,
}

impl Trend {
    fn flat(direction: TrendDirection) -> Self {
        Self {
            direction,
            slope: 0.0,
            magnitude: 0.0,
        }
    }
}

/// Fit an ordinary least-squares line to `values` against their indices
///
/// Fewer than two points give a stable trend with zero slope.
pub fn trend(values: &[f64]) -> Trend {
    if values.len() < MIN_POINTS {
        return Trend::flat(TrendDirection::Stable);
    }

    let n = values.len() as f64;
    let (mut sum_x, mut sum_y, mut sum_xy, mut sum_x2) = (0.0, 0.0, 0.0, 0.0);
    for (i, &y) in values.iter().enumerate() {
        let x = i as f64;
        sum_x += x;
        sum_y += y;
        sum_xy += x * y;
        sum_x2 += x * x;
    }

    let slope = (n * sum_xy - sum_x * sum_y) / (n * sum_x2 - sum_x * sum_x);

    let direction = if slope > SLOPE_THRESHOLD {
        TrendDirection::Improving
    } else if slope < -SLOPE_THRESHOLD {
        TrendDirection::Declining
    } else {
        TrendDirection::Stable
    };

    Trend {
        direction,
        slope,
        magnitude: slope.abs(),
    }
}

/// Trend of one parameter over the readings in the order supplied
///
/// Readings without a numeric value for `name` are skipped; if none have one
/// the direction is `no_data`.
pub fn parameter_trend<'a, I>(readings: I, name: &str) -> Trend
where
    I: IntoIterator<Item = &'a Reading>,
{
    let values: Vec<f64> = readings
        .into_iter()
        .filter_map(|r| r.parameter(name))
        .collect();

    if values.is_empty() {
        Trend::flat(TrendDirection::NoData)
    } else {
        trend(&values)
    }
}

/// WQI and per-parameter trends over a history, fitted oldest first
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendReport {
    pub has_data: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    pub data_points: usize,

    pub wqi_trend: Trend,

    pub parameter_trends: BTreeMap<String, Trend>,

    /// Parameters trending up, down and flat; `no_data` parameters are not counted
    pub improving: usize,
    pub declining: usize,
    pub stable: usize,

    pub overall_trend: TrendDirection,
}

impl TrendReport {
    /// Number of parameters with a fitted trend
    pub fn total_parameters(&self) -> usize {
        self.improving + self.declining + self.stable
    }

    /// One-line description of the overall trend
    pub fn summary(&self) -> String {
        let total = self.total_parameters();
        match self.overall_trend {
            TrendDirection::Improving => format!(
                "Water quality is improving in {}/{} parameters",
                self.improving, total
            ),
            TrendDirection::Declining => format!(
                "Water quality is declining in {}/{} parameters",
                self.declining, total
            ),
            TrendDirection::Stable => format!(
                "Water quality is stable: {}/{} parameters show minimal change",
                self.stable, total
            ),
            TrendDirection::NoData => "No historical readings to analyze".to_string(),
        }
    }
}

/// Overall direction from per-parameter counts
///
/// A direction wins only when it outnumbers the other two combined.
pub fn overall_trend(improving: usize, declining: usize, stable: usize) -> TrendDirection {
    if improving > declining + stable {
        TrendDirection::Improving
    } else if declining > improving + stable {
        TrendDirection::Declining
    } else {
        TrendDirection::Stable
    }
}

impl HistoryAnalyzer {
    /// Fit WQI and tracked-parameter trends in chronological order
    pub fn trend_report(&self, history: &[Reading]) -> TrendReport {
        if history.is_empty() {
            return TrendReport {
                has_data: false,
                message: Some("No historical readings available for this station".to_string()),
                data_points: 0,
                wqi_trend: Trend::flat(TrendDirection::NoData),
                parameter_trends: BTreeMap::new(),
                improving: 0,
                declining: 0,
                stable: 0,
                overall_trend: TrendDirection::NoData,
            };
        }

        let chronological = super::chronological(history);
        let wqi: Vec<f64> = chronological.iter().map(|r| r.wqi).collect();

        let mut parameter_trends = BTreeMap::new();
        let (mut improving, mut declining, mut stable) = (0, 0, 0);
        for name in self.tracked_parameters() {
            let fitted = parameter_trend(chronological.iter().copied(), name);
            match fitted.direction {
                TrendDirection::Improving => improving += 1,
                TrendDirection::Declining => declining += 1,
                TrendDirection::Stable => stable += 1,
                TrendDirection::NoData => {}
            }
            parameter_trends.insert(name.clone(), fitted);
        }

        TrendReport {
            has_data: true,
            message: None,
            data_points: history.len(),
            wqi_trend: trend(&wqi),
            parameter_trends,
            improving,
            declining,
            stable,
            overall_trend: overall_trend(improving, declining, stable),
        }
    }
}
