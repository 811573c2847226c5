//! Volatility, degradation and risk classification

use super::stats::{HistorySummary, population_variance, wqi_values};
use crate::app::models::Reading;
use crate::constants::risk;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Population variance of `values`; 0 for fewer than two values
pub fn volatility(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    population_variance(values).unwrap_or(0.0).max(0.0)
}

/// WQI change per reading between the newest (index 0) and oldest reading
///
/// Positive when the newest reading is higher than the oldest.
pub fn degradation_rate(history: &[Reading]) -> f64 {
    match (history.first(), history.last()) {
        (Some(newest), Some(oldest)) if history.len() >= 2 => {
            (newest.wqi - oldest.wqi) / history.len() as f64
        }
        _ => 0.0,
    }
}

/// First matching tier wins: high, then medium, else low
pub fn assess_risk_level(average_wqi: f64, volatility: f64, alert_frequency: f64) -> RiskLevel {
    if average_wqi < risk::HIGH_AVERAGE_WQI_BELOW
        || volatility > risk::HIGH_VOLATILITY_ABOVE
        || alert_frequency > risk::HIGH_ALERT_FREQUENCY_ABOVE
    {
        RiskLevel::High
    } else if average_wqi < risk::MEDIUM_AVERAGE_WQI_BELOW
        || volatility > risk::MEDIUM_VOLATILITY_ABOVE
        || alert_frequency > risk::MEDIUM_ALERT_FREQUENCY_ABOVE
    {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

fn is_critical(reading: &Reading) -> bool {
    reading.wqi < risk::CRITICAL_WQI_BELOW
        || reading.status.eq_ignore_ascii_case(risk::CRITICAL_STATUS)
}

/// Risk metrics and tier for a station history
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskReport {
    pub has_data: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    pub data_points: usize,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_level: Option<RiskLevel>,

    pub wqi_volatility: f64,

    /// Fraction of readings carrying at least one alert
    pub alert_frequency: f64,

    pub critical_events: usize,

    pub average_wqi: f64,

    pub degradation_rate: f64,
}

/// Assess the risk level of a history
pub fn risk_assessment(history: &[Reading]) -> RiskReport {
    let Some(summary) = HistorySummary::from_history(history) else {
        return RiskReport {
            has_data: false,
            message: Some("No historical readings available for risk assessment".to_string()),
            data_points: 0,
            risk_level: None,
            wqi_volatility: 0.0,
            alert_frequency: 0.0,
            critical_events: 0,
            average_wqi: 0.0,
            degradation_rate: 0.0,
        };
    };

    let wqi_volatility = volatility(&wqi_values(history));
    let alerting = history.iter().filter(|r| r.has_alerts()).count();
    let alert_frequency = alerting as f64 / history.len() as f64;
    let critical_events = history.iter().filter(|r| is_critical(r)).count();

    RiskReport {
        has_data: true,
        message: None,
        data_points: history.len(),
        risk_level: Some(assess_risk_level(
            summary.average_wqi,
            wqi_volatility,
            alert_frequency,
        )),
        wqi_volatility,
        alert_frequency,
        critical_events,
        average_wqi: summary.average_wqi,
        degradation_rate: degradation_rate(history),
    }
}
