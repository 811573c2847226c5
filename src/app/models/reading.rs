//! Historical readings and defensive parameter extraction
//!
//! A reading's `parameters` map has no fixed schema: keys vary between data
//! sources and values may be plain numbers, numeric strings, or records such
//! as `{"value": 7.2, "unit": "pH"}`. Extraction never fails; anything that
//! cannot be read as a finite number yields `None`.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Open-ended parameter name to value mapping
pub type Parameters = BTreeMap<String, Value>;

/// One historical sample for a station
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// ISO-8601 timestamp as supplied by the history store
    pub timestamp: String,

    pub wqi: f64,

    #[serde(default)]
    pub status: String,

    #[serde(default)]
    pub parameters: Parameters,

    #[serde(default)]
    pub alerts: Vec<Value>,
}

impl Reading {
    /// Create a reading without parameters or alerts
    pub fn new(timestamp: impl Into<String>, wqi: f64, status: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.into(),
            wqi,
            status: status.into(),
            parameters: Parameters::new(),
            alerts: Vec::new(),
        }
    }

    /// Add a parameter value
    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.parameters.insert(name.into(), value.into());
        self
    }

    /// Add an alert entry
    pub fn with_alert(mut self, alert: impl Into<Value>) -> Self {
        self.alerts.push(alert.into());
        self
    }

    /// Numeric value of a named parameter, if one can be extracted
    ///
    /// Looks the name up exactly first, then case-insensitively.
    pub fn parameter(&self, name: &str) -> Option<f64> {
        let value = self.parameters.get(name).or_else(|| {
            self.parameters
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(name))
                .map(|(_, value)| value)
        })?;
        extract_numeric(value)
    }

    pub fn has_alerts(&self) -> bool {
        !self.alerts.is_empty()
    }

    pub fn alert_count(&self) -> usize {
        self.alerts.len()
    }

    /// Parse the timestamp as UTC
    ///
    /// Accepts RFC 3339 and offset-less `YYYY-MM-DDTHH:MM:SS[.fff]`, the
    /// latter interpreted as UTC.
    pub fn parsed_timestamp(&self) -> Option<DateTime<Utc>> {
        let raw = self.timestamp.trim();
        if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
            return Some(parsed.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
            .ok()
            .map(|naive| naive.and_utc())
    }
}

/// Best-effort numeric extraction from a parameter value
///
/// Tries a JSON number, then a numeric string, then a nested `{"value": ..}`
/// record holding either of those.
pub fn extract_numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Object(record) => record.get("value").and_then(extract_scalar),
        other => extract_scalar(other),
    }
}

fn extract_scalar(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    number.is_finite().then_some(number)
}
