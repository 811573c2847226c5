//! Flat feature records for model training exports

use super::{HistoryAnalyzer, TimeRange};
use crate::app::models::Reading;
use serde::Serialize;
use std::collections::BTreeMap;

/// One reading flattened into named features
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureRecord {
    pub timestamp: String,
    pub wqi: f64,
    pub status: String,

    /// Tracked parameters as top-level fields; `null` when not extractable
    #[serde(flatten)]
    pub parameters: BTreeMap<String, Option<f64>>,

    pub has_alerts: bool,
    pub alert_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportMetadata {
    /// Column names of each feature record, in output order
    pub feature_names: Vec<String>,

    pub parameters: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_range: Option<TimeRange>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureExport {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    pub station_id: String,

    pub data_points: usize,

    /// Features in history order (newest first)
    pub features: Vec<FeatureRecord>,

    pub metadata: ExportMetadata,
}

impl HistoryAnalyzer {
    /// Flatten every reading of `history` into a feature record
    pub fn export_features(&self, station_id: &str, history: &[Reading]) -> FeatureExport {
        let parameters = self.tracked_parameters().to_vec();

        let mut feature_names = vec![
            "timestamp".to_string(),
            "wqi".to_string(),
            "status".to_string(),
        ];
        feature_names.extend(parameters.iter().cloned());
        feature_names.push("hasAlerts".to_string());
        feature_names.push("alertCount".to_string());

        let features: Vec<FeatureRecord> = history
            .iter()
            .map(|reading| FeatureRecord {
                timestamp: reading.timestamp.clone(),
                wqi: reading.wqi,
                status: reading.status.clone(),
                parameters: parameters
                    .iter()
                    .map(|name| (name.clone(), reading.parameter(name)))
                    .collect(),
                has_alerts: reading.has_alerts(),
                alert_count: reading.alert_count(),
            })
            .collect();

        FeatureExport {
            success: !features.is_empty(),
            message: history
                .is_empty()
                .then(|| format!("No historical readings available for station {}", station_id)),
            station_id: station_id.to_string(),
            data_points: features.len(),
            features,
            metadata: ExportMetadata {
                feature_names,
                parameters,
                time_range: TimeRange::of_history(history),
            },
        }
    }
}
