//! Configuration management and validation.
//!
//! Provides the defaults used by the spatial query engine and the history
//! analyzer, builder-style overrides, and loading from a JSON file.

use crate::constants::{
    BULK_FETCH_THRESHOLD, DEFAULT_NEARBY_LIMIT, DEFAULT_PER_PAGE, DEFAULT_PREDICTION_LIMIT,
    DEFAULT_RADIUS_KM, DEFAULT_TRACKED_PARAMETERS, RESERVED_FEATURE_NAMES,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

/// Spatial query defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SpatialConfig {
    /// Radius used when a nearby query does not specify one (km)
    pub default_radius_km: f64,

    /// Maximum stations collected by a nearby query without an explicit limit
    pub default_limit: usize,

    /// Page size used when a listing does not specify one
    pub default_per_page: usize,

    /// Page sizes at or above this return the full filtered set
    pub bulk_fetch_threshold: usize,
}

impl Default for SpatialConfig {
    fn default() -> Self {
        Self {
            default_radius_km: DEFAULT_RADIUS_KM,
            default_limit: DEFAULT_NEARBY_LIMIT,
            default_per_page: DEFAULT_PER_PAGE,
            bulk_fetch_threshold: BULK_FETCH_THRESHOLD,
        }
    }
}

/// History analytics defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnalyticsConfig {
    /// Readings taken into a prediction series when no limit is given
    pub prediction_limit: usize,

    /// Parameter names extracted from each reading
    pub tracked_parameters: Vec<String>,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            prediction_limit: DEFAULT_PREDICTION_LIMIT,
            tracked_parameters: DEFAULT_TRACKED_PARAMETERS
                .iter()
                .map(|name| name.to_string())
                .collect(),
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    pub spatial: SpatialConfig,
    pub analytics: AnalyticsConfig,
}

impl MonitorConfig {
    /// Load configuration from a JSON file, filling missing fields with defaults
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| Error::io_at(path, e))?;
        let config: Self = serde_json::from_str(&contents).map_err(|e| {
            Error::json(format!("invalid configuration file {}", path.display()), e)
        })?;
        config.validate()?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Set the default nearby radius
    pub fn with_default_radius(mut self, radius_km: f64) -> Self {
        self.spatial.default_radius_km = radius_km;
        self
    }

    /// Set the default nearby limit
    pub fn with_default_limit(mut self, limit: usize) -> Self {
        self.spatial.default_limit = limit;
        self
    }

    /// Set the default listing page size
    pub fn with_default_per_page(mut self, per_page: usize) -> Self {
        self.spatial.default_per_page = per_page;
        self
    }

    /// Set the bulk-fetch page size threshold
    pub fn with_bulk_fetch_threshold(mut self, threshold: usize) -> Self {
        self.spatial.bulk_fetch_threshold = threshold;
        self
    }

    /// Set the default prediction series length
    pub fn with_prediction_limit(mut self, limit: usize) -> Self {
        self.analytics.prediction_limit = limit;
        self
    }

    /// Replace the tracked parameter names
    pub fn with_tracked_parameters<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.analytics.tracked_parameters = names.into_iter().map(Into::into).collect();
        self
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let spatial = &self.spatial;

        if !spatial.default_radius_km.is_finite() || spatial.default_radius_km <= 0.0 {
            return Err(Error::configuration(format!(
                "Default radius must be a positive number of km, got {}",
                spatial.default_radius_km
            )));
        }

        if spatial.default_limit == 0 {
            return Err(Error::configuration(
                "Default nearby limit must be greater than 0",
            ));
        }

        if spatial.default_per_page == 0 {
            return Err(Error::configuration(
                "Default page size must be greater than 0",
            ));
        }

        if spatial.bulk_fetch_threshold == 0 {
            return Err(Error::configuration(
                "Bulk fetch threshold must be greater than 0",
            ));
        }

        if self.analytics.prediction_limit == 0 {
            return Err(Error::configuration(
                "Prediction limit must be greater than 0",
            ));
        }

        if self.analytics.tracked_parameters.is_empty() {
            return Err(Error::configuration(
                "At least one tracked parameter is required",
            ));
        }

        if self
            .analytics
            .tracked_parameters
            .iter()
            .any(|name| name.trim().is_empty())
        {
            return Err(Error::configuration("Tracked parameter names cannot be empty"));
        }

        let mut seen = HashSet::new();
        for name in &self.analytics.tracked_parameters {
            if RESERVED_FEATURE_NAMES.contains(&name.as_str()) {
                return Err(Error::configuration(format!(
                    "Tracked parameter '{}' clashes with a fixed feature column",
                    name
                )));
            }
            if !seen.insert(name.as_str()) {
                return Err(Error::configuration(format!(
                    "Tracked parameter '{}' is listed more than once",
                    name
                )));
            }
        }

        Ok(())
    }
}
