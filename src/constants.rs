//! Application constants for the water monitor
//!
//! Classification thresholds, statistical cut-offs and query defaults used
//! throughout the catalog, spatial and analytics services.

// =============================================================================
// Geodesy
// =============================================================================

/// Mean Earth radius used by the Haversine formula, in kilometres
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Valid latitude range in decimal degrees
pub const LATITUDE_RANGE: std::ops::RangeInclusive<f64> = -90.0..=90.0;

/// Valid longitude range in decimal degrees
pub const LONGITUDE_RANGE: std::ops::RangeInclusive<f64> = -180.0..=180.0;

// =============================================================================
// Files
// =============================================================================

/// Directory under the user data directory holding default input files
pub const DEFAULT_DATA_DIR_NAME: &str = "water-monitor";

// =============================================================================
// Query Defaults
// =============================================================================

/// Default search radius for nearby queries (km)
pub const DEFAULT_RADIUS_KM: f64 = 30.0;

/// Default maximum number of stations collected by a nearby query
pub const DEFAULT_NEARBY_LIMIT: usize = 200;

/// Default page size for paginated listings
pub const DEFAULT_PER_PAGE: usize = 50;

/// Page sizes at or above this value return the whole filtered set at once
pub const BULK_FETCH_THRESHOLD: usize = 1000;

/// Default number of readings used for prediction series
pub const DEFAULT_PREDICTION_LIMIT: usize = 100;

/// Parameters extracted from readings by default
pub const DEFAULT_TRACKED_PARAMETERS: &[&str] =
    &["pH", "dissolvedOxygen", "turbidity", "temperature"];

/// Fixed feature columns of an export; tracked parameters may not reuse them
pub const RESERVED_FEATURE_NAMES: &[&str] =
    &["timestamp", "wqi", "status", "hasAlerts", "alertCount"];

// =============================================================================
// Station Classification
// =============================================================================

/// WQI lower bounds for station status
pub mod status_thresholds {
    pub const EXCELLENT: f64 = 80.0;
    pub const GOOD: f64 = 65.0;
    pub const MODERATE: f64 = 50.0;
}

/// WQI lower bounds for water classes (CPCB designated best use)
pub mod class_thresholds {
    pub const CLASS_A: f64 = 90.0;
    pub const CLASS_B: f64 = 75.0;
    pub const CLASS_C: f64 = 60.0;
    pub const CLASS_D: f64 = 45.0;
}

/// Alert derivation from WQI
pub mod alert_thresholds {
    /// Stations below this WQI carry alerts
    pub const ALERT_BELOW: f64 = 70.0;

    /// Below this WQI a station carries a second alert
    pub const SECOND_ALERT_BELOW: f64 = 50.0;

    /// Below this WQI a station carries a third alert
    pub const THIRD_ALERT_BELOW: f64 = 35.0;
}

// =============================================================================
// Analytics
// =============================================================================

/// Trend classification
pub mod trend {
    /// Slopes above this are improving, below its negation declining
    pub const SLOPE_THRESHOLD: f64 = 0.5;

    /// Minimum points needed for a least-squares fit
    pub const MIN_POINTS: usize = 2;
}

/// Anomaly detection
pub mod anomaly {
    /// Histories shorter than this never report anomalies
    pub const MIN_SAMPLE_SIZE: usize = 10;

    /// Deviation over this multiple of the variance is anomalous
    pub const MEDIUM_MULTIPLIER: f64 = 2.0;

    /// Deviation over this multiple of the variance is high severity
    pub const HIGH_MULTIPLIER: f64 = 3.0;
}

/// Risk tiers, evaluated high first
pub mod risk {
    pub const HIGH_AVERAGE_WQI_BELOW: f64 = 30.0;
    pub const HIGH_VOLATILITY_ABOVE: f64 = 200.0;
    pub const HIGH_ALERT_FREQUENCY_ABOVE: f64 = 0.5;

    pub const MEDIUM_AVERAGE_WQI_BELOW: f64 = 50.0;
    pub const MEDIUM_VOLATILITY_ABOVE: f64 = 100.0;
    pub const MEDIUM_ALERT_FREQUENCY_ABOVE: f64 = 0.3;

    /// Readings below this WQI count as critical events
    pub const CRITICAL_WQI_BELOW: f64 = 20.0;

    /// Reading status that counts as a critical event
    pub const CRITICAL_STATUS: &str = "critical";
}
