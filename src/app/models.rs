//! Data models for water-quality monitoring
//!
//! This module contains the station record held by the catalog, the derived
//! classifications fixed at load time, and the result shapes returned by the
//! spatial query engine.

use crate::constants::{
    LATITUDE_RANGE, LONGITUDE_RANGE, alert_thresholds, class_thresholds, status_thresholds,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub mod reading;

pub use reading::{Parameters, Reading};

// =============================================================================
// Station Record Structure
// =============================================================================

/// Station record as supplied by the bulk catalog input
///
/// Unknown fields are ignored. Both the current (`id`, `type`) and legacy
/// (`station_id`, `stationType`) field names are accepted.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RawStationRecord {
    #[serde(alias = "station_id", alias = "stationId")]
    pub id: String,

    pub name: String,

    #[serde(rename = "type", alias = "stationType", alias = "station_type")]
    pub station_type: String,

    pub district: String,

    pub latitude: f64,

    pub longitude: f64,

    pub wqi: f64,
}

/// Monitoring station with classifications derived from its WQI
///
/// Records are created once during catalog load and never modified; the
/// derived fields are not recomputed afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationRecord {
    /// Unique station identifier within the catalog
    pub id: String,

    /// Human-readable station name
    pub name: String,

    /// Station type (e.g. "surface_water", "groundwater")
    #[serde(rename = "type")]
    pub station_type: String,

    /// Administrative district
    pub district: String,

    /// Latitude in WGS84 decimal degrees
    pub latitude: f64,

    /// Longitude in WGS84 decimal degrees
    pub longitude: f64,

    /// Water quality index, conventionally 0-100
    pub wqi: f64,

    pub status: StationStatus,

    pub water_class: WaterClass,

    /// True iff the WQI is below the alert threshold
    pub has_alerts: bool,

    pub alert_count: u32,
}

impl StationRecord {
    /// Create a new station record with validation and derived fields
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        station_type: impl Into<String>,
        district: impl Into<String>,
        latitude: f64,
        longitude: f64,
        wqi: f64,
    ) -> Result<Self> {
        Self::from_raw(RawStationRecord {
            id: id.into(),
            name: name.into(),
            station_type: station_type.into(),
            district: district.into(),
            latitude,
            longitude,
            wqi,
        })
    }

    /// Validate a raw record and derive status, class and alert fields
    pub fn from_raw(raw: RawStationRecord) -> Result<Self> {
        validate_raw(&raw)?;

        let RawStationRecord {
            id,
            name,
            station_type,
            district,
            latitude,
            longitude,
            wqi,
        } = raw;

        Ok(Self {
            id: id.trim().to_string(),
            name,
            station_type,
            district,
            latitude,
            longitude,
            wqi,
            status: StationStatus::from_wqi(wqi),
            water_class: WaterClass::from_wqi(wqi),
            has_alerts: wqi < alert_thresholds::ALERT_BELOW,
            alert_count: alert_count_for(wqi),
        })
    }

    /// Get station location as (latitude, longitude) tuple
    pub fn location(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }

    /// Check optional exact-match district and type filters
    pub fn matches(&self, district: Option<&str>, station_type: Option<&str>) -> bool {
        district.is_none_or(|d| self.district == d)
            && station_type.is_none_or(|t| self.station_type == t)
    }
}

fn validate_raw(raw: &RawStationRecord) -> Result<()> {
    if raw.id.trim().is_empty() {
        return Err(Error::data_validation("Station id cannot be empty"));
    }

    if raw.name.trim().is_empty() {
        return Err(Error::data_validation(format!(
            "Station '{}' has an empty name",
            raw.id
        )));
    }

    if !raw.latitude.is_finite() || !LATITUDE_RANGE.contains(&raw.latitude) {
        return Err(Error::data_validation(format!(
            "Station '{}' has invalid latitude {}: must be between -90 and 90 degrees",
            raw.id, raw.latitude
        )));
    }

    if !raw.longitude.is_finite() || !LONGITUDE_RANGE.contains(&raw.longitude) {
        return Err(Error::data_validation(format!(
            "Station '{}' has invalid longitude {}: must be between -180 and 180 degrees",
            raw.id, raw.longitude
        )));
    }

    if !raw.wqi.is_finite() {
        return Err(Error::data_validation(format!(
            "Station '{}' has a non-finite WQI",
            raw.id
        )));
    }

    Ok(())
}

fn alert_count_for(wqi: f64) -> u32 {
    if wqi >= alert_thresholds::ALERT_BELOW {
        0
    } else if wqi >= alert_thresholds::SECOND_ALERT_BELOW {
        1
    } else if wqi >= alert_thresholds::THIRD_ALERT_BELOW {
        2
    } else {
        3
    }
}

// =============================================================================
// Derived Classifications
// =============================================================================

/// Station status bucket derived from WQI
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StationStatus {
    Excellent,
    Good,
    Moderate,
    Poor,
}

impl StationStatus {
    pub fn from_wqi(wqi: f64) -> Self {
        if wqi >= status_thresholds::EXCELLENT {
            Self::Excellent
        } else if wqi >= status_thresholds::GOOD {
            Self::Good
        } else if wqi >= status_thresholds::MODERATE {
            Self::Moderate
        } else {
            Self::Poor
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Moderate => "Moderate",
            Self::Poor => "Poor",
        }
    }
}

impl FromStr for StationStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "excellent" => Ok(Self::Excellent),
            "good" => Ok(Self::Good),
            "moderate" => Ok(Self::Moderate),
            "poor" => Ok(Self::Poor),
            _ => Err(Error::invalid_query(format!(
                "Unknown station status '{}': expected Excellent, Good, Moderate or Poor",
                s
            ))),
        }
    }
}

impl std::fmt::Display for StationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// CPCB water quality class derived from WQI
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WaterClass {
    A,
    B,
    C,
    D,
    E,
}

impl WaterClass {
    pub fn from_wqi(wqi: f64) -> Self {
        if wqi >= class_thresholds::CLASS_A {
            Self::A
        } else if wqi >= class_thresholds::CLASS_B {
            Self::B
        } else if wqi >= class_thresholds::CLASS_C {
            Self::C
        } else if wqi >= class_thresholds::CLASS_D {
            Self::D
        } else {
            Self::E
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
        }
    }
}

impl FromStr for WaterClass {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let letter = trimmed
            .strip_prefix("Class ")
            .or_else(|| trimmed.strip_prefix("class "))
            .unwrap_or(trimmed);

        match letter.to_ascii_uppercase().as_str() {
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            "D" => Ok(Self::D),
            "E" => Ok(Self::E),
            _ => Err(Error::invalid_query(format!(
                "Unknown water class '{}': expected A, B, C, D or E",
                s
            ))),
        }
    }
}

impl std::fmt::Display for WaterClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Spatial Query Results
// =============================================================================

/// A point on the globe in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Map viewport bounds in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl BoundingBox {
    pub fn new(north: f64, south: f64, east: f64, west: f64) -> Self {
        Self {
            north,
            south,
            east,
            west,
        }
    }

    /// Inclusive containment test; assumes `west <= east`
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        latitude >= self.south
            && latitude <= self.north
            && longitude >= self.west
            && longitude <= self.east
    }
}

/// Station annotated with its distance from a query point
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StationMatch<'a> {
    #[serde(flatten)]
    pub station: &'a StationRecord,

    pub distance_km: f64,
}

/// Result of a radius search, sorted nearest first
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NearbyResult<'a> {
    pub success: bool,
    pub stations: Vec<StationMatch<'a>>,
    pub total_found: usize,
    pub radius_km: f64,
    pub query_location: GeoPoint,
}

/// Result of a viewport search, in catalog order
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewportResult<'a> {
    pub success: bool,
    pub stations: Vec<&'a StationRecord>,
    pub count: usize,
    pub bounds: BoundingBox,
}

/// Pagination block for listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
    pub total_items: usize,
    pub total_pages: usize,
    pub has_next: bool,
    pub has_prev: bool,
}

/// One page of a filtered listing
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StationPage<'a> {
    pub success: bool,
    pub stations: Vec<&'a StationRecord>,
    pub count: usize,
    pub pagination: Pagination,
}
