//! Radius search around a point

use super::geo::{haversine_km, validate_point};
use super::{SpatialQueryEngine, StationFilter};
use crate::app::models::{GeoPoint, NearbyResult, StationMatch};
use crate::{Error, Result};
use tracing::debug;

/// Parameters for a radius search
///
/// Radius and limit fall back to the engine's configured defaults when unset.
#[derive(Debug, Clone, PartialEq)]
pub struct NearbyQuery {
    pub center: GeoPoint,
    pub radius_km: Option<f64>,
    pub limit: Option<usize>,
    pub filter: StationFilter,
}

impl NearbyQuery {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            center: GeoPoint::new(latitude, longitude),
            radius_km: None,
            limit: None,
            filter: StationFilter::default(),
        }
    }

    pub fn with_radius(mut self, radius_km: f64) -> Self {
        self.radius_km = Some(radius_km);
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_district(mut self, district: impl Into<String>) -> Self {
        self.filter.district = Some(district.into());
        self
    }

    pub fn with_type(mut self, station_type: impl Into<String>) -> Self {
        self.filter.station_type = Some(station_type.into());
        self
    }
}

impl SpatialQueryEngine {
    /// Find stations within a radius of a point, nearest first
    ///
    /// Stations are scanned in catalog order and collection stops as soon as
    /// `limit` matches are found, so a truncated result holds the first
    /// matches in catalog order rather than the globally nearest ones. The
    /// collected matches are then stably sorted by distance.
    ///
    /// # Errors
    /// Returns `Error::InvalidQuery` for out-of-range coordinates, a
    /// non-positive or non-finite radius, or a zero limit.
    pub fn nearby(&self, query: &NearbyQuery) -> Result<NearbyResult<'_>> {
        let radius_km = query.radius_km.unwrap_or(self.config().default_radius_km);
        let limit = query.limit.unwrap_or(self.config().default_limit);

        validate_point(query.center)?;
        if !radius_km.is_finite() || radius_km <= 0.0 {
            return Err(Error::invalid_query(format!(
                "radius must be a positive number of km, got {}",
                radius_km
            )));
        }
        if limit == 0 {
            return Err(Error::invalid_query("limit must be greater than 0"));
        }

        let mut stations = Vec::new();
        for station in self.catalog() {
            if !query.filter.matches(station) {
                continue;
            }

            let distance_km = haversine_km(
                query.center,
                GeoPoint::new(station.latitude, station.longitude),
            );
            if distance_km <= radius_km {
                stations.push(StationMatch {
                    station,
                    distance_km,
                });
                if stations.len() == limit {
                    break;
                }
            }
        }

        stations.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));

        debug!(
            "Nearby ({:.4}, {:.4}) within {} km: {} stations",
            query.center.latitude,
            query.center.longitude,
            radius_km,
            stations.len()
        );

        Ok(NearbyResult {
            success: true,
            total_found: stations.len(),
            stations,
            radius_km,
            query_location: query.center,
        })
    }
}
