//! Great-circle distance and coordinate validation

use crate::app::models::{BoundingBox, GeoPoint};
use crate::constants::{EARTH_RADIUS_KM, LATITUDE_RANGE, LONGITUDE_RANGE};
use crate::{Error, Result};

/// Haversine distance between two points in kilometres
///
/// Uses a spherical Earth of radius 6371 km. The result is symmetric in its
/// arguments.
pub fn haversine_km(from: GeoPoint, to: GeoPoint) -> f64 {
    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let delta_lat = (to.latitude - from.latitude).to_radians();
    let delta_lon = (to.longitude - from.longitude).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Reject non-finite or out-of-range coordinates
pub fn validate_point(point: GeoPoint) -> Result<()> {
    validate_latitude("latitude", point.latitude)?;
    validate_longitude("longitude", point.longitude)
}

/// Reject viewports that are inverted, out of range, or cross the antimeridian
pub fn validate_bounds(bounds: &BoundingBox) -> Result<()> {
    validate_latitude("north", bounds.north)?;
    validate_latitude("south", bounds.south)?;
    validate_longitude("east", bounds.east)?;
    validate_longitude("west", bounds.west)?;

    if bounds.south > bounds.north {
        return Err(Error::invalid_query(format!(
            "south ({}) must not be greater than north ({})",
            bounds.south, bounds.north
        )));
    }

    // Boxes spanning the ±180° meridian must be split by the caller
    if bounds.west > bounds.east {
        return Err(Error::invalid_query(format!(
            "west ({}) is greater than east ({}); viewports crossing the antimeridian are not supported",
            bounds.west, bounds.east
        )));
    }

    Ok(())
}

fn validate_latitude(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && LATITUDE_RANGE.contains(&value) {
        Ok(())
    } else {
        Err(Error::invalid_query(format!(
            "{} {} is outside -90..=90 degrees",
            name, value
        )))
    }
}

fn validate_longitude(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && LONGITUDE_RANGE.contains(&value) {
        Ok(())
    } else {
        Err(Error::invalid_query(format!(
            "{} {} is outside -180..=180 degrees",
            name, value
        )))
    }
}
