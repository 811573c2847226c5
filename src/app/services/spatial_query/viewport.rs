//! Bounding-box search for map viewports

use super::SpatialQueryEngine;
use super::geo::validate_bounds;
use crate::Result;
use crate::app::models::{BoundingBox, ViewportResult};
use tracing::debug;

impl SpatialQueryEngine {
    /// Every station inside the viewport, in catalog order
    ///
    /// Bounds are inclusive. No filters or limits apply.
    ///
    /// # Errors
    /// Returns `Error::InvalidQuery` when `south > north`, when a bound is out
    /// of range, or when `west > east` (antimeridian-crossing boxes).
    pub fn in_viewport(&self, bounds: BoundingBox) -> Result<ViewportResult<'_>> {
        validate_bounds(&bounds)?;

        let stations: Vec<_> = self
            .catalog()
            .iter()
            .filter(|station| bounds.contains(station.latitude, station.longitude))
            .collect();

        debug!(
            "Viewport N{} S{} E{} W{}: {} stations",
            bounds.north,
            bounds.south,
            bounds.east,
            bounds.west,
            stations.len()
        );

        Ok(ViewportResult {
            success: true,
            count: stations.len(),
            stations,
            bounds,
        })
    }
}
