//! Filtered, paginated station listings

use super::{SpatialQueryEngine, StationFilter};
use crate::app::models::{Pagination, StationPage, StationRecord};
use crate::{Error, Result};
use std::ops::Range;
use tracing::debug;

/// Parameters for a paginated listing
///
/// Page numbers are 1-based; page 0 is clamped to the first slice. Page and
/// page size fall back to 1 and the engine's configured default page size
/// when unset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListQuery {
    pub page: Option<usize>,
    pub per_page: Option<usize>,
    pub filter: StationFilter,
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, page: usize) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_per_page(mut self, per_page: usize) -> Self {
        self.per_page = Some(per_page);
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

/// Slice bounds and pagination block for one page of `total_items`
///
/// Pages past the end produce an empty range rather than an error. Page 0
/// clamps to the first slice.
pub fn page_bounds(total_items: usize, page: usize, per_page: usize) -> (Range<usize>, Pagination) {
    let start = page
        .saturating_sub(1)
        .saturating_mul(per_page)
        .min(total_items);
    let end = start.saturating_add(per_page).min(total_items);

    let pagination = Pagination {
        page,
        per_page,
        total_items,
        total_pages: total_items.div_ceil(per_page),
        has_next: end < total_items,
        has_prev: page > 1,
    };

    (start..end, pagination)
}

impl SpatialQueryEngine {
    /// List stations matching the filter, one page at a time
    ///
    /// A page size at or above the bulk-fetch threshold returns the whole
    /// filtered set as page 1 of 1.
    ///
    /// # Errors
    /// Returns `Error::InvalidQuery` for a zero page size.
    pub fn list(&self, query: &ListQuery) -> Result<StationPage<'_>> {
        let page = query.page.unwrap_or(1);
        let per_page = query.per_page.unwrap_or(self.config().default_per_page);

        if per_page == 0 {
            return Err(Error::invalid_query("perPage must be greater than 0"));
        }

        let filtered: Vec<&StationRecord> = self
            .catalog()
            .iter()
            .filter(|station| query.filter.matches(station))
            .collect();
        let total_items = filtered.len();

        let (stations, pagination) = if per_page >= self.config().bulk_fetch_threshold {
            let pagination = Pagination {
                page: 1,
                per_page,
                total_items,
                total_pages: 1,
                has_next: false,
                has_prev: false,
            };
            (filtered, pagination)
        } else {
            let (range, pagination) = page_bounds(total_items, page, per_page);
            (filtered[range].to_vec(), pagination)
        };

        debug!(
            "List page {} (perPage {}): {} of {} stations",
            pagination.page,
            per_page,
            stations.len(),
            total_items
        );

        Ok(StationPage {
            success: true,
            count: stations.len(),
            stations,
            pagination,
        })
    }
}
