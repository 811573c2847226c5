//! Catalog-wide lookups and summary statistics
//!
//! Aggregations over the whole catalog: status and class distributions,
//! alert listings and per-district averages.

use super::StationCatalog;
use crate::app::models::{StationRecord, StationStatus, WaterClass};
use serde::Serialize;
use std::collections::BTreeMap;

/// Count and mean WQI of the stations in one district
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DistrictStatistics {
    pub count: usize,
    pub average_wqi: f64,
}

/// Summary statistics over every station in a catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSummary {
    pub total_stations: usize,
    pub average_wqi: f64,
    pub status_distribution: BTreeMap<StationStatus, usize>,
    pub water_class_distribution: BTreeMap<WaterClass, usize>,
    pub type_counts: BTreeMap<String, usize>,
    pub total_alerts: u64,
    pub stations_with_alerts: usize,
    pub district_statistics: BTreeMap<String, DistrictStatistics>,
}

impl StationCatalog {
    /// Compute summary statistics for the catalog
    ///
    /// An empty catalog yields zero counts and an average WQI of 0.
    pub fn summary(&self) -> CatalogSummary {
        let mut status_distribution = BTreeMap::new();
        let mut water_class_distribution = BTreeMap::new();
        let mut type_counts = BTreeMap::new();
        let mut district_sums: BTreeMap<String, (usize, f64)> = BTreeMap::new();
        let mut total_alerts = 0u64;
        let mut stations_with_alerts = 0usize;
        let mut wqi_sum = 0.0;

        for station in &self.stations {
            *status_distribution.entry(station.status).or_insert(0) += 1;
            *water_class_distribution
                .entry(station.water_class)
                .or_insert(0) += 1;
            *type_counts.entry(station.station_type.clone()).or_insert(0) += 1;

            let district = district_sums
                .entry(station.district.clone())
                .or_insert((0, 0.0));
            district.0 += 1;
            district.1 += station.wqi;

            total_alerts += u64::from(station.alert_count);
            if station.has_alerts {
                stations_with_alerts += 1;
            }
            wqi_sum += station.wqi;
        }

        let average_wqi = if self.stations.is_empty() {
            0.0
        } else {
            wqi_sum / self.stations.len() as f64
        };

        let district_statistics = district_sums
            .into_iter()
            .map(|(district, (count, sum))| {
                (
                    district,
                    DistrictStatistics {
                        count,
                        average_wqi: sum / count as f64,
                    },
                )
            })
            .collect();

        CatalogSummary {
            total_stations: self.stations.len(),
            average_wqi,
            status_distribution,
            water_class_distribution,
            type_counts,
            total_alerts,
            stations_with_alerts,
            district_statistics,
        }
    }

    /// Stations carrying alerts, most alerts first
    ///
    /// Stations with equal alert counts keep catalog order.
    pub fn stations_with_alerts(&self) -> Vec<&StationRecord> {
        let mut alerting: Vec<&StationRecord> =
            self.stations.iter().filter(|s| s.has_alerts).collect();
        alerting.sort_by(|a, b| b.alert_count.cmp(&a.alert_count));
        alerting
    }

    /// Stations of one water class, in catalog order
    pub fn stations_by_water_class(&self, water_class: WaterClass) -> Vec<&StationRecord> {
        self.stations
            .iter()
            .filter(|s| s.water_class == water_class)
            .collect()
    }

    /// Stations with one status, in catalog order
    pub fn stations_by_status(&self, status: StationStatus) -> Vec<&StationRecord> {
        self.stations.iter().filter(|s| s.status == status).collect()
    }

    /// Distinct district names, sorted
    pub fn districts(&self) -> Vec<&str> {
        let mut districts: Vec<&str> = self.stations.iter().map(|s| s.district.as_str()).collect();
        districts.sort_unstable();
        districts.dedup();
        districts
    }
}
