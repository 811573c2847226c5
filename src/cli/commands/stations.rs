//! Stations command: spatial queries and catalog summaries

use super::shared::{colored_wqi, load_catalog, load_config, print_json, print_station_table};
use crate::app::models::{BoundingBox, StationRecord};
use crate::app::services::spatial_query::{ListQuery, NearbyQuery, SpatialQueryEngine};
use crate::app::services::station_catalog::{CatalogSummary, StationCatalog};
use crate::cli::args::{Args, FilterArgs, OutputFormat, StationsArgs, StationsQuery};
use anyhow::{Context, Result};
use colored::*;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

/// Run one catalog query
pub async fn run_stations(args: &Args, stations_args: &StationsArgs) -> Result<()> {
    let config = load_config(args)?;
    let catalog = Arc::new(load_catalog(args).await?);
    info!("Catalog ready: {}", catalog.metadata().summary());

    let engine = SpatialQueryEngine::with_config(Arc::clone(&catalog), config.spatial);
    let format = args.output_format;
    debug!("Stations query: {:?}", stations_args.query);

    match &stations_args.query {
        StationsQuery::Nearby {
            lat,
            lon,
            radius_km,
            limit,
            filter,
        } => {
            let mut query = apply_nearby_filter(NearbyQuery::new(*lat, *lon), filter);
            if let Some(radius_km) = radius_km {
                query = query.with_radius(*radius_km);
            }
            if let Some(limit) = limit {
                query = query.with_limit(*limit);
            }

            let result = engine.nearby(&query).context("Nearby query failed")?;
            if format == OutputFormat::Json {
                return print_json(&result);
            }

            println!(
                "{} {} stations within {} km of ({:.4}, {:.4})",
                "Nearby:".bright_green().bold(),
                result.total_found.to_string().bright_white().bold(),
                result.radius_km,
                result.query_location.latitude,
                result.query_location.longitude
            );
            println!();
            print_station_table(
                result
                    .stations
                    .iter()
                    .map(|m| (m.station, Some(m.distance_km))),
            );
        }

        StationsQuery::Viewport {
            north,
            south,
            east,
            west,
        } => {
            let result = engine
                .in_viewport(BoundingBox::new(*north, *south, *east, *west))
                .context("Viewport query failed")?;
            if format == OutputFormat::Json {
                return print_json(&result);
            }

            println!(
                "{} {} stations in N{} S{} E{} W{}",
                "Viewport:".bright_green().bold(),
                result.count.to_string().bright_white().bold(),
                north,
                south,
                east,
                west
            );
            println!();
            print_station_table(result.stations.iter().map(|s| (*s, None)));
        }

        StationsQuery::List {
            page,
            per_page,
            filter,
        } => {
            let mut query = ListQuery::new().with_page(*page);
            if let Some(per_page) = per_page {
                query = query.with_per_page(*per_page);
            }
            if let Some(district) = &filter.district {
                query = query.with_district(district.clone());
            }
            if let Some(station_type) = &filter.station_type {
                query = query.with_type(station_type.clone());
            }

            let result = engine.list(&query).context("Listing failed")?;
            if format == OutputFormat::Json {
                return print_json(&result);
            }

            let pagination = &result.pagination;
            println!(
                "{} page {} of {} ({} stations total)",
                "Stations:".bright_green().bold(),
                pagination.page,
                pagination.total_pages,
                pagination.total_items
            );
            println!();
            print_station_table(result.stations.iter().map(|s| (*s, None)));
            if pagination.has_next {
                println!();
                println!(
                    "{}",
                    format!("More results: --page {}", pagination.page + 1).bright_black()
                );
            }
        }

        StationsQuery::Summary {
            alerts,
            status,
            water_class,
        } => {
            let summary = catalog.summary();
            let alerting = alerts.then(|| catalog.stations_with_alerts());
            let with_status = status.map(|status| catalog.stations_by_status(status));
            let in_class = water_class.map(|class| catalog.stations_by_water_class(class));

            if format == OutputFormat::Json {
                return print_json(&SummaryOutput {
                    summary: &summary,
                    stations_with_alerts: alerting.as_deref(),
                    stations_with_status: with_status.as_deref(),
                    stations_in_class: in_class.as_deref(),
                });
            }

            print_summary(&catalog, &summary);
            if let Some(alerting) = alerting {
                println!();
                println!("{}", "Stations with alerts:".bright_yellow().bold());
                print_station_table(alerting.into_iter().map(|s| (s, None)));
            }
            if let (Some(status), Some(stations)) = (status, with_status) {
                println!();
                println!("{}", format!("Stations with status {}:", status).bright_cyan().bold());
                print_station_table(stations.into_iter().map(|s| (s, None)));
            }
            if let (Some(class), Some(stations)) = (water_class, in_class) {
                println!();
                println!("{}", format!("Stations in class {}:", class).bright_cyan().bold());
                print_station_table(stations.into_iter().map(|s| (s, None)));
            }
        }

        StationsQuery::Show { id } => {
            let station = catalog
                .require_station(id)
                .with_context(|| format!("Cannot show station '{}'", id))?;
            if format == OutputFormat::Json {
                return print_json(station);
            }
            print_station(station);
        }
    }

    Ok(())
}

fn apply_nearby_filter(mut query: NearbyQuery, filter: &FilterArgs) -> NearbyQuery {
    if let Some(district) = &filter.district {
        query = query.with_district(district.clone());
    }
    if let Some(station_type) = &filter.station_type {
        query = query.with_type(station_type.clone());
    }
    query
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SummaryOutput<'a> {
    #[serde(flatten)]
    summary: &'a CatalogSummary,

    #[serde(skip_serializing_if = "Option::is_none")]
    stations_with_alerts: Option<&'a [&'a StationRecord]>,

    #[serde(skip_serializing_if = "Option::is_none")]
    stations_with_status: Option<&'a [&'a StationRecord]>,

    #[serde(skip_serializing_if = "Option::is_none")]
    stations_in_class: Option<&'a [&'a StationRecord]>,
}

fn print_summary(catalog: &StationCatalog, summary: &CatalogSummary) {
    println!("{}", "Station Catalog Summary".bright_green().bold());
    println!("=======================");
    println!("Source:            {}", catalog.metadata().summary());
    println!(
        "Total stations:    {}",
        summary.total_stations.to_string().bright_white().bold()
    );
    println!("Average WQI:       {}", colored_wqi(summary.average_wqi));
    println!(
        "With alerts:       {} ({} alerts in total)",
        summary.stations_with_alerts, summary.total_alerts
    );
    println!();

    println!("Status distribution:");
    for (status, count) in &summary.status_distribution {
        println!("   • {:10} {}", status.as_str(), count);
    }
    println!("Water class distribution:");
    for (class, count) in &summary.water_class_distribution {
        println!("   • Class {}    {}", class, count);
    }
    println!("Station types:");
    for (station_type, count) in &summary.type_counts {
        println!("   • {:16} {}", station_type, count);
    }
    println!("Districts:");
    for (district, statistics) in &summary.district_statistics {
        println!(
            "   • {:16} {:4} stations, average WQI {}",
            district,
            statistics.count,
            colored_wqi(statistics.average_wqi)
        );
    }
}

fn print_station(station: &StationRecord) {
    println!("{}", station.name.bright_green().bold());
    println!("ID:          {}", station.id);
    println!("Type:        {}", station.station_type);
    println!("District:    {}", station.district);
    println!(
        "Location:    {:.4}, {:.4}",
        station.latitude, station.longitude
    );
    println!("WQI:         {}", colored_wqi(station.wqi));
    println!("Status:      {}", station.status);
    println!("Water class: {}", station.water_class);
    if station.has_alerts {
        println!(
            "Alerts:      {}",
            station.alert_count.to_string().bright_red().bold()
        );
    } else {
        println!("Alerts:      none");
    }
}
