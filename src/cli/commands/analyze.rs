//! Analyze command: analytics reports over one station's history

use super::shared::{colored_wqi, load_config, load_history, print_json};
use crate::app::services::analytics::{
    FeatureExport, HistoryAnalyzer, PredictionSeries, RiskLevel, RiskReport, Severity, TrendReport,
};
use crate::cli::args::{AnalyzeArgs, Args, OutputFormat, ReportKind};
use anyhow::Result;
use colored::*;
use tracing::{info, warn};

pub async fn run_analyze(args: &Args, analyze_args: &AnalyzeArgs) -> Result<()> {
    let config = load_config(args)?;
    let store = load_history(args).await?;
    let analyzer = HistoryAnalyzer::new(config.analytics);

    let station_id = analyze_args.station_id.as_str();
    if !store.contains_station(station_id) {
        warn!("No reading history recorded for station {}", station_id);
    }
    let history = store.history(station_id);
    info!(
        "Analyzing {} readings for station {}",
        history.len(),
        station_id
    );

    let json = args.output_format == OutputFormat::Json;

    match analyze_args.report {
        ReportKind::Series => {
            let series = analyzer.to_prediction_series(history, analyze_args.limit);
            if json {
                return print_json(&series);
            }
            print_series(station_id, &series);
        }
        ReportKind::Trend => {
            let report = analyzer.trend_report(history);
            if json {
                return print_json(&report);
            }
            print_trend(station_id, &report);
        }
        ReportKind::Anomalies => {
            let anomalies = analyzer.anomalies(history);
            if json {
                return print_json(&anomalies);
            }

            println!(
                "{} {} anomalies in {} readings for {}",
                "Anomalies:".bright_green().bold(),
                anomalies.len().to_string().bright_white().bold(),
                history.len(),
                station_id
            );
            for anomaly in &anomalies {
                let severity = match anomaly.severity {
                    Severity::High => "high".bright_red().bold(),
                    Severity::Medium => "medium".yellow(),
                };
                println!(
                    "   • {}  WQI {}  deviation {:.2}  {}",
                    anomaly.timestamp,
                    colored_wqi(anomaly.wqi),
                    anomaly.deviation,
                    severity
                );
            }
        }
        ReportKind::Risk => {
            let report = analyzer.risk_assessment(history);
            if json {
                return print_json(&report);
            }
            print_risk(station_id, &report);
        }
        ReportKind::Export => {
            let export = analyzer.export_features(station_id, history);
            if json {
                return print_json(&export);
            }
            print_export(&export);
        }
    }

    Ok(())
}

fn print_no_data(station_id: &str, message: Option<&str>) {
    println!(
        "{} {}",
        station_id.bright_white().bold(),
        message.unwrap_or("no data").bright_black()
    );
}

fn print_series(station_id: &str, series: &PredictionSeries) {
    if !series.has_data {
        return print_no_data(station_id, series.message.as_deref());
    }

    println!(
        "{} {} points for {}",
        "Prediction series:".bright_green().bold(),
        series.len(),
        station_id
    );
    if let Some(range) = &series.time_range {
        println!("Range: {} to {}", range.start, range.end);
    }
    if let Some(statistics) = &series.statistics {
        println!(
            "WQI: average {:.1}, min {:.1}, max {:.1}",
            statistics.average_wqi, statistics.min_wqi, statistics.max_wqi
        );
    }
    for (name, values) in &series.parameters {
        let present = values.iter().filter(|v| v.is_some()).count();
        println!("   • {:16} {}/{} values", name, present, values.len());
    }
}

fn print_trend(station_id: &str, report: &TrendReport) {
    if !report.has_data {
        return print_no_data(station_id, report.message.as_deref());
    }

    println!(
        "{} {} ({} readings)",
        "Trend report:".bright_green().bold(),
        station_id,
        report.data_points
    );
    println!(
        "WQI trend: {} (slope {:+.3})",
        report.wqi_trend.direction, report.wqi_trend.slope
    );
    for (name, trend) in &report.parameter_trends {
        println!(
            "   • {:16} {:10} slope {:+.3}",
            name,
            trend.direction.as_str(),
            trend.slope
        );
    }
    println!("{}", report.summary().bright_white());
}

fn print_risk(station_id: &str, report: &RiskReport) {
    if !report.has_data {
        return print_no_data(station_id, report.message.as_deref());
    }

    let level = match report.risk_level {
        Some(RiskLevel::High) => "HIGH".bright_red().bold(),
        Some(RiskLevel::Medium) => "MEDIUM".yellow().bold(),
        Some(RiskLevel::Low) => "LOW".bright_green().bold(),
        None => "-".normal(),
    };

    println!("{} {} {}", "Risk assessment:".bright_green().bold(), station_id, level);
    println!("Readings:          {}", report.data_points);
    println!("Average WQI:       {}", colored_wqi(report.average_wqi));
    println!("WQI volatility:    {:.2}", report.wqi_volatility);
    println!("Alert frequency:   {:.1}%", report.alert_frequency * 100.0);
    println!("Critical events:   {}", report.critical_events);
    println!("Degradation rate:  {:+.3} per reading", report.degradation_rate);
}

fn print_export(export: &FeatureExport) {
    if !export.success {
        return print_no_data(&export.station_id, export.message.as_deref());
    }

    println!(
        "{} {} feature records for {}",
        "Export:".bright_green().bold(),
        export.data_points,
        export.station_id
    );
    println!("Columns: {}", export.metadata.feature_names.join(", "));
    println!("{}", "Use --format json for the records themselves".bright_black());
}
