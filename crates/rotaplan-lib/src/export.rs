//! Tabular export of route summaries.
//!
//! Column layout here is presentation, not contract; consumers that need the
//! raw values should serialise the [`RouteSummary`] itself.

use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::output::RouteSummary;

/// Write one CSV row per stop: index, name, label, latitude, longitude.
pub fn write_route_csv<W: Write>(writer: W, summary: &RouteSummary) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["index", "name", "label", "latitude", "longitude"])?;
    for step in &summary.steps {
        csv_writer.write_record([
            step.index.to_string(),
            step.name.clone().unwrap_or_default(),
            step.label.clone().unwrap_or_default(),
            step.latitude.to_string(),
            step.longitude.to_string(),
        ])?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write a single summary row: start, goal, distance, cost, days, arrival.
pub fn write_estimate_csv<W: Write>(writer: W, summary: &RouteSummary) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record([
        "start",
        "goal",
        "distance_km",
        "cost",
        "travel_days",
        "arrival",
    ])?;
    csv_writer.write_record([
        summary.start.name.clone().unwrap_or_default(),
        summary.goal.name.clone().unwrap_or_default(),
        format!("{:.3}", summary.distance_km),
        format!("{:.2}", summary.cost),
        format!("{:.4}", summary.travel_days),
        summary.arrival.to_rfc3339(),
    ])?;
    csv_writer.flush()?;
    Ok(())
}

/// Write both the per-stop table and the summary row to sibling files,
/// `<path>` and `<path>` with an `.estimate.csv` suffix.
pub fn write_route_csv_file(path: &Path, summary: &RouteSummary) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_route_csv(file, summary)?;

    let estimate_path = path.with_extension("estimate.csv");
    let file = std::fs::File::create(estimate_path)?;
    write_estimate_csv(file, summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::RoadNetwork;
    use crate::output::RouteSummary;
    use crate::routing::{plan_route, RouteRequest};
    use chrono::{Local, TimeZone};

    fn sample_summary() -> RouteSummary {
        let mut network = RoadNetwork::new();
        network.register_location("P", "P town", 0.0, 0.0).unwrap();
        network.register_location("Q", "Q town", 0.0, 1.0).unwrap();
        network.connect("P", "Q").unwrap();

        let departure = Local.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
        let plan = plan_route(&network, &RouteRequest::new("P", "Q"), departure).unwrap();
        RouteSummary::from_plan(&network, &plan).unwrap()
    }

    #[test]
    fn route_csv_has_header_and_one_row_per_stop() {
        let summary = sample_summary();
        let mut buffer = Vec::new();
        write_route_csv(&mut buffer, &summary).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "index,name,label,latitude,longitude");
        assert!(lines[1].starts_with("0,P,P town,"));
        assert!(lines[2].starts_with("1,Q,Q town,"));
    }

    #[test]
    fn estimate_csv_carries_derived_values() {
        let summary = sample_summary();
        let mut buffer = Vec::new();
        write_estimate_csv(&mut buffer, &summary).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.starts_with("start,goal,distance_km,cost,travel_days,arrival"));
        assert!(text.contains("P,Q,111.195,2223.90,0.2224,"));
    }

    #[test]
    fn file_export_writes_both_artifacts() {
        let summary = sample_summary();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("route.csv");
        write_route_csv_file(&path, &summary).unwrap();

        assert!(path.exists());
        assert!(dir.path().join("route.estimate.csv").exists());
    }
}
