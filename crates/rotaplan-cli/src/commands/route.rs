//! Route command handler for computing paths between registered locations.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use clap::Args;

use rotaplan_lib::{
    format_clock, format_currency, plan_route, write_map_html, write_route_csv_file,
    CurrencyStyle, RoadNetwork, RouteRequest, RouteSummary, TariffConfig,
};

use crate::output::OutputFormat;

/// Arguments for the route command.
#[derive(Args, Debug, Clone)]
pub struct RouteArgs {
    /// Starting location name.
    #[arg(long = "from")]
    pub from: String,
    /// Destination location name.
    #[arg(long = "to")]
    pub to: String,
    /// Locations to avoid (repeatable).
    #[arg(long = "avoid")]
    pub avoid: Vec<String>,
    /// Departure instant (RFC 3339); defaults to now.
    #[arg(long = "depart")]
    pub depart: Option<String>,
    /// Monetary cost per kilometer.
    #[arg(long = "cost-per-km", default_value_t = 20.0)]
    pub cost_per_km: f64,
    /// Average kilometers covered per day of travel.
    #[arg(long = "km-per-day", default_value_t = 500.0)]
    pub km_per_day: f64,
    /// Write the route and its estimate as CSV files.
    #[arg(long = "csv")]
    pub csv: Option<PathBuf>,
    /// Write the route as a standalone HTML map.
    #[arg(long = "map")]
    pub map: Option<PathBuf>,
}

impl RouteArgs {
    fn to_request(&self) -> RouteRequest {
        RouteRequest {
            start: self.from.clone(),
            goal: self.to.clone(),
            avoid: self.avoid.clone(),
            tariff: TariffConfig {
                cost_per_km: self.cost_per_km,
                km_per_day: self.km_per_day,
            },
        }
    }

    fn departure(&self) -> Result<DateTime<Local>> {
        match &self.depart {
            Some(value) => DateTime::parse_from_rfc3339(value)
                .map(|instant| instant.with_timezone(&Local))
                .with_context(|| format!("invalid departure timestamp: {value}")),
            None => Ok(Local::now()),
        }
    }
}

/// Handle the route subcommand: plan, print, and optionally export artifacts.
pub fn handle_route(
    network: &RoadNetwork,
    args: &RouteArgs,
    format: OutputFormat,
    currency: &CurrencyStyle,
) -> Result<()> {
    let request = args.to_request();
    let departure = args.departure()?;

    let plan = plan_route(network, &request, departure)?;
    let summary = RouteSummary::from_plan(network, &plan)?;

    match format.render_mode() {
        Some(mode) => {
            print!("{}", summary.render(mode));
            println!(
                "Estimated cost: {}; arrival {} Hrs",
                format_currency(summary.cost, currency),
                format_clock(summary.arrival)
            );
        }
        None => println!("{}", serde_json::to_string_pretty(&summary)?),
    }

    if let Some(path) = &args.csv {
        write_route_csv_file(path, &summary)
            .with_context(|| format!("failed to write CSV to {}", path.display()))?;
        tracing::info!(path = %path.display(), "wrote route CSV");
    }

    if let Some(path) = &args.map {
        write_map_html(path, &summary)
            .with_context(|| format!("failed to write map to {}", path.display()))?;
        tracing::info!(path = %path.display(), "wrote route map");
    }

    Ok(())
}
