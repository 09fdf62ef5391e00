//! Locations command handler: list every registered location.

use anyhow::Result;
use serde_json::json;

use rotaplan_lib::RoadNetwork;

use crate::output::OutputFormat;

pub fn handle_locations(network: &RoadNetwork, format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        let entries: Vec<_> = network
            .locations()
            .iter()
            .map(|location| {
                json!({
                    "name": location.name,
                    "label": location.label,
                    "latitude": location.coord.latitude,
                    "longitude": location.coord.longitude,
                    "connections": network.neighbours(location.id).len(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!("Locations ({}):", network.len());
    for location in network.locations() {
        println!(
            "- {} ({}) [{:.4}, {:.4}] {} connection(s)",
            location.name,
            location.label,
            location.coord.latitude,
            location.coord.longitude,
            network.neighbours(location.id).len()
        );
    }
    Ok(())
}
