//! Distance command handler: great-circle distance between two locations.

use anyhow::Result;
use serde_json::json;

use rotaplan_lib::{haversine_km, RoadNetwork};

use crate::output::OutputFormat;

pub fn handle_distance(
    network: &RoadNetwork,
    from: &str,
    to: &str,
    format: OutputFormat,
) -> Result<()> {
    let from_id = network.resolve(from)?;
    let to_id = network.resolve(to)?;
    let a = network.location(from_id).expect("resolved location exists");
    let b = network.location(to_id).expect("resolved location exists");

    let great_circle_km = haversine_km(&a.coord, &b.coord);
    let connected = network.direct_distance(from, to)?;

    if format == OutputFormat::Json {
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "from": from,
                "to": to,
                "great_circle_km": great_circle_km,
                "direct_edge_km": connected,
            }))?
        );
        return Ok(());
    }

    println!("{} -> {}: {:.2} km great-circle", from, to, great_circle_km);
    match connected {
        Some(edge) => println!("Connected directly ({:.2} km edge weight)", edge),
        None => println!("No direct connection registered"),
    }
    Ok(())
}
