// Module exports for CLI subcommands.
//
// Each module handles a specific subcommand; main.rs stays focused on
// parsing and dispatch.

pub mod distance;
pub mod locations;
pub mod route;

use std::path::Path;

use anyhow::{Context, Result};

use rotaplan_lib::{sample_network, RoadNetwork};

/// Load the network named on the command line, or the built-in sample.
pub fn load_network(path: Option<&Path>) -> Result<RoadNetwork> {
    match path {
        Some(path) => rotaplan_lib::load_network(path)
            .with_context(|| format!("failed to load network from {}", path.display())),
        None => Ok(sample_network()),
    }
}
