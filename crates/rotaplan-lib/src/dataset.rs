//! Network file loading and the built-in sample network.

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::Result;
use crate::network::RoadNetwork;

/// One location entry in a network file.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationEntry {
    pub name: String,
    pub label: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// One connection entry in a network file.
#[derive(Debug, Clone, Deserialize)]
pub struct ConnectionEntry {
    pub from: String,
    pub to: String,
}

/// On-disk JSON representation of a road network.
#[derive(Debug, Clone, Deserialize)]
pub struct NetworkFile {
    pub locations: Vec<LocationEntry>,
    pub connections: Vec<ConnectionEntry>,
}

impl NetworkFile {
    /// Build the in-memory network, registering every location before any
    /// connection so edge endpoints always resolve.
    pub fn into_network(self) -> Result<RoadNetwork> {
        let mut network = RoadNetwork::new();
        for entry in self.locations {
            network.register_location(entry.name, entry.label, entry.latitude, entry.longitude)?;
        }
        for entry in self.connections {
            network.connect(&entry.from, &entry.to)?;
        }
        Ok(network)
    }
}

/// Load a road network from a JSON file.
pub fn load_network(path: &Path) -> Result<RoadNetwork> {
    debug!(path = %path.display(), "loading network file");
    let contents = std::fs::read_to_string(path)?;
    let file: NetworkFile = serde_json::from_str(&contents)?;
    file.into_network()
}

/// Built-in demo network: nine cities across southern Brazil with four
/// highway connections between them.
pub fn sample_network() -> RoadNetwork {
    let mut network = RoadNetwork::new();
    let cities = [
        ("Curitiba", "Curitiba/PR", -25.4284, -49.2733),
        ("Londrina", "Londrina/PR", -23.3105, -51.1628),
        ("Foz do Iguaçu", "Foz do Iguaçu/PR", -25.5478, -54.5882),
        ("União da Vitória", "União da Vitória/PR", -26.2273, -51.0870),
        ("Joinville", "Joinville/SC", -26.3032, -48.8415),
        ("Chapecó", "Chapecó/SC", -27.1009, -52.6157),
        ("Porto Alegre", "Porto Alegre/RS", -30.0346, -51.2177),
        ("Uruguaiana", "Uruguaiana/RS", -29.7617, -57.0856),
        ("Pelotas", "Pelotas/RS", -31.7613, -52.3376),
    ];
    for (name, label, latitude, longitude) in cities {
        network
            .register_location(name, label, latitude, longitude)
            .expect("sample coordinates are valid");
    }

    let connections = [
        ("Curitiba", "Porto Alegre"),
        ("Porto Alegre", "Pelotas"),
        ("Foz do Iguaçu", "União da Vitória"),
        ("Joinville", "Chapecó"),
    ];
    for (a, b) in connections {
        network.connect(a, b).expect("sample endpoints are registered");
    }

    network
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn sample_network_registers_all_cities() {
        let network = sample_network();
        assert_eq!(network.len(), 9);
        assert!(network.location_id_by_name("Pelotas").is_some());
        assert!(network
            .direct_distance("Curitiba", "Porto Alegre")
            .unwrap()
            .is_some());
    }

    #[test]
    fn sample_network_leaves_some_cities_isolated() {
        let network = sample_network();
        let londrina = network.location_id_by_name("Londrina").unwrap();
        assert!(network.neighbours(londrina).is_empty());
    }

    #[test]
    fn network_file_round_trips_through_json() {
        let json = r#"{
            "locations": [
                {"name": "A", "label": "A town", "latitude": 0.0, "longitude": 0.0},
                {"name": "B", "label": "B town", "latitude": 0.0, "longitude": 1.0}
            ],
            "connections": [{"from": "A", "to": "B"}]
        }"#;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let network = load_network(file.path()).unwrap();
        assert_eq!(network.len(), 2);
        assert!(network.direct_distance("A", "B").unwrap().is_some());
    }

    #[test]
    fn connection_to_unregistered_name_fails_load() {
        let json = r#"{
            "locations": [
                {"name": "A", "label": "A town", "latitude": 0.0, "longitude": 0.0}
            ],
            "connections": [{"from": "A", "to": "Missing"}]
        }"#;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        assert!(load_network(file.path()).is_err());
    }
}
