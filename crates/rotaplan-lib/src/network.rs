use std::collections::HashMap;

use tracing::debug;

use crate::error::{Error, Result};
use crate::geo::Coordinate;

/// Minimum Jaro-Winkler similarity for a name to count as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Numeric identifier for a registered location, assigned in registration order.
pub type LocationId = usize;

/// A named point in the road network.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub id: LocationId,
    pub name: String,
    /// Opaque display label (address string).
    pub label: String,
    pub coord: Coordinate,
}

/// Weighted link to a neighbouring location.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub target: LocationId,
    pub distance_km: f64,
}

/// In-memory road network: registered locations plus an undirected weighted
/// adjacency map. Locations and connections are write-once-per-run; nothing
/// is ever deleted.
#[derive(Debug, Clone, Default)]
pub struct RoadNetwork {
    locations: Vec<Location>,
    name_to_id: HashMap<String, LocationId>,
    adjacency: HashMap<LocationId, Vec<Edge>>,
}

impl RoadNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a location, making the name available as a graph node with no
    /// edges. Re-registering an existing name overwrites the label and
    /// coordinate in place (last write wins); edges keep the weights recorded
    /// when they were connected.
    pub fn register_location(
        &mut self,
        name: impl Into<String>,
        label: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Result<LocationId> {
        let name = name.into();
        let coord = Coordinate::new(latitude, longitude);
        if !coord.is_valid() {
            return Err(Error::InvalidCoordinate {
                name,
                latitude,
                longitude,
            });
        }

        if let Some(&id) = self.name_to_id.get(&name) {
            debug!(name, id, "overwriting existing location");
            let location = &mut self.locations[id];
            location.label = label.into();
            location.coord = coord;
            return Ok(id);
        }

        let id = self.locations.len();
        self.locations.push(Location {
            id,
            name: name.clone(),
            label: label.into(),
            coord,
        });
        self.name_to_id.insert(name, id);
        self.adjacency.insert(id, Vec::new());
        Ok(id)
    }

    /// Connect two registered locations with an undirected edge weighted by
    /// the great-circle distance between their coordinates. Reconnecting the
    /// same pair recomputes and overwrites the weight. Returns the distance
    /// in kilometers.
    pub fn connect(&mut self, name_a: &str, name_b: &str) -> Result<f64> {
        let a = self.resolve(name_a)?;
        let b = self.resolve(name_b)?;
        if a == b {
            return Err(Error::SelfConnection {
                name: name_a.to_string(),
            });
        }

        let distance_km = self.locations[a].coord.distance_to(&self.locations[b].coord);
        self.upsert_edge(a, b, distance_km);
        self.upsert_edge(b, a, distance_km);
        debug!(from = name_a, to = name_b, distance_km, "connected locations");
        Ok(distance_km)
    }

    fn upsert_edge(&mut self, from: LocationId, to: LocationId, distance_km: f64) {
        let edges = self.adjacency.entry(from).or_default();
        match edges.iter_mut().find(|edge| edge.target == to) {
            Some(edge) => edge.distance_km = distance_km,
            None => edges.push(Edge {
                target: to,
                distance_km,
            }),
        }
    }

    /// Resolve a name to its identifier, attaching fuzzy suggestions on miss.
    pub fn resolve(&self, name: &str) -> Result<LocationId> {
        self.location_id_by_name(name)
            .ok_or_else(|| Error::UnknownLocation {
                name: name.to_string(),
                suggestions: self.fuzzy_location_matches(name, 3),
            })
    }

    /// Lookup a location identifier by its case-sensitive name.
    pub fn location_id_by_name(&self, name: &str) -> Option<LocationId> {
        self.name_to_id.get(name).copied()
    }

    /// Lookup a location name by identifier.
    pub fn location_name(&self, id: LocationId) -> Option<&str> {
        self.locations.get(id).map(|location| location.name.as_str())
    }

    pub fn location(&self, id: LocationId) -> Option<&Location> {
        self.locations.get(id)
    }

    /// All locations in registration order.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Neighbours of a location, empty for unknown ids.
    pub fn neighbours(&self, id: LocationId) -> &[Edge] {
        self.adjacency.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Weight of the direct edge between two registered locations, if any.
    pub fn direct_distance(&self, name_a: &str, name_b: &str) -> Result<Option<f64>> {
        let a = self.resolve(name_a)?;
        let b = self.resolve(name_b)?;
        Ok(self
            .neighbours(a)
            .iter()
            .find(|edge| edge.target == b)
            .map(|edge| edge.distance_km))
    }

    /// Rank registered names by Jaro-Winkler similarity to `name`, keeping at
    /// most `limit` entries above the suggestion threshold.
    pub fn fuzzy_location_matches(&self, name: &str, limit: usize) -> Vec<String> {
        let mut scored: Vec<(f64, &str)> = self
            .locations
            .iter()
            .map(|location| {
                let score = strsim::jaro_winkler(name, &location.name);
                (score, location.name.as_str())
            })
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, name)| name.to_string())
            .collect()
    }
}
