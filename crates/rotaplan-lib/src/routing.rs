//! Route planning over a [`RoadNetwork`].
//!
//! [`plan_route`] is the main entry point: it resolves location names,
//! runs the weighted shortest-path search, and derives the cost and
//! arrival estimate for the winning path.

use std::collections::HashSet;

use chrono::{DateTime, Local};
use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::estimate::{estimate, TariffConfig};
use crate::network::{LocationId, RoadNetwork};
use crate::path::find_route_dijkstra;

/// High-level route planning request.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    pub start: String,
    pub goal: String,
    /// Locations that must not appear in the resulting path.
    pub avoid: Vec<String>,
    pub tariff: TariffConfig,
}

impl RouteRequest {
    /// Convenience constructor with the default tariff and no avoided stops.
    pub fn new(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
            avoid: Vec::new(),
            tariff: TariffConfig::default(),
        }
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, Serialize)]
pub struct RoutePlan {
    pub start: LocationId,
    pub goal: LocationId,
    /// Ordered location identifiers from start to goal, both inclusive.
    pub steps: Vec<LocationId>,
    pub distance_km: f64,
    pub cost: f64,
    pub travel_days: f64,
    pub arrival: DateTime<Local>,
}

impl RoutePlan {
    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

fn resolve_avoided(network: &RoadNetwork, avoided: &[String]) -> Result<HashSet<LocationId>> {
    let mut resolved = HashSet::new();
    for name in avoided {
        resolved.insert(network.resolve(name)?);
    }
    Ok(resolved)
}

/// Compute the minimum-distance route for a request and derive its estimate.
///
/// The departure instant is taken as a parameter rather than read from the
/// system clock so arrival timestamps are reproducible under test.
pub fn plan_route(
    network: &RoadNetwork,
    request: &RouteRequest,
    departure: DateTime<Local>,
) -> Result<RoutePlan> {
    let start_id = network.resolve(&request.start)?;
    let goal_id = network.resolve(&request.goal)?;
    let avoided = resolve_avoided(network, &request.avoid)?;

    if avoided.contains(&start_id) || avoided.contains(&goal_id) {
        return Err(Error::RouteNotFound {
            start: request.start.clone(),
            goal: request.goal.clone(),
        });
    }

    let (steps, distance_km) = find_route_dijkstra(network, start_id, goal_id, &avoided)
        .ok_or_else(|| Error::RouteNotFound {
            start: request.start.clone(),
            goal: request.goal.clone(),
        })?;

    debug!(
        start = %request.start,
        goal = %request.goal,
        hops = steps.len().saturating_sub(1),
        distance_km,
        "route found"
    );

    let derived = estimate(distance_km, &request.tariff, departure);

    Ok(RoutePlan {
        start: start_id,
        goal: goal_id,
        steps,
        distance_km,
        cost: derived.cost,
        travel_days: derived.travel_days,
        arrival: derived.arrival,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hop_count_counts_edges_not_nodes() {
        let plan = RoutePlan {
            start: 0,
            goal: 2,
            steps: vec![0, 1, 2],
            distance_km: 10.0,
            cost: 200.0,
            travel_days: 0.02,
            arrival: Local::now(),
        };
        assert_eq!(plan.hop_count(), 2);
    }

    #[test]
    fn single_step_plan_has_no_hops() {
        let plan = RoutePlan {
            start: 0,
            goal: 0,
            steps: vec![0],
            distance_km: 0.0,
            cost: 0.0,
            travel_days: 0.0,
            arrival: Local::now(),
        };
        assert_eq!(plan.hop_count(), 0);
    }

    #[test]
    fn request_constructor_uses_default_tariff() {
        let request = RouteRequest::new("Curitiba", "Pelotas");
        assert_eq!(request.tariff.cost_per_km, 20.0);
        assert_eq!(request.tariff.km_per_day, 500.0);
        assert!(request.avoid.is_empty());
    }
}
