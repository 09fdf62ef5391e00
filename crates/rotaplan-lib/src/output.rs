use std::fmt::Write;

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::error::{Error, Result};
use crate::network::{LocationId, RoadNetwork};
use crate::routing::RoutePlan;

/// Presentation style for turning a [`RouteSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRenderMode {
    PlainText,
    RichText,
}

/// Endpoint within a planned route.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteEndpoint {
    pub id: LocationId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl RouteEndpoint {
    fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<unknown>")
    }
}

/// Stop visited along a planned route, with resolved display attributes.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteStep {
    pub index: usize,
    pub id: LocationId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

impl RouteStep {
    fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<unknown>")
    }
}

/// Structured representation of a planned route that higher-level consumers
/// can render or serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub start: RouteEndpoint,
    pub goal: RouteEndpoint,
    pub hops: usize,
    pub distance_km: f64,
    pub cost: f64,
    pub travel_days: f64,
    pub arrival: DateTime<Local>,
    pub steps: Vec<RouteStep>,
}

impl RouteSummary {
    /// Convert a [`RoutePlan`] into a summary with resolved location names,
    /// labels and coordinates.
    pub fn from_plan(network: &RoadNetwork, plan: &RoutePlan) -> Result<Self> {
        if plan.steps.is_empty() {
            return Err(Error::EmptyRoute);
        }

        let steps = plan
            .steps
            .iter()
            .enumerate()
            .map(|(index, &id)| {
                let location = network.location(id);
                RouteStep {
                    index,
                    id,
                    name: location.map(|l| l.name.clone()),
                    label: location.map(|l| l.label.clone()),
                    latitude: location.map(|l| l.coord.latitude).unwrap_or_default(),
                    longitude: location.map(|l| l.coord.longitude).unwrap_or_default(),
                }
            })
            .collect::<Vec<_>>();

        let endpoint = |step: Option<&RouteStep>| RouteEndpoint {
            id: step.map(|s| s.id).unwrap_or_default(),
            name: step.and_then(|s| s.name.clone()),
        };

        Ok(Self {
            start: endpoint(steps.first()),
            goal: endpoint(steps.last()),
            hops: plan.hop_count(),
            distance_km: plan.distance_km,
            cost: plan.cost,
            travel_days: plan.travel_days,
            arrival: plan.arrival,
            steps,
        })
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: RouteRenderMode) -> String {
        match mode {
            RouteRenderMode::PlainText => self.render_plain(),
            RouteRenderMode::RichText => self.render_rich(),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Route: {} -> {} ({} hops, {:.2} km)",
            self.start.display_name(),
            self.goal.display_name(),
            self.hops,
            self.distance_km
        );
        for step in &self.steps {
            let _ = writeln!(
                buffer,
                "{:>3}: {} ({})",
                step.index,
                step.display_name(),
                step.label.as_deref().unwrap_or("-")
            );
        }
        let _ = writeln!(buffer, "Cost: {:.2}", self.cost);
        let _ = writeln!(
            buffer,
            "Arrival: {} ({:.2} days underway)",
            self.arrival.format("%Y-%m-%d %H:%M"),
            self.travel_days
        );
        buffer
    }

    fn render_rich(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "**Route** {} -> {} ({} hops, `{:.2} km`)",
            self.start.display_name(),
            self.goal.display_name(),
            self.hops,
            self.distance_km
        );
        for step in &self.steps {
            let _ = writeln!(
                buffer,
                "* {:>2}. **{}** ({})",
                step.index,
                step.display_name(),
                step.label.as_deref().unwrap_or("-")
            );
        }
        let _ = writeln!(
            buffer,
            "_Cost {:.2}, arrival {}_",
            self.cost,
            self.arrival.format("%Y-%m-%d %H:%M")
        );
        buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::{plan_route, RouteRequest};
    use chrono::TimeZone;

    fn sample_plan() -> (RoadNetwork, RoutePlan) {
        let mut network = RoadNetwork::new();
        network.register_location("P", "P town", 0.0, 0.0).unwrap();
        network.register_location("Q", "Q town", 0.0, 1.0).unwrap();
        network.connect("P", "Q").unwrap();

        let departure = Local.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
        let plan = plan_route(&network, &RouteRequest::new("P", "Q"), departure).unwrap();
        (network, plan)
    }

    #[test]
    fn summary_resolves_names_and_labels() {
        let (network, plan) = sample_plan();
        let summary = RouteSummary::from_plan(&network, &plan).unwrap();
        assert_eq!(summary.start.name.as_deref(), Some("P"));
        assert_eq!(summary.goal.name.as_deref(), Some("Q"));
        assert_eq!(summary.steps.len(), 2);
        assert_eq!(summary.steps[1].label.as_deref(), Some("Q town"));
        assert_eq!(summary.hops, 1);
    }

    #[test]
    fn plain_render_lists_each_stop() {
        let (network, plan) = sample_plan();
        let summary = RouteSummary::from_plan(&network, &plan).unwrap();
        let text = summary.render(RouteRenderMode::PlainText);
        assert!(text.contains("Route: P -> Q"));
        assert!(text.contains("0: P (P town)"));
        assert!(text.contains("1: Q (Q town)"));
        assert!(text.contains("Cost:"));
    }

    #[test]
    fn rich_render_uses_markdown_markers() {
        let (network, plan) = sample_plan();
        let summary = RouteSummary::from_plan(&network, &plan).unwrap();
        let text = summary.render(RouteRenderMode::RichText);
        assert!(text.contains("**Route**"));
        assert!(text.contains("**P**"));
    }

    #[test]
    fn empty_plan_is_rejected() {
        let (network, mut plan) = sample_plan();
        plan.steps.clear();
        let err = RouteSummary::from_plan(&network, &plan).unwrap_err();
        assert!(matches!(err, Error::EmptyRoute));
    }
}
