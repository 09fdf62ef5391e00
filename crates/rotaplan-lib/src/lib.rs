//! Rotaplan library entry points.
//!
//! This crate exposes helpers to build a weighted road network from
//! registered locations, compute minimum-distance routes between them, and
//! derive cost and arrival estimates from the winning path. Higher-level
//! consumers (the CLI) should only depend on the functions exported here
//! instead of reimplementing behavior.

#![deny(warnings)]

pub mod dataset;
pub mod error;
pub mod estimate;
pub mod export;
pub mod format;
pub mod geo;
pub mod map;
pub mod network;
pub mod output;
pub mod path;
pub mod routing;

pub use dataset::{load_network, sample_network, NetworkFile};
pub use error::{Error, Result};
pub use estimate::{estimate, Estimate, TariffConfig};
pub use export::{write_estimate_csv, write_route_csv, write_route_csv_file};
pub use format::{format_clock, format_currency, CurrencyStyle};
pub use geo::{haversine_km, Coordinate};
pub use map::{render_map_html, write_map_html};
pub use network::{Edge, Location, LocationId, RoadNetwork};
pub use output::{RouteRenderMode, RouteStep, RouteSummary};
pub use routing::{plan_route, RoutePlan, RouteRequest};
