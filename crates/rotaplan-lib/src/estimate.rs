use chrono::{DateTime, Duration, Local};
use serde::Serialize;

/// Per-kilometer tariff and average daily travel speed used to derive cost
/// and ETA from a route distance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TariffConfig {
    /// Monetary cost charged per kilometer travelled.
    pub cost_per_km: f64,
    /// Average distance covered in one day of travel.
    pub km_per_day: f64,
}

impl Default for TariffConfig {
    fn default() -> Self {
        Self {
            cost_per_km: 20.0,
            km_per_day: 500.0,
        }
    }
}

/// Derived cost and arrival estimate for a route distance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Estimate {
    pub distance_km: f64,
    pub cost: f64,
    pub travel_days: f64,
    pub arrival: DateTime<Local>,
}

/// Derive cost and ETA from a distance. The departure instant is an explicit
/// parameter so callers (and tests) control the clock; the arrival is the
/// departure plus the travel time as a fractional-day duration, with no
/// timezone conversion.
pub fn estimate(distance_km: f64, tariff: &TariffConfig, departure: DateTime<Local>) -> Estimate {
    let cost = distance_km * tariff.cost_per_km;
    let travel_days = distance_km / tariff.km_per_day;
    let travel_millis = (travel_days * 86_400_000.0).round() as i64;
    let arrival = departure + Duration::milliseconds(travel_millis);

    Estimate {
        distance_km,
        cost,
        travel_days,
        arrival,
    }
}
