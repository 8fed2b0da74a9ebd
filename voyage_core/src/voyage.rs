//! # Voyage Time & Fuel Model
//!
//! Voyage duration and total bunker consumption from distance, speed(s) and
//! consumption rate(s).
//!
//! Two voyage-time formulas exist side by side and are not numerically
//! equivalent; the caller must pick one explicitly via [`VoyageTimeMode`]:
//!
//! - [`VoyageTimeMode::AveragedTransit`] - one averaged transit,
//!   `days = distance / (speed * 24)`
//! - [`VoyageTimeMode::IndependentLegs`] - ballast and laden legs modeled
//!   as full independent transits,
//!   `days = distance / ballast_speed + distance / laden_speed`
//!
//! The bunker model must match the chosen mode: a single consumption rate
//! for the averaged transit, ballast + laden rates for independent legs.
//!
//! ## Example
//!
//! ```rust
//! use voyage_core::voyage::{compute_voyage_days, compute_bunker_consumption};
//! use voyage_core::specs::FuelType;
//!
//! let days = compute_voyage_days(6720.0, 14.0).unwrap();
//! assert_eq!(days.voyage_days, 20.0);
//!
//! let bunker = compute_bunker_consumption(days.voyage_days, 26.0, FuelType::Vlsfo).unwrap();
//! assert_eq!(bunker.total_bunker_mt, 520.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{VoyageError, VoyageResult};
use crate::specs::FuelType;

/// Sailing hours per day
const HOURS_PER_DAY: f64 = 24.0;

// ============================================================================
// Route Distance
// ============================================================================

/// One leg of a route, as reported by a distance service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteLeg {
    /// Leg label (e.g., "Singapore - Suez")
    pub name: String,
    /// Leg distance in nautical miles
    pub distance_nm: f64,
}

/// Total route distance, optionally decomposed into legs.
///
/// ## JSON Example
///
/// ```json
/// {
///   "total_nm": 6720.0,
///   "legs": [
///     { "name": "Richards Bay - Singapore", "distance_nm": 5200.0 },
///     { "name": "Singapore - Qingdao", "distance_nm": 1520.0 }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteDistance {
    /// Total distance in nautical miles; always > 0 when used as a divisor
    pub total_nm: f64,

    /// Optional decomposition; when present the legs must sum to the total
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub legs: Vec<RouteLeg>,
}

impl RouteDistance {
    /// A route with just a total distance.
    pub fn new(total_nm: f64) -> Self {
        RouteDistance {
            total_nm,
            legs: Vec::new(),
        }
    }

    /// Validate the distance and, when legs are present, that they account
    /// for the whole total.
    pub fn validate(&self) -> VoyageResult<()> {
        if !self.total_nm.is_finite() || self.total_nm <= 0.0 {
            return Err(VoyageError::invalid_input(
                "total_nm",
                self.total_nm.to_string(),
                "Route distance must be positive",
            ));
        }
        if !self.legs.is_empty() {
            let leg_sum: f64 = self.legs.iter().map(|l| l.distance_nm).sum();
            if (leg_sum - self.total_nm).abs() > 1e-6 * self.total_nm.max(1.0) {
                return Err(VoyageError::calculation_failed(
                    "route_distance",
                    format!(
                        "Leg distances sum to {leg_sum} nm but total is {} nm",
                        self.total_nm
                    ),
                ));
            }
        }
        Ok(())
    }
}

// ============================================================================
// Voyage Days
// ============================================================================

/// Which voyage-time formula to apply. No default; callers choose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VoyageTimeMode {
    /// Single averaged transit at one speed
    AveragedTransit,
    /// Ballast and laden legs as full independent transits
    IndependentLegs,
}

/// Result of a voyage-day computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoyageDays {
    /// Mode the figure was computed under
    pub mode: VoyageTimeMode,
    /// Route distance used (nm)
    pub route_distance_nm: f64,
    /// Total voyage duration in days
    pub voyage_days: f64,
}

/// Voyage days for a single averaged transit.
///
/// `voyage_days = route_distance_nm / (speed_knots * 24)`
///
/// # Errors
///
/// `InvalidInput` when the distance or speed is non-finite or ≤ 0.
pub fn compute_voyage_days(route_distance_nm: f64, speed_knots: f64) -> VoyageResult<VoyageDays> {
    require_positive("route_distance_nm", route_distance_nm)?;
    require_positive("speed_knots", speed_knots)?;

    Ok(VoyageDays {
        mode: VoyageTimeMode::AveragedTransit,
        route_distance_nm,
        voyage_days: route_distance_nm / (speed_knots * HOURS_PER_DAY),
    })
}

/// Voyage days with ballast and laden legs as independent transits.
///
/// `voyage_days = distance / ballast_speed + distance / laden_speed`,
/// speeds in knots: the figure reads as a full transit at each speed.
///
/// # Errors
///
/// `InvalidInput` when the distance or either speed is non-finite or ≤ 0.
pub fn compute_leg_voyage_days(
    route_distance_nm: f64,
    ballast_speed_knots: f64,
    laden_speed_knots: f64,
) -> VoyageResult<VoyageDays> {
    require_positive("route_distance_nm", route_distance_nm)?;
    require_positive("ballast_speed_knots", ballast_speed_knots)?;
    require_positive("laden_speed_knots", laden_speed_knots)?;

    let voyage_days =
        route_distance_nm / ballast_speed_knots + route_distance_nm / laden_speed_knots;

    Ok(VoyageDays {
        mode: VoyageTimeMode::IndependentLegs,
        route_distance_nm,
        voyage_days,
    })
}

// ============================================================================
// Bunker Consumption
// ============================================================================

/// Result of a bunker-consumption computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BunkerConsumption {
    /// Voyage duration the total covers (days)
    pub voyage_days: f64,
    /// Total bunker mass consumed (MT)
    pub total_bunker_mt: f64,
    /// Fuel grade consumed
    pub fuel_type: FuelType,
}

/// Total bunker consumption for a single averaged transit.
///
/// `total = voyage_days * consumption_mt_per_day`
///
/// # Errors
///
/// `InvalidInput` when voyage_days ≤ 0 or the rate is negative.
pub fn compute_bunker_consumption(
    voyage_days: f64,
    consumption_mt_per_day: f64,
    fuel_type: FuelType,
) -> VoyageResult<BunkerConsumption> {
    require_positive("voyage_days", voyage_days)?;
    require_non_negative("consumption_mt_per_day", consumption_mt_per_day)?;

    Ok(BunkerConsumption {
        voyage_days,
        total_bunker_mt: voyage_days * consumption_mt_per_day,
        fuel_type,
    })
}

/// Total bunker consumption when voyage time is modeled as two legs.
///
/// `total = voyage_days * ballast_rate + voyage_days * laden_rate`,
/// matching [`compute_leg_voyage_days`].
///
/// # Errors
///
/// `InvalidInput` when voyage_days ≤ 0 or either rate is negative.
pub fn compute_leg_bunker_consumption(
    voyage_days: f64,
    ballast_consumption_mt_per_day: f64,
    laden_consumption_mt_per_day: f64,
    fuel_type: FuelType,
) -> VoyageResult<BunkerConsumption> {
    require_positive("voyage_days", voyage_days)?;
    require_non_negative("ballast_consumption_mt_per_day", ballast_consumption_mt_per_day)?;
    require_non_negative("laden_consumption_mt_per_day", laden_consumption_mt_per_day)?;

    let total_bunker_mt =
        voyage_days * ballast_consumption_mt_per_day + voyage_days * laden_consumption_mt_per_day;

    Ok(BunkerConsumption {
        voyage_days,
        total_bunker_mt,
        fuel_type,
    })
}

fn require_positive(field: &str, value: f64) -> VoyageResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(VoyageError::invalid_input(
            field,
            value.to_string(),
            "Must be a positive number",
        ));
    }
    Ok(())
}

fn require_non_negative(field: &str, value: f64) -> VoyageResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(VoyageError::invalid_input(
            field,
            value.to_string(),
            "Must be a non-negative number",
        ));
    }
    Ok(())
}
