//! # voyage_core - Voyage Economics Calculation Engine
//!
//! `voyage_core` estimates maritime voyage economics: given cargo, route,
//! vessel and cost inputs it derives dead-weight requirements, voyage
//! duration, bunker consumption and a full profit-and-loss breakdown,
//! including reverse-solved variants (required freight rate, required
//! hire, target time-charter-equivalent).
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results;
//!   every formula is a deterministic function of its explicit inputs,
//!   safe to call concurrently with no coordination
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings - callers
//!   can tell a bad input from a failed extraction from a formula fault
//! - **No I/O**: Vessel lookups, route distances, bunker prices and AI
//!   text completion are external collaborators; the only seam exposed
//!   here is the [`specs::TextCompletion`] trait
//!
//! ## Quick Start
//!
//! ```rust
//! use voyage_core::cargo::FreightTerms;
//! use voyage_core::pnl::quick::{calculate_quick, QuickPnlInput};
//!
//! let input = QuickPnlInput {
//!     cargo_quantity_mt: 40000.0,
//!     freight: FreightTerms::PerTonne(20.0),
//!     voyage_days: 20.0,
//!     hire_rate_per_day: 10000.0,
//!     total_bunker_mt: 1000.0,
//!     bunker_price_per_mt: 600.0,
//!     ..Default::default()
//! };
//!
//! let result = calculate_quick(&input).unwrap();
//! println!("TCE: {:.0} $/day", result.tce);
//! ```
//!
//! ## Modules
//!
//! - [`cargo`] - Cargo terms, option quantities, DWT estimation
//! - [`specs`] - Speed/consumption extraction from free-form vessel text
//! - [`voyage`] - Voyage duration and bunker consumption
//! - [`costs`] - Session cost aggregation with exact-sum totals
//! - [`pnl`] - Quick and full profit-and-loss calculations
//! - [`reverse`] - Reverse solvers for freight, hire and TCE targets
//! - [`errors`] - Structured error types

pub mod cargo;
pub mod costs;
pub mod errors;
pub mod pnl;
pub mod reverse;
pub mod specs;
pub mod voyage;

// Re-export commonly used types at crate root for convenience
pub use cargo::{estimate_dwt, CargoSpec, FreightTerms, OptionQuantity};
pub use costs::{CostComponent, CostLedger, CostUpdate, VoyageCostBreakdown};
pub use errors::{VoyageError, VoyageResult};
pub use pnl::{calculate_full, calculate_quick, QuickPnlInput, VoyagePnlInput};
pub use specs::{
    Extraction, ExtractionMode, FuelType, PatternExtractor, SpeedConsumptionExtractor,
    VesselSpeedConsumption,
};
pub use voyage::{
    compute_bunker_consumption, compute_leg_bunker_consumption, compute_leg_voyage_days,
    compute_voyage_days, RouteDistance, VoyageTimeMode,
};
