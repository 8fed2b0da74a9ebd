//! # Voyage PNL Engine
//!
//! Revenue, cost and profit-and-loss figures for a voyage. Each variant
//! follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate_*(input) -> Result<*Result, VoyageError>` - pure function
//!
//! ## Variants
//!
//! - [`quick`] - single-cargo flow; every division-by-zero guard returns 0
//!   (degraded-but-safe output, not an error)
//! - [`full`] - multi-cargo flow with demurrage/despatch, commissions, tax
//!   and bonuses; a non-positive voyage duration is `InvalidInput`, and any
//!   non-finite intermediate is caught as `CalculationFailed`
//!
//! All percentages across both variants are decimal fractions
//! (2.5% = 0.025).

pub mod full;
pub mod quick;

// Re-export commonly used types
pub use full::{
    calculate_full, CargoRow, DemurrageRow, DespatchRow, VoyagePnlInput, VoyagePnlResult,
};
pub use quick::{calculate_quick, QuickPnlInput, QuickPnlResult};
