//! # Cargo Terms & DWT Estimation
//!
//! Cargo value records (quantity, freight terms, option quantity) and the
//! dead-weight-tonnage estimate derived from cargo quantity.
//!
//! ## Example
//!
//! ```rust
//! use voyage_core::cargo::{estimate_dwt, CargoSpec, FreightTerms};
//!
//! let cargo = CargoSpec {
//!     quantity_mt: 40000.0,
//!     freight: FreightTerms::PerTonne(20.0),
//!     target_tce: None,
//!     option: None,
//! };
//!
//! let dwt = estimate_dwt(cargo.quantity_mt).unwrap();
//! assert_eq!(dwt, 44000.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{VoyageError, VoyageResult};

/// How freight is charged for a cargo.
///
/// The two forms are mutually exclusive: a cargo is either rated per metric
/// tonne or as a single fixed lumpsum for the voyage.
///
/// ## JSON Example
///
/// ```json
/// { "type": "PerTonne", "amount": 20.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "amount")]
pub enum FreightTerms {
    /// Freight rate in $/MT, multiplied by the effective cargo quantity
    PerTonne(f64),
    /// Fixed total freight in $ for the voyage, independent of quantity
    Lumpsum(f64),
}

impl FreightTerms {
    /// Total freight for a given effective quantity (MT)
    pub fn total_for_quantity(&self, effective_qty_mt: f64) -> f64 {
        match self {
            FreightTerms::PerTonne(rate) => effective_qty_mt * rate,
            FreightTerms::Lumpsum(total) => *total,
        }
    }

    /// True if this is a lumpsum charge
    pub fn is_lumpsum(&self) -> bool {
        matches!(self, FreightTerms::Lumpsum(_))
    }
}

/// Charterer's option quantity on top of the contract quantity.
///
/// Absolute tonnage takes precedence over a percentage when both are known
/// to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum OptionQuantity {
    /// Option as a fraction of the CP quantity (0.05 = 5% more/less)
    Percent(f64),
    /// Option as an absolute tonnage added to the CP quantity
    Tonnes(f64),
}

impl OptionQuantity {
    /// Effective quantity for a contract quantity under this option
    pub fn effective_quantity(&self, cp_qty_mt: f64) -> f64 {
        match self {
            OptionQuantity::Percent(pct) => cp_qty_mt * (1.0 + pct),
            OptionQuantity::Tonnes(mt) => cp_qty_mt + mt,
        }
    }
}

/// A cargo enquiry as supplied by the caller.
///
/// ## JSON Example
///
/// ```json
/// {
///   "quantity_mt": 40000.0,
///   "freight": { "type": "PerTonne", "amount": 20.0 },
///   "target_tce": 12000.0,
///   "option": { "type": "Percent", "value": 0.05 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CargoSpec {
    /// Cargo quantity in metric tonnes
    pub quantity_mt: f64,

    /// Freight terms (per-tonne rate or lumpsum)
    pub freight: FreightTerms,

    /// Optional owner's target time-charter-equivalent ($/day)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_tce: Option<f64>,

    /// Optional charterer's option quantity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub option: Option<OptionQuantity>,
}

impl CargoSpec {
    /// Validate that the quantity is usable as a divisor downstream.
    pub fn validate(&self) -> VoyageResult<()> {
        if !self.quantity_mt.is_finite() || self.quantity_mt <= 0.0 {
            return Err(VoyageError::invalid_input(
                "quantity_mt",
                self.quantity_mt.to_string(),
                "Cargo quantity must be a positive number of tonnes",
            ));
        }
        Ok(())
    }
}

/// Estimate the dead-weight tonnage required to lift a cargo.
///
/// DWT is the cargo quantity plus a fixed 10% margin for fuel, stores and
/// ballast allowance. Computed as `q + q/10` so the result is exact for
/// round quantities: `estimate_dwt(40000.0) == Ok(44000.0)`.
///
/// # Errors
///
/// `InvalidInput` when the quantity is non-finite or not positive.
pub fn estimate_dwt(cargo_quantity_mt: f64) -> VoyageResult<f64> {
    if !cargo_quantity_mt.is_finite() || cargo_quantity_mt <= 0.0 {
        return Err(VoyageError::invalid_input(
            "cargo_quantity_mt",
            cargo_quantity_mt.to_string(),
            "Cargo quantity must be a positive number of tonnes",
        ));
    }
    Ok(cargo_quantity_mt + cargo_quantity_mt / 10.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dwt_is_exact() {
        assert_eq!(estimate_dwt(40000.0).unwrap(), 44000.0);
        assert_eq!(estimate_dwt(50000.0).unwrap(), 55000.0);
        assert_eq!(estimate_dwt(1.0).unwrap(), 1.1);
    }

    #[test]
    fn test_dwt_rejects_bad_quantity() {
        assert!(estimate_dwt(0.0).is_err());
        assert!(estimate_dwt(-40000.0).is_err());
        assert!(estimate_dwt(f64::NAN).is_err());
        assert!(estimate_dwt(f64::INFINITY).is_err());
    }

    #[test]
    fn test_freight_terms() {
        assert_eq!(FreightTerms::PerTonne(20.0).total_for_quantity(40000.0), 800000.0);
        assert_eq!(FreightTerms::Lumpsum(750000.0).total_for_quantity(40000.0), 750000.0);
        assert!(FreightTerms::Lumpsum(750000.0).is_lumpsum());
        assert!(!FreightTerms::PerTonne(20.0).is_lumpsum());
    }

    #[test]
    fn test_option_quantity() {
        let optioned = OptionQuantity::Percent(0.05).effective_quantity(50000.0);
        assert!((optioned - 52500.0).abs() < 1e-6);
        assert_eq!(OptionQuantity::Tonnes(2000.0).effective_quantity(50000.0), 52000.0);
    }

    #[test]
    fn test_cargo_spec_validation() {
        let mut cargo = CargoSpec {
            quantity_mt: 40000.0,
            freight: FreightTerms::PerTonne(20.0),
            target_tce: None,
            option: None,
        };
        assert!(cargo.validate().is_ok());

        cargo.quantity_mt = 0.0;
        assert!(cargo.validate().is_err());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let cargo = CargoSpec {
            quantity_mt: 39855.0,
            freight: FreightTerms::Lumpsum(900000.0),
            target_tce: Some(11000.0),
            option: Some(OptionQuantity::Tonnes(1500.0)),
        };
        let json = serde_json::to_string(&cargo).unwrap();
        let roundtrip: CargoSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(cargo, roundtrip);
    }
}
