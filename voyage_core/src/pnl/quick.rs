//! # Quick Voyage PNL
//!
//! Single-cargo voyage profit-and-loss for the simple flow: one freight
//! figure, one hire rate, one bunker total.
//!
//! Division guards: every per-day or per-tonne metric whose denominator is
//! not positive comes back as 0 rather than an error. This is a
//! degraded-but-safe output policy for interactive estimates.
//!
//! ## Example
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
//! assert_eq!(result.pnl, 0.0);
//! assert_eq!(result.tce, 10000.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::cargo::FreightTerms;
use crate::errors::{VoyageError, VoyageResult};

/// Input parameters for the quick PNL flow.
///
/// All percentages are decimal fractions (2.5% = 0.025). Cost fields
/// default to zero so the minimal call carries only cargo, freight, days,
/// hire and bunkers.
///
/// ## JSON Example
///
/// ```json
/// {
///   "cargo_quantity_mt": 40000.0,
///   "freight": { "type": "PerTonne", "amount": 20.0 },
///   "voyage_days": 20.0,
///   "hire_rate_per_day": 10000.0,
///   "total_bunker_mt": 1000.0,
///   "bunker_price_per_mt": 600.0,
///   "port_cost": 0.0,
///   "broker_commission_pct": 0.025
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickPnlInput {
    /// Cargo quantity in metric tonnes
    pub cargo_quantity_mt: f64,

    /// Freight terms (per-tonne rate or lumpsum total)
    pub freight: FreightTerms,

    /// Voyage duration in days, before the weather factor
    pub voyage_days: f64,

    /// Daily hire rate ($/day)
    pub hire_rate_per_day: f64,

    /// Total bunker consumption for the voyage (MT)
    pub total_bunker_mt: f64,

    /// Bunker price ($/MT)
    pub bunker_price_per_mt: f64,

    /// Port disbursements ($)
    #[serde(default)]
    pub port_cost: f64,

    /// Miscellaneous voyage costs ($)
    #[serde(default)]
    pub misc_cost: f64,

    /// Canal transit fees ($)
    #[serde(default)]
    pub canal_cost: f64,

    /// Broker commission on freight, decimal fraction
    #[serde(default)]
    pub broker_commission_pct: f64,

    /// Address commission, decimal fraction in [0, 1)
    #[serde(default)]
    pub address_commission_pct: f64,

    /// Weather margin on voyage days, decimal fraction (0.05 = +5% days)
    #[serde(default)]
    pub weather_factor_pct: f64,
}

impl Default for QuickPnlInput {
    fn default() -> Self {
        QuickPnlInput {
            cargo_quantity_mt: 0.0,
            freight: FreightTerms::PerTonne(0.0),
            voyage_days: 0.0,
            hire_rate_per_day: 0.0,
            total_bunker_mt: 0.0,
            bunker_price_per_mt: 0.0,
            port_cost: 0.0,
            misc_cost: 0.0,
            canal_cost: 0.0,
            broker_commission_pct: 0.0,
            address_commission_pct: 0.0,
            weather_factor_pct: 0.0,
        }
    }
}

impl QuickPnlInput {
    /// Reject non-finite inputs; range handling is left to the formula
    /// guards so degraded inputs still yield safe zeros.
    pub fn validate(&self) -> VoyageResult<()> {
        let (freight_field, freight_amount) = match self.freight {
            FreightTerms::PerTonne(rate) => ("freight.PerTonne", rate),
            FreightTerms::Lumpsum(total) => ("freight.Lumpsum", total),
        };
        let fields = [
            ("cargo_quantity_mt", self.cargo_quantity_mt),
            (freight_field, freight_amount),
            ("voyage_days", self.voyage_days),
            ("hire_rate_per_day", self.hire_rate_per_day),
            ("total_bunker_mt", self.total_bunker_mt),
            ("bunker_price_per_mt", self.bunker_price_per_mt),
            ("port_cost", self.port_cost),
            ("misc_cost", self.misc_cost),
            ("canal_cost", self.canal_cost),
            ("broker_commission_pct", self.broker_commission_pct),
            ("address_commission_pct", self.address_commission_pct),
            ("weather_factor_pct", self.weather_factor_pct),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(VoyageError::invalid_input(
                    name,
                    value.to_string(),
                    "Must be a finite number",
                ));
            }
        }
        Ok(())
    }
}

/// Results of the quick PNL flow.
///
/// Invariants (both hold exactly, not approximately):
/// - `total_voyage_cost = hire_cost + port + misc + canal + bunker_cost`
/// - `pnl = net_revenue - total_voyage_cost`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickPnlResult {
    /// Voyage days after the weather factor
    pub effective_voyage_days: f64,

    /// Total freight (rate x quantity, or the lumpsum)
    pub total_freight: f64,

    /// Gross revenue (equals total freight in this flow)
    pub gross_revenue: f64,

    /// Revenue net of broker commission
    pub net_revenue: f64,

    /// Hire cost over the effective voyage days
    pub hire_cost: f64,

    /// Bunker cost (total MT x price)
    pub bunker_cost: f64,

    /// Exact sum of hire, port, misc, canal and bunker costs
    pub total_voyage_cost: f64,

    /// Net profit and loss: net revenue minus total voyage cost
    pub pnl: f64,

    /// PNL per effective voyage day (0 when days are not positive)
    pub daily_profit: f64,

    /// Time-charter equivalent ($/day; 0 when days are not positive)
    pub tce: f64,

    /// TCE grossed up for address commission
    pub gross_tce: f64,

    /// Breakeven freight rate ($/MT; 0 when the denominator is not positive)
    pub break_even_freight: f64,
}

/// Calculate the quick single-cargo voyage PNL.
///
/// # Errors
///
/// `InvalidInput` only for non-finite inputs. Zero or negative
/// denominators yield 0 in the per-day and per-tonne metrics.
pub fn calculate_quick(input: &QuickPnlInput) -> VoyageResult<QuickPnlResult> {
    input.validate()?;

    let effective_voyage_days = input.voyage_days * (1.0 + input.weather_factor_pct);

    let total_freight = input.freight.total_for_quantity(input.cargo_quantity_mt);
    let gross_revenue = total_freight;
    let net_revenue = gross_revenue * (1.0 - input.broker_commission_pct);

    let hire_cost = input.hire_rate_per_day * effective_voyage_days;
    let bunker_cost = input.total_bunker_mt * input.bunker_price_per_mt;

    let total_voyage_cost =
        hire_cost + input.port_cost + input.misc_cost + input.canal_cost + bunker_cost;

    let pnl = net_revenue - total_voyage_cost;
    let daily_profit = if effective_voyage_days > 0.0 {
        pnl / effective_voyage_days
    } else {
        0.0
    };

    let voyage_costs_excl_hire =
        bunker_cost + input.port_cost + input.misc_cost + input.canal_cost;
    let tce = if effective_voyage_days > 0.0 {
        (net_revenue - voyage_costs_excl_hire) / effective_voyage_days
    } else {
        0.0
    };

    let gross_tce = if (0.0..1.0).contains(&input.address_commission_pct) {
        tce / (1.0 - input.address_commission_pct)
    } else {
        tce
    };

    let commission_factor = 1.0 - input.broker_commission_pct;
    let break_even_freight = if input.cargo_quantity_mt > 0.0 && commission_factor > 0.0 {
        total_voyage_cost / (input.cargo_quantity_mt * commission_factor)
    } else {
        0.0
    };

    Ok(QuickPnlResult {
        effective_voyage_days,
        total_freight,
        gross_revenue,
        net_revenue,
        hire_cost,
        bunker_cost,
        total_voyage_cost,
        pnl,
        daily_profit,
        tce,
        gross_tce,
        break_even_freight,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The worked example: 40k MT at $20/MT, 20 days, $10k/day hire,
    /// 1000 MT bunkers at $600/MT, everything else zero.
    fn worked_example() -> QuickPnlInput {
        QuickPnlInput {
            cargo_quantity_mt: 40000.0,
            freight: FreightTerms::PerTonne(20.0),
            voyage_days: 20.0,
            hire_rate_per_day: 10000.0,
            total_bunker_mt: 1000.0,
            bunker_price_per_mt: 600.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_worked_example() {
        let result = calculate_quick(&worked_example()).unwrap();

        assert_eq!(result.total_freight, 800000.0);
        assert_eq!(result.hire_cost, 200000.0);
        assert_eq!(result.bunker_cost, 600000.0);
        assert_eq!(result.total_voyage_cost, 800000.0);
        assert_eq!(result.pnl, 0.0);
        // TCE = (800000 - 600000) / 20
        assert_eq!(result.tce, 10000.0);
    }

    #[test]
    fn test_cost_sum_invariant() {
        let input = QuickPnlInput {
            port_cost: 40000.0,
            misc_cost: 12500.0,
            canal_cost: 250000.0,
            ..worked_example()
        };
        let result = calculate_quick(&input).unwrap();
        assert_eq!(
            result.total_voyage_cost,
            result.hire_cost
                + input.port_cost
                + input.misc_cost
                + input.canal_cost
                + result.bunker_cost
        );
        assert_eq!(result.pnl, result.net_revenue - result.total_voyage_cost);
    }

    #[test]
    fn test_lumpsum_freight() {
        let input = QuickPnlInput {
            freight: FreightTerms::Lumpsum(750000.0),
            ..worked_example()
        };
        let result = calculate_quick(&input).unwrap();
        assert_eq!(result.total_freight, 750000.0);
        assert_eq!(result.pnl, 750000.0 - 800000.0);
    }

    #[test]
    fn test_weather_factor_extends_days() {
        let input = QuickPnlInput {
            weather_factor_pct: 0.10,
            ..worked_example()
        };
        let result = calculate_quick(&input).unwrap();
        assert!((result.effective_voyage_days - 22.0).abs() < 1e-9);
        assert!((result.hire_cost - 220000.0).abs() < 1e-6);
    }

    #[test]
    fn test_commissions() {
        let input = QuickPnlInput {
            broker_commission_pct: 0.025,
            address_commission_pct: 0.0375,
            ..worked_example()
        };
        let result = calculate_quick(&input).unwrap();
        assert_eq!(result.net_revenue, 800000.0 * 0.975);
        assert!((result.gross_tce - result.tce / 0.9625).abs() < 1e-9);
        // Gross TCE exceeds net TCE whenever TCE is positive
        assert!(result.gross_tce > result.tce);
    }

    #[test]
    fn test_division_guards_return_zero() {
        let input = QuickPnlInput {
            voyage_days: 0.0,
            ..worked_example()
        };
        let result = calculate_quick(&input).unwrap();
        assert_eq!(result.daily_profit, 0.0);
        assert_eq!(result.tce, 0.0);
        assert_eq!(result.gross_tce, 0.0);

        let no_cargo = QuickPnlInput {
            cargo_quantity_mt: 0.0,
            freight: FreightTerms::Lumpsum(750000.0),
            ..worked_example()
        };
        let result = calculate_quick(&no_cargo).unwrap();
        assert_eq!(result.break_even_freight, 0.0);
    }

    #[test]
    fn test_breakeven_round_trip() {
        let input = QuickPnlInput {
            port_cost: 35000.0,
            broker_commission_pct: 0.025,
            ..worked_example()
        };
        let first = calculate_quick(&input).unwrap();
        assert!(first.break_even_freight > 0.0);

        // Feeding the breakeven rate back in must zero the PNL
        let at_breakeven = QuickPnlInput {
            freight: FreightTerms::PerTonne(first.break_even_freight),
            ..input
        };
        let second = calculate_quick(&at_breakeven).unwrap();
        assert!(second.pnl.abs() < 1e-6);
    }

    #[test]
    fn test_non_finite_input_rejected() {
        let input = QuickPnlInput {
            voyage_days: f64::NAN,
            ..worked_example()
        };
        assert!(calculate_quick(&input).is_err());
    }

    #[test]
    fn test_non_finite_freight_rejected() {
        // The freight amount lives inside the enum but is an input like any
        // other; a NaN rate must never reach the formulas.
        let nan_rate = QuickPnlInput {
            freight: FreightTerms::PerTonne(f64::NAN),
            ..worked_example()
        };
        let err = calculate_quick(&nan_rate).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");

        let infinite_lumpsum = QuickPnlInput {
            freight: FreightTerms::Lumpsum(f64::INFINITY),
            ..worked_example()
        };
        assert!(calculate_quick(&infinite_lumpsum).is_err());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let result = calculate_quick(&worked_example()).unwrap();
        let json = serde_json::to_string_pretty(&result).unwrap();
        assert!(json.contains("total_voyage_cost"));
        assert!(json.contains("break_even_freight"));

        let roundtrip: QuickPnlResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, roundtrip);
    }
}
