//! # Reverse Solvers
//!
//! Each solver algebraically inverts one PNL identity: given a target
//! profit or target rate, solve for the freight rate, daily hire, or TCE
//! that achieves it. Denominators are validated before dividing -
//! non-positive cargo quantities, hire days or voyage days are
//! `InvalidInput` here, not degraded zeros.
//!
//! ## Example
//!
//! ```rust
//! use voyage_core::reverse::required_freight_rate;
//!
//! // Rate needed to earn $12,000/day over 20 days against $800,000 of costs
//! let result = required_freight_rate(12000.0, 20.0, 800000.0, 40000.0).unwrap();
//! assert_eq!(result.gross_freight, 1040000.0);
//! assert_eq!(result.freight_rate, 26.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{VoyageError, VoyageResult};

/// Sign tag on a solved figure: did the voyage clear its costs?
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfitStatus {
    Profit,
    Loss,
}

impl ProfitStatus {
    fn from_sign(value: f64) -> Self {
        if value >= 0.0 {
            ProfitStatus::Profit
        } else {
            ProfitStatus::Loss
        }
    }
}

/// Freight rate required to hit a target TCE.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequiredFreightRate {
    /// Gross freight needed: target TCE x voyage days + voyage cost ($)
    pub gross_freight: f64,
    /// Required freight rate ($/MT)
    pub freight_rate: f64,
}

/// Solve for the freight rate that achieves a target TCE.
///
/// `gross_freight = target_tce * voyage_days + voyage_cost`,
/// `freight_rate = gross_freight / cargo_qty`.
///
/// # Errors
///
/// `InvalidInput` when `cargo_qty` is not positive.
pub fn required_freight_rate(
    target_tce: f64,
    voyage_days: f64,
    voyage_cost: f64,
    cargo_qty: f64,
) -> VoyageResult<RequiredFreightRate> {
    if !cargo_qty.is_finite() || cargo_qty <= 0.0 {
        return Err(VoyageError::invalid_input(
            "cargo_qty",
            cargo_qty.to_string(),
            "Cargo quantity must be greater than zero",
        ));
    }

    let gross_freight = target_tce * voyage_days + voyage_cost;
    Ok(RequiredFreightRate {
        gross_freight,
        freight_rate: gross_freight / cargo_qty,
    })
}

/// Freight rate reverse-solved from an expected profit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReverseFreightRate {
    /// Required freight rate ($/MT)
    pub freight_rate: f64,
}

/// Solve for the freight rate that yields an expected profit after
/// commission.
///
/// `freight_rate = (voyage_cost + expected_profit)
///               / (cargo_qty * (1 - commission_pct))`
///
/// # Errors
///
/// `InvalidInput` when `cargo_qty` is not positive or
/// `commission_pct >= 1`.
pub fn reverse_freight_rate(
    cargo_qty: f64,
    voyage_cost: f64,
    expected_profit: f64,
    commission_pct: f64,
) -> VoyageResult<ReverseFreightRate> {
    if !cargo_qty.is_finite() || cargo_qty <= 0.0 {
        return Err(VoyageError::invalid_input(
            "cargo_qty",
            cargo_qty.to_string(),
            "Cargo quantity must be greater than zero",
        ));
    }
    if !commission_pct.is_finite() || commission_pct >= 1.0 {
        return Err(VoyageError::invalid_input(
            "commission_pct",
            commission_pct.to_string(),
            "Commission must be a decimal fraction below 1 (100%)",
        ));
    }

    let denominator = cargo_qty * (1.0 - commission_pct);
    Ok(ReverseFreightRate {
        freight_rate: (voyage_cost + expected_profit) / denominator,
    })
}

/// Daily hire reverse-solved from a freight rate and expected profit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReverseDailyHire {
    /// Total revenue: cargo quantity x freight rate ($)
    pub total_revenue: f64,
    /// Required daily hire ($/day)
    pub hire_rate: f64,
    /// Profit when the hire rate is non-negative, loss otherwise
    pub profit_status: ProfitStatus,
}

/// Solve for the daily hire a voyage can afford.
///
/// `hire_rate = (total_revenue - voyage_cost_excl_hire - expected_profit)
///            / hire_days`
///
/// # Errors
///
/// `InvalidInput` when `cargo_qty` or `hire_days` is not positive.
pub fn reverse_daily_hire(
    cargo_qty: f64,
    freight_rate: f64,
    hire_days: f64,
    voyage_cost_excl_hire: f64,
    expected_profit: f64,
) -> VoyageResult<ReverseDailyHire> {
    if !cargo_qty.is_finite() || cargo_qty <= 0.0 {
        return Err(VoyageError::invalid_input(
            "cargo_qty",
            cargo_qty.to_string(),
            "Cargo quantity must be greater than zero",
        ));
    }
    if !hire_days.is_finite() || hire_days <= 0.0 {
        return Err(VoyageError::invalid_input(
            "hire_days",
            hire_days.to_string(),
            "Hire days must be greater than zero",
        ));
    }

    let total_revenue = cargo_qty * freight_rate;
    let hire_rate = (total_revenue - voyage_cost_excl_hire - expected_profit) / hire_days;

    Ok(ReverseDailyHire {
        total_revenue,
        hire_rate,
        profit_status: ProfitStatus::from_sign(hire_rate),
    })
}

/// TCE reverse-solved from revenue, cost and duration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReverseTce {
    /// Revenue minus total cost ($)
    pub profit_value: f64,
    /// Time-charter equivalent ($/day)
    pub tce: f64,
    /// Sign of the TCE
    pub profit_status: ProfitStatus,
}

/// Solve for the TCE implied by a voyage's revenue and cost.
///
/// `tce = (total_revenue - total_voyage_cost) / voyage_days`
///
/// # Errors
///
/// `InvalidInput` when `voyage_days` is not positive.
pub fn reverse_tce(
    total_revenue: f64,
    total_voyage_cost: f64,
    voyage_days: f64,
) -> VoyageResult<ReverseTce> {
    if !voyage_days.is_finite() || voyage_days <= 0.0 {
        return Err(VoyageError::invalid_input(
            "voyage_days",
            voyage_days.to_string(),
            "Voyage days must be greater than zero",
        ));
    }

    let profit_value = total_revenue - total_voyage_cost;
    let tce = profit_value / voyage_days;

    Ok(ReverseTce {
        profit_value,
        tce,
        profit_status: ProfitStatus::from_sign(tce),
    })
}

/// PNL from a TCE figure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimplePnl {
    /// Net revenue: TCE x voyage days ($)
    pub net_revenue: f64,
    /// Net revenue minus voyage cost ($)
    pub pnl: f64,
    /// Sign of the PNL
    pub profit_status: ProfitStatus,
}

/// PNL implied by a TCE over a voyage.
///
/// `net_revenue = tce * voyage_days`, `pnl = net_revenue - voyage_cost`.
pub fn simple_pnl(tce: f64, voyage_days: f64, voyage_cost: f64) -> VoyageResult<SimplePnl> {
    if !voyage_days.is_finite() || voyage_days <= 0.0 {
        return Err(VoyageError::invalid_input(
            "voyage_days",
            voyage_days.to_string(),
            "Voyage days must be greater than zero",
        ));
    }

    let net_revenue = tce * voyage_days;
    let pnl = net_revenue - voyage_cost;

    Ok(SimplePnl {
        net_revenue,
        pnl,
        profit_status: ProfitStatus::from_sign(pnl),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cargo::FreightTerms;
    use crate::pnl::quick::{calculate_quick, QuickPnlInput};

    #[test]
    fn test_required_freight_rate() {
        let result = required_freight_rate(12000.0, 20.0, 800000.0, 40000.0).unwrap();
        assert_eq!(result.gross_freight, 1040000.0);
        assert_eq!(result.freight_rate, 26.0);
    }

    #[test]
    fn test_required_freight_rate_rejects_zero_cargo() {
        let err = required_freight_rate(12000.0, 20.0, 800000.0, 0.0).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_reverse_forward_round_trip() {
        // Solve for the rate, feed it into the forward quick PNL, and the
        // target TCE must come back out.
        let target_tce = 12000.0;
        let voyage_days = 20.0;
        let cargo_qty = 40000.0;
        let bunker_cost = 600000.0;
        let port_cost = 50000.0;
        let voyage_cost_excl_hire = bunker_cost + port_cost;

        let solved =
            required_freight_rate(target_tce, voyage_days, voyage_cost_excl_hire, cargo_qty)
                .unwrap();

        let forward = calculate_quick(&QuickPnlInput {
            cargo_quantity_mt: cargo_qty,
            freight: FreightTerms::PerTonne(solved.freight_rate),
            voyage_days,
            hire_rate_per_day: 0.0,
            total_bunker_mt: 1000.0,
            bunker_price_per_mt: 600.0,
            port_cost,
            ..Default::default()
        })
        .unwrap();

        assert!((forward.tce - target_tce).abs() < 1e-6);
    }

    #[test]
    fn test_reverse_freight_rate_with_commission() {
        let result = reverse_freight_rate(40000.0, 800000.0, 100000.0, 0.0).unwrap();
        assert_eq!(result.freight_rate, 22.5);

        let with_commission = reverse_freight_rate(40000.0, 800000.0, 100000.0, 0.025).unwrap();
        assert!(with_commission.freight_rate > result.freight_rate);
    }

    #[test]
    fn test_reverse_freight_rate_rejects_full_commission() {
        assert!(reverse_freight_rate(40000.0, 800000.0, 0.0, 1.0).is_err());
        assert!(reverse_freight_rate(40000.0, 800000.0, 0.0, 1.5).is_err());
        assert!(reverse_freight_rate(0.0, 800000.0, 0.0, 0.0).is_err());
    }

    #[test]
    fn test_reverse_daily_hire() {
        // Revenue 800000, costs excl. hire 650000, no profit target, 20 days
        let result = reverse_daily_hire(40000.0, 20.0, 20.0, 650000.0, 0.0).unwrap();
        assert_eq!(result.total_revenue, 800000.0);
        assert_eq!(result.hire_rate, 7500.0);
        assert_eq!(result.profit_status, ProfitStatus::Profit);
    }

    #[test]
    fn test_reverse_daily_hire_loss_condition() {
        let result = reverse_daily_hire(40000.0, 20.0, 20.0, 900000.0, 0.0).unwrap();
        assert!(result.hire_rate < 0.0);
        assert_eq!(result.profit_status, ProfitStatus::Loss);
    }

    #[test]
    fn test_reverse_daily_hire_rejects_bad_denominators() {
        assert!(reverse_daily_hire(0.0, 20.0, 20.0, 0.0, 0.0).is_err());
        assert!(reverse_daily_hire(40000.0, 20.0, 0.0, 0.0, 0.0).is_err());
    }

    #[test]
    fn test_reverse_tce() {
        let result = reverse_tce(800000.0, 600000.0, 20.0).unwrap();
        assert_eq!(result.profit_value, 200000.0);
        assert_eq!(result.tce, 10000.0);
        assert_eq!(result.profit_status, ProfitStatus::Profit);

        let loss = reverse_tce(500000.0, 600000.0, 20.0).unwrap();
        assert_eq!(loss.profit_status, ProfitStatus::Loss);
    }

    #[test]
    fn test_reverse_tce_rejects_zero_days() {
        assert!(reverse_tce(800000.0, 600000.0, 0.0).is_err());
        assert!(reverse_tce(800000.0, 600000.0, -5.0).is_err());
    }

    #[test]
    fn test_simple_pnl() {
        let result = simple_pnl(10000.0, 20.0, 150000.0).unwrap();
        assert_eq!(result.net_revenue, 200000.0);
        assert_eq!(result.pnl, 50000.0);
        assert_eq!(result.profit_status, ProfitStatus::Profit);

        let loss = simple_pnl(10000.0, 20.0, 250000.0).unwrap();
        assert_eq!(loss.profit_status, ProfitStatus::Loss);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let result = reverse_tce(800000.0, 600000.0, 20.0).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        let roundtrip: ReverseTce = serde_json::from_str(&json).unwrap();
        assert_eq!(result, roundtrip);
    }
}
