//! # Full Voyage PNL
//!
//! Multi-cargo voyage profit-and-loss: cargo rows with per-row freight
//! terms and option quantities, demurrage/despatch line items, freight tax,
//! hire commissions credited against expense, ballast/Suez bonuses, and the
//! derived TCE, gross TCE and breakeven freight.
//!
//! Unlike the quick flow, a non-positive voyage duration here is an
//! `InvalidInput`; and any non-finite intermediate is caught and reported
//! as `CalculationFailed` rather than propagated.

use serde::{Deserialize, Serialize};

use crate::cargo::FreightTerms;
use crate::errors::{VoyageError, VoyageResult};

/// One cargo shipment on the voyage.
///
/// ## JSON Example
///
/// ```json
/// {
///   "cp_qty_mt": 50000.0,
///   "option_pct": 0.05,
///   "freight": { "type": "PerTonne", "amount": 18.5 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CargoRow {
    /// Charter-party quantity (MT)
    pub cp_qty_mt: f64,

    /// Row-level option fraction; falls back to the voyage-level
    /// `option_percentage` when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub option_pct: Option<f64>,

    /// Freight terms for this row (lumpsum wins over any rate)
    pub freight: FreightTerms,
}

/// One demurrage settlement owed to the owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemurrageRow {
    /// Settlement amount ($)
    pub amount: f64,
}

/// One despatch settlement owed to the charterer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DespatchRow {
    /// Settlement amount ($)
    pub amount: f64,
}

/// Input parameters for the full voyage PNL.
///
/// All percentages are decimal fractions. `demurrage_commission_pct`
/// defaults to the general broker commission when not separately given.
/// `option_qty_mt` is the absolute option tonnage and takes precedence over
/// any percentage when supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoyagePnlInput {
    /// Cargo shipments
    pub cargo_rows: Vec<CargoRow>,

    /// Demurrage settlements (revenue)
    #[serde(default)]
    pub demurrage_rows: Vec<DemurrageRow>,

    /// Despatch settlements (deducted from revenue)
    #[serde(default)]
    pub despatch_rows: Vec<DespatchRow>,

    /// Miscellaneous revenue ($)
    #[serde(default)]
    pub misc_revenue: f64,

    /// Broker commission on freight (and default for demurrage)
    #[serde(default)]
    pub broker_commission_pct: f64,

    /// Voyage duration in days; must be positive in this variant
    pub voyage_days: f64,

    /// Daily hire rate ($/day)
    pub hire_rate_per_day: f64,

    /// Add commission on hire, credited back against gross expense
    #[serde(default)]
    pub hire_add_commission_pct: f64,

    /// Broker commission on hire, credited back against gross expense
    #[serde(default)]
    pub hire_broker_commission_pct: f64,

    /// Port disbursements ($)
    #[serde(default)]
    pub port_expenses: f64,

    /// Miscellaneous expenses ($)
    #[serde(default)]
    pub misc_expenses: f64,

    /// Total bunker expense ($)
    #[serde(default)]
    pub bunker_expense: f64,

    /// Canal transit fees ($)
    #[serde(default)]
    pub canal_cost: f64,

    /// Ballast bonus paid to the owner ($)
    #[serde(default)]
    pub ballast_bonus: f64,

    /// Suez transit bonus ($)
    #[serde(default)]
    pub suez_bonus: f64,

    /// Address commission, decimal fraction in [0, 1)
    #[serde(default)]
    pub address_commission_pct: f64,

    /// Voyage-level option fraction for rows without their own
    #[serde(default)]
    pub option_percentage: f64,

    /// Freight tax, decimal fraction of each row's freight
    #[serde(default)]
    pub freight_tax_pct: f64,

    /// Demurrage commission; `null` means use the broker commission
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demurrage_commission_pct: Option<f64>,

    /// Despatch commission, decimal fraction
    #[serde(default)]
    pub despatch_commission_pct: f64,

    /// Explicit total CP quantity for the breakeven denominator; overrides
    /// the per-row sum when supplied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cp_qty_mt: Option<f64>,

    /// Absolute option tonnage; takes precedence over percentages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub option_qty_mt: Option<f64>,
}

/// Results of the full voyage PNL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoyagePnlResult {
    /// Sum of per-row freight
    pub total_freight: f64,

    /// Demurrage received ($)
    pub total_demurrage: f64,

    /// Despatch paid out ($)
    pub total_despatch: f64,

    /// Freight + misc revenue + demurrage - despatch
    pub gross_revenue: f64,

    /// Gross revenue net of all revenue commissions and freight tax
    pub net_revenue: f64,

    /// Hire rate x voyage days
    pub hire_cost: f64,

    /// Hire + port + misc + bunkers + canal + bonuses
    pub gross_expense: f64,

    /// Gross expense net of hire add/broker commission credits
    pub net_expense: f64,

    /// Net revenue minus net expense
    pub pnl: f64,

    /// PNL per voyage day
    pub daily_profit: f64,

    /// Time-charter equivalent ($/day)
    pub tce: f64,

    /// TCE grossed up for address commission
    pub gross_tce: f64,

    /// Breakeven freight rate ($/MT; 0 when no cargo quantity)
    pub break_even_freight: f64,

    /// Cargo quantity used for the breakeven denominator (MT)
    pub total_cargo_qty_mt: f64,
}

impl VoyagePnlInput {
    /// Validate the inputs this variant refuses to degrade on.
    pub fn validate(&self) -> VoyageResult<()> {
        if !self.voyage_days.is_finite() || self.voyage_days <= 0.0 {
            return Err(VoyageError::invalid_input(
                "voyage_days",
                self.voyage_days.to_string(),
                "Voyage days must be positive",
            ));
        }
        for (i, row) in self.cargo_rows.iter().enumerate() {
            if !row.cp_qty_mt.is_finite() || row.cp_qty_mt < 0.0 {
                return Err(VoyageError::invalid_input(
                    format!("cargo_rows[{i}].cp_qty_mt"),
                    row.cp_qty_mt.to_string(),
                    "CP quantity must be a non-negative number",
                ));
            }
        }
        Ok(())
    }

    fn demurrage_commission(&self) -> f64 {
        self.demurrage_commission_pct
            .unwrap_or(self.broker_commission_pct)
    }

    /// Effective quantity of one row: absolute option tonnage wins over
    /// percentages; a row-level percentage wins over the voyage-level one.
    fn effective_row_quantity(&self, row: &CargoRow) -> f64 {
        match self.option_qty_mt {
            Some(option_qty) => row.cp_qty_mt + option_qty,
            None => {
                let pct = row.option_pct.unwrap_or(self.option_percentage);
                row.cp_qty_mt * (1.0 + pct)
            }
        }
    }

    /// Total cargo quantity for the breakeven denominator.
    fn total_cargo_quantity(&self) -> f64 {
        match self.cp_qty_mt {
            Some(cp_qty) => cp_qty + self.option_qty_mt.unwrap_or(0.0),
            None => self
                .cargo_rows
                .iter()
                .map(|row| {
                    row.cp_qty_mt * (1.0 + row.option_pct.unwrap_or(self.option_percentage))
                })
                .sum(),
        }
    }
}

/// Calculate the full multi-cargo voyage PNL.
///
/// # Errors
///
/// - `InvalidInput` for a non-positive voyage duration or negative CP
///   quantity
/// - `CalculationFailed` when any derived figure comes out non-finite
///   (for example a 100% broker commission in the breakeven denominator)
pub fn calculate_full(input: &VoyagePnlInput) -> VoyageResult<VoyagePnlResult> {
    input.validate()?;

    // Freight, commission and tax across cargo rows
    let mut total_freight = 0.0;
    let mut total_freight_commission = 0.0;
    let mut total_freight_tax = 0.0;
    for row in &input.cargo_rows {
        let effective_qty = input.effective_row_quantity(row);
        let freight = row.freight.total_for_quantity(effective_qty);

        total_freight += freight;
        total_freight_commission += freight * input.broker_commission_pct;
        total_freight_tax += freight * input.freight_tax_pct;
    }

    // Demurrage and despatch
    let total_demurrage: f64 = input.demurrage_rows.iter().map(|r| r.amount).sum();
    let total_despatch: f64 = input.despatch_rows.iter().map(|r| r.amount).sum();
    let total_demurrage_commission = total_demurrage * input.demurrage_commission();
    let total_despatch_commission = total_despatch * input.despatch_commission_pct;

    // Revenue
    let gross_revenue = total_freight + input.misc_revenue + total_demurrage - total_despatch;
    let total_revenue_commissions = total_freight_commission
        + total_demurrage_commission
        + total_despatch_commission
        + total_freight_tax;
    let net_revenue = gross_revenue - total_revenue_commissions;

    // Hire, with add/broker commission credited against expense
    let hire_cost = input.hire_rate_per_day * input.voyage_days;
    let hire_add_commission_value = hire_cost * input.hire_add_commission_pct;
    let hire_broker_commission_value = hire_cost * input.hire_broker_commission_pct;

    // Expense
    let gross_expense = hire_cost
        + input.port_expenses
        + input.misc_expenses
        + input.bunker_expense
        + input.canal_cost
        + input.ballast_bonus
        + input.suez_bonus;
    let net_expense = gross_expense - (hire_add_commission_value + hire_broker_commission_value);

    // Results
    let pnl = net_revenue - net_expense;
    let daily_profit = pnl / input.voyage_days;

    let address_commission_on_hire = hire_cost * input.address_commission_pct;
    let tce_numerator = net_revenue
        - (gross_expense
            - (hire_cost + input.ballast_bonus + input.suez_bonus - address_commission_on_hire));
    let tce = tce_numerator / input.voyage_days;
    let gross_tce = if input.address_commission_pct < 1.0 {
        tce / (1.0 - input.address_commission_pct)
    } else {
        tce
    };

    // Breakeven
    let total_cargo_qty_mt = input.total_cargo_quantity();
    let break_even_freight = if total_cargo_qty_mt > 0.0 {
        net_expense / (total_cargo_qty_mt * (1.0 - input.broker_commission_pct))
    } else {
        0.0
    };

    let result = VoyagePnlResult {
        total_freight,
        total_demurrage,
        total_despatch,
        gross_revenue,
        net_revenue,
        hire_cost,
        gross_expense,
        net_expense,
        pnl,
        daily_profit,
        tce,
        gross_tce,
        break_even_freight,
        total_cargo_qty_mt,
    };

    // Faults inside the formulas surface as a structured failure, never a
    // raw non-finite number handed to the caller.
    let derived = [
        result.pnl,
        result.daily_profit,
        result.tce,
        result.gross_tce,
        result.break_even_freight,
        result.net_revenue,
        result.net_expense,
    ];
    if derived.iter().any(|v| !v.is_finite()) {
        return Err(VoyageError::calculation_failed(
            "voyage_pnl",
            "Computation produced a non-finite figure; check commissions and quantities",
        ));
    }

    Ok(result)
}
