//! # Voyage Cost Aggregator
//!
//! A named set of cost components accumulated over a caller's session and
//! summed into a single voyage cost figure.
//!
//! Cost items are cumulative: a second port-cost entry adds to the first
//! unless the caller explicitly replaces the component. That choice is an
//! explicit [`CostUpdate`] command; interpreting free-form text into
//! Add-vs-Replace belongs to the conversational layer, not here.
//!
//! The ledger belongs to exactly one logical session at a time; the engine
//! itself holds no cross-call state.
//!
//! ## Example
//!
//! ```rust
//! use voyage_core::costs::{CostComponent, CostLedger, CostUpdate};
//!
//! let mut ledger = CostLedger::new();
//! ledger.apply(CostComponent::Bunker, CostUpdate::Add(600000.0)).unwrap();
//! ledger.apply(CostComponent::Port, CostUpdate::Add(40000.0)).unwrap();
//! ledger.apply(CostComponent::Port, CostUpdate::Add(15000.0)).unwrap();
//!
//! assert_eq!(ledger.total(), 655000.0);
//! assert_eq!(ledger.amount(CostComponent::Port), 55000.0);
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use crate::errors::{VoyageError, VoyageResult};

/// Named voyage cost components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CostComponent {
    /// Bunker fuel cost
    Bunker,
    /// Vessel hire cost
    Hire,
    /// Port disbursements (load + discharge)
    Port,
    /// Canal transit fees
    Canal,
    /// Broker commission paid out
    BrokerCommission,
    /// Address commission paid out
    AddressCommission,
    /// Miscellaneous voyage costs
    Misc,
}

impl CostComponent {
    /// All components in display order
    pub const ALL: [CostComponent; 7] = [
        CostComponent::Bunker,
        CostComponent::Hire,
        CostComponent::Port,
        CostComponent::Canal,
        CostComponent::BrokerCommission,
        CostComponent::AddressCommission,
        CostComponent::Misc,
    ];

    /// Human-readable display name
    pub fn description(&self) -> &'static str {
        match self {
            CostComponent::Bunker => "Bunker cost",
            CostComponent::Hire => "Hire cost",
            CostComponent::Port => "Port cost",
            CostComponent::Canal => "Canal cost",
            CostComponent::BrokerCommission => "Broker commission",
            CostComponent::AddressCommission => "Address commission",
            CostComponent::Misc => "Miscellaneous cost",
        }
    }

    fn index(&self) -> usize {
        match self {
            CostComponent::Bunker => 0,
            CostComponent::Hire => 1,
            CostComponent::Port => 2,
            CostComponent::Canal => 3,
            CostComponent::BrokerCommission => 4,
            CostComponent::AddressCommission => 5,
            CostComponent::Misc => 6,
        }
    }
}

impl std::fmt::Display for CostComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Explicit accumulate-vs-overwrite command for one component.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", content = "amount")]
pub enum CostUpdate {
    /// Add to the component's running amount
    Add(f64),
    /// Replace the component's running amount
    Replace(f64),
}

/// One non-zero line of a cost breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostLine {
    /// Component name
    pub component: CostComponent,
    /// Amount in $
    pub amount: f64,
}

/// Display-ready cost breakdown: the non-zero components and their exact sum.
///
/// Invariant: `total` always equals the sum of `lines`; the PNL boundary
/// checks this with [`CostLedger::verify_total`] rather than trusting a
/// caller-reported figure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoyageCostBreakdown {
    /// Non-zero components only
    pub lines: Vec<CostLine>,
    /// Exact sum of all components in $
    pub total: f64,
}

/// Running cost totals for one session. All components default to zero.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CostLedger {
    amounts: [f64; 7],
}

impl CostLedger {
    /// Empty ledger, every component at zero.
    pub fn new() -> Self {
        CostLedger::default()
    }

    /// Current amount for one component.
    pub fn amount(&self, component: CostComponent) -> f64 {
        self.amounts[component.index()]
    }

    /// Apply an add or replace command to one component.
    ///
    /// # Errors
    ///
    /// `InvalidInput` when the amount is negative or non-finite; components
    /// are non-negative money amounts.
    pub fn apply(&mut self, component: CostComponent, update: CostUpdate) -> VoyageResult<()> {
        let amount = match update {
            CostUpdate::Add(a) | CostUpdate::Replace(a) => a,
        };
        if !amount.is_finite() || amount < 0.0 {
            return Err(VoyageError::invalid_input(
                "amount",
                amount.to_string(),
                format!("{component} must be a non-negative amount"),
            ));
        }

        let slot = &mut self.amounts[component.index()];
        match update {
            CostUpdate::Add(a) => *slot += a,
            CostUpdate::Replace(a) => {
                debug!("replacing {component} {} -> {a}", *slot);
                *slot = a;
            }
        }
        Ok(())
    }

    /// Exact sum of all components.
    pub fn total(&self) -> f64 {
        self.amounts.iter().sum()
    }

    /// Display-ready breakdown listing only non-zero components.
    pub fn breakdown(&self) -> VoyageCostBreakdown {
        let lines = CostComponent::ALL
            .iter()
            .filter(|c| self.amount(**c) != 0.0)
            .map(|c| CostLine {
                component: *c,
                amount: self.amount(*c),
            })
            .collect();
        VoyageCostBreakdown {
            lines,
            total: self.total(),
        }
    }

    /// Check a caller-reported total against the ledger sum.
    ///
    /// A mismatch means a component was dropped or double-counted somewhere
    /// between aggregation and the PNL boundary; it is surfaced as a
    /// defect, never silently corrected.
    pub fn verify_total(&self, reported_total: f64) -> VoyageResult<()> {
        let total = self.total();
        if (reported_total - total).abs() > 1e-6 {
            return Err(VoyageError::calculation_failed(
                "cost_aggregation",
                format!("Reported total {reported_total} does not match component sum {total}"),
            ));
        }
        Ok(())
    }
}
