//! # Error Types
//!
//! Structured error types for voyage_core. Every engine operation returns
//! a `VoyageResult`, and every failure carries enough context for the
//! caller to decide between retrying with corrected inputs, aborting, or
//! surfacing a generic failure.
//!
//! ## Example
//!
//! ```rust
//! use voyage_core::errors::{VoyageError, VoyageResult};
//!
//! fn validate_distance(route_distance_nm: f64) -> VoyageResult<()> {
//!     if route_distance_nm <= 0.0 {
//!         return Err(VoyageError::InvalidInput {
//!             field: "route_distance_nm".to_string(),
//!             value: route_distance_nm.to_string(),
//!             reason: "Route distance must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for voyage_core operations
pub type VoyageResult<T> = Result<T, VoyageError>;

/// Structured error type for voyage calculations.
///
/// Three kinds, matching how callers are expected to react:
///
/// - [`VoyageError::InvalidInput`] - a numeric precondition (positivity,
///   finiteness) was violated; abort or fix the request.
/// - [`VoyageError::CalculationFailed`] - an unexpected fault during
///   formula evaluation, caught and reported rather than propagated.
/// - [`VoyageError::ManualInputRequired`] - the vessel-description parser
///   could not establish all required fields; not fatal, but a request for
///   additional data carrying the exact field list to re-supply.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum VoyageError {
    /// An input value is invalid (non-positive, non-finite, out of range)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Calculation failed (non-finite intermediate, inconsistent totals, etc.)
    #[error("Calculation failed: {calculation_type} - {reason}")]
    CalculationFailed {
        calculation_type: String,
        reason: String,
    },

    /// Extraction could not establish all required fields; the caller must
    /// supply the listed inputs and retry. The message is part of the
    /// contract and should be relayed to the user near-verbatim.
    #[error("Manual input required: {message}")]
    ManualInputRequired {
        message: String,
        required_inputs: Vec<String>,
    },
}

impl VoyageError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        VoyageError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a CalculationFailed error
    pub fn calculation_failed(
        calculation_type: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        VoyageError::CalculationFailed {
            calculation_type: calculation_type.into(),
            reason: reason.into(),
        }
    }

    /// Create a ManualInputRequired error
    pub fn manual_input_required(
        message: impl Into<String>,
        required_inputs: Vec<String>,
    ) -> Self {
        VoyageError::ManualInputRequired {
            message: message.into(),
            required_inputs,
        }
    }

    /// Check if this is a recoverable error (caller can retry with more data)
    pub fn is_recoverable(&self) -> bool {
        matches!(self, VoyageError::ManualInputRequired { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            VoyageError::InvalidInput { .. } => "INVALID_INPUT",
            VoyageError::CalculationFailed { .. } => "CALCULATION_FAILED",
            VoyageError::ManualInputRequired { .. } => "MANUAL_INPUT_REQUIRED",
        }
    }
}
