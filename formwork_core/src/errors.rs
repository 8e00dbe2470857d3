//! # Error Types
//!
//! Structured error types for formwork_core. Every failure carries enough
//! context (field name, offending value, reason) for a caller to report it
//! or correct the input programmatically.
//!
//! ## Example
//!
//! ```rust
//! use formwork_core::errors::{CalcError, CalcResult};
//!
//! fn validate_height(height_ft: f64) -> CalcResult<()> {
//!     if height_ft <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "wall_height_ft",
//!             height_ft.to_string(),
//!             "Wall height must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_height(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for formwork_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
///
/// None of these are retryable: the calculation is pure, so the same input
/// always fails the same way.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// A jobsite or engineering input is non-positive or not finite
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Tie type is not present in the catalog
    #[error("Unknown tie type: {tie_type}")]
    UnknownTieType { tie_type: String },

    /// Design pressure handed to the spacing step is not usable
    #[error("Invalid design pressure: {pressure_psf} psf - must be positive and finite")]
    InvalidPressure { pressure_psf: f64 },

    /// Tie spacing handed to the takeoff step is not usable
    #[error("Invalid tie spacing: {spacing_in} in - must be positive and finite")]
    InvalidSpacing { spacing_in: f64 },

    /// A takeoff quantity is too large to report as a whole count
    #[error("Quantity '{item}' of {count} exceeds the largest reportable count")]
    QuantityOverflow { item: String, count: f64 },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnknownTieType error
    pub fn unknown_tie_type(tie_type: impl Into<String>) -> Self {
        CalcError::UnknownTieType {
            tie_type: tie_type.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::UnknownTieType { .. } => "UNKNOWN_TIE_TYPE",
            CalcError::InvalidPressure { .. } => "INVALID_PRESSURE",
            CalcError::InvalidSpacing { .. } => "INVALID_SPACING",
            CalcError::QuantityOverflow { .. } => "QUANTITY_OVERFLOW",
        }
    }
}

/// Convert a whole-valued quantity to `u32`, refusing to clamp.
pub(crate) fn whole_count(item: &str, count: f64) -> CalcResult<u32> {
    if count.is_finite() && count >= 0.0 && count <= u32::MAX as f64 {
        Ok(count as u32)
    } else {
        Err(CalcError::QuantityOverflow {
            item: item.to_string(),
            count,
        })
    }
}

/// Reject values that are zero, negative, NaN or infinite.
pub(crate) fn require_positive(field: &str, value: f64, reason: &str) -> CalcResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(CalcError::invalid_input(field, value.to_string(), reason))
    }
}
