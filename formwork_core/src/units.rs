//! # Unit Types
//!
//! Type-safe wrappers for the US customary units used on a formwork job.
//! These are plain f64 newtypes that serialize as bare numbers.
//!
//! - Length: feet (ft), inches (in)
//! - Force: pounds (lb)
//! - Pressure: pounds per square foot (psf)
//! - Area: square feet (sq ft)
//!
//! ## Example
//!
//! ```rust
//! use formwork_core::units::{Feet, Inches};
//!
//! let wall_height = Feet(12.0);
//! let wall_height_in: Inches = wall_height.into();
//! assert_eq!(wall_height_in.0, 144.0);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Div, Mul};

// ============================================================================
// Length Units
// ============================================================================

/// Length in feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feet(pub f64);

/// Length in inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

impl From<Feet> for Inches {
    fn from(ft: Feet) -> Self {
        Inches(ft.0 * 12.0)
    }
}

impl From<Inches> for Feet {
    fn from(inches: Inches) -> Self {
        Feet(inches.0 / 12.0)
    }
}

// ============================================================================
// Force Units
// ============================================================================

/// Force in pounds
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pounds(pub f64);

// ============================================================================
// Pressure Units
// ============================================================================

/// Lateral pressure in pounds per square foot (psf)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Psf(pub f64);

impl Mul<SqFt> for Psf {
    type Output = Pounds;
    fn mul(self, rhs: SqFt) -> Pounds {
        Pounds(self.0 * rhs.0)
    }
}

impl Div<Psf> for Pounds {
    type Output = SqFt;
    fn div(self, rhs: Psf) -> SqFt {
        SqFt(self.0 / rhs.0)
    }
}

// ============================================================================
// Area Units
// ============================================================================

/// Area in square feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqFt(pub f64);

impl SqFt {
    /// Side length of a square with this area
    pub fn square_side(self) -> Feet {
        Feet(self.0.sqrt())
    }
}

impl Mul<Feet> for Feet {
    type Output = SqFt;
    fn mul(self, rhs: Feet) -> SqFt {
        SqFt(self.0 * rhs.0)
    }
}

// Scaling by a plain factor: face area doubling and the safety factor divide

macro_rules! impl_scaling {
    ($type:ty) => {
        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }
    };
}

impl_scaling!(Pounds);
impl_scaling!(SqFt);
