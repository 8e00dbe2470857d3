//! # Wall Formwork Formulas
//!
//! Closed-form equations for lateral concrete pressure on wall forms, tie
//! spacing and material quantities. These functions do no validation; the
//! calculation layer checks inputs before calling them.
//!
//! ## Notation
//!
//! - `h` = Wall height (ft)
//! - `L` = Wall length (ft)
//! - `R` = Rate of placement (ft/hr)
//! - `T` = Concrete temperature at placement (°F)
//! - `w` = Unit weight of concrete (pcf)
//! - `p` = Lateral pressure (psf)
//! - `SWL` = Safe working load of one tie (lb)
//! - `s` = Tie spacing, center to center (in)
//!
//! ## References
//!
//! - ACI 347-14: Guide to Formwork for Concrete, Section 4.2

use crate::units::{Feet, Inches, Pounds, Psf, SqFt};

/// Unit weight of normal-weight concrete (pcf)
pub const CONCRETE_UNIT_WEIGHT_PCF: f64 = 150.0;

/// Minimum lateral design pressure for wall forms (psf)
pub const MIN_DESIGN_PRESSURE_PSF: f64 = 600.0;

/// Coefficient on R/T in the ACI wall pressure formula
pub const ACI_RATE_COEFFICIENT: f64 = 9000.0;

/// Face area of one 4x8 plywood sheet (sq ft)
pub const PLYWOOD_SHEET_AREA_SQFT: f64 = 32.0;

/// Full fluid head pressure at the base of the form
///
/// # Formula
/// - p = w·h
#[inline]
pub fn hydrostatic_pressure(height: Feet) -> Psf {
    Psf(CONCRETE_UNIT_WEIGHT_PCF * height.0)
}

/// Wall pressure for slow placement (ACI 347-14 Section 4.2)
///
/// # Formula
/// - p = 150 + 9000·R/T
#[inline]
pub fn rate_temperature_pressure(rate_ft_per_hr: f64, temp_f: f64) -> Psf {
    Psf(CONCRETE_UNIT_WEIGHT_PCF + ACI_RATE_COEFFICIENT * rate_ft_per_hr / temp_f)
}

/// Governing design pressure: smaller of the two envelopes, not less than
/// the minimum.
///
/// # Formula
/// - p = max(min(w·h, 150 + 9000·R/T), 600)
#[inline]
pub fn design_pressure(hydrostatic: Psf, rate_temperature: Psf) -> Psf {
    Psf(hydrostatic.0.min(rate_temperature.0).max(MIN_DESIGN_PRESSURE_PSF))
}

/// Allowable tie load after the safety factor
///
/// # Formula
/// - SWL = capacity / SF
#[inline]
pub fn safe_working_load(capacity: Pounds, safety_factor: f64) -> Pounds {
    capacity / safety_factor
}

/// Tie spacing for a square tributary area
///
/// ```text
///   ┌───s───┐
///   │   ●   │  each tie carries p·s²
///   └───────┘
/// ```
///
/// # Formula
/// - s = √(SWL / p) · 12
#[inline]
pub fn square_tributary_spacing(swl: Pounds, pressure: Psf) -> Inches {
    (swl / pressure).square_side().into()
}

/// Form face area, both sides of the wall
///
/// # Formula
/// - A = 2·h·L
#[inline]
pub fn form_face_area(height: Feet, length: Feet) -> SqFt {
    (height * length) * 2.0
}

/// Whole 4x8 sheets needed to cover a face area
///
/// Returned as a whole-valued `f64`; the calculation layer range-checks it
/// before converting to an integer count.
///
/// # Formula
/// - n = ⌈A / 32⌉
#[inline]
pub fn plywood_sheet_count(face_area: SqFt) -> f64 {
    (face_area.0 / PLYWOOD_SHEET_AREA_SQFT).ceil()
}

/// Ties along one axis of the grid
///
/// # Formula
/// - n = ⌈d·12 / s⌉
#[inline]
pub fn ties_along(dimension: Feet, spacing: Inches) -> f64 {
    let dimension_in: Inches = dimension.into();
    (dimension_in.0 / spacing.0).ceil()
}

/// Total ties on a uniform rectangular grid
///
/// # Formula
/// - N = ⌈L·12 / s⌉ · ⌈h·12 / s⌉
#[inline]
pub fn tie_grid_count(height: Feet, length: Feet, spacing: Inches) -> f64 {
    ties_along(length, spacing) * ties_along(height, spacing)
}
