//! # Wall Form Calculation
//!
//! Lateral pressure, tie spacing and material takeoff for a rectangular wall
//! form per ACI 347.
//!
//! The pipeline runs in a fixed order:
//!
//! 1. Design pressure from wall height, pour rate and concrete temperature
//! 2. Safe working load of the selected tie
//! 3. Governing tie spacing (square grid)
//! 4. Plywood sheets and tie count
//!
//! ## Assumptions
//!
//! - Normal-weight concrete at 150 pcf
//! - One spacing governs both grid directions
//! - No waste factor on plywood
//!
//! ## Example
//!
//! ```rust
//! use formwork_core::calculations::formwork::{calculate, EngineeringSettings, JobsiteInputs};
//! use formwork_core::hardware::{SafetyFactor, TieType};
//!
//! let inputs = JobsiteInputs {
//!     wall_height_ft: 12.0,
//!     wall_length_ft: 50.0,
//!     pour_rate_ft_per_hr: 5.0,
//!     concrete_temp_f: 70.0,
//! };
//! let settings = EngineeringSettings {
//!     safety_factor: SafetyFactor::TwoAndHalf,
//!     tie_type: TieType::SnapTie,
//! };
//!
//! let result = calculate(&inputs, &settings).unwrap();
//! assert_eq!(result.plywood_sheets, 38);
//! assert_eq!(result.tie_count, 272);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::equations::formwork as eq;
use crate::errors::{require_positive, whole_count, CalcError, CalcResult};
use crate::hardware::{SafetyFactor, TieCatalog, TieType};
use crate::units::{Feet, Inches, Pounds, Psf};

/// Jobsite conditions for one pour.
///
/// ## JSON Example
///
/// ```json
/// {
///   "wall_height_ft": 12.0,
///   "wall_length_ft": 50.0,
///   "pour_rate_ft_per_hr": 5.0,
///   "concrete_temp_f": 70.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JobsiteInputs {
    /// Wall height in feet
    pub wall_height_ft: f64,

    /// Wall length in feet
    pub wall_length_ft: f64,

    /// Rate of placement in feet of rise per hour
    pub pour_rate_ft_per_hr: f64,

    /// Concrete temperature at placement in °F
    pub concrete_temp_f: f64,
}

impl JobsiteInputs {
    /// Validate input parameters.
    ///
    /// All four values must be positive and finite.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("wall_height_ft", self.wall_height_ft, "Wall height must be positive")?;
        require_positive("wall_length_ft", self.wall_length_ft, "Wall length must be positive")?;
        require_positive("pour_rate_ft_per_hr", self.pour_rate_ft_per_hr, "Pour rate must be positive")?;
        require_positive("concrete_temp_f", self.concrete_temp_f, "Concrete temperature must be positive")?;
        Ok(())
    }
}

/// Hardware selection for the form.
///
/// ## JSON Example
///
/// ```json
/// {
///   "safety_factor": 2.5,
///   "tie_type": "Snap-Tie"
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineeringSettings {
    /// Safety factor applied to tie capacity
    pub safety_factor: SafetyFactor,

    /// Tie hardware
    pub tie_type: TieType,
}

/// Results of a wall form calculation, at full precision.
///
/// ## JSON Example
///
/// ```json
/// {
///   "design_pressure_psf": 792.86,
///   "governing_tie_spacing_in": 18.08,
///   "plywood_sheets": 38,
///   "tie_count": 272
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DesignResult {
    /// Design lateral pressure (psf)
    pub design_pressure_psf: f64,

    /// Maximum tie spacing, center to center (in)
    pub governing_tie_spacing_in: f64,

    /// 4x8 plywood sheets for both faces
    pub plywood_sheets: u32,

    /// Ties on the square grid
    pub tie_count: u32,
}

/// Which pressure envelope set the design pressure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureCase {
    /// Full liquid head, 150·h
    Hydrostatic,
    /// 150 + 9000·R/T
    RateTemperature,
    /// 600 psf floor
    Minimum,
}

impl PressureCase {
    /// Display name
    pub fn display_name(&self) -> &'static str {
        match self {
            PressureCase::Hydrostatic => "Hydrostatic",
            PressureCase::RateTemperature => "Rate/Temperature",
            PressureCase::Minimum => "Minimum 600 psf",
        }
    }
}

/// Intermediate values from one run of the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignBreakdown {
    /// Hydrostatic envelope 150·h (psf)
    pub hydrostatic_pressure_psf: f64,

    /// Rate/temperature envelope 150 + 9000·R/T (psf)
    pub rate_temperature_pressure_psf: f64,

    /// Envelope that governs the design pressure
    pub governing_case: PressureCase,

    /// Tie name as found in the catalog
    pub tie_name: String,

    /// Tie capacity before safety factor (lb)
    pub tie_capacity_lb: f64,

    /// Safety factor applied
    pub safety_factor: f64,

    /// Safe working load per tie (lb)
    pub safe_working_load_lb: f64,

    /// Form face area, both sides (sq ft)
    pub form_face_area_sqft: f64,
}

/// Design pressure on the form (psf).
///
/// Smaller of the hydrostatic head and the ACI rate/temperature formula,
/// floored at 600 psf.
///
/// # Errors
///
/// `InvalidInput` if any argument is not positive and finite.
pub fn compute_design_pressure(height_ft: f64, pour_rate_ft_per_hr: f64, temp_f: f64) -> CalcResult<f64> {
    let (pressure, _) = pressure_envelopes(height_ft, pour_rate_ft_per_hr, temp_f)?;
    Ok(pressure.0)
}

/// Safe working load (lb) of a named tie in the standard catalog.
///
/// # Errors
///
/// - `UnknownTieType` if the name is not in the catalog
/// - `InvalidInput` if the safety factor is not positive
pub fn lookup_safe_working_load(tie_type: &str, safety_factor: f64) -> CalcResult<f64> {
    lookup_safe_working_load_in(TieCatalog::standard(), tie_type, safety_factor)
}

/// Safe working load (lb) of a named tie in the given catalog.
pub fn lookup_safe_working_load_in(catalog: &TieCatalog, tie_type: &str, safety_factor: f64) -> CalcResult<f64> {
    let capacity = catalog.capacity(tie_type)?;
    let safety_factor = require_positive("safety_factor", safety_factor, "Safety factor must be positive")?;
    Ok(eq::safe_working_load(capacity, safety_factor).0)
}

/// Maximum tie spacing (in, center to center) for a square tributary area.
///
/// # Errors
///
/// - `InvalidPressure` if pressure is not positive and finite
/// - `InvalidInput` if SWL is not positive and finite
pub fn compute_governing_spacing(swl_lb: f64, pressure_psf: f64) -> CalcResult<f64> {
    if !(pressure_psf.is_finite() && pressure_psf > 0.0) {
        return Err(CalcError::InvalidPressure { pressure_psf });
    }
    require_positive("safe_working_load_lb", swl_lb, "Safe working load must be positive")?;
    Ok(eq::square_tributary_spacing(Pounds(swl_lb), Psf(pressure_psf)).0)
}

/// Plywood sheet count and tie count for the wall.
///
/// Returns `(plywood_sheets, tie_count)`.
///
/// # Errors
///
/// - `InvalidSpacing` if spacing is not positive and finite
/// - `InvalidInput` if a wall dimension is not positive and finite
/// - `QuantityOverflow` if the sheet or tie count does not fit a `u32`
pub fn compute_bill_of_materials(height_ft: f64, length_ft: f64, spacing_in: f64) -> CalcResult<(u32, u32)> {
    if !(spacing_in.is_finite() && spacing_in > 0.0) {
        return Err(CalcError::InvalidSpacing { spacing_in });
    }
    let height = Feet(require_positive("wall_height_ft", height_ft, "Wall height must be positive")?);
    let length = Feet(require_positive("wall_length_ft", length_ft, "Wall length must be positive")?);

    let spacing = Inches(spacing_in);

    let sheets = whole_count("plywood_sheets", eq::plywood_sheet_count(eq::form_face_area(height, length)))?;
    let along_length = whole_count("tie_count", eq::ties_along(length, spacing))?;
    let along_height = whole_count("tie_count", eq::ties_along(height, spacing))?;
    let ties = along_length
        .checked_mul(along_height)
        .ok_or_else(|| CalcError::QuantityOverflow {
            item: "tie_count".to_string(),
            count: eq::tie_grid_count(height, length, spacing),
        })?;
    Ok((sheets, ties))
}

/// Run the full pipeline with the standard tie catalog.
///
/// # Returns
///
/// * `Ok(DesignResult)` - Calculation results
/// * `Err(CalcError)` - If inputs are invalid
pub fn calculate(inputs: &JobsiteInputs, settings: &EngineeringSettings) -> CalcResult<DesignResult> {
    calculate_with_catalog(inputs, settings, TieCatalog::standard())
}

/// Run the full pipeline against a caller-supplied catalog.
pub fn calculate_with_catalog(
    inputs: &JobsiteInputs,
    settings: &EngineeringSettings,
    catalog: &TieCatalog,
) -> CalcResult<DesignResult> {
    calculate_named(inputs, settings.tie_type.name(), settings.safety_factor.value(), catalog)
        .map(|(result, _)| result)
}

/// Run the full pipeline and keep the intermediate values.
pub fn calculate_detailed(
    inputs: &JobsiteInputs,
    settings: &EngineeringSettings,
) -> CalcResult<(DesignResult, DesignBreakdown)> {
    calculate_named(
        inputs,
        settings.tie_type.name(),
        settings.safety_factor.value(),
        TieCatalog::standard(),
    )
}

/// Run the full pipeline for any tie name in the catalog.
///
/// This is the entry point for hardware added with
/// [`TieCatalog::with_entry`], which has no [`TieType`] variant.
pub fn calculate_named(
    inputs: &JobsiteInputs,
    tie_type: &str,
    safety_factor: f64,
    catalog: &TieCatalog,
) -> CalcResult<(DesignResult, DesignBreakdown)> {
    inputs.validate()?;

    let (pressure, envelopes) =
        pressure_envelopes(inputs.wall_height_ft, inputs.pour_rate_ft_per_hr, inputs.concrete_temp_f)?;
    debug!(
        hydrostatic_psf = envelopes.hydrostatic.0,
        rate_temperature_psf = envelopes.rate_temperature.0,
        design_psf = pressure.0,
        case = envelopes.case.display_name(),
        "design pressure"
    );

    let entry = catalog.lookup(tie_type)?;
    let swl = lookup_safe_working_load_in(catalog, &entry.name, safety_factor)?;
    debug!(tie = %entry.name, capacity_lb = entry.capacity_lb, safety_factor, swl_lb = swl, "safe working load");

    let spacing = compute_governing_spacing(swl, pressure.0)?;
    debug!(spacing_in = spacing, "governing tie spacing");

    let (plywood_sheets, tie_count) =
        compute_bill_of_materials(inputs.wall_height_ft, inputs.wall_length_ft, spacing)?;
    debug!(plywood_sheets, tie_count, "bill of materials");

    let result = DesignResult {
        design_pressure_psf: pressure.0,
        governing_tie_spacing_in: spacing,
        plywood_sheets,
        tie_count,
    };
    let breakdown = DesignBreakdown {
        hydrostatic_pressure_psf: envelopes.hydrostatic.0,
        rate_temperature_pressure_psf: envelopes.rate_temperature.0,
        governing_case: envelopes.case,
        tie_name: entry.name.clone(),
        tie_capacity_lb: entry.capacity_lb,
        safety_factor,
        safe_working_load_lb: swl,
        form_face_area_sqft: eq::form_face_area(Feet(inputs.wall_height_ft), Feet(inputs.wall_length_ft)).0,
    };
    Ok((result, breakdown))
}

struct Envelopes {
    hydrostatic: Psf,
    rate_temperature: Psf,
    case: PressureCase,
}

fn pressure_envelopes(height_ft: f64, pour_rate_ft_per_hr: f64, temp_f: f64) -> CalcResult<(Psf, Envelopes)> {
    let height = require_positive("wall_height_ft", height_ft, "Wall height must be positive")?;
    let rate = require_positive("pour_rate_ft_per_hr", pour_rate_ft_per_hr, "Pour rate must be positive")?;
    let temp = require_positive("concrete_temp_f", temp_f, "Concrete temperature must be positive")?;

    let hydrostatic = eq::hydrostatic_pressure(Feet(height));
    let rate_temperature = eq::rate_temperature_pressure(rate, temp);
    let pressure = eq::design_pressure(hydrostatic, rate_temperature);

    // An exact 600 psf result is reported as the minimum governing.
    let case = if pressure.0 == eq::MIN_DESIGN_PRESSURE_PSF {
        PressureCase::Minimum
    } else if hydrostatic <= rate_temperature {
        PressureCase::Hydrostatic
    } else {
        PressureCase::RateTemperature
    };

    Ok((pressure, Envelopes { hydrostatic, rate_temperature, case }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wall() -> JobsiteInputs {
        JobsiteInputs {
            wall_height_ft: 12.0,
            wall_length_ft: 50.0,
            pour_rate_ft_per_hr: 5.0,
            concrete_temp_f: 70.0,
        }
    }

    fn snap_ties() -> EngineeringSettings {
        EngineeringSettings {
            safety_factor: SafetyFactor::TwoAndHalf,
            tie_type: TieType::SnapTie,
        }
    }

    #[test]
    fn test_design_pressure_rate_governs() {
        // B = 150 + 9000*5/70 = 792.86 < A = 1800
        let p = compute_design_pressure(12.0, 5.0, 70.0).unwrap();
        assert!((p - 792.857).abs() < 0.01);
    }

    #[test]
    fn test_design_pressure_hydrostatic_governs() {
        // A = 150*5 = 750, B = 150 + 9000*10/40 = 2400
        let p = compute_design_pressure(5.0, 10.0, 40.0).unwrap();
        assert_eq!(p, 750.0);
    }

    #[test]
    fn test_design_pressure_floor() {
        let p = compute_design_pressure(2.0, 1.0, 100.0).unwrap();
        assert_eq!(p, 600.0);
    }

    #[test]
    fn test_design_pressure_rejects_zero_temperature() {
        let err = compute_design_pressure(12.0, 5.0, 0.0).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_safe_working_load() {
        assert_eq!(lookup_safe_working_load("Snap-Tie", 2.5).unwrap(), 1800.0);
        assert_eq!(lookup_safe_working_load("She-Bolt", 2.0).unwrap(), 4500.0);
        assert_eq!(lookup_safe_working_load("Taper-Tie", 3.0).unwrap(), 5000.0);
    }

    #[test]
    fn test_safe_working_load_errors() {
        assert_eq!(
            lookup_safe_working_load("Coil-Tie", 2.0).unwrap_err(),
            CalcError::unknown_tie_type("Coil-Tie")
        );
        assert_eq!(lookup_safe_working_load("Snap-Tie", 0.0).unwrap_err().error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_governing_spacing() {
        let s = compute_governing_spacing(1800.0, 800.0).unwrap();
        assert!((s - 18.0).abs() < 1e-9);
    }

    #[test]
    fn test_governing_spacing_rejects_bad_pressure() {
        assert_eq!(
            compute_governing_spacing(1800.0, 0.0).unwrap_err(),
            CalcError::InvalidPressure { pressure_psf: 0.0 }
        );
        assert!(matches!(
            compute_governing_spacing(1800.0, -10.0),
            Err(CalcError::InvalidPressure { .. })
        ));
    }

    #[test]
    fn test_bill_of_materials() {
        let (sheets, ties) = compute_bill_of_materials(12.0, 50.0, 18.0).unwrap();
        assert_eq!(sheets, 38);
        // ceil(600/18)=34, ceil(144/18)=8
        assert_eq!(ties, 272);
    }

    #[test]
    fn test_bill_of_materials_rejects_zero_spacing() {
        assert_eq!(
            compute_bill_of_materials(12.0, 50.0, 0.0).unwrap_err(),
            CalcError::InvalidSpacing { spacing_in: 0.0 }
        );
    }

    #[test]
    fn test_bill_of_materials_rejects_tie_grid_past_u32() {
        // 600000 x 144000 ties
        let err = compute_bill_of_materials(12.0, 50.0, 0.001).unwrap_err();
        assert_eq!(
            err,
            CalcError::QuantityOverflow {
                item: "tie_count".to_string(),
                count: 86_400_000_000.0,
            }
        );
    }

    #[test]
    fn test_bill_of_materials_rejects_sheet_count_past_u32() {
        let err = compute_bill_of_materials(1e6, 1e6, 1e6).unwrap_err();
        assert_eq!(
            err,
            CalcError::QuantityOverflow {
                item: "plywood_sheets".to_string(),
                count: 62_500_000_000.0,
            }
        );
    }

    #[test]
    fn test_bill_of_materials_at_u32_edge() {
        // one axis of u32::MAX ties, the other a single tie
        let length_ft = u32::MAX as f64;
        let (_, ties) = compute_bill_of_materials(1.0, length_ft, 12.0).unwrap();
        assert_eq!(ties, u32::MAX);
    }

    #[test]
    fn test_calculate() {
        let result = calculate(&wall(), &snap_ties()).unwrap();
        assert!((result.design_pressure_psf - 792.857).abs() < 0.01);
        assert!((result.governing_tie_spacing_in - 18.08).abs() < 0.01);
        assert_eq!(result.plywood_sheets, 38);
        assert_eq!(result.tie_count, 272);
    }

    #[test]
    fn test_calculate_detailed_breakdown() {
        let (result, breakdown) = calculate_detailed(&wall(), &snap_ties()).unwrap();
        assert_eq!(breakdown.hydrostatic_pressure_psf, 1800.0);
        assert_eq!(breakdown.governing_case, PressureCase::RateTemperature);
        assert_eq!(breakdown.tie_name, "Snap-Tie");
        assert_eq!(breakdown.tie_capacity_lb, 4500.0);
        assert_eq!(breakdown.safe_working_load_lb, 1800.0);
        assert_eq!(breakdown.form_face_area_sqft, 1200.0);
        assert_eq!(result, calculate(&wall(), &snap_ties()).unwrap());
    }

    #[test]
    fn test_floor_case_reported() {
        let inputs = JobsiteInputs {
            wall_height_ft: 2.0,
            wall_length_ft: 10.0,
            pour_rate_ft_per_hr: 1.0,
            concrete_temp_f: 100.0,
        };
        let settings = EngineeringSettings {
            safety_factor: SafetyFactor::Two,
            tie_type: TieType::SheBolt,
        };
        let (_, breakdown) = calculate_detailed(&inputs, &settings).unwrap();
        assert_eq!(breakdown.governing_case, PressureCase::Minimum);
    }

    #[test]
    fn test_invalid_inputs() {
        let mut inputs = wall();
        inputs.wall_length_ft = -5.0;
        let err = calculate(&inputs, &snap_ties()).unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { ref field, .. } if field == "wall_length_ft"));

        let mut inputs = wall();
        inputs.pour_rate_ft_per_hr = f64::NAN;
        assert!(calculate(&inputs, &snap_ties()).is_err());
    }

    #[test]
    fn test_named_tie_from_extended_catalog() {
        let catalog = TieCatalog::standard().clone().with_entry("Coil-Tie", 18000.0).unwrap();
        let (result, breakdown) = calculate_named(&wall(), "Coil-Tie", 2.0, &catalog).unwrap();
        assert_eq!(breakdown.safe_working_load_lb, 9000.0);
        let snap = calculate(&wall(), &snap_ties()).unwrap();
        assert!(result.governing_tie_spacing_in > snap.governing_tie_spacing_in);
    }

    #[test]
    fn test_custom_name_sharing_standard_prefix() {
        let catalog = TieCatalog::standard().clone().with_entry("Taper-Tie (HD)", 30000.0).unwrap();
        let (_, breakdown) = calculate_named(&wall(), "Taper-Tie (HD)", 2.0, &catalog).unwrap();
        assert_eq!(breakdown.tie_name, "Taper-Tie (HD)");
        assert_eq!(breakdown.tie_capacity_lb, 30000.0);

        let (_, standard) = calculate_named(&wall(), "Taper-Tie (7.5k)", 2.0, &catalog).unwrap();
        assert_eq!(standard.tie_name, "Taper-Tie");
        assert_eq!(standard.tie_capacity_lb, 15000.0);
    }

    #[test]
    fn test_tiny_capacity_tie_overflows_takeoff() {
        let catalog = TieCatalog::standard().clone().with_entry("Micro-Tie", 1e-6).unwrap();
        let err = calculate_named(&wall(), "Micro-Tie", 2.0, &catalog).unwrap_err();
        assert_eq!(err.error_code(), "QUANTITY_OVERFLOW");
    }

    #[test]
    fn test_catalog_without_tie() {
        let catalog: TieCatalog = serde_json::from_str(r#"{"entries":[{"name":"Coil-Tie","capacity_lb":12000.0}]}"#).unwrap();
        let err = calculate_with_catalog(&wall(), &snap_ties(), &catalog).unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_TIE_TYPE");
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&snap_ties()).unwrap();
        assert_eq!(json, r#"{"safety_factor":2.5,"tie_type":"Snap-Tie"}"#);
        let roundtrip: EngineeringSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, snap_ties());

        let inputs: JobsiteInputs = serde_json::from_str(&serde_json::to_string(&wall()).unwrap()).unwrap();
        assert_eq!(inputs, wall());
    }
}
