//! # Result Formatting
//!
//! Display rounding for calculation results. Calculations always return full
//! precision; rounding happens only here, when a result is turned into text.
//!
//! ## Example
//!
//! ```rust
//! use formwork_core::report::{round_pressure_psf, round_spacing_in};
//!
//! assert_eq!(round_pressure_psf(792.857), 793.0);
//! assert_eq!(round_spacing_in(18.0809), 18.1);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::calculations::formwork::{DesignBreakdown, DesignResult};

/// Code basis shown with every result
pub const CALCULATION_BASIS: &str = "Calculation based on ACI 347-14 Equation 4.2/4.3";

/// Pressure to the nearest whole psf
pub fn round_pressure_psf(pressure_psf: f64) -> f64 {
    pressure_psf.round()
}

/// Spacing to the nearest tenth of an inch
pub fn round_spacing_in(spacing_in: f64) -> f64 {
    (spacing_in * 10.0).round() / 10.0
}

/// Load to the nearest whole pound
pub fn round_load_lb(load_lb: f64) -> f64 {
    load_lb.round()
}

/// One row of the structural reference table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceRow {
    pub variable: String,
    pub value: String,
}

impl ReferenceRow {
    fn new(variable: &str, value: String) -> Self {
        Self {
            variable: variable.to_string(),
            value,
        }
    }
}

/// Display-ready strings for one calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignReport {
    /// e.g. "793 PSF"
    pub design_pressure: String,
    /// e.g. "18.1 in O.C."
    pub tie_spacing: String,
    /// e.g. "38 sheets"
    pub plywood: String,
    /// e.g. "272 pcs"
    pub ties: String,
    /// Envelope that set the pressure
    pub governing_case: String,
    /// Pressure, safety factor and allowable load
    pub reference_table: Vec<ReferenceRow>,
    /// Code basis note
    pub basis: String,
}

impl DesignReport {
    /// Build the report from a result and its breakdown.
    pub fn from_result(result: &DesignResult, breakdown: &DesignBreakdown) -> Self {
        let pressure = round_pressure_psf(result.design_pressure_psf);
        DesignReport {
            design_pressure: format!("{:.0} PSF", pressure),
            tie_spacing: format!("{:.1} in O.C.", round_spacing_in(result.governing_tie_spacing_in)),
            plywood: format!("{} sheets", result.plywood_sheets),
            ties: format!("{} pcs", result.tie_count),
            governing_case: breakdown.governing_case.display_name().to_string(),
            reference_table: vec![
                ReferenceRow::new("Pressure", format!("{:.0} psf", pressure)),
                ReferenceRow::new("Safety Factor", format!("{:.1}", breakdown.safety_factor)),
                ReferenceRow::new(
                    "Allowable Load",
                    format!("{:.0} lbs", round_load_lb(breakdown.safe_working_load_lb)),
                ),
            ],
            basis: CALCULATION_BASIS.to_string(),
        }
    }
}

impl fmt::Display for DesignReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Design Pressure:        {} ({})", self.design_pressure, self.governing_case)?;
        writeln!(f, "Governing Tie Spacing:  {}", self.tie_spacing)?;
        writeln!(f, "  {}", self.basis)?;
        writeln!(f)?;
        writeln!(f, "Bill of Materials:")?;
        writeln!(f, "  Plywood (4x8):        {}", self.plywood)?;
        writeln!(f, "  Ties Required:        {}", self.ties)?;
        writeln!(f)?;
        writeln!(f, "Structural Reference Table:")?;
        for row in &self.reference_table {
            writeln!(f, "  {:<15} {}", row.variable, row.value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::formwork::PressureCase;

    fn scenario() -> (DesignResult, DesignBreakdown) {
        let result = DesignResult {
            design_pressure_psf: 792.857_142_857,
            governing_tie_spacing_in: 18.080_899,
            plywood_sheets: 38,
            tie_count: 272,
        };
        let breakdown = DesignBreakdown {
            hydrostatic_pressure_psf: 1800.0,
            rate_temperature_pressure_psf: 792.857_142_857,
            governing_case: PressureCase::RateTemperature,
            tie_name: "Snap-Tie".to_string(),
            tie_capacity_lb: 4500.0,
            safety_factor: 2.5,
            safe_working_load_lb: 1800.0,
            form_face_area_sqft: 1200.0,
        };
        (result, breakdown)
    }

    #[test]
    fn test_rounding() {
        assert_eq!(round_pressure_psf(600.0), 600.0);
        assert_eq!(round_pressure_psf(792.4), 792.0);
        assert_eq!(round_spacing_in(32.863), 32.9);
        assert_eq!(round_load_lb(1333.33), 1333.0);
    }

    #[test]
    fn test_report_strings() {
        let (result, breakdown) = scenario();
        let report = DesignReport::from_result(&result, &breakdown);
        assert_eq!(report.design_pressure, "793 PSF");
        assert_eq!(report.tie_spacing, "18.1 in O.C.");
        assert_eq!(report.plywood, "38 sheets");
        assert_eq!(report.ties, "272 pcs");
        assert_eq!(report.governing_case, "Rate/Temperature");
    }

    #[test]
    fn test_reference_table() {
        let (result, breakdown) = scenario();
        let report = DesignReport::from_result(&result, &breakdown);
        let rows: Vec<(&str, &str)> = report
            .reference_table
            .iter()
            .map(|r| (r.variable.as_str(), r.value.as_str()))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("Pressure", "793 psf"),
                ("Safety Factor", "2.5"),
                ("Allowable Load", "1800 lbs"),
            ]
        );
    }

    #[test]
    fn test_rounding_leaves_result_untouched() {
        let (result, breakdown) = scenario();
        let _ = DesignReport::from_result(&result, &breakdown);
        assert_eq!(result.design_pressure_psf, 792.857_142_857);
    }

    #[test]
    fn test_display() {
        let (result, breakdown) = scenario();
        let text = DesignReport::from_result(&result, &breakdown).to_string();
        assert!(text.contains("793 PSF"));
        assert!(text.contains("Ties Required:        272 pcs"));
        assert!(text.contains(CALCULATION_BASIS));
    }
}
