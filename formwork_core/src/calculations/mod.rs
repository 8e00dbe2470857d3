//! # Formwork Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Inputs` / `*Settings` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(...) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`formwork`] - Wall form pressure, tie spacing and material takeoff

pub mod formwork;

pub use formwork::{
    calculate,
    calculate_detailed,
    calculate_named,
    calculate_with_catalog,
    compute_bill_of_materials,
    compute_design_pressure,
    compute_governing_spacing,
    lookup_safe_working_load,
    lookup_safe_working_load_in,
    DesignBreakdown,
    DesignResult,
    EngineeringSettings,
    JobsiteInputs,
    PressureCase,
};
