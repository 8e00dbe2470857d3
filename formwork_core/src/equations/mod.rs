//! # Formwork Equations
//!
//! All formulas used by the calculator live here, separate from input
//! validation, so they can be checked against ACI 347 in one place.
//!
//! ## Modules
//!
//! - [`formwork`] - Pressure, tie spacing and quantity formulas
//! - [`registry`] - Equation metadata and the EQUATIONS.md generator
//!
//! ## References
//!
//! - ACI 347-14: Guide to Formwork for Concrete

pub mod formwork;
pub mod registry;

pub use formwork::{
    design_pressure,
    form_face_area,
    hydrostatic_pressure,
    plywood_sheet_count,
    rate_temperature_pressure,
    safe_working_load,
    square_tributary_spacing,
    tie_grid_count,
    ties_along,
    CONCRETE_UNIT_WEIGHT_PCF,
    MIN_DESIGN_PRESSURE_PSF,
};

pub use registry::{
    CodeReference,
    Equation,
    EquationCategory,
    EquationMetadata,
    Variable,
    ALL_EQUATIONS,
    generate_equations_markdown,
};
