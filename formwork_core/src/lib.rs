//! # formwork_core - Wall Formwork Calculation Engine
//!
//! `formwork_core` computes lateral concrete pressure on wall forms per
//! ACI 347, derives the governing tie spacing for the selected tie hardware
//! and safety factor, and takes off plywood and tie quantities.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All input and result types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, never NaN or partial results
//! - **Full Precision**: Rounding is a separate step in [`report`]
//!
//! ## Quick Start
//!
//! ```rust
//! use formwork_core::{calculate, EngineeringSettings, JobsiteInputs, SafetyFactor, TieType};
//!
//! let inputs = JobsiteInputs {
//!     wall_height_ft: 2.0,
//!     wall_length_ft: 10.0,
//!     pour_rate_ft_per_hr: 1.0,
//!     concrete_temp_f: 100.0,
//! };
//! let settings = EngineeringSettings {
//!     safety_factor: SafetyFactor::Two,
//!     tie_type: TieType::SheBolt,
//! };
//!
//! let result = calculate(&inputs, &settings).unwrap();
//! assert_eq!(result.design_pressure_psf, 600.0);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The wall form calculation pipeline
//! - [`equations`] - Formulas and the equation registry
//! - [`hardware`] - Tie types, tie catalog, safety factors
//! - [`report`] - Display rounding and the reference table
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod hardware;
pub mod report;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::formwork::{
    calculate, calculate_detailed, DesignBreakdown, DesignResult, EngineeringSettings, JobsiteInputs,
};
pub use errors::{CalcError, CalcResult};
pub use hardware::{SafetyFactor, TieCatalog, TieType};
pub use report::DesignReport;
