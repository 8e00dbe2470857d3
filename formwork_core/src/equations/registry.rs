//! # Equation Registry
//!
//! Central registry of the formwork equations used in calculations. Each
//! equation carries its formula, variables, assumptions and code reference so
//! results can be audited against the source document.
//!
//! ## Usage
//!
//! ```rust
//! use formwork_core::equations::registry::Equation;
//!
//! let meta = Equation::RateTemperaturePressure.metadata();
//! assert_eq!(meta.reference.citation(), "ACI 347-14 Section 4.2");
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Code References
// ============================================================================

/// Reference to a code, guide or standard practice.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum CodeReference {
    /// ACI 347 - Guide to Formwork for Concrete
    ACI347 {
        year: u16,
        section: &'static str,
    },
    /// Common jobsite takeoff practice (no code clause)
    TakeoffPractice,
    /// Fundamental mechanics (no specific code reference needed)
    Mechanics,
}

impl CodeReference {
    /// Format the reference for display
    pub fn citation(&self) -> String {
        match self {
            CodeReference::ACI347 { year, section } => {
                format!("ACI 347-{} Section {}", year % 100, section)
            }
            CodeReference::TakeoffPractice => "Material Takeoff Practice".to_string(),
            CodeReference::Mechanics => "Fundamental Mechanics".to_string(),
        }
    }

    /// Short form for inline references
    pub fn short_form(&self) -> &'static str {
        match self {
            CodeReference::ACI347 { .. } => "ACI 347",
            CodeReference::TakeoffPractice => "Takeoff",
            CodeReference::Mechanics => "Mechanics",
        }
    }
}

// ============================================================================
// Equation Categories
// ============================================================================

/// Categories for organizing the equations reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquationCategory {
    /// Lateral concrete pressure on the form
    LateralPressure,
    /// Tie capacity and spacing
    TieDesign,
    /// Plywood and tie quantities
    Quantities,
}

impl EquationCategory {
    /// Display name for the category
    pub fn display_name(&self) -> &'static str {
        match self {
            EquationCategory::LateralPressure => "Lateral Pressure",
            EquationCategory::TieDesign => "Tie Design",
            EquationCategory::Quantities => "Quantities",
        }
    }

    /// Sort order, following the calculation pipeline
    pub fn sort_order(&self) -> u8 {
        match self {
            EquationCategory::LateralPressure => 1,
            EquationCategory::TieDesign => 2,
            EquationCategory::Quantities => 3,
        }
    }
}

// ============================================================================
// Variable Definition
// ============================================================================

/// Definition of a variable used in an equation.
#[derive(Debug, Clone)]
pub struct Variable {
    /// Symbol (e.g., "p", "R", "T")
    pub symbol: &'static str,
    /// Description
    pub description: &'static str,
    /// Units (e.g., "psf", "ft/hr")
    pub units: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str, units: &'static str) -> Self {
        Self { symbol, description, units }
    }
}

// ============================================================================
// Equation Metadata
// ============================================================================

/// Complete metadata for one equation.
#[derive(Debug, Clone)]
pub struct EquationMetadata {
    /// Human-readable name
    pub name: &'static str,
    /// Brief description of what this equation calculates
    pub description: &'static str,
    /// The formula in plain text
    pub formula_plain: &'static str,
    /// Code/standard reference
    pub reference: CodeReference,
    /// Variable definitions
    pub variables: Vec<Variable>,
    /// Assumptions or limitations
    pub assumptions: Vec<&'static str>,
    /// Category for grouping
    pub category: EquationCategory,
    /// Source module where the equation implementation lives
    pub source_module: &'static str,
    /// Function name implementing the equation
    pub source_function: &'static str,
}

// ============================================================================
// Equation Enum
// ============================================================================

/// All equations used by the formwork calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Equation {
    /// p = w·h
    HydrostaticPressure,
    /// p = 150 + 9000·R/T
    RateTemperaturePressure,
    /// p = max(min(...), 600)
    MinimumDesignPressure,
    /// SWL = capacity / SF
    SafeWorkingLoad,
    /// s = √(SWL / p)·12
    TieSpacing,
    /// n = ⌈2hL / 32⌉
    PlywoodSheetCount,
    /// N = ⌈12L / s⌉·⌈12h / s⌉
    TieGridCount,
}

impl Equation {
    /// Get the full metadata for this equation
    pub fn metadata(&self) -> EquationMetadata {
        match self {
            Equation::HydrostaticPressure => EquationMetadata {
                name: "Hydrostatic Pressure",
                description: "Full liquid head of fresh concrete at the base of the form",
                formula_plain: "p = w * h",
                reference: CodeReference::ACI347 { year: 2014, section: "4.2" },
                variables: vec![
                    Variable::new("p", "Lateral pressure", "psf"),
                    Variable::new("w", "Unit weight of concrete (150)", "pcf"),
                    Variable::new("h", "Wall height", "ft"),
                ],
                assumptions: vec!["Normal-weight concrete", "Concrete never stiffens during the pour"],
                category: EquationCategory::LateralPressure,
                source_module: "equations/formwork.rs",
                source_function: "hydrostatic_pressure",
            },

            Equation::RateTemperaturePressure => EquationMetadata {
                name: "Wall Pressure from Rate and Temperature",
                description: "Peak lateral pressure on wall forms given rate of placement and concrete temperature",
                formula_plain: "p = 150 + 9000 * R / T",
                reference: CodeReference::ACI347 { year: 2014, section: "4.2" },
                variables: vec![
                    Variable::new("p", "Lateral pressure", "psf"),
                    Variable::new("R", "Rate of placement", "ft/hr"),
                    Variable::new("T", "Concrete temperature", "°F"),
                ],
                assumptions: vec![
                    "Internal vibration to normal depth",
                    "No retarders or chemistry adjustment factors",
                ],
                category: EquationCategory::LateralPressure,
                source_module: "equations/formwork.rs",
                source_function: "rate_temperature_pressure",
            },

            Equation::MinimumDesignPressure => EquationMetadata {
                name: "Design Pressure",
                description: "Smaller of hydrostatic and rate/temperature pressure, not less than 600 psf",
                formula_plain: "p = max(min(w * h, 150 + 9000 * R / T), 600)",
                reference: CodeReference::ACI347 { year: 2014, section: "4.3" },
                variables: vec![
                    Variable::new("p", "Design lateral pressure", "psf"),
                ],
                assumptions: vec!["600 psf minimum regardless of computed value"],
                category: EquationCategory::LateralPressure,
                source_module: "equations/formwork.rs",
                source_function: "design_pressure",
            },

            Equation::SafeWorkingLoad => EquationMetadata {
                name: "Safe Working Load",
                description: "Allowable load per tie after the safety factor",
                formula_plain: "SWL = P_cap / SF",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("SWL", "Safe working load", "lb"),
                    Variable::new("P_cap", "Tie capacity from catalog", "lb"),
                    Variable::new("SF", "Safety factor", "-"),
                ],
                assumptions: vec!["Catalog capacities are already adjusted from nominal rating"],
                category: EquationCategory::TieDesign,
                source_module: "equations/formwork.rs",
                source_function: "safe_working_load",
            },

            Equation::TieSpacing => EquationMetadata {
                name: "Governing Tie Spacing",
                description: "Maximum center-to-center tie spacing for a square tributary area",
                formula_plain: "s = sqrt(SWL / p) * 12",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("s", "Tie spacing, on center", "in"),
                    Variable::new("SWL", "Safe working load", "lb"),
                    Variable::new("p", "Design lateral pressure", "psf"),
                ],
                assumptions: vec![
                    "Same spacing horizontally and vertically",
                    "Uniform pressure over the tributary area",
                ],
                category: EquationCategory::TieDesign,
                source_module: "equations/formwork.rs",
                source_function: "square_tributary_spacing",
            },

            Equation::PlywoodSheetCount => EquationMetadata {
                name: "Plywood Sheet Count",
                description: "Whole 4x8 sheets covering both faces of the wall",
                formula_plain: "n = ceil(2 * h * L / 32)",
                reference: CodeReference::TakeoffPractice,
                variables: vec![
                    Variable::new("n", "Plywood sheets", "ea"),
                    Variable::new("h", "Wall height", "ft"),
                    Variable::new("L", "Wall length", "ft"),
                ],
                assumptions: vec!["No waste factor", "No panel layout optimization"],
                category: EquationCategory::Quantities,
                source_module: "equations/formwork.rs",
                source_function: "plywood_sheet_count",
            },

            Equation::TieGridCount => EquationMetadata {
                name: "Tie Count",
                description: "Ties on a uniform rectangular grid at the governing spacing",
                formula_plain: "N = ceil(12 * L / s) * ceil(12 * h / s)",
                reference: CodeReference::TakeoffPractice,
                variables: vec![
                    Variable::new("N", "Tie count", "ea"),
                    Variable::new("s", "Tie spacing, on center", "in"),
                ],
                assumptions: vec!["Ceiling taken per axis", "One spacing governs both axes"],
                category: EquationCategory::Quantities,
                source_module: "equations/formwork.rs",
                source_function: "tie_grid_count",
            },
        }
    }

    /// Get all equations in a given category
    pub fn in_category(category: EquationCategory) -> Vec<Equation> {
        ALL_EQUATIONS
            .iter()
            .filter(|eq| eq.metadata().category == category)
            .copied()
            .collect()
    }

    /// Get all categories in pipeline order
    pub fn all_categories() -> Vec<EquationCategory> {
        use EquationCategory::*;
        let mut cats = vec![LateralPressure, TieDesign, Quantities];
        cats.sort_by_key(|c| c.sort_order());
        cats
    }
}

/// All equations in the registry (for iteration)
pub static ALL_EQUATIONS: &[Equation] = &[
    Equation::HydrostaticPressure,
    Equation::RateTemperaturePressure,
    Equation::MinimumDesignPressure,
    Equation::SafeWorkingLoad,
    Equation::TieSpacing,
    Equation::PlywoodSheetCount,
    Equation::TieGridCount,
];

// ============================================================================
// Markdown Generation
// ============================================================================

/// Generate the EQUATIONS.md reference from the registry.
///
/// ```rust
/// use formwork_core::equations::registry::generate_equations_markdown;
///
/// let markdown = generate_equations_markdown();
/// assert!(markdown.contains("Formwork Equations Reference"));
/// assert!(markdown.contains("Lateral Pressure"));
/// ```
pub fn generate_equations_markdown() -> String {
    let mut output = String::with_capacity(8_000);

    output.push_str(r#"# Formwork Equations Reference

> **Auto-generated from source code. Do not edit manually.**
>
> Regenerate with: `cargo run --bin gen-equations`

Formulas used to compute lateral pressure, tie spacing and material
quantities for wall forms. Units are US customary throughout.

---

"#);

    let categories = Equation::all_categories();

    for category in &categories {
        let equations = Equation::in_category(*category);
        if equations.is_empty() {
            continue;
        }

        output.push_str(&format!("## {}\n\n", category.display_name()));

        for equation in equations {
            let meta = equation.metadata();

            output.push_str(&format!("### {}\n\n", meta.name));
            output.push_str(&format!("{}\n\n", meta.description));
            output.push_str(&format!("**Formula:** `{}`\n\n", meta.formula_plain));

            if !meta.variables.is_empty() {
                output.push_str("**Variables:**\n\n");
                output.push_str("| Symbol | Description | Units |\n");
                output.push_str("|--------|-------------|-------|\n");
                for var in &meta.variables {
                    output.push_str(&format!(
                        "| {} | {} | {} |\n",
                        var.symbol, var.description, var.units
                    ));
                }
                output.push('\n');
            }

            output.push_str(&format!("**Reference:** {}\n\n", meta.reference.citation()));
            output.push_str(&format!(
                "**Source:** [`{}`]({})\n\n",
                meta.source_function, meta.source_module
            ));

            if !meta.assumptions.is_empty() {
                output.push_str("**Assumptions:**\n");
                for assumption in &meta.assumptions {
                    output.push_str(&format!("- {}\n", assumption));
                }
                output.push('\n');
            }

            output.push_str("---\n\n");
        }
    }

    output.push_str(&format!(
        "## Statistics\n\n- **Total Equations:** {}\n- **Categories:** {}\n",
        ALL_EQUATIONS.len(),
        categories.len()
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_equations_have_metadata() {
        assert_eq!(ALL_EQUATIONS.len(), 7);

        for eq in ALL_EQUATIONS {
            let meta = eq.metadata();
            assert!(!meta.name.is_empty(), "Equation {:?} has no name", eq);
            assert!(!meta.formula_plain.is_empty(), "Equation {:?} has no formula", eq);
            assert!(!meta.variables.is_empty(), "Equation {:?} has no variables", eq);
            assert!(!meta.source_function.is_empty(), "Equation {:?} missing source_function", eq);
        }

        let aci = Equation::RateTemperaturePressure.metadata();
        assert!(aci.formula_plain.contains("9000 * R / T"));
    }

    #[test]
    fn test_code_reference_citation() {
        let aci = CodeReference::ACI347 { year: 2014, section: "4.3" };
        assert_eq!(aci.citation(), "ACI 347-14 Section 4.3");
        assert_eq!(aci.short_form(), "ACI 347");
    }

    #[test]
    fn test_every_equation_is_categorized() {
        let total: usize = Equation::all_categories()
            .into_iter()
            .map(|c| Equation::in_category(c).len())
            .sum();
        assert_eq!(total, ALL_EQUATIONS.len());
    }

    #[test]
    fn test_generate_equations_markdown() {
        let markdown = generate_equations_markdown();

        assert!(markdown.contains("# Formwork Equations Reference"));
        assert!(markdown.contains("## Lateral Pressure"));
        assert!(markdown.contains("## Tie Design"));
        assert!(markdown.contains("## Quantities"));
        assert!(markdown.contains("`s = sqrt(SWL / p) * 12`"));
        assert!(markdown.contains("ACI 347-14"));
        assert!(markdown.contains("**Total Equations:** 7"));
        assert!(markdown.contains("**Categories:** 3"));
    }
}
