//! # Equation Registry
//!
//! Central registry of every formula the engine evaluates. Each equation has
//! metadata including its Roark's reference, plain-text and LaTeX formulas,
//! variable definitions and assumptions.
//!
//! ## Architecture
//!
//! The registry provides:
//! - Type-safe equation identification via the `Equation` enum
//! - Full metadata for rendered derivations and audit trails
//! - Usage tracking so an analysis can list the equations it applied
//!
//! ## Usage
//!
//! ```rust
//! use vessel_core::equations::registry::{Equation, EquationTracker};
//!
//! let mut tracker = EquationTracker::new();
//! tracker.record(Equation::ThinHoopStress, "Rated depth", "Hull");
//!
//! let meta = Equation::ThinHoopStress.metadata();
//! assert_eq!(meta.formula_plain, "sigma_h = p*r / t");
//! ```

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashSet};

// ============================================================================
// Code References
// ============================================================================

/// Reference to the source of a formula.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CodeReference {
    /// Roark's Formulas for Stress and Strain
    Roarks {
        edition: u8,
        page: u16,
        table: &'static str,
        case: &'static str,
    },
    /// Hydrostatic pressure in seawater
    Hydrostatics,
    /// Fundamental mechanics / geometry (no specific reference needed)
    Mechanics,
}

impl CodeReference {
    /// Format the reference for display in reports
    pub fn citation(&self) -> String {
        match self {
            CodeReference::Roarks { edition, page, table, case } => {
                format!("Roark's {}ed, p. {}, {}, Case {}", edition, page, table, case)
            }
            CodeReference::Hydrostatics => "Seawater hydrostatics (14.7 psi per 33 ft)".to_string(),
            CodeReference::Mechanics => "Fundamental Mechanics".to_string(),
        }
    }

    /// Short form for inline references
    pub fn short_form(&self) -> &'static str {
        match self {
            CodeReference::Roarks { .. } => "Roark's",
            CodeReference::Hydrostatics => "Hydrostatics",
            CodeReference::Mechanics => "Mechanics",
        }
    }
}

const ROARKS_THIN: CodeReference = CodeReference::Roarks {
    edition: 7,
    page: 593,
    table: "Table 13.1",
    case: "1c",
};

const ROARKS_BUCKLING: CodeReference = CodeReference::Roarks {
    edition: 7,
    page: 736,
    table: "Table 15.2",
    case: "20a",
};

const ROARKS_THICK_RADIAL: CodeReference = CodeReference::Roarks {
    edition: 7,
    page: 683,
    table: "Table 13.5",
    case: "1c",
};

const ROARKS_THICK_CAPPED: CodeReference = CodeReference::Roarks {
    edition: 7,
    page: 683,
    table: "Table 13.5",
    case: "1d",
};

// ============================================================================
// Equation Categories
// ============================================================================

/// Categories for organizing equations in generated references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquationCategory {
    /// Depth/pressure conversion
    Conversions,
    /// Geometric ratios and classification
    Geometry,
    /// Wall stresses
    Stresses,
    /// Diameter and length changes
    Deformations,
    /// Elastic stability (buckling)
    Stability,
}

impl EquationCategory {
    /// Display name for the category
    pub fn display_name(&self) -> &'static str {
        match self {
            EquationCategory::Conversions => "Conversions",
            EquationCategory::Geometry => "Geometry",
            EquationCategory::Stresses => "Stresses",
            EquationCategory::Deformations => "Deformations",
            EquationCategory::Stability => "Stability",
        }
    }

    /// Sort order for generated references (lower = earlier)
    pub fn sort_order(&self) -> u8 {
        match self {
            EquationCategory::Conversions => 1,
            EquationCategory::Geometry => 2,
            EquationCategory::Stresses => 3,
            EquationCategory::Deformations => 4,
            EquationCategory::Stability => 5,
        }
    }
}

// ============================================================================
// Variable Definition
// ============================================================================

/// Definition of a variable used in an equation.
#[derive(Debug, Clone)]
pub struct Variable {
    /// Symbol (e.g., "p", "r", "E")
    pub symbol: &'static str,
    /// Description
    pub description: &'static str,
    /// Units (e.g., "psi", "in")
    pub units: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str, units: &'static str) -> Self {
        Self { symbol, description, units }
    }
}

// Shared variable definitions
const P: Variable = Variable::new("p", "External pressure", "psi");
const R: Variable = Variable::new("r", "Outside radius D/2", "in");
const T: Variable = Variable::new("t", "Wall thickness", "in");
const L: Variable = Variable::new("L", "Vessel length", "in");
const E: Variable = Variable::new("E", "Modulus of elasticity", "psi");
const V: Variable = Variable::new("v", "Poisson's ratio", "-");
const A_OUT: Variable = Variable::new("a", "Outer radius D/2", "in");
const B_IN: Variable = Variable::new("b", "Inner radius a - t", "in");
const R_EVAL: Variable = Variable::new("r", "Evaluation radius b + t*percent/100", "in");

// ============================================================================
// Equation Metadata
// ============================================================================

/// Complete metadata for an equation.
#[derive(Debug, Clone)]
pub struct EquationMetadata {
    /// Human-readable name (e.g., "Thin-Wall Hoop Stress")
    pub name: &'static str,
    /// Brief description of what this equation calculates
    pub description: &'static str,
    /// The formula in LaTeX for rendered derivations
    pub formula_latex: &'static str,
    /// The formula in plain text for markdown (human-readable)
    pub formula_plain: &'static str,
    /// Source reference
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

/// All equations evaluated by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Equation {
    // -------------------------------------------------------------------------
    // Conversions
    // -------------------------------------------------------------------------
    /// p = 14.7 (d / 33)
    DepthToPressure,
    /// d = 33 (p / 14.7)
    PressureToDepth,

    // -------------------------------------------------------------------------
    // Geometry
    // -------------------------------------------------------------------------
    /// R/t, thin when >= 10
    ThicknessRatio,
    /// L/R
    LengthRatio,

    // -------------------------------------------------------------------------
    // Thin wall
    // -------------------------------------------------------------------------
    /// sigma_h = p r / t
    ThinHoopStress,
    /// sigma_l = p r / (2t)
    ThinLongitudinalStress,
    /// Diameter change under external pressure
    ThinDiameterReduction,
    /// Length change under external pressure
    ThinLengthReduction,
    /// Elastic buckling pressure for lobe mode n
    ThinCriticalBucklingPressure,

    // -------------------------------------------------------------------------
    // Thick wall
    // -------------------------------------------------------------------------
    /// sigma_h(r)
    ThickHoopStress,
    /// sigma_h at the inner surface
    ThickHoopStressMax,
    /// Uniform axial stress, capped ends
    ThickLongitudinalStress,
    /// sigma_r(r)
    ThickRadialStress,
    /// sigma_r at the outer surface
    ThickRadialStressMax,
    /// tau(r)
    ThickShearStress,
    /// Outer diameter change
    ThickOuterDiameterReduction,
    /// Inner diameter change
    ThickInnerDiameterReduction,
    /// Length change, capped ends
    ThickLengthReduction,
}

impl Equation {
    /// Get the full metadata for this equation
    pub fn metadata(&self) -> EquationMetadata {
        match self {
            Equation::DepthToPressure => EquationMetadata {
                name: "Depth to Pressure",
                description: "Gauge pressure at a seawater depth",
                formula_latex: r"p = 14.7 \left( \frac{d}{33} \right)",
                formula_plain: "p = 14.7 * (d / 33)",
                reference: CodeReference::Hydrostatics,
                variables: vec![
                    Variable::new("d", "Depth of seawater", "ft"),
                    P,
                ],
                assumptions: vec!["Gauge pressure: 0 psi at the surface", "Seawater, 33 ft per atmosphere"],
                category: EquationCategory::Conversions,
                source_module: "equations/depth.rs",
                source_function: "depth_to_pressure",
            },

            Equation::PressureToDepth => EquationMetadata {
                name: "Pressure to Depth",
                description: "Seawater depth producing a gauge pressure",
                formula_latex: r"d = 33 \left( \frac{p}{14.7} \right)",
                formula_plain: "d = 33 * (p / 14.7)",
                reference: CodeReference::Hydrostatics,
                variables: vec![
                    P,
                    Variable::new("d", "Depth of seawater", "ft"),
                ],
                assumptions: vec!["Exact inverse of depth to pressure"],
                category: EquationCategory::Conversions,
                source_module: "equations/depth.rs",
                source_function: "pressure_to_depth",
            },

            Equation::ThicknessRatio => EquationMetadata {
                name: "Thickness Ratio",
                description: "Radius-to-thickness ratio used to pick thin or thick wall formulas",
                formula_latex: r"\frac{R}{t} = \frac{D / 2}{t}",
                formula_plain: "R/t = (D/2) / t, thin-walled when R/t >= 10",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("D", "Outside diameter", "in"),
                    T,
                ],
                assumptions: vec!["R/t >= 10 is thin-walled, otherwise thick-walled"],
                category: EquationCategory::Geometry,
                source_module: "vessel.rs",
                source_function: "thickness_ratio",
            },

            Equation::LengthRatio => EquationMetadata {
                name: "Length Ratio",
                description: "Length-to-radius ratio of the cylinder",
                formula_latex: r"\frac{L}{R} = \frac{L}{D / 2}",
                formula_plain: "L/R = L / (D/2)",
                reference: CodeReference::Mechanics,
                variables: vec![
                    L,
                    Variable::new("D", "Outside diameter", "in"),
                ],
                assumptions: vec![],
                category: EquationCategory::Geometry,
                source_module: "vessel.rs",
                source_function: "length_ratio",
            },

            Equation::ThinHoopStress => EquationMetadata {
                name: "Thin-Wall Hoop Stress",
                description: "Circumferential stress, uniform through the wall",
                formula_latex: r"\sigma_h = \frac{p r}{t}",
                formula_plain: "sigma_h = p*r / t",
                reference: ROARKS_THIN,
                variables: vec![P, R, T],
                assumptions: vec!["R/t >= 10", "No radial stress", "Reported as a magnitude"],
                category: EquationCategory::Stresses,
                source_module: "equations/thin_wall.rs",
                source_function: "thin_hoop_stress",
            },

            Equation::ThinLongitudinalStress => EquationMetadata {
                name: "Thin-Wall Longitudinal Stress",
                description: "Axial stress from pressure on the end caps, uniform through the wall",
                formula_latex: r"\sigma_l = \frac{p r}{2 t}",
                formula_plain: "sigma_l = p*r / (2t)",
                reference: ROARKS_THIN,
                variables: vec![P, R, T],
                assumptions: vec!["R/t >= 10", "Capped ends", "Reported as a magnitude"],
                category: EquationCategory::Stresses,
                source_module: "equations/thin_wall.rs",
                source_function: "thin_longitudinal_stress",
            },

            Equation::ThinDiameterReduction => EquationMetadata {
                name: "Thin-Wall Diameter Reduction",
                description: "Change in diameter under uniform external pressure",
                formula_latex: r"\Delta D = 2 \left[ -\frac{p r^2}{E t} \left( 1 - \frac{v}{2} \right) \right]",
                formula_plain: "dD = 2 * [ -(p*r^2)/(E*t) * (1 - v/2) ]",
                reference: ROARKS_THIN,
                variables: vec![P, R, T, E, V],
                assumptions: vec!["Linear elastic", "Negative = reduction"],
                category: EquationCategory::Deformations,
                source_module: "equations/thin_wall.rs",
                source_function: "thin_diameter_reduction",
            },

            Equation::ThinLengthReduction => EquationMetadata {
                name: "Thin-Wall Length Reduction",
                description: "Change in length under uniform external pressure",
                formula_latex: r"\Delta L = -\frac{p r L}{E t} \left( 0.5 - v \right)",
                formula_plain: "dL = -(p*r*L)/(E*t) * (0.5 - v)",
                reference: ROARKS_THIN,
                variables: vec![P, R, T, L, E, V],
                assumptions: vec!["Linear elastic", "Capped ends", "Negative = reduction"],
                category: EquationCategory::Deformations,
                source_module: "equations/thin_wall.rs",
                source_function: "thin_length_reduction",
            },

            Equation::ThinCriticalBucklingPressure => EquationMetadata {
                name: "Thin-Wall Critical Buckling Pressure",
                description: "Elastic instability pressure for a caller-selected lobe mode n",
                formula_latex: r"p' = q_1 (q_2 + q_3 q_4),\ q_1 = \frac{E t / r}{1 + \frac{1}{2}\left(\frac{\pi r}{n L}\right)^2},\ q_2 = \frac{1}{n^2 \left(1 + \left(\frac{n L}{\pi r}\right)^2\right)^2},\ q_3 = \frac{n^2 t^2}{12 r^2 (1 - v^2)},\ q_4 = \left(1 + \left(\frac{\pi r}{n L}\right)^2\right)^2",
                formula_plain: "p' = q1*(q2 + q3*q4); q1 = E(t/r) / (1 + 0.5(pi*r/(n*L))^2), q2 = 1 / (n^2 (1 + (n*L/(pi*r))^2)^2), q3 = n^2 t^2 / (12 r^2 (1 - v^2)), q4 = (1 + (pi*r/(n*L))^2)^2",
                reference: ROARKS_BUCKLING,
                variables: vec![
                    Variable::new("n", "Lobe (buckling mode) number, n >= 1", "-"),
                    R, T, L, E, V,
                ],
                assumptions: vec!["Uniform external pressure on sides and ends", "Ends held circular", "Governing mode is the caller's choice"],
                category: EquationCategory::Stability,
                source_module: "equations/thin_wall.rs",
                source_function: "thin_critical_buckling_pressure",
            },

            Equation::ThickHoopStress => EquationMetadata {
                name: "Thick-Wall Hoop Stress",
                description: "Circumferential stress at a radius inside the wall",
                formula_latex: r"\sigma_h(r) = \frac{-p a^2 (b^2 + r^2)}{r^2 (a^2 - b^2)}",
                formula_plain: "sigma_h(r) = -p*a^2*(b^2 + r^2) / (r^2*(a^2 - b^2))",
                reference: ROARKS_THICK_RADIAL,
                variables: vec![P, A_OUT, B_IN, R_EVAL],
                assumptions: vec!["0% = inner surface, 100% = outer surface", "Negative = compressive"],
                category: EquationCategory::Stresses,
                source_module: "equations/thick_wall.rs",
                source_function: "thick_hoop_stress",
            },

            Equation::ThickHoopStressMax => EquationMetadata {
                name: "Thick-Wall Maximum Hoop Stress",
                description: "Hoop stress at the inner surface, where it peaks",
                formula_latex: r"\sigma_{h,max} = \frac{-2 p a^2}{a^2 - b^2}",
                formula_plain: "sigma_h,max = -2p*a^2 / (a^2 - b^2)",
                reference: ROARKS_THICK_RADIAL,
                variables: vec![P, A_OUT, B_IN],
                assumptions: vec!["Occurs at r = b", "Negative = compressive"],
                category: EquationCategory::Stresses,
                source_module: "equations/thick_wall.rs",
                source_function: "thick_hoop_stress_max",
            },

            Equation::ThickLongitudinalStress => EquationMetadata {
                name: "Thick-Wall Longitudinal Stress",
                description: "Axial stress, uniform across the section",
                formula_latex: r"\sigma_l = \frac{-p a^2}{a^2 - b^2}",
                formula_plain: "sigma_l = -p*a^2 / (a^2 - b^2)",
                reference: ROARKS_THICK_CAPPED,
                variables: vec![P, A_OUT, B_IN],
                assumptions: vec!["Capped ends", "Negative = compressive"],
                category: EquationCategory::Stresses,
                source_module: "equations/thick_wall.rs",
                source_function: "thick_longitudinal_stress",
            },

            Equation::ThickRadialStress => EquationMetadata {
                name: "Thick-Wall Radial Stress",
                description: "Radial stress at a radius inside the wall",
                formula_latex: r"\sigma_r(r) = \frac{-p a^2 (r^2 - b^2)}{r^2 (a^2 - b^2)}",
                formula_plain: "sigma_r(r) = -p*a^2*(r^2 - b^2) / (r^2*(a^2 - b^2))",
                reference: ROARKS_THICK_RADIAL,
                variables: vec![P, A_OUT, B_IN, R_EVAL],
                assumptions: vec!["Zero at the inner surface, -p at the outer surface"],
                category: EquationCategory::Stresses,
                source_module: "equations/thick_wall.rs",
                source_function: "thick_radial_stress",
            },

            Equation::ThickRadialStressMax => EquationMetadata {
                name: "Thick-Wall Maximum Radial Stress",
                description: "Radial stress at the outer surface, equal to the applied pressure",
                formula_latex: r"\sigma_{r,max} = -p",
                formula_plain: "sigma_r,max = -p",
                reference: ROARKS_THICK_CAPPED,
                variables: vec![P],
                assumptions: vec!["Occurs at r = a"],
                category: EquationCategory::Stresses,
                source_module: "equations/thick_wall.rs",
                source_function: "thick_radial_stress_max",
            },

            Equation::ThickShearStress => EquationMetadata {
                name: "Thick-Wall Shear Stress",
                description: "Internal shear stress at a radius inside the wall",
                formula_latex: r"\tau(r) = \frac{-p a^2}{a^2 - b^2}",
                formula_plain: "tau(r) = -p*a^2 / (a^2 - b^2)",
                reference: ROARKS_THICK_RADIAL,
                variables: vec![P, A_OUT, B_IN],
                assumptions: vec!["Same closed form as the longitudinal stress in this formulation"],
                category: EquationCategory::Stresses,
                source_module: "equations/thick_wall.rs",
                source_function: "thick_shear_stress",
            },

            Equation::ThickOuterDiameterReduction => EquationMetadata {
                name: "Thick-Wall Outer Diameter Reduction",
                description: "Change in outer diameter under external pressure",
                formula_latex: r"\Delta D_o = 2 \left[ -\frac{p a}{E} \left( \frac{a^2 (1 - 2v) + b^2 (1 + v)}{a^2 - b^2} \right) \right]",
                formula_plain: "dD_o = 2 * [ -(p*a/E) * ((a^2(1-2v) + b^2(1+v)) / (a^2 - b^2)) ]",
                reference: ROARKS_THICK_CAPPED,
                variables: vec![P, A_OUT, B_IN, E, V],
                assumptions: vec!["Capped ends", "Negative = reduction"],
                category: EquationCategory::Deformations,
                source_module: "equations/thick_wall.rs",
                source_function: "thick_outer_diameter_reduction",
            },

            Equation::ThickInnerDiameterReduction => EquationMetadata {
                name: "Thick-Wall Inner Diameter Reduction",
                description: "Change in inner diameter under external pressure",
                formula_latex: r"\Delta D_i = 2 \left[ -\frac{p b}{E} \left( \frac{a^2 (2 - v)}{a^2 - b^2} \right) \right]",
                formula_plain: "dD_i = 2 * [ -(p*b/E) * (a^2(2-v) / (a^2 - b^2)) ]",
                reference: ROARKS_THICK_CAPPED,
                variables: vec![P, A_OUT, B_IN, E, V],
                assumptions: vec!["Capped ends", "Negative = reduction"],
                category: EquationCategory::Deformations,
                source_module: "equations/thick_wall.rs",
                source_function: "thick_inner_diameter_reduction",
            },

            Equation::ThickLengthReduction => EquationMetadata {
                name: "Thick-Wall Length Reduction",
                description: "Change in overall length under external pressure",
                formula_latex: r"\Delta L = -\frac{p L}{E} \left( \frac{a^2 (1 - 2v)}{a^2 - b^2} \right)",
                formula_plain: "dL = -(p*L/E) * (a^2(1-2v) / (a^2 - b^2))",
                reference: ROARKS_THICK_CAPPED,
                variables: vec![P, L, A_OUT, B_IN, E, V],
                assumptions: vec!["Capped ends", "Negative = reduction"],
                category: EquationCategory::Deformations,
                source_module: "equations/thick_wall.rs",
                source_function: "thick_length_reduction",
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

    /// Get all categories, sorted
    pub fn all_categories() -> Vec<EquationCategory> {
        use EquationCategory::*;
        let mut cats = vec![Conversions, Geometry, Stresses, Deformations, Stability];
        cats.sort_by_key(|c| c.sort_order());
        cats
    }
}

/// All equations in the registry (for iteration)
pub static ALL_EQUATIONS: &[Equation] = &[
    // Conversions
    Equation::DepthToPressure,
    Equation::PressureToDepth,
    // Geometry
    Equation::ThicknessRatio,
    Equation::LengthRatio,
    // Thin wall
    Equation::ThinHoopStress,
    Equation::ThinLongitudinalStress,
    Equation::ThinDiameterReduction,
    Equation::ThinLengthReduction,
    Equation::ThinCriticalBucklingPressure,
    // Thick wall
    Equation::ThickHoopStress,
    Equation::ThickHoopStressMax,
    Equation::ThickLongitudinalStress,
    Equation::ThickRadialStress,
    Equation::ThickRadialStressMax,
    Equation::ThickShearStress,
    Equation::ThickOuterDiameterReduction,
    Equation::ThickInnerDiameterReduction,
    Equation::ThickLengthReduction,
];

// ============================================================================
// Equation Usage Tracking
// ============================================================================

/// One equation applied to one vessel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquationUsage {
    pub equation: Equation,
    /// Analysis stage, e.g. "Depth sweep" or "Rated depth"
    pub context: String,
    pub vessel_label: String,
}

/// Equations applied during an analysis, in the order they were applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EquationTracker {
    usages: Vec<EquationUsage>,
}

impl EquationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, equation: Equation, context: impl Into<String>, vessel_label: impl Into<String>) {
        self.usages.push(EquationUsage {
            equation,
            context: context.into(),
            vessel_label: vessel_label.into(),
        });
    }

    pub fn usages(&self) -> &[EquationUsage] {
        &self.usages
    }

    /// Deduplicated, in first-use order
    pub fn unique_equations(&self) -> Vec<Equation> {
        let mut seen = HashSet::new();
        self.usages
            .iter()
            .filter(|u| seen.insert(u.equation))
            .map(|u| u.equation)
            .collect()
    }

    /// Stages an equation was applied in, sorted and deduplicated
    pub fn contexts_of(&self, equation: Equation) -> Vec<&str> {
        let contexts: BTreeSet<&str> = self
            .usages
            .iter()
            .filter(|u| u.equation == equation)
            .map(|u| u.context.as_str())
            .collect();
        contexts.into_iter().collect()
    }

    /// Unique equations grouped by category, categories in report order
    pub fn by_category(&self) -> Vec<(EquationCategory, Vec<Equation>)> {
        let mut by_cat: BTreeMap<u8, (EquationCategory, Vec<Equation>)> = BTreeMap::new();
        for eq in self.unique_equations() {
            let category = eq.metadata().category;
            by_cat
                .entry(category.sort_order())
                .or_insert_with(|| (category, Vec::new()))
                .1
                .push(eq);
        }
        by_cat.into_values().collect()
    }

    /// Markdown "Equations Used" section for a report.
    pub fn generate_appendix_markdown(&self) -> String {
        let mut output = String::from("## Equations Used\n\n");

        let by_category = self.by_category();
        if by_category.is_empty() {
            output.push_str("_No equations recorded._\n");
            return output;
        }

        for (category, equations) in by_category {
            output.push_str(&format!("### {}\n\n", category.display_name()));
            for equation in equations {
                let meta = equation.metadata();
                output.push_str(&format!(
                    "- **{}**: `{}` ({}) - {}\n",
                    meta.name,
                    meta.formula_plain,
                    meta.reference.citation(),
                    self.contexts_of(equation).join(", ")
                ));
            }
            output.push('\n');
        }

        output
    }
}

// ============================================================================
// Markdown Reference Generation
// ============================================================================

/// Generate the full equations reference as markdown.
///
/// ```rust
/// use vessel_core::equations::registry::generate_equations_markdown;
///
/// let markdown = generate_equations_markdown();
/// assert!(markdown.contains("Depthrate Equations Reference"));
/// assert!(markdown.contains("## Stresses"));
/// ```
pub fn generate_equations_markdown() -> String {
    let mut output = String::with_capacity(16_000);

    output.push_str(r#"# Depthrate Equations Reference

> **Auto-generated from source code. Do not edit manually.**
>
> Regenerate with: `cargo run --bin gen-equations`

This document lists every formula used to rate a cylindrical vessel under
uniform external pressure, with its reference, source location and
assumptions.

## Sign Conventions

| Quantity | Sign |
|----------|------|
| Pressure | Positive = external (crushing) |
| Thin-wall stresses | Reported as positive magnitudes |
| Thick-wall stresses | Negative = compressive |
| Diameter / length change | Negative = reduction |

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

// ============================================================================
// Tests
// ============================================================================
