//! # Pressure Vessel Equations
//!
//! All closed-form formulas used to rate a cylinder under uniform external
//! pressure. Having equations in one place enables:
//! - Easy verification against Roark's tables
//! - Documentation of assumptions and sign conventions
//! - A worked derivation for every computed value
//!
//! ## Modules
//!
//! - [`depth`] - Seawater depth/pressure conversion
//! - [`thin_wall`] - Thin-wall stresses, deformations and buckling (R/t >= 10)
//! - [`thick_wall`] - Thick-wall (Lamé) stresses and deformations (R/t < 10)
//! - [`trace`] - Derivation traces with named intermediate quantities
//! - [`registry`] - Equation metadata and usage tracking
//!
//! ## Sign Conventions
//!
//! - **Pressure**: Positive = external
//! - **Thin-wall stresses**: Positive magnitudes
//! - **Thick-wall stresses**: Negative = compressive
//! - **Deformations**: Negative = reduction
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 7th Edition

pub mod depth;
pub mod registry;
pub mod thick_wall;
pub mod thin_wall;
pub mod trace;

// Re-export commonly used items
pub use depth::{depth_to_pressure, pressure_to_depth};
pub use registry::{generate_equations_markdown, Equation, EquationCategory, EquationTracker};
pub use thick_wall::{
    thick_hoop_stress,
    thick_hoop_stress_max,
    thick_inner_diameter_reduction,
    thick_length_reduction,
    thick_longitudinal_stress,
    thick_outer_diameter_reduction,
    thick_radial_stress,
    thick_radial_stress_max,
    thick_shear_stress,
    WallRadii,
};
pub use thin_wall::{
    thin_critical_buckling_pressure,
    thin_diameter_reduction,
    thin_hoop_stress,
    thin_length_reduction,
    thin_longitudinal_stress,
};
pub use trace::{Derivation, Quantity};

use crate::errors::{require_positive, CalcResult};
use crate::vessel::Vessel;

/// Elastic modulus of the vessel's material, rejected when not positive.
pub(crate) fn elastic_modulus(vessel: &Vessel) -> CalcResult<f64> {
    let e = vessel.material().e_psi;
    require_positive("e_psi", e, "Modulus of elasticity must be positive")?;
    Ok(e)
}
