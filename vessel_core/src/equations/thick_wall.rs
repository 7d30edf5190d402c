//! # Thick-Wall Cylinder Formulas
//!
//! Lamé solutions for a capped cylinder under uniform external pressure,
//! used when R/t < 10.
//!
//! ## Notation
//!
//! - `a` = Outer radius D/2
//! - `b` = Inner radius a - t (must be > 0)
//! - `r` = Evaluation radius, `b + t·(percent/100)`
//!
//! `percent` runs from 0 (inner surface) to 100 (outer surface). Values
//! outside [0, 100] are rejected rather than extrapolated.
//!
//! ## Sign Conventions
//!
//! Negative = compressive. Signs are kept as computed; compare magnitudes
//! against yield.
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 7th Edition, Table 13.5 Cases 1c, 1d

use super::registry::Equation;
use super::trace::{format_value, Derivation, Quantity};
use super::elastic_modulus;
use crate::errors::{CalcError, CalcResult};
use crate::vessel::Vessel;

/// Outer and inner radii of a thick wall, with their squares.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallRadii {
    /// Outer radius a (in)
    pub a: f64,
    /// Inner radius b (in)
    pub b: f64,
    t: f64,
    a2: f64,
    b2: f64,
}

impl WallRadii {
    /// Radii of `vessel`.
    ///
    /// # Errors
    /// `DomainError` when the wall is at least as thick as the outer radius.
    pub fn of(vessel: &Vessel) -> CalcResult<Self> {
        let a = vessel.radius_in();
        let t = vessel.wall_thickness_in();
        let b = a - t;
        if b <= 0.0 {
            return Err(CalcError::domain(
                "wall_thickness_in",
                t.to_string(),
                format!("Inner radius must be positive (outer radius {} in)", a),
            ));
        }
        Ok(WallRadii { a, b, t, a2: a * a, b2: b * b })
    }

    /// a² - b²
    fn spread(&self) -> f64 {
        self.a2 - self.b2
    }

    /// Radius at `percent` of the way from the inner to the outer surface.
    ///
    /// The endpoints land exactly on `b` (0%) and `a` (100%).
    ///
    /// # Errors
    /// `RangeError` when `percent` is outside [0, 100] or NaN.
    pub fn radius_at(&self, percent: f64) -> CalcResult<f64> {
        if !(0.0..=100.0).contains(&percent) {
            return Err(CalcError::range(
                "percent",
                percent.to_string(),
                "Wall position must be between 0 (inner) and 100 (outer)",
            ));
        }
        Ok(self.a - self.t * (1.0 - percent / 100.0))
    }
}

fn start(equation: Equation, vessel: &Vessel, p: f64, radii: &WallRadii) -> Derivation {
    Derivation::begin(equation)
        .input(Quantity::new("p", p, "psi"))
        .input(Quantity::new("D", vessel.diameter_in(), "in"))
        .input(Quantity::new("t", vessel.wall_thickness_in(), "in"))
        .step(Quantity::new("a", radii.a, "in"))
        .step(Quantity::new("b", radii.b, "in"))
}

// =============================================================================
// STRESSES
// =============================================================================

/// Worked form of [`thick_hoop_stress`]
pub fn thick_hoop_stress_derivation(vessel: &Vessel, p: f64, percent: f64) -> CalcResult<Derivation> {
    let radii = WallRadii::of(vessel)?;
    let r = radii.radius_at(percent)?;
    let r2 = r * r;
    let sigma = -p * radii.a2 * (radii.b2 + r2) / (r2 * radii.spread());

    Ok(start(Equation::ThickHoopStress, vessel, p, &radii)
        .input(Quantity::new("percent", percent, "%"))
        .step(Quantity::new("r", r, "in"))
        .finish(
            format!(
                "sigma_h = -{} * {}^2 * ({}^2 + {}^2) / ({}^2 * ({}^2 - {}^2))",
                format_value(p),
                format_value(radii.a),
                format_value(radii.b),
                format_value(r),
                format_value(r),
                format_value(radii.a),
                format_value(radii.b)
            ),
            Quantity::new("sigma_h", sigma, "psi").with_latex(r"\sigma_h"),
        ))
}

/// Hoop stress at a position through the wall
///
/// # Formula (Roark's Table 13.5, Case 1c)
/// σ_h(r) = -p·a²·(b² + r²) / (r²·(a² - b²))
pub fn thick_hoop_stress(vessel: &Vessel, p: f64, percent: f64) -> CalcResult<f64> {
    thick_hoop_stress_derivation(vessel, p, percent).map(|d| d.value())
}

/// Worked form of [`thick_hoop_stress_max`]
pub fn thick_hoop_stress_max_derivation(vessel: &Vessel, p: f64) -> CalcResult<Derivation> {
    let radii = WallRadii::of(vessel)?;
    let sigma = -2.0 * p * radii.a2 / radii.spread();

    Ok(start(Equation::ThickHoopStressMax, vessel, p, &radii).finish(
        format!(
            "sigma_h,max = -2 * {} * {}^2 / ({}^2 - {}^2)",
            format_value(p),
            format_value(radii.a),
            format_value(radii.a),
            format_value(radii.b)
        ),
        Quantity::new("sigma_h,max", sigma, "psi").with_latex(r"\sigma_{h,max}"),
    ))
}

/// Hoop stress at the inner surface, its largest magnitude
///
/// # Formula (Roark's Table 13.5, Case 1c)
/// σ_h,max = -2p·a² / (a² - b²)
pub fn thick_hoop_stress_max(vessel: &Vessel, p: f64) -> CalcResult<f64> {
    thick_hoop_stress_max_derivation(vessel, p).map(|d| d.value())
}

/// Worked form of [`thick_longitudinal_stress`]
pub fn thick_longitudinal_stress_derivation(vessel: &Vessel, p: f64) -> CalcResult<Derivation> {
    let radii = WallRadii::of(vessel)?;
    let sigma = -p * radii.a2 / radii.spread();

    Ok(start(Equation::ThickLongitudinalStress, vessel, p, &radii).finish(
        format!(
            "sigma_l = -{} * {}^2 / ({}^2 - {}^2)",
            format_value(p),
            format_value(radii.a),
            format_value(radii.a),
            format_value(radii.b)
        ),
        Quantity::new("sigma_l", sigma, "psi").with_latex(r"\sigma_l"),
    ))
}

/// Longitudinal stress, uniform over the section
///
/// # Formula (Roark's Table 13.5, Case 1d)
/// σ_l = -p·a² / (a² - b²)
pub fn thick_longitudinal_stress(vessel: &Vessel, p: f64) -> CalcResult<f64> {
    thick_longitudinal_stress_derivation(vessel, p).map(|d| d.value())
}

/// Worked form of [`thick_radial_stress`]
pub fn thick_radial_stress_derivation(vessel: &Vessel, p: f64, percent: f64) -> CalcResult<Derivation> {
    let radii = WallRadii::of(vessel)?;
    let r = radii.radius_at(percent)?;
    let r2 = r * r;
    // at r = a the ratio is x/x, so the outer surface reads exactly -p
    let sigma = -p * ((radii.a2 * (r2 - radii.b2)) / (r2 * radii.spread()));

    Ok(start(Equation::ThickRadialStress, vessel, p, &radii)
        .input(Quantity::new("percent", percent, "%"))
        .step(Quantity::new("r", r, "in"))
        .finish(
            format!(
                "sigma_r = -{} * {}^2 * ({}^2 - {}^2) / ({}^2 * ({}^2 - {}^2))",
                format_value(p),
                format_value(radii.a),
                format_value(r),
                format_value(radii.b),
                format_value(r),
                format_value(radii.a),
                format_value(radii.b)
            ),
            Quantity::new("sigma_r", sigma, "psi").with_latex(r"\sigma_r"),
        ))
}

/// Radial stress at a position through the wall
///
/// # Formula (Roark's Table 13.5, Case 1c)
/// σ_r(r) = -p·a²·(r² - b²) / (r²·(a² - b²))
pub fn thick_radial_stress(vessel: &Vessel, p: f64, percent: f64) -> CalcResult<f64> {
    thick_radial_stress_derivation(vessel, p, percent).map(|d| d.value())
}

/// Worked form of [`thick_radial_stress_max`]
pub fn thick_radial_stress_max_derivation(vessel: &Vessel, p: f64) -> CalcResult<Derivation> {
    let radii = WallRadii::of(vessel)?;

    Ok(start(Equation::ThickRadialStressMax, vessel, p, &radii).finish(
        format!("sigma_r,max = -{}", format_value(p)),
        Quantity::new("sigma_r,max", -p, "psi").with_latex(r"\sigma_{r,max}"),
    ))
}

/// Radial stress at the outer surface, equal to the applied pressure
///
/// # Formula (Roark's Table 13.5, Case 1d)
/// σ_r,max = -p
pub fn thick_radial_stress_max(vessel: &Vessel, p: f64) -> CalcResult<f64> {
    thick_radial_stress_max_derivation(vessel, p).map(|d| d.value())
}

/// Worked form of [`thick_shear_stress`]
pub fn thick_shear_stress_derivation(vessel: &Vessel, p: f64, percent: f64) -> CalcResult<Derivation> {
    let radii = WallRadii::of(vessel)?;
    let r = radii.radius_at(percent)?;
    let tau = -p * radii.a2 / radii.spread();

    Ok(start(Equation::ThickShearStress, vessel, p, &radii)
        .input(Quantity::new("percent", percent, "%"))
        .step(Quantity::new("r", r, "in"))
        .finish(
            format!(
                "tau = -{} * {}^2 / ({}^2 - {}^2)",
                format_value(p),
                format_value(radii.a),
                format_value(radii.a),
                format_value(radii.b)
            ),
            Quantity::new("tau", tau, "psi").with_latex(r"\tau"),
        ))
}

/// Shear stress at a position through the wall.
///
/// The closed form does not depend on `r` and coincides with
/// [`thick_longitudinal_stress`]; the position is still validated.
///
/// # Formula (Roark's Table 13.5, Case 1c)
/// τ(r) = -p·a² / (a² - b²)
pub fn thick_shear_stress(vessel: &Vessel, p: f64, percent: f64) -> CalcResult<f64> {
    thick_shear_stress_derivation(vessel, p, percent).map(|d| d.value())
}

// =============================================================================
// DEFORMATIONS
// =============================================================================

/// Worked form of [`thick_outer_diameter_reduction`]
pub fn thick_outer_diameter_reduction_derivation(vessel: &Vessel, p: f64) -> CalcResult<Derivation> {
    let radii = WallRadii::of(vessel)?;
    let e = elastic_modulus(vessel)?;
    let v = vessel.material().poisson_ratio;

    let shape = (radii.a2 * (1.0 - 2.0 * v) + radii.b2 * (1.0 + v)) / radii.spread();
    let delta = 2.0 * (-(p * radii.a / e) * shape);

    Ok(start(Equation::ThickOuterDiameterReduction, vessel, p, &radii)
        .input(Quantity::new("E", e, "psi"))
        .input(Quantity::new("v", v, ""))
        .finish(
            format!(
                "dD_o = 2 * [ -({} * {} / {}) * {} ]",
                format_value(p),
                format_value(radii.a),
                format_value(e),
                format_value(shape)
            ),
            Quantity::new("dD_o", delta, "in").with_latex(r"\Delta D_o"),
        ))
}

/// Change in outer diameter (negative = reduction)
///
/// # Formula (Roark's Table 13.5, Case 1d)
/// ΔD_o = 2·[ -(p·a/E) · (a²(1-2v) + b²(1+v)) / (a² - b²) ]
///
/// # Errors
/// `DomainError` when E <= 0 or the inner radius is not positive.
pub fn thick_outer_diameter_reduction(vessel: &Vessel, p: f64) -> CalcResult<f64> {
    thick_outer_diameter_reduction_derivation(vessel, p).map(|d| d.value())
}

/// Worked form of [`thick_inner_diameter_reduction`]
pub fn thick_inner_diameter_reduction_derivation(vessel: &Vessel, p: f64) -> CalcResult<Derivation> {
    let radii = WallRadii::of(vessel)?;
    let e = elastic_modulus(vessel)?;
    let v = vessel.material().poisson_ratio;

    let shape = radii.a2 * (2.0 - v) / radii.spread();
    let delta = 2.0 * (-(p * radii.b / e) * shape);

    Ok(start(Equation::ThickInnerDiameterReduction, vessel, p, &radii)
        .input(Quantity::new("E", e, "psi"))
        .input(Quantity::new("v", v, ""))
        .finish(
            format!(
                "dD_i = 2 * [ -({} * {} / {}) * {} ]",
                format_value(p),
                format_value(radii.b),
                format_value(e),
                format_value(shape)
            ),
            Quantity::new("dD_i", delta, "in").with_latex(r"\Delta D_i"),
        ))
}

/// Change in inner diameter (negative = reduction)
///
/// # Formula (Roark's Table 13.5, Case 1d)
/// ΔD_i = 2·[ -(p·b/E) · a²(2-v) / (a² - b²) ]
pub fn thick_inner_diameter_reduction(vessel: &Vessel, p: f64) -> CalcResult<f64> {
    thick_inner_diameter_reduction_derivation(vessel, p).map(|d| d.value())
}

/// Worked form of [`thick_length_reduction`]
pub fn thick_length_reduction_derivation(vessel: &Vessel, p: f64) -> CalcResult<Derivation> {
    let radii = WallRadii::of(vessel)?;
    let e = elastic_modulus(vessel)?;
    let v = vessel.material().poisson_ratio;
    let l = vessel.length_in();

    let shape = radii.a2 * (1.0 - 2.0 * v) / radii.spread();
    let delta = -(p * l / e) * shape;

    Ok(start(Equation::ThickLengthReduction, vessel, p, &radii)
        .input(Quantity::new("L", l, "in"))
        .input(Quantity::new("E", e, "psi"))
        .input(Quantity::new("v", v, ""))
        .finish(
            format!(
                "dL = -({} * {} / {}) * {}",
                format_value(p),
                format_value(l),
                format_value(e),
                format_value(shape)
            ),
            Quantity::new("dL", delta, "in").with_latex(r"\Delta L"),
        ))
}

/// Change in length (negative = reduction)
///
/// # Formula (Roark's Table 13.5, Case 1d)
/// ΔL = -(p·L/E) · a²(1-2v) / (a² - b²)
pub fn thick_length_reduction(vessel: &Vessel, p: f64) -> CalcResult<f64> {
    thick_length_reduction_derivation(vessel, p).map(|d| d.value())
}
