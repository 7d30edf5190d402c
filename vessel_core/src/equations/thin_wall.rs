//! # Thin-Wall Cylinder Formulas
//!
//! Closed-form stresses, deformations and elastic buckling for a capped
//! cylinder under uniform external pressure, valid when R/t >= 10.
//!
//! ## Notation
//!
//! - `p` = External pressure (psi)
//! - `r` = Outside radius D/2 (in)
//! - `t` = Wall thickness (in)
//! - `L` = Length (in)
//! - `E` = Modulus of elasticity (psi)
//! - `v` = Poisson's ratio
//! - `n` = Buckling lobe number
//!
//! ## Sign Conventions
//!
//! - Stresses: reported as positive magnitudes
//! - Diameter / length change: negative = reduction
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 7th Edition, Table 13.1 Case 1c
//! - Roark's Formulas for Stress and Strain, 7th Edition, Table 15.2 Case 20a

use std::f64::consts::PI;

use super::registry::Equation;
use super::trace::{format_value, Derivation, Quantity};
use super::elastic_modulus;
use crate::errors::{CalcError, CalcResult};
use crate::vessel::Vessel;

fn start(equation: Equation, vessel: &Vessel, p: f64) -> Derivation {
    Derivation::begin(equation)
        .input(Quantity::new("p", p, "psi"))
        .input(Quantity::new("D", vessel.diameter_in(), "in"))
        .input(Quantity::new("t", vessel.wall_thickness_in(), "in"))
        .step(Quantity::new("r", vessel.radius_in(), "in"))
}

// =============================================================================
// STRESSES
// =============================================================================

/// Worked form of [`thin_hoop_stress`]
pub fn thin_hoop_stress_derivation(vessel: &Vessel, p: f64) -> Derivation {
    let r = vessel.radius_in();
    let t = vessel.wall_thickness_in();
    let sigma = p * r / t;

    start(Equation::ThinHoopStress, vessel, p).finish(
        format!(
            "sigma_h = {} * {} / {}",
            format_value(p),
            format_value(r),
            format_value(t)
        ),
        Quantity::new("sigma_h", sigma, "psi").with_latex(r"\sigma_h"),
    )
}

/// Hoop (circumferential) stress
///
/// # Formula (Roark's Table 13.1, Case 1c)
/// σ_h = p·r / t
#[inline]
pub fn thin_hoop_stress(vessel: &Vessel, p: f64) -> f64 {
    thin_hoop_stress_derivation(vessel, p).value()
}

/// Worked form of [`thin_longitudinal_stress`]
pub fn thin_longitudinal_stress_derivation(vessel: &Vessel, p: f64) -> Derivation {
    let r = vessel.radius_in();
    let t = vessel.wall_thickness_in();
    let sigma = p * r / (2.0 * t);

    start(Equation::ThinLongitudinalStress, vessel, p).finish(
        format!(
            "sigma_l = {} * {} / (2 * {})",
            format_value(p),
            format_value(r),
            format_value(t)
        ),
        Quantity::new("sigma_l", sigma, "psi").with_latex(r"\sigma_l"),
    )
}

/// Longitudinal (axial) stress, always half the hoop stress
///
/// # Formula (Roark's Table 13.1, Case 1c)
/// σ_l = p·r / (2t)
#[inline]
pub fn thin_longitudinal_stress(vessel: &Vessel, p: f64) -> f64 {
    thin_longitudinal_stress_derivation(vessel, p).value()
}

// =============================================================================
// DEFORMATIONS
// =============================================================================

/// Worked form of [`thin_diameter_reduction`]
pub fn thin_diameter_reduction_derivation(vessel: &Vessel, p: f64) -> CalcResult<Derivation> {
    let e = elastic_modulus(vessel)?;
    let v = vessel.material().poisson_ratio;
    let r = vessel.radius_in();
    let t = vessel.wall_thickness_in();

    let delta = 2.0 * (-(p * r * r) / (e * t) * (1.0 - v / 2.0));

    Ok(start(Equation::ThinDiameterReduction, vessel, p)
        .input(Quantity::new("E", e, "psi"))
        .input(Quantity::new("v", v, ""))
        .finish(
            format!(
                "dD = 2 * [ -({} * {}^2)/({} * {}) * (1 - {}/2) ]",
                format_value(p),
                format_value(r),
                format_value(e),
                format_value(t),
                format_value(v)
            ),
            Quantity::new("dD", delta, "in").with_latex(r"\Delta D"),
        ))
}

/// Change in diameter (negative = reduction)
///
/// # Formula (Roark's Table 13.1, Case 1c)
/// ΔD = 2·[ -(p·r²)/(E·t) · (1 - v/2) ]
///
/// # Errors
/// `DomainError` when E <= 0.
pub fn thin_diameter_reduction(vessel: &Vessel, p: f64) -> CalcResult<f64> {
    thin_diameter_reduction_derivation(vessel, p).map(|d| d.value())
}

/// Worked form of [`thin_length_reduction`]
pub fn thin_length_reduction_derivation(vessel: &Vessel, p: f64) -> CalcResult<Derivation> {
    let e = elastic_modulus(vessel)?;
    let v = vessel.material().poisson_ratio;
    let r = vessel.radius_in();
    let t = vessel.wall_thickness_in();
    let l = vessel.length_in();

    let delta = -(p * r * l) / (e * t) * (0.5 - v);

    Ok(start(Equation::ThinLengthReduction, vessel, p)
        .input(Quantity::new("L", l, "in"))
        .input(Quantity::new("E", e, "psi"))
        .input(Quantity::new("v", v, ""))
        .finish(
            format!(
                "dL = -({} * {} * {})/({} * {}) * (0.5 - {})",
                format_value(p),
                format_value(r),
                format_value(l),
                format_value(e),
                format_value(t),
                format_value(v)
            ),
            Quantity::new("dL", delta, "in").with_latex(r"\Delta L"),
        ))
}

/// Change in length (negative = reduction)
///
/// # Formula (Roark's Table 13.1, Case 1c)
/// ΔL = -(p·r·L)/(E·t) · (0.5 - v)
///
/// # Errors
/// `DomainError` when E <= 0.
pub fn thin_length_reduction(vessel: &Vessel, p: f64) -> CalcResult<f64> {
    thin_length_reduction_derivation(vessel, p).map(|d| d.value())
}

// =============================================================================
// STABILITY
// =============================================================================

/// Worked form of [`thin_critical_buckling_pressure`]
pub fn thin_critical_buckling_pressure_derivation(vessel: &Vessel, mode: u32) -> CalcResult<Derivation> {
    if mode == 0 {
        return Err(CalcError::range(
            "buckling_mode",
            mode.to_string(),
            "Buckling mode must be at least 1",
        ));
    }
    let e = elastic_modulus(vessel)?;
    let v = vessel.material().poisson_ratio;
    let r = vessel.radius_in();
    let t = vessel.wall_thickness_in();
    let l = vessel.length_in();
    let n = f64::from(mode);

    let shape = (PI * r / (n * l)).powi(2);
    let q1 = e * (t / r) / (1.0 + 0.5 * shape);
    let q2 = 1.0 / (n * n * (1.0 + (n * l / (PI * r)).powi(2)).powi(2));
    let q3 = n * n * t * t / (12.0 * r * r * (1.0 - v * v));
    let q4 = (1.0 + shape).powi(2);
    let p_crit = q1 * (q2 + q3 * q4);

    Ok(Derivation::begin(Equation::ThinCriticalBucklingPressure)
        .input(Quantity::new("n", n, ""))
        .input(Quantity::new("D", vessel.diameter_in(), "in"))
        .input(Quantity::new("t", t, "in"))
        .input(Quantity::new("L", l, "in"))
        .input(Quantity::new("E", e, "psi"))
        .input(Quantity::new("v", v, ""))
        .step(Quantity::new("r", r, "in"))
        .step(Quantity::new("q1", q1, "psi").with_latex("q_1"))
        .step(Quantity::new("q2", q2, "").with_latex("q_2"))
        .step(Quantity::new("q3", q3, "").with_latex("q_3"))
        .step(Quantity::new("q4", q4, "").with_latex("q_4"))
        .finish(
            format!(
                "p' = {} * ({} + {} * {})",
                format_value(q1),
                format_value(q2),
                format_value(q3),
                format_value(q4)
            ),
            Quantity::new("p_crit", p_crit, "psi").with_latex("p'"),
        ))
}

/// Elastic critical buckling pressure for lobe mode `n` (n >= 1).
///
/// The caller picks the mode; no search for the governing (lowest) mode is
/// done here.
///
/// # Formula (Roark's Table 15.2, Case 20a)
/// ```text
/// p' = q1·(q2 + q3·q4)
/// q1 = E(t/r) / (1 + ½(πr/nL)²)
/// q2 = 1 / (n²(1 + (nL/πr)²)²)
/// q3 = n²t² / (12r²(1 - v²))
/// q4 = (1 + (πr/nL)²)²
/// ```
///
/// # Errors
/// `RangeError` for mode 0, `DomainError` when E <= 0.
pub fn thin_critical_buckling_pressure(vessel: &Vessel, mode: u32) -> CalcResult<f64> {
    thin_critical_buckling_pressure_derivation(vessel, mode).map(|d| d.value())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::Material;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn test_material() -> Material {
        Material::elastic("test", 10.0e6, 0.3)
    }

    #[test]
    fn test_hoop_stress() {
        let matl = test_material();
        let vessel = Vessel::new("vessel_1", &matl, 10.0, 5.0, 0.1).unwrap();
        assert_abs_diff_eq!(thin_hoop_stress(&vessel, 100.0), 2500.0, epsilon = 1e-9);
    }

    #[test]
    fn test_longitudinal_is_half_hoop() {
        let matl = test_material();
        for (d, t, p) in [(5.0, 0.1, 100.0), (36.0, 0.4, 250.0), (12.0, 0.25, 1234.5)] {
            let vessel = Vessel::new("v", &matl, 10.0, d, t).unwrap();
            let hoop = thin_hoop_stress(&vessel, p);
            assert_eq!(hoop, p * (d / 2.0) / t);
            assert_eq!(thin_longitudinal_stress(&vessel, p), hoop / 2.0);
        }
    }

    #[test]
    fn test_diameter_reduction() {
        let matl = test_material();
        let vessel = Vessel::new("vessel_1", &matl, 10.0, 5.0, 0.1).unwrap();
        let dd = thin_diameter_reduction(&vessel, 100.0).unwrap();
        assert_abs_diff_eq!(dd, -0.0010625, epsilon = 1e-10);
    }

    #[test]
    fn test_length_reduction() {
        let matl = test_material();
        let vessel = Vessel::new("vessel_1", &matl, 10.0, 5.0, 0.1).unwrap();
        let dl = thin_length_reduction(&vessel, 100.0).unwrap();
        assert_abs_diff_eq!(dl, -0.0005, epsilon = 1e-12);
    }

    #[test]
    fn test_critical_buckling_pressure() {
        let matl = test_material();
        let vessel_1 = Vessel::new("vessel_1", &matl, 10.0, 5.0, 0.1).unwrap();
        let vessel_2 = Vessel::new("vessel_2", &matl, 40.0, 36.0, 0.4).unwrap();
        assert_abs_diff_eq!(
            thin_critical_buckling_pressure(&vessel_1, 1).unwrap(),
            44614.12796007,
            epsilon = 1e-6
        );
        assert_abs_diff_eq!(
            thin_critical_buckling_pressure(&vessel_2, 1).unwrap(),
            49422.11933874,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_buckling_mode_zero_rejected() {
        let matl = test_material();
        let vessel = Vessel::new("v", &matl, 10.0, 5.0, 0.1).unwrap();
        let err = thin_critical_buckling_pressure(&vessel, 0).unwrap_err();
        assert_eq!(err.error_code(), "RANGE_ERROR");
    }

    #[test]
    fn test_zero_modulus_rejected() {
        let matl = Material::elastic("no stiffness", 0.0, 0.3);
        let vessel = Vessel::new("v", &matl, 10.0, 5.0, 0.1).unwrap();
        assert!(matches!(
            thin_diameter_reduction(&vessel, 100.0),
            Err(CalcError::DomainError { .. })
        ));
        assert!(thin_length_reduction(&vessel, 100.0).is_err());
        assert!(thin_critical_buckling_pressure(&vessel, 2).is_err());
        // stresses do not read E
        assert_abs_diff_eq!(thin_hoop_stress(&vessel, 100.0), 2500.0, epsilon = 1e-9);
    }

    #[test]
    fn test_buckling_trace_exposes_terms() {
        let matl = test_material();
        let vessel = Vessel::new("v", &matl, 10.0, 5.0, 0.1).unwrap();
        let trace = thin_critical_buckling_pressure_derivation(&vessel, 1).unwrap();

        let q1 = trace.quantity("q1").unwrap();
        let q2 = trace.quantity("q2").unwrap();
        let q3 = trace.quantity("q3").unwrap();
        let q4 = trace.quantity("q4").unwrap();
        assert_relative_eq!(q1 * (q2 + q3 * q4), trace.value(), max_relative = 1e-12);
        assert_eq!(trace.quantity("n"), Some(1.0));
    }

    #[test]
    fn test_hoop_trace_renders() {
        let matl = test_material();
        let vessel = Vessel::new("v", &matl, 10.0, 5.0, 0.1).unwrap();
        let trace = thin_hoop_stress_derivation(&vessel, 100.0);
        assert_eq!(trace.substitution, "sigma_h = 100 * 2.5 / 0.1");
        assert!(trace.to_plain().contains("sigma_h = 2500 psi"));
        assert!(trace.to_latex().contains(r"\sigma_h = \frac{p r}{t}"));
    }
}
