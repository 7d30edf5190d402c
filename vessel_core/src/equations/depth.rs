//! # Depth/Pressure Conversion
//!
//! Linear seawater law: one atmosphere (14.7 psi) per 33 ft.
//!
//! Pressures are gauge: depth 0 reads 0 psi, not 14.7. Both directions are
//! exact algebraic inverses.

use super::registry::Equation;
use super::trace::{format_value, Derivation, Quantity};

/// Pressure of one standard atmosphere (psi)
pub const PSI_PER_ATMOSPHERE: f64 = 14.7;

/// Depth of seawater producing one atmosphere (ft)
pub const FT_SEAWATER_PER_ATMOSPHERE: f64 = 33.0;

/// Gauge pressure (psi) at `depth_ft` feet of seawater.
///
/// # Formula
/// p = 14.7 (d / 33)
#[inline]
pub fn depth_to_pressure(depth_ft: f64) -> f64 {
    PSI_PER_ATMOSPHERE * (depth_ft / FT_SEAWATER_PER_ATMOSPHERE)
}

/// Seawater depth (ft) producing a gauge pressure of `pressure_psi`.
///
/// # Formula
/// d = 33 (p / 14.7)
#[inline]
pub fn pressure_to_depth(pressure_psi: f64) -> f64 {
    FT_SEAWATER_PER_ATMOSPHERE * (pressure_psi / PSI_PER_ATMOSPHERE)
}

/// Worked form of [`depth_to_pressure`]
pub fn depth_to_pressure_derivation(depth_ft: f64) -> Derivation {
    let p = depth_to_pressure(depth_ft);
    Derivation::begin(Equation::DepthToPressure)
        .input(Quantity::new("d", depth_ft, "ft"))
        .finish(
            format!("p = 14.7 * ({} / 33)", format_value(depth_ft)),
            Quantity::new("p", p, "psi"),
        )
}

/// Worked form of [`pressure_to_depth`]
pub fn pressure_to_depth_derivation(pressure_psi: f64) -> Derivation {
    let d = pressure_to_depth(pressure_psi);
    Derivation::begin(Equation::PressureToDepth)
        .input(Quantity::new("p", pressure_psi, "psi"))
        .finish(
            format!("d = 33 * ({} / 14.7)", format_value(pressure_psi)),
            Quantity::new("d", d, "ft"),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_depth_to_pressure() {
        assert_abs_diff_eq!(depth_to_pressure(100.0), 44.545454545454, epsilon = 1e-8);
        assert_abs_diff_eq!(depth_to_pressure(33.0), 14.7, epsilon = 1e-12);
    }

    #[test]
    fn test_surface_is_zero_gauge() {
        assert_eq!(depth_to_pressure(0.0), 0.0);
        assert_eq!(pressure_to_depth(0.0), 0.0);
    }

    #[test]
    fn test_pressure_to_depth() {
        assert_abs_diff_eq!(pressure_to_depth(100.0), 224.489795918367, epsilon = 1e-8);
    }

    #[test]
    fn test_round_trip() {
        for d in [0.5, 1.0, 17.0, 100.0, 3280.0, 36_000.0] {
            assert_abs_diff_eq!(pressure_to_depth(depth_to_pressure(d)), d, epsilon = 1e-8);
        }
    }

    #[test]
    fn test_derivation_matches_value() {
        let trace = depth_to_pressure_derivation(100.0);
        assert_eq!(trace.value(), depth_to_pressure(100.0));
        assert_eq!(trace.quantity("d"), Some(100.0));
        assert!(trace.substitution.contains("100 / 33"));

        let back = pressure_to_depth_derivation(trace.value());
        assert_eq!(back.equation, Equation::PressureToDepth);
        assert_abs_diff_eq!(back.value(), 100.0, epsilon = 1e-10);
    }
}
