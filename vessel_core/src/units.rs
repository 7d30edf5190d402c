//! # Unit Conversion
//!
//! Scalar converters between US customary and SI units, plus lightweight
//! stress newtypes for display code.
//!
//! The engine itself works in US customary units throughout:
//! - Length: inches (geometry), feet (depth)
//! - Stress and pressure: pounds per square inch (psi)
//! - Density: pounds per cubic inch (lb/in³)
//!
//! ## Density naming
//!
//! [`lb_per_in3_to_kg_per_mm3`] and [`cubic_in_to_cubic_mm`] are NOT
//! interchangeable. The first multiplies by `25.4² / 2.2` (a squared-length
//! factor over lb->kg), even though its name reads like a volumetric density
//! conversion. The second is the true cubic factor `25.4³`. Both are kept
//! as-is; pick the one whose constant you actually need.
//!
//! ## Example
//!
//! ```rust
//! use vessel_core::units::{psi_to_mpa, MPa, Psi};
//!
//! assert!((psi_to_mpa(145_040.0) - 1000.0).abs() < 1e-9);
//!
//! let fy: MPa = Psi(35_000.0).into();
//! assert!((fy.0 - 241.3).abs() < 0.1);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// psi per MPa
pub const PSI_PER_MPA: f64 = 145.04;

/// Millimeters per inch
pub const MM_PER_IN: f64 = 25.4;

/// Pounds per kilogram, as used by the density converter
pub const LB_PER_KG: f64 = 2.2;

/// Convert stress from psi to MPa.
#[inline]
pub fn psi_to_mpa(stress: f64) -> f64 {
    stress / PSI_PER_MPA
}

/// Multiply by `25.4² / 2.2`.
///
/// Despite the name this is not a volumetric density conversion; see the
/// module docs. Use [`cubic_in_to_cubic_mm`] for the cubic factor.
#[inline]
pub fn lb_per_in3_to_kg_per_mm3(density: f64) -> f64 {
    density * (MM_PER_IN.powi(2) / LB_PER_KG)
}

/// Convert a volume from in³ to mm³ (`x · 25.4³`).
#[inline]
pub fn cubic_in_to_cubic_mm(x: f64) -> f64 {
    x * MM_PER_IN.powi(3)
}

// ============================================================================
// Stress Units
// ============================================================================

/// Stress in pounds per square inch (psi)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Psi(pub f64);

/// Stress in megapascals (MPa)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MPa(pub f64);

impl From<Psi> for MPa {
    fn from(psi: Psi) -> Self {
        MPa(psi_to_mpa(psi.0))
    }
}

impl From<MPa> for Psi {
    fn from(mpa: MPa) -> Self {
        Psi(mpa.0 * PSI_PER_MPA)
    }
}

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Magnitude, dropping the compressive sign
            pub fn abs(self) -> Self {
                Self(self.0.abs())
            }
        }
    };
}

impl_arithmetic!(Psi);
impl_arithmetic!(MPa);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_psi_to_mpa() {
        assert_abs_diff_eq!(psi_to_mpa(145_040.0), 1000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_density_converter_constant() {
        // 0.1 · 645.16 / 2.2
        assert_abs_diff_eq!(lb_per_in3_to_kg_per_mm3(0.1), 29.325_454_545_4, epsilon = 1e-8);
    }

    #[test]
    fn test_cubic_in_to_cubic_mm() {
        assert_eq!(cubic_in_to_cubic_mm(0.1), 0.1 * 25.4_f64.powi(3));
        assert_abs_diff_eq!(cubic_in_to_cubic_mm(1.0), 16_387.064, epsilon = 1e-6);
    }

    #[test]
    fn test_density_converters_differ() {
        let x = 0.1;
        assert!((lb_per_in3_to_kg_per_mm3(x) - cubic_in_to_cubic_mm(x)).abs() > 1.0);
    }

    #[test]
    fn test_stress_newtypes() {
        let mpa: MPa = Psi(14_504.0).into();
        assert_abs_diff_eq!(mpa.0, 100.0, epsilon = 1e-9);

        let back: Psi = mpa.into();
        assert_abs_diff_eq!(back.0, 14_504.0, epsilon = 1e-9);

        assert_eq!((Psi(-300.0) + Psi(100.0)).abs(), Psi(200.0));
        assert_eq!((Psi(50.0) * 2.0).value(), 100.0);
    }

    #[test]
    fn test_serialization() {
        let s = Psi(1250.0);
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, "1250.0");
        let roundtrip: Psi = serde_json::from_str(&json).unwrap();
        assert_eq!(s, roundtrip);
    }
}
