//! # Vessel
//!
//! A closed cylinder with capped ends under uniform external pressure.
//!
//! The vessel borrows its [`Material`]; it never copies or owns the
//! material's fields. Geometry is validated once at construction and the
//! fields are read-only afterwards.
//!
//! ## Example
//!
//! ```rust
//! use vessel_core::materials::Material;
//! use vessel_core::vessel::{Vessel, WallClass};
//!
//! let al = Material::elastic("6061-T6", 10.0e6, 0.33);
//! let hull = Vessel::new("Hull", &al, 10.0, 5.0, 0.1).unwrap();
//!
//! assert_eq!(hull.thickness_ratio(), 25.0);
//! assert_eq!(hull.wall_class(), WallClass::Thin);
//! assert_eq!(hull.length_ratio(), 4.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{require_positive, CalcResult};
use crate::materials::Material;

/// Radius-to-thickness ratio at and above which a wall counts as thin.
pub const THIN_WALL_RATIO: f64 = 10.0;

/// Which closed-form family applies to a vessel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WallClass {
    /// R/t >= 10
    Thin,
    /// R/t < 10
    Thick,
}

impl WallClass {
    /// Classify a radius-to-thickness ratio
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= THIN_WALL_RATIO {
            WallClass::Thin
        } else {
            WallClass::Thick
        }
    }

    /// Display name for reports
    pub fn display_name(&self) -> &'static str {
        match self {
            WallClass::Thin => "thin-walled",
            WallClass::Thick => "thick-walled",
        }
    }
}

impl std::fmt::Display for WallClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Cylindrical pressure vessel geometry plus its material.
///
/// All dimensions are in inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Vessel<'m> {
    label: &'m str,
    #[serde(rename = "material")]
    matl: &'m Material,
    length_in: f64,
    diameter_in: f64,
    wall_thickness_in: f64,
}

impl<'m> Vessel<'m> {
    /// Build a vessel, rejecting non-positive geometry.
    ///
    /// # Errors
    ///
    /// `CalcError::DomainError` when length, diameter or wall thickness is
    /// not strictly positive.
    pub fn new(
        label: &'m str,
        matl: &'m Material,
        length_in: f64,
        diameter_in: f64,
        wall_thickness_in: f64,
    ) -> CalcResult<Self> {
        require_positive("length_in", length_in, "Length must be positive")?;
        require_positive("diameter_in", diameter_in, "Diameter must be positive")?;
        require_positive("wall_thickness_in", wall_thickness_in, "Wall thickness must be positive")?;

        Ok(Vessel {
            label,
            matl,
            length_in,
            diameter_in,
            wall_thickness_in,
        })
    }

    /// User label (e.g., "Hull", "Battery can")
    pub fn label(&self) -> &'m str {
        self.label
    }

    /// The material this vessel is made of
    pub fn material(&self) -> &'m Material {
        self.matl
    }

    /// Overall length L (in)
    pub fn length_in(&self) -> f64 {
        self.length_in
    }

    /// Outside diameter D (in)
    pub fn diameter_in(&self) -> f64 {
        self.diameter_in
    }

    /// Wall thickness t (in)
    pub fn wall_thickness_in(&self) -> f64 {
        self.wall_thickness_in
    }

    /// Outside radius D/2 (in)
    pub fn radius_in(&self) -> f64 {
        self.diameter_in / 2.0
    }

    /// Radius-to-thickness ratio R/t
    pub fn thickness_ratio(&self) -> f64 {
        self.radius_in() / self.wall_thickness_in
    }

    /// Length-to-radius ratio L/R
    pub fn length_ratio(&self) -> f64 {
        self.length_in / self.radius_in()
    }

    /// Thin or thick, by [`THIN_WALL_RATIO`]
    pub fn wall_class(&self) -> WallClass {
        WallClass::from_ratio(self.thickness_ratio())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thickness_ratio() {
        let matl = Material::default();
        let vessel_1 = Vessel::new("vessel_1", &matl, 10.0, 5.0, 0.1).unwrap();
        let vessel_2 = Vessel::new("vessel_2", &matl, 40.0, 36.0, 0.1).unwrap();
        assert_eq!(vessel_1.thickness_ratio(), 25.0);
        assert_eq!(vessel_2.thickness_ratio(), 180.0);
    }

    #[test]
    fn test_length_ratio() {
        let matl = Material::default();
        let vessel_1 = Vessel::new("vessel_1", &matl, 10.0, 5.0, 0.1).unwrap();
        let vessel_2 = Vessel::new("vessel_2", &matl, 40.0, 16.0, 0.1).unwrap();
        assert_eq!(vessel_1.length_ratio(), 4.0);
        assert_eq!(vessel_2.length_ratio(), 5.0);
    }

    #[test]
    fn test_classification_boundary() {
        let matl = Material::default();
        // R/t = 10 exactly
        let at_limit = Vessel::new("limit", &matl, 10.0, 20.0, 1.0).unwrap();
        assert_eq!(at_limit.thickness_ratio(), 10.0);
        assert_eq!(at_limit.wall_class(), WallClass::Thin);

        assert_eq!(WallClass::from_ratio(9.999), WallClass::Thick);
        assert_eq!(WallClass::from_ratio(10.0), WallClass::Thin);
    }

    #[test]
    fn test_invalid_geometry() {
        let matl = Material::default();
        assert!(Vessel::new("v", &matl, 10.0, 5.0, 0.0).is_err());
        assert!(Vessel::new("v", &matl, 10.0, -5.0, 0.1).is_err());
        assert!(Vessel::new("v", &matl, 0.0, 5.0, 0.1).is_err());
        assert!(Vessel::new("v", &matl, 10.0, f64::NAN, 0.1).is_err());

        let err = Vessel::new("v", &matl, 10.0, 5.0, -0.1).unwrap_err();
        assert_eq!(err.error_code(), "DOMAIN_ERROR");
    }

    #[test]
    fn test_borrows_material() {
        let matl = Material::elastic("6061-T6", 10.0e6, 0.33);
        let vessel = Vessel::new("v", &matl, 10.0, 5.0, 0.1).unwrap();
        assert!(std::ptr::eq(vessel.material(), &matl));
    }

    #[test]
    fn test_display_names() {
        assert_eq!(WallClass::Thin.to_string(), "thin-walled");
        assert_eq!(WallClass::Thick.to_string(), "thick-walled");
    }
}
