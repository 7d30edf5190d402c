//! # Materials
//!
//! Mechanical property records for vessel materials and the table that
//! holds them.
//!
//! A [`Material`] is plain data. It is built once per table row through an
//! explicit parse-and-validate step ([`Material::from_row`]) and never
//! mutated afterwards; a [`Vessel`](crate::vessel::Vessel) only borrows it.
//!
//! ## Example
//!
//! ```rust
//! use vessel_core::materials::{Material, MaterialTable};
//!
//! let csv = "\
//! label,type,category,spec,spec_number,DIN_num,density,fy,fu,E,G,v,elongation,area_reduc
//! 6061-T6,Aluminum,metal,UNS,A96061,3.3211,0.098,35000,42000,10000000,3800000,0.33,12,0
//! ";
//! let table = MaterialTable::from_csv_str(csv).unwrap();
//! let al: &Material = table.lookup("6061-T6").unwrap();
//! assert_eq!(al.fy_psi, 35_000.0);
//! ```

pub mod table;

pub use table::{builtin_materials, MaterialTable};

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::{CalcError, CalcResult};

/// Column names of a material table row, in order.
pub const MATERIAL_COLUMNS: [&str; 14] = [
    "label",
    "type",
    "category",
    "spec",
    "spec_number",
    "DIN_num",
    "density",
    "fy",
    "fu",
    "E",
    "G",
    "v",
    "elongation",
    "area_reduc",
];

/// Mechanical properties of one material.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "6061-T6",
///   "material_type": "Aluminum",
///   "category": "metal",
///   "spec": "UNS",
///   "spec_number": "A96061",
///   "din_number": "3.3211",
///   "density_lb_in3": 0.098,
///   "fy_psi": 35000.0,
///   "fu_psi": 42000.0,
///   "e_psi": 10000000.0,
///   "g_psi": 3800000.0,
///   "poisson_ratio": 0.33,
///   "elongation_pct": 12.0,
///   "area_reduction_pct": 0.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Material {
    /// Display name, unique within a table (e.g., "6061-T6")
    pub label: String,
    /// Material family (e.g., "Aluminum", "Steel")
    pub material_type: String,
    /// Broad class (e.g., "metal")
    pub category: String,
    /// Specification body (informational)
    pub spec: String,
    /// Specification number (informational)
    pub spec_number: String,
    /// DIN material number (informational)
    pub din_number: String,
    /// Density (lb/in³)
    pub density_lb_in3: f64,
    /// Yield strength Fy (psi)
    pub fy_psi: f64,
    /// Ultimate strength Fu (psi)
    pub fu_psi: f64,
    /// Modulus of elasticity E (psi)
    pub e_psi: f64,
    /// Shear modulus G (psi)
    pub g_psi: f64,
    /// Poisson's ratio v, meaningful in (0, 0.5)
    pub poisson_ratio: f64,
    /// Elongation at break (%)
    pub elongation_pct: f64,
    /// Reduction of area (%)
    pub area_reduction_pct: f64,
}

impl Material {
    /// Material with only the elastic constants set.
    ///
    /// Handy for hand calculations where only E and v matter.
    pub fn elastic(label: impl Into<String>, e_psi: f64, poisson_ratio: f64) -> Self {
        Material {
            label: label.into(),
            e_psi,
            poisson_ratio,
            ..Default::default()
        }
    }

    /// Builder-style yield strength
    pub fn with_yield(mut self, fy_psi: f64) -> Self {
        self.fy_psi = fy_psi;
        self
    }

    /// Parse one table row into a typed record.
    ///
    /// `fields` must hold the 14 columns of [`MATERIAL_COLUMNS`] in order.
    /// `line` is only used for error reporting (1-based, header is line 1).
    ///
    /// Numeric columns must be finite and non-negative.
    pub fn from_row(fields: &[&str], line: usize) -> CalcResult<Self> {
        if fields.len() != MATERIAL_COLUMNS.len() {
            return Err(CalcError::parse(
                line,
                "*",
                format!(
                    "expected {} columns, found {}",
                    MATERIAL_COLUMNS.len(),
                    fields.len()
                ),
            ));
        }

        let text = |idx: usize| fields[idx].trim().to_string();
        let number = |idx: usize| parse_property(fields[idx], line, MATERIAL_COLUMNS[idx]);

        let label = text(0);
        if label.is_empty() {
            return Err(CalcError::parse(line, "label", "label must not be empty"));
        }

        Ok(Material {
            label,
            material_type: text(1),
            category: text(2),
            spec: text(3),
            spec_number: text(4),
            din_number: text(5),
            density_lb_in3: number(6)?,
            fy_psi: number(7)?,
            fu_psi: number(8)?,
            e_psi: number(9)?,
            g_psi: number(10)?,
            poisson_ratio: number(11)?,
            elongation_pct: number(12)?,
            area_reduction_pct: number(13)?,
        })
    }
}

/// Parse a numeric property column.
fn parse_property(raw: &str, line: usize, column: &str) -> CalcResult<f64> {
    let trimmed = raw.trim();
    let value = f64::from_str(trimmed).map_err(|_| {
        CalcError::parse(line, column, format!("expected a number, got '{}'", trimmed))
    })?;
    if !value.is_finite() {
        return Err(CalcError::parse(line, column, "value must be finite"));
    }
    if value < 0.0 {
        return Err(CalcError::parse(line, column, format!("value must be non-negative, got {}", value)));
    }
    Ok(value)
}
