//! # Vessel Analysis
//!
//! Rates one vessel to a design depth: classifies the wall, sweeps hoop and
//! longitudinal stress over the depth range, evaluates the full formula set
//! at the rated pressure and checks yield and (thin walls) buckling.
//!
//! ## Assumptions
//!
//! - Uniform external seawater pressure, gauge (0 psi at the surface)
//! - Capped ends
//! - Linear elastic material; yield is compared against stress magnitude
//! - Buckling mode is the caller's choice; the lowest mode is not searched
//!
//! ## Example
//!
//! ```rust
//! use vessel_core::calculations::analysis::{calculate, AnalysisInput};
//! use vessel_core::materials::builtin_materials;
//!
//! let table = builtin_materials();
//! let input = AnalysisInput::new("Hull", "6061-T6", 10.0, 5.0, 0.1, 300.0);
//!
//! let result = calculate(&input, &table).expect("Calculation should succeed");
//! assert!(result.passes());
//! println!("{}", result.hoop_stress.to_plain());
//! ```

use serde::{Deserialize, Serialize};

use super::sweep::{sweep_stress, StressKind, StressSeries, SweepConfig, SweepPeak, DEFAULT_SAMPLES};
use crate::equations::depth::depth_to_pressure_derivation;
use crate::equations::registry::{Equation, EquationTracker};
use crate::equations::thick_wall::{
    thick_hoop_stress_derivation, thick_hoop_stress_max_derivation,
    thick_inner_diameter_reduction_derivation, thick_length_reduction_derivation,
    thick_longitudinal_stress_derivation, thick_outer_diameter_reduction_derivation,
    thick_radial_stress_derivation, thick_radial_stress_max_derivation,
    thick_shear_stress_derivation,
};
use crate::equations::thin_wall::{
    thin_critical_buckling_pressure_derivation, thin_diameter_reduction_derivation,
    thin_hoop_stress_derivation, thin_length_reduction_derivation,
    thin_longitudinal_stress_derivation,
};
use crate::equations::Derivation;
use crate::errors::{require_positive, CalcError, CalcResult};
use crate::materials::{Material, MaterialTable};
use crate::vessel::{Vessel, WallClass};

/// Input parameters for a vessel analysis.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Hull",
///   "material": "6061-T6",
///   "length_in": 10.0,
///   "diameter_in": 5.0,
///   "wall_thickness_in": 0.1,
///   "max_depth_ft": 300.0,
///   "samples": 30,
///   "wall_percent": 0.0,
///   "buckling_mode": 1
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisInput {
    /// User label for this vessel (e.g., "Hull", "Battery can")
    pub label: String,

    /// Material label, looked up in the material table
    pub material: String,

    /// Overall length in inches
    pub length_in: f64,

    /// Outside diameter in inches
    pub diameter_in: f64,

    /// Wall thickness in inches
    pub wall_thickness_in: f64,

    /// Design (rated) depth in feet of seawater
    pub max_depth_ft: f64,

    /// Requested number of sweep samples
    #[serde(default = "default_samples")]
    pub samples: usize,

    /// Position through a thick wall for hoop/radial/shear stress
    /// (0 = inner surface, 100 = outer surface)
    #[serde(default)]
    pub wall_percent: f64,

    /// Buckling lobe number n (>= 1); only checked for thin-walled vessels
    #[serde(default = "default_buckling_mode")]
    pub buckling_mode: u32,
}

fn default_samples() -> usize {
    DEFAULT_SAMPLES
}

fn default_buckling_mode() -> u32 {
    1
}

impl AnalysisInput {
    /// Input with default sampling, wall position and buckling mode
    pub fn new(
        label: impl Into<String>,
        material: impl Into<String>,
        length_in: f64,
        diameter_in: f64,
        wall_thickness_in: f64,
        max_depth_ft: f64,
    ) -> Self {
        AnalysisInput {
            label: label.into(),
            material: material.into(),
            length_in,
            diameter_in,
            wall_thickness_in,
            max_depth_ft,
            samples: DEFAULT_SAMPLES,
            wall_percent: 0.0,
            buckling_mode: default_buckling_mode(),
        }
    }

    /// Sweep settings implied by this input
    pub fn sweep_config(&self) -> SweepConfig {
        SweepConfig::new(self.max_depth_ft)
            .with_samples(self.samples)
            .with_wall_percent(self.wall_percent)
    }
}

/// Results of a vessel analysis.
///
/// Stresses follow the formula family's sign convention: thin-wall values are
/// positive magnitudes, thick-wall values are negative (compressive).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    // === Vessel ===
    /// Vessel label
    pub label: String,

    /// Material used (copied from the table for the report)
    pub material: Material,

    /// Radius-to-thickness ratio R/t
    pub thickness_ratio: f64,

    /// Length-to-radius ratio L/R
    pub length_ratio: f64,

    /// Formula family
    pub wall_class: WallClass,

    // === Rated Condition ===
    /// Design depth (ft)
    pub rated_depth_ft: f64,

    /// Pressure at the design depth (psi)
    pub rated_pressure: Derivation,

    /// Hoop stress at the rated pressure
    pub hoop_stress: Derivation,

    /// Longitudinal stress at the rated pressure
    pub longitudinal_stress: Derivation,

    /// Diameter change at the rated pressure (outer diameter for thick walls)
    pub diameter_change: Derivation,

    /// Length change at the rated pressure
    pub length_change: Derivation,

    /// Additional thick-wall quantities at the rated pressure (maximum hoop,
    /// radial, maximum radial, shear, inner diameter change); empty for thin
    /// walls
    pub thick_wall_details: Vec<Derivation>,

    // === Depth Sweep ===
    /// Hoop stress across the depth range
    pub hoop_series: StressSeries,

    /// Longitudinal stress across the depth range
    pub longitudinal_series: StressSeries,

    /// Largest-magnitude hoop sample
    pub hoop_peak: SweepPeak,

    /// Largest-magnitude longitudinal sample
    pub longitudinal_peak: SweepPeak,

    // === Checks ===
    /// Thin-wall critical buckling pressure for the requested mode; `None`
    /// for thick walls
    pub buckling: Option<Derivation>,

    /// Whether the buckling formula applies (thin walls only)
    pub buckling_applicable: bool,

    /// max(|hoop peak|, |rated hoop stress|) / Fy
    pub hoop_unity: f64,

    /// max(|longitudinal peak|, |rated longitudinal stress|) / Fy
    pub longitudinal_unity: f64,

    /// Rated pressure / critical buckling pressure (0 for thick walls)
    pub buckling_unity: f64,

    /// Equations used, for the report appendix
    pub equations: EquationTracker,
}

impl AnalysisResult {
    /// True when the hoop stress exceeds yield anywhere up to the rated depth
    pub fn hoop_exceeds_yield(&self) -> bool {
        self.hoop_unity > 1.0
    }

    /// True when the longitudinal stress exceeds yield anywhere up to the
    /// rated depth
    pub fn longitudinal_exceeds_yield(&self) -> bool {
        self.longitudinal_unity > 1.0
    }

    /// True when the rated pressure reaches the buckling pressure of a
    /// thin-walled vessel
    pub fn buckles(&self) -> bool {
        self.buckling_applicable && self.buckling_unity >= 1.0
    }

    /// Check that neither stress yields and a thin wall does not buckle
    pub fn passes(&self) -> bool {
        !self.hoop_exceeds_yield() && !self.longitudinal_exceeds_yield() && !self.buckles()
    }

    /// Get the governing (highest) unity ratio
    pub fn governing_unity(&self) -> f64 {
        let stress = self.hoop_unity.max(self.longitudinal_unity);
        if self.buckling_applicable {
            stress.max(self.buckling_unity)
        } else {
            stress
        }
    }

    /// Get a description of what governs the design
    pub fn governing_condition(&self) -> &'static str {
        if self.buckling_applicable
            && self.buckling_unity >= self.hoop_unity
            && self.buckling_unity >= self.longitudinal_unity
        {
            "Buckling"
        } else if self.hoop_unity >= self.longitudinal_unity {
            "Hoop yield"
        } else {
            "Longitudinal yield"
        }
    }

    /// Rated-pressure derivations in report order
    pub fn derivations(&self) -> Vec<&Derivation> {
        let mut all = vec![
            &self.rated_pressure,
            &self.hoop_stress,
            &self.longitudinal_stress,
            &self.diameter_change,
            &self.length_change,
        ];
        all.extend(self.thick_wall_details.iter());
        all.extend(self.buckling.as_ref());
        all
    }
}

fn governing_peak(series: &StressSeries) -> CalcResult<SweepPeak> {
    series.peak_magnitude().ok_or_else(|| {
        CalcError::range("samples", "0", "Depth sweep produced no samples")
    })
}

/// Sampled depths stop short of the rated depth, so the rated value is
/// checked alongside the sweep peak.
fn unity(peak: &SweepPeak, rated: &Derivation, fy: f64) -> f64 {
    peak.value_psi.abs().max(rated.value().abs()) / fy
}

/// Analyze a vessel at its design depth.
///
/// # Arguments
///
/// * `input` - Geometry, material label, depth range and options
/// * `table` - Material table the label is looked up in
///
/// # Returns
///
/// * `Ok(AnalysisResult)` - Derivations, sweeps and checks
/// * `Err(CalcError)` - Unknown material, invalid geometry or range
///
/// # Example
///
/// ```rust
/// use vessel_core::calculations::analysis::{calculate, AnalysisInput};
/// use vessel_core::materials::builtin_materials;
/// use vessel_core::vessel::WallClass;
///
/// let table = builtin_materials();
/// let mut input = AnalysisInput::new("Can", "316L", 12.0, 4.0, 0.5, 1000.0);
/// input.wall_percent = 50.0;
///
/// let result = calculate(&input, &table).unwrap();
/// assert_eq!(result.wall_class, WallClass::Thick);
/// assert!(!result.buckling_applicable);
/// assert_eq!(result.thick_wall_details.len(), 5);
/// ```
pub fn calculate(input: &AnalysisInput, table: &MaterialTable) -> CalcResult<AnalysisResult> {
    let matl = table.lookup(&input.material)?;
    require_positive("fy_psi", matl.fy_psi, "Yield strength must be positive")?;

    let vessel = Vessel::new(
        &input.label,
        matl,
        input.length_in,
        input.diameter_in,
        input.wall_thickness_in,
    )?;
    let wall_class = vessel.wall_class();
    let label = vessel.label();

    let mut equations = EquationTracker::new();
    equations.record(Equation::ThicknessRatio, "Wall classification", label);
    equations.record(Equation::LengthRatio, "Geometry", label);

    // === Depth sweep ===
    let config = input.sweep_config();
    let hoop_series = sweep_stress(&vessel, StressKind::Hoop, &config)?;
    let longitudinal_series = sweep_stress(&vessel, StressKind::Longitudinal, &config)?;
    equations.record(Equation::DepthToPressure, "Depth sweep", label);
    equations.record(StressKind::Hoop.equation(wall_class), "Depth sweep", label);
    equations.record(StressKind::Longitudinal.equation(wall_class), "Depth sweep", label);

    let hoop_peak = governing_peak(&hoop_series)?;
    let longitudinal_peak = governing_peak(&longitudinal_series)?;

    // === Rated condition ===
    let rated_pressure = depth_to_pressure_derivation(input.max_depth_ft);
    let p = rated_pressure.value();

    let (hoop_stress, longitudinal_stress, diameter_change, length_change, thick_wall_details) =
        match wall_class {
            WallClass::Thin => (
                thin_hoop_stress_derivation(&vessel, p),
                thin_longitudinal_stress_derivation(&vessel, p),
                thin_diameter_reduction_derivation(&vessel, p)?,
                thin_length_reduction_derivation(&vessel, p)?,
                Vec::new(),
            ),
            WallClass::Thick => (
                thick_hoop_stress_derivation(&vessel, p, input.wall_percent)?,
                thick_longitudinal_stress_derivation(&vessel, p)?,
                thick_outer_diameter_reduction_derivation(&vessel, p)?,
                thick_length_reduction_derivation(&vessel, p)?,
                vec![
                    thick_hoop_stress_max_derivation(&vessel, p)?,
                    thick_radial_stress_derivation(&vessel, p, input.wall_percent)?,
                    thick_radial_stress_max_derivation(&vessel, p)?,
                    thick_shear_stress_derivation(&vessel, p, input.wall_percent)?,
                    thick_inner_diameter_reduction_derivation(&vessel, p)?,
                ],
            ),
        };

    for trace in [&rated_pressure, &hoop_stress, &longitudinal_stress, &diameter_change, &length_change]
        .into_iter()
        .chain(thick_wall_details.iter())
    {
        equations.record(trace.equation, "Rated depth", label);
    }

    // === Stability ===
    let buckling_applicable = wall_class == WallClass::Thin;
    let buckling = if buckling_applicable {
        equations.record(Equation::ThinCriticalBucklingPressure, "Stability", label);
        Some(thin_critical_buckling_pressure_derivation(&vessel, input.buckling_mode)?)
    } else {
        None
    };
    let buckling_unity = buckling.as_ref().map_or(0.0, |b| p / b.value());

    let fy = matl.fy_psi;

    Ok(AnalysisResult {
        label: label.to_string(),
        material: matl.clone(),
        thickness_ratio: vessel.thickness_ratio(),
        length_ratio: vessel.length_ratio(),
        wall_class,
        rated_depth_ft: input.max_depth_ft,
        hoop_unity: unity(&hoop_peak, &hoop_stress, fy),
        longitudinal_unity: unity(&longitudinal_peak, &longitudinal_stress, fy),
        buckling_unity,
        rated_pressure,
        hoop_stress,
        longitudinal_stress,
        diameter_change,
        length_change,
        thick_wall_details,
        hoop_series,
        longitudinal_series,
        hoop_peak,
        longitudinal_peak,
        buckling,
        buckling_applicable,
        equations,
    })
}
