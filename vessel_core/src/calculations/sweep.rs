//! # Depth Sweep
//!
//! Evaluates one stress over a range of depths for plotting, and finds the
//! governing sample.
//!
//! The depth, pressure and stress sequences of a [`StressSeries`] are built
//! in a single pass, so they always have the same length and order.
//!
//! ## Example
//!
//! ```rust
//! use vessel_core::calculations::sweep::{sweep_stress, StressKind, SweepConfig};
//! use vessel_core::materials::Material;
//! use vessel_core::vessel::Vessel;
//!
//! let matl = Material::elastic("test", 10.0e6, 0.3);
//! let vessel = Vessel::new("Hull", &matl, 10.0, 5.0, 0.1).unwrap();
//!
//! let series = sweep_stress(&vessel, StressKind::Hoop, &SweepConfig::new(300.0)).unwrap();
//! assert_eq!(series.depths_ft[0], 1.0);
//! assert_eq!(series.depths_ft.len(), series.values_psi.len());
//!
//! let peak = series.peak().unwrap();
//! assert_eq!(peak.depth_ft, *series.depths_ft.last().unwrap());
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::{
    depth_to_pressure, thick_hoop_stress, thick_longitudinal_stress, thin_hoop_stress,
    thin_longitudinal_stress, Equation,
};
use crate::errors::{CalcError, CalcResult};
use crate::vessel::{Vessel, WallClass};

/// Default number of samples requested from a sweep
pub const DEFAULT_SAMPLES: usize = 30;

/// Which stress a sweep evaluates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StressKind {
    /// Circumferential stress
    Hoop,
    /// Axial stress
    Longitudinal,
}

impl StressKind {
    /// Display name for reports
    pub fn display_name(&self) -> &'static str {
        match self {
            StressKind::Hoop => "Hoop",
            StressKind::Longitudinal => "Longitudinal",
        }
    }

    /// Registry key of the formula used for this stress on a given wall class
    pub fn equation(&self, wall_class: WallClass) -> Equation {
        match (self, wall_class) {
            (StressKind::Hoop, WallClass::Thin) => Equation::ThinHoopStress,
            (StressKind::Hoop, WallClass::Thick) => Equation::ThickHoopStress,
            (StressKind::Longitudinal, WallClass::Thin) => Equation::ThinLongitudinalStress,
            (StressKind::Longitudinal, WallClass::Thick) => Equation::ThickLongitudinalStress,
        }
    }
}

/// Depth range and resolution of a sweep.
///
/// ## JSON Example
///
/// ```json
/// {
///   "max_depth_ft": 300.0,
///   "samples": 30,
///   "wall_percent": 0.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Deepest depth of interest (ft), at least 1
    pub max_depth_ft: f64,

    /// Requested number of samples (the actual count depends on rounding)
    #[serde(default = "default_samples")]
    pub samples: usize,

    /// Position through the wall for thick-wall hoop stress
    /// (0 = inner surface, 100 = outer surface)
    #[serde(default)]
    pub wall_percent: f64,
}

fn default_samples() -> usize {
    DEFAULT_SAMPLES
}

impl SweepConfig {
    /// Sweep to `max_depth_ft` with the default sample count, evaluated at
    /// the inner surface
    pub fn new(max_depth_ft: f64) -> Self {
        SweepConfig {
            max_depth_ft,
            samples: DEFAULT_SAMPLES,
            wall_percent: 0.0,
        }
    }

    /// Builder-style sample count
    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    /// Builder-style wall position
    pub fn with_wall_percent(mut self, wall_percent: f64) -> Self {
        self.wall_percent = wall_percent;
        self
    }
}

/// Integer depths from 1 ft toward `max_depth_ft`.
///
/// The step is `max(1, round((max_depth_ft + 1) / samples))` and the
/// sequence stops before `round(max_depth_ft + 1)`, so it is strictly
/// increasing and never empty.
///
/// # Errors
///
/// `RangeError` when `max_depth_ft < 1` (or NaN/infinite) or `samples == 0`.
pub fn depth_samples(max_depth_ft: f64, samples: usize) -> CalcResult<Vec<f64>> {
    if max_depth_ft.is_nan() || max_depth_ft < 1.0 || max_depth_ft.is_infinite() {
        return Err(CalcError::range(
            "max_depth_ft",
            max_depth_ft.to_string(),
            "Maximum depth must be at least 1 ft",
        ));
    }
    if samples == 0 {
        return Err(CalcError::range("samples", "0", "Sample count must be at least 1"));
    }

    let end = (max_depth_ft + 1.0).round();
    let step = ((max_depth_ft + 1.0) / samples as f64).round().max(1.0);

    let mut depths = Vec::with_capacity(((end - 1.0) / step).ceil() as usize);
    let mut depth = 1.0;
    while depth < end {
        depths.push(depth);
        depth += step;
    }
    Ok(depths)
}

/// Sample with the governing value in a series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepPeak {
    /// Position in the series
    pub index: usize,
    /// Depth at the sample (ft)
    pub depth_ft: f64,
    /// Pressure at the sample (psi)
    pub pressure_psi: f64,
    /// Stress at the sample (psi), sign preserved
    pub value_psi: f64,
}

/// Stress values across a depth sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StressSeries {
    /// Which stress was evaluated
    pub kind: StressKind,
    /// Formula family used
    pub wall_class: WallClass,
    /// Depth samples (ft)
    pub depths_ft: Vec<f64>,
    /// Pressure at each depth (psi)
    pub pressures_psi: Vec<f64>,
    /// Stress at each pressure (psi)
    pub values_psi: Vec<f64>,
}

impl StressSeries {
    /// Number of samples
    pub fn len(&self) -> usize {
        self.values_psi.len()
    }

    /// Check if the series has no samples
    pub fn is_empty(&self) -> bool {
        self.values_psi.is_empty()
    }

    fn sample(&self, index: usize) -> SweepPeak {
        SweepPeak {
            index,
            depth_ft: self.depths_ft[index],
            pressure_psi: self.pressures_psi[index],
            value_psi: self.values_psi[index],
        }
    }

    /// Numeric maximum over the whole series (first occurrence on ties).
    pub fn peak(&self) -> Option<SweepPeak> {
        self.index_of_max(|v| v).map(|idx| self.sample(idx))
    }

    /// Sample with the largest magnitude.
    ///
    /// For compressive (negative) thick-wall series this is the governing
    /// sample, while [`peak`](Self::peak) is the least compressive one.
    pub fn peak_magnitude(&self) -> Option<SweepPeak> {
        self.index_of_max(f64::abs).map(|idx| self.sample(idx))
    }

    /// True when the largest magnitude in the series is above `fy_psi`.
    pub fn exceeds_yield(&self, fy_psi: f64) -> bool {
        self.peak_magnitude()
            .is_some_and(|peak| peak.value_psi.abs() > fy_psi)
    }

    fn index_of_max(&self, key: impl Fn(f64) -> f64) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (idx, &value) in self.values_psi.iter().enumerate() {
            let k = key(value);
            match best {
                Some((_, best_k)) if k <= best_k => {}
                _ => best = Some((idx, k)),
            }
        }
        best.map(|(idx, _)| idx)
    }
}

/// Sweep one stress over `config`'s depth range.
///
/// The thin or thick formula is picked from the vessel's wall class.
///
/// # Errors
///
/// `RangeError` for an invalid depth range, sample count or wall position;
/// `DomainError` for a thick wall with no bore.
pub fn sweep_stress(vessel: &Vessel, kind: StressKind, config: &SweepConfig) -> CalcResult<StressSeries> {
    let depths_ft = depth_samples(config.max_depth_ft, config.samples)?;
    let wall_class = vessel.wall_class();

    let mut pressures_psi = Vec::with_capacity(depths_ft.len());
    let mut values_psi = Vec::with_capacity(depths_ft.len());

    for &depth in &depths_ft {
        let p = depth_to_pressure(depth);
        let value = match (kind, wall_class) {
            (StressKind::Hoop, WallClass::Thin) => thin_hoop_stress(vessel, p),
            (StressKind::Longitudinal, WallClass::Thin) => thin_longitudinal_stress(vessel, p),
            (StressKind::Hoop, WallClass::Thick) => thick_hoop_stress(vessel, p, config.wall_percent)?,
            (StressKind::Longitudinal, WallClass::Thick) => thick_longitudinal_stress(vessel, p)?,
        };
        pressures_psi.push(p);
        values_psi.push(value);
    }

    Ok(StressSeries {
        kind,
        wall_class,
        depths_ft,
        pressures_psi,
        values_psi,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::Material;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_depth_samples_step() {
        // step = round(301 / 30) = 10, end = 301
        let depths = depth_samples(300.0, 30).unwrap();
        assert_eq!(depths.len(), 30);
        assert_eq!(depths[0], 1.0);
        assert_eq!(depths[1], 11.0);
        assert_eq!(*depths.last().unwrap(), 291.0);
    }

    #[test]
    fn test_depth_samples_small_range() {
        // step rounds to 0, clamped to 1
        assert_eq!(depth_samples(5.0, 30).unwrap(), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(depth_samples(1.0, 30).unwrap(), vec![1.0]);
        // end = round(2.6) = 3
        assert_eq!(depth_samples(1.6, 1).unwrap(), vec![1.0]);
    }

    #[test]
    fn test_depth_samples_strictly_increasing() {
        for (max_depth, samples) in [(10.0, 3), (999.5, 7), (12_000.0, 30), (47.0, 100)] {
            let depths = depth_samples(max_depth, samples).unwrap();
            assert!(!depths.is_empty());
            assert!(depths.windows(2).all(|w| w[1] > w[0]));
            assert!(depths.iter().all(|d| d.fract() == 0.0 && *d <= (max_depth + 1.0).round()));
        }
    }

    #[test]
    fn test_depth_samples_invalid() {
        for bad in [0.99, 0.0, -10.0, f64::NAN, f64::INFINITY] {
            let err = depth_samples(bad, 30).unwrap_err();
            assert_eq!(err.error_code(), "RANGE_ERROR");
        }
        assert!(depth_samples(100.0, 0).is_err());
    }

    #[test]
    fn test_thin_sweep_aligned() {
        let matl = Material::elastic("test", 10.0e6, 0.3);
        let vessel = Vessel::new("v", &matl, 10.0, 5.0, 0.1).unwrap();
        let series = sweep_stress(&vessel, StressKind::Hoop, &SweepConfig::new(300.0)).unwrap();

        assert_eq!(series.wall_class, WallClass::Thin);
        assert_eq!(series.depths_ft.len(), series.pressures_psi.len());
        assert_eq!(series.pressures_psi.len(), series.values_psi.len());
        for i in 0..series.len() {
            assert_eq!(series.pressures_psi[i], depth_to_pressure(series.depths_ft[i]));
            assert_eq!(series.values_psi[i], thin_hoop_stress(&vessel, series.pressures_psi[i]));
        }
    }

    #[test]
    fn test_thin_peak_is_deepest() {
        let matl = Material::elastic("test", 10.0e6, 0.3);
        let vessel = Vessel::new("v", &matl, 10.0, 5.0, 0.1).unwrap();
        let series = sweep_stress(&vessel, StressKind::Longitudinal, &SweepConfig::new(300.0)).unwrap();

        let peak = series.peak().unwrap();
        assert_eq!(peak.index, series.len() - 1);
        assert_eq!(peak.depth_ft, 291.0);
        assert_eq!(peak.value_psi, series.values_psi.iter().cloned().fold(f64::MIN, f64::max));
        assert_eq!(series.peak_magnitude(), Some(peak));
    }

    #[test]
    fn test_thick_peak_vs_magnitude() {
        let matl = Material::elastic("test", 10.0e6, 0.3);
        let vessel = Vessel::new("v", &matl, 10.0, 5.0, 1.0).unwrap();
        let series = sweep_stress(&vessel, StressKind::Hoop, &SweepConfig::new(100.0).with_samples(10)).unwrap();

        assert_eq!(series.wall_class, WallClass::Thick);
        assert!(series.values_psi.iter().all(|v| *v < 0.0));

        // least compressive sample is the numeric maximum
        let peak = series.peak().unwrap();
        assert_eq!(peak.index, 0);

        let governing = series.peak_magnitude().unwrap();
        assert_eq!(governing.index, series.len() - 1);
        assert_abs_diff_eq!(
            governing.value_psi,
            thick_hoop_stress(&vessel, governing.pressure_psi, 0.0).unwrap(),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_peak_uses_full_sequence() {
        let series = StressSeries {
            kind: StressKind::Hoop,
            wall_class: WallClass::Thin,
            depths_ft: vec![1.0, 2.0, 3.0, 4.0],
            pressures_psi: vec![0.1, 0.2, 0.3, 0.4],
            values_psi: vec![5.0, 9.0, 9.0, -12.0],
        };
        let peak = series.peak().unwrap();
        assert_eq!(peak.index, 1);
        assert_eq!(peak.depth_ft, 2.0);
        assert_eq!(peak.pressure_psi, 0.2);

        assert_eq!(series.peak_magnitude().unwrap().index, 3);
        assert!(series.exceeds_yield(10.0));
        assert!(!series.exceeds_yield(12.0));
    }

    #[test]
    fn test_empty_series_has_no_peak() {
        let series = StressSeries {
            kind: StressKind::Hoop,
            wall_class: WallClass::Thin,
            depths_ft: vec![],
            pressures_psi: vec![],
            values_psi: vec![],
        };
        assert!(series.peak().is_none());
        assert!(!series.exceeds_yield(0.0));
    }

    #[test]
    fn test_thick_sweep_rejects_bad_percent() {
        let matl = Material::elastic("test", 10.0e6, 0.3);
        let vessel = Vessel::new("v", &matl, 10.0, 5.0, 1.0).unwrap();
        let config = SweepConfig::new(100.0).with_wall_percent(150.0);
        assert!(sweep_stress(&vessel, StressKind::Hoop, &config).is_err());
        // longitudinal stress does not depend on the wall position
        assert!(sweep_stress(&vessel, StressKind::Longitudinal, &config).is_ok());
    }

    #[test]
    fn test_equation_keys() {
        assert_eq!(StressKind::Hoop.equation(WallClass::Thin), Equation::ThinHoopStress);
        assert_eq!(StressKind::Longitudinal.equation(WallClass::Thick), Equation::ThickLongitudinalStress);
    }

    #[test]
    fn test_config_defaults_from_json() {
        let config: SweepConfig = serde_json::from_str(r#"{"max_depth_ft": 250.0}"#).unwrap();
        assert_eq!(config, SweepConfig::new(250.0));
    }
}
