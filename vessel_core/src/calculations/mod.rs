//! # Vessel Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input, ...) -> CalcResult<*Result>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`sweep`] - Stress across a depth range, with peak detection
//! - [`analysis`] - Full rating of one vessel at a design depth

pub mod analysis;
pub mod sweep;

// Re-export commonly used types
pub use analysis::{calculate, AnalysisInput, AnalysisResult};
pub use sweep::{depth_samples, sweep_stress, StressKind, StressSeries, SweepConfig, SweepPeak};
