//! # vessel_core - External-Pressure Vessel Calculation Engine
//!
//! `vessel_core` is the computational heart of Depthrate: closed-form stress,
//! deformation and buckling formulas for a capped cylinder under seawater
//! pressure, plus depth sweeps for plotting. All inputs and outputs are
//! JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Traceable**: Every formula can return its worked derivation
//!
//! ## Quick Start
//!
//! ```rust
//! use vessel_core::equations::{depth_to_pressure, thin_hoop_stress};
//! use vessel_core::materials::builtin_materials;
//! use vessel_core::vessel::Vessel;
//!
//! let table = builtin_materials();
//! let al = table.lookup("6061-T6").unwrap();
//! let hull = Vessel::new("Hull", al, 10.0, 5.0, 0.1).unwrap();
//!
//! let p = depth_to_pressure(300.0);
//! let hoop = thin_hoop_stress(&hull, p);
//! assert!(hoop < al.fy_psi);
//! ```
//!
//! ## Modules
//!
//! - [`vessel`] - Vessel geometry and thin/thick classification
//! - [`materials`] - Material records and the CSV material table
//! - [`equations`] - Formula library, derivation traces, equation registry
//! - [`calculations`] - Depth sweeps and the full vessel analysis
//! - [`units`] - Unit conversions and type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod materials;
pub mod units;
pub mod vessel;

// Re-export commonly used types at crate root for convenience
pub use calculations::{AnalysisInput, AnalysisResult};
pub use errors::{CalcError, CalcResult};
pub use materials::{Material, MaterialTable};
pub use vessel::{Vessel, WallClass};
