//! # Error Types
//!
//! Structured error types for vessel_core. Every failure in the engine is
//! local and deterministic: bad geometry, a material that cannot be used as
//! a divisor, a sweep range that makes no sense, or a table row that does
//! not parse. Errors carry enough context to point at the offending field.
//!
//! ## Example
//!
//! ```rust
//! use vessel_core::errors::{CalcError, CalcResult};
//!
//! fn validate_thickness(wall_thickness_in: f64) -> CalcResult<()> {
//!     if wall_thickness_in <= 0.0 {
//!         return Err(CalcError::domain(
//!             "wall_thickness_in",
//!             wall_thickness_in.to_string(),
//!             "Wall thickness must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_thickness(-0.1).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for vessel_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// A value lies outside the physical domain of a formula
    /// (non-positive geometry, inner radius <= 0, E <= 0)
    #[error("Domain error for '{field}': {value} - {reason}")]
    DomainError {
        field: String,
        value: String,
        reason: String,
    },

    /// A value lies outside an accepted range
    /// (sweep depth below 1 ft, zero samples, wall percent outside 0-100)
    #[error("Range error for '{field}': {value} - {reason}")]
    RangeError {
        field: String,
        value: String,
        reason: String,
    },

    /// A material table row could not be turned into a typed record
    #[error("Parse error at line {line}, column '{column}': {reason}")]
    ParseError {
        line: usize,
        column: String,
        reason: String,
    },

    /// Material not found in the loaded table
    #[error("Material not found: {material_name}")]
    MaterialNotFound { material_name: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create a DomainError
    pub fn domain(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::DomainError {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a RangeError
    pub fn range(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::RangeError {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a ParseError for a table row
    pub fn parse(line: usize, column: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::ParseError {
            line,
            column: column.into(),
            reason: reason.into(),
        }
    }

    /// Create a MaterialNotFound error
    pub fn material_not_found(material_name: impl Into<String>) -> Self {
        CalcError::MaterialNotFound {
            material_name: material_name.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::DomainError { .. } => "DOMAIN_ERROR",
            CalcError::RangeError { .. } => "RANGE_ERROR",
            CalcError::ParseError { .. } => "PARSE_ERROR",
            CalcError::MaterialNotFound { .. } => "MATERIAL_NOT_FOUND",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::serialization(err.to_string())
    }
}

/// Reject non-positive (or NaN) values used as lengths or divisors.
pub(crate) fn require_positive(field: &str, value: f64, reason: &str) -> CalcResult<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(CalcError::domain(field, value.to_string(), reason))
    }
}
