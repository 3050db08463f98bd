//! # Error Types
//!
//! Structured error types for bearing_core. Each variant carries enough
//! context to understand and fix the problem programmatically, rather
//! than collapsing everything into a string.
//!
//! ## Example
//!
//! ```rust
//! use bearing_core::errors::{CalcError, CalcResult};
//!
//! fn validate_rating(rating_n: f64) -> CalcResult<()> {
//!     if rating_n <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "static_rating_n",
//!             rating_n.to_string(),
//!             "Load rating must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for bearing_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for catalog and rating operations.
///
/// Every error is fatal to the run that raised it: a sweep never skips a
/// pair or substitutes defaults for a malformed record, so a partial
/// result set never exists.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (out of range, wrong sign, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required catalog field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// The effective bearing span `d_C + d_D` is zero, so the reaction
    /// equilibrium has no solution. Unreachable with the shipped load
    /// case but guarded because mounting distances are configurable.
    #[error("Degenerate mounting geometry: effective bearing span is {span_m} m")]
    DegenerateGeometry { span_m: f64 },

    /// Catalog/result file I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// CSV or JSON encode/decode error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    /// Create a DegenerateGeometry error
    pub fn degenerate_geometry(span_m: f64) -> Self {
        CalcError::DegenerateGeometry { span_m }
    }

    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization_error(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::DegenerateGeometry { .. } => "DEGENERATE_GEOMETRY",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("load_ratio_e", "-0.3", "Load ratio must be positive");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::missing_field("C_0r").error_code(), "MISSING_FIELD");
        assert_eq!(
            CalcError::degenerate_geometry(0.0).error_code(),
            "DEGENERATE_GEOMETRY"
        );
    }

    #[test]
    fn test_display_includes_context() {
        let error = CalcError::file_error("read", "catalog.csv", "no such file");
        let message = error.to_string();
        assert!(message.contains("catalog.csv"));
        assert!(message.contains("read"));
    }
}
