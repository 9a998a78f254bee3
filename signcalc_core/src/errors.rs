//! # Error Types
//!
//! Structured error types for signcalc_core. An error here means the
//! calculation could not run. An inadequate design is never an error: it comes
//! back as a normal result with its pass/fail flags cleared.
//!
//! ## Example
//!
//! ```rust
//! use signcalc_core::errors::{CalcError, CalcResult};
//!
//! fn validate_spacing(spacing_ft: f64) -> CalcResult<()> {
//!     if spacing_ft < 3.0 {
//!         return Err(CalcError::invalid_input(
//!             "pole_spacing_ft",
//!             spacing_ft.to_string(),
//!             "Pole spacing must be at least 3.0 ft",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_spacing(2.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for signcalc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (out of range, non-positive geometry, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// A section record carries a property no valid catalog entry can have.
    /// Points at a bad or missing catalog row, not at the design.
    #[error("Invalid section '{designation}': {property} = {value} must be positive")]
    InvalidSection {
        designation: String,
        property: String,
        value: String,
    },

    /// Section designation not found in the catalog
    #[error("Section not found: {designation}")]
    SectionNotFound { designation: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
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

    /// Create an InvalidSection error
    pub fn invalid_section(designation: impl Into<String>, property: impl Into<String>, value: f64) -> Self {
        CalcError::InvalidSection {
            designation: designation.into(),
            property: property.into(),
            value: value.to_string(),
        }
    }

    /// Create a SectionNotFound error
    pub fn section_not_found(designation: impl Into<String>) -> Self {
        CalcError::SectionNotFound {
            designation: designation.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// True when the error traces back to catalog data rather than user input
    pub fn is_catalog_error(&self) -> bool {
        matches!(
            self,
            CalcError::InvalidSection { .. } | CalcError::SectionNotFound { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::InvalidSection { .. } => "INVALID_SECTION",
            CalcError::SectionNotFound { .. } => "SECTION_NOT_FOUND",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::serialization(err.to_string())
    }
}
