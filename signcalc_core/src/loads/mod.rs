//! Loads on sign structures
//!
//! - [`wind`] - ASCE 7-22 Chapter 29 wind loads on freestanding signs
//! - [`LoadType`] - Load categories (D, L, Lr, S, W)
//! - [`LoadCase`] - Unfactored load values for one scenario
//! - [`LoadCombination`] - IBC 2024 basic ASD combinations
//!
//! # Example
//!
//! ```
//! use signcalc_core::loads::{LoadType, LoadCase, ibc_asd_combinations, find_governing_combination};
//!
//! // Base moments (kip-ft): concentric dead load produces none
//! let moments = LoadCase::new("Base moment")
//!     .with_load(LoadType::Dead, 0.0)
//!     .with_load(LoadType::Wind, 8.08);
//!
//! let governing = find_governing_combination(&moments, &ibc_asd_combinations()).unwrap();
//! assert_eq!(governing.name, "LC6");
//! ```

pub mod load_types;
pub mod combinations;
pub mod wind;

pub use load_types::LoadType;
pub use combinations::{
    LoadCombination,
    CombinationResult,
    ibc_asd_combinations,
    apply_all,
    find_governing_combination,
};
pub use wind::{ExposureCategory, RiskCategory, WindFactors, WindLoadInput, WindLoadResult};

use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use crate::errors::{CalcError, CalcResult};

/// A collection of load values by type for a specific loading scenario
///
/// Values are unfactored; units depend on context (lb, kip-ft, ...).
/// Missing types read as zero.
///
/// # JSON Format
/// ```json
/// {
///   "label": "Base moment",
///   "loads": {
///     "Dead": 0.0,
///     "Wind": 8.08
///   }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadCase {
    /// Label for this load case
    pub label: String,

    /// Load values keyed by type
    pub loads: BTreeMap<LoadType, f64>,
}

impl LoadCase {
    /// Create a new empty load case with a label
    pub fn new(label: impl Into<String>) -> Self {
        LoadCase {
            label: label.into(),
            loads: BTreeMap::new(),
        }
    }

    /// Add or update a load value (builder pattern)
    pub fn with_load(mut self, load_type: LoadType, value: f64) -> Self {
        self.loads.insert(load_type, value);
        self
    }

    /// Get the load value for a type, defaulting to 0.0 if not set
    pub fn get(&self, load_type: LoadType) -> f64 {
        self.loads.get(&load_type).copied().unwrap_or(0.0)
    }

    /// Validate the load case
    ///
    /// Gravity loads must be non-negative.
    pub fn validate(&self) -> CalcResult<()> {
        for (load_type, value) in &self.loads {
            if load_type.is_gravity() && *value < 0.0 {
                return Err(CalcError::invalid_input(
                    format!("load_{}", load_type.code()),
                    value.to_string(),
                    format!("{} cannot be negative", load_type.description()),
                ));
            }
        }
        Ok(())
    }
}

impl Default for LoadCase {
    fn default() -> Self {
        LoadCase::new("Unnamed")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_case_builder() {
        let case = LoadCase::new("Test")
            .with_load(LoadType::Dead, 362.4)
            .with_load(LoadType::Wind, 598.8);

        assert_eq!(case.label, "Test");
        assert_eq!(case.get(LoadType::Dead), 362.4);
        assert_eq!(case.get(LoadType::Snow), 0.0);
    }

    #[test]
    fn test_load_case_validation() {
        let ok = LoadCase::new("Valid").with_load(LoadType::Dead, 10.0);
        assert!(ok.validate().is_ok());

        let bad = LoadCase::new("Invalid").with_load(LoadType::Dead, -10.0);
        assert!(bad.validate().is_err());

        // Wind direction may be negative
        let lateral = LoadCase::new("Lateral").with_load(LoadType::Wind, -5.0);
        assert!(lateral.validate().is_ok());
    }

    #[test]
    fn test_load_case_serialization() {
        let case = LoadCase::new("Moment")
            .with_load(LoadType::Dead, 0.0)
            .with_load(LoadType::Wind, 8.08);

        let json = serde_json::to_string(&case).unwrap();
        assert!(json.contains("\"Wind\":8.08"));
        let parsed: LoadCase = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, case);
    }
}
