//! # signcalc_core - Sign Structure Calculation Engine
//!
//! `signcalc_core` sizes and checks freestanding sign structures: ASCE 7-22 wind
//! loads, cantilevered steel poles (single and double), drilled pier
//! foundations and base plate connections. All inputs and outputs are
//! JSON-serializable so results can be stored or reported without loss.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **Deterministic**: Identical inputs give bit-identical outputs
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//!
//! An inadequate design is not an error. It comes back as a normal result
//! with its pass flags cleared, a critical failure mode and warnings.
//!
//! ## Quick Start
//!
//! ```rust
//! use signcalc_core::calculations::single_pole::{calculate, SinglePoleConfig};
//! use signcalc_core::loads::{ExposureCategory, RiskCategory};
//!
//! let config = SinglePoleConfig::new(
//!     12.0,
//!     "HSS8X8X1/4",
//!     5.0,
//!     8.0,
//!     3.0,
//!     115.0,
//!     ExposureCategory::C,
//!     RiskCategory::II,
//! );
//!
//! let result = calculate(&config).unwrap();
//! assert!(result.passes_all_checks);
//!
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! assert!(json.contains("\"governing_load_combination\": \"LC6\""));
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Pole solvers, footing, pole filter, base plates
//! - [`loads`] - Load types, ASD combinations and the wind engine
//! - [`materials`] - Steel grades, pole sections and the section catalog
//! - [`equations`] - Cantilever and drilled pier formulas
//! - [`code_refs`] - Code citations attached to every result
//! - [`constants`] - Code constants and engineering defaults
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod code_refs;
pub mod constants;
pub mod equations;
pub mod errors;
pub mod loads;
pub mod materials;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{run, CalculationOutput, CalculationRequest};
pub use errors::{CalcError, CalcResult};
