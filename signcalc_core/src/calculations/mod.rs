//! # Sign Structure Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` / `*Config` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! An inadequate design is a normal result with its pass flags cleared; an
//! `Err` means the calculation could not run.
//!
//! ## Available Calculations
//!
//! - [`single_pole`] - One cantilevered pole on a drilled pier
//! - [`double_pole`] - Two poles sharing a sign face
//! - [`footing`] - Minimum pier embedment for a moment
//! - [`pole_filter`] - Catalog sections with enough flexural strength
//! - [`baseplate`] - Base plate, weld and anchor checks
//! - [`baseplate_solve`] - Cheapest passing base plate by grid search
//! - [`sign_loads`] - Area, centroid, weight and moment of a cabinet stack
//!
//! ## Dispatch
//!
//! [`CalculationRequest`] wraps every input under a `"type"` tag so an outer
//! service can route one JSON value:
//!
//! ```rust
//! use signcalc_core::calculations::{run, CalculationOutput, CalculationRequest};
//!
//! let request: CalculationRequest = serde_json::from_str(
//!     r#"{"type": "Footing", "moment_kipft": 10.0, "diameter_ft": 3.0}"#,
//! ).unwrap();
//!
//! match run(&request).unwrap() {
//!     CalculationOutput::Footing(result) => assert_eq!(result.depth_ft, 4.7),
//!     other => panic!("unexpected output {:?}", other),
//! }
//! ```

pub mod baseplate;
pub mod baseplate_solve;
pub mod double_pole;
pub mod failure;
pub mod footing;
pub mod pole_check;
pub mod pole_filter;
pub mod sign_loads;
pub mod single_pole;

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;
use crate::loads::wind::{self, WindLoadInput, WindLoadResult};

pub use baseplate::{BasePlateCheckInput, BasePlateChecks, BasePlateInput, BasePlateLoads, CheckResult};
pub use baseplate_solve::{BasePlateConstraints, BasePlateSolution, BasePlateSolveInput, CostWeights};
pub use double_pole::{DoublePoleConfig, DoublePoleResult, LoadDistribution};
pub use failure::FailureMode;
pub use footing::{FootingInput, FootingResult, FootingType};
pub use pole_check::{DeflectionCheck, FoundationCheck, StressCheck};
pub use pole_filter::{PoleFilterInput, PoleFilterResult, PoleOption, SortKey};
pub use sign_loads::{Cabinet, SignLoadInput, SignLoadResult};
pub use single_pole::{SinglePoleConfig, SinglePoleResult};

/// Any calculation the engine can run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationRequest {
    /// Wind load on a sign face
    Wind(WindLoadInput),
    SinglePole(SinglePoleConfig),
    DoublePole(DoublePoleConfig),
    Footing(FootingInput),
    PoleFilter(PoleFilterInput),
    BasePlate(BasePlateCheckInput),
    BasePlateSolve(BasePlateSolveInput),
    SignLoads(SignLoadInput),
}

impl CalculationRequest {
    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationRequest::Wind(_) => "Wind",
            CalculationRequest::SinglePole(_) => "SinglePole",
            CalculationRequest::DoublePole(_) => "DoublePole",
            CalculationRequest::Footing(_) => "Footing",
            CalculationRequest::PoleFilter(_) => "PoleFilter",
            CalculationRequest::BasePlate(_) => "BasePlate",
            CalculationRequest::BasePlateSolve(_) => "BasePlateSolve",
            CalculationRequest::SignLoads(_) => "SignLoads",
        }
    }
}

/// Result of a [`CalculationRequest`], tagged the same way
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationOutput {
    Wind(WindLoadResult),
    SinglePole(SinglePoleResult),
    DoublePole(DoublePoleResult),
    Footing(FootingResult),
    PoleFilter(PoleFilterResult),
    BasePlate(BasePlateChecks),
    BasePlateSolve(BasePlateSolution),
    SignLoads(SignLoadResult),
}

impl CalculationOutput {
    /// Overall verdict where the calculation has one
    pub fn passes(&self) -> Option<bool> {
        match self {
            CalculationOutput::SinglePole(r) => Some(r.passes_all_checks),
            CalculationOutput::DoublePole(r) => Some(r.passes_all_checks),
            CalculationOutput::Footing(r) => Some(r.converged),
            CalculationOutput::PoleFilter(r) => Some(!r.options.is_empty()),
            CalculationOutput::BasePlate(r) => Some(r.all_pass),
            CalculationOutput::BasePlateSolve(r) => Some(r.checks.all_pass),
            CalculationOutput::Wind(_) | CalculationOutput::SignLoads(_) => None,
        }
    }

    /// Warnings carried by the result
    pub fn warnings(&self) -> &[String] {
        match self {
            CalculationOutput::SinglePole(r) => &r.warnings,
            CalculationOutput::DoublePole(r) => &r.warnings,
            CalculationOutput::Footing(r) => &r.warnings,
            CalculationOutput::PoleFilter(r) => &r.warnings,
            CalculationOutput::BasePlate(r) => &r.alternatives,
            CalculationOutput::BasePlateSolve(r) => &r.checks.alternatives,
            CalculationOutput::SignLoads(r) => &r.warnings,
            CalculationOutput::Wind(_) => &[],
        }
    }
}

/// Run any calculation
pub fn run(request: &CalculationRequest) -> CalcResult<CalculationOutput> {
    log::debug!("running {} calculation", request.calc_type());
    let output = match request {
        CalculationRequest::Wind(input) => CalculationOutput::Wind(wind::calculate(input)),
        CalculationRequest::SinglePole(config) => CalculationOutput::SinglePole(single_pole::calculate(config)?),
        CalculationRequest::DoublePole(config) => CalculationOutput::DoublePole(double_pole::calculate(config)?),
        CalculationRequest::Footing(input) => CalculationOutput::Footing(footing::calculate(input)?),
        CalculationRequest::PoleFilter(input) => CalculationOutput::PoleFilter(pole_filter::calculate(input)?),
        CalculationRequest::BasePlate(input) => CalculationOutput::BasePlate(baseplate::calculate(input)?),
        CalculationRequest::BasePlateSolve(input) => {
            CalculationOutput::BasePlateSolve(baseplate_solve::calculate(input)?)
        }
        CalculationRequest::SignLoads(input) => CalculationOutput::SignLoads(sign_loads::calculate(input)?),
    };
    Ok(output)
}
