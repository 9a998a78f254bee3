//! # Footing Depth Solve
//!
//! Minimum embedment of a drilled pier of given diameter under a base moment.
//!
//! A trial depth `d` is adequate when it satisfies both:
//!
//! - **Lateral bearing**, IBC 2024 Eq 18-1: `d ≥ (4.36 h / b) √(P/S)` with the
//!   lateral load at `h = 2d/3` and `P = M/h`
//! - **Overturning**: passive resisting moment `0.06 b d³ ≥ 1.5 M`
//!
//! Depths are scanned from 2.0 ft to 20.0 ft in 0.1 ft steps and the first
//! adequate depth is returned. Both constraints only get easier as depth
//! grows, so the answer never decreases with more moment or a narrower pier
//! and never increases with stronger soil.
//!
//! ## Example
//!
//! ```rust
//! use signcalc_core::calculations::footing::{calculate, FootingInput};
//!
//! let result = calculate(&FootingInput::new(10.0, 3.0).with_soil_bearing_psf(3000.0)).unwrap();
//! assert_eq!(result.depth_ft, 4.7);
//! assert!(result.converged);
//! ```

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::code_refs::{IBC_LATERAL_BEARING, IBC_SOIL_BEARING};
use crate::constants::*;
use crate::equations::{
    concrete_volume_cy, footing_area_sqft, lateral_bearing_required_depth_ft, passive_resisting_moment_kipft,
};
use crate::errors::{CalcError, CalcResult};

fn default_soil_bearing_psf() -> f64 {
    3000.0
}

fn default_poles() -> u32 {
    1
}

/// How a multi-pole moment reaches the footing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FootingType {
    /// One footing takes the whole moment
    #[default]
    Single,
    /// Each pole has its own footing and takes an equal share
    PerSupport,
}

/// Which requirement set the returned depth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FootingConstraint {
    /// The 2.0 ft floor
    MinimumDepth,
    /// IBC Eq 18-1
    LateralBearing,
    /// Passive resistance against 1.5 × moment
    Overturning,
    /// Nothing up to 20 ft was adequate
    SearchLimit,
}

/// Input for a footing depth solve.
///
/// ## JSON Example
///
/// ```json
/// {
///   "moment_kipft": 10.0,
///   "diameter_ft": 3.0,
///   "soil_bearing_psf": 3000.0,
///   "poles": 2,
///   "footing_type": "per_support"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FootingInput {
    /// Base moment (kip-ft)
    pub moment_kipft: f64,
    /// Pier diameter (ft)
    pub diameter_ft: f64,
    /// Allowable lateral soil pressure (psf)
    #[serde(default = "default_soil_bearing_psf")]
    pub soil_bearing_psf: f64,
    /// Number of poles sharing the moment
    #[serde(default = "default_poles")]
    pub poles: u32,
    #[serde(default)]
    pub footing_type: FootingType,
}

impl FootingInput {
    /// Single footing, default soil
    pub fn new(moment_kipft: f64, diameter_ft: f64) -> Self {
        FootingInput {
            moment_kipft,
            diameter_ft,
            soil_bearing_psf: default_soil_bearing_psf(),
            poles: 1,
            footing_type: FootingType::Single,
        }
    }

    pub fn with_soil_bearing_psf(self, soil_bearing_psf: f64) -> Self {
        FootingInput { soil_bearing_psf, ..self }
    }

    /// Split the moment over `poles` separate footings
    pub fn per_support(self, poles: u32) -> Self {
        FootingInput {
            poles,
            footing_type: FootingType::PerSupport,
            ..self
        }
    }

    pub fn validate(&self) -> CalcResult<()> {
        if self.moment_kipft <= 0.0 {
            return Err(CalcError::invalid_input(
                "moment_kipft",
                self.moment_kipft.to_string(),
                "Moment must be positive",
            ));
        }
        if self.diameter_ft <= 0.0 {
            return Err(CalcError::invalid_input(
                "diameter_ft",
                self.diameter_ft.to_string(),
                "Footing diameter must be positive",
            ));
        }
        if self.soil_bearing_psf <= 0.0 {
            return Err(CalcError::invalid_input(
                "soil_bearing_psf",
                self.soil_bearing_psf.to_string(),
                "Soil bearing capacity must be positive",
            ));
        }
        if self.poles == 0 {
            return Err(CalcError::invalid_input("poles", "0", "At least one pole is required"));
        }
        Ok(())
    }

    /// Moment carried by one footing (kip-ft)
    pub fn effective_moment_kipft(&self) -> f64 {
        match self.footing_type {
            FootingType::PerSupport if self.poles > 1 => self.moment_kipft / f64::from(self.poles),
            _ => self.moment_kipft,
        }
    }
}

/// Result of a footing depth solve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FootingResult {
    /// Required embedment (ft)
    pub depth_ft: f64,
    /// Moment on this footing after any per-support split (kip-ft)
    pub effective_moment_kipft: f64,
    /// Eq 18-1 requirement evaluated at the returned depth (ft)
    pub lateral_required_depth_ft: f64,
    /// Passive resisting moment at the returned depth (kip-ft)
    pub passive_resisting_moment_kipft: f64,
    /// Passive / effective moment
    pub overturning_safety_factor: f64,
    pub governing_constraint: FootingConstraint,
    /// An adequate depth was found inside the search range
    pub converged: bool,
    /// Needs an engineer: deep, unconverged, or overloaded for the diameter
    pub request_engineering: bool,
    /// Concrete for one pier (cubic yards)
    pub concrete_volume_cy: f64,
    pub warnings: Vec<String>,
    pub code_references: Vec<String>,
}

struct TrialDepth {
    lateral_ok: bool,
    overturning_ok: bool,
}

fn trial(moment_kipft: f64, diameter_ft: f64, soil_psf: f64, depth_ft: f64) -> TrialDepth {
    let required = lateral_bearing_required_depth_ft(moment_kipft, depth_ft, diameter_ft, soil_psf);
    let passive = passive_resisting_moment_kipft(diameter_ft, depth_ft);
    TrialDepth {
        lateral_ok: depth_ft >= required,
        overturning_ok: passive >= DEFAULT_MIN_OVERTURNING_SF * moment_kipft,
    }
}

/// Solve for the minimum footing depth.
///
/// # Errors
///
/// * `InvalidInput` - non-positive moment, diameter or soil capacity, or zero poles
pub fn calculate(input: &FootingInput) -> CalcResult<FootingResult> {
    input.validate()?;

    let moment = input.effective_moment_kipft();
    let diameter = input.diameter_ft;
    let soil = input.soil_bearing_psf;
    let mut warnings = Vec::new();
    let mut request_engineering = false;

    // Rough bearing limit of the pier face
    let bearing_limit_kipft = soil * footing_area_sqft(diameter) * diameter / 12.0 / 1000.0;
    if moment > bearing_limit_kipft {
        request_engineering = true;
        warnings.push(format!(
            "Load {:.1} kip-ft exceeds max resisting moment {:.1} kip-ft for diameter {:.1} ft and soil {} psf. \
             Engineering review recommended.",
            moment, bearing_limit_kipft, diameter, soil
        ));
    }

    let mut found: Option<u32> = None;
    for tenths in MIN_FOOTING_DEPTH_TENTHS..=MAX_FOOTING_DEPTH_TENTHS {
        let t = trial(moment, diameter, soil, f64::from(tenths) / 10.0);
        if t.lateral_ok && t.overturning_ok {
            found = Some(tenths);
            break;
        }
    }

    let converged = found.is_some();
    let depth_tenths = found.unwrap_or(MAX_FOOTING_DEPTH_TENTHS);
    let depth_ft = f64::from(depth_tenths) / 10.0;

    let governing_constraint = match found {
        None => FootingConstraint::SearchLimit,
        Some(MIN_FOOTING_DEPTH_TENTHS) => FootingConstraint::MinimumDepth,
        Some(tenths) => {
            let previous = trial(moment, diameter, soil, f64::from(tenths - 1) / 10.0);
            if previous.lateral_ok {
                FootingConstraint::Overturning
            } else {
                FootingConstraint::LateralBearing
            }
        }
    };

    if !converged {
        request_engineering = true;
        warn!("footing: no depth up to {:.1} ft is adequate for M={:.2} kip-ft", depth_ft, moment);
        warnings.push(format!(
            "No depth up to {:.1} ft satisfies lateral bearing and overturning for diameter {:.1} ft. \
             Increase diameter or request engineering.",
            depth_ft, diameter
        ));
    }
    if depth_ft > FOOTING_DEPTH_REVIEW_FT {
        request_engineering = true;
        warnings.push(format!(
            "Footing depth {:.1} ft exceeds recommended maximum {:.1} ft",
            depth_ft, FOOTING_DEPTH_REVIEW_FT
        ));
    }

    let passive_resisting_moment_kipft = passive_resisting_moment_kipft(diameter, depth_ft);
    debug!(
        "footing: M={:.3} kip-ft b={:.2} ft S={} psf -> d={:.1} ft ({:?})",
        moment, diameter, soil, depth_ft, governing_constraint
    );

    Ok(FootingResult {
        depth_ft,
        effective_moment_kipft: moment,
        lateral_required_depth_ft: lateral_bearing_required_depth_ft(moment, depth_ft, diameter, soil),
        passive_resisting_moment_kipft,
        overturning_safety_factor: passive_resisting_moment_kipft / moment,
        governing_constraint,
        converged,
        request_engineering,
        concrete_volume_cy: concrete_volume_cy(diameter, depth_ft),
        warnings,
        code_references: vec![
            IBC_LATERAL_BEARING.cite("Embedded Posts and Poles"),
            IBC_SOIL_BEARING.cite("Allowable Soil Pressure"),
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_depth() {
        let result = calculate(&FootingInput::new(10.0, 3.0)).unwrap();
        assert_eq!(result.depth_ft, 4.7);
        assert!(result.converged);
        assert_eq!(result.governing_constraint, FootingConstraint::LateralBearing);
        // 10 kip-ft is above the 5.3 kip-ft face bearing limit of a 3 ft pier
        assert!(result.request_engineering);
        assert!(result.warnings.iter().any(|w| w.contains("exceeds max resisting moment")));
        assert!(result.lateral_required_depth_ft <= 4.7);
        assert!(result.overturning_safety_factor >= 1.5);
    }

    #[test]
    fn test_small_moment_hits_floor() {
        let result = calculate(&FootingInput::new(0.5, 3.0)).unwrap();
        assert_eq!(result.depth_ft, 2.0);
        assert_eq!(result.governing_constraint, FootingConstraint::MinimumDepth);
    }

    #[test]
    fn test_per_support_split() {
        let single = calculate(&FootingInput::new(20.0, 3.0)).unwrap();
        let split = calculate(&FootingInput::new(20.0, 3.0).per_support(2)).unwrap();
        assert_eq!(split.effective_moment_kipft, 10.0);
        assert_eq!(split.depth_ft, 4.7);
        assert!(single.depth_ft > split.depth_ft);

        // One pole per support takes the whole moment
        let one = calculate(&FootingInput::new(20.0, 3.0).per_support(1)).unwrap();
        assert_eq!(one.depth_ft, single.depth_ft);
    }

    #[test]
    fn test_monotonic_in_moment_and_diameter() {
        let mut last = 0.0;
        for m in [1.0, 5.0, 10.0, 20.0, 40.0, 80.0] {
            let d = calculate(&FootingInput::new(m, 3.0)).unwrap().depth_ft;
            assert!(d >= last);
            last = d;
        }
        let mut last = f64::MAX;
        for b in [1.5, 2.0, 3.0, 4.0, 5.0] {
            let d = calculate(&FootingInput::new(20.0, b)).unwrap().depth_ft;
            assert!(d <= last);
            last = d;
        }
    }

    #[test]
    fn test_deep_footing_requests_engineering() {
        // Eq 18-1 closed form: d ≥ (2.907/b)² · 1500 M / S = 9.39 ft
        let result = calculate(&FootingInput::new(20.0, 3.0)).unwrap();
        assert_eq!(result.depth_ft, 9.4);
        assert!(result.converged);
        assert!(result.request_engineering);
        assert!(result.warnings.iter().any(|w| w.contains("recommended maximum")));
    }

    #[test]
    fn test_unconverged_returns_cap() {
        let result = calculate(&FootingInput::new(5000.0, 1.0)).unwrap();
        assert_eq!(result.depth_ft, 20.0);
        assert!(!result.converged);
        assert!(result.request_engineering);
        assert_eq!(result.governing_constraint, FootingConstraint::SearchLimit);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(calculate(&FootingInput::new(0.0, 3.0)).is_err());
        assert!(calculate(&FootingInput::new(10.0, -1.0)).is_err());
        assert!(calculate(&FootingInput::new(10.0, 3.0).with_soil_bearing_psf(0.0)).is_err());
        let mut input = FootingInput::new(10.0, 3.0);
        input.poles = 0;
        assert!(matches!(calculate(&input), Err(CalcError::InvalidInput { .. })));
    }

    #[test]
    fn test_json_defaults() {
        let input: FootingInput = serde_json::from_str(r#"{"moment_kipft": 10.0, "diameter_ft": 3.0}"#).unwrap();
        assert_eq!(input.soil_bearing_psf, 3000.0);
        assert_eq!(input.poles, 1);
        assert_eq!(input.footing_type, FootingType::Single);
    }
}
