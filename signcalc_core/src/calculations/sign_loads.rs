//! # Sign Load Derivation
//!
//! Turns a stack of sign cabinets into the handful of numbers the pole and
//! base plate solvers need: projected area, centroid height, weight and the
//! wind moment at grade.
//!
//! Cabinets stack bottom to top in list order starting at `base_height_ft`.
//! The centroid is weighted by cabinet dead load (by area when every cabinet
//! is weightless). Wind pressure is evaluated at the centroid height.
//!
//! ## Example
//!
//! ```rust
//! use signcalc_core::calculations::sign_loads::{calculate, Cabinet, SignLoadInput};
//! use signcalc_core::loads::{ExposureCategory, RiskCategory};
//!
//! let input = SignLoadInput::new(
//!     vec![Cabinet::new(8.0, 3.0)],
//!     12.0,
//!     115.0,
//!     ExposureCategory::C,
//!     RiskCategory::II,
//! );
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.area_sqft, 24.0);
//! assert_eq!(result.centroid_height_ft, 13.5);
//! ```

use serde::{Deserialize, Serialize};

use crate::code_refs::{ASCE7_OTHER_STRUCTURES, ASCE7_VELOCITY_PRESSURE};
use crate::constants::{DEFAULT_CABINET_WEIGHT_PSF, POLE_HEIGHT_REVIEW_FT};
use crate::errors::{CalcError, CalcResult};
use crate::loads::wind::{design_wind_pressure, ExposureCategory, RiskCategory, WindFactors};
use crate::units::{FtLb, KipFt};

fn default_cabinet_weight_psf() -> f64 {
    DEFAULT_CABINET_WEIGHT_PSF
}

/// One sign cabinet (ft, psf)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cabinet {
    pub width_ft: f64,
    pub height_ft: f64,
    #[serde(default = "default_cabinet_weight_psf")]
    pub weight_psf: f64,
}

impl Cabinet {
    pub fn new(width_ft: f64, height_ft: f64) -> Self {
        Cabinet {
            width_ft,
            height_ft,
            weight_psf: DEFAULT_CABINET_WEIGHT_PSF,
        }
    }

    pub fn with_weight_psf(self, weight_psf: f64) -> Self {
        Cabinet { weight_psf, ..self }
    }

    pub fn area_sqft(&self) -> f64 {
        self.width_ft * self.height_ft
    }
}

/// Input for sign load derivation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "cabinets": [{ "width_ft": 8.0, "height_ft": 3.0, "weight_psf": 10.0 }],
///   "base_height_ft": 12.0,
///   "wind_speed_mph": 115.0,
///   "exposure": "C",
///   "risk_category": "II"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignLoadInput {
    pub cabinets: Vec<Cabinet>,
    /// Grade to bottom of the lowest cabinet (ft)
    #[serde(default)]
    pub base_height_ft: f64,
    pub wind_speed_mph: f64,
    pub exposure: ExposureCategory,
    pub risk_category: RiskCategory,
    #[serde(default)]
    pub wind_factors: WindFactors,
}

impl SignLoadInput {
    pub fn new(
        cabinets: Vec<Cabinet>,
        base_height_ft: f64,
        wind_speed_mph: f64,
        exposure: ExposureCategory,
        risk_category: RiskCategory,
    ) -> Self {
        SignLoadInput {
            cabinets,
            base_height_ft,
            wind_speed_mph,
            exposure,
            risk_category,
            wind_factors: WindFactors::default(),
        }
    }

    pub fn with_wind_factors(self, wind_factors: WindFactors) -> Self {
        SignLoadInput { wind_factors, ..self }
    }

    pub fn validate(&self) -> CalcResult<()> {
        if self.base_height_ft < 0.0 {
            return Err(CalcError::invalid_input(
                "base_height_ft",
                self.base_height_ft.to_string(),
                "Base height cannot be negative",
            ));
        }
        if self.wind_speed_mph < 0.0 {
            return Err(CalcError::invalid_input(
                "wind_speed_mph",
                self.wind_speed_mph.to_string(),
                "Wind speed cannot be negative",
            ));
        }
        for (i, cabinet) in self.cabinets.iter().enumerate() {
            if cabinet.width_ft <= 0.0 {
                return Err(CalcError::invalid_input(
                    format!("cabinets[{}].width_ft", i),
                    cabinet.width_ft.to_string(),
                    "Cabinet width must be positive",
                ));
            }
            if cabinet.height_ft <= 0.0 {
                return Err(CalcError::invalid_input(
                    format!("cabinets[{}].height_ft", i),
                    cabinet.height_ft.to_string(),
                    "Cabinet height must be positive",
                ));
            }
            if cabinet.weight_psf < 0.0 {
                return Err(CalcError::invalid_input(
                    format!("cabinets[{}].weight_psf", i),
                    cabinet.weight_psf.to_string(),
                    "Cabinet weight cannot be negative",
                ));
            }
        }
        Ok(())
    }
}

/// Derived sign loads
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignLoadResult {
    /// Projected area (sqft)
    pub area_sqft: f64,
    /// Centroid height above grade (ft)
    pub centroid_height_ft: f64,
    /// Top of the cabinet stack above grade (ft)
    pub overall_height_ft: f64,
    /// Cabinet dead load (lb)
    pub weight_lbs: f64,
    /// Design wind pressure at the centroid (psf)
    pub design_wind_pressure_psf: f64,
    /// Wind force on the projected area (lb)
    pub wind_force_lbs: f64,
    /// Wind moment at grade (kip-ft)
    pub mu_kipft: f64,
    pub warnings: Vec<String>,
    pub code_references: Vec<String>,
}

/// Derive area, centroid, weight and wind moment for a cabinet stack.
///
/// # Errors
///
/// * `InvalidInput` - non-positive cabinet dimensions, negative weight,
///   base height or wind speed
pub fn calculate(input: &SignLoadInput) -> CalcResult<SignLoadResult> {
    input.validate()?;

    let mut area_sqft = 0.0;
    let mut weight_lbs = 0.0;
    let mut weighted_height = 0.0;
    let mut area_weighted_height = 0.0;
    let mut stack_top = input.base_height_ft;

    for cabinet in &input.cabinets {
        let area = cabinet.area_sqft();
        let weight = area * cabinet.weight_psf;
        let mid = stack_top + cabinet.height_ft / 2.0;

        area_sqft += area;
        weight_lbs += weight;
        weighted_height += weight * mid;
        area_weighted_height += area * mid;
        stack_top += cabinet.height_ft;
    }

    let centroid_height_ft = if weight_lbs > 0.0 {
        weighted_height / weight_lbs
    } else if area_sqft > 0.0 {
        area_weighted_height / area_sqft
    } else {
        0.0
    };

    let (design_wind_pressure_psf, wind_force_lbs, mu_kipft) = if input.cabinets.is_empty() {
        (0.0, 0.0, 0.0)
    } else {
        let p = design_wind_pressure(
            input.wind_speed_mph,
            centroid_height_ft,
            input.exposure,
            input.risk_category,
            &input.wind_factors,
        );
        let force = p * area_sqft;
        (p, force, KipFt::from(FtLb(force * centroid_height_ft)).value())
    };

    let mut warnings = Vec::new();
    if stack_top > POLE_HEIGHT_REVIEW_FT {
        warnings.push(format!(
            "Sign height {:.1} ft exceeds {:.0} ft. Engineering review recommended.",
            stack_top, POLE_HEIGHT_REVIEW_FT
        ));
    }

    Ok(SignLoadResult {
        area_sqft,
        centroid_height_ft,
        overall_height_ft: stack_top,
        weight_lbs,
        design_wind_pressure_psf,
        wind_force_lbs,
        mu_kipft,
        warnings,
        code_references: vec![
            ASCE7_VELOCITY_PRESSURE.cite("Velocity Pressure"),
            ASCE7_OTHER_STRUCTURES.cite("Other Structures"),
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_cabinet_matches_wind_engine() {
        let input = SignLoadInput::new(vec![Cabinet::new(8.0, 3.0)], 12.0, 115.0, ExposureCategory::C, RiskCategory::II);
        let result = calculate(&input).unwrap();
        assert_eq!(result.centroid_height_ft, 13.5);
        assert_eq!(result.weight_lbs, 240.0);
        assert!((result.wind_force_lbs - 598.8).abs() < 0.5);
        assert!((result.mu_kipft - 8.084).abs() < 0.01);
    }

    #[test]
    fn test_weight_weighted_centroid() {
        // Heavy 10 psf cabinet 0-4 ft, light 2.5 psf cabinet 4-8 ft, equal areas
        let cabinets = vec![Cabinet::new(6.0, 4.0), Cabinet::new(6.0, 4.0).with_weight_psf(2.5)];
        let input = SignLoadInput::new(cabinets, 0.0, 100.0, ExposureCategory::B, RiskCategory::II);
        let result = calculate(&input).unwrap();
        // (240 × 2 + 60 × 6) / 300 = 2.8 ft
        assert!((result.centroid_height_ft - 2.8).abs() < 1e-12);
        assert_eq!(result.area_sqft, 48.0);
        assert_eq!(result.overall_height_ft, 8.0);
    }

    #[test]
    fn test_weightless_cabinets_use_area() {
        let cabinets = vec![Cabinet::new(4.0, 2.0).with_weight_psf(0.0), Cabinet::new(4.0, 2.0).with_weight_psf(0.0)];
        let input = SignLoadInput::new(cabinets, 10.0, 100.0, ExposureCategory::B, RiskCategory::II);
        let result = calculate(&input).unwrap();
        assert_eq!(result.centroid_height_ft, 12.0);
        assert_eq!(result.weight_lbs, 0.0);
    }

    #[test]
    fn test_empty_stack() {
        let input = SignLoadInput::new(Vec::new(), 0.0, 115.0, ExposureCategory::C, RiskCategory::II);
        let result = calculate(&input).unwrap();
        assert_eq!(result.area_sqft, 0.0);
        assert_eq!(result.mu_kipft, 0.0);
        assert_eq!(result.wind_force_lbs, 0.0);
    }

    #[test]
    fn test_tall_stack_warning() {
        let input = SignLoadInput::new(vec![Cabinet::new(10.0, 8.0)], 35.0, 115.0, ExposureCategory::C, RiskCategory::II);
        let result = calculate(&input).unwrap();
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_invalid_cabinet() {
        let input = SignLoadInput::new(vec![Cabinet::new(0.0, 3.0)], 0.0, 115.0, ExposureCategory::C, RiskCategory::II);
        match calculate(&input) {
            Err(CalcError::InvalidInput { field, .. }) => assert_eq!(field, "cabinets[0].width_ft"),
            other => panic!("expected InvalidInput, got {:?}", other),
        }
        let input = SignLoadInput::new(vec![Cabinet::new(8.0, 3.0)], 0.0, -5.0, ExposureCategory::C, RiskCategory::II);
        assert!(calculate(&input).is_err());
    }
}
