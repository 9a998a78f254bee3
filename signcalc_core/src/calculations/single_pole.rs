//! # Single-Pole Sign
//!
//! Full structural and foundation check of a sign face carried by one
//! cantilevered steel pole on a drilled pier.
//!
//! ## Pipeline
//!
//! 1. Wind load on the sign face (ASCE 7-22 Chapter 29)
//! 2. Dead load = sign area × unit weight + pole height × pole weight
//! 3. All seven IBC ASD combinations on the base moment; the largest governs
//! 4. Bending and shear stress (AISC 360-22 F, G)
//! 5. Tip deflection at the sign centroid (AISC 360-22 L)
//! 6. Pier diameter search for overturning, then soil bearing and concrete
//! 7. Pass/fail flags, critical failure mode, warnings and citations
//!
//! ## Example
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
//! assert_eq!(result.governing_load_combination, "LC6");
//! assert!(result.passes_all_checks);
//! assert!(result.critical_failure_mode.is_none());
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use super::failure::{critical_failure_mode, FailureMode};
use super::pole_check::{
    check_deflection, check_stress, failure_severities, pole_warnings, size_foundation, DeflectionCheck,
    FoundationCheck, FoundationDemand, StressCheck,
};
use crate::code_refs::{AISC_FLEXURE, AISC_SERVICEABILITY, AISC_SHEAR, IBC_FOUNDATIONS, IBC_LOAD_COMBINATIONS};
use crate::constants::*;
use crate::errors::{CalcError, CalcResult};
use crate::loads::wind::{self, ExposureCategory, RiskCategory, WindFactors, WindLoadInput, WindLoadResult};
use crate::loads::{apply_all, find_governing_combination, ibc_asd_combinations, CombinationResult, LoadCase, LoadType};
use crate::materials::{builtin_catalog, PoleSection, SectionChoice, SectionProvider};
use crate::units::{Kips, Pounds};

fn default_sign_weight_psf() -> f64 {
    DEFAULT_SIGN_WEIGHT_PSF
}

fn default_soil_bearing_psf() -> f64 {
    DEFAULT_SOIL_BEARING_PSF
}

fn default_deflection_limit() -> f64 {
    DEFAULT_DEFLECTION_LIMIT
}

fn default_min_overturning_sf() -> f64 {
    DEFAULT_MIN_OVERTURNING_SF
}

/// Configuration for a single-pole sign.
///
/// Fields with engineering defaults may be omitted from JSON.
///
/// ## JSON Example
///
/// ```json
/// {
///   "pole_height_ft": 12.0,
///   "pole_section": "HSS8X8X1/4",
///   "embedment_depth_ft": 5.0,
///   "sign_width_ft": 8.0,
///   "sign_height_ft": 3.0,
///   "sign_area_sqft": 24.0,
///   "wind_speed_mph": 115.0,
///   "exposure": "C",
///   "risk_category": "II"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SinglePoleConfig {
    /// Grade to bottom of sign (ft)
    pub pole_height_ft: f64,
    /// Catalog designation or explicit section properties
    pub pole_section: SectionChoice,
    /// Pier embedment depth (ft)
    pub embedment_depth_ft: f64,

    /// Sign face width (ft)
    pub sign_width_ft: f64,
    /// Sign face height (ft)
    pub sign_height_ft: f64,
    /// Sign face area (sqft)
    pub sign_area_sqft: f64,
    /// Sign dead load per unit face area (psf)
    #[serde(default = "default_sign_weight_psf")]
    pub sign_weight_psf: f64,

    /// Basic wind speed V (mph)
    pub wind_speed_mph: f64,
    pub risk_category: RiskCategory,
    pub exposure: ExposureCategory,
    #[serde(default)]
    pub wind_factors: WindFactors,

    /// Allowable soil bearing pressure (psf)
    #[serde(default = "default_soil_bearing_psf")]
    pub soil_bearing_capacity_psf: f64,
    /// Required L/δ
    #[serde(default = "default_deflection_limit")]
    pub deflection_limit_ratio: f64,
    /// Required overturning safety factor
    #[serde(default = "default_min_overturning_sf")]
    pub min_overturning_sf: f64,
}

impl SinglePoleConfig {
    /// Required fields only; everything else takes its engineering default.
    /// Sign area is width × height.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        pole_height_ft: f64,
        pole_section: impl Into<SectionChoice>,
        embedment_depth_ft: f64,
        sign_width_ft: f64,
        sign_height_ft: f64,
        wind_speed_mph: f64,
        exposure: ExposureCategory,
        risk_category: RiskCategory,
    ) -> Self {
        SinglePoleConfig {
            pole_height_ft,
            pole_section: pole_section.into(),
            embedment_depth_ft,
            sign_width_ft,
            sign_height_ft,
            sign_area_sqft: sign_width_ft * sign_height_ft,
            sign_weight_psf: DEFAULT_SIGN_WEIGHT_PSF,
            wind_speed_mph,
            risk_category,
            exposure,
            wind_factors: WindFactors::default(),
            soil_bearing_capacity_psf: DEFAULT_SOIL_BEARING_PSF,
            deflection_limit_ratio: DEFAULT_DEFLECTION_LIMIT,
            min_overturning_sf: DEFAULT_MIN_OVERTURNING_SF,
        }
    }

    /// Override the face area for a non-rectangular sign
    pub fn with_sign_area_sqft(self, sign_area_sqft: f64) -> Self {
        SinglePoleConfig { sign_area_sqft, ..self }
    }

    pub fn with_sign_weight_psf(self, sign_weight_psf: f64) -> Self {
        SinglePoleConfig { sign_weight_psf, ..self }
    }

    pub fn with_wind_factors(self, wind_factors: WindFactors) -> Self {
        SinglePoleConfig { wind_factors, ..self }
    }

    pub fn with_soil_bearing_capacity_psf(self, soil_bearing_capacity_psf: f64) -> Self {
        SinglePoleConfig { soil_bearing_capacity_psf, ..self }
    }

    pub fn with_deflection_limit_ratio(self, deflection_limit_ratio: f64) -> Self {
        SinglePoleConfig { deflection_limit_ratio, ..self }
    }

    pub fn with_min_overturning_sf(self, min_overturning_sf: f64) -> Self {
        SinglePoleConfig { min_overturning_sf, ..self }
    }

    /// Wind input for the whole sign face
    pub fn wind_input(&self) -> WindLoadInput {
        WindLoadInput {
            wind_speed_mph: self.wind_speed_mph,
            exposure: self.exposure,
            risk_category: self.risk_category,
            pole_height_ft: self.pole_height_ft,
            sign_height_ft: self.sign_height_ft,
            sign_area_sqft: self.sign_area_sqft,
            factors: self.wind_factors,
        }
    }
}

/// Results of a single-pole calculation.
///
/// Every intermediate value is kept so a report can rebuild the calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SinglePoleResult {
    /// Wind load on the sign face
    pub wind: WindLoadResult,
    /// Section the checks ran against
    pub section: PoleSection,

    /// Sign face dead load (lb)
    pub sign_dead_load_lbs: f64,
    /// Pole self-weight above grade (lb)
    pub pole_dead_load_lbs: f64,
    /// Total vertical dead load (lb)
    pub total_dead_load_lbs: f64,

    /// Label of the combination with the largest base moment
    pub governing_load_combination: String,
    /// Base moment under each combination (kip-ft), in code order
    pub load_combinations: Vec<CombinationResult>,
    /// Governing base moment (kip-ft)
    pub design_moment_kipft: f64,
    /// Base shear under the governing combination (kips)
    pub design_shear_kips: f64,

    pub stress: StressCheck,
    pub deflection: DeflectionCheck,
    pub foundation: FoundationCheck,
    /// Pole L/r over its height above grade
    pub slenderness_ratio: f64,

    pub passes_strength_check: bool,
    pub passes_deflection_check: bool,
    pub passes_overturning_check: bool,
    pub passes_soil_bearing_check: bool,
    pub passes_all_checks: bool,
    /// Worst failing check, `None` when everything passes
    pub critical_failure_mode: Option<FailureMode>,

    pub warnings: Vec<String>,
    pub code_references: Vec<String>,
}

/// Calculate a single-pole sign, resolving designations from the built-in catalog.
///
/// # Errors
///
/// * `SectionNotFound` - the designation is not in the catalog
/// * `InvalidSection` - the section has non-positive area or section modulus
pub fn calculate(config: &SinglePoleConfig) -> CalcResult<SinglePoleResult> {
    calculate_with_provider(config, builtin_catalog())
}

/// Calculate a single-pole sign against any section provider.
pub fn calculate_with_provider(
    config: &SinglePoleConfig,
    provider: &dyn SectionProvider,
) -> CalcResult<SinglePoleResult> {
    let section = config.pole_section.resolve(provider)?;

    // Wind
    let wind = wind::calculate(&config.wind_input());
    let wind_force_kips = Kips::from(Pounds(wind.total_wind_force_lbs)).value();

    // Dead load
    let sign_dead_load_lbs = config.sign_area_sqft * config.sign_weight_psf;
    let pole_dead_load_lbs = section.weight_plf * config.pole_height_ft;
    let total_dead_load_lbs = sign_dead_load_lbs + pole_dead_load_lbs;

    // Load combinations on the base moment; vertical dead load is concentric
    let combinations = ibc_asd_combinations();
    let moments = LoadCase::new("Base moment")
        .with_load(LoadType::Dead, 0.0)
        .with_load(LoadType::Wind, wind.base_moment_kipft);
    let governing = find_governing_combination(&moments, &combinations)
        .ok_or_else(|| CalcError::missing_field("load_combinations"))?;
    let load_combinations = apply_all(&moments, &combinations);

    let shears = LoadCase::new("Base shear").with_load(LoadType::Wind, wind_force_kips);
    let design_shear_kips = combinations
        .iter()
        .find(|combo| combo.name == governing.name)
        .map(|combo| combo.apply(&shears))
        .unwrap_or(wind_force_kips);
    let design_moment_kipft = governing.value;

    debug!(
        "single pole: governing {} M={:.3} kip-ft V={:.4} kips",
        governing.name, design_moment_kipft, design_shear_kips
    );

    // Member and serviceability
    let stress = check_stress(&section, design_moment_kipft, design_shear_kips)?;
    let deflection = check_deflection(
        &section,
        wind_force_kips,
        wind.centroid_height_ft,
        config.pole_height_ft,
        config.deflection_limit_ratio,
    );

    // Foundation
    let foundation = size_foundation(&FoundationDemand {
        overturning_moment_kipft: design_moment_kipft,
        dead_load_lbs: total_dead_load_lbs,
        embedment_depth_ft: config.embedment_depth_ft,
        soil_bearing_capacity_psf: config.soil_bearing_capacity_psf,
        min_overturning_sf: config.min_overturning_sf,
        max_diameter_tenths: MAX_SINGLE_POLE_DIAMETER_TENTHS,
    });

    // Verdict
    let passes_strength_check = stress.passes;
    let passes_deflection_check = deflection.passes;
    let passes_overturning_check = foundation.passes_overturning;
    let passes_soil_bearing_check = foundation.passes_soil_bearing;
    let passes_all_checks = passes_strength_check
        && passes_deflection_check
        && passes_overturning_check
        && passes_soil_bearing_check;

    let critical_failure_mode = if passes_all_checks {
        None
    } else {
        critical_failure_mode(failure_severities(&stress, &deflection, &foundation))
    };

    let mut warnings = pole_warnings(&section, config.pole_height_ft, &stress, &foundation);
    let overall_height_ft = config.pole_height_ft + config.sign_height_ft;
    if overall_height_ft > POLE_HEIGHT_REVIEW_FT {
        warnings.push(format!(
            "Overall height {:.1} ft exceeds {:.0} ft. Engineering review recommended.",
            overall_height_ft, POLE_HEIGHT_REVIEW_FT
        ));
    }

    let mut code_references = wind.code_references.clone();
    code_references.push(IBC_LOAD_COMBINATIONS.cite(format_args!("Governing combination = {}", governing.name)));
    code_references.push(AISC_FLEXURE.cite("Flexural Design (ASD)"));
    code_references.push(AISC_SHEAR.cite("Shear Design (ASD)"));
    code_references.push(AISC_SERVICEABILITY.cite("Serviceability (Deflection)"));
    code_references.push(IBC_LOAD_COMBINATIONS.cite("Overturning Stability"));
    code_references.push(IBC_FOUNDATIONS.cite("Foundations"));

    let slenderness_ratio = section.slenderness(config.pole_height_ft);

    Ok(SinglePoleResult {
        wind,
        section,
        sign_dead_load_lbs,
        pole_dead_load_lbs,
        total_dead_load_lbs,
        governing_load_combination: governing.name,
        load_combinations,
        design_moment_kipft,
        design_shear_kips,
        stress,
        deflection,
        foundation,
        slenderness_ratio,
        passes_strength_check,
        passes_deflection_check,
        passes_overturning_check,
        passes_soil_bearing_check,
        passes_all_checks,
        critical_failure_mode,
        warnings,
        code_references,
    })
}
