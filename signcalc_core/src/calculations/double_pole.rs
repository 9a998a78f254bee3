//! # Double-Pole Sign
//!
//! A sign face carried by two identical poles, each on its own drilled pier.
//!
//! Wind is computed once for the whole face, then shared between the poles.
//! Each pole gets the same stress, deflection and foundation checks as a
//! single pole under its share. On top of that the pair is checked for
//! lateral stability (spacing against height) and warned about differential
//! settlement when the piers are far apart.
//!
//! ## Load Distribution
//!
//! | Policy         | Share per pole | Note                                   |
//! |----------------|----------------|----------------------------------------|
//! | `equal`        | 50%            |                                        |
//! | `proportional` | 50%            | Symmetric geometry assumed, warns      |
//!
//! ## Lateral Stability
//!
//! With no bracing declared, spacing above 1.5 × pole height fails the check
//! (bracing recommended) and above 2.0 × it is flagged as required. Declared
//! bracing always passes.

use log::debug;
use serde::{Deserialize, Serialize};

use super::failure::{critical_failure_mode, FailureMode, FailureSeverity};
use super::pole_check::{
    check_deflection, check_stress, failure_severities, pole_warnings, size_foundation, DeflectionCheck,
    FoundationCheck, FoundationDemand, StressCheck,
};
use crate::code_refs::{AISC_FLEXURE, AISC_SERVICEABILITY, AISC_SHEAR, IBC_FOUNDATIONS, IBC_LOAD_COMBINATIONS};
use crate::constants::*;
use crate::errors::{CalcError, CalcResult};
use crate::loads::wind::{self, ExposureCategory, RiskCategory, WindFactors, WindLoadInput, WindLoadResult};
use crate::materials::{builtin_catalog, PoleSection, SectionChoice, SectionProvider};
use crate::units::{Kips, Pounds};

/// How wind is shared between the two poles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadDistribution {
    /// Each pole carries half
    #[default]
    Equal,
    /// Tributary share; currently half each, assuming a symmetric sign
    Proportional,
}

impl LoadDistribution {
    /// Fraction of the total wind load carried by one pole.
    ///
    /// `Proportional` falls back to 0.5 and the solver attaches a warning
    /// saying a symmetric sign was assumed.
    pub fn share_per_pole(&self) -> f64 {
        match self {
            LoadDistribution::Equal => 0.5,
            LoadDistribution::Proportional => 0.5,
        }
    }
}

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

fn default_settlement_limit_in() -> f64 {
    DEFAULT_SETTLEMENT_LIMIT_IN
}

/// Configuration for a two-pole sign.
///
/// ## JSON Example
///
/// ```json
/// {
///   "pole_height_ft": 17.0,
///   "pole_section": "HSS6X6X1/4",
///   "pole_spacing_ft": 12.0,
///   "embedment_depth_ft": 6.0,
///   "sign_width_ft": 16.0,
///   "sign_height_ft": 6.0,
///   "sign_area_sqft": 96.0,
///   "wind_speed_mph": 115.0,
///   "exposure": "C",
///   "risk_category": "II",
///   "load_distribution": "equal"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoublePoleConfig {
    /// Grade to bottom of sign (ft)
    pub pole_height_ft: f64,
    /// Section of each pole
    pub pole_section: SectionChoice,
    /// Center-to-center pole spacing (ft)
    pub pole_spacing_ft: f64,
    /// Pier embedment depth (ft)
    pub embedment_depth_ft: f64,

    pub sign_width_ft: f64,
    pub sign_height_ft: f64,
    pub sign_area_sqft: f64,
    #[serde(default = "default_sign_weight_psf")]
    pub sign_weight_psf: f64,

    pub wind_speed_mph: f64,
    pub risk_category: RiskCategory,
    pub exposure: ExposureCategory,
    #[serde(default)]
    pub wind_factors: WindFactors,

    #[serde(default = "default_soil_bearing_psf")]
    pub soil_bearing_capacity_psf: f64,
    #[serde(default = "default_deflection_limit")]
    pub deflection_limit_ratio: f64,
    #[serde(default = "default_min_overturning_sf")]
    pub min_overturning_sf: f64,

    #[serde(default)]
    pub load_distribution: LoadDistribution,
    /// Bracing between the poles is part of the design
    #[serde(default, alias = "lateral_bracing_required")]
    pub lateral_bracing_provided: bool,
    /// Allowable differential settlement between piers (in)
    #[serde(default = "default_settlement_limit_in")]
    pub differential_settlement_limit_in: f64,
}

impl DoublePoleConfig {
    /// Required fields only; sign area is width × height
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        pole_height_ft: f64,
        pole_section: impl Into<SectionChoice>,
        pole_spacing_ft: f64,
        embedment_depth_ft: f64,
        sign_width_ft: f64,
        sign_height_ft: f64,
        wind_speed_mph: f64,
        exposure: ExposureCategory,
        risk_category: RiskCategory,
    ) -> Self {
        DoublePoleConfig {
            pole_height_ft,
            pole_section: pole_section.into(),
            pole_spacing_ft,
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
            load_distribution: LoadDistribution::Equal,
            lateral_bracing_provided: false,
            differential_settlement_limit_in: DEFAULT_SETTLEMENT_LIMIT_IN,
        }
    }

    pub fn with_sign_area_sqft(self, sign_area_sqft: f64) -> Self {
        DoublePoleConfig { sign_area_sqft, ..self }
    }

    pub fn with_sign_weight_psf(self, sign_weight_psf: f64) -> Self {
        DoublePoleConfig { sign_weight_psf, ..self }
    }

    pub fn with_wind_factors(self, wind_factors: WindFactors) -> Self {
        DoublePoleConfig { wind_factors, ..self }
    }

    pub fn with_soil_bearing_capacity_psf(self, soil_bearing_capacity_psf: f64) -> Self {
        DoublePoleConfig { soil_bearing_capacity_psf, ..self }
    }

    pub fn with_deflection_limit_ratio(self, deflection_limit_ratio: f64) -> Self {
        DoublePoleConfig { deflection_limit_ratio, ..self }
    }

    pub fn with_min_overturning_sf(self, min_overturning_sf: f64) -> Self {
        DoublePoleConfig { min_overturning_sf, ..self }
    }

    pub fn with_load_distribution(self, load_distribution: LoadDistribution) -> Self {
        DoublePoleConfig { load_distribution, ..self }
    }

    pub fn with_lateral_bracing(self, lateral_bracing_provided: bool) -> Self {
        DoublePoleConfig { lateral_bracing_provided, ..self }
    }

    pub fn with_differential_settlement_limit_in(self, differential_settlement_limit_in: f64) -> Self {
        DoublePoleConfig { differential_settlement_limit_in, ..self }
    }

    /// Validate the pole layout.
    pub fn validate(&self) -> CalcResult<()> {
        if self.pole_spacing_ft < MIN_POLE_SPACING_FT {
            return Err(CalcError::invalid_input(
                "pole_spacing_ft",
                self.pole_spacing_ft.to_string(),
                format!("Pole spacing is too small (minimum {:.1} ft)", MIN_POLE_SPACING_FT),
            ));
        }
        Ok(())
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

/// Results of a double-pole calculation. Member and pier values are per pole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoublePoleResult {
    /// Wind on the whole sign face
    pub wind: WindLoadResult,
    pub section: PoleSection,

    pub load_distribution: LoadDistribution,
    /// Wind force carried by one pole (lb)
    pub load_per_pole_lbs: f64,
    /// Base moment carried by one pole (kip-ft)
    pub moment_per_pole_kipft: f64,
    /// Base shear carried by one pole (kips)
    pub shear_per_pole_kips: f64,
    /// Spacing / pole height
    pub spacing_to_height_ratio: f64,

    /// Whole sign face (lb)
    pub sign_dead_load_lbs: f64,
    /// One pole above grade (lb)
    pub pole_dead_load_lbs: f64,
    /// Sign plus both poles (lb)
    pub total_dead_load_lbs: f64,
    /// Vertical load on one pier (lb)
    pub dead_load_per_foundation_lbs: f64,

    pub stress: StressCheck,
    pub deflection: DeflectionCheck,
    pub foundation: FoundationCheck,
    /// Concrete for both piers (cubic yards)
    pub concrete_volume_total_cy: f64,
    pub slenderness_ratio: f64,

    pub passes_strength_check: bool,
    pub passes_deflection_check: bool,
    pub passes_overturning_check: bool,
    pub passes_soil_bearing_check: bool,
    pub passes_lateral_stability_check: bool,
    pub passes_all_checks: bool,
    pub critical_failure_mode: Option<FailureMode>,

    pub warnings: Vec<String>,
    pub code_references: Vec<String>,
}

/// Calculate a double-pole sign, resolving designations from the built-in catalog.
///
/// # Errors
///
/// * `InvalidInput` - pole spacing below 3.0 ft
/// * `SectionNotFound` / `InvalidSection` - bad pole section
pub fn calculate(config: &DoublePoleConfig) -> CalcResult<DoublePoleResult> {
    calculate_with_provider(config, builtin_catalog())
}

/// Calculate a double-pole sign against any section provider.
pub fn calculate_with_provider(
    config: &DoublePoleConfig,
    provider: &dyn SectionProvider,
) -> CalcResult<DoublePoleResult> {
    config.validate()?;
    let section = config.pole_section.resolve(provider)?;

    let mut warnings = Vec::new();
    let mut code_references = Vec::new();

    // Wind on the whole face, then shared
    let wind = wind::calculate(&config.wind_input());
    let share = config.load_distribution.share_per_pole();
    let load_per_pole_lbs = wind.total_wind_force_lbs * share;
    let moment_per_pole_kipft = wind.base_moment_kipft * share;
    let shear_per_pole_kips = Kips::from(Pounds(load_per_pole_lbs)).value();

    match config.load_distribution {
        LoadDistribution::Equal => {
            code_references.push("Load Distribution: Equal (50% per pole)".to_string());
        }
        LoadDistribution::Proportional => {
            warnings.push(
                "Proportional load distribution assumes symmetric sign geometry. \
                 For non-symmetric signs, manual adjustment may be required."
                    .to_string(),
            );
            code_references.push("Load Distribution: Proportional (symmetric assumed)".to_string());
        }
    }

    // Lateral stability
    let spacing_to_height_ratio = config.pole_spacing_ft / config.pole_height_ft;
    let passes_lateral_stability_check = if config.lateral_bracing_provided {
        code_references.push("Lateral bracing provided between poles".to_string());
        true
    } else if spacing_to_height_ratio > BRACING_REQUIRED_RATIO {
        warnings.push(format!(
            "Pole spacing ({} ft) exceeds 2× pole height ({} ft). Lateral bracing REQUIRED for stability.",
            config.pole_spacing_ft, config.pole_height_ft
        ));
        false
    } else if spacing_to_height_ratio > BRACING_RECOMMENDED_RATIO {
        warnings.push(format!(
            "Pole spacing ({} ft) exceeds 1.5× pole height ({} ft). Lateral bracing recommended.",
            config.pole_spacing_ft, config.pole_height_ft
        ));
        false
    } else {
        true
    };

    // Dead load; each pier takes half the sign plus its own pole
    let sign_dead_load_lbs = config.sign_area_sqft * config.sign_weight_psf;
    let pole_dead_load_lbs = section.weight_plf * config.pole_height_ft;
    let total_dead_load_lbs = sign_dead_load_lbs + 2.0 * pole_dead_load_lbs;
    let dead_load_per_foundation_lbs = sign_dead_load_lbs / 2.0 + pole_dead_load_lbs;

    debug!(
        "double pole: {:?} share, M/pole={:.3} kip-ft V/pole={:.4} kips s/h={:.2}",
        config.load_distribution, moment_per_pole_kipft, shear_per_pole_kips, spacing_to_height_ratio
    );

    // Per-pole member checks
    let stress = check_stress(&section, moment_per_pole_kipft, shear_per_pole_kips)?;
    code_references.push(AISC_FLEXURE.cite("Flexural Design (ASD)"));
    code_references.push(AISC_SHEAR.cite("Shear Design (ASD)"));

    let deflection = check_deflection(
        &section,
        shear_per_pole_kips,
        wind.centroid_height_ft,
        config.pole_height_ft,
        config.deflection_limit_ratio,
    );
    code_references.push(AISC_SERVICEABILITY.cite("Serviceability (Deflection)"));

    // Per-pole pier
    let foundation = size_foundation(&FoundationDemand {
        overturning_moment_kipft: moment_per_pole_kipft,
        dead_load_lbs: dead_load_per_foundation_lbs,
        embedment_depth_ft: config.embedment_depth_ft,
        soil_bearing_capacity_psf: config.soil_bearing_capacity_psf,
        min_overturning_sf: config.min_overturning_sf,
        max_diameter_tenths: MAX_DOUBLE_POLE_DIAMETER_TENTHS,
    });
    let concrete_volume_total_cy = 2.0 * foundation.concrete_volume_cy;
    code_references.push(IBC_LOAD_COMBINATIONS.cite("Overturning Stability"));
    code_references.push(IBC_FOUNDATIONS.cite("Foundations"));

    // Verdict
    let passes_strength_check = stress.passes;
    let passes_deflection_check = deflection.passes;
    let passes_overturning_check = foundation.passes_overturning;
    let passes_soil_bearing_check = foundation.passes_soil_bearing;
    let passes_all_checks = passes_strength_check
        && passes_deflection_check
        && passes_overturning_check
        && passes_soil_bearing_check
        && passes_lateral_stability_check;

    let critical_failure_mode = if passes_all_checks {
        None
    } else {
        let mut failures = failure_severities(&stress, &deflection, &foundation);
        if !passes_lateral_stability_check {
            failures.push(FailureSeverity {
                mode: FailureMode::LateralStability,
                severity: spacing_to_height_ratio / BRACING_RECOMMENDED_RATIO,
            });
        }
        critical_failure_mode(failures)
    };

    warnings.extend(pole_warnings(&section, config.pole_height_ft, &stress, &foundation));
    if config.pole_spacing_ft > SETTLEMENT_SPACING_FT {
        warnings.push(format!(
            "Large pole spacing ({} ft) may result in differential settlement beyond {} in. \
             Foundation coordination critical.",
            config.pole_spacing_ft, config.differential_settlement_limit_in
        ));
    }

    let mut all_references = wind.code_references.clone();
    all_references.extend(code_references);

    let slenderness_ratio = section.slenderness(config.pole_height_ft);

    Ok(DoublePoleResult {
        wind,
        section,
        load_distribution: config.load_distribution,
        load_per_pole_lbs,
        moment_per_pole_kipft,
        shear_per_pole_kips,
        spacing_to_height_ratio,
        sign_dead_load_lbs,
        pole_dead_load_lbs,
        total_dead_load_lbs,
        dead_load_per_foundation_lbs,
        stress,
        deflection,
        foundation,
        concrete_volume_total_cy,
        slenderness_ratio,
        passes_strength_check,
        passes_deflection_check,
        passes_overturning_check,
        passes_soil_bearing_check,
        passes_lateral_stability_check,
        passes_all_checks,
        critical_failure_mode,
        warnings,
        code_references: all_references,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::SectionFamily;

    fn hss6() -> PoleSection {
        PoleSection {
            designation: "HSS6X6X1/4".to_string(),
            family: SectionFamily::HSS,
            area_in2: 5.36,
            depth_in: 6.0,
            weight_plf: 18.2,
            sx_in3: 11.2,
            ix_in4: 33.5,
            rx_in: 2.50,
            fy_ksi: 50.0,
            fu_ksi: 65.0,
            is_high_strength: true,
        }
    }

    fn reference_config() -> DoublePoleConfig {
        DoublePoleConfig::new(17.0, hss6(), 12.0, 6.0, 16.0, 6.0, 115.0, ExposureCategory::C, RiskCategory::II)
    }

    #[test]
    fn test_equal_split_is_exactly_half() {
        let result = calculate(&reference_config()).unwrap();
        assert_eq!(result.moment_per_pole_kipft, result.wind.base_moment_kipft / 2.0);
        assert_eq!(result.load_per_pole_lbs, result.wind.total_wind_force_lbs / 2.0);
        // Centroid 20 ft: Kz 0.90, F ≈ 2536 lb, M ≈ 50.72 kip-ft
        assert!((result.wind.total_wind_force_lbs - 2536.0).abs() < 1.0);
        assert!((result.moment_per_pole_kipft - 25.36).abs() < 0.02);
    }

    #[test]
    fn test_proportional_matches_equal_with_warning() {
        let equal = calculate(&reference_config()).unwrap();
        let proportional =
            calculate(&reference_config().with_load_distribution(LoadDistribution::Proportional)).unwrap();

        assert_eq!(proportional.moment_per_pole_kipft, equal.moment_per_pole_kipft);
        assert_eq!(proportional.stress, equal.stress);
        assert!(proportional.warnings.iter().any(|w| w.contains("symmetric sign geometry")));
        assert!(!equal.warnings.iter().any(|w| w.contains("symmetric sign geometry")));
    }

    #[test]
    fn test_dead_load_split() {
        let result = calculate(&reference_config()).unwrap();
        // Sign 96 × 3 = 288 lb, pole 17 × 18.2 = 309.4 lb
        assert!((result.sign_dead_load_lbs - 288.0).abs() < 1e-9);
        assert!((result.total_dead_load_lbs - (288.0 + 2.0 * 309.4)).abs() < 1e-9);
        assert!((result.dead_load_per_foundation_lbs - (144.0 + 309.4)).abs() < 1e-9);
        assert_eq!(result.concrete_volume_total_cy, 2.0 * result.foundation.concrete_volume_cy);
    }

    #[test]
    fn test_spacing_too_small() {
        let mut config = reference_config();
        config.pole_spacing_ft = 2.5;
        match calculate(&config) {
            Err(CalcError::InvalidInput { field, .. }) => assert_eq!(field, "pole_spacing_ft"),
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_lateral_stability_recommended() {
        // 30 / 17 = 1.76
        let mut config = reference_config();
        config.pole_spacing_ft = 30.0;
        let result = calculate(&config).unwrap();
        assert!(!result.passes_lateral_stability_check);
        assert!(!result.passes_all_checks);
        assert!(result.warnings.iter().any(|w| w.contains("Lateral bracing recommended")));
        assert!(result.warnings.iter().any(|w| w.contains("differential settlement")));
    }

    #[test]
    fn test_lateral_stability_required() {
        // 40 / 17 = 2.35
        let mut config = reference_config();
        config.pole_spacing_ft = 40.0;
        let result = calculate(&config).unwrap();
        assert!(!result.passes_lateral_stability_check);
        assert!(result.warnings.iter().any(|w| w.contains("REQUIRED")));
    }

    #[test]
    fn test_bracing_provided_passes_stability() {
        let mut config = reference_config().with_lateral_bracing(true);
        config.pole_spacing_ft = 40.0;
        let result = calculate(&config).unwrap();
        assert!(result.passes_lateral_stability_check);
        assert!(result.code_references.iter().any(|r| r == "Lateral bracing provided between poles"));
    }

    #[test]
    fn test_lateral_stability_governs_small_sign() {
        // Tiny, light sign on stiff poles far apart: only stability fails
        let mut config =
            DoublePoleConfig::new(6.0, hss6(), 14.0, 6.0, 2.0, 1.0, 90.0, ExposureCategory::B, RiskCategory::II);
        config.sign_area_sqft = 2.0;
        let result = calculate(&config).unwrap();
        assert!(result.passes_strength_check);
        assert!(result.passes_deflection_check);
        assert!(result.passes_overturning_check);
        assert!(!result.passes_lateral_stability_check);
        assert_eq!(result.critical_failure_mode, Some(FailureMode::LateralStability));
    }

    #[test]
    fn test_json_bracing_alias() {
        let json = r#"{
            "pole_height_ft": 17.0,
            "pole_section": "HSS6X6X1/4",
            "pole_spacing_ft": 12.0,
            "embedment_depth_ft": 6.0,
            "sign_width_ft": 16.0,
            "sign_height_ft": 6.0,
            "sign_area_sqft": 96.0,
            "wind_speed_mph": 115.0,
            "exposure": "C",
            "risk_category": "II",
            "lateral_bracing_required": true
        }"#;
        let config: DoublePoleConfig = serde_json::from_str(json).unwrap();
        assert!(config.lateral_bracing_provided);
        assert_eq!(config.load_distribution, LoadDistribution::Equal);
        assert_eq!(config.differential_settlement_limit_in, 0.5);
    }
}
