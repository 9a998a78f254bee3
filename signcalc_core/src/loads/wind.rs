//! # Wind Loads on Signs (ASCE 7-22)
//!
//! Design wind pressure, force and base moment for a flat sign face on a pole,
//! per ASCE 7-22 Chapters 26 and 29.
//!
//! ## Procedure
//!
//! 1. `Kz` from Table 26.10-1 at the sign centroid height
//! 2. `qz = 0.00256 Kz Kzt Kd Ke V²` (Eq 26.10-1)
//! 3. `Iw` from Table 1.5-2
//! 4. `p = qz G Cf Iw`
//! 5. `F = p A`
//! 6. `M = F (h_pole + h_sign/2)`
//!
//! Every step is plain arithmetic. Inputs are not range-checked here: zero
//! or negative geometry flows through the formulas, so zero area or zero
//! speed gives exactly zero force and moment.
//!
//! ## Example
//!
//! ```rust
//! use signcalc_core::loads::wind::{self, ExposureCategory, RiskCategory, WindFactors, WindLoadInput};
//!
//! let input = WindLoadInput {
//!     wind_speed_mph: 115.0,
//!     exposure: ExposureCategory::C,
//!     risk_category: RiskCategory::II,
//!     pole_height_ft: 12.0,
//!     sign_height_ft: 3.0,
//!     sign_area_sqft: 24.0,
//!     factors: WindFactors::default(),
//! };
//!
//! let result = wind::calculate(&input);
//! assert!((result.velocity_pressure_qz_psf - 24.46).abs() < 0.01);
//! assert!((result.total_wind_force_lbs - 598.8).abs() < 0.1);
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use crate::code_refs::{
    ASCE7_DIRECTIONALITY, ASCE7_FORCE_COEFF, ASCE7_IMPORTANCE, ASCE7_KZ_TABLE,
    ASCE7_OTHER_STRUCTURES, ASCE7_VELOCITY_PRESSURE,
};
use crate::constants::*;
use crate::units::{FtLb, KipFt};

/// Heights (ft) at which Table 26.10-1 tabulates Kz
const KZ_HEIGHTS_FT: [f64; 14] = [
    15.0, 20.0, 25.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0, 100.0, 120.0, 140.0, 160.0,
];

const KZ_EXPOSURE_B: [f64; 14] = [
    0.57, 0.62, 0.66, 0.70, 0.76, 0.81, 0.85, 0.89, 0.93, 0.96, 0.99, 1.04, 1.09, 1.13,
];

const KZ_EXPOSURE_C: [f64; 14] = [
    0.85, 0.90, 0.94, 0.98, 1.04, 1.09, 1.13, 1.17, 1.21, 1.24, 1.26, 1.31, 1.36, 1.39,
];

const KZ_EXPOSURE_D: [f64; 14] = [
    1.03, 1.08, 1.12, 1.16, 1.22, 1.27, 1.31, 1.34, 1.38, 1.40, 1.43, 1.48, 1.52, 1.55,
];

/// Surface roughness exposure category, Section 26.7
///
/// Ordered from most to least sheltered; `Kz` never decreases from B to C to D.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ExposureCategory {
    /// Urban and suburban areas, wooded terrain
    B,
    /// Open terrain with scattered obstructions
    C,
    /// Flat, unobstructed areas and water surfaces
    D,
}

impl ExposureCategory {
    pub const ALL: [ExposureCategory; 3] = [ExposureCategory::B, ExposureCategory::C, ExposureCategory::D];

    /// Kz column of Table 26.10-1
    fn kz_table(&self) -> &'static [f64; 14] {
        match self {
            ExposureCategory::B => &KZ_EXPOSURE_B,
            ExposureCategory::C => &KZ_EXPOSURE_C,
            ExposureCategory::D => &KZ_EXPOSURE_D,
        }
    }

    /// Power-law exponent α, Table 26.11-1
    pub fn alpha(&self) -> f64 {
        match self {
            ExposureCategory::B => 7.0,
            ExposureCategory::C => 9.5,
            ExposureCategory::D => 11.5,
        }
    }

    /// Gradient height zg (ft), Table 26.11-1
    pub fn gradient_height_ft(&self) -> f64 {
        match self {
            ExposureCategory::B => 1200.0,
            ExposureCategory::C => 900.0,
            ExposureCategory::D => 700.0,
        }
    }
}

impl std::fmt::Display for ExposureCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let code = match self {
            ExposureCategory::B => "B",
            ExposureCategory::C => "C",
            ExposureCategory::D => "D",
        };
        write!(f, "{}", code)
    }
}

/// Risk category, IBC Table 1604.5
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskCategory {
    I,
    II,
    III,
    IV,
}

impl RiskCategory {
    /// Wind importance factor Iw, Table 1.5-2
    pub fn importance_factor(&self) -> f64 {
        match self {
            RiskCategory::I => IMPORTANCE_FACTOR_I,
            RiskCategory::II => IMPORTANCE_FACTOR_II,
            RiskCategory::III => IMPORTANCE_FACTOR_III,
            RiskCategory::IV => IMPORTANCE_FACTOR_IV,
        }
    }
}

fn default_kzt() -> f64 { DEFAULT_KZT }
fn default_kd() -> f64 { DEFAULT_KD }
fn default_ke() -> f64 { DEFAULT_KE }
fn default_gust_factor() -> f64 { DEFAULT_GUST_FACTOR }
fn default_force_coefficient() -> f64 { DEFAULT_FORCE_COEFF }

/// Code-mandated wind adjustment factors
///
/// Every field has an engineering default, so `{}` in JSON is a valid value.
///
/// ## JSON Example
///
/// ```json
/// { "kzt": 1.0, "kd": 0.85, "ke": 1.0, "gust_factor": 0.85, "force_coefficient": 1.2 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindFactors {
    /// Topographic factor Kzt
    #[serde(default = "default_kzt")]
    pub kzt: f64,
    /// Directionality factor Kd
    #[serde(default = "default_kd")]
    pub kd: f64,
    /// Ground elevation factor Ke
    #[serde(default = "default_ke")]
    pub ke: f64,
    /// Gust-effect factor G
    #[serde(default = "default_gust_factor")]
    pub gust_factor: f64,
    /// Force coefficient Cf
    #[serde(default = "default_force_coefficient")]
    pub force_coefficient: f64,
}

impl Default for WindFactors {
    fn default() -> Self {
        WindFactors {
            kzt: DEFAULT_KZT,
            kd: DEFAULT_KD,
            ke: DEFAULT_KE,
            gust_factor: DEFAULT_GUST_FACTOR,
            force_coefficient: DEFAULT_FORCE_COEFF,
        }
    }
}

/// Input for a wind load on a pole-mounted sign.
///
/// ## JSON Example
///
/// ```json
/// {
///   "wind_speed_mph": 115.0,
///   "exposure": "C",
///   "risk_category": "II",
///   "pole_height_ft": 12.0,
///   "sign_height_ft": 3.0,
///   "sign_area_sqft": 24.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindLoadInput {
    /// Basic wind speed V (mph)
    pub wind_speed_mph: f64,
    /// Exposure category
    pub exposure: ExposureCategory,
    /// Risk category
    pub risk_category: RiskCategory,
    /// Grade to bottom of sign (ft)
    pub pole_height_ft: f64,
    /// Sign face height (ft)
    pub sign_height_ft: f64,
    /// Sign face area (sqft)
    pub sign_area_sqft: f64,
    /// Adjustment factors
    #[serde(default)]
    pub factors: WindFactors,
}

impl WindLoadInput {
    /// Height of the sign centroid above grade (ft)
    pub fn centroid_height_ft(&self) -> f64 {
        self.pole_height_ft + self.sign_height_ft / 2.0
    }
}

/// Results from a wind load calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "velocity_pressure_qz_psf": 24.46,
///   "exposure_coefficient_kz": 0.85,
///   "wind_importance_factor_iw": 1.0,
///   "design_wind_pressure_psf": 24.95,
///   "total_wind_force_lbs": 598.8,
///   "centroid_height_ft": 13.5,
///   "base_moment_kipft": 8.08,
///   "code_references": ["ASCE 7-22 Eq 26.10-1: Velocity Pressure"]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindLoadResult {
    /// Velocity pressure qz at the sign centroid (psf)
    pub velocity_pressure_qz_psf: f64,
    /// Exposure coefficient Kz at the sign centroid
    pub exposure_coefficient_kz: f64,
    /// Wind importance factor Iw
    pub wind_importance_factor_iw: f64,
    /// Design wind pressure p (psf)
    pub design_wind_pressure_psf: f64,
    /// Total force on the sign face (lbf)
    pub total_wind_force_lbs: f64,
    /// Force application height above grade (ft)
    pub centroid_height_ft: f64,
    /// Overturning moment at grade (kip-ft)
    pub base_moment_kipft: f64,
    /// Code citations
    pub code_references: Vec<String>,
}

/// Velocity pressure exposure coefficient Kz, Table 26.10-1
///
/// Heights at or below 15 ft use the 15 ft value; heights between
/// breakpoints interpolate linearly; heights above 160 ft use
/// `2.01 (z/zg)^(2/α)`.
///
/// ```rust
/// use signcalc_core::loads::wind::{kz, ExposureCategory};
///
/// assert_eq!(kz(5.0, ExposureCategory::C), 0.85);
/// assert!((kz(35.0, ExposureCategory::C) - 1.01).abs() < 1e-9);
/// ```
pub fn kz(height_ft: f64, exposure: ExposureCategory) -> f64 {
    let z = height_ft.max(KZ_MIN_HEIGHT_FT);
    let table = exposure.kz_table();
    let last = KZ_HEIGHTS_FT.len() - 1;

    if z > KZ_HEIGHTS_FT[last] {
        let ratio = z / exposure.gradient_height_ft();
        return KZ_POWER_LAW_COEFF * ratio.powf(2.0 / exposure.alpha());
    }

    // First breakpoint at or above z; z >= 15 so idx is within the table
    let idx = KZ_HEIGHTS_FT.partition_point(|&h| h < z);
    if KZ_HEIGHTS_FT[idx] == z || idx == 0 {
        return table[idx];
    }

    let (h1, h2) = (KZ_HEIGHTS_FT[idx - 1], KZ_HEIGHTS_FT[idx]);
    let (k1, k2) = (table[idx - 1], table[idx]);
    k1 + (z - h1) / (h2 - h1) * (k2 - k1)
}

/// Wind importance factor Iw, Table 1.5-2
pub fn importance_factor(risk_category: RiskCategory) -> f64 {
    risk_category.importance_factor()
}

/// Velocity pressure qz (psf), Eq 26.10-1
pub fn velocity_pressure(
    wind_speed_mph: f64,
    height_ft: f64,
    exposure: ExposureCategory,
    factors: &WindFactors,
) -> f64 {
    let kz = kz(height_ft, exposure);
    VELOCITY_PRESSURE_COEFF * kz * factors.kzt * factors.kd * factors.ke * wind_speed_mph * wind_speed_mph
}

/// Design wind pressure p = qz G Cf Iw (psf)
pub fn design_wind_pressure(
    wind_speed_mph: f64,
    height_ft: f64,
    exposure: ExposureCategory,
    risk_category: RiskCategory,
    factors: &WindFactors,
) -> f64 {
    let qz = velocity_pressure(wind_speed_mph, height_ft, exposure, factors);
    qz * factors.gust_factor * factors.force_coefficient * importance_factor(risk_category)
}

/// Overturning moment at grade (kip-ft) for a force applied at the sign centroid
pub fn wind_moment_at_base(force_lbs: f64, pole_height_ft: f64, sign_height_ft: f64) -> f64 {
    let arm_ft = pole_height_ft + sign_height_ft / 2.0;
    KipFt::from(FtLb(force_lbs * arm_ft)).value()
}

/// Full wind load on a sign: pressure at the centroid, total force and base moment
pub fn wind_force_on_sign(input: &WindLoadInput) -> WindLoadResult {
    let factors = &input.factors;
    let centroid_height_ft = input.centroid_height_ft();

    let exposure_coefficient_kz = kz(centroid_height_ft, input.exposure);
    let velocity_pressure_qz_psf =
        velocity_pressure(input.wind_speed_mph, centroid_height_ft, input.exposure, factors);
    let wind_importance_factor_iw = importance_factor(input.risk_category);
    let design_wind_pressure_psf = velocity_pressure_qz_psf
        * factors.gust_factor
        * factors.force_coefficient
        * wind_importance_factor_iw;

    let total_wind_force_lbs = design_wind_pressure_psf * input.sign_area_sqft;
    let base_moment_kipft =
        wind_moment_at_base(total_wind_force_lbs, input.pole_height_ft, input.sign_height_ft);

    debug!(
        "wind: z={:.2} ft Kz={:.4} qz={:.3} psf p={:.3} psf F={:.1} lbf M={:.3} kip-ft",
        centroid_height_ft,
        exposure_coefficient_kz,
        velocity_pressure_qz_psf,
        design_wind_pressure_psf,
        total_wind_force_lbs,
        base_moment_kipft
    );

    WindLoadResult {
        velocity_pressure_qz_psf,
        exposure_coefficient_kz,
        wind_importance_factor_iw,
        design_wind_pressure_psf,
        total_wind_force_lbs,
        centroid_height_ft,
        base_moment_kipft,
        code_references: wind_citations(factors),
    }
}

/// Calculate wind load on a sign. Total over its input domain.
pub fn calculate(input: &WindLoadInput) -> WindLoadResult {
    wind_force_on_sign(input)
}

fn wind_citations(factors: &WindFactors) -> Vec<String> {
    vec![
        ASCE7_VELOCITY_PRESSURE.cite("Velocity Pressure"),
        ASCE7_KZ_TABLE.cite("Kz Coefficients"),
        ASCE7_IMPORTANCE.cite("Importance Factors"),
        ASCE7_DIRECTIONALITY.cite(format_args!("Kd={}", factors.kd)),
        ASCE7_FORCE_COEFF.cite(format_args!("Cf={}", factors.force_coefficient)),
        ASCE7_OTHER_STRUCTURES.cite("Other Structures"),
    ]
}
