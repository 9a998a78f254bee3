//! # Code Constants
//!
//! Engineering defaults and code-mandated factors, grouped by source document.
//! Changing any of these changes every downstream number, so they live in one
//! place and are referenced by name everywhere else.

// ============================================================================
// ASCE 7-22: Wind
// ============================================================================

/// Velocity pressure coefficient, Eq 26.10-1 (psf/mph²)
pub const VELOCITY_PRESSURE_COEFF: f64 = 0.00256;

/// Heights at or below this use the 15 ft Kz value, Table 26.10-1
pub const KZ_MIN_HEIGHT_FT: f64 = 15.0;

/// Power-law coefficient for Kz above the tabulated range
pub const KZ_POWER_LAW_COEFF: f64 = 2.01;

/// Topographic factor Kzt (flat terrain), Section 26.8
pub const DEFAULT_KZT: f64 = 1.0;

/// Directionality factor Kd for solid freestanding signs, Table 26.6-1
pub const DEFAULT_KD: f64 = 0.85;

/// Ground elevation factor Ke (sea level), Table 26.9-1
pub const DEFAULT_KE: f64 = 1.0;

/// Gust-effect factor G for rigid structures, Section 26.11
pub const DEFAULT_GUST_FACTOR: f64 = 0.85;

/// Force coefficient Cf for flat signs, Fig 29.4-1
pub const DEFAULT_FORCE_COEFF: f64 = 1.2;

/// Wind importance factors by risk category, Table 1.5-2
pub const IMPORTANCE_FACTOR_I: f64 = 0.87;
pub const IMPORTANCE_FACTOR_II: f64 = 1.00;
pub const IMPORTANCE_FACTOR_III: f64 = 1.15;
pub const IMPORTANCE_FACTOR_IV: f64 = 1.15;

// ============================================================================
// AISC 360-22: Steel
// ============================================================================

/// Steel modulus of elasticity (ksi)
pub const STEEL_E_KSI: f64 = 29_000.0;

/// ASD allowable bending stress factor: Fb = 0.66 Fy
pub const ASD_BENDING_FACTOR: f64 = 0.66;

/// ASD allowable shear stress factor: Fv = 0.40 Fy
pub const ASD_SHEAR_FACTOR: f64 = 0.40;

/// LRFD flexural resistance factor
pub const PHI_BENDING: f64 = 0.90;

/// LRFD tension resistance factor (anchor steel)
pub const PHI_TENSION: f64 = 0.75;

/// LRFD shear resistance factor (anchor steel)
pub const PHI_SHEAR: f64 = 0.75;

/// Recommended maximum slenderness KL/r, Section E2
pub const SLENDERNESS_LIMIT: f64 = 200.0;

/// Base plate allowable bending stress factor: 0.6 Fy
pub const PLATE_BENDING_FACTOR: f64 = 0.60;

/// Filler metal strength (E70XX electrodes, ksi)
pub const WELD_FEXX_KSI: f64 = 70.0;

/// Fillet weld nominal stress factor: 0.6 FEXX, Table J2.5
pub const WELD_STRESS_FACTOR: f64 = 0.60;

/// Effective throat of an equal-leg fillet weld per unit leg size
pub const WELD_THROAT_FACTOR: f64 = 0.707;

/// Anchor rod effective tensile area ratio, Table J3.2
pub const ANCHOR_TENSILE_AREA_FACTOR: f64 = 0.75;

/// Anchor rod shear stress factor
pub const ANCHOR_SHEAR_FACTOR: f64 = 0.60;

/// Unit weight of steel (pcf)
pub const STEEL_DENSITY_PCF: f64 = 490.0;

// ============================================================================
// ACI 318-19: Anchorage to Concrete
// ============================================================================

/// Breakout coefficient kc for cast-in anchors, Eq 17.6.2.2.1
pub const BREAKOUT_KC: f64 = 24.0;

/// Specified concrete compressive strength (psi)
pub const CONCRETE_FC_PSI: f64 = 4000.0;

// ============================================================================
// IBC 2024: Foundations
// ============================================================================

/// Soil unit weight (pcf)
pub const SOIL_UNIT_WEIGHT_PCF: f64 = 120.0;

/// Simplified Rankine-type passive pressure coefficient
pub const PASSIVE_PRESSURE_COEFF: f64 = 3.0;

/// Constrained lateral bearing coefficient, Eq 18-1
pub const LATERAL_BEARING_COEFF: f64 = 4.36;

/// Footing depth scan in tenths of a foot; 2 ft is the minimum embedment of Section 1807.1.6.2
pub const MIN_FOOTING_DEPTH_TENTHS: u32 = 20;
pub const MAX_FOOTING_DEPTH_TENTHS: u32 = 200;

/// Footing depths beyond this are flagged for engineering review
pub const FOOTING_DEPTH_REVIEW_FT: f64 = 8.0;

/// Foundation diameter search range, in tenths of a foot
pub const MIN_FOUNDATION_DIAMETER_TENTHS: u32 = 30;
pub const MAX_SINGLE_POLE_DIAMETER_TENTHS: u32 = 100;
pub const MAX_DOUBLE_POLE_DIAMETER_TENTHS: u32 = 80;

/// Allowable soil bearing pressure default, Table 1806.2 (psf)
pub const DEFAULT_SOIL_BEARING_PSF: f64 = 2000.0;

/// Minimum overturning safety factor, Section 1605.2.1
pub const DEFAULT_MIN_OVERTURNING_SF: f64 = 1.5;

// ============================================================================
// Design thresholds
// ============================================================================

/// Default deflection limit as L/n
pub const DEFAULT_DEFLECTION_LIMIT: f64 = 240.0;

/// Default sign face unit weight (psf)
pub const DEFAULT_SIGN_WEIGHT_PSF: f64 = 3.0;

/// Default cabinet unit weight for load derivation (psf)
pub const DEFAULT_CABINET_WEIGHT_PSF: f64 = 10.0;

/// Stress ratio above which a "near capacity" warning is attached
pub const STRESS_RATIO_WARNING: f64 = 0.9;

/// Overturning safety factor below which a "low margin" warning is attached
pub const LOW_MARGIN_SF: f64 = 2.0;

/// Minimum center-to-center pole spacing for double-pole signs (ft)
pub const MIN_POLE_SPACING_FT: f64 = 3.0;

/// Spacing/height ratio above which lateral bracing is recommended
pub const BRACING_RECOMMENDED_RATIO: f64 = 1.5;

/// Spacing/height ratio above which lateral bracing is required
pub const BRACING_REQUIRED_RATIO: f64 = 2.0;

/// Pole spacing above which differential settlement is flagged (ft)
pub const SETTLEMENT_SPACING_FT: f64 = 15.0;

/// Default allowable differential settlement between piers (in)
pub const DEFAULT_SETTLEMENT_LIMIT_IN: f64 = 0.5;

/// Overall heights above this are flagged for review (ft)
pub const POLE_HEIGHT_REVIEW_FT: f64 = 40.0;
