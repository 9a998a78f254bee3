//! # Drilled Pier Foundation Formulas
//!
//! Direct-embedment circular piers resisting overturning through self-weight
//! and passive soil pressure.
//!
//! ## Notation
//!
//! - `D` = Pier diameter (ft)
//! - `d` = Embedment depth (ft)
//! - `γ` = Soil unit weight (pcf)
//! - `Kp` = Passive pressure coefficient
//! - `S` = Allowable lateral soil pressure (psf)
//!
//! ## References
//!
//! - IBC 2024 Section 1807.3 (embedded posts and poles)
//! - Broms (1964), lateral resistance of piles in cohesionless soil

use std::f64::consts::PI;

use crate::constants::{LATERAL_BEARING_COEFF, PASSIVE_PRESSURE_COEFF, SOIL_UNIT_WEIGHT_PCF};
use crate::units::{FtLb, KipFt};

/// Passive soil resisting moment about the base (kip-ft)
///
/// Triangular passive pressure over the embedment, resultant at d/3:
/// - Pp = ½ γ d² Kp D (lb)
/// - Mp = Pp d/3
#[inline]
pub fn passive_resisting_moment_kipft(diameter_ft: f64, depth_ft: f64) -> f64 {
    let force_lbs = 0.5 * SOIL_UNIT_WEIGHT_PCF * depth_ft * depth_ft * PASSIVE_PRESSURE_COEFF * diameter_ft;
    KipFt::from(FtLb(force_lbs)).value() * (depth_ft / 3.0)
}

/// Resisting moment from vertical dead load acting at half the diameter (kip-ft)
#[inline]
pub fn dead_load_resisting_moment_kipft(dead_load_lbs: f64, diameter_ft: f64) -> f64 {
    KipFt::from(FtLb(dead_load_lbs)).value() * (diameter_ft / 2.0)
}

/// Plan area of a circular footing (sqft)
#[inline]
pub fn footing_area_sqft(diameter_ft: f64) -> f64 {
    PI * diameter_ft * diameter_ft / 4.0
}

/// Section modulus of a circular footing base, πD³/32 (ft³)
#[inline]
pub fn footing_section_modulus_ft3(diameter_ft: f64) -> f64 {
    PI * diameter_ft.powi(3) / 32.0
}

/// Combined axial + flexural bearing pressure q = P/A + M/S (psf)
#[inline]
pub fn soil_bearing_pressure_psf(axial_lbs: f64, moment_ftlb: f64, diameter_ft: f64) -> f64 {
    axial_lbs / footing_area_sqft(diameter_ft) + moment_ftlb / footing_section_modulus_ft3(diameter_ft)
}

/// Concrete volume of a cylindrical pier (cubic yards)
#[inline]
pub fn concrete_volume_cy(diameter_ft: f64, depth_ft: f64) -> f64 {
    footing_area_sqft(diameter_ft) * depth_ft / 27.0
}

/// Required embedment for constrained lateral bearing, IBC Eq 18-1
///
/// Evaluated at a trial depth `d`: the lateral load acts at h = 2d/3, so the
/// equivalent lateral force is P = M/h and
/// d_req = (4.36 h / b) √(P/S).
#[inline]
pub fn lateral_bearing_required_depth_ft(
    moment_kipft: f64,
    trial_depth_ft: f64,
    diameter_ft: f64,
    soil_psf: f64,
) -> f64 {
    let h_ft = trial_depth_ft * 2.0 / 3.0;
    let lateral_force_lbs = FtLb::from(KipFt(moment_kipft)).value() / h_ft;
    (LATERAL_BEARING_COEFF * h_ft / diameter_ft) * (lateral_force_lbs / soil_psf).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passive_moment() {
        // 0.5 * 120 * 25 * 3 * 3 / 1000 = 13.5 kips at 5/3 ft = 22.5 kip-ft
        assert!((passive_resisting_moment_kipft(3.0, 5.0) - 22.5).abs() < 1e-9);
        // Equivalent closed form 0.06 b d³
        assert!((passive_resisting_moment_kipft(4.0, 6.0) - 0.06 * 4.0 * 216.0).abs() < 1e-9);
    }

    #[test]
    fn test_dead_load_moment() {
        // 362.4 lb at 1.5 ft
        assert!((dead_load_resisting_moment_kipft(362.4, 3.0) - 0.5436).abs() < 1e-9);
    }

    #[test]
    fn test_footing_geometry() {
        assert!((footing_area_sqft(3.0) - 7.0686).abs() < 1e-4);
        assert!((footing_section_modulus_ft3(3.0) - 2.6507).abs() < 1e-4);
        // π * 1.5² * 5 / 27 = 1.309 cy
        assert!((concrete_volume_cy(3.0, 5.0) - 1.309).abs() < 1e-3);
    }

    #[test]
    fn test_soil_bearing_axial_only() {
        // 362.4 lb / 7.0686 sqft = 51.27 psf
        assert!((soil_bearing_pressure_psf(362.4, 0.0, 3.0) - 51.27).abs() < 0.01);
    }

    #[test]
    fn test_lateral_bearing_fixed_point() {
        // M=10, b=3, S=3000: d ≥ 8.449 * 1500 * 10 / (9 * 3000) ≈ 4.694 ft
        let at_4_7 = lateral_bearing_required_depth_ft(10.0, 4.7, 3.0, 3000.0);
        assert!(4.7 >= at_4_7);
        let at_4_6 = lateral_bearing_required_depth_ft(10.0, 4.6, 3.0, 3000.0);
        assert!(4.6 < at_4_6);
    }
}
