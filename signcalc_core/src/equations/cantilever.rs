//! # Cantilever Pole Formulas
//!
//! A sign pole is a vertical cantilever fixed at grade with the wind
//! resultant applied at the sign centroid.
//!
//! ## Notation
//!
//! - `P` = Lateral point load at the free end (kips)
//! - `L` = Distance from fixed base to load (in)
//! - `M` = Base moment (kip-ft)
//! - `Sx` = Elastic section modulus (in³)
//! - `E` = Modulus of elasticity (ksi)
//! - `I` = Moment of inertia (in⁴)
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition, Table 8.1 Case 1a
//! - AISC 360-22 Chapters F and G

use crate::units::{KipFt, KipIn};

/// Cantilever tip deflection under an end point load
///
/// ```text
///   P →●
///      │
///      │ L
///      │
///   ▨▨▨▨▨▨
/// ```
///
/// # Formula
/// δ = PL³ / (3EI)
#[inline]
pub fn tip_deflection_in(p_kips: f64, l_in: f64, e_ksi: f64, i_in4: f64) -> f64 {
    p_kips * l_in.powi(3) / (3.0 * e_ksi * i_in4)
}

/// Serviceability ratio L/δ; `None` when there is no deflection
#[inline]
pub fn deflection_ratio(l_in: f64, deflection_in: f64) -> Option<f64> {
    if deflection_in > 0.0 {
        Some(l_in / deflection_in)
    } else {
        None
    }
}

/// Extreme fiber bending stress fb = M/Sx (ksi), moment in kip-ft
#[inline]
pub fn bending_stress_ksi(moment_kipft: f64, sx_in3: f64) -> f64 {
    KipIn::from(KipFt(moment_kipft)).value() / sx_in3
}

/// Average shear stress fv = V/A (ksi)
#[inline]
pub fn shear_stress_ksi(v_kips: f64, area_in2: f64) -> f64 {
    v_kips / area_in2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tip_deflection() {
        // P = 0.5988 k, L = 162 in, E = 29000 ksi, I = 79.3 in⁴
        // δ = 0.5988 * 162³ / (3 * 29000 * 79.3) = 0.369 in
        let delta = tip_deflection_in(0.5988, 162.0, 29_000.0, 79.3);
        assert!((delta - 0.369).abs() < 0.001);
    }

    #[test]
    fn test_deflection_ratio() {
        let ratio = deflection_ratio(162.0, 0.369).unwrap();
        assert!((ratio - 439.0).abs() < 1.0);
        assert!(deflection_ratio(162.0, 0.0).is_none());
    }

    #[test]
    fn test_bending_stress() {
        // 8.084 kip-ft * 12 / 19.8 in³ = 4.899 ksi
        assert!((bending_stress_ksi(8.084, 19.8) - 4.899).abs() < 0.001);
    }

    #[test]
    fn test_shear_stress() {
        assert!((shear_stress_ksi(0.5988, 7.11) - 0.08422).abs() < 1e-4);
    }
}
