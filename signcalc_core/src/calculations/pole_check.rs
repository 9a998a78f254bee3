//! # Per-Pole Checks
//!
//! The stress, deflection and foundation steps shared by the single- and
//! double-pole solvers. Each solver works out the demand on one pole (the
//! whole sign for a single pole, a share of it for two) and hands it here.
//!
//! ## Steps
//!
//! 1. Stress: `fb = M/Sx` vs `0.66 Fy`, `fv = V/A` vs `0.40 Fy`, combined = sum
//! 2. Deflection: `δ = PL³/3EI` at the sign centroid, pass when `L/δ ≥ limit`
//! 3. Foundation: scan diameters in 0.1 ft steps for the first with
//!    `(M_dead + M_passive) / M_ot ≥ SF_min`, then bearing pressure and concrete

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::failure::{FailureMode, FailureSeverity};
use crate::code_refs::AISC_COMPRESSION;
use crate::constants::*;
use crate::equations::{
    bending_stress_ksi, concrete_volume_cy, dead_load_resisting_moment_kipft, deflection_ratio,
    passive_resisting_moment_kipft, shear_stress_ksi, soil_bearing_pressure_psf, tip_deflection_in,
};
use crate::errors::CalcResult;
use crate::materials::PoleSection;
use crate::units::{Feet, FtLb, Inches, KipFt};

/// ASD member stress check for one pole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StressCheck {
    /// Bending stress fb = M·12/Sx (ksi)
    pub bending_stress_fb_ksi: f64,
    /// Allowable bending stress Fb = 0.66 Fy (ksi)
    pub allowable_bending_fb_ksi: f64,
    /// fb / Fb
    pub bending_stress_ratio: f64,
    /// Shear stress fv = V/A (ksi)
    pub shear_stress_fv_ksi: f64,
    /// Allowable shear stress Fv = 0.40 Fy (ksi)
    pub allowable_shear_fv_ksi: f64,
    /// fv / Fv
    pub shear_stress_ratio: f64,
    /// Additive interaction, fb/Fb + fv/Fv
    pub combined_stress_ratio: f64,
    /// Both individual ratios ≤ 1.0
    pub passes: bool,
}

/// Bending and shear check. Fails fast on a section that cannot be real.
pub fn check_stress(section: &PoleSection, moment_kipft: f64, shear_kips: f64) -> CalcResult<StressCheck> {
    section.validate()?;

    let bending_stress_fb_ksi = bending_stress_ksi(moment_kipft, section.sx_in3);
    let allowable_bending_fb_ksi = ASD_BENDING_FACTOR * section.fy_ksi;
    let bending_stress_ratio = bending_stress_fb_ksi / allowable_bending_fb_ksi;

    let shear_stress_fv_ksi = shear_stress_ksi(shear_kips, section.area_in2);
    let allowable_shear_fv_ksi = ASD_SHEAR_FACTOR * section.fy_ksi;
    let shear_stress_ratio = shear_stress_fv_ksi / allowable_shear_fv_ksi;

    Ok(StressCheck {
        bending_stress_fb_ksi,
        allowable_bending_fb_ksi,
        bending_stress_ratio,
        shear_stress_fv_ksi,
        allowable_shear_fv_ksi,
        shear_stress_ratio,
        combined_stress_ratio: bending_stress_ratio + shear_stress_ratio,
        passes: bending_stress_ratio <= 1.0 && shear_stress_ratio <= 1.0,
    })
}

/// Serviceability check at the sign centroid.
///
/// δ is taken at the load point, but the ratio is measured against the pole
/// height, not the load arm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeflectionCheck {
    /// Cantilever length from grade to the load (in)
    pub load_arm_in: f64,
    /// Pole height L used for the ratio (in)
    pub pole_height_in: f64,
    /// Tip deflection (in)
    pub deflection_in: f64,
    /// L/δ with L the pole height; `None` when the pole does not deflect
    pub deflection_ratio: Option<f64>,
    /// Required L/δ
    pub deflection_limit_ratio: f64,
    pub passes: bool,
}

impl DeflectionCheck {
    /// limit / (L/δ), above 1.0 when failing
    pub fn severity(&self) -> Option<f64> {
        self.deflection_ratio.map(|ratio| self.deflection_limit_ratio / ratio)
    }
}

/// Deflection under the wind force applied at `arm_ft` above grade, judged
/// as `pole_height / δ` against `limit_ratio`
pub fn check_deflection(
    section: &PoleSection,
    force_kips: f64,
    arm_ft: f64,
    pole_height_ft: f64,
    limit_ratio: f64,
) -> DeflectionCheck {
    let load_arm_in = Inches::from(Feet(arm_ft)).value();
    let pole_height_in = Inches::from(Feet(pole_height_ft)).value();
    let deflection_in = tip_deflection_in(force_kips, load_arm_in, STEEL_E_KSI, section.ix_in4);
    let ratio = deflection_ratio(pole_height_in, deflection_in);

    DeflectionCheck {
        load_arm_in,
        pole_height_in,
        deflection_in,
        deflection_ratio: ratio,
        deflection_limit_ratio: limit_ratio,
        passes: ratio.map_or(true, |r| r >= limit_ratio),
    }
}

/// Loads and limits for sizing one drilled pier.
#[derive(Debug, Clone, PartialEq)]
pub struct FoundationDemand {
    /// Wind overturning moment at grade (kip-ft)
    pub overturning_moment_kipft: f64,
    /// Vertical dead load carried by this pier (lb)
    pub dead_load_lbs: f64,
    /// Embedment depth (ft)
    pub embedment_depth_ft: f64,
    /// Allowable soil bearing pressure (psf)
    pub soil_bearing_capacity_psf: f64,
    /// Required overturning safety factor
    pub min_overturning_sf: f64,
    /// Largest diameter to try, in tenths of a foot
    pub max_diameter_tenths: u32,
}

/// Sized pier with its overturning and bearing verdicts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoundationCheck {
    /// Wind overturning moment (kip-ft)
    pub overturning_moment_kipft: f64,
    /// Dead load + passive soil resisting moment at the chosen diameter (kip-ft)
    pub resisting_moment_kipft: f64,
    /// Resisting / overturning; `None` with no overturning moment
    pub overturning_safety_factor: Option<f64>,
    /// Required safety factor
    pub min_overturning_sf: f64,
    /// Combined axial + flexural bearing pressure (psf)
    pub soil_pressure_psf: f64,
    /// Allowable bearing pressure (psf)
    pub allowable_soil_pressure_psf: f64,
    /// Pier diameter (ft)
    pub diameter_ft: f64,
    /// Pier depth (ft)
    pub depth_ft: f64,
    /// Concrete per pier (cubic yards)
    pub concrete_volume_cy: f64,
    /// The scan ran out of candidates and returned its upper bound
    pub diameter_search_capped: bool,
    pub passes_overturning: bool,
    pub passes_soil_bearing: bool,
}

/// Find the smallest adequate pier diameter, then check soil bearing.
///
/// Candidates are generated from integer tenths so the same diameters are
/// tried on every platform. With no overturning moment the smallest
/// candidate is returned.
pub fn size_foundation(demand: &FoundationDemand) -> FoundationCheck {
    let depth_ft = demand.embedment_depth_ft;
    let overturning = demand.overturning_moment_kipft;

    let resisting_at = |diameter_ft: f64| {
        dead_load_resisting_moment_kipft(demand.dead_load_lbs, diameter_ft)
            + passive_resisting_moment_kipft(diameter_ft, depth_ft)
    };

    let min_tenths = MIN_FOUNDATION_DIAMETER_TENTHS;
    let max_tenths = demand.max_diameter_tenths.max(min_tenths);

    let mut chosen: Option<f64> = None;
    if overturning <= 0.0 {
        chosen = Some(f64::from(min_tenths) / 10.0);
    } else {
        for tenths in min_tenths..=max_tenths {
            let diameter_ft = f64::from(tenths) / 10.0;
            if resisting_at(diameter_ft) / overturning >= demand.min_overturning_sf {
                chosen = Some(diameter_ft);
                break;
            }
        }
    }

    let diameter_search_capped = chosen.is_none();
    let diameter_ft = chosen.unwrap_or(f64::from(max_tenths) / 10.0);
    if diameter_search_capped {
        warn!(
            "foundation: no diameter up to {:.1} ft reaches SF {:.2} for M={:.2} kip-ft",
            diameter_ft, demand.min_overturning_sf, overturning
        );
    }

    let resisting_moment_kipft = resisting_at(diameter_ft);
    let overturning_safety_factor = if overturning > 0.0 {
        Some(resisting_moment_kipft / overturning)
    } else {
        None
    };

    // Only the moment passive pressure does not take goes into base bearing
    let passive_kipft = passive_resisting_moment_kipft(diameter_ft, depth_ft);
    let net_moment_ftlb = FtLb::from(KipFt((overturning - passive_kipft).max(0.0))).value();
    let soil_pressure_psf = soil_bearing_pressure_psf(demand.dead_load_lbs, net_moment_ftlb, diameter_ft);

    debug!(
        "foundation: D={:.1} ft depth={:.1} ft SF={:?} q={:.1} psf",
        diameter_ft, depth_ft, overturning_safety_factor, soil_pressure_psf
    );

    FoundationCheck {
        overturning_moment_kipft: overturning,
        resisting_moment_kipft,
        overturning_safety_factor,
        min_overturning_sf: demand.min_overturning_sf,
        soil_pressure_psf,
        allowable_soil_pressure_psf: demand.soil_bearing_capacity_psf,
        diameter_ft,
        depth_ft,
        concrete_volume_cy: concrete_volume_cy(diameter_ft, depth_ft),
        diameter_search_capped,
        passes_overturning: overturning_safety_factor.map_or(true, |sf| sf >= demand.min_overturning_sf),
        passes_soil_bearing: soil_pressure_psf <= demand.soil_bearing_capacity_psf,
    }
}

/// Failing checks among the shared five, in vocabulary order
pub fn failure_severities(
    stress: &StressCheck,
    deflection: &DeflectionCheck,
    foundation: &FoundationCheck,
) -> Vec<FailureSeverity> {
    let mut failures = Vec::new();
    if stress.bending_stress_ratio > 1.0 {
        failures.push(FailureSeverity { mode: FailureMode::Bending, severity: stress.bending_stress_ratio });
    }
    if stress.shear_stress_ratio > 1.0 {
        failures.push(FailureSeverity { mode: FailureMode::Shear, severity: stress.shear_stress_ratio });
    }
    if !deflection.passes {
        if let Some(severity) = deflection.severity() {
            failures.push(FailureSeverity { mode: FailureMode::Deflection, severity });
        }
    }
    if !foundation.passes_overturning {
        if let Some(sf) = foundation.overturning_safety_factor {
            let severity = if sf > 0.0 { foundation.min_overturning_sf / sf } else { f64::MAX };
            failures.push(FailureSeverity { mode: FailureMode::Overturning, severity });
        }
    }
    if !foundation.passes_soil_bearing {
        let severity = if foundation.allowable_soil_pressure_psf > 0.0 {
            foundation.soil_pressure_psf / foundation.allowable_soil_pressure_psf
        } else {
            f64::MAX
        };
        failures.push(FailureSeverity { mode: FailureMode::SoilBearing, severity });
    }
    failures
}

/// Explanatory warnings shared by both pole solvers
pub fn pole_warnings(
    section: &PoleSection,
    pole_height_ft: f64,
    stress: &StressCheck,
    foundation: &FoundationCheck,
) -> Vec<String> {
    let mut warnings = Vec::new();

    let slenderness = section.slenderness(pole_height_ft);
    if slenderness > SLENDERNESS_LIMIT {
        warnings.push(format!(
            "Slenderness ratio L/r = {:.1} exceeds {} ({}). Pole may be susceptible to buckling.",
            slenderness,
            SLENDERNESS_LIMIT,
            AISC_COMPRESSION.citation()
        ));
    }
    if stress.bending_stress_ratio > STRESS_RATIO_WARNING {
        warnings.push(format!(
            "Bending stress ratio {:.2} exceeds {:.2} - near capacity",
            stress.bending_stress_ratio, STRESS_RATIO_WARNING
        ));
    }
    if stress.shear_stress_ratio > STRESS_RATIO_WARNING {
        warnings.push(format!(
            "Shear stress ratio {:.2} exceeds {:.2} - near capacity",
            stress.shear_stress_ratio, STRESS_RATIO_WARNING
        ));
    }
    if let Some(sf) = foundation.overturning_safety_factor {
        if sf < LOW_MARGIN_SF {
            warnings.push(format!(
                "Overturning safety factor {:.2} is below {:.1} (IBC minimum {:.1}, low margin)",
                sf, LOW_MARGIN_SF, foundation.min_overturning_sf
            ));
        }
    }
    if foundation.diameter_search_capped {
        warnings.push(format!(
            "Foundation diameter search reached its {:.1} ft limit without meeting SF {:.2}. Engineering review required.",
            foundation.diameter_ft, foundation.min_overturning_sf
        ));
    }
    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::SectionFamily;

    fn hss8() -> PoleSection {
        PoleSection {
            designation: "HSS8X8X1/4".to_string(),
            family: SectionFamily::HSS,
            area_in2: 7.11,
            depth_in: 8.0,
            weight_plf: 24.2,
            sx_in3: 19.8,
            ix_in4: 79.3,
            rx_in: 3.34,
            fy_ksi: 50.0,
            fu_ksi: 65.0,
            is_high_strength: true,
        }
    }

    fn demand(moment: f64) -> FoundationDemand {
        FoundationDemand {
            overturning_moment_kipft: moment,
            dead_load_lbs: 362.4,
            embedment_depth_ft: 5.0,
            soil_bearing_capacity_psf: 2000.0,
            min_overturning_sf: 1.5,
            max_diameter_tenths: MAX_SINGLE_POLE_DIAMETER_TENTHS,
        }
    }

    #[test]
    fn test_stress_check() {
        let check = check_stress(&hss8(), 8.084, 0.5988).unwrap();
        // fb = 97.0 / 19.8 = 4.899 ksi, Fb = 33 ksi
        assert!((check.bending_stress_fb_ksi - 4.899).abs() < 0.001);
        assert_eq!(check.allowable_bending_fb_ksi, 33.0);
        assert!((check.bending_stress_ratio - 0.1485).abs() < 0.001);
        assert_eq!(check.allowable_shear_fv_ksi, 20.0);
        assert!((check.combined_stress_ratio - (check.bending_stress_ratio + check.shear_stress_ratio)).abs() < 1e-15);
        assert!(check.passes);
    }

    #[test]
    fn test_stress_check_rejects_bad_section() {
        let mut section = hss8();
        section.area_in2 = 0.0;
        assert!(check_stress(&section, 1.0, 1.0).is_err());
    }

    #[test]
    fn test_deflection_check() {
        let check = check_deflection(&hss8(), 0.5988, 13.5, 12.0, 240.0);
        assert_eq!(check.load_arm_in, 162.0);
        assert_eq!(check.pole_height_in, 144.0);
        assert!((check.deflection_in - 0.369).abs() < 0.001);
        // 144 / 0.369
        assert!((check.deflection_ratio.unwrap() - 390.2).abs() < 1.0);
        assert!(check.passes);

        let none = check_deflection(&hss8(), 0.0, 13.5, 12.0, 240.0);
        assert!(none.deflection_ratio.is_none());
        assert!(none.passes);
    }

    #[test]
    fn test_deflection_ratio_uses_pole_height() {
        // 41 sqft sign: δ = 0.630 in at the 162 in centroid.
        // 162 / 0.630 = 257 would pass L/240, 144 / 0.630 = 228 does not.
        let check = check_deflection(&hss8(), 1.0229, 13.5, 12.0, 240.0);
        assert!((check.deflection_in - 0.6304).abs() < 0.001);
        assert!((check.deflection_ratio.unwrap() - 228.4).abs() < 0.5);
        assert!(!check.passes);
        assert!(check.severity().unwrap() > 1.0);
    }

    #[test]
    fn test_foundation_minimum_diameter_sufficient() {
        // At D = 3.0: 0.544 + 22.5 = 23.04 kip-ft, SF = 2.85
        let check = size_foundation(&demand(8.084));
        assert_eq!(check.diameter_ft, 3.0);
        assert!((check.overturning_safety_factor.unwrap() - 2.851).abs() < 0.01);
        assert!(check.passes_overturning);
        // Passive takes the whole moment, bearing is axial only
        assert!((check.soil_pressure_psf - 51.27).abs() < 0.01);
        assert!(check.passes_soil_bearing);
        assert!(!check.diameter_search_capped);
    }

    #[test]
    fn test_foundation_scan_picks_first_adequate() {
        // Need (0.1812 D + 7.5 D) >= 1.5 * 40 -> D >= 7.81
        let check = size_foundation(&demand(40.0));
        assert!((check.diameter_ft - 7.9).abs() < 1e-12);
        assert!(check.overturning_safety_factor.unwrap() >= 1.5);
    }

    #[test]
    fn test_foundation_search_cap() {
        let check = size_foundation(&demand(500.0));
        assert_eq!(check.diameter_ft, 10.0);
        assert!(check.diameter_search_capped);
        assert!(!check.passes_overturning);
    }

    #[test]
    fn test_foundation_zero_moment() {
        let check = size_foundation(&demand(0.0));
        assert_eq!(check.diameter_ft, 3.0);
        assert!(check.overturning_safety_factor.is_none());
        assert!(check.passes_overturning);
    }

    #[test]
    fn test_failure_severities_order() {
        let mut stress = check_stress(&hss8(), 200.0, 200.0).unwrap();
        stress.passes = false;
        let deflection = check_deflection(&hss8(), 0.5988, 13.5, 12.0, 240.0);
        let foundation = size_foundation(&demand(8.084));
        let failures = failure_severities(&stress, &deflection, &foundation);
        assert_eq!(failures[0].mode, FailureMode::Bending);
        assert_eq!(failures[1].mode, FailureMode::Shear);
        assert_eq!(failures.len(), 2);
    }

    #[test]
    fn test_warnings() {
        let stress = check_stress(&hss8(), 8.084, 0.5988).unwrap();
        let foundation = size_foundation(&demand(8.084));
        assert!(pole_warnings(&hss8(), 12.0, &stress, &foundation).is_empty());

        // 60 ft / 3.34 in -> L/r = 215.6
        let warnings = pole_warnings(&hss8(), 60.0, &stress, &foundation);
        assert!(warnings.iter().any(|w| w.contains("Slenderness")));

        let capped = size_foundation(&demand(500.0));
        let warnings = pole_warnings(&hss8(), 12.0, &stress, &capped);
        assert!(warnings.iter().any(|w| w.contains("diameter search")));
        assert!(warnings.iter().any(|w| w.contains("below 2.0")));
    }
}
