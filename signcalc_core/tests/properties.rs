//! Property tests for the wind engine and footing solver.

use proptest::prelude::*;

use signcalc_core::calculations::footing::{self, FootingInput};
use signcalc_core::loads::wind::{self, kz, velocity_pressure, ExposureCategory, RiskCategory, WindFactors, WindLoadInput};

fn exposure() -> impl Strategy<Value = ExposureCategory> {
    prop_oneof![
        Just(ExposureCategory::B),
        Just(ExposureCategory::C),
        Just(ExposureCategory::D),
    ]
}

fn wind_input(exposure: ExposureCategory, speed: f64, pole_height: f64, area: f64) -> WindLoadInput {
    WindLoadInput {
        wind_speed_mph: speed,
        exposure,
        risk_category: RiskCategory::II,
        pole_height_ft: pole_height,
        sign_height_ft: 4.0,
        sign_area_sqft: area,
        factors: WindFactors::default(),
    }
}

fn depth(moment: f64, diameter: f64, soil: f64) -> f64 {
    footing::calculate(&FootingInput::new(moment, diameter).with_soil_bearing_psf(soil))
        .unwrap()
        .depth_ft
}

proptest! {
    #[test]
    fn kz_is_constant_up_to_15_ft(height in 0.0f64..=15.0, exposure in exposure()) {
        prop_assert_eq!(kz(height, exposure), kz(15.0, exposure));
    }

    #[test]
    fn velocity_pressure_scales_with_speed_squared(
        speed in 1.0f64..250.0,
        height in 0.0f64..300.0,
        exposure in exposure(),
    ) {
        let factors = WindFactors::default();
        let q1 = velocity_pressure(speed, height, exposure, &factors);
        let q2 = velocity_pressure(2.0 * speed, height, exposure, &factors);
        prop_assert!((q2 - 4.0 * q1).abs() <= 1e-9 * q2.max(1.0));
    }

    #[test]
    fn rougher_terrain_never_increases_force(
        speed in 50.0f64..200.0,
        pole_height in 0.0f64..200.0,
        area in 1.0f64..500.0,
    ) {
        let b = wind::calculate(&wind_input(ExposureCategory::B, speed, pole_height, area));
        let c = wind::calculate(&wind_input(ExposureCategory::C, speed, pole_height, area));
        let d = wind::calculate(&wind_input(ExposureCategory::D, speed, pole_height, area));
        prop_assert!(d.total_wind_force_lbs >= c.total_wind_force_lbs);
        prop_assert!(c.total_wind_force_lbs >= b.total_wind_force_lbs);
    }

    #[test]
    fn zero_area_or_speed_means_zero_load(
        speed in 0.0f64..200.0,
        area in 0.0f64..500.0,
        exposure in exposure(),
    ) {
        let still = wind::calculate(&wind_input(exposure, 0.0, 10.0, area));
        let bare = wind::calculate(&wind_input(exposure, speed, 10.0, 0.0));
        for result in [still, bare] {
            prop_assert_eq!(result.total_wind_force_lbs, 0.0);
            prop_assert_eq!(result.base_moment_kipft, 0.0);
        }
    }

    #[test]
    fn footing_depth_monotonic(
        moment in 0.5f64..80.0,
        extra_moment in 0.0f64..40.0,
        diameter in 1.5f64..5.0,
        extra_diameter in 0.0f64..2.0,
        soil in 1000.0f64..5000.0,
        extra_soil in 0.0f64..3000.0,
    ) {
        let base = depth(moment, diameter, soil);
        prop_assert!(depth(moment + extra_moment, diameter, soil) >= base);
        prop_assert!(depth(moment, diameter + extra_diameter, soil) <= base);
        prop_assert!(depth(moment, diameter, soil + extra_soil) <= base);
    }
}
