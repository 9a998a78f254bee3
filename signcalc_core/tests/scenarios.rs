//! End-to-end sign structure scenarios run through the public API.

use signcalc_core::calculations::baseplate::{self, BasePlateCheckInput, BasePlateInput, BasePlateLoads};
use signcalc_core::calculations::baseplate_solve::{self, BasePlateSolveInput};
use signcalc_core::calculations::double_pole::{self, DoublePoleConfig, LoadDistribution};
use signcalc_core::calculations::footing::{self, FootingInput};
use signcalc_core::calculations::pole_filter::{self, PoleFilterInput, SortKey};
use signcalc_core::calculations::sign_loads::{self, Cabinet, SignLoadInput};
use signcalc_core::calculations::single_pole::{self, SinglePoleConfig};
use signcalc_core::calculations::{run, CalculationOutput, CalculationRequest, FailureMode};
use signcalc_core::loads::{ExposureCategory, RiskCategory};
use signcalc_core::materials::{builtin_catalog, PoleSection, SectionFamily};
use signcalc_core::CalcError;

fn reference_single_pole() -> SinglePoleConfig {
    SinglePoleConfig::new(12.0, "HSS8X8X1/4", 5.0, 8.0, 3.0, 115.0, ExposureCategory::C, RiskCategory::II)
}

fn reference_double_pole() -> DoublePoleConfig {
    DoublePoleConfig::new(
        17.0,
        "HSS6X6X1/4",
        12.0,
        6.0,
        12.0,
        8.0,
        115.0,
        ExposureCategory::C,
        RiskCategory::II,
    )
}

#[test]
fn test_single_pole_reference_sign() {
    let result = single_pole::calculate(&reference_single_pole()).unwrap();

    assert!((result.wind.velocity_pressure_qz_psf - 24.46).abs() < 0.01);
    assert!((result.wind.design_wind_pressure_psf - 24.95).abs() < 0.01);
    assert!((result.wind.total_wind_force_lbs - 599.0).abs() < 1.0);
    assert!((result.design_moment_kipft - 8.1).abs() < 0.05);
    assert!(result.stress.bending_stress_ratio < 1.0);

    assert!(result.passes_strength_check);
    assert!(result.passes_deflection_check);
    assert!(result.passes_overturning_check);
    assert!(result.passes_soil_bearing_check);
    assert!(result.passes_all_checks);
    assert_eq!(result.critical_failure_mode, None);
    assert!(!result.code_references.is_empty());
}

#[test]
fn test_single_pole_overloaded() {
    let config = SinglePoleConfig::new(30.0, "HSS8X8X1/4", 5.0, 12.0, 8.0, 150.0, ExposureCategory::C, RiskCategory::II);
    let result = single_pole::calculate(&config).unwrap();

    assert!(result.wind.total_wind_force_lbs > 0.0);
    assert!(!result.passes_strength_check);
    assert!(!result.passes_all_checks);
    assert!(result.critical_failure_mode.is_some());
    assert!(!result.warnings.is_empty());
}

#[test]
fn test_inadequate_design_is_not_an_error() {
    // A tiny pipe under a large sign still yields a complete result
    let config = SinglePoleConfig::new(20.0, "PIPE3STD", 4.0, 10.0, 6.0, 130.0, ExposureCategory::D, RiskCategory::III);
    let result = single_pole::calculate(&config).unwrap();
    assert!(!result.passes_strength_check);
    assert!(!result.passes_all_checks);
    let mode = result.critical_failure_mode.unwrap();
    assert!(FailureMode::ALL.contains(&mode));

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["critical_failure_mode"], mode.code());
}

#[test]
fn test_bad_catalog_row_is_an_error() {
    let mut section = builtin_catalog().get("HSS8X8X1/4").unwrap().clone();
    section.sx_in3 = 0.0;
    let config = SinglePoleConfig::new(12.0, section, 5.0, 8.0, 3.0, 115.0, ExposureCategory::C, RiskCategory::II);

    match single_pole::calculate(&config) {
        Err(CalcError::InvalidSection { designation, .. }) => assert_eq!(designation, "HSS8X8X1/4"),
        other => panic!("expected InvalidSection, got {:?}", other),
    }
}

#[test]
fn test_double_pole_moment_is_exact_half() {
    let config = reference_double_pole();
    let result = double_pole::calculate(&config).unwrap();

    // Same sign on one pole carries the whole moment
    let single = SinglePoleConfig::new(17.0, "HSS6X6X1/4", 6.0, 12.0, 8.0, 115.0, ExposureCategory::C, RiskCategory::II);
    let single = single_pole::calculate(&single).unwrap();

    assert_eq!(result.load_distribution, LoadDistribution::Equal);
    assert_eq!(result.moment_per_pole_kipft, single.design_moment_kipft / 2.0);
    assert_eq!(result.shear_per_pole_kips * 2.0, single.design_shear_kips);
    assert!(result.passes_lateral_stability_check);
}

#[test]
fn test_zero_area_or_speed_gives_zero_demand() {
    let no_area = reference_single_pole().with_sign_area_sqft(0.0);
    let still_air = SinglePoleConfig::new(12.0, "HSS8X8X1/4", 5.0, 8.0, 3.0, 0.0, ExposureCategory::C, RiskCategory::II);

    for config in [no_area, still_air] {
        let result = single_pole::calculate(&config).unwrap();
        assert_eq!(result.wind.total_wind_force_lbs, 0.0);
        assert_eq!(result.design_moment_kipft, 0.0);
        assert_eq!(result.stress.bending_stress_fb_ksi, 0.0);
    }
}

#[test]
fn test_pole_filter_capacity_screen() {
    let small = PoleSection {
        designation: "SMALL".to_string(),
        family: SectionFamily::HSS,
        area_in2: 1.2,
        depth_in: 2.0,
        weight_plf: 4.3,
        sx_in3: 1.5,
        ix_in4: 1.5,
        rx_in: 0.8,
        fy_ksi: 46.0,
        fu_ksi: 58.0,
        is_high_strength: false,
    };
    let heavy = PoleSection {
        designation: "HEAVY".to_string(),
        sx_in3: 19.1,
        weight_plf: 40.0,
        area_in2: 11.0,
        ..small.clone()
    };
    let light = PoleSection {
        designation: "LIGHT".to_string(),
        sx_in3: 19.1,
        weight_plf: 25.0,
        area_in2: 7.0,
        ..small.clone()
    };

    let input = PoleFilterInput::new(100.0)
        .with_sections(vec![small, heavy, light])
        .with_sort_by(SortKey::WeightPerFt);
    let result = pole_filter::calculate(&input).unwrap();

    let names: Vec<&str> = result.options.iter().map(|o| o.designation.as_str()).collect();
    assert_eq!(names, vec!["LIGHT", "HEAVY"]);
}

#[test]
fn test_pole_filter_builtin_catalog() {
    let result = pole_filter::calculate(&PoleFilterInput::new(500.0)).unwrap();
    assert!(!result.options.is_empty());
    assert!(result.options.iter().all(|o| o.family == SectionFamily::HSS));
    assert!(result.options.iter().all(|o| o.capacity_kipin >= 500.0));
    // Default sort is ascending Sx
    assert!(result.options.windows(2).all(|w| w[0].sx_in3 <= w[1].sx_in3));
}

#[test]
fn test_sign_loads_feed_baseplate_solve() {
    let signs = SignLoadInput::new(vec![Cabinet::new(8.0, 3.0)], 12.0, 115.0, ExposureCategory::C, RiskCategory::II);
    let derived = sign_loads::calculate(&signs).unwrap();

    let loads = BasePlateLoads {
        mu_kipft: derived.mu_kipft,
        vu_kip: derived.wind_force_lbs / 1000.0,
        tu_kip: 0.0,
    };
    let solution = baseplate_solve::calculate(&BasePlateSolveInput::new(loads)).unwrap();
    assert!(solution.checks.all_pass);

    // Re-checking the chosen plate reproduces the same verdict
    let request = BasePlateCheckInput {
        plate: solution.input.clone(),
        loads,
        suggest_alternatives: true,
    };
    let recheck = baseplate::calculate(&request).unwrap();
    assert_eq!(recheck.checks, solution.checks.checks);
}

#[test]
fn test_footing_sized_from_single_pole_moment() {
    let pole = single_pole::calculate(&reference_single_pole()).unwrap();
    let result = footing::calculate(&FootingInput::new(pole.design_moment_kipft, 3.0)).unwrap();
    assert!(result.converged);
    assert!(result.depth_ft >= 2.0 && result.depth_ft <= 20.0);
}

#[test]
fn test_dispatch_matches_direct_call() {
    let config = reference_double_pole();
    let direct = double_pole::calculate(&config).unwrap();

    match run(&CalculationRequest::DoublePole(config)).unwrap() {
        CalculationOutput::DoublePole(result) => assert_eq!(result, direct),
        other => panic!("unexpected output {:?}", other),
    }
}

#[test]
fn test_results_survive_json_round_trip() {
    let result = single_pole::calculate(&reference_single_pole()).unwrap();
    let json = serde_json::to_string(&result).unwrap();
    let parsed: single_pole::SinglePoleResult = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, result);

    // Dispatch output keeps every float bit for bit too
    let output = run(&CalculationRequest::DoublePole(reference_double_pole())).unwrap();
    let json = serde_json::to_string(&output).unwrap();
    let parsed: CalculationOutput = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, output);
}

/// Every solver returns bit-identical output on repeated calls.
#[test]
fn test_all_solvers_are_deterministic() {
    let plate = BasePlateInput {
        plate_w_in: 14.0,
        plate_l_in: 14.0,
        plate_thk_in: 0.75,
        fy_ksi: 36.0,
        weld_size_in: 0.25,
        anchor_dia_in: 0.75,
        anchor_grade_ksi: 58.0,
        anchor_embed_in: 12.0,
        rows: 2,
        bolts_per_row: 2,
        row_spacing_in: 10.0,
        edge_distance_in: 2.0,
    };
    let loads = BasePlateLoads { mu_kipft: 6.0, vu_kip: 1.5, tu_kip: 0.5 };
    let requests = vec![
        CalculationRequest::SinglePole(reference_single_pole()),
        CalculationRequest::DoublePole(reference_double_pole()),
        CalculationRequest::Footing(FootingInput::new(12.5, 2.5)),
        CalculationRequest::PoleFilter(PoleFilterInput::new(250.0).with_sort_by(SortKey::TubeSize)),
        CalculationRequest::BasePlate(BasePlateCheckInput {
            plate,
            loads,
            suggest_alternatives: true,
        }),
        CalculationRequest::BasePlateSolve(BasePlateSolveInput::new(loads)),
        CalculationRequest::SignLoads(SignLoadInput::new(
            vec![Cabinet::new(10.0, 4.0), Cabinet::new(6.0, 2.0).with_weight_psf(6.0)],
            15.0,
            140.0,
            ExposureCategory::D,
            RiskCategory::IV,
        )),
    ];

    for request in &requests {
        let first = run(request).unwrap();
        let first_json = serde_json::to_string(&first).unwrap();
        for _ in 0..5 {
            let again = run(request).unwrap();
            assert_eq!(again, first, "{} changed between runs", request.calc_type());
            assert_eq!(serde_json::to_string(&again).unwrap(), first_json);
        }
    }
}
