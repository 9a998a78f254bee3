//! # Base Plate Auto-Solve
//!
//! Grid search for the cheapest base plate that passes every check in
//! [`baseplate`](super::baseplate) under the given loads.
//!
//! ## Grid
//!
//! | Parameter        | Values                                  |
//! |------------------|-----------------------------------------|
//! | Plate B × N (in) | 12..=24 step 2, N ≥ B                   |
//! | Thickness (in)   | 1/4 to 1 by 1/8                         |
//! | Anchor pattern   | 2×2, 3×3, 4×4                           |
//! | Anchor dia (in)  | 1/2, 3/4, 1                             |
//! | Embedment (in)   | 6, 8, 10, 12                            |
//!
//! Anchors are spread evenly across the short side; the plate uses A36, a
//! 1/4 in weld and 58 ksi rods. Cost proxy = plate steel at $2/lb + weld at
//! $0.50/in + $5 per anchor. Ties keep grid order. When no candidate passes,
//! the one with the smallest worst demand/capacity ratio is returned with
//! `all_pass = false` and `no_feasible_solution` as its governing constraint.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::baseplate::{check_baseplate, BasePlateChecks, BasePlateInput, BasePlateLoads};
use crate::constants::STEEL_DENSITY_PCF;
use crate::errors::{CalcError, CalcResult};

const PLATE_SIZES_IN: [f64; 7] = [12.0, 14.0, 16.0, 18.0, 20.0, 22.0, 24.0];
const PLATE_THICKNESSES_IN: [f64; 7] = [0.25, 0.375, 0.5, 0.625, 0.75, 0.875, 1.0];
const ANCHOR_PATTERNS: [(u32, u32); 3] = [(2, 2), (3, 3), (4, 4)];
const ANCHOR_DIAMETERS_IN: [f64; 3] = [0.5, 0.75, 1.0];
const ANCHOR_EMBEDS_IN: [f64; 4] = [6.0, 8.0, 10.0, 12.0];

const GRID_PLATE_FY_KSI: f64 = 36.0;
const GRID_WELD_SIZE_IN: f64 = 0.25;
const GRID_ANCHOR_FU_KSI: f64 = 58.0;

/// Passing checks above this ratio are reported as governing
const GOVERNING_RATIO: f64 = 0.8;

/// Unit costs for the cost proxy
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostWeights {
    pub plate_cost_per_lb: f64,
    pub weld_cost_per_in: f64,
    pub anchor_cost_per_bolt: f64,
}

impl Default for CostWeights {
    fn default() -> Self {
        CostWeights {
            plate_cost_per_lb: 2.0,
            weld_cost_per_in: 0.5,
            anchor_cost_per_bolt: 5.0,
        }
    }
}

impl CostWeights {
    /// Cost proxy of one candidate
    pub fn cost(&self, plate: &BasePlateInput) -> f64 {
        let plate_weight_lb = plate.plate_w_in * plate.plate_l_in * plate.plate_thk_in / 144.0 * STEEL_DENSITY_PCF;
        plate_weight_lb * self.plate_cost_per_lb
            + plate.weld_length_in() * self.weld_cost_per_in
            + f64::from(plate.rows) * f64::from(plate.bolts_per_row) * self.anchor_cost_per_bolt
    }
}

/// Optional limits on the grid
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BasePlateConstraints {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_plate_size_in: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_plate_size_in: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_thickness_in: Option<f64>,
}

/// Input for the auto-solve.
///
/// ## JSON Example
///
/// ```json
/// {
///   "loads": { "mu_kipft": 2.0, "vu_kip": 1.0, "tu_kip": 0.5 },
///   "constraints": { "max_plate_size_in": 18.0 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasePlateSolveInput {
    pub loads: BasePlateLoads,
    #[serde(default)]
    pub constraints: BasePlateConstraints,
    #[serde(default)]
    pub cost_weights: CostWeights,
}

impl BasePlateSolveInput {
    pub fn new(loads: BasePlateLoads) -> Self {
        BasePlateSolveInput {
            loads,
            constraints: BasePlateConstraints::default(),
            cost_weights: CostWeights::default(),
        }
    }

    pub fn with_constraints(self, constraints: BasePlateConstraints) -> Self {
        BasePlateSolveInput { constraints, ..self }
    }

    pub fn with_cost_weights(self, cost_weights: CostWeights) -> Self {
        BasePlateSolveInput { cost_weights, ..self }
    }
}

/// Chosen plate and its check suite
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasePlateSolution {
    pub input: BasePlateInput,
    pub checks: BasePlateChecks,
    pub cost_proxy: f64,
    /// Checks near their limit, or `no_feasible_solution`
    pub governing_constraints: Vec<String>,
    /// Candidates evaluated
    pub candidates_evaluated: usize,
}

/// Every grid candidate permitted by the constraints, in grid order
pub fn candidate_grid(constraints: &BasePlateConstraints) -> Vec<BasePlateInput> {
    let sizes: Vec<f64> = PLATE_SIZES_IN
        .iter()
        .copied()
        .filter(|&s| constraints.min_plate_size_in.map_or(true, |min| s >= min))
        .filter(|&s| constraints.max_plate_size_in.map_or(true, |max| s <= max))
        .collect();
    let thicknesses: Vec<f64> = PLATE_THICKNESSES_IN
        .iter()
        .copied()
        .filter(|&t| constraints.max_thickness_in.map_or(true, |max| t <= max))
        .collect();

    let mut grid = Vec::new();
    for &plate_w_in in &sizes {
        for &plate_l_in in sizes.iter().filter(|&&l| l >= plate_w_in) {
            let short_side = plate_w_in.min(plate_l_in);
            for &plate_thk_in in &thicknesses {
                for &(rows, bolts_per_row) in &ANCHOR_PATTERNS {
                    let spacing = short_side / f64::from(rows.max(bolts_per_row) + 1);
                    for &anchor_dia_in in &ANCHOR_DIAMETERS_IN {
                        for &anchor_embed_in in &ANCHOR_EMBEDS_IN {
                            grid.push(BasePlateInput {
                                plate_w_in,
                                plate_l_in,
                                plate_thk_in,
                                fy_ksi: GRID_PLATE_FY_KSI,
                                weld_size_in: GRID_WELD_SIZE_IN,
                                anchor_dia_in,
                                anchor_grade_ksi: GRID_ANCHOR_FU_KSI,
                                anchor_embed_in,
                                rows,
                                bolts_per_row,
                                row_spacing_in: spacing,
                                edge_distance_in: short_side / 2.0 - spacing / 2.0,
                            });
                        }
                    }
                }
            }
        }
    }
    grid
}

/// Find the lowest-cost passing base plate.
///
/// # Errors
///
/// * `InvalidInput` - negative loads, or constraints that leave no candidates
pub fn calculate(input: &BasePlateSolveInput) -> CalcResult<BasePlateSolution> {
    input.loads.validate()?;

    let grid = candidate_grid(&input.constraints);
    if grid.is_empty() {
        return Err(CalcError::invalid_input(
            "constraints",
            format!("{:?}", input.constraints),
            "Constraints exclude every plate size or thickness",
        ));
    }

    let mut cheapest: Option<(BasePlateInput, BasePlateChecks, f64)> = None;
    let mut least_bad: Option<(BasePlateInput, BasePlateChecks, f64)> = None;

    for candidate in &grid {
        let checks = check_baseplate(candidate, &input.loads, false)?;
        if checks.all_pass {
            let cost = input.cost_weights.cost(candidate);
            if cheapest.as_ref().map_or(true, |(_, _, best)| cost < *best) {
                cheapest = Some((candidate.clone(), checks, cost));
            }
        } else if cheapest.is_none() {
            let worst = checks.worst_ratio();
            if least_bad.as_ref().map_or(true, |(_, _, best)| worst < *best) {
                least_bad = Some((candidate.clone(), checks, worst));
            }
        }
    }

    let candidates_evaluated = grid.len();
    if let Some((plate, checks, cost)) = cheapest {
        let governing_constraints = checks
            .checks
            .iter()
            .filter(|c| c.passes && c.ratio() > GOVERNING_RATIO)
            .map(|c| c.name.clone())
            .collect();
        debug!(
            "baseplate solve: {}x{}x{} {}x{} anchors, cost {:.2} of {} candidates",
            plate.plate_w_in,
            plate.plate_l_in,
            plate.plate_thk_in,
            plate.rows,
            plate.bolts_per_row,
            cost,
            candidates_evaluated
        );
        return Ok(BasePlateSolution {
            input: plate,
            checks,
            cost_proxy: cost,
            governing_constraints,
            candidates_evaluated,
        });
    }

    // Grid is non-empty and every candidate failed, so least_bad is set
    let (plate, checks, worst) = least_bad.ok_or_else(|| CalcError::missing_field("candidates"))?;
    warn!(
        "baseplate solve: no passing candidate of {}, best worst-ratio {:.3}",
        candidates_evaluated, worst
    );
    let cost_proxy = input.cost_weights.cost(&plate);
    Ok(BasePlateSolution {
        input: plate,
        checks,
        cost_proxy,
        governing_constraints: vec!["no_feasible_solution".to_string()],
        candidates_evaluated,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::baseplate::PLATE_THICKNESS;

    fn loads(mu_kipft: f64, vu_kip: f64, tu_kip: f64) -> BasePlateLoads {
        BasePlateLoads { mu_kipft, vu_kip, tu_kip }
    }

    #[test]
    fn test_grid_size() {
        // 28 size pairs × 7 thicknesses × 3 patterns × 3 diameters × 4 embeds
        assert_eq!(candidate_grid(&BasePlateConstraints::default()).len(), 28 * 7 * 3 * 3 * 4);
    }

    #[test]
    fn test_light_loads() {
        let solution = calculate(&BasePlateSolveInput::new(loads(2.0, 1.0, 0.5))).unwrap();
        let plate = &solution.input;
        assert_eq!((plate.plate_w_in, plate.plate_l_in), (12.0, 12.0));
        assert_eq!(plate.plate_thk_in, 0.625);
        assert_eq!((plate.rows, plate.bolts_per_row), (4, 4));
        assert_eq!(plate.anchor_dia_in, 0.5);
        assert_eq!(plate.anchor_embed_in, 6.0);
        // Plate 306.25 lb × $2 + 48 in × $0.5 + 16 × $5
        assert!((solution.cost_proxy - 716.5).abs() < 1e-9);
        assert!(solution.checks.all_pass);
        assert_eq!(solution.governing_constraints, vec![PLATE_THICKNESS.to_string()]);
    }

    #[test]
    fn test_no_feasible_solution() {
        let solution = calculate(&BasePlateSolveInput::new(loads(500.0, 10.0, 100.0))).unwrap();
        assert!(!solution.checks.all_pass);
        assert_eq!(solution.governing_constraints, vec!["no_feasible_solution".to_string()]);
        assert!(solution.checks.worst_ratio() > 1.0);
    }

    #[test]
    fn test_constraints_limit_grid() {
        let constraints = BasePlateConstraints {
            min_plate_size_in: Some(16.0),
            max_plate_size_in: Some(18.0),
            max_thickness_in: Some(0.5),
        };
        let grid = candidate_grid(&constraints);
        assert!(grid.iter().all(|p| p.plate_w_in >= 16.0 && p.plate_l_in <= 18.0 && p.plate_thk_in <= 0.5));

        let solution =
            calculate(&BasePlateSolveInput::new(loads(2.0, 1.0, 0.5)).with_constraints(constraints)).unwrap();
        assert!(solution.input.plate_w_in >= 16.0);
        assert!(solution.input.plate_thk_in <= 0.5);
    }

    #[test]
    fn test_empty_grid_is_an_error() {
        let constraints = BasePlateConstraints {
            min_plate_size_in: Some(30.0),
            ..BasePlateConstraints::default()
        };
        let input = BasePlateSolveInput::new(loads(1.0, 1.0, 1.0)).with_constraints(constraints);
        assert!(matches!(calculate(&input), Err(CalcError::InvalidInput { .. })));
    }

    #[test]
    fn test_deterministic() {
        let input = BasePlateSolveInput::new(loads(4.0, 2.0, 1.0));
        let first = calculate(&input).unwrap();
        for _ in 0..5 {
            assert_eq!(calculate(&input).unwrap(), first);
        }
    }
}
