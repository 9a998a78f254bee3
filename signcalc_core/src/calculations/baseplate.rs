//! # Base Plate Checks
//!
//! Strength checks for a pole base plate bolted to a concrete pier.
//!
//! ## Checks (in order)
//!
//! | Name            | Demand                      | Capacity                                  |
//! |-----------------|-----------------------------|-------------------------------------------|
//! | Plate Thickness | fb = M_plate / (B t²/6)     | 0.6 Fy                                    |
//! | Weld Strength   | Vu                          | 0.6 FEXX · 0.707 w · 2(B + N)             |
//! | Anchor Tension  | Tu/n + 12 Mu/(lever · m)    | min(φ 0.75 Ab Fu, concrete breakout)      |
//! | Anchor Shear    | Vu/n                        | φ 0.6 Ab Fu                               |
//!
//! `n` is the bolt count, `m` bolts per row and `lever` the distance between
//! the outer rows. The plate bends over the edge distance under the tension
//! row's bolt forces. Concrete breakout per anchor follows ACI 318-19
//! Chapter 17: `24 √f'c hef^1.5`, reduced by `s/hef` when anchors are closer
//! than their embedment.
//!
//! ## Example
//!
//! ```rust
//! use signcalc_core::calculations::baseplate::{check_baseplate, BasePlateInput, BasePlateLoads};
//!
//! let plate = BasePlateInput {
//!     plate_w_in: 14.0,
//!     plate_l_in: 14.0,
//!     plate_thk_in: 0.75,
//!     fy_ksi: 36.0,
//!     weld_size_in: 0.25,
//!     anchor_dia_in: 0.75,
//!     anchor_grade_ksi: 58.0,
//!     anchor_embed_in: 12.0,
//!     rows: 2,
//!     bolts_per_row: 2,
//!     row_spacing_in: 10.0,
//!     edge_distance_in: 2.0,
//! };
//! let loads = BasePlateLoads { mu_kipft: 5.0, vu_kip: 1.0, tu_kip: 0.0 };
//!
//! let result = check_baseplate(&plate, &loads, true).unwrap();
//! assert_eq!(result.checks.len(), 4);
//! assert!(result.all_pass);
//! ```

use std::f64::consts::PI;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::code_refs::{ACI_ANCHORAGE, AISC_CONNECTIONS};
use crate::constants::*;
use crate::errors::{CalcError, CalcResult};
use crate::units::{Kips, Pounds};

pub const PLATE_THICKNESS: &str = "Plate Thickness";
pub const WELD_STRENGTH: &str = "Weld Strength";
pub const ANCHOR_TENSION: &str = "Anchor Tension";
pub const ANCHOR_SHEAR: &str = "Anchor Shear";

fn default_plate_fy() -> f64 {
    36.0
}

/// Base plate, weld and anchor layout.
///
/// ## JSON Example
///
/// ```json
/// {
///   "plate_w_in": 14.0, "plate_l_in": 14.0, "plate_thk_in": 0.75, "fy_ksi": 36.0,
///   "weld_size_in": 0.25,
///   "anchor_dia_in": 0.75, "anchor_grade_ksi": 58.0, "anchor_embed_in": 12.0,
///   "rows": 2, "bolts_per_row": 2, "row_spacing_in": 10.0, "edge_distance_in": 2.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasePlateInput {
    /// Plate width B (in)
    pub plate_w_in: f64,
    /// Plate length N (in)
    pub plate_l_in: f64,
    /// Plate thickness t (in)
    pub plate_thk_in: f64,
    /// Plate yield strength (ksi)
    #[serde(default = "default_plate_fy")]
    pub fy_ksi: f64,
    /// Fillet weld leg size (in)
    pub weld_size_in: f64,
    /// Anchor rod diameter (in)
    pub anchor_dia_in: f64,
    /// Anchor rod tensile strength Fu (ksi)
    pub anchor_grade_ksi: f64,
    /// Effective embedment hef (in)
    pub anchor_embed_in: f64,
    /// Rows of anchors across the bending direction
    pub rows: u32,
    pub bolts_per_row: u32,
    /// Spacing between adjacent rows (in)
    pub row_spacing_in: f64,
    /// Cantilever from anchor row to plate edge (in)
    pub edge_distance_in: f64,
}

impl BasePlateInput {
    /// Total anchors; an anchor grid too large for `u32` is rejected
    pub fn bolt_count(&self) -> CalcResult<u32> {
        self.rows.checked_mul(self.bolts_per_row).ok_or_else(|| {
            CalcError::invalid_input(
                "bolts_per_row",
                format!("{} x {}", self.rows, self.bolts_per_row),
                "Anchor count is out of range",
            )
        })
    }

    /// Gross area of one anchor rod (in²)
    pub fn anchor_area_in2(&self) -> f64 {
        PI * self.anchor_dia_in * self.anchor_dia_in / 4.0
    }

    /// Distance between the outer anchor rows (in)
    pub fn lever_arm_in(&self) -> f64 {
        f64::from(self.rows.saturating_sub(1)) * self.row_spacing_in
    }

    /// Weld around the plate perimeter (in)
    pub fn weld_length_in(&self) -> f64 {
        2.0 * (self.plate_w_in + self.plate_l_in)
    }
}

/// Factored loads at the base plate
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BasePlateLoads {
    #[serde(default)]
    pub mu_kipft: f64,
    #[serde(default)]
    pub vu_kip: f64,
    #[serde(default)]
    pub tu_kip: f64,
}

impl BasePlateLoads {
    pub fn validate(&self) -> CalcResult<()> {
        for (field, value) in [("mu_kipft", self.mu_kipft), ("vu_kip", self.vu_kip), ("tu_kip", self.tu_kip)] {
            if value < 0.0 {
                return Err(CalcError::invalid_input(field, value.to_string(), "Load cannot be negative"));
            }
        }
        Ok(())
    }
}

/// One named check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckResult {
    pub name: String,
    pub demand: f64,
    pub capacity: f64,
    pub unit: String,
    #[serde(rename = "pass")]
    pub passes: bool,
    /// Limit state that set the capacity
    pub governing: Option<String>,
}

impl CheckResult {
    fn new(name: &str, demand: f64, capacity: f64, unit: &str, governing: &str) -> Self {
        CheckResult {
            name: name.to_string(),
            demand,
            capacity,
            unit: unit.to_string(),
            passes: demand <= capacity,
            governing: Some(governing.to_string()),
        }
    }

    /// Demand / capacity; zero capacity counts as fully overloaded
    pub fn ratio(&self) -> f64 {
        if self.capacity > 0.0 {
            self.demand / self.capacity
        } else if self.demand > 0.0 {
            f64::MAX
        } else {
            0.0
        }
    }
}

/// The full check suite for one plate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasePlateChecks {
    pub all_pass: bool,
    pub checks: Vec<CheckResult>,
    /// Suggested changes for failing checks
    pub alternatives: Vec<String>,
    pub code_references: Vec<String>,
}

impl BasePlateChecks {
    /// Worst demand/capacity ratio across the suite
    pub fn worst_ratio(&self) -> f64 {
        self.checks.iter().map(CheckResult::ratio).fold(0.0, f64::max)
    }

    pub fn get(&self, name: &str) -> Option<&CheckResult> {
        self.checks.iter().find(|c| c.name == name)
    }
}

/// Request wrapper for running the suite on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasePlateCheckInput {
    pub plate: BasePlateInput,
    pub loads: BasePlateLoads,
    #[serde(default = "default_suggest_alternatives")]
    pub suggest_alternatives: bool,
}

fn default_suggest_alternatives() -> bool {
    true
}

/// Concrete breakout strength of one anchor (kips)
pub fn anchor_breakout_kips(embed_in: f64, spacing_in: f64) -> f64 {
    let spacing_factor = (spacing_in / embed_in).min(1.0);
    let nb_lbs = BREAKOUT_KC * CONCRETE_FC_PSI.sqrt() * embed_in.powf(1.5) * spacing_factor;
    Kips::from(Pounds(nb_lbs)).value()
}

/// Steel tensile strength of one anchor, φ 0.75 Ab Fu (kips)
pub fn anchor_steel_tension_kips(area_in2: f64, fu_ksi: f64) -> f64 {
    PHI_TENSION * ANCHOR_TENSILE_AREA_FACTOR * area_in2 * fu_ksi
}

/// Steel shear strength of one anchor, φ 0.6 Ab Fu (kips)
pub fn anchor_steel_shear_kips(area_in2: f64, fu_ksi: f64) -> f64 {
    PHI_SHEAR * ANCHOR_SHEAR_FACTOR * area_in2 * fu_ksi
}

/// Fillet weld strength per inch of leg over a given length (kips)
pub fn weld_capacity_kips(weld_size_in: f64, length_in: f64) -> f64 {
    WELD_STRESS_FACTOR * WELD_FEXX_KSI * WELD_THROAT_FACTOR * weld_size_in * length_in
}

/// Run the check suite.
///
/// # Errors
///
/// * `InvalidInput` - negative loads, no anchors, no lever arm under moment,
///   non-positive plate section modulus or anchor embedment
pub fn check_baseplate(
    plate: &BasePlateInput,
    loads: &BasePlateLoads,
    suggest_alternatives: bool,
) -> CalcResult<BasePlateChecks> {
    loads.validate()?;

    let n_bolts = plate.bolt_count()?;
    if n_bolts == 0 {
        return Err(CalcError::invalid_input(
            "rows",
            format!("{} x {}", plate.rows, plate.bolts_per_row),
            "At least one anchor is required",
        ));
    }
    let lever_in = plate.lever_arm_in();
    if loads.mu_kipft > 0.0 && lever_in <= 0.0 {
        return Err(CalcError::invalid_input(
            "row_spacing_in",
            plate.row_spacing_in.to_string(),
            "Moment needs at least two anchor rows with positive spacing",
        ));
    }

    let mut checks = Vec::with_capacity(4);
    let mut alternatives = Vec::new();

    // Tension on one bolt of the outer row
    let n = f64::from(n_bolts);
    let per_row = f64::from(plate.bolts_per_row);
    let moment_tension_kip = if loads.mu_kipft > 0.0 {
        loads.mu_kipft * 12.0 / (lever_in * per_row)
    } else {
        0.0
    };
    let tension_per_bolt_kip = loads.tu_kip / n + moment_tension_kip;

    // 1. Plate bending over the edge distance
    let plate_moment_kipin = per_row * tension_per_bolt_kip * plate.edge_distance_in;
    let s_plate = plate.plate_w_in * plate.plate_thk_in * plate.plate_thk_in / 6.0;
    if s_plate <= 0.0 {
        return Err(CalcError::invalid_input(
            "plate_thk_in",
            plate.plate_thk_in.to_string(),
            format!("Plate section modulus {:.3} in³ must be positive", s_plate),
        ));
    }
    let allowable_fb = PLATE_BENDING_FACTOR * plate.fy_ksi;
    let plate_check = CheckResult::new(PLATE_THICKNESS, plate_moment_kipin / s_plate, allowable_fb, "ksi", "bending");
    if !plate_check.passes && suggest_alternatives {
        let min_thk = (plate_moment_kipin / (allowable_fb * plate.plate_w_in / 6.0)).sqrt();
        alternatives.push(format!(
            "Increase plate thickness to {:.3}in (currently {:.3}in)",
            min_thk, plate.plate_thk_in
        ));
    }
    checks.push(plate_check);

    // 2. Perimeter fillet weld in shear
    let weld_length_in = plate.weld_length_in();
    let weld_check = CheckResult::new(
        WELD_STRENGTH,
        loads.vu_kip,
        weld_capacity_kips(plate.weld_size_in, weld_length_in),
        "kip",
        "shear",
    );
    if !weld_check.passes && suggest_alternatives {
        let min_weld = loads.vu_kip / weld_capacity_kips(1.0, weld_length_in);
        alternatives.push(format!(
            "Increase weld size to {:.3}in (currently {:.3}in)",
            min_weld, plate.weld_size_in
        ));
    }
    checks.push(weld_check);

    // 3. Anchor tension, steel vs concrete breakout
    if plate.anchor_embed_in <= 0.0 {
        return Err(CalcError::invalid_input(
            "anchor_embed_in",
            plate.anchor_embed_in.to_string(),
            "Anchor embedment must be positive",
        ));
    }
    let ab = plate.anchor_area_in2();
    let steel_kip = anchor_steel_tension_kips(ab, plate.anchor_grade_ksi);
    let breakout_kip = anchor_breakout_kips(plate.anchor_embed_in, plate.row_spacing_in);
    let governing = if steel_kip < breakout_kip { "steel" } else { "breakout" };
    let tension_check = CheckResult::new(
        ANCHOR_TENSION,
        tension_per_bolt_kip,
        steel_kip.min(breakout_kip),
        "kip/bolt",
        governing,
    );
    if !tension_check.passes && suggest_alternatives {
        let min_dia =
            (tension_per_bolt_kip / (PHI_TENSION * ANCHOR_TENSILE_AREA_FACTOR * plate.anchor_grade_ksi * PI / 4.0)).sqrt();
        alternatives.push(format!(
            "Increase anchor diameter to {:.3}in (currently {:.3}in)",
            min_dia, plate.anchor_dia_in
        ));
        if breakout_kip < tension_per_bolt_kip {
            alternatives.push(format!(
                "Increase anchor embedment or spacing (breakout capacity {:.2} kip/bolt at {:.1}in embedment)",
                breakout_kip, plate.anchor_embed_in
            ));
        }
    }
    checks.push(tension_check);

    // 4. Anchor shear
    let shear_per_bolt_kip = loads.vu_kip / n;
    let shear_check = CheckResult::new(
        ANCHOR_SHEAR,
        shear_per_bolt_kip,
        anchor_steel_shear_kips(ab, plate.anchor_grade_ksi),
        "kip/bolt",
        "steel",
    );
    if !shear_check.passes && suggest_alternatives {
        let min_dia = (shear_per_bolt_kip / (PHI_SHEAR * ANCHOR_SHEAR_FACTOR * plate.anchor_grade_ksi * PI / 4.0)).sqrt();
        alternatives.push(format!(
            "Increase anchor diameter to {:.3}in for shear (currently {:.3}in)",
            min_dia, plate.anchor_dia_in
        ));
    }
    checks.push(shear_check);

    let all_pass = checks.iter().all(|c| c.passes);
    debug!(
        "baseplate {}x{}x{}: T/bolt={:.3} kip, all_pass={}",
        plate.plate_w_in, plate.plate_l_in, plate.plate_thk_in, tension_per_bolt_kip, all_pass
    );

    Ok(BasePlateChecks {
        all_pass,
        checks,
        alternatives,
        code_references: vec![
            AISC_CONNECTIONS.cite("Design of Connections"),
            ACI_ANCHORAGE.cite("Anchoring to Concrete"),
        ],
    })
}

/// Run the suite from a request record
pub fn calculate(input: &BasePlateCheckInput) -> CalcResult<BasePlateChecks> {
    check_baseplate(&input.plate, &input.loads, input.suggest_alternatives)
}
