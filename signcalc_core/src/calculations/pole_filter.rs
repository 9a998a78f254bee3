//! # Pole Section Filter
//!
//! Screens a catalog for sections strong enough for a required moment, using
//! the AISC 360-22 Chapter F yield limit state `φMn = φ Fy Sx` with φ = 0.90.
//!
//! Only the chosen family is considered and every candidate is checked at the
//! chosen grade's Fy, whatever the catalog row says. Survivors are sorted by
//! the caller's key; the sort is stable, so equal keys keep catalog order.
//!
//! ## Example
//!
//! ```rust
//! use signcalc_core::calculations::pole_filter::{calculate, PoleFilterInput};
//!
//! let result = calculate(&PoleFilterInput::new(100.0)).unwrap();
//! assert!(result.options.iter().all(|o| o.capacity_kipin >= 100.0));
//! ```

use std::cmp::Ordering;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::code_refs::AISC_FLEXURE;
use crate::constants::PHI_BENDING;
use crate::errors::{CalcError, CalcResult};
use crate::materials::{builtin_catalog, PoleSection, SectionFamily, SectionProvider, SteelGrade};

fn default_family() -> SectionFamily {
    SectionFamily::HSS
}

/// Ordering of the feasible list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortKey {
    /// Section modulus, then weight
    #[default]
    #[serde(rename = "Sx", alias = "sx")]
    SectionModulus,
    /// Lightest first
    #[serde(rename = "weight_per_ft")]
    WeightPerFt,
    /// Designation, alphabetical
    #[serde(rename = "tube_size")]
    TubeSize,
}

/// Input for the pole filter.
///
/// ## JSON Example
///
/// ```json
/// {
///   "required_moment_kipin": 100.0,
///   "family": "HSS",
///   "steel_grade": "A500B",
///   "sort_by": "weight_per_ft"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoleFilterInput {
    /// Required flexural strength Mu (kip-in)
    pub required_moment_kipin: f64,
    /// Candidates; the built-in catalog when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sections: Option<Vec<PoleSection>>,
    #[serde(default = "default_family")]
    pub family: SectionFamily,
    #[serde(default)]
    pub steel_grade: SteelGrade,
    #[serde(default)]
    pub sort_by: SortKey,
}

impl PoleFilterInput {
    /// Screen the built-in catalog for HSS at A500B, sorted by Sx
    pub fn new(required_moment_kipin: f64) -> Self {
        PoleFilterInput {
            required_moment_kipin,
            sections: None,
            family: default_family(),
            steel_grade: SteelGrade::default(),
            sort_by: SortKey::default(),
        }
    }

    pub fn with_sections(self, sections: Vec<PoleSection>) -> Self {
        PoleFilterInput {
            sections: Some(sections),
            ..self
        }
    }

    pub fn with_family(self, family: SectionFamily) -> Self {
        PoleFilterInput { family, ..self }
    }

    pub fn with_steel_grade(self, steel_grade: SteelGrade) -> Self {
        PoleFilterInput { steel_grade, ..self }
    }

    pub fn with_sort_by(self, sort_by: SortKey) -> Self {
        PoleFilterInput { sort_by, ..self }
    }

    pub fn validate(&self) -> CalcResult<()> {
        if self.required_moment_kipin < 0.0 {
            return Err(CalcError::invalid_input(
                "required_moment_kipin",
                self.required_moment_kipin.to_string(),
                "Required moment cannot be negative",
            ));
        }
        Ok(())
    }
}

/// A section that carries the required moment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoleOption {
    pub designation: String,
    pub family: SectionFamily,
    pub weight_per_ft: f64,
    pub sx_in3: f64,
    /// Fy used for the check (ksi)
    pub fy_ksi: f64,
    /// φMn (kip-in)
    pub capacity_kipin: f64,
    /// Mu / φMn
    pub utilization: f64,
}

/// Feasible sections in the requested order, plus notes when there are none
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoleFilterResult {
    pub options: Vec<PoleOption>,
    pub warnings: Vec<String>,
    pub code_references: Vec<String>,
}

/// Design flexural strength φMn = φ Fy Sx (kip-in)
pub fn flexural_capacity_kipin(fy_ksi: f64, sx_in3: f64) -> f64 {
    PHI_BENDING * fy_ksi * sx_in3
}

fn compare(a: &PoleOption, b: &PoleOption, key: SortKey) -> Ordering {
    let by = |x: f64, y: f64| x.partial_cmp(&y).unwrap_or(Ordering::Equal);
    match key {
        SortKey::SectionModulus => by(a.sx_in3, b.sx_in3).then_with(|| by(a.weight_per_ft, b.weight_per_ft)),
        SortKey::WeightPerFt => by(a.weight_per_ft, b.weight_per_ft),
        SortKey::TubeSize => a.designation.cmp(&b.designation),
    }
}

/// Filter sections against the required moment.
///
/// # Errors
///
/// * `InvalidInput` - negative required moment
pub fn calculate(input: &PoleFilterInput) -> CalcResult<PoleFilterResult> {
    input.validate()?;

    let code_references = vec![AISC_FLEXURE.cite("Flexural Design, φMn = φ Fy Sx")];
    let sections = match &input.sections {
        Some(sections) => sections.clone(),
        None => builtin_catalog().sections(),
    };
    if sections.is_empty() {
        return Ok(PoleFilterResult {
            options: Vec::new(),
            warnings: vec!["No sections provided".to_string()],
            code_references,
        });
    }

    let fy_ksi = input.steel_grade.fy_ksi();
    let mu = input.required_moment_kipin;

    let in_family: Vec<&PoleSection> = sections.iter().filter(|s| s.family == input.family).collect();
    let mut options: Vec<PoleOption> = in_family
        .iter()
        .map(|s| {
            let capacity_kipin = flexural_capacity_kipin(fy_ksi, s.sx_in3);
            PoleOption {
                designation: s.designation.clone(),
                family: s.family,
                weight_per_ft: s.weight_plf,
                sx_in3: s.sx_in3,
                fy_ksi,
                capacity_kipin,
                utilization: if capacity_kipin > 0.0 { mu / capacity_kipin } else { f64::MAX },
            }
        })
        .filter(|o| o.capacity_kipin >= mu)
        .collect();

    let mut warnings = Vec::new();
    if options.is_empty() {
        warnings.push(format!(
            "No feasible sections found for Mu={:.1} kip-in, family={}, grade={}",
            mu, input.family, input.steel_grade
        ));
        let max_capacity = in_family
            .iter()
            .map(|s| flexural_capacity_kipin(fy_ksi, s.sx_in3))
            .fold(0.0_f64, f64::max);
        if max_capacity > 0.0 {
            warnings.push(format!(
                "Closest alternative: max capacity {:.1} kip-in, increase grade or try different family",
                max_capacity
            ));
        }
    }

    options.sort_by(|a, b| compare(a, b, input.sort_by));
    debug!(
        "pole filter: Mu={:.1} kip-in {} {} -> {} of {} sections",
        mu,
        input.family,
        input.steel_grade,
        options.len(),
        sections.len()
    );

    Ok(PoleFilterResult {
        options,
        warnings,
        code_references,
    })
}
