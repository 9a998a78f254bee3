//! # Critical Failure Mode
//!
//! When a design fails more than one check, the result names the single worst
//! one so the engineer knows where to look first. Each failing check reports a
//! severity normalized so that 1.0 sits exactly at its limit; the highest
//! severity wins and ties go to the mode listed first in [`FailureMode::ALL`].

use serde::{Deserialize, Serialize};

/// Checks that can govern an inadequate pole design
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FailureMode {
    Bending,
    Shear,
    Deflection,
    Overturning,
    SoilBearing,
    /// Double-pole only
    LateralStability,
}

impl FailureMode {
    /// Vocabulary in tie-break order
    pub const ALL: [FailureMode; 6] = [
        FailureMode::Bending,
        FailureMode::Shear,
        FailureMode::Deflection,
        FailureMode::Overturning,
        FailureMode::SoilBearing,
        FailureMode::LateralStability,
    ];

    /// Serialized tag
    pub fn code(&self) -> &'static str {
        match self {
            FailureMode::Bending => "BENDING",
            FailureMode::Shear => "SHEAR",
            FailureMode::Deflection => "DEFLECTION",
            FailureMode::Overturning => "OVERTURNING",
            FailureMode::SoilBearing => "SOIL_BEARING",
            FailureMode::LateralStability => "LATERAL_STABILITY",
        }
    }
}

impl std::fmt::Display for FailureMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A failing check and how far past its limit it is (1.0 = at the limit)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FailureSeverity {
    pub mode: FailureMode,
    pub severity: f64,
}

/// Sort failing checks from worst to least severe.
///
/// The sort is stable, so candidates pushed in vocabulary order keep that
/// order among equal severities.
pub fn rank_failures(mut failures: Vec<FailureSeverity>) -> Vec<FailureSeverity> {
    failures.sort_by(|a, b| {
        b.severity
            .partial_cmp(&a.severity)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    failures
}

/// The worst failing check, or `None` when nothing fails
pub fn critical_failure_mode(failures: Vec<FailureSeverity>) -> Option<FailureMode> {
    rank_failures(failures).first().map(|f| f.mode)
}
