//! # Code References
//!
//! Every result record carries a list of human-readable citations so a
//! reviewer can trace each number back to the governing provision. Citations
//! are built from [`CodeReference`] values rather than ad-hoc strings so the
//! edition years stay consistent across solvers.
//!
//! ```rust
//! use signcalc_core::code_refs::{CodeReference, ASCE7_VELOCITY_PRESSURE};
//!
//! assert_eq!(
//!     ASCE7_VELOCITY_PRESSURE.cite("Velocity Pressure"),
//!     "ASCE 7-22 Eq 26.10-1: Velocity Pressure"
//! );
//! assert_eq!(
//!     CodeReference::AISC360 { year: 2022, chapter: "F" }.citation(),
//!     "AISC 360-22 Chapter F"
//! );
//! ```

use serde::Serialize;

/// Reference to a structural engineering code or standard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CodeReference {
    /// ASCE 7 - Minimum Design Loads for Buildings
    ASCE7 { year: u16, item: &'static str },
    /// International Building Code
    IBC { year: u16, item: &'static str },
    /// AISC 360 - Specification for Structural Steel Buildings
    AISC360 { year: u16, chapter: &'static str },
    /// ACI 318 - Building Code Requirements for Structural Concrete
    ACI318 { year: u16, item: &'static str },
}

impl CodeReference {
    /// Format the reference for display
    pub fn citation(&self) -> String {
        match self {
            CodeReference::ASCE7 { year, item } => format!("ASCE 7-{} {}", year % 100, item),
            CodeReference::IBC { year, item } => format!("IBC {} {}", year, item),
            CodeReference::AISC360 { year, chapter } => {
                format!("AISC 360-{} Chapter {}", year % 100, chapter)
            }
            CodeReference::ACI318 { year, item } => format!("ACI 318-{} {}", year % 100, item),
        }
    }

    /// Citation followed by a short description of what it covers
    pub fn cite(&self, topic: impl std::fmt::Display) -> String {
        format!("{}: {}", self.citation(), topic)
    }

    /// Short form for inline references
    pub fn short_form(&self) -> &'static str {
        match self {
            CodeReference::ASCE7 { .. } => "ASCE 7",
            CodeReference::IBC { .. } => "IBC",
            CodeReference::AISC360 { .. } => "AISC 360",
            CodeReference::ACI318 { .. } => "ACI 318",
        }
    }
}

impl std::fmt::Display for CodeReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.citation())
    }
}

// ASCE 7-22
pub const ASCE7_VELOCITY_PRESSURE: CodeReference = CodeReference::ASCE7 { year: 2022, item: "Eq 26.10-1" };
pub const ASCE7_KZ_TABLE: CodeReference = CodeReference::ASCE7 { year: 2022, item: "Table 26.10-1" };
pub const ASCE7_IMPORTANCE: CodeReference = CodeReference::ASCE7 { year: 2022, item: "Table 1.5-2" };
pub const ASCE7_DIRECTIONALITY: CodeReference = CodeReference::ASCE7 { year: 2022, item: "Table 26.6-1" };
pub const ASCE7_FORCE_COEFF: CodeReference = CodeReference::ASCE7 { year: 2022, item: "Fig 29.4-1" };
pub const ASCE7_OTHER_STRUCTURES: CodeReference = CodeReference::ASCE7 { year: 2022, item: "Chapter 29" };

// IBC 2024
pub const IBC_LOAD_COMBINATIONS: CodeReference = CodeReference::IBC { year: 2024, item: "Section 1605.2.1" };
pub const IBC_FOUNDATIONS: CodeReference = CodeReference::IBC { year: 2024, item: "Section 1807" };
pub const IBC_LATERAL_BEARING: CodeReference = CodeReference::IBC { year: 2024, item: "Section 1807.3 Eq 18-1" };
pub const IBC_SOIL_BEARING: CodeReference = CodeReference::IBC { year: 2024, item: "Table 1806.2" };

// AISC 360-22
pub const AISC_COMPRESSION: CodeReference = CodeReference::AISC360 { year: 2022, chapter: "E" };
pub const AISC_FLEXURE: CodeReference = CodeReference::AISC360 { year: 2022, chapter: "F" };
pub const AISC_SHEAR: CodeReference = CodeReference::AISC360 { year: 2022, chapter: "G" };
pub const AISC_CONNECTIONS: CodeReference = CodeReference::AISC360 { year: 2022, chapter: "J" };
pub const AISC_SERVICEABILITY: CodeReference = CodeReference::AISC360 { year: 2022, chapter: "L" };

// ACI 318-19
pub const ACI_ANCHORAGE: CodeReference = CodeReference::ACI318 { year: 2019, item: "Chapter 17" };

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_citation_formats() {
        assert_eq!(ASCE7_KZ_TABLE.citation(), "ASCE 7-22 Table 26.10-1");
        assert_eq!(IBC_FOUNDATIONS.citation(), "IBC 2024 Section 1807");
        assert_eq!(AISC_SHEAR.citation(), "AISC 360-22 Chapter G");
        assert_eq!(ACI_ANCHORAGE.citation(), "ACI 318-19 Chapter 17");
    }

    #[test]
    fn test_cite_with_topic() {
        assert_eq!(
            ASCE7_DIRECTIONALITY.cite(format_args!("Kd={}", 0.85)),
            "ASCE 7-22 Table 26.6-1: Kd=0.85"
        );
        assert_eq!(
            IBC_LOAD_COMBINATIONS.cite("Governing combination = LC6"),
            "IBC 2024 Section 1605.2.1: Governing combination = LC6"
        );
    }

    #[test]
    fn test_short_form() {
        assert_eq!(AISC_FLEXURE.short_form(), "AISC 360");
        assert_eq!(IBC_SOIL_BEARING.short_form(), "IBC");
    }
}
