//! Pole Sections (AISC)
//!
//! Cross-section records for the hollow sections and pipes used as sign poles,
//! plus a small built-in catalog of common sizes.
//!
//! ## Data Source
//!
//! Built-in properties follow the AISC Shapes Database v16.0 (design wall
//! thickness for HSS). The catalog is a stand-in for an external shapes
//! service: anything that implements [`SectionProvider`] can replace it.
//!
//! ## Example
//!
//! ```rust
//! use signcalc_core::materials::steel::{builtin_catalog, SectionProvider, SectionFamily};
//!
//! let hss = builtin_catalog().lookup("hss8x8x1/4").unwrap();
//! assert_eq!(hss.family, SectionFamily::HSS);
//! assert!(hss.sx_in3 > 0.0);
//! ```

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Section family tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionFamily {
    /// Square or rectangular hollow structural section
    HSS,
    /// Standard / extra strong pipe
    Pipe,
    /// Wide flange
    W,
}

impl SectionFamily {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            SectionFamily::HSS => "HSS Rectangular/Square",
            SectionFamily::Pipe => "Pipe",
            SectionFamily::W => "Wide Flange (W)",
        }
    }
}

impl std::fmt::Display for SectionFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let code = match self {
            SectionFamily::HSS => "HSS",
            SectionFamily::Pipe => "Pipe",
            SectionFamily::W => "W",
        };
        write!(f, "{}", code)
    }
}

/// Structural steel material grades
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SteelGrade {
    /// ASTM A500 Grade B (HSS)
    #[default]
    A500B,
    /// ASTM A500 Grade C (HSS)
    A500C,
    /// ASTM A53 Grade B (pipe)
    A53B,
    /// ASTM A36 (plates, bars)
    A36,
    /// ASTM A572 Grade 50
    #[serde(rename = "A572-50")]
    A572Gr50,
    /// ASTM A992 (W-shapes)
    A992,
}

impl SteelGrade {
    /// Minimum yield stress Fy (ksi)
    pub fn fy_ksi(&self) -> f64 {
        match self {
            SteelGrade::A500B => 46.0,
            SteelGrade::A500C => 50.0,
            SteelGrade::A53B => 36.0,
            SteelGrade::A36 => 36.0,
            SteelGrade::A572Gr50 => 50.0,
            SteelGrade::A992 => 50.0,
        }
    }

    /// Minimum tensile strength Fu (ksi)
    pub fn fu_ksi(&self) -> f64 {
        match self {
            SteelGrade::A500B => 58.0,
            SteelGrade::A500C => 62.0,
            SteelGrade::A53B => 60.0,
            SteelGrade::A36 => 58.0,
            SteelGrade::A572Gr50 => 65.0,
            SteelGrade::A992 => 65.0,
        }
    }

    /// Grades at or above 50 ksi yield
    pub fn is_high_strength(&self) -> bool {
        self.fy_ksi() >= 50.0
    }

    /// ASTM shorthand as it appears in requests
    pub fn code(&self) -> &'static str {
        match self {
            SteelGrade::A500B => "A500B",
            SteelGrade::A500C => "A500C",
            SteelGrade::A53B => "A53B",
            SteelGrade::A36 => "A36",
            SteelGrade::A572Gr50 => "A572-50",
            SteelGrade::A992 => "A992",
        }
    }
}

impl std::fmt::Display for SteelGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Cross-section record for a pole.
///
/// ## JSON Example
///
/// ```json
/// {
///   "designation": "HSS8X8X1/4",
///   "family": "HSS",
///   "area_in2": 7.11,
///   "depth_in": 8.0,
///   "weight_plf": 24.2,
///   "sx_in3": 19.8,
///   "ix_in4": 79.3,
///   "rx_in": 3.34,
///   "fy_ksi": 50.0,
///   "fu_ksi": 65.0,
///   "is_high_strength": true
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoleSection {
    /// AISC designation (e.g., "HSS8X8X1/4")
    pub designation: String,
    /// Section family
    pub family: SectionFamily,
    /// Cross-sectional area (in²)
    pub area_in2: f64,
    /// Overall depth (in)
    pub depth_in: f64,
    /// Weight per foot (plf)
    pub weight_plf: f64,
    /// Elastic section modulus (in³)
    pub sx_in3: f64,
    /// Moment of inertia (in⁴)
    pub ix_in4: f64,
    /// Radius of gyration (in)
    pub rx_in: f64,
    /// Yield strength (ksi)
    pub fy_ksi: f64,
    /// Tensile strength (ksi)
    pub fu_ksi: f64,
    /// High-strength material flag
    #[serde(default)]
    pub is_high_strength: bool,
}

impl PoleSection {
    /// Guard against a bad or missing catalog row.
    ///
    /// Non-positive area or section modulus cannot come from a real section.
    pub fn validate(&self) -> CalcResult<()> {
        if self.area_in2 <= 0.0 {
            return Err(CalcError::invalid_section(&self.designation, "area_in2", self.area_in2));
        }
        if self.sx_in3 <= 0.0 {
            return Err(CalcError::invalid_section(&self.designation, "sx_in3", self.sx_in3));
        }
        Ok(())
    }

    /// Slenderness ratio L/r for an unbraced length in feet
    pub fn slenderness(&self, length_ft: f64) -> f64 {
        length_ft * 12.0 / self.rx_in
    }
}

/// Source of section properties by designation.
///
/// The engine treats whatever the provider returns as authoritative.
pub trait SectionProvider {
    /// Look up a section by designation
    fn lookup(&self, designation: &str) -> CalcResult<PoleSection>;

    /// All sections in provider order
    fn sections(&self) -> Vec<PoleSection>;
}

/// In-memory section catalog that preserves insertion order.
///
/// Order matters: the pole filter breaks sort ties by catalog position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionCatalog {
    sections: Vec<PoleSection>,
}

/// Uppercase with spaces removed, so "hss 8x8x1/4" matches "HSS8X8X1/4"
fn normalize_designation(designation: &str) -> String {
    designation
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase()
}

impl SectionCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from a list of sections, keeping their order
    pub fn from_sections(sections: Vec<PoleSection>) -> Self {
        SectionCatalog { sections }
    }

    /// Insert a section, replacing any existing entry with the same designation in place
    pub fn insert(&mut self, section: PoleSection) {
        let key = normalize_designation(&section.designation);
        match self
            .sections
            .iter_mut()
            .find(|s| normalize_designation(&s.designation) == key)
        {
            Some(existing) => *existing = section,
            None => self.sections.push(section),
        }
    }

    /// Get a section by designation without cloning
    pub fn get(&self, designation: &str) -> Option<&PoleSection> {
        let key = normalize_designation(designation);
        self.sections
            .iter()
            .find(|s| normalize_designation(&s.designation) == key)
    }

    /// Sections of one family, in catalog order
    pub fn by_family(&self, family: SectionFamily) -> Vec<&PoleSection> {
        self.sections.iter().filter(|s| s.family == family).collect()
    }

    /// All sections in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &PoleSection> {
        self.sections.iter()
    }

    /// Get the number of sections in the catalog
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl SectionProvider for SectionCatalog {
    fn lookup(&self, designation: &str) -> CalcResult<PoleSection> {
        self.get(designation)
            .cloned()
            .ok_or_else(|| CalcError::section_not_found(designation))
    }

    fn sections(&self) -> Vec<PoleSection> {
        self.sections.clone()
    }
}

/// A section given either by designation or by full properties.
///
/// Lets a JSON request say `"pole_section": "HSS8X8X1/4"` or spell out
/// the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SectionChoice {
    /// Catalog designation, resolved through a [`SectionProvider`]
    Designation(String),
    /// Explicit section properties
    Properties(PoleSection),
}

impl SectionChoice {
    /// Resolve to a section record
    pub fn resolve(&self, provider: &dyn SectionProvider) -> CalcResult<PoleSection> {
        match self {
            SectionChoice::Designation(designation) => provider.lookup(designation),
            SectionChoice::Properties(section) => Ok(section.clone()),
        }
    }
}

impl From<PoleSection> for SectionChoice {
    fn from(section: PoleSection) -> Self {
        SectionChoice::Properties(section)
    }
}

impl From<&str> for SectionChoice {
    fn from(designation: &str) -> Self {
        SectionChoice::Designation(designation.to_string())
    }
}

impl From<String> for SectionChoice {
    fn from(designation: String) -> Self {
        SectionChoice::Designation(designation)
    }
}

// ============================================================================
// Built-in Common Sections
// ============================================================================

static BUILTIN_CATALOG: Lazy<SectionCatalog> = Lazy::new(build_builtin_catalog);

/// Shared read-only catalog of common sign-pole sections
pub fn builtin_catalog() -> &'static SectionCatalog {
    &BUILTIN_CATALOG
}

fn build_builtin_catalog() -> SectionCatalog {
    let mut catalog = SectionCatalog::new();

    // Square HSS, A500 Grade C
    // (label, A, depth, weight, Sx, Ix, rx)
    let square_hss = [
        ("HSS2X2X1/8", 0.84, 2.0, 3.05, 0.486, 0.486, 0.761),
        ("HSS3X3X3/16", 1.89, 3.0, 6.87, 1.64, 2.46, 1.14),
        ("HSS4X4X1/4", 3.37, 4.0, 12.21, 3.90, 7.80, 1.52),
        ("HSS5X5X1/4", 4.30, 5.0, 15.62, 6.41, 16.0, 1.93),
        ("HSS6X6X1/4", 5.24, 6.0, 19.02, 9.54, 28.6, 2.34),
        ("HSS6X6X3/8", 7.58, 6.0, 27.48, 13.2, 39.5, 2.28),
        ("HSS8X8X1/4", 7.10, 8.0, 25.82, 17.7, 70.7, 3.15),
        ("HSS8X8X3/8", 10.4, 8.0, 37.69, 25.1, 100.0, 3.10),
        ("HSS10X10X3/8", 13.2, 10.0, 47.90, 40.4, 202.0, 3.91),
        ("HSS12X12X3/8", 16.0, 12.0, 58.10, 59.6, 357.0, 4.72),
        ("HSS12X12X1/2", 21.0, 12.0, 76.07, 76.2, 457.0, 4.66),
    ];

    for (label, a, d, w, sx, ix, rx) in square_hss {
        catalog.insert(catalog_section(label, SectionFamily::HSS, SteelGrade::A500C, a, d, w, sx, ix, rx));
    }

    // Standard weight pipe, A53 Grade B
    let std_pipe = [
        ("PIPE3STD", 2.07, 3.50, 7.58, 1.72, 3.02, 1.21),
        ("PIPE4STD", 2.96, 4.50, 10.79, 3.03, 6.82, 1.52),
        ("PIPE5STD", 4.01, 5.563, 14.62, 5.14, 14.3, 1.89),
        ("PIPE6STD", 5.20, 6.625, 18.97, 8.50, 26.5, 2.25),
        ("PIPE8STD", 7.85, 8.625, 28.55, 15.8, 68.1, 2.95),
        ("PIPE10STD", 11.1, 10.75, 40.48, 28.1, 151.0, 3.68),
        ("PIPE12STD", 13.7, 12.75, 49.56, 41.0, 262.0, 4.39),
    ];

    for (label, a, d, w, sx, ix, rx) in std_pipe {
        catalog.insert(catalog_section(label, SectionFamily::Pipe, SteelGrade::A53B, a, d, w, sx, ix, rx));
    }

    catalog
}

#[allow(clippy::too_many_arguments)]
fn catalog_section(
    label: &str,
    family: SectionFamily,
    grade: SteelGrade,
    area_in2: f64,
    depth_in: f64,
    weight_plf: f64,
    sx_in3: f64,
    ix_in4: f64,
    rx_in: f64,
) -> PoleSection {
    PoleSection {
        designation: label.to_string(),
        family,
        area_in2,
        depth_in,
        weight_plf,
        sx_in3,
        ix_in4,
        rx_in,
        fy_ksi: grade.fy_ksi(),
        fu_ksi: grade.fu_ksi(),
        is_high_strength: grade.is_high_strength(),
    }
}
