//! Load type definitions
//!
//! The load categories that appear in the IBC basic ASD combinations used for
//! sign structures. Live, roof live and snow never act on a freestanding sign
//! but stay in the combinations so the enumeration matches the code text.

use serde::{Deserialize, Serialize};

/// Load types per ASCE 7-22 Section 2 / IBC 2024 Section 1605
///
/// # Example
/// ```
/// use signcalc_core::loads::LoadType;
///
/// assert_eq!(LoadType::LiveRoof.code(), "Lr");
/// assert!(LoadType::Dead.is_gravity());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LoadType {
    /// D - Dead load (sign face, cabinet and pole self-weight)
    Dead,
    /// L - Live load
    Live,
    /// Lr - Roof live load
    LiveRoof,
    /// S - Snow load
    Snow,
    /// W - Wind load
    Wind,
}

impl LoadType {
    /// All load types in standard order
    pub const ALL: [LoadType; 5] = [
        LoadType::Dead,
        LoadType::Live,
        LoadType::LiveRoof,
        LoadType::Snow,
        LoadType::Wind,
    ];

    /// Standard abbreviation code (D, L, Lr, S, W)
    pub fn code(&self) -> &'static str {
        match self {
            LoadType::Dead => "D",
            LoadType::Live => "L",
            LoadType::LiveRoof => "Lr",
            LoadType::Snow => "S",
            LoadType::Wind => "W",
        }
    }

    /// Human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            LoadType::Dead => "Dead load",
            LoadType::Live => "Live load",
            LoadType::LiveRoof => "Roof live load",
            LoadType::Snow => "Snow load",
            LoadType::Wind => "Wind load",
        }
    }

    /// Whether this load type is a gravity load (acts downward)
    pub fn is_gravity(&self) -> bool {
        !matches!(self, LoadType::Wind)
    }
}

impl std::fmt::Display for LoadType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_type_codes() {
        let codes: Vec<&str> = LoadType::ALL.iter().map(|lt| lt.code()).collect();
        assert_eq!(codes, vec!["D", "L", "Lr", "S", "W"]);
    }

    #[test]
    fn test_gravity_loads() {
        assert!(LoadType::Dead.is_gravity());
        assert!(LoadType::Snow.is_gravity());
        assert!(!LoadType::Wind.is_gravity());
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&LoadType::LiveRoof).unwrap();
        assert_eq!(json, "\"LiveRoof\"");
        let parsed: LoadType = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, LoadType::LiveRoof);
    }
}
