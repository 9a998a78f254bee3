//! IBC 2024 Basic ASD Load Combinations
//!
//! The seven allowable stress combinations of IBC 2024 Section 1605.2.1 as
//! they apply to a freestanding sign. Live, roof live and snow are always zero
//! for this structure type; the combinations still carry those factors so the
//! enumeration mirrors the code and a future load type slots in without
//! changing the governing-combination logic.
//!
//! Factors are kept as an ordered list so a combination sums its terms in the
//! same order on every call.

use serde::{Deserialize, Serialize};
use super::load_types::LoadType;
use super::LoadCase;

/// A load combination with factors for each load type
///
/// # Example
/// ```
/// use signcalc_core::loads::{LoadCombination, LoadCase, LoadType};
///
/// let combo = LoadCombination::new("LC5", "D + 0.75L + 0.75W")
///     .with_factor(LoadType::Dead, 1.0)
///     .with_factor(LoadType::Live, 0.75)
///     .with_factor(LoadType::Wind, 0.75);
///
/// let case = LoadCase::new("Base moment")
///     .with_load(LoadType::Wind, 8.0);
///
/// assert_eq!(combo.apply(&case), 6.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadCombination {
    /// Combination identifier (e.g., "LC6")
    pub name: String,

    /// Human-readable equation (e.g., "D + W")
    pub equation: String,

    /// Load factors in equation order
    pub factors: Vec<(LoadType, f64)>,
}

impl LoadCombination {
    /// Create a new load combination
    pub fn new(name: impl Into<String>, equation: impl Into<String>) -> Self {
        LoadCombination {
            name: name.into(),
            equation: equation.into(),
            factors: Vec::new(),
        }
    }

    /// Add a load factor (builder pattern)
    pub fn with_factor(mut self, load_type: LoadType, factor: f64) -> Self {
        self.factors.push((load_type, factor));
        self
    }

    /// Apply this combination to a LoadCase, returning the total factored load
    pub fn apply(&self, case: &LoadCase) -> f64 {
        self.factors
            .iter()
            .map(|(load_type, factor)| factor * case.get(*load_type))
            .sum()
    }

    /// Get the factor for a specific load type (0.0 if not in combination)
    pub fn get_factor(&self, load_type: LoadType) -> f64 {
        self.factors
            .iter()
            .find(|(lt, _)| *lt == load_type)
            .map(|(_, f)| *f)
            .unwrap_or(0.0)
    }
}

/// Generate the IBC 2024 basic ASD combinations used for sign structures
///
/// # Example
/// ```
/// use signcalc_core::loads::ibc_asd_combinations;
///
/// let combos = ibc_asd_combinations();
/// assert_eq!(combos.len(), 7);
/// assert_eq!(combos[5].equation, "D + W");
/// ```
pub fn ibc_asd_combinations() -> Vec<LoadCombination> {
    vec![
        LoadCombination::new("LC1", "D")
            .with_factor(LoadType::Dead, 1.0),

        LoadCombination::new("LC2", "D + L")
            .with_factor(LoadType::Dead, 1.0)
            .with_factor(LoadType::Live, 1.0),

        LoadCombination::new("LC3", "D + Lr")
            .with_factor(LoadType::Dead, 1.0)
            .with_factor(LoadType::LiveRoof, 1.0),

        LoadCombination::new("LC4", "D + S")
            .with_factor(LoadType::Dead, 1.0)
            .with_factor(LoadType::Snow, 1.0),

        LoadCombination::new("LC5", "D + 0.75L + 0.75W")
            .with_factor(LoadType::Dead, 1.0)
            .with_factor(LoadType::Live, 0.75)
            .with_factor(LoadType::Wind, 0.75),

        LoadCombination::new("LC6", "D + W")
            .with_factor(LoadType::Dead, 1.0)
            .with_factor(LoadType::Wind, 1.0),

        // Stability / overturning
        LoadCombination::new("LC7", "0.6D + W")
            .with_factor(LoadType::Dead, 0.6)
            .with_factor(LoadType::Wind, 1.0),
    ]
}

/// Value of one combination applied to a load case
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinationResult {
    /// Combination identifier
    pub name: String,
    /// Combination equation
    pub equation: String,
    /// Factored value
    pub value: f64,
}

/// Apply every combination to a load case, in combination order
pub fn apply_all(case: &LoadCase, combinations: &[LoadCombination]) -> Vec<CombinationResult> {
    combinations
        .iter()
        .map(|combo| CombinationResult {
            name: combo.name.clone(),
            equation: combo.equation.clone(),
            value: combo.apply(case),
        })
        .collect()
}

/// Find the governing (maximum) load combination result
///
/// Ties go to the combination listed first, so with zero dead-load moment
/// `D + W` governs over `0.6D + W`. Returns `None` for an empty list.
///
/// # Example
/// ```
/// use signcalc_core::loads::{LoadCase, LoadType, ibc_asd_combinations, find_governing_combination};
///
/// let case = LoadCase::new("Base moment").with_load(LoadType::Wind, 8.1);
/// let governing = find_governing_combination(&case, &ibc_asd_combinations()).unwrap();
/// assert_eq!(governing.name, "LC6");
/// ```
pub fn find_governing_combination(
    case: &LoadCase,
    combinations: &[LoadCombination],
) -> Option<CombinationResult> {
    let mut governing: Option<CombinationResult> = None;
    for result in apply_all(case, combinations) {
        let replace = match &governing {
            None => true,
            Some(current) => result.value > current.value,
        };
        if replace {
            governing = Some(result);
        }
    }
    governing
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combination_labels_in_code_order() {
        let names: Vec<String> = ibc_asd_combinations().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["LC1", "LC2", "LC3", "LC4", "LC5", "LC6", "LC7"]);
    }

    #[test]
    fn test_factors() {
        let combos = ibc_asd_combinations();
        assert_eq!(combos[4].get_factor(LoadType::Wind), 0.75);
        assert_eq!(combos[6].get_factor(LoadType::Dead), 0.6);
        assert_eq!(combos[0].get_factor(LoadType::Wind), 0.0);
    }

    #[test]
    fn test_wind_governs_with_first_tie() {
        // Dead moment is zero: LC6 and LC7 both give M, LC6 is listed first
        let case = LoadCase::new("Moment")
            .with_load(LoadType::Dead, 0.0)
            .with_load(LoadType::Wind, 8.084);

        let governing = find_governing_combination(&case, &ibc_asd_combinations()).unwrap();
        assert_eq!(governing.name, "LC6");
        assert!((governing.value - 8.084).abs() < 1e-12);
    }

    #[test]
    fn test_dead_governs_when_larger() {
        let case = LoadCase::new("Axial")
            .with_load(LoadType::Dead, 10.0)
            .with_load(LoadType::Wind, 0.0);

        let governing = find_governing_combination(&case, &ibc_asd_combinations()).unwrap();
        assert_eq!(governing.name, "LC1");
        assert_eq!(governing.value, 10.0);
    }

    #[test]
    fn test_apply_all_evaluates_seven() {
        let case = LoadCase::new("Moment").with_load(LoadType::Wind, 4.0);
        let results = apply_all(&case, &ibc_asd_combinations());
        assert_eq!(results.len(), 7);
        assert_eq!(results[4].value, 3.0);
        assert_eq!(results[1].value, 0.0);
    }

    #[test]
    fn test_empty_combinations() {
        let case = LoadCase::new("Empty");
        assert!(find_governing_combination(&case, &[]).is_none());
    }
}
