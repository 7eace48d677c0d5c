use serde::{Deserialize, Serialize};

use crate::tables::Points;

/// How the first-language CLB profile is reduced to one level for transferability pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClbBasis {
    /// Mean of the four skills.
    #[default]
    Average,
    /// Weakest skill, i.e. every skill must clear the threshold.
    Minimum,
}

/// Caps applied on top of the breakdown table.
///
/// Defaults follow the published rubric; deployments that receive a revised table can adjust
/// them alongside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringPolicy {
    pub second_language_cap_with_spouse: Points,
    pub second_language_cap_no_spouse: Points,
    pub spouse_language_cap: Points,
    pub education_combination_cap: Points,
    pub foreign_work_combination_cap: Points,
    pub transferability_cap: Points,
    pub additional_cap: Points,
    pub total_cap: Points,
    pub transferability_language_basis: ClbBasis,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            second_language_cap_with_spouse: 22,
            second_language_cap_no_spouse: 24,
            spouse_language_cap: 20,
            education_combination_cap: 50,
            foreign_work_combination_cap: 50,
            transferability_cap: 100,
            additional_cap: 600,
            total_cap: 1200,
            transferability_language_basis: ClbBasis::Average,
        }
    }
}

impl ScoringPolicy {
    pub fn second_language_cap(&self, accompanied: bool) -> Points {
        if accompanied {
            self.second_language_cap_with_spouse
        } else {
            self.second_language_cap_no_spouse
        }
    }
}
