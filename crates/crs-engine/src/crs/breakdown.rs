use serde::{Deserialize, Serialize};

use crate::tables::{Factor, Points, TableMiss};

/// Discrete contribution to a score, kept so a total can be audited line by line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: Factor,
    pub points: Points,
    pub notes: String,
}

/// CRS points by category.
///
/// `total` is the clamped sum of every subtotal. `table_misses` lists lookups that found no row
/// in the supplied breakdown table; each contributed zero.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub age_points: Points,
    pub education_points: Points,
    pub language_points: Points,
    pub second_language_points: Points,
    pub canadian_work_points: Points,
    pub spouse_education_points: Points,
    pub spouse_language_points: Points,
    pub spouse_work_points: Points,
    pub skill_transferability_points: Points,
    pub additional_points: Points,
    pub total: Points,
    #[serde(default)]
    pub components: Vec<ScoreComponent>,
    #[serde(default)]
    pub table_misses: Vec<TableMiss>,
}

impl ScoreBreakdown {
    /// Core human capital: age, education, both official languages and Canadian work.
    pub fn human_capital_points(&self) -> Points {
        self.age_points
            .saturating_add(self.education_points)
            .saturating_add(self.language_points)
            .saturating_add(self.second_language_points)
            .saturating_add(self.canadian_work_points)
    }

    pub fn spouse_points(&self) -> Points {
        self.spouse_education_points
            .saturating_add(self.spouse_language_points)
            .saturating_add(self.spouse_work_points)
    }

    /// Sum of every subtotal before the total cap, saturating at `Points::MAX`.
    pub fn subtotal_sum(&self) -> Points {
        self.human_capital_points()
            .saturating_add(self.spouse_points())
            .saturating_add(self.skill_transferability_points)
            .saturating_add(self.additional_points)
    }

    pub fn is_complete(&self) -> bool {
        self.table_misses.is_empty()
    }
}
