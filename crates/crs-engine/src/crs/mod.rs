//! Comprehensive Ranking System scoring.

mod breakdown;
mod domain;
mod policy;
mod rules;

#[cfg(test)]
mod tests;

pub use breakdown::{ScoreBreakdown, ScoreComponent};
pub use domain::{
    ApplicantProfile, ArrangedEmployment, CanadianEducation, EducationLevel, ForeignWork,
    LanguageResult, MaritalStatus, SpouseProfile,
};
pub use policy::{ClbBasis, ScoringPolicy};

use crate::tables::BreakdownTable;

/// Stateless calculator that applies a breakdown table and policy to a profile.
#[derive(Debug, Clone)]
pub struct CrsCalculator {
    table: BreakdownTable,
    policy: ScoringPolicy,
}

impl CrsCalculator {
    pub fn new(table: BreakdownTable, policy: ScoringPolicy) -> Self {
        Self { table, policy }
    }

    pub fn table(&self) -> &BreakdownTable {
        &self.table
    }

    pub fn calculate(&self, profile: &ApplicantProfile) -> ScoreBreakdown {
        rules::score_profile(profile, &self.table, &self.policy)
    }
}

impl Default for CrsCalculator {
    fn default() -> Self {
        Self::new(BreakdownTable::standard(), ScoringPolicy::default())
    }
}

/// Scores `profile` against `table` with the default caps.
pub fn calculate_crs(profile: &ApplicantProfile, table: &BreakdownTable) -> ScoreBreakdown {
    rules::score_profile(profile, table, &ScoringPolicy::default())
}
