mod additional;
mod human_capital;
mod spouse;
mod transferability;

use tracing::{debug, warn};

use super::breakdown::{ScoreBreakdown, ScoreComponent};
use super::domain::ApplicantProfile;
use super::policy::ScoringPolicy;
use crate::language::ClbScores;
use crate::tables::{BreakdownTable, Factor, Points, TableMiss};

/// Lookup context shared by the rule groups; collects the audit trail as it goes.
pub(crate) struct Ledger<'a> {
    table: &'a BreakdownTable,
    accompanied: bool,
    components: Vec<ScoreComponent>,
    misses: Vec<TableMiss>,
}

impl<'a> Ledger<'a> {
    fn new(table: &'a BreakdownTable, accompanied: bool) -> Self {
        Self {
            table,
            accompanied,
            components: Vec::new(),
            misses: Vec::new(),
        }
    }

    /// Numeric bracket lookup using the applicant's spouse column.
    pub(crate) fn numeric(&mut self, factor: Factor, value: u32, notes: String) -> Points {
        let result = self.table.points(factor, value, self.accompanied);
        self.record(factor, result, notes)
    }

    /// Numeric bracket lookup pinned to one column (spouse factors always read "with spouse").
    pub(crate) fn numeric_in(
        &mut self,
        factor: Factor,
        value: u32,
        accompanied: bool,
        notes: String,
    ) -> Points {
        let result = self.table.points(factor, value, accompanied);
        self.record(factor, result, notes)
    }

    pub(crate) fn label(&mut self, factor: Factor, label: &str, notes: String) -> Points {
        let result = self.table.points_for_label(factor, label, self.accompanied);
        self.record(factor, result, notes)
    }

    pub(crate) fn label_in(
        &mut self,
        factor: Factor,
        label: &str,
        accompanied: bool,
        notes: String,
    ) -> Points {
        let result = self.table.points_for_label(factor, label, accompanied);
        self.record(factor, result, notes)
    }

    /// Sum of per-skill lookups; skills that did not convert contribute nothing.
    pub(crate) fn per_skill(
        &mut self,
        factor: Factor,
        clb: &ClbScores,
        accompanied: bool,
    ) -> Points {
        clb.iter()
            .filter_map(|(skill, level)| level.map(|level| (skill, level)))
            .fold(0, |sum: Points, (skill, level)| {
                let points = self.numeric_in(
                    factor,
                    u32::from(level.value()),
                    accompanied,
                    format!("{skill} at {level}"),
                );
                sum.saturating_add(points)
            })
    }

    /// Position of the next component; everything recorded after it can be capped as a group.
    pub(crate) fn mark(&self) -> usize {
        self.components.len()
    }

    /// Sum of the components recorded since `since`, limited to `cap`.
    ///
    /// When the cap bites, those components are folded into a single entry worth `cap` so the
    /// audit trail still adds up to the subtotal.
    pub(crate) fn cap(&mut self, since: usize, factor: Factor, group: &str, cap: Points) -> Points {
        let points = sum_points(&self.components[since..]);
        if points <= cap {
            return points;
        }

        let folded: Vec<String> = self
            .components
            .drain(since..)
            .map(|component| format!("{} ({})", component.notes, component.points))
            .collect();
        self.components.push(ScoreComponent {
            factor,
            points: cap,
            notes: format!("{group} capped at {cap} from {points}: {}", folded.join(", ")),
        });
        cap
    }

    fn record(
        &mut self,
        factor: Factor,
        result: Result<Points, TableMiss>,
        notes: String,
    ) -> Points {
        match result {
            Ok(points) => {
                self.components.push(ScoreComponent {
                    factor,
                    points,
                    notes,
                });
                points
            }
            Err(miss) => {
                warn!(%miss, "breakdown table has no matching row; factor scores zero");
                self.misses.push(miss);
                0
            }
        }
    }
}

pub(crate) fn score_profile(
    profile: &ApplicantProfile,
    table: &BreakdownTable,
    policy: &ScoringPolicy,
) -> ScoreBreakdown {
    let spouse = profile.accompanying_spouse();
    let mut ledger = Ledger::new(table, spouse.is_some());

    let human_capital = human_capital::score(profile, policy, &mut ledger);
    let spouse_factors = spouse
        .map(|spouse| spouse::score(spouse, policy, &mut ledger))
        .unwrap_or_default();
    let skill_transferability_points = transferability::score(profile, policy, &mut ledger);
    let additional_points = additional::score(profile, policy, &mut ledger);

    let mut breakdown = ScoreBreakdown {
        age_points: human_capital.age,
        education_points: human_capital.education,
        language_points: human_capital.first_language,
        second_language_points: human_capital.second_language,
        canadian_work_points: human_capital.canadian_work,
        spouse_education_points: spouse_factors.education,
        spouse_language_points: spouse_factors.language,
        spouse_work_points: spouse_factors.canadian_work,
        skill_transferability_points,
        additional_points,
        total: 0,
        components: ledger.components,
        table_misses: ledger.misses,
    };
    breakdown.total = breakdown.subtotal_sum().min(policy.total_cap);

    debug!(
        total = breakdown.total,
        components = breakdown.components.len(),
        misses = breakdown.table_misses.len(),
        "calculated CRS breakdown"
    );
    breakdown
}

fn sum_points(components: &[ScoreComponent]) -> Points {
    components
        .iter()
        .fold(0, |sum: Points, component| sum.saturating_add(component.points))
}
