use super::Ledger;
use crate::crs::domain::SpouseProfile;
use crate::crs::policy::ScoringPolicy;
use crate::tables::{Factor, Points};

#[derive(Default)]
pub(super) struct SpouseFactors {
    pub education: Points,
    pub language: Points,
    pub canadian_work: Points,
}

pub(super) fn score(
    spouse: &SpouseProfile,
    policy: &ScoringPolicy,
    ledger: &mut Ledger<'_>,
) -> SpouseFactors {
    let education = ledger.label_in(
        Factor::SpouseEducation,
        spouse.education.label(),
        true,
        format!("spouse education {}", spouse.education.label()),
    );

    let since = ledger.mark();
    ledger.per_skill(Factor::SpouseLanguage, &spouse.first_language, true);
    let language = ledger.cap(
        since,
        Factor::SpouseLanguage,
        "spouse language",
        policy.spouse_language_cap,
    );

    let canadian_work = ledger.numeric_in(
        Factor::SpouseWork,
        spouse.canadian_work_years,
        true,
        format!(
            "spouse {} year(s) Canadian work",
            spouse.canadian_work_years
        ),
    );

    SpouseFactors {
        education,
        language,
        canadian_work,
    }
}
