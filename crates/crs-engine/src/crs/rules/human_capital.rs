use super::Ledger;
use crate::crs::domain::ApplicantProfile;
use crate::crs::policy::ScoringPolicy;
use crate::tables::{Factor, Points};

pub(super) struct HumanCapital {
    pub age: Points,
    pub education: Points,
    pub first_language: Points,
    pub second_language: Points,
    pub canadian_work: Points,
}

pub(super) fn score(
    profile: &ApplicantProfile,
    policy: &ScoringPolicy,
    ledger: &mut Ledger<'_>,
) -> HumanCapital {
    let accompanied = ledger.accompanied;

    let age = ledger.numeric(Factor::Age, profile.age, format!("age {}", profile.age));
    let education = ledger.label(
        Factor::Education,
        profile.education.label(),
        format!("education {}", profile.education.label()),
    );

    let first_language = ledger.per_skill(
        Factor::FirstLanguage,
        &profile.first_language.clb,
        accompanied,
    );

    let second_language = match &profile.second_language {
        Some(result) => {
            // Per-skill points do not depend on spouse status; only the cap does.
            let since = ledger.mark();
            ledger.per_skill(Factor::SecondLanguage, &result.clb, accompanied);
            ledger.cap(
                since,
                Factor::SecondLanguage,
                "second official language",
                policy.second_language_cap(accompanied),
            )
        }
        None => 0,
    };

    let canadian_work = ledger.numeric(
        Factor::CanadianWork,
        profile.canadian_work_years,
        format!("{} year(s) Canadian work", profile.canadian_work_years),
    );

    HumanCapital {
        age,
        education,
        first_language,
        second_language,
        canadian_work,
    }
}
