//! Skill transferability: pairs of factors that only earn points together.
//!
//! A pair is looked up only when both halves clear their threshold; otherwise it scores zero
//! without consulting the table. Each group cap folds the pairs it limits into one component.

use super::Ledger;
use crate::crs::domain::{ApplicantProfile, EducationLevel, ForeignWork};
use crate::crs::policy::{ClbBasis, ScoringPolicy};
use crate::language::ClbScores;
use crate::tables::{Factor, Points};

pub(super) fn score(
    profile: &ApplicantProfile,
    policy: &ScoringPolicy,
    ledger: &mut Ledger<'_>,
) -> Points {
    let education = education_tier(profile.education);
    let language = language_tier(
        &profile.first_language.clb,
        policy.transferability_language_basis,
    );
    let canadian_work = canadian_work_tier(profile.canadian_work_years);
    let foreign_work = foreign_work_tier(profile.foreign_work());

    let start = ledger.mark();
    pair(ledger, Factor::TransferabilityEducationLanguage, education, language);
    pair(ledger, Factor::TransferabilityEducationWork, education, canadian_work);
    ledger.cap(
        start,
        Factor::TransferabilityEducationLanguage,
        "education combinations",
        policy.education_combination_cap,
    );

    let foreign_start = ledger.mark();
    pair(ledger, Factor::TransferabilityForeignLanguage, foreign_work, language);
    pair(ledger, Factor::TransferabilityForeignWork, foreign_work, canadian_work);
    ledger.cap(
        foreign_start,
        Factor::TransferabilityForeignLanguage,
        "foreign work combinations",
        policy.foreign_work_combination_cap,
    );

    ledger.cap(
        start,
        Factor::TransferabilityEducationLanguage,
        "skill transferability",
        policy.transferability_cap,
    )
}

fn pair(
    ledger: &mut Ledger<'_>,
    factor: Factor,
    left: Option<&'static str>,
    right: Option<&'static str>,
) {
    if let (Some(left), Some(right)) = (left, right) {
        let label = format!("{left}+{right}");
        let notes = format!("combination {label}");
        ledger.label(factor, &label, notes);
    }
}

fn education_tier(education: EducationLevel) -> Option<&'static str> {
    match education {
        EducationLevel::LessThanSecondary | EducationLevel::Secondary => None,
        EducationLevel::OneYearPostSecondary
        | EducationLevel::TwoYearPostSecondary
        | EducationLevel::Bachelors => Some("post_secondary"),
        EducationLevel::TwoOrMoreCredentials
        | EducationLevel::Masters
        | EducationLevel::ProfessionalDegree
        | EducationLevel::Doctoral => Some("advanced"),
    }
}

fn language_tier(clb: &ClbScores, basis: ClbBasis) -> Option<&'static str> {
    let level = match basis {
        ClbBasis::Average => clb.average(),
        ClbBasis::Minimum => f64::from(clb.minimum()),
    };

    if level >= 9.0 {
        Some("clb9")
    } else if level >= 7.0 {
        Some("clb7")
    } else {
        None
    }
}

fn canadian_work_tier(years: u32) -> Option<&'static str> {
    match years {
        0 => None,
        1 => Some("cdn1"),
        _ => Some("cdn2"),
    }
}

fn foreign_work_tier(foreign: ForeignWork) -> Option<&'static str> {
    match foreign {
        ForeignWork::None => None,
        ForeignWork::OneToTwoYears => Some("foreign1"),
        ForeignWork::ThreeOrMoreYears => Some("foreign3"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_tier_depends_on_basis() {
        let uneven = ClbScores::from_levels(10, 10, 10, 6);
        assert_eq!(language_tier(&uneven, ClbBasis::Average), Some("clb9"));
        assert_eq!(language_tier(&uneven, ClbBasis::Minimum), None);

        let even = ClbScores::from_levels(7, 7, 7, 7);
        assert_eq!(language_tier(&even, ClbBasis::Average), Some("clb7"));
        assert_eq!(language_tier(&even, ClbBasis::Minimum), Some("clb7"));
    }

    #[test]
    fn secondary_education_never_unlocks_a_pair() {
        assert_eq!(education_tier(EducationLevel::Secondary), None);
        assert_eq!(education_tier(EducationLevel::Bachelors), Some("post_secondary"));
        assert_eq!(education_tier(EducationLevel::Doctoral), Some("advanced"));
    }
}
