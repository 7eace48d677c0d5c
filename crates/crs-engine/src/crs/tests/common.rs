use crate::crs::domain::{
    ApplicantProfile, ArrangedEmployment, CanadianEducation, EducationLevel, LanguageResult,
    MaritalStatus, SpouseProfile,
};
use crate::crs::{CrsCalculator, ScoreBreakdown};
use crate::language::{ClbScores, LanguageTest};
use crate::tables::{BreakdownTable, Factor};

pub(super) fn calculator() -> CrsCalculator {
    CrsCalculator::default()
}

pub(super) fn score(profile: &ApplicantProfile) -> ScoreBreakdown {
    calculator().calculate(profile)
}

pub(super) fn ielts(listening: u8, reading: u8, writing: u8, speaking: u8) -> LanguageResult {
    LanguageResult::new(
        LanguageTest::IeltsGeneral,
        ClbScores::from_levels(listening, reading, writing, speaking),
    )
}

pub(super) fn tef(level: u8) -> LanguageResult {
    LanguageResult::new(
        LanguageTest::TefCanada,
        ClbScores::from_levels(level, level, level, level),
    )
}

/// Age 29, bachelor's, IELTS 8.5/7.0/7.0/7.5 (CLB 10/9/9/10), no spouse.
pub(super) fn single_applicant() -> ApplicantProfile {
    ApplicantProfile {
        age: 29,
        marital_status: MaritalStatus::Single,
        spouse_accompanying: false,
        education: EducationLevel::Bachelors,
        canadian_work_years: 0,
        foreign_work_years: 0,
        first_language: ielts(10, 9, 9, 10),
        second_language: None,
        certificate_of_qualification: false,
        sibling_in_canada: false,
        provincial_nomination: false,
        arranged_employment: ArrangedEmployment::None,
        canadian_education: CanadianEducation::None,
        lmia_job_offer: false,
        spouse: None,
    }
}

pub(super) fn bachelor_spouse_at_clb7() -> SpouseProfile {
    SpouseProfile {
        education: EducationLevel::Bachelors,
        first_language: ClbScores::from_levels(7, 7, 7, 7),
        canadian_work_years: 0,
    }
}

/// The single applicant, married with an accompanying bachelor's spouse at CLB 7.
pub(super) fn married_applicant() -> ApplicantProfile {
    ApplicantProfile {
        marital_status: MaritalStatus::Married,
        spouse_accompanying: true,
        spouse: Some(bachelor_spouse_at_clb7()),
        ..single_applicant()
    }
}

/// Age 50, high school, CLB 4 everywhere.
pub(super) fn minimal_applicant() -> ApplicantProfile {
    ApplicantProfile {
        age: 50,
        education: EducationLevel::Secondary,
        first_language: ielts(4, 4, 4, 4),
        ..single_applicant()
    }
}

pub(super) fn points_for(breakdown: &ScoreBreakdown, factor: Factor) -> u32 {
    breakdown
        .components
        .iter()
        .filter(|component| component.factor == factor)
        .map(|component| component.points)
        .sum()
}

pub(super) fn table_without(factor: Factor, bracket: &str) -> BreakdownTable {
    let rows = BreakdownTable::standard()
        .rows()
        .iter()
        .filter(|row| !(row.factor == factor && row.bracket == bracket))
        .cloned()
        .collect();
    BreakdownTable::new(rows).expect("standard rows stay valid")
}
