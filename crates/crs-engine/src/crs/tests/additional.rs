use super::common::*;
use crate::crs::domain::{ArrangedEmployment, CanadianEducation};
use crate::crs::{CrsCalculator, ScoringPolicy};
use crate::tables::{BreakdownTable, Factor};

#[test]
fn provincial_nomination_dominates_a_minimal_profile() {
    let mut profile = minimal_applicant();
    profile.provincial_nomination = true;

    let breakdown = score(&profile);

    assert_eq!(breakdown.age_points, 0);
    assert_eq!(breakdown.education_points, 30);
    assert_eq!(breakdown.language_points, 24);
    assert_eq!(breakdown.skill_transferability_points, 0);
    assert_eq!(breakdown.additional_points, 600);
    assert_eq!(breakdown.total, 654);
}

#[test]
fn fixed_bonuses_accumulate() {
    let mut profile = single_applicant();
    profile.sibling_in_canada = true;
    profile.certificate_of_qualification = true;
    profile.canadian_education = CanadianEducation::OneOrTwoYears;

    assert_eq!(score(&profile).additional_points, 15 + 50 + 15);

    profile.canadian_education = CanadianEducation::ThreeOrMoreYears;
    assert_eq!(score(&profile).additional_points, 15 + 50 + 30);
}

#[test]
fn additional_points_are_capped_at_six_hundred() {
    let mut profile = single_applicant();
    profile.provincial_nomination = true;
    profile.sibling_in_canada = true;
    profile.certificate_of_qualification = true;

    let breakdown = score(&profile);

    assert_eq!(breakdown.additional_points, 600);
    assert_eq!(breakdown.total, 385 + 600);
}

#[test]
fn arranged_employment_is_looked_up_but_worth_nothing() {
    let mut profile = single_applicant();
    profile.arranged_employment = ArrangedEmployment::Noc00;
    profile.lmia_job_offer = true;

    let breakdown = score(&profile);

    assert_eq!(breakdown.additional_points, 0);
    assert!(breakdown.is_complete());
    let notes: Vec<&str> = breakdown
        .components
        .iter()
        .filter(|component| component.factor == Factor::Additional)
        .map(|component| component.notes.as_str())
        .collect();
    assert_eq!(notes, vec!["arranged employment noc 00", "lmia job offer"]);
}

#[test]
fn reinstated_arranged_employment_points_flow_from_the_table() {
    let rows = BreakdownTable::standard()
        .rows()
        .iter()
        .cloned()
        .map(|mut row| {
            if row.factor == Factor::Additional && row.bracket == "arranged_employment_noc_0ab" {
                row.points_with_spouse = 50;
                row.points_no_spouse = 50;
            }
            row
        })
        .collect();
    let calculator =
        CrsCalculator::new(BreakdownTable::new(rows).expect("valid"), ScoringPolicy::default());

    let mut profile = single_applicant();
    profile.arranged_employment = ArrangedEmployment::Noc0AB;

    assert_eq!(calculator.calculate(&profile).additional_points, 50);
}

#[test]
fn french_bonus_depends_on_english_level() {
    let mut french_only = single_applicant();
    french_only.first_language = tef(7);
    assert_eq!(score(&french_only).additional_points, 25);

    let mut bilingual = single_applicant();
    bilingual.second_language = Some(tef(8));
    assert_eq!(score(&bilingual).additional_points, 50);

    let mut weak_english = single_applicant();
    weak_english.first_language = tef(9);
    weak_english.second_language = Some(ielts(4, 5, 5, 5));
    assert_eq!(score(&weak_english).additional_points, 25);

    let mut weak_french = single_applicant();
    weak_french.second_language = Some(tef(6));
    assert_eq!(score(&weak_french).additional_points, 0);
}

#[test]
fn missing_bonus_row_is_reported() {
    let calculator = CrsCalculator::new(
        table_without(Factor::Additional, "sibling"),
        ScoringPolicy::default(),
    );
    let mut profile = single_applicant();
    profile.sibling_in_canada = true;

    let breakdown = calculator.calculate(&profile);

    assert_eq!(breakdown.additional_points, 0);
    assert_eq!(breakdown.table_misses.len(), 1);
    assert_eq!(breakdown.table_misses[0].bracket, "sibling");
}
