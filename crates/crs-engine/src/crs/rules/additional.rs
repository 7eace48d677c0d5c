use super::Ledger;
use crate::crs::domain::{ApplicantProfile, ArrangedEmployment, CanadianEducation};
use crate::crs::policy::ScoringPolicy;
use crate::tables::{Factor, Points};

const FRENCH_THRESHOLD: u8 = 7;
const ENGLISH_BILINGUAL_THRESHOLD: u8 = 5;

pub(super) fn score(
    profile: &ApplicantProfile,
    policy: &ScoringPolicy,
    ledger: &mut Ledger<'_>,
) -> Points {
    let start = ledger.mark();

    if profile.provincial_nomination {
        bonus(ledger, "provincial_nomination");
    }

    if profile.sibling_in_canada {
        bonus(ledger, "sibling");
    }

    match profile.canadian_education {
        CanadianEducation::None => {}
        CanadianEducation::OneOrTwoYears => bonus(ledger, "canadian_education_short"),
        CanadianEducation::ThreeOrMoreYears => bonus(ledger, "canadian_education_long"),
    }

    if profile.certificate_of_qualification {
        bonus(ledger, "certificate_of_qualification");
    }

    if let Some(label) = french_bonus(profile) {
        bonus(ledger, label);
    }

    // Zero-weight under the current rules.
    match profile.arranged_employment {
        ArrangedEmployment::None => {}
        ArrangedEmployment::Noc00 => bonus(ledger, "arranged_employment_noc_00"),
        ArrangedEmployment::Noc0AB => bonus(ledger, "arranged_employment_noc_0ab"),
    }

    if profile.lmia_job_offer {
        bonus(ledger, "lmia_job_offer");
    }

    ledger.cap(start, Factor::Additional, "additional points", policy.additional_cap)
}

fn bonus(ledger: &mut Ledger<'_>, label: &str) {
    ledger.label(Factor::Additional, label, label.replace('_', " "));
}

fn french_bonus(profile: &ApplicantProfile) -> Option<&'static str> {
    let (french, english) = profile.french_and_english();
    let french = french?;
    if !french.clb.all_at_least(FRENCH_THRESHOLD) {
        return None;
    }

    let bilingual = english
        .map(|english| english.clb.all_at_least(ENGLISH_BILINGUAL_THRESHOLD))
        .unwrap_or(false);

    Some(if bilingual {
        "french_bilingual"
    } else {
        "french_only"
    })
}
