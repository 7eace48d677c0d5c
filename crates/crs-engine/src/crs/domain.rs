use serde::{Deserialize, Serialize};

use crate::language::{ClbScores, LanguageTest, OfficialLanguage};

/// Highest completed credential, in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationLevel {
    LessThanSecondary,
    Secondary,
    OneYearPostSecondary,
    TwoYearPostSecondary,
    Bachelors,
    TwoOrMoreCredentials,
    Masters,
    ProfessionalDegree,
    Doctoral,
}

impl EducationLevel {
    /// Bracket label used by the education rows of the breakdown table.
    pub const fn label(self) -> &'static str {
        match self {
            EducationLevel::LessThanSecondary => "less_than_secondary",
            EducationLevel::Secondary => "secondary",
            EducationLevel::OneYearPostSecondary => "one_year_post_secondary",
            EducationLevel::TwoYearPostSecondary => "two_year_post_secondary",
            EducationLevel::Bachelors => "bachelors",
            EducationLevel::TwoOrMoreCredentials => "two_or_more_credentials",
            EducationLevel::Masters => "masters",
            EducationLevel::ProfessionalDegree => "professional_degree",
            EducationLevel::Doctoral => "doctoral",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaritalStatus {
    #[default]
    Single,
    Married,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArrangedEmployment {
    #[default]
    None,
    Noc00,
    Noc0AB,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanadianEducation {
    #[default]
    None,
    OneOrTwoYears,
    ThreeOrMoreYears,
}

/// Foreign skilled work experience as the rubric buckets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForeignWork {
    None,
    OneToTwoYears,
    ThreeOrMoreYears,
}

impl ForeignWork {
    pub const fn from_years(years: u32) -> Self {
        match years {
            0 => ForeignWork::None,
            1 | 2 => ForeignWork::OneToTwoYears,
            _ => ForeignWork::ThreeOrMoreYears,
        }
    }
}

/// CLB levels from one official-language test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageResult {
    pub test: LanguageTest,
    pub clb: ClbScores,
}

impl LanguageResult {
    pub fn new(test: LanguageTest, clb: ClbScores) -> Self {
        Self { test, clb }
    }

    pub fn language(&self) -> OfficialLanguage {
        self.test.language()
    }
}

/// Accompanying spouse or common-law partner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpouseProfile {
    pub education: EducationLevel,
    pub first_language: ClbScores,
    #[serde(default)]
    pub canadian_work_years: u32,
}

/// Principal applicant attributes collected by the calculator form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicantProfile {
    pub age: u32,
    #[serde(default)]
    pub marital_status: MaritalStatus,
    #[serde(default)]
    pub spouse_accompanying: bool,
    pub education: EducationLevel,
    #[serde(default)]
    pub canadian_work_years: u32,
    #[serde(default)]
    pub foreign_work_years: u32,
    pub first_language: LanguageResult,
    #[serde(default)]
    pub second_language: Option<LanguageResult>,
    #[serde(default)]
    pub certificate_of_qualification: bool,
    #[serde(default)]
    pub sibling_in_canada: bool,
    #[serde(default)]
    pub provincial_nomination: bool,
    #[serde(default)]
    pub arranged_employment: ArrangedEmployment,
    #[serde(default)]
    pub canadian_education: CanadianEducation,
    /// Still collected; worth zero points under the current rules.
    #[serde(default)]
    pub lmia_job_offer: bool,
    #[serde(default)]
    pub spouse: Option<SpouseProfile>,
}

impl ApplicantProfile {
    /// The spouse whose factors count, if any.
    ///
    /// A spouse is scored only when the applicant is married, the spouse is accompanying, and
    /// a spouse profile was supplied.
    pub fn accompanying_spouse(&self) -> Option<&SpouseProfile> {
        match self.marital_status {
            MaritalStatus::Married if self.spouse_accompanying => self.spouse.as_ref(),
            _ => None,
        }
    }

    pub fn foreign_work(&self) -> ForeignWork {
        ForeignWork::from_years(self.foreign_work_years)
    }

    /// The tested French result and the tested English result, in that order.
    pub(crate) fn french_and_english(&self) -> (Option<&LanguageResult>, Option<&LanguageResult>) {
        let mut french = None;
        let mut english = None;
        for result in std::iter::once(&self.first_language).chain(self.second_language.as_ref()) {
            match result.language() {
                OfficialLanguage::French if french.is_none() => french = Some(result),
                OfficialLanguage::English if english.is_none() => english = Some(result),
                _ => {}
            }
        }
        (french, english)
    }
}
