//! Form-boundary checks that keep out-of-domain scores away from conversion.

use super::convert::parse_score;
use super::domain::{LanguageSkill, LanguageTest, RawScores};

const CELPIP_TOKENS: [&str; 3] = ["M", "3-", "10+"];

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScoreValidationError {
    #[error("{test} {skill} score '{raw}' is not a number")]
    NotNumeric {
        test: LanguageTest,
        skill: LanguageSkill,
        raw: String,
    },
    #[error("{test} {skill} score {score} is outside {min}-{max}")]
    OutOfRange {
        test: LanguageTest,
        skill: LanguageSkill,
        score: f64,
        min: f64,
        max: f64,
    },
    #[error("{test} {skill} score {score} is not a multiple of {step}")]
    OffStep {
        test: LanguageTest,
        skill: LanguageSkill,
        score: f64,
        step: f64,
    },
}

/// Valid domain of one skill score: inclusive bounds and step granularity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreDomain {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl ScoreDomain {
    const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    fn on_step(&self, score: f64) -> bool {
        let steps = (score - self.min) / self.step;
        (steps - steps.round()).abs() < 1e-9
    }
}

pub fn score_domain(test: LanguageTest, skill: LanguageSkill) -> ScoreDomain {
    match (test, skill) {
        (LanguageTest::IeltsGeneral, _) => ScoreDomain::new(0.0, 9.0, 0.5),
        (LanguageTest::CelpipGeneral, _) => ScoreDomain::new(0.0, 12.0, 1.0),
        (LanguageTest::PteCore, _) => ScoreDomain::new(10.0, 90.0, 1.0),
        (LanguageTest::TefCanada, _) => ScoreDomain::new(0.0, 699.0, 1.0),
        (LanguageTest::TcfCanada, LanguageSkill::Listening | LanguageSkill::Reading) => {
            ScoreDomain::new(0.0, 699.0, 1.0)
        }
        (LanguageTest::TcfCanada, LanguageSkill::Writing | LanguageSkill::Speaking) => {
            ScoreDomain::new(0.0, 20.0, 1.0)
        }
    }
}

/// Checks one raw score against its test's domain.
///
/// CELPIP boundary tokens are accepted as-is and report `None`; everything else reports the
/// parsed score.
pub fn validate_raw_score(
    test: LanguageTest,
    skill: LanguageSkill,
    raw: &str,
) -> Result<Option<f64>, ScoreValidationError> {
    let trimmed = raw.trim();
    if test == LanguageTest::CelpipGeneral
        && CELPIP_TOKENS
            .iter()
            .any(|token| token.eq_ignore_ascii_case(trimmed))
    {
        return Ok(None);
    }

    let score = parse_score(trimmed).ok_or_else(|| ScoreValidationError::NotNumeric {
        test,
        skill,
        raw: raw.to_string(),
    })?;

    let domain = score_domain(test, skill);
    if score < domain.min || score > domain.max {
        return Err(ScoreValidationError::OutOfRange {
            test,
            skill,
            score,
            min: domain.min,
            max: domain.max,
        });
    }

    if !domain.on_step(score) {
        return Err(ScoreValidationError::OffStep {
            test,
            skill,
            score,
            step: domain.step,
        });
    }

    Ok(Some(score))
}

/// Validates all four skills, reporting the first rejection.
pub fn validate_raw_scores(
    test: LanguageTest,
    raw: &RawScores,
) -> Result<(), ScoreValidationError> {
    for (skill, score) in raw.iter() {
        validate_raw_score(test, skill, score)?;
    }
    Ok(())
}
