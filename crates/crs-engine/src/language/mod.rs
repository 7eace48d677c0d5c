//! Raw language-test scores to Canadian Language Benchmark levels.

pub mod bands;
mod convert;
mod domain;
mod validation;

pub use bands::{tef_composite_to_clb, Banding};
pub use convert::{convert_skill, convert_to_clb, lookup_in_table};
pub use domain::{
    ClbLevel, ClbScores, LanguageSkill, LanguageTest, OfficialLanguage, RawScores, SkillScores,
    UnknownLanguageTest,
};
pub use validation::{
    score_domain, validate_raw_score, validate_raw_scores, ScoreDomain, ScoreValidationError,
};
