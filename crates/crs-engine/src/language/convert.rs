use tracing::debug;

use super::bands::{banding_for, celpip_level};
use super::domain::{ClbLevel, ClbScores, LanguageSkill, LanguageTest, RawScores};
use crate::tables::BenchmarkTable;

/// Converts four raw skill scores to CLB levels.
///
/// Skills convert independently: an unparsable or unmatched score yields `None` for that skill
/// without affecting the others.
pub fn convert_to_clb(
    benchmark: &BenchmarkTable,
    raw: &RawScores,
    test: LanguageTest,
) -> ClbScores {
    raw.map(|skill, score| convert_skill(benchmark, test, skill, score))
}

pub fn convert_skill(
    benchmark: &BenchmarkTable,
    test: LanguageTest,
    skill: LanguageSkill,
    raw: &str,
) -> Option<ClbLevel> {
    let level = match test {
        LanguageTest::CelpipGeneral => celpip_level(raw),
        _ => parse_score(raw).and_then(|score| match banding_for(test, skill) {
            Some(banding) => Some(banding.level(score)),
            None => benchmark.lookup(test, skill, score),
        }),
    };

    if level.is_none() {
        debug!(%test, %skill, raw, "score did not convert to a CLB level");
    }

    level
}

/// The table-driven path for any test type, bypassing the embedded bands.
pub fn lookup_in_table(
    benchmark: &BenchmarkTable,
    test: LanguageTest,
    skill: LanguageSkill,
    raw: &str,
) -> Option<ClbLevel> {
    parse_score(raw).and_then(|score| benchmark.lookup(test, skill, score))
}

pub(crate) fn parse_score(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|score| score.is_finite())
}
