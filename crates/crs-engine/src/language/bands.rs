//! Fixed score bands for the tests whose CLB equivalencies are embedded rather than looked up.
//!
//! Every band is inclusive on its lower threshold: a score equal to a threshold belongs to the
//! higher level.

use super::domain::{ClbLevel, LanguageSkill, LanguageTest};

/// Descending (threshold, level) pairs with a floor for anything below the last threshold.
#[derive(Debug, Clone, Copy)]
pub struct Banding {
    pub thresholds: &'static [(f64, u8)],
    pub floor: u8,
}

impl Banding {
    pub fn level(&self, score: f64) -> ClbLevel {
        let level = self
            .thresholds
            .iter()
            .find(|(threshold, _)| score >= *threshold)
            .map(|(_, level)| *level)
            .unwrap_or(self.floor);
        ClbLevel::new(level)
    }
}

const IELTS_READING: Banding = Banding {
    thresholds: &[(8.0, 10), (7.0, 9), (6.5, 8), (6.0, 7), (5.0, 6)],
    floor: 4,
};

const IELTS_LISTENING: Banding = Banding {
    thresholds: &[(8.5, 10), (8.0, 9), (7.5, 8), (6.0, 7), (5.5, 6)],
    floor: 4,
};

const IELTS_PRODUCTIVE: Banding = Banding {
    thresholds: &[(7.5, 10), (7.0, 9), (6.5, 8), (6.0, 7), (5.5, 6)],
    floor: 4,
};

const PTE_READING: Banding = Banding {
    thresholds: &[(88.0, 10), (78.0, 9), (69.0, 8), (60.0, 7)],
    floor: 5,
};

const PTE_WRITING: Banding = Banding {
    thresholds: &[(90.0, 10), (88.0, 9), (79.0, 8), (69.0, 7)],
    floor: 5,
};

const PTE_LISTENING: Banding = Banding {
    thresholds: &[(89.0, 10), (82.0, 9), (71.0, 8), (60.0, 7)],
    floor: 5,
};

const PTE_SPEAKING: Banding = Banding {
    thresholds: &[(89.0, 10), (84.0, 9), (76.0, 8), (68.0, 7)],
    floor: 5,
};

const TEF_COMPOSITE: Banding = Banding {
    thresholds: &[(400.0, 10), (370.0, 9), (310.0, 7)],
    floor: 5,
};

/// Banding used for `test`/`skill`, or `None` when the test is table-driven.
pub fn banding_for(test: LanguageTest, skill: LanguageSkill) -> Option<Banding> {
    match (test, skill) {
        (LanguageTest::IeltsGeneral, LanguageSkill::Reading) => Some(IELTS_READING),
        (LanguageTest::IeltsGeneral, LanguageSkill::Listening) => Some(IELTS_LISTENING),
        (LanguageTest::IeltsGeneral, LanguageSkill::Writing | LanguageSkill::Speaking) => {
            Some(IELTS_PRODUCTIVE)
        }
        (LanguageTest::PteCore, LanguageSkill::Reading) => Some(PTE_READING),
        (LanguageTest::PteCore, LanguageSkill::Writing) => Some(PTE_WRITING),
        (LanguageTest::PteCore, LanguageSkill::Listening) => Some(PTE_LISTENING),
        (LanguageTest::PteCore, LanguageSkill::Speaking) => Some(PTE_SPEAKING),
        _ => None,
    }
}

/// CELPIP levels equal CLB levels; the top tokens collapse to 10 and the "M" and "3-"
/// markers carry no level.
pub fn celpip_level(raw: &str) -> Option<ClbLevel> {
    match raw.trim() {
        "10+" | "12" | "11" | "10" => Some(ClbLevel::new(10)),
        "M" | "m" | "3-" => Some(ClbLevel::new(0)),
        other => other.parse::<u8>().ok().map(ClbLevel::new),
    }
}

/// Legacy single-table TEF composite banding.
pub fn tef_composite_to_clb(score: f64) -> ClbLevel {
    TEF_COMPOSITE.level(score)
}
