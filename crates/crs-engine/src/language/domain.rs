use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Official language a test certifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OfficialLanguage {
    English,
    French,
}

/// Language tests accepted for Express Entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LanguageTest {
    IeltsGeneral,
    CelpipGeneral,
    PteCore,
    TefCanada,
    TcfCanada,
}

impl LanguageTest {
    pub const ALL: [LanguageTest; 5] = [
        LanguageTest::IeltsGeneral,
        LanguageTest::CelpipGeneral,
        LanguageTest::PteCore,
        LanguageTest::TefCanada,
        LanguageTest::TcfCanada,
    ];

    /// Name used in the `test_name` column of the benchmark table.
    pub const fn table_name(self) -> &'static str {
        match self {
            LanguageTest::IeltsGeneral => "IELTS",
            LanguageTest::CelpipGeneral => "CELPIP",
            LanguageTest::PteCore => "PTE",
            LanguageTest::TefCanada => "TEF",
            LanguageTest::TcfCanada => "TCF",
        }
    }

    pub const fn language(self) -> OfficialLanguage {
        match self {
            LanguageTest::IeltsGeneral | LanguageTest::CelpipGeneral | LanguageTest::PteCore => {
                OfficialLanguage::English
            }
            LanguageTest::TefCanada | LanguageTest::TcfCanada => OfficialLanguage::French,
        }
    }
}

impl fmt::Display for LanguageTest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown language test '{0}'")]
pub struct UnknownLanguageTest(pub String);

impl FromStr for LanguageTest {
    type Err = UnknownLanguageTest;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s
            .trim()
            .to_ascii_lowercase()
            .replace(['-', '_'], " ");
        let head = normalized.split_whitespace().next().unwrap_or_default();

        match head {
            "ielts" => Ok(LanguageTest::IeltsGeneral),
            "celpip" => Ok(LanguageTest::CelpipGeneral),
            "pte" => Ok(LanguageTest::PteCore),
            "tef" => Ok(LanguageTest::TefCanada),
            "tcf" => Ok(LanguageTest::TcfCanada),
            _ => Err(UnknownLanguageTest(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LanguageSkill {
    Listening,
    Reading,
    Writing,
    Speaking,
}

impl LanguageSkill {
    pub const ALL: [LanguageSkill; 4] = [
        LanguageSkill::Listening,
        LanguageSkill::Reading,
        LanguageSkill::Writing,
        LanguageSkill::Speaking,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            LanguageSkill::Listening => "listening",
            LanguageSkill::Reading => "reading",
            LanguageSkill::Writing => "writing",
            LanguageSkill::Speaking => "speaking",
        }
    }
}

impl fmt::Display for LanguageSkill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One value per language skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SkillScores<T> {
    pub listening: T,
    pub reading: T,
    pub writing: T,
    pub speaking: T,
}

impl<T> SkillScores<T> {
    pub fn uniform(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            listening: value.clone(),
            reading: value.clone(),
            writing: value.clone(),
            speaking: value,
        }
    }

    pub fn get(&self, skill: LanguageSkill) -> &T {
        match skill {
            LanguageSkill::Listening => &self.listening,
            LanguageSkill::Reading => &self.reading,
            LanguageSkill::Writing => &self.writing,
            LanguageSkill::Speaking => &self.speaking,
        }
    }

    pub fn get_mut(&mut self, skill: LanguageSkill) -> &mut T {
        match skill {
            LanguageSkill::Listening => &mut self.listening,
            LanguageSkill::Reading => &mut self.reading,
            LanguageSkill::Writing => &mut self.writing,
            LanguageSkill::Speaking => &mut self.speaking,
        }
    }

    pub fn map<U, F>(&self, mut f: F) -> SkillScores<U>
    where
        F: FnMut(LanguageSkill, &T) -> U,
    {
        SkillScores {
            listening: f(LanguageSkill::Listening, &self.listening),
            reading: f(LanguageSkill::Reading, &self.reading),
            writing: f(LanguageSkill::Writing, &self.writing),
            speaking: f(LanguageSkill::Speaking, &self.speaking),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (LanguageSkill, &T)> {
        LanguageSkill::ALL
            .into_iter()
            .map(move |skill| (skill, self.get(skill)))
    }
}

/// Raw, unvalidated scores as entered on a form.
pub type RawScores = SkillScores<String>;

/// Canadian Language Benchmark level (NCLC for French tests).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClbLevel(u8);

impl ClbLevel {
    pub const fn new(level: u8) -> Self {
        Self(level)
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for ClbLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CLB {}", self.0)
    }
}

/// Conversion output: `None` where a skill could not be converted.
pub type ClbScores = SkillScores<Option<ClbLevel>>;

impl SkillScores<Option<ClbLevel>> {
    pub fn from_levels(listening: u8, reading: u8, writing: u8, speaking: u8) -> Self {
        Self {
            listening: Some(ClbLevel::new(listening)),
            reading: Some(ClbLevel::new(reading)),
            writing: Some(ClbLevel::new(writing)),
            speaking: Some(ClbLevel::new(speaking)),
        }
    }

    /// Level per skill with unconvertible skills counted as 0.
    pub fn levels(&self) -> SkillScores<u8> {
        self.map(|_, level| level.map(ClbLevel::value).unwrap_or(0))
    }

    pub fn minimum(&self) -> u8 {
        self.levels().iter().map(|(_, level)| *level).min().unwrap_or(0)
    }

    pub fn average(&self) -> f64 {
        let levels = self.levels();
        let sum: u32 = levels.iter().map(|(_, level)| u32::from(*level)).sum();
        f64::from(sum) / 4.0
    }

    /// True when every skill converted and reached at least `level`.
    pub fn all_at_least(&self, level: u8) -> bool {
        self.iter()
            .all(|(_, clb)| clb.map(|clb| clb.value() >= level).unwrap_or(false))
    }
}
