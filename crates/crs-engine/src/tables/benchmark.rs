use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::range::ScoreRange;
use super::{read_csv_rows, read_rows_from_path, standard, TableLoadError};
use crate::language::{ClbLevel, LanguageSkill, LanguageTest, SkillScores};

/// One row of the language benchmark table as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchmarkRow {
    pub test_name: String,
    pub clb_level: u8,
    #[serde(default)]
    pub listening: String,
    #[serde(default)]
    pub reading: String,
    #[serde(default)]
    pub writing: String,
    #[serde(default)]
    pub speaking: String,
}

#[derive(Debug, Clone)]
struct ParsedRow {
    test: Option<LanguageTest>,
    clb: ClbLevel,
    ranges: SkillScores<Option<ScoreRange>>,
}

/// Read-only mapping of (test, skill, score range) to CLB level.
#[derive(Debug, Clone)]
pub struct BenchmarkTable {
    rows: Vec<BenchmarkRow>,
    parsed: Vec<ParsedRow>,
}

impl BenchmarkTable {
    /// Builds a table, rejecting cells that are present but are not valid ranges.
    ///
    /// Rows naming an unknown test are kept but never match a lookup.
    pub fn new(rows: Vec<BenchmarkRow>) -> Result<Self, TableLoadError> {
        let parsed = rows
            .iter()
            .map(parse_row)
            .collect::<Result<Vec<_>, TableLoadError>>()?;

        Ok(Self { rows, parsed })
    }

    /// TEF Canada and TCF Canada equivalencies currently published by IRCC.
    pub fn standard() -> Self {
        let rows = standard::benchmark_rows();
        let parsed = rows.iter().filter_map(|row| parse_row(row).ok()).collect();
        Self { rows, parsed }
    }

    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, TableLoadError> {
        Self::new(read_csv_rows(reader)?)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, TableLoadError> {
        Self::new(serde_json::from_str(raw)?)
    }

    /// Loads a `.csv` or `.json` file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, TableLoadError> {
        Self::new(read_rows_from_path(path.as_ref())?)
    }

    pub fn rows(&self) -> &[BenchmarkRow] {
        &self.rows
    }

    pub fn covers(&self, test: LanguageTest) -> bool {
        self.parsed.iter().any(|row| row.test == Some(test))
    }

    /// First row for `test` whose `skill` range contains `score`.
    pub fn lookup(&self, test: LanguageTest, skill: LanguageSkill, score: f64) -> Option<ClbLevel> {
        self.parsed
            .iter()
            .filter(|row| row.test == Some(test))
            .find(|row| {
                row.ranges
                    .get(skill)
                    .map(|range| range.contains(score))
                    .unwrap_or(false)
            })
            .map(|row| row.clb)
    }
}

impl Default for BenchmarkTable {
    fn default() -> Self {
        Self::standard()
    }
}

fn parse_row(row: &BenchmarkRow) -> Result<ParsedRow, TableLoadError> {
    Ok(ParsedRow {
        test: row.test_name.parse().ok(),
        clb: ClbLevel::new(row.clb_level),
        ranges: SkillScores {
            listening: parse_cell(&row.listening)?,
            reading: parse_cell(&row.reading)?,
            writing: parse_cell(&row.writing)?,
            speaking: parse_cell(&row.speaking)?,
        },
    })
}

fn parse_cell(cell: &str) -> Result<Option<ScoreRange>, TableLoadError> {
    if cell.trim().is_empty() {
        return Ok(None);
    }
    ScoreRange::parse(cell).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const IELTS_CSV: &str = "test_name,clb_level,listening,reading,writing,speaking\n\
IELTS,10,8.5-9.0,8.0-9.0,7.5-9.0,7.5-9.0\n\
IELTS,9,8.0,7.0\u{2013}7.5,7.0,7.0\n\
IELTS,8,7.5,6.5,6.5,6.5\n";

    #[test]
    fn csv_rows_drive_general_lookup() {
        let table = BenchmarkTable::from_csv_reader(Cursor::new(IELTS_CSV)).expect("table loads");

        assert_eq!(table.rows().len(), 3);
        assert_eq!(
            table.lookup(LanguageTest::IeltsGeneral, LanguageSkill::Reading, 7.5),
            Some(ClbLevel::new(9))
        );
        assert_eq!(
            table.lookup(LanguageTest::IeltsGeneral, LanguageSkill::Listening, 8.0),
            Some(ClbLevel::new(9))
        );
        assert_eq!(
            table.lookup(LanguageTest::IeltsGeneral, LanguageSkill::Listening, 7.0),
            None
        );
    }

    #[test]
    fn lookup_ignores_other_tests() {
        let table = BenchmarkTable::from_csv_reader(Cursor::new(IELTS_CSV)).expect("table loads");
        assert_eq!(
            table.lookup(LanguageTest::PteCore, LanguageSkill::Reading, 8.0),
            None
        );
        assert!(!table.covers(LanguageTest::TefCanada));
    }

    #[test]
    fn invalid_range_cells_are_rejected() {
        let csv = "test_name,clb_level,listening,reading,writing,speaking\nTEF,7,abc,1,1,1\n";
        let error = BenchmarkTable::from_csv_reader(Cursor::new(csv)).expect_err("bad cell");
        assert!(matches!(error, TableLoadError::InvalidRange { .. }));
    }

    #[test]
    fn json_rows_are_accepted() {
        let json = r#"[{
            "test_name": "TCF",
            "clb_level": 7,
            "listening": "458-502",
            "reading": "453-498",
            "writing": "10-11",
            "speaking": "10-11"
        }]"#;
        let table = BenchmarkTable::from_json_str(json).expect("json table");
        assert_eq!(
            table.lookup(LanguageTest::TcfCanada, LanguageSkill::Writing, 11.0),
            Some(ClbLevel::new(7))
        );
    }

    #[test]
    fn standard_table_covers_french_tests() {
        let table = BenchmarkTable::standard();
        assert!(table.covers(LanguageTest::TefCanada));
        assert!(table.covers(LanguageTest::TcfCanada));
        assert_eq!(
            table.lookup(LanguageTest::TefCanada, LanguageSkill::Speaking, 456.0),
            Some(ClbLevel::new(7))
        );
    }

    #[test]
    fn unknown_extension_is_reported() {
        let error = BenchmarkTable::from_path("./benchmarks.xlsx").expect_err("unsupported");
        match error {
            TableLoadError::UnsupportedFormat { extension } => assert_eq!(extension, "xlsx"),
            other => panic!("expected unsupported format, got {other:?}"),
        }
    }
}
