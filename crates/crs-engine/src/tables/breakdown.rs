use std::fmt;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::range::ScoreRange;
use super::{read_csv_rows, read_rows_from_path, standard, TableLoadError};

pub type Points = u32;

/// Scoring factor a breakdown row belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Factor {
    Age,
    Education,
    FirstLanguage,
    SecondLanguage,
    CanadianWork,
    SpouseEducation,
    SpouseLanguage,
    SpouseWork,
    TransferabilityEducationLanguage,
    TransferabilityEducationWork,
    TransferabilityForeignLanguage,
    TransferabilityForeignWork,
    Additional,
}

impl Factor {
    pub const ALL: [Factor; 13] = [
        Factor::Age,
        Factor::Education,
        Factor::FirstLanguage,
        Factor::SecondLanguage,
        Factor::CanadianWork,
        Factor::SpouseEducation,
        Factor::SpouseLanguage,
        Factor::SpouseWork,
        Factor::TransferabilityEducationLanguage,
        Factor::TransferabilityEducationWork,
        Factor::TransferabilityForeignLanguage,
        Factor::TransferabilityForeignWork,
        Factor::Additional,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Factor::Age => "age",
            Factor::Education => "education",
            Factor::FirstLanguage => "first_language",
            Factor::SecondLanguage => "second_language",
            Factor::CanadianWork => "canadian_work",
            Factor::SpouseEducation => "spouse_education",
            Factor::SpouseLanguage => "spouse_language",
            Factor::SpouseWork => "spouse_work",
            Factor::TransferabilityEducationLanguage => "transferability_education_language",
            Factor::TransferabilityEducationWork => "transferability_education_work",
            Factor::TransferabilityForeignLanguage => "transferability_foreign_language",
            Factor::TransferabilityForeignWork => "transferability_foreign_work",
            Factor::Additional => "additional",
        }
    }

    /// Numeric factors bracket by range (age, CLB level, years); the rest by label.
    pub const fn is_numeric(self) -> bool {
        matches!(
            self,
            Factor::Age
                | Factor::FirstLanguage
                | Factor::SecondLanguage
                | Factor::CanadianWork
                | Factor::SpouseLanguage
                | Factor::SpouseWork
        )
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the points table as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownRow {
    pub factor: Factor,
    pub bracket: String,
    pub points_with_spouse: Points,
    pub points_no_spouse: Points,
}

/// A lookup that matched no row, signalling reference data drift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("no {factor} row matches bracket '{bracket}'")]
pub struct TableMiss {
    pub factor: Factor,
    pub bracket: String,
}

#[derive(Debug, Clone)]
enum Bracket {
    Range(ScoreRange),
    Label(String),
}

#[derive(Debug, Clone)]
struct ParsedRow {
    factor: Factor,
    bracket: Bracket,
    with_spouse: Points,
    no_spouse: Points,
}

impl ParsedRow {
    fn column(&self, accompanied: bool) -> Points {
        if accompanied {
            self.with_spouse
        } else {
            self.no_spouse
        }
    }
}

/// Factor/bracket to points mapping, with separate columns for applicants with and without an
/// accompanying spouse.
#[derive(Debug, Clone)]
pub struct BreakdownTable {
    rows: Vec<BreakdownRow>,
    parsed: Vec<ParsedRow>,
}

impl BreakdownTable {
    pub fn new(rows: Vec<BreakdownRow>) -> Result<Self, TableLoadError> {
        let parsed = rows
            .iter()
            .map(parse_row)
            .collect::<Result<Vec<_>, TableLoadError>>()?;

        Ok(Self { rows, parsed })
    }

    /// The currently published rubric (arranged employment weighted at zero since March 25, 2025).
    pub fn standard() -> Self {
        let rows = standard::breakdown_rows();
        let parsed = rows.iter().filter_map(|row| parse_row(row).ok()).collect();
        Self { rows, parsed }
    }

    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, TableLoadError> {
        Self::new(read_csv_rows(reader)?)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, TableLoadError> {
        Self::new(serde_json::from_str(raw)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, TableLoadError> {
        Self::new(read_rows_from_path(path.as_ref())?)
    }

    pub fn rows(&self) -> &[BreakdownRow] {
        &self.rows
    }

    /// Points for a numeric bracket (age, CLB level, years of experience).
    pub fn points(
        &self,
        factor: Factor,
        value: u32,
        accompanied: bool,
    ) -> Result<Points, TableMiss> {
        let value = f64::from(value);
        self.parsed
            .iter()
            .filter(|row| row.factor == factor)
            .find(|row| matches!(&row.bracket, Bracket::Range(range) if range.contains(value)))
            .map(|row| row.column(accompanied))
            .ok_or_else(|| TableMiss {
                factor,
                bracket: value.to_string(),
            })
    }

    /// Points for a labelled bracket (education tier, combination label, bonus label).
    pub fn points_for_label(
        &self,
        factor: Factor,
        label: &str,
        accompanied: bool,
    ) -> Result<Points, TableMiss> {
        let wanted = normalize_label(label);
        self.parsed
            .iter()
            .filter(|row| row.factor == factor)
            .find(|row| matches!(&row.bracket, Bracket::Label(known) if *known == wanted))
            .map(|row| row.column(accompanied))
            .ok_or_else(|| TableMiss {
                factor,
                bracket: label.to_string(),
            })
    }
}

impl Default for BreakdownTable {
    fn default() -> Self {
        Self::standard()
    }
}

fn parse_row(row: &BreakdownRow) -> Result<ParsedRow, TableLoadError> {
    let bracket = if row.factor.is_numeric() {
        Bracket::Range(ScoreRange::parse(&row.bracket)?)
    } else {
        Bracket::Label(normalize_label(&row.bracket))
    };

    Ok(ParsedRow {
        factor: row.factor,
        bracket,
        with_spouse: row.points_with_spouse,
        no_spouse: row.points_no_spouse,
    })
}

fn normalize_label(label: &str) -> String {
    label.trim().to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn numeric_lookup_selects_spouse_column() {
        let table = BreakdownTable::standard();
        assert_eq!(table.points(Factor::Age, 29, false), Ok(110));
        assert_eq!(table.points(Factor::Age, 29, true), Ok(100));
        assert_eq!(table.points(Factor::Age, 45, false), Ok(0));
        assert_eq!(table.points(Factor::Age, 61, true), Ok(0));
    }

    #[test]
    fn label_lookup_is_case_insensitive() {
        let table = BreakdownTable::standard();
        assert_eq!(
            table.points_for_label(Factor::Education, " Bachelors ", false),
            Ok(120)
        );
    }

    #[test]
    fn missing_bracket_is_distinguishable() {
        let csv = "factor,bracket,points_with_spouse,points_no_spouse\nage,20-29,100,110\n";
        let table = BreakdownTable::from_csv_reader(Cursor::new(csv)).expect("table loads");

        let miss = table
            .points(Factor::Age, 31, false)
            .expect_err("31 is not covered");
        assert_eq!(
            miss,
            TableMiss {
                factor: Factor::Age,
                bracket: "31".to_string(),
            }
        );
        assert_eq!(miss.to_string(), "no age row matches bracket '31'");
    }

    #[test]
    fn numeric_factor_rejects_label_bracket() {
        let csv = "factor,bracket,points_with_spouse,points_no_spouse\ncanadian_work,five,70,80\n";
        let error = BreakdownTable::from_csv_reader(Cursor::new(csv)).expect_err("bad bracket");
        assert!(matches!(error, TableLoadError::InvalidRange { .. }));
    }

    #[test]
    fn unknown_factor_fails_to_load() {
        let csv = "factor,bracket,points_with_spouse,points_no_spouse\nlmia_bonus,yes,50,50\n";
        let error = BreakdownTable::from_csv_reader(Cursor::new(csv)).expect_err("bad factor");
        assert!(matches!(error, TableLoadError::Csv(_)));
    }

    #[test]
    fn standard_table_covers_every_factor() {
        let table = BreakdownTable::standard();
        assert_eq!(table.rows().len(), table.parsed.len());
        for factor in Factor::ALL {
            assert!(
                table.rows().iter().any(|row| row.factor == factor),
                "missing rows for {factor}"
            );
        }
    }
}
