use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::TableLoadError;

const SEPARATORS: [char; 3] = ['\u{2013}', '\u{2014}', '-'];

/// Inclusive numeric interval parsed from a reference-table cell.
///
/// Accepted forms: a single value (`7.0`), an interval (`6.0–6.5` or `6.0-6.5`), or an
/// open-ended floor (`45+`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreRange {
    pub min: f64,
    pub max: f64,
}

impl ScoreRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub const fn single(value: f64) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    pub const fn at_least(min: f64) -> Self {
        Self {
            min,
            max: f64::INFINITY,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn parse(raw: &str) -> Result<Self, TableLoadError> {
        let invalid = || TableLoadError::InvalidRange {
            value: raw.to_string(),
        };

        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(invalid());
        }

        if let Some(floor) = trimmed.strip_suffix('+') {
            let min = parse_number(floor).ok_or_else(invalid)?;
            return Ok(Self::at_least(min));
        }

        // Skip the first character so a leading sign is never read as a separator.
        let split_at = trimmed
            .char_indices()
            .skip(1)
            .find(|(_, ch)| SEPARATORS.contains(ch));

        match split_at {
            Some((index, separator)) => {
                let (low, high) = trimmed.split_at(index);
                let high = &high[separator.len_utf8()..];
                let min = parse_number(low).ok_or_else(invalid)?;
                let max = parse_number(high).ok_or_else(invalid)?;
                if min > max {
                    return Err(invalid());
                }
                Ok(Self::new(min, max))
            }
            None => parse_number(trimmed).map(Self::single).ok_or_else(invalid),
        }
    }
}

impl FromStr for ScoreRange {
    type Err = TableLoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ScoreRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.max.is_infinite() {
            write!(f, "{}+", self.min)
        } else if self.min == self.max {
            write!(f, "{}", self.min)
        } else {
            write!(f, "{}\u{2013}{}", self.min, self.max)
        }
    }
}

fn parse_number(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
}
