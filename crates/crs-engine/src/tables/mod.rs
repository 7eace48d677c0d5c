//! Reference data consumed by the scoring core.
//!
//! Both tables are supplied by the caller. Built-in copies of the currently published values
//! are available through `standard()` so a deployment without external files still scores.

mod benchmark;
mod breakdown;
mod range;
mod standard;

pub use benchmark::{BenchmarkRow, BenchmarkTable};
pub use breakdown::{BreakdownRow, BreakdownTable, Factor, Points, TableMiss};
pub use range::ScoreRange;

use serde::de::DeserializeOwned;
use std::io::Read;
use std::path::Path;

/// Failure to read or interpret an external reference table.
#[derive(Debug, thiserror::Error)]
pub enum TableLoadError {
    #[error("failed to read reference table: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid reference table CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid reference table JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("'{value}' is not a score range (expected N, N-M, N\u{2013}M or N+)")]
    InvalidRange { value: String },
    #[error("unsupported reference table format '{extension}' (expected .csv or .json)")]
    UnsupportedFormat { extension: String },
}

pub(crate) fn read_csv_rows<T, R>(reader: R) -> Result<Vec<T>, TableLoadError>
where
    T: DeserializeOwned,
    R: Read,
{
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut rows = Vec::new();

    for record in csv_reader.deserialize::<T>() {
        rows.push(record?);
    }

    Ok(rows)
}

pub(crate) fn read_rows_from_path<T: DeserializeOwned>(
    path: &Path,
) -> Result<Vec<T>, TableLoadError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();

    match extension.as_str() {
        "csv" => {
            let file = std::fs::File::open(path)?;
            read_csv_rows(file)
        }
        "json" => {
            let raw = std::fs::read_to_string(path)?;
            Ok(serde_json::from_str(&raw)?)
        }
        _ => Err(TableLoadError::UnsupportedFormat { extension }),
    }
}
