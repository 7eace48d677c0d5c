//! Express Entry scoring core.
//!
//! Raw language-test results are converted to Canadian Language Benchmark levels by
//! [`language`], and [`crs`] combines those levels with the rest of an applicant profile into
//! a Comprehensive Ranking System breakdown. Both are pure functions of their inputs; the
//! reference data they consume lives in [`tables`].

pub mod config;
pub mod crs;
pub mod error;
pub mod language;
pub mod tables;
pub mod telemetry;

pub use crs::{calculate_crs, ApplicantProfile, CrsCalculator, ScoreBreakdown, SpouseProfile};
pub use language::{convert_to_clb, ClbLevel, ClbScores, LanguageSkill, LanguageTest, RawScores};
pub use tables::{BenchmarkTable, BreakdownTable, Factor, TableMiss};
