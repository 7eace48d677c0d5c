use clap::Args;
use crs_engine::config::TablesConfig;
use crs_engine::error::AppError;
use crs_engine::language::validate_raw_scores;
use crs_engine::{
    convert_to_clb, ApplicantProfile, BenchmarkTable, ClbScores, LanguageTest, RawScores,
    ScoreBreakdown,
};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Applicant profile as JSON
    #[arg(long)]
    pub(crate) profile: PathBuf,
    /// CSV or JSON breakdown table replacing the built-in points
    #[arg(long)]
    pub(crate) breakdown_table: Option<PathBuf>,
    /// Print the full breakdown as JSON instead of a summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ConvertArgs {
    /// Test name, e.g. ielts, celpip, pte, tef, tcf
    #[arg(long)]
    pub(crate) test: String,
    #[arg(long)]
    pub(crate) listening: String,
    #[arg(long)]
    pub(crate) reading: String,
    #[arg(long)]
    pub(crate) writing: String,
    #[arg(long)]
    pub(crate) speaking: String,
    /// CSV or JSON benchmark table replacing the built-in TEF/TCF equivalencies
    #[arg(long)]
    pub(crate) benchmark_table: Option<PathBuf>,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        profile,
        breakdown_table,
        json,
    } = args;

    let raw = std::fs::read_to_string(&profile)?;
    let profile: ApplicantProfile = serde_json::from_str(&raw)?;
    let tables = TablesConfig {
        benchmark_path: None,
        breakdown_path: breakdown_table,
    };
    let breakdown = tables.calculator()?.calculate(&profile);

    if json {
        println!("{}", serde_json::to_string_pretty(&breakdown)?);
    } else {
        print!("{}", render_breakdown(&breakdown));
    }

    Ok(())
}

pub(crate) fn run_convert(args: ConvertArgs) -> Result<(), AppError> {
    let ConvertArgs {
        test,
        listening,
        reading,
        writing,
        speaking,
        benchmark_table,
    } = args;

    let test: LanguageTest = test.parse()?;
    let raw = RawScores {
        listening,
        reading,
        writing,
        speaking,
    };
    validate_raw_scores(test, &raw)?;

    let tables = TablesConfig {
        benchmark_path: benchmark_table,
        breakdown_path: None,
    };
    let benchmark: BenchmarkTable = tables.benchmark()?;
    let clb = convert_to_clb(&benchmark, &raw, test);

    print!("{}", render_conversion(test, &raw, &clb));
    Ok(())
}

fn render_breakdown(breakdown: &ScoreBreakdown) -> String {
    let mut out = String::new();
    out.push_str("Comprehensive Ranking System score\n");

    let rows = [
        ("Age", breakdown.age_points),
        ("Education", breakdown.education_points),
        ("First official language", breakdown.language_points),
        ("Second official language", breakdown.second_language_points),
        ("Canadian work experience", breakdown.canadian_work_points),
        ("Spouse education", breakdown.spouse_education_points),
        ("Spouse language", breakdown.spouse_language_points),
        ("Spouse Canadian work", breakdown.spouse_work_points),
        ("Skill transferability", breakdown.skill_transferability_points),
        ("Additional points", breakdown.additional_points),
    ];
    for (label, points) in rows {
        out.push_str(&format!("  {label:<28}{points:>5}\n"));
    }
    out.push_str(&format!("  {:<28}{:>5}\n", "Total", breakdown.total));

    if !breakdown.is_complete() {
        out.push_str("Breakdown table rows missing (scored as 0):\n");
        for miss in &breakdown.table_misses {
            out.push_str(&format!("  - {miss}\n"));
        }
    }

    out
}

fn render_conversion(test: LanguageTest, raw: &RawScores, clb: &ClbScores) -> String {
    let mut out = format!("{test} results\n");
    for (skill, score) in raw.iter() {
        let level = clb
            .get(skill)
            .map(|level| level.to_string())
            .unwrap_or_else(|| "no equivalent".to_string());
        out.push_str(&format!("  {:<10}{:>6}  ->  {}\n", skill.label(), score, level));
    }
    out
}
