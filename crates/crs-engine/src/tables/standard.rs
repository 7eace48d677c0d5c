//! Built-in reference data mirroring the tables IRCC currently publishes.

use super::benchmark::BenchmarkRow;
use super::breakdown::{BreakdownRow, Factor, Points};

// (test, clb, listening, reading, writing, speaking)
const BENCHMARKS: &[(&str, u8, &str, &str, &str, &str)] = &[
    ("TEF", 10, "546-699", "546-699", "558-699", "556-699"),
    ("TEF", 9, "503-545", "503-545", "512-557", "518-555"),
    ("TEF", 8, "462-502", "462-502", "472-511", "494-517"),
    ("TEF", 7, "434-461", "434-461", "428-471", "456-493"),
    ("TEF", 6, "393-433", "393-433", "379-427", "422-455"),
    ("TEF", 5, "352-392", "352-392", "330-378", "387-421"),
    ("TEF", 4, "306-351", "306-351", "268-329", "328-386"),
    ("TCF", 10, "549-699", "549-699", "16-20", "16-20"),
    ("TCF", 9, "523-548", "524-548", "14-15", "14-15"),
    ("TCF", 8, "503-522", "499-523", "12-13", "12-13"),
    ("TCF", 7, "458-502", "453-498", "10-11", "10-11"),
    ("TCF", 6, "398-457", "406-452", "7-9", "7-9"),
    ("TCF", 5, "369-397", "375-405", "6", "6"),
    ("TCF", 4, "331-368", "342-374", "4-5", "4-5"),
];

// (factor, bracket, with spouse, without spouse)
const BREAKDOWN: &[(Factor, &str, Points, Points)] = &[
    (Factor::Age, "0-17", 0, 0),
    (Factor::Age, "18", 90, 99),
    (Factor::Age, "19", 95, 105),
    (Factor::Age, "20-29", 100, 110),
    (Factor::Age, "30", 95, 105),
    (Factor::Age, "31", 90, 99),
    (Factor::Age, "32", 85, 94),
    (Factor::Age, "33", 80, 88),
    (Factor::Age, "34", 75, 83),
    (Factor::Age, "35", 70, 77),
    (Factor::Age, "36", 65, 72),
    (Factor::Age, "37", 60, 66),
    (Factor::Age, "38", 55, 61),
    (Factor::Age, "39", 50, 55),
    (Factor::Age, "40", 45, 50),
    (Factor::Age, "41", 35, 39),
    (Factor::Age, "42", 25, 28),
    (Factor::Age, "43", 15, 17),
    (Factor::Age, "44", 5, 6),
    (Factor::Age, "45+", 0, 0),
    (Factor::Education, "less_than_secondary", 0, 0),
    (Factor::Education, "secondary", 28, 30),
    (Factor::Education, "one_year_post_secondary", 84, 90),
    (Factor::Education, "two_year_post_secondary", 91, 98),
    (Factor::Education, "bachelors", 112, 120),
    (Factor::Education, "two_or_more_credentials", 119, 128),
    (Factor::Education, "masters", 126, 135),
    (Factor::Education, "professional_degree", 126, 135),
    (Factor::Education, "doctoral", 140, 150),
    (Factor::FirstLanguage, "0-3", 0, 0),
    (Factor::FirstLanguage, "4-5", 6, 6),
    (Factor::FirstLanguage, "6", 8, 9),
    (Factor::FirstLanguage, "7", 16, 17),
    (Factor::FirstLanguage, "8", 22, 23),
    (Factor::FirstLanguage, "9", 29, 31),
    (Factor::FirstLanguage, "10+", 32, 34),
    (Factor::SecondLanguage, "0-4", 0, 0),
    (Factor::SecondLanguage, "5-6", 1, 1),
    (Factor::SecondLanguage, "7-8", 3, 3),
    (Factor::SecondLanguage, "9+", 6, 6),
    (Factor::CanadianWork, "0", 0, 0),
    (Factor::CanadianWork, "1", 35, 40),
    (Factor::CanadianWork, "2", 46, 53),
    (Factor::CanadianWork, "3", 56, 64),
    (Factor::CanadianWork, "4", 63, 72),
    (Factor::CanadianWork, "5+", 70, 80),
    (Factor::SpouseEducation, "less_than_secondary", 0, 0),
    (Factor::SpouseEducation, "secondary", 2, 0),
    (Factor::SpouseEducation, "one_year_post_secondary", 6, 0),
    (Factor::SpouseEducation, "two_year_post_secondary", 7, 0),
    (Factor::SpouseEducation, "bachelors", 8, 0),
    (Factor::SpouseEducation, "two_or_more_credentials", 9, 0),
    (Factor::SpouseEducation, "masters", 10, 0),
    (Factor::SpouseEducation, "professional_degree", 10, 0),
    (Factor::SpouseEducation, "doctoral", 10, 0),
    (Factor::SpouseLanguage, "0-4", 0, 0),
    (Factor::SpouseLanguage, "5-6", 1, 0),
    (Factor::SpouseLanguage, "7-8", 3, 0),
    (Factor::SpouseLanguage, "9+", 5, 0),
    (Factor::SpouseWork, "0", 0, 0),
    (Factor::SpouseWork, "1", 5, 0),
    (Factor::SpouseWork, "2", 7, 0),
    (Factor::SpouseWork, "3", 8, 0),
    (Factor::SpouseWork, "4", 9, 0),
    (Factor::SpouseWork, "5+", 10, 0),
    (Factor::TransferabilityEducationLanguage, "post_secondary+clb7", 13, 13),
    (Factor::TransferabilityEducationLanguage, "post_secondary+clb9", 25, 25),
    (Factor::TransferabilityEducationLanguage, "advanced+clb7", 25, 25),
    (Factor::TransferabilityEducationLanguage, "advanced+clb9", 50, 50),
    (Factor::TransferabilityEducationWork, "post_secondary+cdn1", 13, 13),
    (Factor::TransferabilityEducationWork, "post_secondary+cdn2", 25, 25),
    (Factor::TransferabilityEducationWork, "advanced+cdn1", 25, 25),
    (Factor::TransferabilityEducationWork, "advanced+cdn2", 50, 50),
    (Factor::TransferabilityForeignLanguage, "foreign1+clb7", 13, 13),
    (Factor::TransferabilityForeignLanguage, "foreign1+clb9", 25, 25),
    (Factor::TransferabilityForeignLanguage, "foreign3+clb7", 25, 25),
    (Factor::TransferabilityForeignLanguage, "foreign3+clb9", 50, 50),
    (Factor::TransferabilityForeignWork, "foreign1+cdn1", 13, 13),
    (Factor::TransferabilityForeignWork, "foreign1+cdn2", 25, 25),
    (Factor::TransferabilityForeignWork, "foreign3+cdn1", 25, 25),
    (Factor::TransferabilityForeignWork, "foreign3+cdn2", 50, 50),
    (Factor::Additional, "provincial_nomination", 600, 600),
    (Factor::Additional, "sibling", 15, 15),
    (Factor::Additional, "canadian_education_short", 15, 15),
    (Factor::Additional, "canadian_education_long", 30, 30),
    (Factor::Additional, "certificate_of_qualification", 50, 50),
    (Factor::Additional, "french_only", 25, 25),
    (Factor::Additional, "french_bilingual", 50, 50),
    // Arranged employment stopped earning points on 2025-03-25.
    (Factor::Additional, "arranged_employment_noc_00", 0, 0),
    (Factor::Additional, "arranged_employment_noc_0ab", 0, 0),
    (Factor::Additional, "lmia_job_offer", 0, 0),
];

pub(crate) fn benchmark_rows() -> Vec<BenchmarkRow> {
    BENCHMARKS
        .iter()
        .map(
            |&(test_name, clb_level, listening, reading, writing, speaking)| BenchmarkRow {
                test_name: test_name.to_string(),
                clb_level,
                listening: listening.to_string(),
                reading: reading.to_string(),
                writing: writing.to_string(),
                speaking: speaking.to_string(),
            },
        )
        .collect()
}

pub(crate) fn breakdown_rows() -> Vec<BreakdownRow> {
    BREAKDOWN
        .iter()
        .map(
            |&(factor, bracket, points_with_spouse, points_no_spouse)| BreakdownRow {
                factor,
                bracket: bracket.to_string(),
                points_with_spouse,
                points_no_spouse,
            },
        )
        .collect()
}
