//! Run a case file against the matcher and report mismatches
//!
//! Run with: cargo run --example check_cases -- demos/cases.tsv

use std::path::Path;
use std::process::ExitCode;

use wordshape::{CaseReader, Pattern, matches};

fn main() -> ExitCode {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "demos/cases.tsv".to_string());

    let reader = match CaseReader::from_file(Path::new(&path)) {
        Ok(reader) => reader,
        Err(e) => {
            eprintln!("{}: {}", path, e);
            return ExitCode::FAILURE;
        }
    };

    let mut total = 0usize;
    let mut mismatches = 0usize;
    for result in reader {
        let case = match result {
            Ok(case) => case,
            Err(e) => {
                eprintln!("{}: {}", path, e);
                return ExitCode::FAILURE;
            }
        };

        total += 1;
        let got = matches(&Pattern::from_chars(&case.pattern), &case.subject);
        if got != case.expected {
            mismatches += 1;
            println!(
                "line {}: {:?} on {:?} gave {}, expected {}",
                case.line, case.pattern, case.subject, got, case.expected
            );
        }
    }

    println!("{} cases, {} mismatches", total, mismatches);
    if mismatches == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
