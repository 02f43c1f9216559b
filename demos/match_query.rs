//! Parse a pattern expression and match it against a subject
//!
//! Run with: cargo run --example match_query -- "red blue blue red" redbluebluered

use std::process::ExitCode;

use wordshape::{find_match, parse_pattern};

fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);
    let (Some(query), Some(subject)) = (args.next(), args.next()) else {
        eprintln!("usage: match_query <pattern expression> <subject>");
        return ExitCode::FAILURE;
    };

    let pattern = match parse_pattern(&query) {
        Ok(pattern) => pattern,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    match find_match(&pattern, &subject) {
        Some(witness) => {
            for (name, piece) in witness.iter_named() {
                println!("{} = {:?}", name, piece);
            }
            ExitCode::SUCCESS
        }
        None => {
            println!("no match");
            ExitCode::FAILURE
        }
    }
}
