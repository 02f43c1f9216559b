//! Pattern expression parser
//!
//! Parses pattern expressions into Pattern values using a pest grammar.
//! An expression is a sequence of whitespace-separated symbol names:
//! `red blue blue red` is the same pattern as `Pattern::from_chars("abba")`.

use pest::Parser;
use pest_derive::Parser;
use thiserror::Error;

use crate::pattern::Pattern;

#[derive(Parser)]
#[grammar = "pattern.pest"]
struct PatternParser;

/// Error type for pattern expression parsing failures
#[derive(Debug, Error)]
pub enum PatternError {
    #[error("Pattern error: {0}")]
    ParseError(#[from] pest::error::Error<Rule>),
}

/// Parse a pattern expression into a Pattern
pub fn parse_pattern(input: &str) -> Result<Pattern, PatternError> {
    let mut pairs = PatternParser::parse(Rule::pattern, input)?;
    let mut pattern = Pattern::new();

    let pattern_pair = pairs.next().unwrap();
    for pair in pattern_pair.into_inner() {
        match pair.as_rule() {
            Rule::symbol => pattern.add_symbol(pair.as_str()),
            Rule::EOI => {} // End of input
            _ => {}
        }
    }

    Ok(pattern)
}
