//! Case-file parsing
//!
//! Reads fixture files of matcher cases. Each non-comment line holds one
//! tab-separated case: a compact pattern (one symbol per character), a
//! subject, and the expected outcome (`true` or `false`). Blank lines and
//! lines starting with `#` are skipped. Files ending in `.gz` are
//! decompressed transparently.

use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;
use thiserror::Error;

/// Error during case-file parsing
#[derive(Debug, Error)]
#[error("Case error at line {line}: {message}")]
pub struct CaseError {
    pub line: usize,
    pub message: String,
}

/// A single matcher case
#[derive(Debug, Clone, PartialEq)]
pub struct Case {
    pub pattern: String,
    pub subject: String,
    pub expected: bool,
    /// 1-based source line, for reporting
    pub line: usize,
}

/// Case-file reader that iterates over cases
pub struct CaseReader<R: BufRead> {
    lines: Lines<R>,
    line: usize,
}

impl CaseReader<Box<dyn BufRead>> {
    /// Create a reader from a file path
    pub fn from_file(path: &Path) -> std::io::Result<Self> {
        let file = File::open(path)?;
        let reader: Box<dyn BufRead> = if path.extension().is_some_and(|ext| ext == "gz") {
            Box::new(BufReader::new(GzDecoder::new(file)))
        } else {
            Box::new(BufReader::new(file))
        };
        Ok(Self {
            lines: reader.lines(),
            line: 0,
        })
    }
}

impl CaseReader<BufReader<std::io::Cursor<String>>> {
    /// Create a reader from a string
    pub fn from_str(text: &str) -> Self {
        let cursor = std::io::Cursor::new(text.to_string());
        let reader = BufReader::new(cursor);
        Self {
            lines: reader.lines(),
            line: 0,
        }
    }
}

impl<R: BufRead> Iterator for CaseReader<R> {
    type Item = Result<Case, CaseError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.line += 1;
            match self.lines.next() {
                None => return None,
                Some(Err(e)) => {
                    return Some(Err(CaseError {
                        line: self.line,
                        message: format!("IO error: {}", e),
                    }));
                }
                Some(Ok(text)) => {
                    let trimmed = text.trim_end();
                    if trimmed.is_empty() || trimmed.starts_with('#') {
                        continue;
                    }
                    return Some(parse_case(trimmed, self.line));
                }
            }
        }
    }
}

/// Parse a single tab-separated case line
fn parse_case(text: &str, line: usize) -> Result<Case, CaseError> {
    let fields: Vec<&str> = text.split('\t').collect();

    if fields.len() != 3 {
        return Err(CaseError {
            line,
            message: format!("Expected 3 fields, found {}", fields.len()),
        });
    }

    let expected = match fields[2] {
        "true" => true,
        "false" => false,
        other => {
            return Err(CaseError {
                line,
                message: format!("Expected true or false, found {:?}", other),
            });
        }
    };

    Ok(Case {
        pattern: fields[0].to_string(),
        subject: fields[1].to_string(),
        expected,
        line,
    })
}
