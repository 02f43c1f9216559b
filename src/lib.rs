//! Wordshape: structural word-pattern matching
//!
//! Decides whether a string can be segmented into contiguous, non-empty
//! pieces that realize an abstract pattern of symbols: equal symbols bind
//! identical substrings, distinct symbols bind distinct substrings.

pub mod cases; // Case-file fixtures
pub mod matcher; // Feasibility fast path + backtracking search
pub mod parser; // Pattern expression parser
pub mod pattern; // Pattern AST and symbol interning

// Re-exports for convenience
pub use cases::{Case, CaseError, CaseReader};
pub use matcher::{Match, find_match, matches, matches_query};
pub use parser::{PatternError, parse_pattern};
pub use pattern::{Pattern, SymbolId};
