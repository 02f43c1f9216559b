//! Pattern representation
//!
//! This module defines the symbol-sequence patterns consumed by the
//! matching engine. Symbols are abstract tokens; a pattern is just their
//! order of occurrence, with names interned to dense ids.

use rustc_hash::FxHashMap;
use std::collections::hash_map::Entry;

/// Type alias for pattern symbol identifiers (indices into Pattern.symbol_names)
pub type SymbolId = usize;

/// An ordered sequence of abstract symbols describing required structural
/// repetition: equal symbols must bind identical substrings of a subject,
/// distinct symbols must bind distinct ones.
#[derive(Debug, Clone)]
pub struct Pattern {
    /// Symbol occurrences in pattern order
    pub symbols: Vec<SymbolId>,
    pub symbol_ids: FxHashMap<String, SymbolId>,
    pub symbol_names: Vec<String>,
    /// Occurrence count per symbol, indexed by SymbolId
    pub counts: Vec<usize>,
}

impl Pattern {
    /// Create a new empty pattern
    pub fn new() -> Self {
        Self {
            symbols: Vec::new(),
            symbol_ids: FxHashMap::default(),
            symbol_names: Vec::new(),
            counts: Vec::new(),
        }
    }

    /// Build a pattern from a compact expression, one symbol per character
    /// (`"abba"` is the four-occurrence, two-symbol pattern a b b a).
    pub fn from_chars(text: &str) -> Self {
        let mut pattern = Pattern::new();
        let mut buf = [0u8; 4];
        for c in text.chars() {
            pattern.add_symbol(c.encode_utf8(&mut buf));
        }
        pattern
    }

    /// Append one symbol occurrence, interning its name on first appearance
    pub fn add_symbol(&mut self, name: &str) {
        match self.symbol_ids.entry(name.to_owned()) {
            Entry::Occupied(e) => {
                let id = *e.get();
                self.counts[id] += 1;
                self.symbols.push(id);
            }
            Entry::Vacant(e) => {
                let id = self.symbol_names.len();
                e.insert(id);
                self.symbol_names.push(name.to_string());
                self.counts.push(1);
                self.symbols.push(id);
            }
        }
    }

    /// Number of symbol occurrences (the pattern's length)
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Number of distinct symbols
    pub fn distinct_count(&self) -> usize {
        self.symbol_names.len()
    }

    /// True if any symbol occurs more than once. Patterns without repeats
    /// never need the backtracking search.
    pub fn has_repeats(&self) -> bool {
        self.counts.iter().any(|&count| count > 1)
    }

    /// Get a symbol's name by id
    pub fn name(&self, id: SymbolId) -> &str {
        &self.symbol_names[id]
    }
}

impl Default for Pattern {
    fn default() -> Self {
        Self::new()
    }
}
