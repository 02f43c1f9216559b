//! Pattern matching engine
//!
//! Decides whether a subject string can be segmented into contiguous,
//! non-empty pieces that realize a Pattern: every occurrence of a symbol
//! consumes the identical substring, and distinct symbols consume
//! distinct substrings. The search is a depth-first traversal over
//! prefix-length choices; each branch owns its own copy of the binding,
//! so failed branches leave no trace on their siblings.

use bstr::{BStr, BString, ByteSlice};
use rustc_hash::FxHashMap;

use crate::parser::{PatternError, parse_pattern};
use crate::pattern::{Pattern, SymbolId};

/// Half-open byte range of a bound piece within the subject
type Span = (usize, usize);

/// Symbol -> piece assignment built along one path of the search tree
type Binding = FxHashMap<SymbolId, Span>;

/// The witnessing binding of a successful match
#[derive(Debug, Clone)]
pub struct Match {
    /// Piece bound to each symbol, indexed by SymbolId
    pub bindings: Vec<BString>,
    /// Symbol names (in first-appearance order)
    pub symbol_names: Vec<String>,
}

impl Match {
    fn new(pattern: &Pattern, subject: &[u8], binding: &Binding) -> Self {
        let mut bindings = vec![BString::from(""); pattern.distinct_count()];
        for (&sym, &(start, end)) in binding {
            bindings[sym] = BString::from(&subject[start..end]);
        }
        Self {
            bindings,
            symbol_names: pattern.symbol_names.clone(),
        }
    }

    /// Get the piece bound to a symbol by name
    ///
    /// Returns None if the symbol name is not part of the pattern
    pub fn get(&self, name: &str) -> Option<&BStr> {
        let id = self.symbol_names.iter().position(|n| n == name)?;
        Some(self.bindings[id].as_bstr())
    }

    /// Iterate over (symbol name, bound piece) pairs in symbol order
    pub fn iter_named(&self) -> impl Iterator<Item = (&str, &BStr)> + '_ {
        self.symbol_names
            .iter()
            .map(String::as_str)
            .zip(self.bindings.iter().map(|b| b.as_bstr()))
    }
}

/// Report whether `subject` can be segmented to realize `pattern`.
///
/// When no symbol repeats, a long-enough subject can always be carved into
/// one piece per symbol (a single unit each, remainder to the last), so the
/// answer reduces to a length comparison and the search is skipped. The
/// shortcut never examines the subject's characters; [`find_match`] is the
/// strict variant that does.
pub fn matches(pattern: &Pattern, subject: &str) -> bool {
    if !pattern.has_repeats() {
        return subject.len() >= pattern.len();
    }
    check(subject.as_bytes(), 0, &pattern.symbols, Binding::default()).is_some()
}

/// Parse a pattern expression and match it against `subject`
pub fn matches_query(query: &str, subject: &str) -> Result<bool, PatternError> {
    let pattern = parse_pattern(query)?;
    Ok(matches(&pattern, subject))
}

/// Run the full search and return the witnessing binding, if any.
///
/// Unlike [`matches`] this never takes the repeat-free shortcut, so the
/// returned witness always satisfies both invariants. On degenerate
/// subjects the two can disagree: `matches` accepts pattern `ab` against
/// `"aa"` on length alone, while no injective witness exists.
pub fn find_match(pattern: &Pattern, subject: &str) -> Option<Match> {
    let binding = check(subject.as_bytes(), 0, &pattern.symbols, Binding::default())?;
    Some(Match::new(pattern, subject.as_bytes(), &binding))
}

/// One step of the depth-first search: bind the head symbol to a prefix of
/// the remaining subject, recurse on the rest. Returns the completed
/// binding on success.
fn check(subject: &[u8], pos: usize, symbols: &[SymbolId], binding: Binding) -> Option<Binding> {
    let remaining = subject.len() - pos;
    let Some((&sym, rest)) = symbols.split_first() else {
        // Pattern exhausted: accept only if the subject is too and the
        // finished binding maps distinct symbols to distinct pieces.
        if remaining == 0 && is_injective(subject, &binding) {
            return Some(binding);
        }
        return None;
    };
    if remaining < symbols.len() {
        return None; // Not enough subject left for one piece per symbol
    }

    match binding.get(&sym) {
        Some(&(start, end)) => {
            // Symbol already bound: its piece is fixed, no branching
            let bound = &subject[start..end];
            if subject[pos..].starts_with(bound) {
                check(subject, pos + bound.len(), rest, binding)
            } else {
                None
            }
        }
        None => {
            // Try every non-empty prefix as this symbol's piece, shortest
            // first, up to and including the whole remainder. Each
            // candidate extends a private copy of the binding.
            for i in 1..=remaining {
                let mut candidate = binding.clone();
                candidate.insert(sym, (pos, pos + i));
                if let Some(done) = check(subject, pos + i, rest, candidate) {
                    return Some(done);
                }
            }
            None
        }
    }
}

/// Distinct symbols must hold distinct pieces
fn is_injective(subject: &[u8], binding: &Binding) -> bool {
    let pieces: Vec<&[u8]> = binding
        .values()
        .map(|&(start, end)| &subject[start..end])
        .collect();
    (1..pieces.len()).all(|i| !pieces[i..].contains(&pieces[i - 1]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(pattern: &str, subject: &str) -> bool {
        matches(&Pattern::from_chars(pattern), subject)
    }

    /// If the pattern has no repeated symbols, it matches exactly when the
    /// subject is at least as long as the pattern.
    #[test]
    fn test_no_repeats() {
        assert_eq!(m("a", "efghi"), true);
        assert_eq!(m("abdc", "odsihpoyywepqriohweoyafpsdoyh"), true);
        assert_eq!(m("abcde", "efghi"), true);
        assert_eq!(m("abcdefghi", "cat"), false);
    }

    #[test]
    fn test_repeats() {
        assert_eq!(m("abba", "redbluebluered"), true);
        assert_eq!(m("abba", "redbluebluereda"), false);
        assert_eq!(m("abba", "redblueblvereda"), false);
        assert_eq!(m("abba", "abcxyzxyzabc"), true);
        assert_eq!(m("baab", "abcxyzxyzabc"), true);
        assert_eq!(m("dzzd", "abcxyzxyzabc"), true);
        assert_eq!(m("dzzd", "dzzda"), false);
        assert_eq!(m("abba", "rblblr"), true);
        assert_eq!(m("abab", "redblueredblue"), true);
        assert_eq!(m("abba", "catdogdogcat"), true);
        assert_eq!(m("abab", "catdogcatdog"), true);
        assert_eq!(m("aba", "catdogcat"), true);
        assert_eq!(m("abcac", "catdogmousecatmouse"), true);
        assert_eq!(m("abab", "catdogcatcat"), false);
        assert_eq!(m("abab", "catdogcatdogg"), false);
        assert_eq!(m("abab", "catdocatdog"), false);
        assert_eq!(m("abab", "catdogcat"), false);
        assert_eq!(m("abba", "redblueredblue"), false);
        assert_eq!(m("aba", "patrpatrr"), false);
    }

    /// Consistent segmentations whose symbols collide on the same piece
    /// are not matches.
    #[test]
    fn test_duplicate_pieces_rejected() {
        assert_eq!(m("abba", "redredredred"), false);
        assert_eq!(m("aabb", "xxxx"), false);
    }

    /// A trailing unbound symbol may consume the whole remainder.
    #[test]
    fn test_full_remainder_piece() {
        assert_eq!(m("aab", "xxyyy"), true);
        assert_eq!(m("aab", "xx"), false);
    }

    #[test]
    fn test_length_necessity() {
        assert_eq!(m("abba", "rbb"), false);
        assert_eq!(m("dzzd", "dzz"), false);
    }

    /// An empty pattern has no repeated symbol, so the length shortcut
    /// applies and it matches any subject.
    #[test]
    fn test_empty_pattern() {
        assert_eq!(m("", ""), true);
        assert_eq!(m("", "xyz"), true);
        assert_eq!(m("a", ""), false);
    }

    #[test]
    fn test_witness_pieces() {
        let pattern = Pattern::from_chars("abba");
        let witness = find_match(&pattern, "redbluebluered").unwrap();

        assert_eq!(witness.get("a").unwrap(), "red");
        assert_eq!(witness.get("b").unwrap(), "blue");
        assert_eq!(witness.get("c"), None);
    }

    /// A witness's pieces, taken in pattern order, concatenate exactly to
    /// the subject, and no two symbols share a piece.
    #[test]
    fn test_witness_invariants() {
        let cases = [
            ("abcac", "catdogmousecatmouse"),
            ("abba", "abcxyzxyzabc"),
            ("abba", "rblblr"),
        ];

        for (compact, subject) in cases {
            let pattern = Pattern::from_chars(compact);
            let witness = find_match(&pattern, subject).unwrap();

            let rebuilt: Vec<u8> = pattern
                .symbols
                .iter()
                .flat_map(|&sym| witness.bindings[sym].to_vec())
                .collect();
            assert_eq!(rebuilt, subject.as_bytes());

            for (i, piece) in witness.bindings.iter().enumerate() {
                for other in &witness.bindings[i + 1..] {
                    assert_ne!(piece, other);
                }
            }
        }
    }

    /// The repeat-free shortcut answers on length alone; the strict search
    /// can disagree when the subject is too uniform to bind injectively.
    #[test]
    fn test_fast_path_divergence() {
        let pattern = Pattern::from_chars("ab");

        assert!(matches(&pattern, "aa"));
        assert!(find_match(&pattern, "aa").is_none());
        assert!(find_match(&pattern, "ab").is_some());
    }

    #[test]
    fn test_named_symbol_query() {
        assert_eq!(matches_query("x y y x", "redbluebluered").unwrap(), true);
        assert_eq!(matches_query("x y x y", "redbluebluered").unwrap(), false);
        assert_eq!(matches_query("", "anything").unwrap(), true);
        assert!(matches_query("x !", "anything").is_err());
    }

    #[test]
    fn test_iter_named() {
        let pattern = Pattern::from_chars("aba");
        let witness = find_match(&pattern, "catdogcat").unwrap();

        let pairs: Vec<(String, BString)> = witness
            .iter_named()
            .map(|(name, piece)| (name.to_string(), piece.to_owned()))
            .collect();

        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].0, "a");
        assert_eq!(pairs[0].1, "cat");
        assert_eq!(pairs[1].0, "b");
        assert_eq!(pairs[1].1, "dog");
    }
}
