//! Combinatorial root-string generator.
//!
//! Produces the four candidate categories as explicit, named enumeration
//! rules over the fixed alphabet. Each category is duplicate-free and its
//! order is fully determined by the alphabet order, so repeated runs emit
//! identical sequences.
//!
//! The triples category enumerates by structure: the three rules
//! (repeated-triple, two-distinct, three-distinct) partition all length-3
//! strings by their number of distinct symbols, which is what makes the
//! no-duplicates invariant hold by construction.

use crate::domain::alphabet::{SYMBOL_COUNT, SYMBOLS};

/// A generated root category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// All 36 single symbols.
    Singles,
    /// Doubled symbols plus both orderings of every distinct pair (1296).
    Pairs,
    /// Same shapes as [`Category::Pairs`] joined with a hyphen (1296).
    HyphenPairs,
    /// All length-3 strings, enumerated by distinct-symbol count (46 656).
    Triples,
}

impl Category {
    /// Every category, in generation order.
    pub const ALL: [Category; 4] = [
        Category::Singles,
        Category::Pairs,
        Category::HyphenPairs,
        Category::Triples,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Singles => "singles",
            Category::Pairs => "pairs",
            Category::HyphenPairs => "hyphen-pairs",
            Category::Triples => "triples",
        }
    }
}

/// Generates the root strings for one category.
pub fn roots(category: Category) -> Vec<String> {
    match category {
        Category::Singles => singles(),
        Category::Pairs => pairs(),
        Category::HyphenPairs => hyphen_pairs(),
        Category::Triples => triples(),
    }
}

/// Rule: every symbol once, in alphabet order.
pub fn singles() -> Vec<String> {
    SYMBOLS.iter().map(|c| c.to_string()).collect()
}

/// Rules: doubled (`ii`) for every symbol, then both orderings (`ij`, `ji`)
/// of every distinct pair with `i` earlier in the alphabet.
///
/// Cardinality: 36 + 2 * C(36, 2) = 1296.
pub fn pairs() -> Vec<String> {
    let mut out = Vec::with_capacity(SYMBOL_COUNT * SYMBOL_COUNT);
    for (idx, &a) in SYMBOLS.iter().enumerate() {
        out.push(format!("{a}{a}"));
        for &b in &SYMBOLS[idx + 1..] {
            out.push(format!("{a}{b}"));
            out.push(format!("{b}{a}"));
        }
    }
    out
}

/// Same shapes as [`pairs`], joined with a literal hyphen: `i-i`, `i-j`, `j-i`.
pub fn hyphen_pairs() -> Vec<String> {
    let mut out = Vec::with_capacity(SYMBOL_COUNT * SYMBOL_COUNT);
    for (idx, &a) in SYMBOLS.iter().enumerate() {
        out.push(format!("{a}-{a}"));
        for &b in &SYMBOLS[idx + 1..] {
            out.push(format!("{a}-{b}"));
            out.push(format!("{b}-{a}"));
        }
    }
    out
}

/// Rules, in order:
///
/// 1. repeated-triple: `iii` for every symbol (36);
/// 2. two-distinct: all six arrangements of {i,i,j} and {i,j,j} for every
///    unordered pair i < j (6 * C(36, 2) = 3780);
/// 3. three-distinct: all six permutations of every unordered triple
///    i < j < k (6 * C(36, 3) = 42 840).
///
/// The rules partition length-3 strings by distinct-symbol count, so the
/// category is duplicate-free and totals 36^3 = 46 656.
pub fn triples() -> Vec<String> {
    let mut out = Vec::with_capacity(SYMBOL_COUNT * SYMBOL_COUNT * SYMBOL_COUNT);

    for (idx, &a) in SYMBOLS.iter().enumerate() {
        out.push(format!("{a}{a}{a}"));
        for &b in &SYMBOLS[idx + 1..] {
            // {a,a,b}
            out.push(format!("{a}{a}{b}"));
            out.push(format!("{a}{b}{a}"));
            out.push(format!("{b}{a}{a}"));
            // {a,b,b}
            out.push(format!("{a}{b}{b}"));
            out.push(format!("{b}{a}{b}"));
            out.push(format!("{b}{b}{a}"));
        }
    }

    for (i, &a) in SYMBOLS.iter().enumerate() {
        for (j, &b) in SYMBOLS.iter().enumerate().skip(i + 1) {
            for &c in &SYMBOLS[j + 1..] {
                out.push(format!("{a}{b}{c}"));
                out.push(format!("{a}{c}{b}"));
                out.push(format!("{b}{a}{c}"));
                out.push(format!("{b}{c}{a}"));
                out.push(format!("{c}{a}{b}"));
                out.push(format!("{c}{b}{a}"));
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_unique(items: &[String]) {
        let unique: HashSet<&String> = items.iter().collect();
        assert_eq!(unique.len(), items.len(), "category contains duplicates");
    }

    #[test]
    fn test_singles_one_occurrence_per_symbol() {
        let out = singles();
        assert_eq!(out.len(), 36);
        for c in SYMBOLS {
            assert_eq!(out.iter().filter(|s| **s == c.to_string()).count(), 1);
        }
    }

    #[test]
    fn test_pairs_cardinality_and_uniqueness() {
        let out = pairs();
        // 36 doubles + 2 * C(36, 2) ordered distinct pairs
        assert_eq!(out.len(), 36 + 2 * (36 * 35 / 2));
        assert_eq!(out.len(), 1296);
        assert_unique(&out);
        assert!(out.iter().all(|s| s.len() == 2));
    }

    #[test]
    fn test_hyphen_pairs_match_pairs_cardinality() {
        let out = hyphen_pairs();
        assert_eq!(out.len(), pairs().len());
        assert_unique(&out);
        assert!(out.iter().all(|s| s.len() == 3 && s.as_bytes()[1] == b'-'));
    }

    #[test]
    fn test_triples_no_duplicates() {
        // Regression guard for overlap between the repeated-letter rules and
        // the distinct-triple rule.
        let out = triples();
        assert_unique(&out);
    }

    #[test]
    fn test_triples_cover_all_length_3_strings() {
        let out = triples();
        assert_eq!(out.len(), 36 * 36 * 36);
        assert!(out.iter().all(|s| s.len() == 3));
    }

    #[test]
    fn test_generation_is_deterministic() {
        assert_eq!(pairs(), pairs());
        assert_eq!(triples(), triples());
    }

    #[test]
    fn test_pairs_enumeration_order() {
        let out = pairs();
        // Doubled form first, then both orderings of each later symbol.
        assert_eq!(out[0], "aa");
        assert_eq!(out[1], "ab");
        assert_eq!(out[2], "ba");
        assert_eq!(out[3], "ac");
        assert_eq!(out[4], "ca");
    }

    #[test]
    fn test_triples_include_two_distinct_arrangements() {
        // All six placements of the repeated symbol are emitted.
        let out: HashSet<String> = triples().into_iter().collect();
        for s in ["aab", "aba", "baa", "abb", "bab", "bba", "aaa"] {
            assert!(out.contains(s), "missing {s}");
        }
    }

    #[test]
    fn test_roots_dispatch() {
        assert_eq!(roots(Category::Singles).len(), 36);
        assert_eq!(roots(Category::Pairs).len(), 1296);
        assert_eq!(roots(Category::HyphenPairs).len(), 1296);
        assert_eq!(roots(Category::Triples).len(), 46_656);
    }
}
