//! Compound keyword merging and keyword vocabularies.
//!
//! Two vocabularies coexist on purpose: the pattern-mining one excludes
//! `AS` and `ON` so aliasing noise does not dilute structural n-grams,
//! while the complexity one includes `AS`. The compound table itself is
//! vocabulary-agnostic and shared by both analysis paths.

use std::collections::HashMap;

use compact_str::CompactString;
use indexmap::IndexSet;
use smallvec::SmallVec;

/// Join-type labels summed into `join_count`
pub const JOIN_TYPES: [&str; 4] = ["INNER JOIN", "LEFT JOIN", "RIGHT JOIN", "FULL JOIN"];

/// Compound labels folded by the default merge table
const COMPOUND_LABELS: [&str; 7] = [
    "INNER JOIN",
    "LEFT JOIN",
    "RIGHT JOIN",
    "FULL JOIN",
    "GROUP BY",
    "ORDER BY",
    "IS NULL"
];

/// Keywords mined for n-gram patterns (no `AS`, no `ON`)
const PATTERN_KEYWORDS: [&str; 21] = [
    "SELECT",
    "FROM",
    "WHERE",
    "GROUP BY",
    "HAVING",
    "ORDER BY",
    "LIMIT",
    "OFFSET",
    "DISTINCT",
    "IN",
    "BETWEEN",
    "LIKE",
    "INNER JOIN",
    "LEFT JOIN",
    "RIGHT JOIN",
    "IS NULL",
    "AND",
    "OR",
    "NOT",
    "EXISTS",
    "CASE"
];

/// Keywords counted by the complexity profiler, in output column order
const COMPLEXITY_KEYWORDS: [&str; 21] = [
    "SELECT",
    "FROM",
    "INNER JOIN",
    "LEFT JOIN",
    "WHERE",
    "GROUP BY",
    "HAVING",
    "ORDER BY",
    "LIMIT",
    "OFFSET",
    "DISTINCT",
    "AS",
    "IN",
    "BETWEEN",
    "LIKE",
    "IS NULL",
    "AND",
    "OR",
    "NOT",
    "EXISTS",
    "CASE"
];

/// A multi-token keyword pattern and its canonical label
struct CompoundPattern {
    parts: SmallVec<[CompactString; 2]>,
    label: CompactString
}

/// Fixed table of compound keyword patterns.
///
/// Patterns are indexed by their first token and, within one bucket,
/// sorted by descending length at construction. Greedy leftmost
/// matching is therefore longest-match and independent of definition
/// order, which removes the iteration-order ambiguity a flat table
/// would have.
pub struct CompoundTable {
    by_first: HashMap<CompactString, Vec<CompoundPattern>>
}

impl Default for CompoundTable {
    fn default() -> Self {
        Self::new(&COMPOUND_LABELS)
    }
}

impl CompoundTable {
    /// Build a table from canonical labels; each label's tokens are its
    /// match pattern ("GROUP BY" matches the run `GROUP`, `BY`).
    pub fn new(labels: &[&str]) -> Self {
        let mut by_first: HashMap<CompactString, Vec<CompoundPattern>> = HashMap::new();

        for label in labels {
            let parts: SmallVec<[CompactString; 2]> =
                label.split_whitespace().map(CompactString::from).collect();
            if parts.len() < 2 {
                continue;
            }
            by_first
                .entry(parts[0].clone())
                .or_default()
                .push(CompoundPattern {
                    parts,
                    label: CompactString::from(*label)
                });
        }

        for bucket in by_first.values_mut() {
            bucket.sort_by(|a, b| b.parts.len().cmp(&a.parts.len()));
        }

        Self {
            by_first
        }
    }

    /// Merge compound keyword runs into single canonical labels.
    ///
    /// One left-to-right pass; merged output is never re-examined, and
    /// unmatched tokens pass through unchanged.
    pub fn merge(&self, tokens: &[CompactString]) -> Vec<CompactString> {
        let mut merged = Vec::with_capacity(tokens.len());
        let mut i = 0;

        while i < tokens.len() {
            let mut matched = false;
            if let Some(bucket) = self.by_first.get(tokens[i].as_str()) {
                for pattern in bucket {
                    let end = i + pattern.parts.len();
                    if end <= tokens.len()
                        && pattern.parts.iter().zip(&tokens[i..end]).all(|(p, t)| p == t)
                    {
                        merged.push(pattern.label.clone());
                        i = end;
                        matched = true;
                        break;
                    }
                }
            }
            if !matched {
                merged.push(tokens[i].clone());
                i += 1;
            }
        }

        merged
    }
}

/// Insertion-ordered set of canonical keyword labels
pub struct Vocabulary {
    keywords: IndexSet<CompactString>
}

impl Vocabulary {
    pub fn new(keywords: &[&str]) -> Self {
        Self {
            keywords: keywords.iter().map(|k| CompactString::from(*k)).collect()
        }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.keywords.contains(token)
    }

    /// Labels in definition order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(|k| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

/// Vocabulary for the n-gram pattern-mining path
pub fn pattern_vocabulary() -> Vocabulary {
    Vocabulary::new(&PATTERN_KEYWORDS)
}

/// Vocabulary for the complexity-profiling path (includes `AS`)
pub fn complexity_vocabulary() -> Vocabulary {
    Vocabulary::new(&COMPLEXITY_KEYWORDS)
}

/// Keep only vocabulary members, preserving order.
///
/// The result is always an order-preserving subsequence of the input;
/// labels merged by a compound table but absent from the vocabulary are
/// silently dropped here, not reported.
pub fn filter_keywords(tokens: &[CompactString], vocabulary: &Vocabulary) -> Vec<CompactString> {
    tokens
        .iter()
        .filter(|t| vocabulary.contains(t.as_str()))
        .cloned()
        .collect()
}
