//! N-gram extraction and document-term vectorization.
//!
//! The matrix is built in two passes: pass 1 collects the corpus
//! vocabulary as an insertion-ordered set (stable column order within a
//! run), pass 2 fills one count row per query. Queries shorter than the
//! window contribute all-zero rows, never errors.

use compact_str::CompactString;
use indexmap::IndexSet;

/// Extract all contiguous `n`-length windows, joined with single spaces.
///
/// Overlapping windows all count: a sequence of length `L >= n` yields
/// exactly `L - n + 1` n-grams; shorter sequences yield none.
pub fn extract_ngrams(tokens: &[CompactString], n: usize) -> Vec<String> {
    if n == 0 || tokens.len() < n {
        return Vec::new();
    }

    tokens
        .windows(n)
        .map(|window| {
            window
                .iter()
                .map(|t| t.as_str())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Queries-by-n-grams occurrence count matrix
pub struct DocumentTermMatrix {
    vocabulary: IndexSet<String>,
    rows:       Vec<Vec<u32>>
}

impl DocumentTermMatrix {
    /// Build from per-query n-gram lists (one list per query, in order)
    pub fn build(documents: &[Vec<String>]) -> Self {
        let mut vocabulary = IndexSet::new();
        for document in documents {
            for ngram in document {
                if !vocabulary.contains(ngram.as_str()) {
                    vocabulary.insert(ngram.clone());
                }
            }
        }

        let rows = documents
            .iter()
            .map(|document| {
                let mut row = vec![0u32; vocabulary.len()];
                for ngram in document {
                    if let Some(column) = vocabulary.get_index_of(ngram.as_str()) {
                        row[column] += 1;
                    }
                }
                row
            })
            .collect();

        Self {
            vocabulary,
            rows
        }
    }

    /// Number of distinct n-grams observed anywhere in the corpus
    pub fn num_terms(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn num_documents(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Vec<u32>] {
        &self.rows
    }

    /// N-gram labels in column order
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.vocabulary.iter().map(|t| t.as_str())
    }

    /// Corpus-wide frequency vector (column sums)
    pub fn column_frequencies(&self) -> Vec<u64> {
        let mut frequencies = vec![0u64; self.vocabulary.len()];
        for row in &self.rows {
            for (column, count) in row.iter().enumerate() {
                frequencies[column] += u64::from(*count);
            }
        }
        frequencies
    }

    /// The `k` highest-frequency n-grams, descending.
    ///
    /// Ties keep first-seen column order (stable sort).
    pub fn top_k(&self, k: usize) -> Vec<(String, u64)> {
        let frequencies = self.column_frequencies();
        let mut columns: Vec<usize> = (0..self.vocabulary.len()).collect();
        columns.sort_by(|a, b| frequencies[*b].cmp(&frequencies[*a]));

        columns
            .into_iter()
            .take(k)
            .map(|column| (self.vocabulary[column].clone(), frequencies[column]))
            .collect()
    }
}
