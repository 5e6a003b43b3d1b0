//! Corpus-wide n-gram pattern analysis.
//!
//! Per-query work (lex, merge, filter, window) runs in parallel; the
//! vocabulary and matrix construction is a single global reduction
//! afterwards, so results are deterministic for a fixed input.

use rayon::prelude::*;
use serde::Serialize;

use crate::{
    error::AppResult,
    keywords::{CompoundTable, filter_keywords, pattern_vocabulary},
    lexer::{SqlDialect, tokenize},
    ngram::{DocumentTermMatrix, extract_ngrams},
    stats::{average_jaccard, shannon_entropy}
};

/// One row of the top-K frequency table
#[derive(Debug, Clone, Serialize)]
pub struct NgramFrequency {
    pub ngram:     String,
    pub frequency: u64
}

/// Summary of the corpus' structural n-gram distribution
#[derive(Debug, Clone, Serialize)]
pub struct PatternReport {
    pub ngram_size:          usize,
    pub total_unique_ngrams: usize,
    /// Shannon entropy of the corpus frequency distribution, nat units
    pub entropy:             f64,
    /// Mean pairwise Jaccard similarity over binarized query rows
    pub jaccard_similarity:  f64,
    /// Highest-frequency n-grams, descending
    pub top_ngrams:          Vec<NgramFrequency>
}

/// Analyze keyword n-gram patterns across the corpus.
///
/// Fails only on corpus-level statistical preconditions: zero total
/// n-gram frequency, or fewer than two queries for the pairwise
/// similarity. Individual unlexable queries just contribute empty
/// rows.
pub fn analyze_patterns(
    queries: &[String],
    ngram_size: usize,
    top_k: usize,
    dialect: SqlDialect
) -> AppResult<PatternReport> {
    let table = CompoundTable::default();
    let vocabulary = pattern_vocabulary();

    let documents: Vec<Vec<String>> = queries
        .par_iter()
        .map(|sql| {
            let merged = table.merge(&tokenize(sql, dialect));
            let filtered = filter_keywords(&merged, &vocabulary);
            extract_ngrams(&filtered, ngram_size)
        })
        .collect();

    let matrix = DocumentTermMatrix::build(&documents);
    let frequencies = matrix.column_frequencies();
    let entropy = shannon_entropy(&frequencies)?;
    let jaccard_similarity = average_jaccard(matrix.rows())?;

    let top_ngrams = matrix
        .top_k(top_k)
        .into_iter()
        .map(|(ngram, frequency)| NgramFrequency {
            ngram,
            frequency
        })
        .collect();

    Ok(PatternReport {
        ngram_size,
        total_unique_ngrams: matrix.num_terms(),
        entropy,
        jaccard_similarity,
        top_ngrams
    })
}
