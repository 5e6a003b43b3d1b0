//! Corpus-level statistics over the document-term matrix.
//!
//! Both routines are explicit numeric computations over plain count
//! vectors; corpus-level preconditions surface as typed errors instead
//! of NaN results.

use crate::error::{AppResult, degenerate_input_error, insufficient_data_error};

/// Shannon entropy (natural-log units) of the normalized frequency
/// vector.
///
/// Fails with a degenerate-input error when total frequency is zero,
/// since the probabilities are undefined. Zero-frequency columns do not
/// contribute.
pub fn shannon_entropy(frequencies: &[u64]) -> AppResult<f64> {
    let total: u64 = frequencies.iter().sum();
    if total == 0 {
        return Err(degenerate_input_error());
    }

    let total = total as f64;
    Ok(frequencies
        .iter()
        .filter(|&&f| f > 0)
        .map(|&f| {
            let p = f as f64 / total;
            -p * p.ln()
        })
        .sum())
}

/// Arithmetic mean of pairwise Jaccard similarity over all unordered
/// pairs of distinct rows, each row binarized to its nonzero column
/// set.
///
/// Requires at least two rows. Two all-zero rows compare as similarity
/// 0 (the empty-set convention this corpus analysis has always used).
pub fn average_jaccard(rows: &[Vec<u32>]) -> AppResult<f64> {
    if rows.len() < 2 {
        return Err(insufficient_data_error(rows.len()));
    }

    let mut sum = 0.0;
    let mut pairs = 0u64;
    for i in 0..rows.len() {
        for j in (i + 1)..rows.len() {
            sum += jaccard(&rows[i], &rows[j]);
            pairs += 1;
        }
    }

    Ok(sum / pairs as f64)
}

/// Intersection-over-union of two binarized count vectors
pub fn jaccard(a: &[u32], b: &[u32]) -> f64 {
    let mut intersection = 0u64;
    let mut union = 0u64;
    for (x, y) in a.iter().zip(b) {
        let x = *x > 0;
        let y = *y > 0;
        if x && y {
            intersection += 1;
        }
        if x || y {
            union += 1;
        }
    }

    if union == 0 {
        0.0
    } else {
        intersection as f64 / union as f64
    }
}
