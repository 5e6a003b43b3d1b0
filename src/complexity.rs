//! Per-query complexity profiling.
//!
//! Works on the full merged token sequence, before any keyword
//! filtering, so `tokens` counts everything the lexer kept. Queries the
//! lexer could not handle produce all-zero records and never abort the
//! batch.

use compact_str::CompactString;
use indexmap::IndexMap;
use rayon::prelude::*;
use serde::Serialize;

use crate::{
    keywords::{CompoundTable, JOIN_TYPES, Vocabulary, complexity_vocabulary},
    lexer::{SqlDialect, tokenize}
};

/// Complexity metrics for one query
#[derive(Debug, Clone, Serialize)]
pub struct ComplexityRecord {
    /// 0-based position in the input list
    pub sql_index:           usize,
    /// Merged token count, pre-filter
    pub tokens:              usize,
    /// Occurrences of INNER/LEFT/RIGHT/FULL JOIN
    pub join_count:          u32,
    /// Sum of all per-keyword counts
    pub total_keyword_count: u32,
    /// One count per vocabulary keyword, in column order
    pub keyword_counts:      IndexMap<CompactString, u32>
}

/// Profile every query, one record per query in input order
pub fn profile_queries(queries: &[String], dialect: SqlDialect) -> Vec<ComplexityRecord> {
    let table = CompoundTable::default();
    let vocabulary = complexity_vocabulary();

    queries
        .par_iter()
        .enumerate()
        .map(|(index, sql)| profile_query(index, sql, dialect, &table, &vocabulary))
        .collect()
}

fn profile_query(
    sql_index: usize,
    sql: &str,
    dialect: SqlDialect,
    table: &CompoundTable,
    vocabulary: &Vocabulary
) -> ComplexityRecord {
    let merged = table.merge(&tokenize(sql, dialect));

    let mut keyword_counts: IndexMap<CompactString, u32> = vocabulary
        .iter()
        .map(|keyword| (CompactString::from(keyword), 0))
        .collect();

    // join_count covers all four join types, including the two that are
    // not vocabulary columns
    let mut join_count = 0u32;
    for token in &merged {
        if let Some(count) = keyword_counts.get_mut(token.as_str()) {
            *count += 1;
        }
        if JOIN_TYPES.contains(&token.as_str()) {
            join_count += 1;
        }
    }

    let total_keyword_count = keyword_counts.values().sum();

    ComplexityRecord {
        sql_index,
        tokens: merged.len(),
        join_count,
        total_keyword_count,
        keyword_counts
    }
}
