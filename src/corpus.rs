//! Query corpus extraction.
//!
//! The input format is line-oriented: one query per line, fields
//! tab-separated as `<SQL query>\t<dataset label>`. Only the first
//! field matters here; trailing fields are collaborator metadata.

/// Extract SQL query strings, in file order, skipping blank lines
pub fn extract_queries(text: &str) -> Vec<String> {
    text.lines()
        .filter_map(|line| {
            let line = line.trim();
            if line.is_empty() {
                return None;
            }
            Some(line.split('\t').next().unwrap_or(line).to_string())
        })
        .collect()
}
