use colored::Colorize;

use crate::{
    complexity::ComplexityRecord,
    keywords::complexity_vocabulary,
    patterns::PatternReport
};

/// Output format for results
#[derive(Debug, Clone, Copy, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Csv,
    Json,
    Yaml
}

/// Output options
#[derive(Debug, Clone)]
pub struct OutputOptions {
    pub format:  OutputFormat,
    pub colored: bool
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            format:  OutputFormat::Text,
            colored: true
        }
    }
}

/// Format the complexity profile based on output options.
///
/// The CSV rendering carries the fixed column schema (`sql_index`,
/// `tokens`, `join_count`, `total_keyword_count`, then one
/// `keyword:<label>` column per vocabulary keyword) and always includes
/// the header row, even for an empty corpus.
pub fn format_complexity(records: &[ComplexityRecord], opts: &OutputOptions) -> String {
    match opts.format {
        OutputFormat::Csv => complexity_csv(records).unwrap_or_default(),
        OutputFormat::Json => serde_json::to_string_pretty(records).unwrap_or_default(),
        OutputFormat::Yaml => serde_yaml::to_string(records).unwrap_or_default(),
        OutputFormat::Text => complexity_text(records, opts)
    }
}

/// Format the pattern-analysis summary based on output options
pub fn format_patterns(report: &PatternReport, opts: &OutputOptions) -> String {
    match opts.format {
        OutputFormat::Csv => patterns_csv(report).unwrap_or_default(),
        OutputFormat::Json => serde_json::to_string_pretty(report).unwrap_or_default(),
        OutputFormat::Yaml => serde_yaml::to_string(report).unwrap_or_default(),
        OutputFormat::Text => patterns_text(report, opts)
    }
}

fn complexity_csv(records: &[ComplexityRecord]) -> Option<String> {
    let vocabulary = complexity_vocabulary();
    let mut writer = csv::Writer::from_writer(Vec::new());

    let mut header: Vec<String> = vec![
        String::from("sql_index"),
        String::from("tokens"),
        String::from("join_count"),
        String::from("total_keyword_count"),
    ];
    header.extend(vocabulary.iter().map(|keyword| format!("keyword:{}", keyword)));
    writer.write_record(&header).ok()?;

    for record in records {
        let mut row: Vec<String> = vec![
            record.sql_index.to_string(),
            record.tokens.to_string(),
            record.join_count.to_string(),
            record.total_keyword_count.to_string(),
        ];
        row.extend(record.keyword_counts.values().map(|count| count.to_string()));
        writer.write_record(&row).ok()?;
    }

    String::from_utf8(writer.into_inner().ok()?).ok()
}

fn patterns_csv(report: &PatternReport) -> Option<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["ngram", "frequency"]).ok()?;
    for entry in &report.top_ngrams {
        writer
            .write_record([entry.ngram.as_str(), &entry.frequency.to_string()])
            .ok()?;
    }
    String::from_utf8(writer.into_inner().ok()?).ok()
}

fn complexity_text(records: &[ComplexityRecord], opts: &OutputOptions) -> String {
    let mut summary = String::from("SQL Complexity Profile:\n\n");

    for record in records {
        let header = format!("Query #{}:", record.sql_index);
        if opts.colored {
            summary.push_str(&header.cyan().bold().to_string());
        } else {
            summary.push_str(&header);
        }
        summary.push('\n');
        summary.push_str(&format!("  tokens: {}\n", record.tokens));
        summary.push_str(&format!("  joins: {}\n", record.join_count));

        let nonzero: Vec<String> = record
            .keyword_counts
            .iter()
            .filter(|(_, count)| **count > 0)
            .map(|(keyword, count)| format!("{}={}", keyword, count))
            .collect();
        if nonzero.is_empty() {
            summary.push_str(&format!("  keywords: {}\n", record.total_keyword_count));
        } else {
            summary.push_str(&format!(
                "  keywords: {} ({})\n",
                record.total_keyword_count,
                nonzero.join(", ")
            ));
        }
        summary.push('\n');
    }

    summary
}

fn patterns_text(report: &PatternReport, opts: &OutputOptions) -> String {
    let mut output = String::new();
    if opts.colored {
        output.push_str(&"=== SQL Pattern Analysis ===\n\n".bold().to_string());
    } else {
        output.push_str("=== SQL Pattern Analysis ===\n\n");
    }

    output.push_str(&format!("n-gram size: {}\n", report.ngram_size));
    output.push_str(&format!("Total unique n-grams: {}\n", report.total_unique_ngrams));
    output.push_str(&format!("Entropy: {:.4}\n", report.entropy));
    output.push_str(&format!(
        "Average pairwise Jaccard similarity: {:.4}\n",
        report.jaccard_similarity
    ));

    if !report.top_ngrams.is_empty() {
        output.push_str("\nTop n-grams:\n");
        for entry in &report.top_ngrams {
            output.push_str(&format!("  {:<40} {}\n", entry.ngram, entry.frequency));
        }
    }

    output
}
