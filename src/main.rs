//! # SQL Pattern Analyzer
//!
//! Structural analysis of SQL query corpora.
//!
//! `sql-pattern-analyzer` reads a flat list of SQL queries (one per
//! line, first tab-separated field) and runs two independent analysis
//! paths over the same lexer and compound-keyword merger:
//!
//! 1. **Complexity profiling** - per-query token counts, join counts,
//!    and keyword occurrence counts, emitted as a fixed-schema table in
//!    input order.
//!
//! 2. **Pattern analysis** - keyword-only projections are windowed into
//!    n-grams, vectorized into a queries-by-n-grams count matrix, and
//!    summarized as a frequency distribution with Shannon entropy,
//!    average pairwise Jaccard similarity, and a top-K table.
//!
//! Per-query work is parallelized with [`rayon`]; the corpus-wide
//! aggregation is a deterministic reduction, so a fixed input always
//! yields identical results.
//!
//! # Quick Start
//!
//! ```bash
//! # Complexity profile as CSV
//! sql-pattern-analyzer complexity -q dev.sql -o analysis.csv
//!
//! # Pattern summary with a 3-token window
//! sql-pattern-analyzer patterns -q dev.sql -n 3 -k 20
//!
//! # Stream queries from stdin
//! echo "SELECT * FROM users" | sql-pattern-analyzer complexity -q -
//! ```
//!
//! # Configuration
//!
//! Configuration is loaded from (in order of precedence):
//!
//! 1. Command-line arguments
//! 2. Environment variables (`SQL_PATTERN_NGRAM_SIZE`, `SQL_PATTERN_TOP_K`)
//! 3. `.sql-pattern-analyzer.toml` in current directory
//! 4. `~/.config/sql-pattern-analyzer/config.toml`
//!
//! # Output Formats
//!
//! - `csv` - fixed-schema table (complexity default)
//! - `text` - human-readable colored summary (patterns default)
//! - `json` / `yaml` - structured output for programmatic processing
//!
//! # Modules
//!
//! - `lexer` - SQL-aware tokenization
//! - `keywords` - compound keyword merging and vocabularies
//! - `ngram` - n-gram extraction and vectorization
//! - `stats` - entropy and Jaccard similarity
//! - `complexity` - per-query profiling
//! - `patterns` - corpus-wide pattern analysis

use std::{
    fs,
    io::{self, Read},
    path::Path,
    process
};

use clap::Parser;
use sql_pattern_analyzer::{
    cli::{Cli, Commands, Dialect, Format},
    complexity::profile_queries,
    config::Config,
    corpus::extract_queries,
    error::{AppResult, file_read_error, file_write_error},
    lexer::SqlDialect,
    output::{OutputFormat, OutputOptions, format_complexity, format_patterns},
    patterns::analyze_patterns
};

fn main() {
    match run() {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn run() -> AppResult<i32> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Complexity {
            queries,
            output,
            dialect,
            output_format,
            no_color
        } => {
            let corpus = read_corpus(&queries)?;
            let records = profile_queries(&corpus, into_sql_dialect(dialect));
            let opts = output_options(output_format, no_color);
            emit(&format_complexity(&records, &opts), output.as_deref())?;
            Ok(0)
        }
        Commands::Patterns {
            queries,
            output,
            ngram_size,
            top_k,
            dialect,
            output_format,
            no_color
        } => {
            let corpus = read_corpus(&queries)?;
            let ngram_size = ngram_size.unwrap_or(config.analysis.ngram_size);
            let top_k = top_k.unwrap_or(config.analysis.top_k);
            let report = analyze_patterns(&corpus, ngram_size, top_k, into_sql_dialect(dialect))?;
            let opts = output_options(output_format, no_color);
            emit(&format_patterns(&report, &opts), output.as_deref())?;
            Ok(0)
        }
    }
}

/// Read the query list from a file, or stdin when the path is "-"
fn read_corpus(path: &Path) -> AppResult<Vec<String>> {
    let text = if path.to_str() == Some("-") {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| file_read_error("stdin", e))?;
        buffer
    } else {
        fs::read_to_string(path).map_err(|e| file_read_error(&path.display().to_string(), e))?
    };

    Ok(extract_queries(&text))
}

fn emit(content: &str, output: Option<&Path>) -> AppResult<()> {
    match output {
        Some(path) => fs::write(path, content)
            .map_err(|e| file_write_error(&path.display().to_string(), e)),
        None => {
            println!("{}", content);
            Ok(())
        }
    }
}

fn into_sql_dialect(dialect: Dialect) -> SqlDialect {
    match dialect {
        Dialect::Generic => SqlDialect::Generic,
        Dialect::Mysql => SqlDialect::MySQL,
        Dialect::Postgresql => SqlDialect::PostgreSQL,
        Dialect::Sqlite => SqlDialect::SQLite,
        Dialect::Clickhouse => SqlDialect::ClickHouse
    }
}

fn output_options(format: Format, no_color: bool) -> OutputOptions {
    OutputOptions {
        format:  match format {
            Format::Csv => OutputFormat::Csv,
            Format::Json => OutputFormat::Json,
            Format::Yaml => OutputFormat::Yaml,
            Format::Text => OutputFormat::Text
        },
        colored: !no_color
    }
}
