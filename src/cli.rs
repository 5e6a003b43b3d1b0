use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// SQL Pattern Analyzer - Structural analysis of SQL query corpora
#[derive(Parser, Debug)]
#[command(name = "sql-pattern-analyzer")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Profile per-query complexity (token, join, and keyword counts)
    Complexity {
        /// Path to queries file, one query per line (use - for stdin)
        #[arg(short, long)]
        queries: PathBuf,

        /// Write the table to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// SQL dialect for lexing
        #[arg(long, value_enum, default_value = "generic")]
        dialect: Dialect,

        /// Output format
        #[arg(short = 'f', long, value_enum, default_value = "csv")]
        output_format: Format,

        /// Disable colored output
        #[arg(long)]
        no_color: bool
    },

    /// Analyze corpus-wide keyword n-gram patterns
    Patterns {
        /// Path to queries file, one query per line (use - for stdin)
        #[arg(short, long)]
        queries: PathBuf,

        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// n-gram window size
        #[arg(short = 'n', long)]
        ngram_size: Option<usize>,

        /// Number of top n-grams to report
        #[arg(short = 'k', long)]
        top_k: Option<usize>,

        /// SQL dialect for lexing
        #[arg(long, value_enum, default_value = "generic")]
        dialect: Dialect,

        /// Output format
        #[arg(short = 'f', long, value_enum, default_value = "text")]
        output_format: Format,

        /// Disable colored output
        #[arg(long)]
        no_color: bool
    }
}

#[derive(Debug, Clone, ValueEnum)]
pub enum Dialect {
    Generic,
    Mysql,
    Postgresql,
    Sqlite,
    Clickhouse
}

#[derive(Debug, Clone, ValueEnum)]
pub enum Format {
    Csv,
    Json,
    Yaml,
    Text
}
