//! Configuration loading and management.
//!
//! Configuration is loaded from multiple sources with the following
//! precedence (highest to lowest):
//!
//! 1. Command-line arguments
//! 2. Environment variables
//! 3. `.sql-pattern-analyzer.toml` in current directory
//! 4. `~/.config/sql-pattern-analyzer/config.toml`
//! 5. Default values
//!
//! # Configuration File Format
//!
//! ```toml
//! [analysis]
//! ngram_size = 5
//! top_k = 10
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Description |
//! |----------|-------------|
//! | `SQL_PATTERN_NGRAM_SIZE` | n-gram window size |
//! | `SQL_PATTERN_TOP_K` | size of the top-frequency table |

use std::{env, fs, path::PathBuf};

use serde::Deserialize;

use crate::error::{AppResult, config_error};

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub analysis: AnalysisConfig
}

/// Pattern-analysis configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    /// n-gram window size
    #[serde(default = "default_ngram_size")]
    pub ngram_size: usize,
    /// Size of the top-frequency n-gram table
    #[serde(default = "default_top_k")]
    pub top_k:      usize
}

fn default_ngram_size() -> usize {
    5
}

fn default_top_k() -> usize {
    10
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            ngram_size: default_ngram_size(),
            top_k:      default_top_k()
        }
    }
}

impl Config {
    /// Load configuration from file and environment
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables
    /// 2. Config file in current directory (.sql-pattern-analyzer.toml)
    /// 3. Config file in home directory
    ///    (~/.config/sql-pattern-analyzer/config.toml)
    /// 4. Default values
    pub fn load() -> AppResult<Self> {
        let mut config = Self::default();

        // Try to load from home directory config
        if let Some(home) = env::var_os("HOME") {
            let home_config = PathBuf::from(home)
                .join(".config")
                .join("sql-pattern-analyzer")
                .join("config.toml");

            if home_config.exists() {
                config = Self::from_file(&home_config)?;
            }
        }

        // Try to load from current directory config (overrides home config)
        let local_config = PathBuf::from(".sql-pattern-analyzer.toml");
        if local_config.exists() {
            config = Self::from_file(&local_config)?;
        }

        // Override with environment variables
        if let Ok(size) = env::var("SQL_PATTERN_NGRAM_SIZE") {
            config.analysis.ngram_size = size.parse().map_err(|_| {
                config_error(format!("Invalid SQL_PATTERN_NGRAM_SIZE value: {}", size))
            })?;
        }

        if let Ok(k) = env::var("SQL_PATTERN_TOP_K") {
            config.analysis.top_k = k
                .parse()
                .map_err(|_| config_error(format!("Invalid SQL_PATTERN_TOP_K value: {}", k)))?;
        }

        Ok(config)
    }

    fn from_file(path: &PathBuf) -> AppResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| config_error(format!("Failed to read config file: {}", e)))?;
        toml::from_str(&content).map_err(|e| config_error(format!("Invalid config file: {}", e)))
    }
}
