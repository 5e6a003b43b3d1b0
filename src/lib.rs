//! # SQL Pattern Analyzer Library
//!
//! Structural analysis of SQL query corpora: keyword n-gram statistics
//! and per-query complexity profiles.

pub mod cli;
pub mod complexity;
pub mod config;
pub mod corpus;
pub mod error;
pub mod keywords;
pub mod lexer;
pub mod ngram;
pub mod output;
pub mod patterns;
pub mod stats;
