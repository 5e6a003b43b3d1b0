use sql_pattern_analyzer::cli::{Dialect, Format};

#[test]
fn test_dialect_variants() {
    let _generic = Dialect::Generic;
    let _mysql = Dialect::Mysql;
    let _postgresql = Dialect::Postgresql;
    let _sqlite = Dialect::Sqlite;
    let _clickhouse = Dialect::Clickhouse;
}

#[test]
fn test_format_variants() {
    let _csv = Format::Csv;
    let _json = Format::Json;
    let _yaml = Format::Yaml;
    let _text = Format::Text;
}

#[test]
fn test_dialect_clone() {
    let dialect = Dialect::Mysql;
    let _cloned = dialect.clone();
}

#[test]
fn test_format_debug() {
    let format = Format::Csv;
    let debug = format!("{:?}", format);
    assert!(debug.contains("Csv"));
}
