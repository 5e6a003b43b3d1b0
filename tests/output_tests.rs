use sql_pattern_analyzer::{
    complexity::profile_queries,
    lexer::SqlDialect,
    output::{OutputFormat, OutputOptions, format_complexity, format_patterns},
    patterns::analyze_patterns
};

const EXPECTED_HEADER: &str = "sql_index,tokens,join_count,total_keyword_count,\
keyword:SELECT,keyword:FROM,keyword:INNER JOIN,keyword:LEFT JOIN,keyword:WHERE,\
keyword:GROUP BY,keyword:HAVING,keyword:ORDER BY,keyword:LIMIT,keyword:OFFSET,\
keyword:DISTINCT,keyword:AS,keyword:IN,keyword:BETWEEN,keyword:LIKE,keyword:IS NULL,\
keyword:AND,keyword:OR,keyword:NOT,keyword:EXISTS,keyword:CASE";

fn opts(format: OutputFormat) -> OutputOptions {
    OutputOptions {
        format,
        colored: false
    }
}

#[test]
fn test_complexity_csv_header() {
    let records = profile_queries(&[String::from("SELECT a FROM t")], SqlDialect::Generic);
    let csv = format_complexity(&records, &opts(OutputFormat::Csv));

    let header = csv.lines().next().unwrap();
    assert_eq!(header, EXPECTED_HEADER);
}

#[test]
fn test_complexity_csv_empty_corpus_is_header_only() {
    let csv = format_complexity(&[], &opts(OutputFormat::Csv));

    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0], EXPECTED_HEADER);
}

#[test]
fn test_complexity_csv_row_values() {
    let records = profile_queries(&[String::from("SELECT a FROM t")], SqlDialect::Generic);
    let csv = format_complexity(&records, &opts(OutputFormat::Csv));

    let row = csv.lines().nth(1).unwrap();
    let fields: Vec<&str> = row.split(',').collect();
    assert_eq!(fields[0], "0"); // sql_index
    assert_eq!(fields[1], "4"); // tokens
    assert_eq!(fields[2], "0"); // join_count
    assert_eq!(fields[3], "2"); // total_keyword_count
    assert_eq!(fields[4], "1"); // keyword:SELECT
    assert_eq!(fields[5], "1"); // keyword:FROM
    assert_eq!(fields[6], "0"); // keyword:INNER JOIN
}

#[test]
fn test_complexity_csv_one_row_per_query_in_order() {
    let queries = vec![
        String::from("SELECT a FROM t"),
        String::from("SELECT b FROM u WHERE x > 1"),
    ];
    let records = profile_queries(&queries, SqlDialect::Generic);
    let csv = format_complexity(&records, &opts(OutputFormat::Csv));

    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with("0,"));
    assert!(lines[2].starts_with("1,"));
}

#[test]
fn test_complexity_json_round_trips() {
    let records = profile_queries(&[String::from("SELECT a FROM t")], SqlDialect::Generic);
    let json = format_complexity(&records, &opts(OutputFormat::Json));

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value[0]["tokens"], 4);
    assert_eq!(value[0]["keyword_counts"]["SELECT"], 1);
}

#[test]
fn test_complexity_yaml() {
    let records = profile_queries(&[String::from("SELECT a FROM t")], SqlDialect::Generic);
    let yaml = format_complexity(&records, &opts(OutputFormat::Yaml));
    assert!(yaml.contains("tokens: 4"));
}

#[test]
fn test_complexity_text_summary() {
    let records = profile_queries(&[String::from("SELECT a FROM t")], SqlDialect::Generic);
    let text = format_complexity(&records, &opts(OutputFormat::Text));

    assert!(text.contains("Query #0:"));
    assert!(text.contains("tokens: 4"));
    assert!(text.contains("SELECT=1"));
}

#[test]
fn test_patterns_text_summary() {
    let queries = vec![
        String::from("SELECT a FROM t WHERE x > 1"),
        String::from("SELECT b FROM u WHERE y > 2"),
    ];
    let report = analyze_patterns(&queries, 2, 10, SqlDialect::Generic).unwrap();
    let text = format_patterns(&report, &opts(OutputFormat::Text));

    assert!(text.contains("=== SQL Pattern Analysis ==="));
    assert!(text.contains("n-gram size: 2"));
    assert!(text.contains("Entropy:"));
    assert!(text.contains("Average pairwise Jaccard similarity:"));
    assert!(text.contains("SELECT FROM"));
}

#[test]
fn test_patterns_json() {
    let queries = vec![
        String::from("SELECT a FROM t WHERE x > 1"),
        String::from("SELECT b FROM u WHERE y > 2"),
    ];
    let report = analyze_patterns(&queries, 2, 10, SqlDialect::Generic).unwrap();
    let json = format_patterns(&report, &opts(OutputFormat::Json));

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["ngram_size"], 2);
    assert!(value["top_ngrams"].is_array());
}

#[test]
fn test_patterns_csv_is_frequency_table() {
    let queries = vec![
        String::from("SELECT a FROM t WHERE x > 1"),
        String::from("SELECT b FROM u WHERE y > 2"),
    ];
    let report = analyze_patterns(&queries, 2, 10, SqlDialect::Generic).unwrap();
    let csv = format_patterns(&report, &opts(OutputFormat::Csv));

    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "ngram,frequency");
    assert!(lines.len() > 1);
}
