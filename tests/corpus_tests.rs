use sql_pattern_analyzer::corpus::extract_queries;

#[test]
fn test_extract_tab_separated_first_field() {
    let text = "SELECT a FROM t\tspider\nSELECT b FROM u\tbird\n";
    let queries = extract_queries(text);

    assert_eq!(queries, ["SELECT a FROM t", "SELECT b FROM u"]);
}

#[test]
fn test_extract_line_without_tab() {
    let queries = extract_queries("SELECT a FROM t\n");
    assert_eq!(queries, ["SELECT a FROM t"]);
}

#[test]
fn test_extract_skips_blank_lines() {
    let text = "SELECT a FROM t\tx\n\n   \nSELECT b FROM u\ty\n";
    let queries = extract_queries(text);

    assert_eq!(queries.len(), 2);
}

#[test]
fn test_extract_preserves_order() {
    let text = "SELECT 1\ta\nSELECT 2\tb\nSELECT 3\tc";
    let queries = extract_queries(text);

    assert_eq!(queries, ["SELECT 1", "SELECT 2", "SELECT 3"]);
}

#[test]
fn test_extract_ignores_extra_fields() {
    let queries = extract_queries("SELECT a FROM t\tlabel\textra\tmore\n");
    assert_eq!(queries, ["SELECT a FROM t"]);
}

#[test]
fn test_extract_empty_input() {
    assert!(extract_queries("").is_empty());
}

#[test]
fn test_extract_trims_surrounding_whitespace() {
    let queries = extract_queries("  SELECT a FROM t\tx  \n");
    assert_eq!(queries[0], "SELECT a FROM t");
}
