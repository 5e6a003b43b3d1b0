use compact_str::CompactString;
use sqlparser::{
    dialect::{
        ClickHouseDialect, Dialect, GenericDialect, MySqlDialect, PostgreSqlDialect, SQLiteDialect
    },
    tokenizer::{Token, Tokenizer}
};

/// SQL dialect for lexing
#[derive(Debug, Clone, Copy, Default)]
#[non_exhaustive]
pub enum SqlDialect {
    #[default]
    Generic,
    MySQL,
    PostgreSQL,
    SQLite,
    ClickHouse
}

impl SqlDialect {
    /// Convert to sqlparser dialect for lexing
    pub fn into_lexer_dialect(self) -> Box<dyn Dialect> {
        match self {
            Self::Generic => Box::new(GenericDialect {}),
            Self::MySQL => Box::new(MySqlDialect {}),
            Self::PostgreSQL => Box::new(PostgreSqlDialect {}),
            Self::SQLite => Box::new(SQLiteDialect {}),
            Self::ClickHouse => Box::new(ClickHouseDialect {})
        }
    }
}

/// Lex a single SQL string into normalized tokens.
///
/// Tokens are uppercased and trimmed, in source order. Whitespace and
/// punctuation-only tokens are dropped; operators, identifiers, and
/// quoted literals each survive as a single token.
///
/// A string that cannot be lexed yields an empty sequence rather than
/// an error: callers treat it as a valid, low-information query.
pub fn tokenize(sql: &str, dialect: SqlDialect) -> Vec<CompactString> {
    let lexer_dialect = dialect.into_lexer_dialect();
    let tokens = match Tokenizer::new(lexer_dialect.as_ref(), sql).tokenize() {
        Ok(tokens) => tokens,
        Err(_) => return Vec::new()
    };

    tokens
        .iter()
        .filter(|t| !is_skippable(t))
        .map(|t| CompactString::from(t.to_string().trim().to_uppercase()))
        .filter(|t| !t.is_empty())
        .collect()
}

/// Whitespace and standalone punctuation carry no structural signal
fn is_skippable(token: &Token) -> bool {
    matches!(
        token,
        Token::EOF
            | Token::Whitespace(_)
            | Token::Comma
            | Token::SemiColon
            | Token::Period
            | Token::Colon
            | Token::DoubleColon
            | Token::LParen
            | Token::RParen
            | Token::LBracket
            | Token::RBracket
            | Token::LBrace
            | Token::RBrace
    )
}
