use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, strum::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    Keyword,
    Identifier,
    Constant,
    Symbol,
    Relop,
    Addop,
    Mulop,
    AssignOp,
    Literal,
}

/// Reserved words of the language.
pub const KEYWORDS: [&str; 14] = [
    "app", "var", "integer", "real", "init", "return", "if", "then", "else", "end", "repeat",
    "until", "read", "write",
];

/// Operators seeded into every symbol table alongside the keywords.
pub const OPERATORS: [(&str, TokenKind); 12] = [
    ("=", TokenKind::Relop),
    (">", TokenKind::Relop),
    (">=", TokenKind::Relop),
    ("<", TokenKind::Relop),
    ("<=", TokenKind::Relop),
    ("!=", TokenKind::Relop),
    ("+", TokenKind::Addop),
    ("-", TokenKind::Addop),
    ("||", TokenKind::Addop),
    ("*", TokenKind::Mulop),
    ("/", TokenKind::Mulop),
    ("&&", TokenKind::Mulop),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub offset: usize,
    pub len: usize,
}

impl Span {
    pub fn new(offset: usize, len: usize) -> Self {
        Self { offset, len }
    }
}

impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        miette::SourceSpan::new(span.offset.into(), span.len)
    }
}

/// A classified lexeme. `line` is the 1-based line the lexeme starts on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: usize,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
            span,
        }
    }

    /// Keywords, identifiers and constants must be kept apart by whitespace.
    pub fn is_word(&self) -> bool {
        matches!(
            self.kind,
            TokenKind::Keyword | TokenKind::Identifier | TokenKind::Constant
        )
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.text)
    }
}
