use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// The first lexical error found in a source text. Scanning stops at it.
#[derive(Error, Debug, Diagnostic)]
pub enum ScanError {
    #[error("invalid character '{ch}' at line {line}")]
    #[diagnostic(code(applex::scan::invalid_character))]
    InvalidCharacter {
        ch: char,
        line: usize,
        #[label("not part of the language")]
        span: SourceSpan,
        #[source_code]
        src: NamedSource<String>,
    },

    #[error("unclosed literal at line {line}")]
    #[diagnostic(
        code(applex::scan::unterminated_literal),
        help("close the literal before the end of its line")
    )]
    UnterminatedLiteral {
        line: usize,
        #[label("literal starts here")]
        span: SourceSpan,
        #[source_code]
        src: NamedSource<String>,
    },

    #[error("non-ASCII character '{ch}' in literal at line {line}")]
    #[diagnostic(code(applex::scan::non_ascii_in_literal))]
    NonAsciiInLiteral {
        ch: char,
        line: usize,
        #[label("here")]
        span: SourceSpan,
        #[source_code]
        src: NamedSource<String>,
    },

    #[error("'{ch}' must be followed by '{expected}' at line {line}")]
    #[diagnostic(code(applex::scan::malformed_operator))]
    MalformedCompoundOperator {
        ch: char,
        expected: char,
        line: usize,
        #[label("incomplete operator")]
        span: SourceSpan,
        #[source_code]
        src: NamedSource<String>,
    },
}

fn unnamed() -> NamedSource<String> {
    NamedSource::new("input", String::new())
}

impl ScanError {
    pub fn invalid_character(ch: char, line: usize, offset: usize) -> Self {
        Self::InvalidCharacter {
            ch,
            line,
            span: SourceSpan::new(offset.into(), ch.len_utf8()),
            src: unnamed(),
        }
    }

    pub fn unterminated_literal(line: usize, offset: usize, len: usize) -> Self {
        Self::UnterminatedLiteral {
            line,
            span: SourceSpan::new(offset.into(), len),
            src: unnamed(),
        }
    }

    pub fn non_ascii_in_literal(ch: char, line: usize, offset: usize) -> Self {
        Self::NonAsciiInLiteral {
            ch,
            line,
            span: SourceSpan::new(offset.into(), ch.len_utf8()),
            src: unnamed(),
        }
    }

    /// A lone `:`, `|` or `&`.
    pub fn malformed_operator(ch: char, expected: char, line: usize, offset: usize) -> Self {
        Self::MalformedCompoundOperator {
            ch,
            expected,
            line,
            span: SourceSpan::new(offset.into(), 1),
            src: unnamed(),
        }
    }

    /// 1-based line the error was found on.
    pub fn line(&self) -> usize {
        match self {
            Self::InvalidCharacter { line, .. }
            | Self::UnterminatedLiteral { line, .. }
            | Self::NonAsciiInLiteral { line, .. }
            | Self::MalformedCompoundOperator { line, .. } => *line,
        }
    }

    pub fn span(&self) -> SourceSpan {
        match self {
            Self::InvalidCharacter { span, .. }
            | Self::UnterminatedLiteral { span, .. }
            | Self::NonAsciiInLiteral { span, .. }
            | Self::MalformedCompoundOperator { span, .. } => *span,
        }
    }

    /// Attach source code for fancy miette diagnostics
    pub fn with_source_code(self, name: impl Into<String>, source: impl Into<String>) -> Self {
        let named = NamedSource::new(name.into(), source.into());
        match self {
            Self::InvalidCharacter { ch, line, span, .. } => Self::InvalidCharacter {
                ch,
                line,
                span,
                src: named,
            },
            Self::UnterminatedLiteral { line, span, .. } => Self::UnterminatedLiteral {
                line,
                span,
                src: named,
            },
            Self::NonAsciiInLiteral { ch, line, span, .. } => Self::NonAsciiInLiteral {
                ch,
                line,
                span,
                src: named,
            },
            Self::MalformedCompoundOperator {
                ch,
                expected,
                line,
                span,
                ..
            } => Self::MalformedCompoundOperator {
                ch,
                expected,
                line,
                span,
                src: named,
            },
        }
    }
}
