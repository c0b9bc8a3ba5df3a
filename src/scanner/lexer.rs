use std::iter::FusedIterator;

use winnow::combinator::{alt, opt};
use winnow::prelude::*;
use winnow::stream::{LocatingSlice, Location};
use winnow::token::{any, one_of, take_till, take_while};

use crate::error::ScanError;
use crate::scanner::symbols::SymbolTable;
use crate::scanner::token::{Span, Token, TokenKind};

type Input<'a> = LocatingSlice<&'a str>;

/// Blank characters other than newline. No-break spaces are not blanks and
/// neither is U+0085; the information separators U+001C..U+001F are.
fn is_blank(c: char) -> bool {
    match c {
        '\n' | '\u{85}' | '\u{A0}' | '\u{2007}' | '\u{202F}' => false,
        '\u{1C}'..='\u{1F}' => true,
        c => c.is_whitespace(),
    }
}

fn is_word_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_word_continue(c: char) -> bool {
    c.is_alphabetic() || c.is_ascii_digit() || c == '_'
}

/// Skips blanks and `%` comments, returning how many newlines were consumed.
fn trivia(input: &mut Input<'_>) -> ModalResult<usize> {
    let mut newlines = 0;
    loop {
        if input.starts_with('\n') {
            '\n'.void().parse_next(input)?;
            newlines += 1;
        } else if input.starts_with('%') {
            take_till(0.., '\n').void().parse_next(input)?;
        } else if input.starts_with(is_blank) {
            take_while(1.., is_blank).void().parse_next(input)?;
        } else {
            break;
        }
    }
    Ok(newlines)
}

fn word<'a>(input: &mut Input<'a>) -> ModalResult<&'a str> {
    (
        any.verify(|c: &char| is_word_start(*c)),
        take_while(0.., is_word_continue),
    )
        .take()
        .parse_next(input)
}

/// Digits and dots, unvalidated: `1.2.3` and `4.` are single constants.
fn constant<'a>(input: &mut Input<'a>) -> ModalResult<&'a str> {
    (
        any.verify(|c: &char| c.is_ascii_digit()),
        take_while(0.., |c: char| c.is_ascii_digit() || c == '.'),
    )
        .take()
        .parse_next(input)
}

fn operator<'a>(input: &mut Input<'a>) -> ModalResult<(TokenKind, &'a str)> {
    alt((
        ":=".value(TokenKind::AssignOp),
        alt((">=", "<=", "!=", "==", ">", "<", "!", "=")).value(TokenKind::Relop),
        alt(("||", "+", "-")).value(TokenKind::Addop),
        alt(("&&", "*", "/")).value(TokenKind::Mulop),
        one_of(['(', ')', ';', ',']).value(TokenKind::Symbol),
    ))
    .with_taken()
    .parse_next(input)
}

/// An opening brace and everything up to the closing brace, a newline, a
/// character above 0xFF or the end of input. The closing brace is included
/// when present.
fn literal_text<'a>(input: &mut Input<'a>) -> ModalResult<&'a str> {
    (
        '{',
        take_till(0.., |c: char| c == '}' || c == '\n' || u32::from(c) > 0xFF),
        opt('}'),
    )
        .take()
        .parse_next(input)
}

/// Converts source text into tokens one at a time.
///
/// The scanner owns its cursor and symbol table. The first error ends the
/// scan: afterwards every call reports end of input.
pub struct Scanner<'a> {
    source: &'a str,
    input: Input<'a>,
    line: usize,
    symbols: SymbolTable,
    finished: bool,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self::with_symbols(source, SymbolTable::default())
    }

    /// Scan with a caller-supplied table of reserved words and operators.
    pub fn with_symbols(source: &'a str, symbols: SymbolTable) -> Self {
        Self {
            source,
            input: LocatingSlice::new(source),
            line: 1,
            symbols,
            finished: false,
        }
    }

    /// Current 1-based line of the cursor.
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn into_symbols(self) -> SymbolTable {
        self.symbols
    }

    /// Scan the next token. `Ok(None)` signals end of input.
    pub fn next_token(&mut self) -> Result<Option<Token>, ScanError> {
        if self.finished {
            return Ok(None);
        }
        let result = self.scan_token();
        if !matches!(result, Ok(Some(_))) {
            self.finished = true;
        }
        result
    }

    /// Drain the scanner, returning every token or the first error.
    pub fn analyze(&mut self) -> Result<Vec<Token>, ScanError> {
        self.by_ref().collect()
    }

    fn scan_token(&mut self) -> Result<Option<Token>, ScanError> {
        let before = self.input.current_token_start();
        let newlines = trivia
            .parse_next(&mut self.input)
            .map_err(|_| self.invalid_at(before))?;
        self.line += newlines;

        let start = self.input.current_token_start();
        let Some(c) = self.input.chars().next() else {
            return Ok(None);
        };

        let (kind, text) = match c {
            '{' => (TokenKind::Literal, self.literal(start)?),
            c if is_word_start(c) => {
                let text = word
                    .parse_next(&mut self.input)
                    .map_err(|_| self.invalid_at(start))?;
                (self.classify(text), text)
            }
            c if c.is_ascii_digit() => {
                let text = constant
                    .parse_next(&mut self.input)
                    .map_err(|_| self.invalid_at(start))?;
                (TokenKind::Constant, text)
            }
            c => operator
                .parse_next(&mut self.input)
                .map_err(|_| self.reject(c, start))?,
        };

        Ok(Some(Token::new(
            kind,
            text,
            self.line,
            Span::new(start, text.len()),
        )))
    }

    fn classify(&mut self, text: &str) -> TokenKind {
        if self.symbols.is_keyword(text) {
            TokenKind::Keyword
        } else {
            self.symbols.record_identifier(text);
            TokenKind::Identifier
        }
    }

    fn literal(&mut self, start: usize) -> Result<&'a str, ScanError> {
        let text = literal_text
            .parse_next(&mut self.input)
            .map_err(|_| self.invalid_at(start))?;
        if text.ends_with('}') {
            return Ok(text);
        }
        match self.input.chars().next() {
            Some(c) if c != '\n' => Err(ScanError::non_ascii_in_literal(
                c,
                self.line,
                self.input.current_token_start(),
            )),
            _ => Err(ScanError::unterminated_literal(self.line, start, text.len())),
        }
    }

    /// Failure of `trivia`, `word`, `constant` or `literal_text`. None of them
    /// fails on the characters `scan_token` hands them, so this never runs on
    /// valid dispatch; it reports the character under `offset` if it does.
    fn invalid_at(&self, offset: usize) -> ScanError {
        let ch = self.source[offset..]
            .chars()
            .next()
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        ScanError::invalid_character(ch, self.line, offset)
    }

    fn reject(&self, c: char, offset: usize) -> ScanError {
        match c {
            ':' => ScanError::malformed_operator(c, '=', self.line, offset),
            '|' | '&' => ScanError::malformed_operator(c, c, self.line, offset),
            _ => ScanError::invalid_character(c, self.line, offset),
        }
    }
}

impl Iterator for Scanner<'_> {
    type Item = Result<Token, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}

impl FusedIterator for Scanner<'_> {}
