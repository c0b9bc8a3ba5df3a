use std::collections::BTreeMap;

use serde::Serialize;

use crate::scanner::token::{KEYWORDS, OPERATORS, TokenKind};

/// Maps lexeme text to its classification.
///
/// Keyword and operator entries are seeded on construction and never change.
/// Identifiers are recorded as they are scanned; the first occurrence wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SymbolTable {
    entries: BTreeMap<String, TokenKind>,
}

impl SymbolTable {
    /// A table holding only the given reserved words and operators.
    pub fn with_reserved<'k>(
        keywords: impl IntoIterator<Item = &'k str>,
        operators: impl IntoIterator<Item = (&'k str, TokenKind)>,
    ) -> Self {
        let mut entries = BTreeMap::new();
        for keyword in keywords {
            entries.insert(keyword.to_string(), TokenKind::Keyword);
        }
        for (op, kind) in operators {
            entries.insert(op.to_string(), kind);
        }
        Self { entries }
    }

    pub fn is_keyword(&self, text: &str) -> bool {
        matches!(self.entries.get(text), Some(TokenKind::Keyword))
    }

    pub fn get(&self, text: &str) -> Option<TokenKind> {
        self.entries.get(text).copied()
    }

    /// Returns `true` if `name` was not in the table yet.
    pub fn record_identifier(&mut self, name: &str) -> bool {
        if self.entries.contains_key(name) {
            return false;
        }
        self.entries.insert(name.to_string(), TokenKind::Identifier);
        true
    }

    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|(_, kind)| **kind == TokenKind::Identifier)
            .map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, TokenKind)> {
        self.entries.iter().map(|(name, kind)| (name.as_str(), *kind))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::with_reserved(KEYWORDS, OPERATORS)
    }
}
