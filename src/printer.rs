use crate::scanner::symbols::SymbolTable;
use crate::scanner::token::Token;

/// One `KIND: TEXT` line per token.
pub fn to_text(tokens: &[Token]) -> String {
    let mut buf = String::new();
    for token in tokens {
        buf.push_str(&token.to_string());
        buf.push('\n');
    }
    buf
}

pub fn to_json(tokens: &[Token]) -> String {
    serde_json::to_string_pretty(tokens).expect("tokens should be serializable")
}

pub fn symbols_to_text(table: &SymbolTable) -> String {
    let mut buf = String::from("symbol table\n");
    for (name, kind) in table.iter() {
        buf.push_str(name);
        buf.push_str(": ");
        buf.push_str(&kind.to_string());
        buf.push('\n');
    }
    buf
}

pub fn symbols_to_json(table: &SymbolTable) -> String {
    serde_json::to_string_pretty(table).expect("symbol table should be serializable")
}

/// Join token texts back into source that scans to the same tokens.
///
/// A single space is inserted only where two lexemes would otherwise merge:
/// between words, and before an `=` that follows a relational character.
pub fn to_source(tokens: &[Token]) -> String {
    let mut buf = String::new();
    let mut prev: Option<&Token> = None;
    for token in tokens {
        if prev.is_some_and(|p| needs_space(p, token)) {
            buf.push(' ');
        }
        buf.push_str(&token.text);
        prev = Some(token);
    }
    buf
}

fn needs_space(prev: &Token, next: &Token) -> bool {
    (prev.is_word() && next.is_word())
        || (prev.text.ends_with(['=', '<', '>', '!']) && next.text.starts_with('='))
}
