pub mod lexer;
pub mod symbols;
pub mod token;

use crate::error::ScanError;
use token::Token;

/// Scan source code into a list of tokens, stopping at the first error.
pub fn scan(source: &str) -> Result<Vec<Token>, ScanError> {
    lexer::Scanner::new(source).analyze()
}
