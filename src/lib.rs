pub mod error;
pub mod printer;
pub mod scanner;

pub use error::ScanError;
pub use scanner::lexer::Scanner;
pub use scanner::scan;
pub use scanner::symbols::SymbolTable;
pub use scanner::token::{Token, TokenKind};
