use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use applex::printer;
use applex::{ScanError, Scanner, SymbolTable};

#[derive(Parser, Debug)]
#[command(name = "applex", about = "Lexical scanner for the app language")]
struct Cli {
    /// Source file to scan
    file: PathBuf,

    /// Token output format
    #[arg(long, default_value = "text", value_parser = ["text", "json"])]
    format: String,

    /// Print the symbol table after the tokens (also on error)
    #[arg(long)]
    symbols: bool,
}

fn read_source(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("read source file '{}'", path.display()))
}

fn print_symbols(table: &SymbolTable, format: &str) {
    match format {
        "json" => println!("{}", printer::symbols_to_json(table)),
        _ => print!("{}", printer::symbols_to_text(table)),
    }
}

fn report_scan_error(error: ScanError, path: &Path, source: &str) -> anyhow::Error {
    let line = error.line();
    let report = miette::Report::new(error.with_source_code(path.display().to_string(), source));
    eprintln!("{report:?}");
    anyhow::anyhow!("scan failed at line {line}")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let source = read_source(&cli.file)?;

    let mut scanner = Scanner::new(&source);
    let result = scanner.analyze();

    if let Ok(tokens) = &result {
        match cli.format.as_str() {
            "json" => println!("{}", printer::to_json(tokens)),
            _ => print!("{}", printer::to_text(tokens)),
        }
    }
    if cli.symbols {
        print_symbols(scanner.symbols(), &cli.format);
    }

    result
        .map(|_| ())
        .map_err(|e| report_scan_error(e, &cli.file, &source))
}
