use applex::printer;
use applex::{ScanError, Scanner, TokenKind, scan};

fn dump_fixture(source: &str) -> Vec<String> {
    let tokens = scan(source).expect("scan should succeed");
    printer::to_text(&tokens)
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn fixture_average() {
    let source = include_str!("../fixtures/average.app");
    let expected = include_str!("../fixtures/average.expected");
    let output = dump_fixture(source);
    let expected_lines: Vec<&str> = expected.lines().collect();
    assert_eq!(output, expected_lines);
}

#[test]
fn fixture_countdown() {
    let source = include_str!("../fixtures/countdown.app");
    let expected = include_str!("../fixtures/countdown.expected");
    let output = dump_fixture(source);
    let expected_lines: Vec<&str> = expected.lines().collect();
    assert_eq!(output, expected_lines);
}

#[test]
fn fixture_lines_follow_source() {
    let source = include_str!("../fixtures/average.app");
    let tokens = scan(source).expect("scan should succeed");
    // Line 1 is a comment.
    assert_eq!(tokens[0].line, 2);
    let last = tokens.last().expect("at least one token");
    assert_eq!((last.kind, last.text.as_str(), last.line), (TokenKind::Keyword, "end", 15));
    for token in &tokens {
        assert_eq!(&source[token.span.offset..token.span.offset + token.span.len], token.text);
    }
}

#[test]
fn fixture_symbol_table() {
    let source = include_str!("../fixtures/average.app");
    let mut scanner = Scanner::new(source);
    scanner.analyze().expect("scan should succeed");
    let names: Vec<&str> = scanner.symbols().identifiers().collect();
    assert_eq!(names, vec!["a", "average", "b", "c", "mean"]);
}

#[test]
fn fixture_unclosed_literal() {
    let source = include_str!("../fixtures/error_unclosed_literal.app");
    let err = scan(source).expect_err("scan should fail");
    assert!(matches!(err, ScanError::UnterminatedLiteral { line: 3, .. }), "{err:?}");
}

#[test]
fn fixture_lone_pipe() {
    let source = include_str!("../fixtures/error_lone_pipe.app");
    let err = scan(source).expect_err("scan should fail");
    assert!(
        matches!(err, ScanError::MalformedCompoundOperator { ch: '|', line: 4, .. }),
        "{err:?}"
    );
}

#[test]
fn iterator_yields_tokens_lazily() {
    let source = include_str!("../fixtures/countdown.app");
    let first: Vec<String> = Scanner::new(source)
        .take(2)
        .map(|t| t.expect("scan should succeed").text)
        .collect();
    assert_eq!(first, vec!["app", "countdown"]);
}

#[test]
fn iterator_stops_after_error() {
    let results: Vec<_> = Scanner::new("x := 1 ? y := 2").collect();
    assert_eq!(results.len(), 4);
    assert!(results[..3].iter().all(Result::is_ok));
    assert!(matches!(
        results[3],
        Err(ScanError::InvalidCharacter { ch: '?', .. })
    ));
}

#[test]
fn fixtures_round_trip_through_minimal_source() {
    for source in [
        include_str!("../fixtures/average.app"),
        include_str!("../fixtures/countdown.app"),
    ] {
        let tokens = scan(source).expect("scan should succeed");
        let rebuilt = printer::to_source(&tokens);
        let rescanned = scan(&rebuilt).expect("rebuilt source should scan");
        let texts = |ts: &[applex::Token]| -> Vec<(TokenKind, String)> {
            ts.iter().map(|t| (t.kind, t.text.clone())).collect()
        };
        assert_eq!(texts(&rescanned), texts(&tokens));
    }
}
