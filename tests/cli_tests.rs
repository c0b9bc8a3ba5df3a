use std::path::PathBuf;
use std::process::{Command, Output};

fn bin_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_applex"))
}

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(name)
}

fn run(args: &[&str]) -> Output {
    Command::new(bin_path())
        .args(args)
        .output()
        .expect("run applex binary")
}

#[test]
fn prints_token_dump() {
    let path = fixture("countdown.app");
    let output = run(&[path.to_str().expect("utf-8 path")]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let expected = include_str!("../fixtures/countdown.expected");
    assert_eq!(stdout, expected);
}

#[test]
fn prints_json_tokens() {
    let path = fixture("countdown.app");
    let output = run(&["--format", "json", path.to_str().expect("utf-8 path")]);
    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(value[0]["kind"], "KEYWORD");
    assert_eq!(value[0]["text"], "app");
}

#[test]
fn prints_symbol_table() {
    let path = fixture("countdown.app");
    let output = run(&["--symbols", path.to_str().expect("utf-8 path")]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("symbol table\n"));
    assert!(stdout.contains("countdown: IDENTIFIER\n"));
}

#[test]
fn scan_error_exits_with_failure() {
    let path = fixture("error_lone_pipe.app");
    let output = run(&["--symbols", path.to_str().expect("utf-8 path")]);
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("KEYWORD: app"));
    assert!(stdout.contains("x: IDENTIFIER\n"));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("'|' must be followed by '|' at line 4"), "{stderr}");
}

#[test]
fn missing_file_is_reported() {
    let output = run(&["no/such/file.app"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("read source file"), "{stderr}");
}

#[test]
fn file_argument_is_required() {
    let output = run(&[]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"), "{stderr}");
}
