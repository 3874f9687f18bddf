// tests/cli_exit.rs - Exit code tests against the built binary
use std::fs;
use std::process::{Command, Output};

use tempfile::TempDir;

fn run_count_tokens(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_count-tokens"))
        .args(args)
        .output()
        .expect("failed to execute count-tokens")
}

fn temp_with(name: &str, content: &str) -> (TempDir, String) {
    let d = tempfile::tempdir().unwrap();
    let path = d.path().join(name);
    fs::write(&path, content).unwrap();
    let path = path.to_string_lossy().into_owned();
    (d, path)
}

#[test]
fn test_exit_0_full_run() {
    let (_d, path) = temp_with(
        "input.txt",
        "Imagine this is a large file with a lot of code and you want an idea of \
         how many tokens it will cost you to include in your context.",
    );
    let output = run_count_tokens(&[&path]);
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout.trim_end(),
        "The number of tokens in the input file is: 30."
    );
}

#[test]
fn test_exit_1_missing_file() {
    let d = tempfile::tempdir().unwrap();
    let path = d.path().join("non_existent_file.txt");
    let output = run_count_tokens(&[&path.to_string_lossy()]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("File not found"), "stderr was: {stderr}");
    assert!(output.stdout.is_empty());
}

#[test]
fn test_exit_1_empty_file() {
    let (_d, path) = temp_with("empty.txt", "");
    let output = run_count_tokens(&[&path]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No tokens found in the input string."));
}

#[test]
fn test_exit_1_special_token_text() {
    let (_d, path) = temp_with("special.txt", "a <|endoftext|> b");
    let output = run_count_tokens(&[&path]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("disallowed special token"), "stderr was: {stderr}");
}

#[test]
fn test_exit_2_missing_argument() {
    let output = run_count_tokens(&[]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_exit_0_help() {
    let output = run_count_tokens(&["--help"]);
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("INPUT_FP"));
}
