//! Integration tests for the neat CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

fn neat() -> Command {
    Command::cargo_bin("neat").unwrap()
}

#[test]
fn test_text_with_keep_flags() {
    neat()
        .args(["text", "-q", "-i"])
        .arg(fixture_path("column.txt"))
        .args(["--keep", "o", "--keep-num", "1"])
        .assert()
        .success()
        .stdout("Hello 1\nWorld4\nPython\n");
}

#[test]
fn test_text_digits_only() {
    neat()
        .args(["text", "-q", "--keep-punctuation", "-i"])
        .arg(fixture_path("column.txt"))
        .assert()
        .success()
        .stdout("Hello, !\nWorld\nPython\n");
}

#[test]
fn test_text_with_config_file() {
    neat()
        .args(["text", "-q", "-i"])
        .arg(fixture_path("column.txt"))
        .arg("--config")
        .arg(fixture_path("keep-o.toml"))
        .assert()
        .success()
        .stdout("Hello 1\nWorld4\nPython\n");
}

#[test]
fn test_flags_override_config_file() {
    neat()
        .args(["text", "-q", "-i"])
        .arg(fixture_path("column.txt"))
        .arg("--config")
        .arg(fixture_path("keep-o.toml"))
        .args(["--keep-num", "0"])
        .assert()
        .success()
        .stdout("Hello \nWorld\nPython\n");
}

#[test]
fn test_negative_keep_num_fails() {
    neat()
        .args(["text", "-q", "-i"])
        .arg(fixture_path("column.txt"))
        .args(["--keep-num", "-1"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("keep_num"));
}

#[test]
fn test_json_input() {
    neat()
        .args(["text", "-q", "--json-input", "-i"])
        .arg(fixture_path("column.json"))
        .assert()
        .success()
        .stdout("Hello \nWorld\nPython\n");
}

#[test]
fn test_non_string_element_fails_with_position() {
    neat()
        .args(["text", "-q", "--json-input", "-i"])
        .arg(fixture_path("mixed.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("position 1"))
        .stderr(predicate::str::contains("mixed.json"));
}

#[test]
fn test_integer_with_fallback() {
    neat()
        .args(["integer", "-q", "--fallback", "0", "-i"])
        .arg(fixture_path("numbers.txt"))
        .assert()
        .success()
        .stdout("12345\n45678\n0\n");
}

#[test]
fn test_integer_without_fallback_fails() {
    neat()
        .args(["integer", "-q", "-i"])
        .arg(fixture_path("numbers.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("position 2"));
}

#[test]
fn test_special_chars() {
    neat()
        .args(["special", "-q", "-i"])
        .arg(fixture_path("column.txt"))
        .assert()
        .success()
        .stdout(", !\n\n\n");
}

#[test]
fn test_json_output() {
    neat()
        .args(["text", "-q", "-f", "json", "-i"])
        .arg(fixture_path("column.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("\"source\""))
        .stdout(predicate::str::contains("\"position\": 1"))
        .stdout(predicate::str::contains("\"value\": \"World\""));
}

#[test]
fn test_stdin_input() {
    neat()
        .args(["text", "-q", "-i", "-"])
        .write_stdin("a-1\nb.2\n")
        .assert()
        .success()
        .stdout("a\nb\n");
}

#[test]
fn test_parallel_matches_sequential() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("big.txt");
    let content: String = (0..5_000).map(|i| format!("row {i}: #{i}!\n")).collect();
    fs::write(&input, content).unwrap();

    let sequential = neat()
        .args(["text", "-q", "-i"])
        .arg(&input)
        .output()
        .unwrap();
    let parallel = neat()
        .args(["text", "-q", "--parallel", "-t", "4", "-i"])
        .arg(&input)
        .output()
        .unwrap();

    assert!(sequential.status.success());
    assert!(parallel.status.success());
    assert_eq!(sequential.stdout, parallel.stdout);
}

#[test]
fn test_output_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_file = temp_dir.path().join("output.txt");

    neat()
        .args(["special", "-q", "-i"])
        .arg(fixture_path("column.txt"))
        .arg("-o")
        .arg(&output_file)
        .assert()
        .success();

    let content = fs::read_to_string(&output_file).unwrap();
    assert_eq!(content, ", !\n\n\n");
}

#[test]
fn test_glob_pattern() {
    neat()
        .args(["special", "-q", "-i"])
        .arg(fixture_path("*.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains(", !"))
        .stdout(predicate::str::contains("/"));
}

#[test]
fn test_invalid_file() {
    neat()
        .args(["text", "-q", "-i", "nonexistent.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_generate_then_validate() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("neat.toml");

    neat()
        .arg("generate-config")
        .arg("-o")
        .arg(&config)
        .assert()
        .success();

    neat()
        .arg("validate")
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}

#[test]
fn test_validate_rejects_bad_config() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("bad.toml");
    fs::write(&config, "[filter]\nkeep_num = -3\n").unwrap();

    neat()
        .arg("validate")
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Configuration is invalid"));
}

#[test]
fn test_multiline_values_keep_one_line_per_element() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("multiline.json");
    fs::write(&input, r#"["a\nb1", "c2"]"#).unwrap();

    neat()
        .args(["text", "-q", "--json-input", "-i"])
        .arg(&input)
        .assert()
        .success()
        .stdout("a\\nb\nc\n");
}

#[test]
fn test_failing_input_leaves_no_partial_output() {
    let temp_dir = TempDir::new().unwrap();
    let good = temp_dir.path().join("a.json");
    let bad = temp_dir.path().join("b.json");
    fs::write(&good, r#"["x1", "y2"]"#).unwrap();
    fs::write(&bad, r#"["z3", null]"#).unwrap();

    neat()
        .args(["text", "-q", "--json-input", "-i"])
        .arg(&good)
        .arg("-i")
        .arg(&bad)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("b.json"));

    let output_file = temp_dir.path().join("out.txt");
    neat()
        .args(["text", "-q", "--json-input", "-i"])
        .arg(&good)
        .arg("-i")
        .arg(&bad)
        .arg("-o")
        .arg(&output_file)
        .assert()
        .failure();
    assert!(!output_file.exists());
}
