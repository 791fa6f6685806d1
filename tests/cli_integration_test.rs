//! Integration tests running the store-seed binary.

use std::fs;
use std::io::{BufRead, BufReader};
use std::process::{Command, Stdio};
use tempfile::{NamedTempFile, TempDir};

fn store_seed_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_store-seed"))
}

fn stdout_lines(output: &std::process::Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_default_run() {
    let output = store_seed_bin()
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());

    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 100 + 10_000);
    assert!(lines[0].starts_with("INSERT INTO customer (id, name) VALUES (1, '"));
    assert!(lines[99].starts_with("INSERT INTO customer (id, name) VALUES (100, '"));
    assert!(lines[100]
        .starts_with("INSERT INTO \"order\" (id, description, customer_id) VALUES (1, '"));
    assert!(lines
        .last()
        .unwrap()
        .starts_with("INSERT INTO \"order\" (id, description, customer_id) VALUES (10000, '"));
}

#[test]
fn test_count_overrides() {
    let output = store_seed_bin()
        .args(["--customers", "1", "--orders", "3"])
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());

    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 4);
    for line in &lines[1..] {
        assert!(line.ends_with(", 1);"), "unexpected customer id: {line}");
    }
}

#[test]
fn test_zero_customers_exits_with_error() {
    let output = store_seed_bin()
        .args(["--customers", "0"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("customer count must be at least 1"));
}

#[test]
fn test_config_file_and_output_file() {
    let mut config = NamedTempFile::new().unwrap();
    std::io::Write::write_all(&mut config, b"customerCount: 3\norderCount: 2\n").unwrap();
    let out_dir = TempDir::new().unwrap();
    let out_file = out_dir.path().join("seed.sql");

    let output = store_seed_bin()
        .arg("--config")
        .arg(config.path())
        .arg("--output")
        .arg(&out_file)
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    let content = fs::read_to_string(&out_file).unwrap();
    assert_eq!(content.lines().count(), 5);
}

#[test]
fn test_schema_and_products() {
    let output = store_seed_bin()
        .args(["-c", "2", "-o", "4", "--products", "3", "--schema", "--verbose"])
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());

    let lines = stdout_lines(&output);
    assert!(lines[0].starts_with("CREATE TABLE customer"));
    assert_eq!(
        lines
            .iter()
            .filter(|l| l.starts_with("CREATE TABLE"))
            .count(),
        4
    );
    assert_eq!(
        lines
            .iter()
            .filter(|l| l.starts_with("INSERT INTO product "))
            .count(),
        3
    );
    assert!(lines.iter().any(|l| l.starts_with("INSERT INTO order_product ")));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Customers: 2"));
    assert!(stderr.contains("Orders: 4"));
}

#[test]
fn test_completions() {
    let output = store_seed_bin()
        .args(["completions", "bash"])
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("store-seed"));
}

#[test]
fn test_closed_stdout_exits_cleanly() {
    let mut child = store_seed_bin()
        .args(["--orders", "200000"])
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute command");

    let stdout = child.stdout.take().unwrap();
    let mut first = String::new();
    BufReader::new(stdout).read_line(&mut first).unwrap();
    assert!(first.starts_with("INSERT INTO customer (id, name) VALUES (1, '"));

    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    assert!(!String::from_utf8_lossy(&output.stderr).contains("Broken pipe"));
}
