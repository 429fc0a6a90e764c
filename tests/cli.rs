//! Runs the built binary and checks exit status and standard output.

use std::process::{Command, Output};

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_random-dataset-cli"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

#[test]
fn test_default_ints_to_stdout() {
    let output = run_cli(&["5"]);

    assert!(output.status.success());
    let out = stdout(&output);
    assert_eq!(out.lines().count(), 5);
    assert!(out.lines().all(|l| l.parse::<i64>().is_ok()));
}

#[test]
fn test_seed_reproducible() {
    let a = run_cli(&["20", "--seed", "7", "--type", "str", "--length", "8"]);
    let b = run_cli(&["20", "-s", "7", "-t", "str", "-l", "8"]);
    assert_eq!(stdout(&a), stdout(&b));
}

#[test]
fn test_float_without_distribution_fails() {
    let output = run_cli(&["5", "--type", "float"]);

    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("distribution must be specified"));
}

#[test]
fn test_uniform_validation_messages() {
    let missing = run_cli(&["5", "-t", "float", "-d", "uniform", "--min-value", "0"]);
    assert!(!missing.status.success());
    assert!(stderr(&missing).contains("min value and max value must be specified"));

    let inverted = run_cli(&[
        "5", "-t", "float", "-d", "uniform", "--min-value", "2", "--max-value", "1",
    ]);
    assert!(!inverted.status.success());
    assert!(stderr(&inverted).contains("max value must be greater or equal to min_value"));
}

#[test]
fn test_normal_validation_messages() {
    let missing = run_cli(&["5", "-t", "float", "-d", "normal", "--mean", "1"]);
    assert!(!missing.status.success());
    assert!(stderr(&missing).contains("mean value and standard deviation must be specified"));

    let zero_std = run_cli(&["5", "-t", "float", "-d", "normal", "--mean", "1", "--std", "0"]);
    assert!(!zero_std.status.success());
    assert!(stderr(&zero_std).contains("std must be greater than zero"));
}

#[test]
fn test_unknown_type_rejected() {
    let output = run_cli(&["5", "--type", "double"]);
    assert!(!output.status.success());
}

#[test]
fn test_timeit_follows_payload() {
    let output = run_cli(&[
        "3", "-t", "float", "-d", "normal", "--mean", "0", "--std", "1", "-p", "4", "--timeit",
    ]);

    assert!(output.status.success());
    let out = stdout(&output);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 5);
    for value in &lines[..3] {
        let decimals = value.split('.').nth(1).unwrap();
        assert_eq!(decimals.len(), 4, "{}", value);
    }
    assert!(lines[3].starts_with("Data parse time: "));
    assert!(lines[4].starts_with("Algorithm execution time: "));
    assert!(lines[4].ends_with(" seconds"));
}

#[test]
fn test_header_on_console() {
    let output = run_cli(&["2", "--header"]);
    let out = stdout(&output);
    let mut lines = out.lines();
    assert_eq!(lines.next(), Some("Generated data:"));
    assert_eq!(lines.count(), 2);
}

#[test]
fn test_filename_output() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.txt");
    let output = run_cli(&["4", "-f", path.to_str().unwrap(), "--timeit"]);

    assert!(output.status.success());
    assert_eq!(std::fs::read_to_string(&path).unwrap().lines().count(), 4);
    // only the timing report reaches stdout
    assert_eq!(stdout(&output).lines().count(), 2);
}

#[test]
fn test_underscore_bound_flags() {
    let output = run_cli(&[
        "50", "-t", "float", "-d", "uniform", "--min_value", "2", "--max_value", "3",
    ]);

    assert!(output.status.success(), "{}", stderr(&output));
    let out = stdout(&output);
    assert_eq!(out.lines().count(), 50);
    assert!(out.lines().all(|l| (2.0..=3.0).contains(&l.parse::<f64>().unwrap())));
}

#[test]
fn test_non_finite_normal_params_rejected() {
    for args in [
        ["3", "-t", "float", "-d", "normal", "--mean", "0", "--std", "inf"],
        ["3", "-t", "float", "-d", "normal", "--mean", "inf", "--std", "1"],
        ["3", "-t", "float", "-d", "normal", "--mean", "NaN", "--std", "1"],
    ]
    .iter()
    {
        let output = run_cli(args);
        assert!(!output.status.success());
        assert!(stdout(&output).is_empty());
        assert!(stderr(&output).contains("mean value and standard deviation must be finite"));
    }
}
