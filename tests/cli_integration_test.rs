//! End-to-end tests running the robmatrix binary.

use assert_cmd::Command;
use robmatrix::DecisionReport;
use tempfile::TempDir;

fn robmatrix() -> Command {
    Command::cargo_bin("robmatrix").expect("binary should build")
}

fn evaluate_args(
    repair_cost: &str,
    repair_time: &str,
    new_cost: &str,
    allowed_downtime: &str,
    criticality: &str,
) -> Vec<String> {
    [
        "evaluate",
        "--repair-cost",
        repair_cost,
        "--repair-time",
        repair_time,
        "--new-cost",
        new_cost,
        "--allowed-downtime",
        allowed_downtime,
        "--criticality",
        criticality,
        "--plain",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

#[test]
fn test_evaluate_strong_repair_scenario() {
    let output = robmatrix()
        .args(evaluate_args("300", "2", "1000", "4", "low"))
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Cost index: 30.0% -> 5 points"));
    assert!(stdout.contains("Time index: 50.0% -> 5 points"));
    assert!(stdout.contains("Final score: 5.00"));
    assert!(stdout.contains("STRONG REPAIR"));
}

#[test]
fn test_evaluate_buy_scenario() {
    let output = robmatrix()
        .args(evaluate_args("950", "10", "1000", "2", "high"))
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Cost index: 95.0% -> 1 points"));
    assert!(stdout.contains("Time index: 500.0% -> 1 points"));
    assert!(stdout.contains("Final score: 1.00"));
    assert!(stdout.contains("Recommendation: BUY"));
}

#[test]
fn test_evaluate_zero_downtime_leans_buy() {
    let output = robmatrix()
        .args(evaluate_args("100", "1", "1000", "0", "medium"))
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("zero tolerance -> 1 point"));
    assert!(stdout.contains("Final score: 3.20"));
    assert!(stdout.contains("LEAN BUY"));
}

#[test]
fn test_evaluate_json_format() {
    let output = robmatrix()
        .args(evaluate_args("300", "2", "1000", "4", "low"))
        .args(["--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let report: DecisionReport = serde_json::from_str(&stdout).unwrap();
    assert_eq!(report.result.final_score, 5.0);
    assert_eq!(report.result.cost_points.value(), 5);
    assert_eq!(report.input.repair_cost, 300.0);
}

#[test]
fn test_evaluate_markdown_to_output_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("report.md");

    let output = robmatrix()
        .args(evaluate_args("300", "2", "1000", "4", "low"))
        .args(["--format", "markdown", "--output"])
        .arg(&path)
        .output()
        .unwrap();

    assert!(output.status.success());
    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("# Repair-or-Buy Decision Report"));
    assert!(contents.contains("**STRONG REPAIR**"));
}

#[test]
fn test_evaluate_verbose_breakdown_on_stderr() {
    let output = robmatrix()
        .args(evaluate_args("300", "2", "1000", "4", "low"))
        .arg("-v")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Score factors:"));
    assert!(stderr.contains("weight 0.4"));
}

#[test]
fn test_evaluate_rejects_zero_new_cost() {
    let output = robmatrix()
        .args(evaluate_args("300", "2", "0", "4", "low"))
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("new_cost"));
}

#[test]
fn test_evaluate_rejects_unknown_criticality() {
    let output = robmatrix()
        .args(evaluate_args("300", "2", "1000", "4", "severe"))
        .output()
        .unwrap();

    assert!(!output.status.success());
}

#[test]
fn test_methodology_prints_reference() {
    let output = robmatrix().args(["methodology", "--plain"]).output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Repair-or-Buy Methodology"));
    assert!(stdout.contains("Cost index (%)"));
    assert!(stdout.contains(">= 4.5"));
}
