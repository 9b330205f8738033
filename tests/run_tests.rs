use assert_fs::prelude::*;
use predicates::prelude::*;

fn run_args(dir: &assert_fs::TempDir, seed: &str, output_name: &str) -> Vec<String> {
    let output = dir.child(output_name);
    vec![
        "run".to_string(),
        "-e".to_string(),
        "50".to_string(),
        "-d".to_string(),
        "3".to_string(),
        "-a".to_string(),
        "10".to_string(),
        "-t".to_string(),
        "400".to_string(),
        "--seed".to_string(),
        seed.to_string(),
        "-o".to_string(),
        output.path().to_str().unwrap().to_string(),
    ]
}

#[tokio::test]
async fn run_writes_report_histogram_and_progress() {
    let dir = assert_fs::TempDir::new().unwrap();
    let output = dir.child("result.yaml");
    let output_arg = output.path().to_str().unwrap().to_string();

    let mut cmd = assert_cmd::Command::cargo_bin("deskcast").unwrap();
    cmd.args(run_args(&dir, "7", "result.yaml"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Desk Demand Simulation"))
        .stdout(predicate::str::contains(format!(
            "Simulation result written to {output_arg}"
        )))
        .stderr(predicate::str::contains("% complete"));

    let yaml = std::fs::read_to_string(output.path()).unwrap();
    assert!(yaml.contains("inputs:"));
    assert!(yaml.contains("employee_count: 50"));
    assert!(yaml.contains("absenteeism_percent: 10"));
    assert!(yaml.contains("distribution:"));
    assert!(yaml.contains("avg_peak:"));
    assert!(yaml.contains("p95:"));

    dir.child("result.yaml.png")
        .assert(predicate::path::exists());
}

#[tokio::test]
async fn runs_with_the_same_seed_are_identical() {
    let dir = assert_fs::TempDir::new().unwrap();

    for output_name in ["first.yaml", "second.yaml"] {
        let mut cmd = assert_cmd::Command::cargo_bin("deskcast").unwrap();
        cmd.args(run_args(&dir, "99", output_name));
        cmd.assert().success();
    }

    let first = std::fs::read_to_string(dir.child("first.yaml").path()).unwrap();
    let second = std::fs::read_to_string(dir.child("second.yaml").path()).unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn an_invalid_absenteeism_percentage_is_rejected_up_front() {
    let dir = assert_fs::TempDir::new().unwrap();
    let output = dir.child("unused.yaml");

    let mut cmd = assert_cmd::Command::cargo_bin("deskcast").unwrap();
    cmd.args([
        "run",
        "-e",
        "50",
        "-d",
        "3",
        "-a",
        "100",
        "-t",
        "100",
        "-o",
        output.path().to_str().unwrap(),
    ]);

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("absenteeism rate"));

    output.assert(predicate::path::missing());
}
