use assert_cmd::Command;
use predicates::prelude::*;

fn tlb_workload() -> Command {
    let mut cmd = Command::cargo_bin("tlb-workload").unwrap();
    cmd.env_remove("RUST_LOG")
        .env_remove("TLB_WORKLOAD_CONFIG")
        .env_remove("TLB_WORKLOAD_SEED");
    cmd
}

#[test]
fn default_run_prints_three_workloads() {
    let output = tlb_workload().arg("--seed").arg("5").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[0],
        "Machine Learning Workload: 0x00004000 0x00005000 0x00006000 0x00007000 0x00008000"
    );
    assert!(lines[1].starts_with("AAA Games Workload: "));
    assert!(lines[2].starts_with("Stateless Microservice Workload: 0x00000801 "));
}

#[test]
fn same_seed_same_output() {
    let run = || {
        tlb_workload()
            .args(["-w", "aaa-games", "-n", "12", "-s", "31337"])
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn json_output_parses() {
    let output = tlb_workload()
        .args(["-o", "json", "-n", "3", "-w", "ml"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        value,
        serde_json::json!([{
            "workload": "machine-learning",
            "label": "Machine Learning Workload",
            "addresses": ["0x00004000", "0x00005000", "0x00006000"],
        }])
    );
}

#[test]
fn config_file_and_env_overrides() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("workload.toml");
    std::fs::write(
        &path,
        "count = 2\n\n[machine_learning]\nsegment_size = 0x2000\n",
    )
    .unwrap();

    tlb_workload()
        .arg("--config")
        .arg(&path)
        .args(["-w", "machine-learning"])
        .assert()
        .success()
        .stdout("Machine Learning Workload: 0x00008000 0x0000a000\n");

    tlb_workload()
        .env("TLB_WORKLOAD_MICROSERVICE__SEGMENT_SIZE", "4096")
        .args(["-w", "microservice", "-n", "1"])
        .assert()
        .success()
        .stdout("Stateless Microservice Workload: 0x00001001\n");
}

#[test]
fn invalid_parameters_fail_fast() {
    tlb_workload()
        .env("TLB_WORKLOAD_GAMES__REUSE_PROBABILITY", "1.5")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("reuse_probability"));
}

#[test]
fn missing_config_file_fails() {
    tlb_workload()
        .args(["--config", "/nonexistent/tlb-workload.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn logs_stay_off_stdout() {
    tlb_workload()
        .args(["--log-level", "debug", "-w", "ml", "-n", "1"])
        .assert()
        .success()
        .stdout("Machine Learning Workload: 0x00004000\n")
        .stderr(predicate::str::contains("sequential segment generator ready"));
}
