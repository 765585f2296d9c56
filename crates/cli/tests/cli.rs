use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

const GENOME: &str = "# two homologs and a loner
a b c d e f
a b c d e g

x y z
";

fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

fn genome() -> (TempDir, PathBuf) {
    let temp = tempdir().unwrap();
    let path = write_file(temp.path(), "genome.txt", GENOME);
    (temp, path)
}

fn synapsis() -> Command {
    Command::cargo_bin("synapsis").unwrap()
}

#[test]
fn test_pair_text_output() {
    let (_temp, input) = genome();

    synapsis()
        .arg("pair")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("0 <-> 1"))
        .stdout(predicate::str::contains("2 (single)"));
}

#[test]
fn test_pair_json_output() {
    let (_temp, input) = genome();

    let output = synapsis()
        .args(["--format", "json", "pair"])
        .arg(&input)
        .output()
        .unwrap();
    assert!(output.status.success());

    let pairs: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(pairs[0]["Paired"]["left"], 0);
    assert_eq!(pairs[0]["Paired"]["right"], 1);
    assert_eq!(pairs[1]["Single"]["index"], 2);
}

#[test]
fn test_pair_threshold_flag() {
    let (_temp, input) = genome();

    synapsis()
        .arg("pair")
        .arg(&input)
        .args(["--threshold", "0.95"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 (single)"))
        .stdout(predicate::str::contains("<->").not());
}

#[test]
fn test_pair_less_is_more() {
    let (_temp, input) = genome();

    synapsis()
        .arg("pair")
        .arg(&input)
        .arg("--less-is-more")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 <-> 1"));
}

#[test]
fn test_align_reports_lcs() {
    let (_temp, input) = genome();

    synapsis()
        .arg("align")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("LCS length: 5"));
}

#[test]
fn test_align_json_walk() {
    let (_temp, input) = genome();

    let output = synapsis()
        .args(["--format", "json", "align"])
        .arg(&input)
        .output()
        .unwrap();
    assert!(output.status.success());

    let alignment: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(alignment["lcs_length"], 5);
    // five anchors plus one gap on each side
    assert_eq!(alignment["walk"].as_array().unwrap().len(), 7);
}

#[test]
fn test_align_needs_two_sequences() {
    let temp = tempdir().unwrap();
    let input = write_file(temp.path(), "one.txt", "a b c\n");

    synapsis()
        .arg("align")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least two sequences"));
}

#[test]
fn test_cross_with_script() {
    let (_temp, input) = genome();

    synapsis()
        .arg("cross")
        .arg(&input)
        .args(["--script", "3,100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("offspring A: a b c d e g"))
        .stdout(predicate::str::contains("offspring B: a b c d e f"))
        .stdout(predicate::str::contains("breakpoints: (3, 3) (6, 6)"));
}

#[test]
fn test_cross_is_reproducible_with_seed() {
    let (_temp, input) = genome();

    let run = || {
        synapsis()
            .args(["--format", "json", "cross"])
            .arg(&input)
            .args(["--seed", "42", "--max-distance", "2"])
            .output()
            .unwrap()
    };
    let (first, second) = (run(), run());
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_cross_rejects_zero_max_distance() {
    let (_temp, input) = genome();

    synapsis()
        .arg("cross")
        .arg(&input)
        .args(["--max-distance", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 1"));
}

#[test]
fn test_meiosis_output() {
    let (_temp, input) = genome();

    synapsis()
        .arg("meiosis")
        .arg(&input)
        .args(["--script", "3,100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Gamete 0"))
        .stdout(predicate::str::contains("a b c d e g"))
        .stdout(predicate::str::contains("2 copied"));
}

#[test]
fn test_meiosis_json_output() {
    let (_temp, input) = genome();

    let output = synapsis()
        .args(["--format", "json", "meiosis"])
        .arg(&input)
        .args(["--seed", "7"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["gametes"].as_array().unwrap().len(), 2);
    assert_eq!(result["gametes"][0][1], serde_json::json!(["x", "y", "z"]));
    assert_eq!(result["report"]["slots"].as_array().unwrap().len(), 2);
}

#[test]
fn test_config_defaults() {
    synapsis()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("MoreIsMoreAlike"))
        .stdout(predicate::str::contains("\"max\": 16"));
}

#[test]
fn test_config_file_is_loaded() {
    let temp = tempdir().unwrap();
    let config = write_file(
        temp.path(),
        "engine.json",
        r#"{ "pairing": { "sense": "LessIsMoreAlike", "threshold": 0.25 } }"#,
    );

    synapsis()
        .arg("--config")
        .arg(&config)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("LessIsMoreAlike"))
        .stdout(predicate::str::contains("0.25"));
}

#[test]
fn test_invalid_config_file() {
    let temp = tempdir().unwrap();
    let config = write_file(
        temp.path(),
        "engine.json",
        r#"{ "crossover": { "distance": { "Uniform": { "max": 0 } } } }"#,
    );

    synapsis()
        .arg("--config")
        .arg(&config)
        .arg("config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}

#[test]
fn test_missing_input_file() {
    synapsis()
        .args(["pair", "/nonexistent/genome.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read input file"));
}

#[test]
fn test_verbose_logs_engine_events() {
    let (_temp, input) = genome();

    synapsis()
        .arg("-v")
        .arg("pair")
        .arg(&input)
        .assert()
        .success()
        .stderr(predicate::str::contains("resolved pairs"));
}
