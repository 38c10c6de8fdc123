use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_version() {
    let mut cmd = cargo_bin_cmd!("pitfall");
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("pitfall"));
}

#[test]
fn test_help_contains_all_lessons() {
    let mut cmd = cargo_bin_cmd!("pitfall");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("injection"))
        .stdout(predicate::str::contains("xss"))
        .stdout(predicate::str::contains("passwords"))
        .stdout(predicate::str::contains("all"));
}

#[test]
fn test_injection_keeps_placeholders() {
    let mut cmd = cargo_bin_cmd!("pitfall");
    cmd.arg("injection")
        .assert()
        .success()
        .stdout(predicate::str::contains("username = ?"));
}

#[test]
fn test_xss_escapes_script_tag() {
    let mut cmd = cargo_bin_cmd!("pitfall");
    cmd.arg("xss")
        .assert()
        .success()
        .stdout(predicate::str::contains("&lt;script&gt;"));
}

#[test]
fn test_passwords_json_output() {
    let output = cargo_bin_cmd!("pitfall")
        .arg("passwords")
        .arg("--iterations")
        .arg("1000")
        .arg("--output")
        .arg("json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("passwords --output json should produce valid JSON");

    assert_eq!(json["lesson"], "password-storage");
    assert_eq!(json["adaptive_round_trip"], true);
    let strategies = json["strategies"]
        .as_array()
        .expect("strategies should be an array");
    assert_eq!(strategies.len(), 4);
}

#[test]
fn test_passwords_verify_round_trip() {
    // Produce an encoded hash via json output, then verify it.
    let output = cargo_bin_cmd!("pitfall")
        .arg("passwords")
        .arg("--iterations")
        .arg("1000")
        .arg("--output")
        .arg("json")
        .output()
        .unwrap();
    let json: serde_json::Value =
        serde_json::from_str(&String::from_utf8(output.stdout).unwrap()).unwrap();
    let encoded = json["strategies"][3]["stored"]
        .as_str()
        .expect("adaptive stored representation should be a string");

    let mut cmd = cargo_bin_cmd!("pitfall");
    cmd.arg("passwords")
        .arg("--verify")
        .arg(encoded)
        .assert()
        .success()
        .stdout(predicate::str::contains("Password matches!"));

    let mut cmd = cargo_bin_cmd!("pitfall");
    cmd.arg("passwords")
        .arg("--plaintext")
        .arg("wrong-guess")
        .arg("--verify")
        .arg(encoded)
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid password!"));
}

#[test]
fn test_passwords_rejects_zero_iterations() {
    let mut cmd = cargo_bin_cmd!("pitfall");
    cmd.arg("passwords")
        .arg("--iterations")
        .arg("0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("iteration count"));
}

#[test]
fn test_all_runs_every_lesson() {
    let mut cmd = cargo_bin_cmd!("pitfall");
    cmd.arg("all")
        .assert()
        .success()
        .stdout(predicate::str::contains("SQL Injection"))
        .stdout(predicate::str::contains("Cross-Site Scripting"))
        .stdout(predicate::str::contains("Password Storage"));
}
