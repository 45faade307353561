use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part1_output_right_answer() {
    let mut cmd = Command::cargo_bin("day8-part1").unwrap();
    cmd.arg("example.txt").arg("--limit").arg("10");

    cmd.assert()
        .success()
        .stdout(str::contains("[5, 4, 2], their product is 40."));
}

#[test]
fn part1_without_connection_multiplies_nothing() {
    let mut cmd = Command::cargo_bin("day8-part1").unwrap();
    cmd.arg("example.txt").arg("--limit").arg("0");

    cmd.assert()
        .success()
        .stdout(str::contains("size(s) [], their product is 1."));
}

#[test]
fn part1_reports_bad_position() {
    let mut cmd = Command::cargo_bin("day8-part1").unwrap();
    cmd.arg("Cargo.toml");

    cmd.assert().failure();
}
