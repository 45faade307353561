use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part1_output_right_answer() {
    let mut cmd = Command::cargo_bin("day7-part1").unwrap();
    cmd.arg("example.txt");

    cmd.assert()
        .success()
        .stdout(str::contains("split 21 time(s)."));
}

#[test]
fn part1_shows_traced_manifold() {
    let mut cmd = Command::cargo_bin("day7-part1").unwrap();
    cmd.arg("example.txt").arg("--show");

    cmd.assert()
        .success()
        .stdout(str::contains(".......S.......\n.......|.......\n......|^|......"));
}
