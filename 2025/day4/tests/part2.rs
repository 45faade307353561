use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part2_output_right_answer() {
    let mut cmd = Command::cargo_bin("day4-part2").unwrap();
    cmd.arg("example.txt");

    cmd.assert()
        .success()
        .stdout(str::contains("44 paper roll(s) can be removed in 9 round(s)"));
}
