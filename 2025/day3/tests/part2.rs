use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part2_output_right_answer() {
    let mut cmd = Command::cargo_bin("day3-part2").unwrap();
    cmd.arg("example.txt");

    cmd.assert().success().stdout(str::contains("is 3121910778619."));
}

#[test]
fn part2_with_two_digits_matches_part1() {
    let mut cmd = Command::cargo_bin("day3-part2").unwrap();
    cmd.arg("example.txt").arg("--digits").arg("2");

    cmd.assert().success().stdout(str::contains("is 357."));
}
