use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part1_output_right_answer() {
    let mut cmd = Command::cargo_bin("day3_part1").unwrap();
    cmd.arg("inputs.txt");

    cmd.assert()
        .success()
        .stdout(str::contains("the power consumption is 198."));
}

#[test]
fn part1_fails_on_inconsistent_width() {
    let mut cmd = Command::cargo_bin("day3_part1").unwrap();
    cmd.arg("inconsistent_width.txt");

    cmd.assert()
        .failure()
        .stderr(str::contains("Expect 5 bits per number, given 4."));
}
