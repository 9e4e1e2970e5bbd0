use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part2_output_right_answer() {
    let mut cmd = Command::cargo_bin("day1_part2").unwrap();
    cmd.arg("inputs.txt");

    cmd.assert().success().stdout(str::contains("There are 5 sum(s)"));
}

#[test]
fn part2_honors_window_option() {
    let mut cmd = Command::cargo_bin("day1_part2").unwrap();
    cmd.args(["inputs.txt", "--window", "1"]);

    cmd.assert().success().stdout(str::contains("There are 7 sum(s)"));
}

#[test]
fn part2_rejects_zero_window() {
    let mut cmd = Command::cargo_bin("day1_part2").unwrap();
    cmd.args(["inputs.txt", "-w", "0"]);

    cmd.assert().failure();
}
