use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part1_output_right_answer() {
    let mut cmd = Command::cargo_bin("day2_part1").unwrap();
    cmd.arg("inputs.txt");

    cmd.assert()
        .success()
        .stdout(str::contains("the product of them is 150."));
}

#[test]
fn part1_fails_on_unknown_direction() {
    let mut cmd = Command::cargo_bin("day2_part1").unwrap();
    cmd.arg("unknown_direction.txt");

    cmd.assert()
        .failure()
        .stderr(str::contains("Unknown direction(sideways)"));
}
