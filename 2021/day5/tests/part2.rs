use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part2_output_right_answer() {
    let mut cmd = Command::cargo_bin("day5_part2").unwrap();
    cmd.arg("inputs.txt");

    cmd.assert()
        .success()
        .stdout(str::contains("At 12 point(s) at least 2"));
}

#[test]
fn part2_honors_threshold_option() {
    let mut cmd = Command::cargo_bin("day5_part2").unwrap();
    cmd.args(["inputs.txt", "-t", "3"]);

    cmd.assert()
        .success()
        .stdout(str::contains("At 2 point(s) at least 3"));
}

#[test]
fn part2_fails_on_oversized_grid() {
    let mut cmd = Command::cargo_bin("day5_part2").unwrap();
    cmd.arg("oversized_grid.txt");

    cmd.assert()
        .failure()
        .stderr(str::contains("Grid covering point(100000,100000)"));
}
