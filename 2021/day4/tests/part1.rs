use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part1_output_right_answer() {
    let mut cmd = Command::cargo_bin("day4_part1").unwrap();
    cmd.arg("inputs.txt");

    cmd.assert()
        .success()
        .stdout(str::contains("the final score is 4512."));
}

#[test]
fn part1_fails_on_short_board() {
    let mut cmd = Command::cargo_bin("day4_part1").unwrap();
    cmd.arg("short_board.txt");

    cmd.assert()
        .failure()
        .stderr(str::contains("Expect 5 rows in one bingo board, given 2."));
}
