// Drives the compiled binary end to end through piped stdin. The game is
// line-oriented (no raw mode), so no PTY is needed.

use assert_cmd::Command;
use tempfile::tempdir;

fn hilo() -> Command {
    Command::cargo_bin("hilo").unwrap()
}

#[test]
fn empty_leaderboard_then_quit() {
    let dir = tempdir().unwrap();
    let scores = dir.path().join("scores.json");

    let assert = hilo()
        .arg("--scores-file")
        .arg(&scores)
        .write_stdin("2\n3\n")
        .assert()
        .success();

    let out = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert!(out.contains("Main menu:"));
    assert!(out.contains("No records yet!"));
    assert!(out.contains("Thanks for playing, goodbye!"));
}

#[test]
fn deterministic_losing_round_is_persisted() {
    let dir = tempdir().unwrap();
    let scores = dir.path().join("scores.json");

    // guessing 0 is always too small (secrets start at 1), so five guesses
    // lose the Easy round regardless of the drawn secret
    let assert = hilo()
        .arg("--scores-file")
        .arg(&scores)
        .write_stdin("1\nAlice\n1\n0\n0\n0\n0\n0\n2\n3\n")
        .assert()
        .success();

    let out = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert_eq!(out.matches("Too small!").count(), 5);
    assert!(out.contains("Out of attempts!"));
    assert!(out.contains("Your score: 0"));
    assert!(out.contains("1. Alice: 0"));

    let persisted: std::collections::BTreeMap<String, u32> =
        serde_json::from_slice(&std::fs::read(&scores).unwrap()).unwrap();
    assert_eq!(persisted.get("Alice"), Some(&0));
}

#[test]
fn end_of_input_exits_cleanly() {
    let dir = tempdir().unwrap();
    hilo()
        .arg("--scores-file")
        .arg(dir.path().join("scores.json"))
        .write_stdin("")
        .assert()
        .success();
}

#[test]
fn corrupt_scores_file_fails_with_an_error() {
    let dir = tempdir().unwrap();
    let scores = dir.path().join("scores.json");
    std::fs::write(&scores, b"not a mapping").unwrap();

    let assert = hilo()
        .arg("--scores-file")
        .arg(&scores)
        .write_stdin("2\n")
        .assert()
        .failure();

    let err = String::from_utf8_lossy(&assert.get_output().stderr).to_string();
    assert!(err.contains("error:"));
}
