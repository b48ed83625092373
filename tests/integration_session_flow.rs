// Headless end-to-end session runs over the scripted input and secret
// sources, without a TTY or a real scores file.

use hilo::console::ScriptedLineSource;
use hilo::round::ScriptedSecret;
use hilo::score::{MemoryScoreStore, Scores};
use hilo::session::Session;

fn run(store: &MemoryScoreStore, lines: &[&str], secrets: Vec<u32>) -> String {
    let mut out = Vec::new();
    let mut session = Session::new(store, ScriptedLineSource::new(lines.to_vec()), &mut out)
        .with_secrets(Box::new(ScriptedSecret::new(secrets)));
    session.run().expect("session should complete");
    drop(session);
    String::from_utf8(out).unwrap()
}

#[test]
fn win_then_view_leaderboard() {
    let store = MemoryScoreStore::new();
    let out = run(
        &store,
        &["1", "Alice", "1", "50", "1", "27", "2", "3"],
        vec![27],
    );

    // guessing feedback in order, then the recorded score on the board
    let too_large = out.find("Too large!").unwrap();
    let too_small = out.find("Too small!").unwrap();
    let correct = out.find("You got it! The answer was 27.").unwrap();
    assert!(too_large < too_small && too_small < correct);
    assert!(out.contains("Your score: 3"));
    assert!(out.contains("1. Alice: 3"));
    assert_eq!(store.snapshot(), Scores::from([("Alice".to_string(), 3)]));
}

#[test]
fn two_players_rank_by_score_descending() {
    let store = MemoryScoreStore::new();
    // Alice wins on the first attempt (score 5), Bob on the third (score 3)
    let out = run(
        &store,
        &[
            "1", "Alice", "1", "27", //
            "1", "Bob", "1", "50", "1", "27", //
            "2", "3",
        ],
        vec![27, 27],
    );
    assert!(out.contains("1. Alice: 5"));
    assert!(out.contains("2. Bob: 3"));
}

#[test]
fn tied_players_rank_alphabetically() {
    let store = MemoryScoreStore::new();
    // both win on the first attempt of Easy: score 5 each
    let out = run(
        &store,
        &["1", "Zoe", "1", "27", "1", "Ann", "1", "13", "2", "3"],
        vec![27, 13],
    );
    assert!(out.contains("1. Ann: 5"));
    assert!(out.contains("2. Zoe: 5"));
}

#[test]
fn medium_loss_after_seven_wrong_guesses() {
    let store = MemoryScoreStore::new();
    let out = run(
        &store,
        &[
            "1", "Bob", "2", "1", "2", "3", "4", "5", "6", "7", "3",
        ],
        vec![100],
    );
    assert_eq!(out.matches("Too small!").count(), 7);
    assert!(out.contains("Out of attempts! The answer was 100."));
    assert!(out.contains("Your score: 0"));
    assert_eq!(store.snapshot(), Scores::from([("Bob".to_string(), 0)]));
}

#[test]
fn replaying_never_lowers_a_stored_score() {
    let store = MemoryScoreStore::new();
    // first round scores 5, second scores 3
    run(
        &store,
        &["1", "Alice", "1", "27", "1", "Alice", "1", "50", "1", "27", "3"],
        vec![27, 27],
    );
    assert_eq!(store.snapshot(), Scores::from([("Alice".to_string(), 5)]));
}
