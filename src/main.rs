use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use hilo::console::StdinLineSource;
use hilo::score::FileScoreStore;
use hilo::session::Session;

/// terminal number-guessing game with difficulty tiers and a persisted leaderboard
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Pick a difficulty, guess the secret number within the attempt budget, and climb the persisted leaderboard. Scores are the attempts you had left."
)]
struct Cli {
    /// path of the leaderboard file (defaults to the platform state directory)
    #[clap(long, value_name = "FILE")]
    scores_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let store = match cli.scores_file {
        Some(path) => FileScoreStore::with_path(path),
        None => FileScoreStore::new(),
    };

    let mut session = Session::new(store, StdinLineSource, io::stdout());
    if let Err(e) = session.run() {
        eprintln!("error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
