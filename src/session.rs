use std::io::{self, Write};

use thiserror::Error;

use crate::console::LineSource;
use crate::difficulty::Tier;
use crate::leaderboard;
use crate::round::{parse_guess, Feedback, RandomSecret, Round, RoundState, SecretSource};
use crate::score::{record_score, ScoreStore, ScoreStoreError};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Store(#[from] ScoreStoreError),
}

/// Interactive menu loop wiring the score store, input lines and output
/// together. The store is re-read and persisted around every update, so each
/// menu action sees whatever is on disk at that point.
pub struct Session<S: ScoreStore, L: LineSource, W: Write> {
    store: S,
    input: L,
    out: W,
    secrets: Box<dyn SecretSource>,
}

impl<S: ScoreStore, L: LineSource, W: Write> Session<S, L, W> {
    pub fn new(store: S, input: L, out: W) -> Self {
        Self {
            store,
            input,
            out,
            secrets: Box::new(RandomSecret),
        }
    }

    /// Replace the secret source; tests script round outcomes with this.
    pub fn with_secrets(mut self, secrets: Box<dyn SecretSource>) -> Self {
        self.secrets = secrets;
        self
    }

    /// Run the menu loop until the player quits or input runs out.
    /// A corrupt score store surfaces here and ends the session.
    pub fn run(&mut self) -> Result<(), SessionError> {
        loop {
            writeln!(self.out, "\nMain menu:")?;
            writeln!(self.out, "1. Start a game")?;
            writeln!(self.out, "2. View leaderboard")?;
            writeln!(self.out, "3. Quit")?;
            write!(self.out, "Choose (1/2/3): ")?;
            self.out.flush()?;
            let Some(choice) = self.read_trimmed()? else {
                break;
            };
            match choice.as_str() {
                "1" => {
                    if self.play()?.is_none() {
                        break;
                    }
                }
                "2" => {
                    let scores = self.store.load()?;
                    writeln!(self.out, "\nLeaderboard:")?;
                    leaderboard::render(&scores, &mut self.out)?;
                }
                "3" => {
                    writeln!(self.out, "Thanks for playing, goodbye!")?;
                    break;
                }
                _ => writeln!(self.out, "Invalid choice, try again!")?,
            }
        }
        Ok(())
    }

    /// One full round: name prompt, difficulty selection, guessing to a
    /// terminal state, then merge-and-persist of the score.
    /// Ok(None) means input ran out mid-round; nothing is recorded.
    fn play(&mut self) -> Result<Option<()>, SessionError> {
        let Some(name) = self.prompt_name()? else {
            return Ok(None);
        };
        let Some(tier) = self.prompt_tier()? else {
            return Ok(None);
        };

        let (start, end) = tier.range();
        let budget = tier.attempt_budget();
        writeln!(
            self.out,
            "\nYou picked {}: guess a number between {} and {} in {} attempts.",
            tier, start, end, budget
        )?;

        let mut round = Round::new(tier, self.secrets.as_mut());
        while !round.has_finished() {
            write!(self.out, "Guess {}/{}: ", round.attempts_used() + 1, budget)?;
            self.out.flush()?;
            let Some(line) = self.read_trimmed()? else {
                return Ok(None);
            };
            let Some(value) = parse_guess(&line) else {
                writeln!(self.out, "Please enter a valid number!")?;
                continue;
            };
            match round.guess(value) {
                Feedback::TooSmall => writeln!(self.out, "Too small!")?,
                Feedback::TooLarge => writeln!(self.out, "Too large!")?,
                Feedback::Correct => {
                    writeln!(self.out, "You got it! The answer was {}.", round.target())?
                }
            }
        }
        if round.state() == RoundState::Lost {
            writeln!(self.out, "Out of attempts! The answer was {}.", round.target())?;
        }

        let score = round.score().unwrap_or(0);
        writeln!(self.out, "Your score: {}", score)?;

        let mut scores = self.store.load()?;
        record_score(&mut scores, &name, score);
        self.store.save(&scores)?;
        Ok(Some(()))
    }

    fn prompt_name(&mut self) -> Result<Option<String>, SessionError> {
        loop {
            write!(self.out, "Enter your name: ")?;
            self.out.flush()?;
            let Some(name) = self.read_trimmed()? else {
                return Ok(None);
            };
            if name.is_empty() {
                writeln!(self.out, "Name cannot be empty!")?;
                continue;
            }
            return Ok(Some(name));
        }
    }

    fn prompt_tier(&mut self) -> Result<Option<Tier>, SessionError> {
        writeln!(self.out, "\nChoose a difficulty:")?;
        for tier in Tier::ALL {
            let (start, end) = tier.range();
            writeln!(
                self.out,
                "{}. {} (range: {} to {}, {} attempts)",
                tier.menu_key(),
                tier,
                start,
                end,
                tier.attempt_budget()
            )?;
        }
        loop {
            write!(self.out, "Choose difficulty (1/2/3): ")?;
            self.out.flush()?;
            let Some(choice) = self.read_trimmed()? else {
                return Ok(None);
            };
            match Tier::from_choice(&choice) {
                Some(tier) => return Ok(Some(tier)),
                None => writeln!(self.out, "Invalid choice, try again!")?,
            }
        }
    }

    fn read_trimmed(&mut self) -> Result<Option<String>, SessionError> {
        Ok(self.input.read_line()?.map(|line| line.trim().to_string()))
    }
}
