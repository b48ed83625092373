use std::cmp::Ordering;
use std::collections::VecDeque;

use rand::Rng;

use crate::difficulty::Tier;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundState {
    AwaitingGuess,
    Won,
    Lost,
}

/// How a counted guess compared to the secret
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feedback {
    TooSmall,
    TooLarge,
    Correct,
}

/// Source of secret numbers for new rounds
pub trait SecretSource {
    /// Draw a secret uniformly from [start, end] inclusive
    fn draw(&mut self, start: u32, end: u32) -> u32;
}

/// Production source backed by the thread rng
#[derive(Debug, Default)]
pub struct RandomSecret;

impl SecretSource for RandomSecret {
    fn draw(&mut self, start: u32, end: u32) -> u32 {
        rand::thread_rng().gen_range(start..=end)
    }
}

/// Scripted source for tests
#[derive(Debug)]
pub struct ScriptedSecret {
    secrets: VecDeque<u32>,
}

impl ScriptedSecret {
    pub fn new<I: IntoIterator<Item = u32>>(secrets: I) -> Self {
        Self {
            secrets: secrets.into_iter().collect(),
        }
    }
}

impl SecretSource for ScriptedSecret {
    fn draw(&mut self, start: u32, _end: u32) -> u32 {
        self.secrets.pop_front().unwrap_or(start)
    }
}

/// Validate raw guess input. Only trimmed input composed solely of digit
/// characters counts as a guess; anything else is rejected without consuming
/// an attempt.
pub fn parse_guess(raw: &str) -> Option<u32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    trimmed.parse().ok()
}

/// One guessing round in play
#[derive(Debug)]
pub struct Round {
    target: u32,
    start: u32,
    end: u32,
    attempts_used: u32,
    attempt_budget: u32,
    state: RoundState,
}

impl Round {
    pub fn new(tier: Tier, secrets: &mut dyn SecretSource) -> Self {
        let (start, end) = tier.range();
        Self::with_target(tier, secrets.draw(start, end))
    }

    /// Build a round around a known target. Rounds in play use [`Round::new`].
    pub fn with_target(tier: Tier, target: u32) -> Self {
        let (start, end) = tier.range();
        Self {
            target,
            start,
            end,
            attempts_used: 0,
            attempt_budget: tier.attempt_budget(),
            state: RoundState::AwaitingGuess,
        }
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn bounds(&self) -> (u32, u32) {
        (self.start, self.end)
    }

    pub fn attempts_used(&self) -> u32 {
        self.attempts_used
    }

    pub fn attempt_budget(&self) -> u32 {
        self.attempt_budget
    }

    pub fn has_finished(&self) -> bool {
        self.state != RoundState::AwaitingGuess
    }

    /// Apply one validated guess: counts the attempt, reports how it compared
    /// and moves to a terminal state on a hit or an exhausted budget.
    pub fn guess(&mut self, value: u32) -> Feedback {
        debug_assert_eq!(self.state, RoundState::AwaitingGuess);
        self.attempts_used += 1;
        let feedback = match value.cmp(&self.target) {
            Ordering::Less => Feedback::TooSmall,
            Ordering::Greater => Feedback::TooLarge,
            Ordering::Equal => Feedback::Correct,
        };
        self.state = match feedback {
            Feedback::Correct => RoundState::Won,
            _ if self.attempts_used == self.attempt_budget => RoundState::Lost,
            _ => RoundState::AwaitingGuess,
        };
        feedback
    }

    /// Remaining-attempts score. Winning on the last allowed attempt is worth
    /// 1, winning on the first is worth the full budget, losing is worth 0.
    /// An unfinished round has no score yet.
    pub fn score(&self) -> Option<u32> {
        match self.state {
            RoundState::Won => Some(self.attempt_budget - self.attempts_used + 1),
            RoundState::Lost => Some(0),
            RoundState::AwaitingGuess => None,
        }
    }
}
