use std::io::{self, Write};

use itertools::Itertools;

use crate::score::Scores;

/// (name, score) pairs, highest score first. The sort is stable, so entries
/// with equal scores keep the mapping's name order.
pub fn rankings(scores: &Scores) -> Vec<(&str, u32)> {
    scores
        .iter()
        .map(|(name, score)| (name.as_str(), *score))
        .sorted_by(|a, b| b.1.cmp(&a.1))
        .collect()
}

/// Print the leaderboard: a single no-records line for an empty store,
/// otherwise one rank-prefixed line per entry.
pub fn render<W: Write>(scores: &Scores, out: &mut W) -> io::Result<()> {
    if scores.is_empty() {
        writeln!(out, "No records yet!")?;
        return Ok(());
    }
    for (rank, (name, score)) in rankings(scores).into_iter().enumerate() {
        writeln!(out, "{}. {}: {}", rank + 1, name, score)?;
    }
    Ok(())
}
