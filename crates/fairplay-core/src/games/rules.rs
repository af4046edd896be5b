//! Win rules for an odd-sized cyclic move set.

use super::MoveSet;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a pairing from the first move's point of view
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Win => "Win",
            Outcome::Lose => "Lose",
            Outcome::Draw => "Draw",
        }
    }

    /// Same pairing seen from the other side
    pub fn reversed(&self) -> Outcome {
        match self {
            Outcome::Win => Outcome::Lose,
            Outcome::Lose => Outcome::Win,
            Outcome::Draw => Outcome::Draw,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Precomputed pairwise outcomes, indexed by move position.
///
/// Move `i` beats the `(n - 1) / 2` moves that follow it cyclically and
/// loses to the rest. With `n` odd every distinct pair gets exactly one
/// orientation. Built once per game and never mutated.
#[derive(Clone, Debug)]
pub struct WinRules {
    moves: MoveSet,
    table: Vec<Vec<Outcome>>,
}

impl WinRules {
    /// Build the outcome table for a move set
    pub fn build(moves: MoveSet) -> Self {
        let size = moves.len();
        let half = size / 2;
        let mut table = vec![vec![Outcome::Draw; size]; size];

        for i in 0..size {
            for j in 1..=half {
                let k = (i + j) % size;
                table[i][k] = Outcome::Win;
                table[k][i] = Outcome::Lose;
            }
        }

        tracing::debug!(moves = size, half, "built outcome table");
        Self { moves, table }
    }

    pub fn moves(&self) -> &MoveSet {
        &self.moves
    }

    /// Outcome of `move_a` against `move_b`, from `move_a`'s side.
    ///
    /// Fails with [`Error::InvalidMove`] if either name is not in the set.
    pub fn winner(&self, move_a: &str, move_b: &str) -> Result<Outcome> {
        let a = self.position(move_a)?;
        let b = self.position(move_b)?;
        Ok(self.table[a][b])
    }

    /// Outcome by 0-based positions, `None` if either is out of range
    pub fn outcome_at(&self, a: usize, b: usize) -> Option<Outcome> {
        self.table.get(a)?.get(b).copied()
    }

    /// Moves that `name` beats, in set order
    pub fn beats(&self, name: &str) -> Result<Vec<&str>> {
        let a = self.position(name)?;
        Ok(self
            .moves
            .iter()
            .enumerate()
            .filter(|(b, _)| self.table[a][*b] == Outcome::Win)
            .map(|(_, m)| m)
            .collect())
    }

    fn position(&self, name: &str) -> Result<usize> {
        self.moves
            .index_of(name)
            .ok_or_else(|| Error::InvalidMove(name.to_string()))
    }
}
