//! The configured, ordered set of move names.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Ordered, duplicate-free list of an odd number (at least 3) of moves.
///
/// Order defines adjacency for the win relation, so two sets holding the
/// same names in a different order are different games.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct MoveSet(Vec<String>);

impl MoveSet {
    pub const MIN_MOVES: usize = 3;

    /// Validate and wrap a list of move names
    pub fn new<I, S>(moves: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let moves: Vec<String> = moves.into_iter().map(Into::into).collect();

        if moves.len() < Self::MIN_MOVES {
            return Err(ConfigError::TooFewMoves { count: moves.len() });
        }
        if moves.len() % 2 == 0 {
            return Err(ConfigError::EvenCount { count: moves.len() });
        }

        let mut seen = HashSet::with_capacity(moves.len());
        for name in &moves {
            if !seen.insert(name.as_str()) {
                return Err(ConfigError::DuplicateMove(name.clone()));
            }
        }

        Ok(Self(moves))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Move name at a 0-based position
    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    /// 0-based position of a move name
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.0.iter().position(|m| m == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl TryFrom<Vec<String>> for MoveSet {
    type Error = ConfigError;

    fn try_from(moves: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(moves)
    }
}

impl From<MoveSet> for Vec<String> {
    fn from(set: MoveSet) -> Self {
        set.0
    }
}
