//! Game configuration assembled by the front end.

use serde::{Deserialize, Serialize};

/// Knobs for how a round treats the player
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Re-prompt after an invalid selection instead of ending the round
    pub retry_invalid: bool,
}

impl GameConfig {
    pub fn with_retry_invalid(mut self, retry: bool) -> Self {
        self.retry_invalid = retry;
        self
    }
}
