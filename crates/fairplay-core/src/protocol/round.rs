//! A single committed round: the opponent commits, the player moves,
//! the opponent reveals.

use crate::crypto::{generate_key_with, Commitment, SecretKey};
use crate::error::{Error, Result};
use crate::games::{Outcome, WinRules};
use rand::{CryptoRng, Rng, RngCore};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique round identifier
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoundId(Uuid);

impl RoundId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RoundId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RoundId({})", self.0)
    }
}

impl fmt::Display for RoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Round after the opponent has committed and before the player has moved.
///
/// The key and the opponent's move are private here: the only way to get at
/// them is [`CommittedRound::reveal`], which needs the player's move first.
pub struct CommittedRound<'r> {
    id: RoundId,
    rules: &'r WinRules,
    key: SecretKey,
    opponent: usize,
    commitment: Commitment,
}

impl<'r> CommittedRound<'r> {
    /// Pick the opponent's move, draw a fresh key, and commit
    pub fn begin<R: RngCore + CryptoRng + ?Sized>(rules: &'r WinRules, rng: &mut R) -> Result<Self> {
        let key = generate_key_with(rng)?;
        let opponent = rng.gen_range(0..rules.moves().len());
        let opponent_move = rules
            .moves()
            .get(opponent)
            .ok_or_else(|| Error::InvalidMove(format!("#{}", opponent + 1)))?;
        let commitment = Commitment::new(opponent_move, &key)?;
        let id = RoundId::new();

        tracing::debug!(round = %id, %commitment, "opponent committed");
        Ok(Self {
            id,
            rules,
            key,
            opponent,
            commitment,
        })
    }

    pub fn id(&self) -> RoundId {
        self.id
    }

    /// Published before the player chooses
    pub fn commitment(&self) -> Commitment {
        self.commitment
    }

    /// Resolve against the player's move (0-based) and disclose the key
    pub fn reveal(self, player: usize) -> Result<RoundTranscript> {
        let moves = self.rules.moves();
        let player_move = moves
            .get(player)
            .ok_or_else(|| Error::InvalidMove(format!("#{}", player + 1)))?;
        let opponent_move = moves
            .get(self.opponent)
            .ok_or_else(|| Error::InvalidMove(format!("#{}", self.opponent + 1)))?;
        let outcome = self.rules.winner(player_move, opponent_move)?;

        tracing::info!(
            round = %self.id,
            player = player_move,
            opponent = opponent_move,
            %outcome,
            "round resolved"
        );
        Ok(RoundTranscript {
            round_id: self.id,
            commitment: self.commitment,
            player_move: player_move.to_string(),
            opponent_move: opponent_move.to_string(),
            outcome,
            key: self.key,
        })
    }
}

/// Everything needed to check a finished round after the fact
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundTranscript {
    pub round_id: RoundId,
    pub commitment: Commitment,
    pub player_move: String,
    pub opponent_move: String,
    /// From the player's side
    pub outcome: Outcome,
    pub key: SecretKey,
}

impl RoundTranscript {
    /// Recompute the commitment from the disclosed move and key
    pub fn verify(&self) -> Result<bool> {
        self.commitment.verify(&self.opponent_move, &self.key)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Line announcing the outcome to the player
    pub fn verdict(&self) -> &'static str {
        match self.outcome {
            Outcome::Win => "You win!",
            Outcome::Lose => "You lose!",
            Outcome::Draw => "It's a draw!",
        }
    }
}
