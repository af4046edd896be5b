//! Fairplay Core Library
//!
//! N-way rock-paper-scissors against a computer opponent that commits to its
//! move (HMAC-SHA256 under a fresh random key) before the player chooses, and
//! discloses the key afterwards so the player can check it was not cheated.

pub mod config;
pub mod crypto;
pub mod error;
pub mod games;
pub mod protocol;

pub use config::GameConfig;
pub use crypto::{Commitment, KeyGenerator, SecretKey};
pub use error::{ConfigError, Error, Result};
pub use games::{HelpTable, MoveSet, Outcome, WinRules};
pub use protocol::{RoundController, RoundEnd, RoundTranscript, Selection};
