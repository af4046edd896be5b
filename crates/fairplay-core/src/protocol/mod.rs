//! Round protocol: commit, play, reveal.

mod controller;
mod round;
mod selection;

pub use controller::{RoundController, RoundEnd, RoundState};
pub use round::{CommittedRound, RoundId, RoundTranscript};
pub use selection::{LineSource, Selection};
