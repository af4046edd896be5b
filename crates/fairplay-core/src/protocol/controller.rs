//! Drives one interactive round over injected input, output and randomness.

use super::round::{CommittedRound, RoundTranscript};
use super::selection::{LineSource, Selection};
use crate::config::GameConfig;
use crate::error::{Error, Result};
use crate::games::{HelpTable, WinRules};
use rand::{CryptoRng, RngCore};
use std::io::Write;

/// Prompt states. The commitment is written before the first
/// `AwaitingInput`, so no input is read until the opponent is bound.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundState {
    AwaitingInput,
    ShowHelp,
    Resolve(usize),
    Exit,
}

/// How a round ended
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoundEnd {
    /// Player quit before choosing; the key stays secret
    Exited,
    Resolved(RoundTranscript),
}

pub struct RoundController<R> {
    rules: WinRules,
    rng: R,
    config: GameConfig,
}

impl<R: RngCore + CryptoRng> RoundController<R> {
    pub fn new(rules: WinRules, rng: R, config: GameConfig) -> Self {
        Self { rules, rng, config }
    }

    /// Play one round: commit, prompt until resolved or exited, reveal.
    pub fn play<I, W>(&mut self, input: &mut I, out: &mut W) -> Result<RoundEnd>
    where
        I: LineSource + ?Sized,
        W: Write + ?Sized,
    {
        let round = CommittedRound::begin(&self.rules, &mut self.rng)?;
        writeln!(out, "HMAC: {}", round.commitment())?;
        self.write_menu(out)?;

        let mut state = RoundState::AwaitingInput;
        loop {
            state = match state {
                RoundState::AwaitingInput => self.next_state(input, out)?,
                RoundState::ShowHelp => {
                    write!(out, "{}", HelpTable::new(&self.rules))?;
                    self.write_menu(out)?;
                    RoundState::AwaitingInput
                }
                RoundState::Resolve(player) => {
                    let transcript = round.reveal(player)?;
                    writeln!(out, "Your move: {}", transcript.player_move)?;
                    writeln!(out, "Computer move: {}", transcript.opponent_move)?;
                    writeln!(out, "{}", transcript.verdict())?;
                    writeln!(out, "HMAC key: {}", transcript.key)?;
                    return Ok(RoundEnd::Resolved(transcript));
                }
                RoundState::Exit => {
                    writeln!(out, "Goodbye!")?;
                    tracing::debug!(round = %round.id(), "player exited before moving");
                    return Ok(RoundEnd::Exited);
                }
            };
        }
    }

    fn next_state<I, W>(&self, input: &mut I, out: &mut W) -> Result<RoundState>
    where
        I: LineSource + ?Sized,
        W: Write + ?Sized,
    {
        write!(out, "Enter your move: ")?;
        out.flush()?;

        let Some(line) = input.read_line()? else {
            writeln!(out)?;
            return Ok(RoundState::Exit);
        };

        match Selection::parse(&line, self.rules.moves().len()) {
            Ok(Selection::Exit) => Ok(RoundState::Exit),
            Ok(Selection::Help) => Ok(RoundState::ShowHelp),
            Ok(Selection::Move(index)) => Ok(RoundState::Resolve(index)),
            Err(err @ Error::InvalidInput(_)) if self.config.retry_invalid => {
                tracing::debug!(%err, "re-prompting after invalid input");
                writeln!(out, "{}", err)?;
                Ok(RoundState::AwaitingInput)
            }
            Err(err) => Err(err),
        }
    }

    fn write_menu<W: Write + ?Sized>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "Available moves:")?;
        for (index, name) in self.rules.moves().iter().enumerate() {
            writeln!(out, "{} - {}", index + 1, name)?;
        }
        writeln!(out, "0 - exit")?;
        writeln!(out, "? - help")?;
        Ok(())
    }
}
