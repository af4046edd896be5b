//! Player input: reading lines and parsing menu selections.

use crate::error::{Error, Result};
use std::io::{self, BufRead};

/// What the player asked for at the prompt
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    /// `"0"`
    Exit,
    /// `"?"`
    Help,
    /// 0-based index of the chosen move (input is 1-based)
    Move(usize),
}

impl Selection {
    /// Parse one input line against a menu of `move_count` moves
    pub fn parse(input: &str, move_count: usize) -> Result<Self> {
        let input = input.trim();
        match input {
            "0" => Ok(Selection::Exit),
            "?" => Ok(Selection::Help),
            _ => match plain_number(input) {
                Some(n) if (1..=move_count).contains(&n) => Ok(Selection::Move(n - 1)),
                _ => Err(Error::InvalidInput(input.to_string())),
            },
        }
    }
}

/// Decimal digits only, no sign and no leading zero
fn plain_number(input: &str) -> Option<usize> {
    if input.starts_with('0') || !input.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    input.parse().ok()
}

/// Blocking source of input lines
pub trait LineSource {
    /// Next line without its terminator, `None` at end of input.
    /// Bytes that are not UTF-8 come back as U+FFFD so the caller sees
    /// an unparseable selection rather than a stream error.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

impl<T: BufRead> LineSource for T {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }
}
