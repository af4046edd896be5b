//! Game definitions and logic.

mod help;
mod moves;
mod rules;

pub use help::HelpTable;
pub use moves::MoveSet;
pub use rules::{Outcome, WinRules};
