//! Fairplay
//!
//! Plays one round of N-way rock-paper-scissors against the computer.
//! The computer's move is committed (HMAC shown) before you choose, and the
//! key is disclosed afterwards so the commitment can be checked.
//!
//! ```text
//! fairplay rock paper scissors lizard spock
//! ```

use clap::Parser;
use fairplay_cli::{init_tracing, report, EXIT_USAGE};
use fairplay_core::{GameConfig, MoveSet, RoundController, RoundEnd, WinRules};
use rand::rngs::OsRng;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

#[derive(Parser)]
#[command(name = "fairplay")]
#[command(about = "Rock-paper-scissors for any odd number of moves, with a provably fair opponent")]
#[command(version)]
struct Cli {
    /// Move names in circle order (odd count, at least 3, no repeats)
    moves: Vec<String>,

    /// Ask again after an invalid selection instead of quitting
    #[arg(long, env = "FAIRPLAY_RETRY_INVALID")]
    retry_invalid: bool,

    /// Write the finished round as JSON, for `fairplay-verify --transcript`
    #[arg(long, value_name = "PATH")]
    transcript: Option<PathBuf>,

    /// Debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let moves = match MoveSet::new(cli.moves) {
        Ok(moves) => moves,
        Err(err) => {
            println!("Invalid arguments. Please provide an odd number >=3 of non-repeating strings.");
            println!("Problem: {}", err);
            println!("Example: fairplay rock paper scissors");
            return ExitCode::from(EXIT_USAGE);
        }
    };

    let config = GameConfig::default().with_retry_invalid(cli.retry_invalid);
    let mut controller = RoundController::new(WinRules::build(moves), OsRng, config);

    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();

    let transcript = match controller.play(&mut input, &mut output) {
        Ok(RoundEnd::Resolved(transcript)) => transcript,
        Ok(RoundEnd::Exited) => return ExitCode::SUCCESS,
        Err(err) => return report(&err),
    };

    if let Some(path) = cli.transcript {
        let written = transcript
            .to_json()
            .and_then(|json| std::fs::write(&path, json).map_err(Into::into));
        if let Err(err) = written {
            return report(&err);
        }
        info!(path = %path.display(), "transcript written");
    }

    ExitCode::SUCCESS
}
