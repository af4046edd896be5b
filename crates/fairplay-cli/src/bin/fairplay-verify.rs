//! Recompute a disclosed commitment.
//!
//! ```text
//! fairplay-verify --key <HEX> --move <NAME> --commitment <HEX>
//! fairplay-verify --transcript round.json
//! ```

use clap::Parser;
use fairplay_cli::{init_tracing, report, verify_parts, verify_transcript_file};
use fairplay_core::Result;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "fairplay-verify")]
#[command(about = "Check that a disclosed key and move reproduce a published HMAC")]
#[command(version)]
struct Cli {
    /// Disclosed key (64 hex characters)
    #[arg(long, required_unless_present = "transcript")]
    key: Option<String>,

    /// Computer's disclosed move
    #[arg(long = "move", value_name = "NAME", required_unless_present = "transcript")]
    move_name: Option<String>,

    /// HMAC published before the round
    #[arg(long, value_name = "HEX", required_unless_present = "transcript")]
    commitment: Option<String>,

    /// JSON transcript written by `fairplay --transcript`
    #[arg(long, value_name = "PATH", conflicts_with_all = ["key", "move_name", "commitment"])]
    transcript: Option<PathBuf>,

    /// Debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn verify(cli: Cli) -> Result<bool> {
    if let Some(path) = cli.transcript {
        return verify_transcript_file(&path);
    }

    // clap guarantees all three are present without a transcript
    let (Some(key), Some(move_name), Some(commitment)) = (cli.key, cli.move_name, cli.commitment)
    else {
        return Ok(false);
    };
    verify_parts(&key, &move_name, &commitment)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match verify(cli) {
        Ok(true) => {
            println!("Commitment verified");
            ExitCode::SUCCESS
        }
        Ok(false) => {
            println!("Commitment does NOT match the disclosed key and move");
            ExitCode::FAILURE
        }
        Err(err) => report(&err),
    }
}
