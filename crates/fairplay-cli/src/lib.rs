//! Shared plumbing for the fairplay binaries.

use fairplay_core::{Commitment, Error, Result, RoundTranscript, SecretKey};
use std::path::Path;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Exit code for a rejected move set
pub const EXIT_USAGE: u8 = 2;

/// Install the stderr log subscriber. `RUST_LOG` wins when set.
pub fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Report an error to the user and pick the process exit code
pub fn report(err: &Error) -> ExitCode {
    match err {
        Error::InvalidInput(_) => println!("{}", err),
        Error::InvalidMove(_) | Error::CryptoUnavailable(_) => {
            tracing::error!(%err, "fatal");
            eprintln!("Fatal: {}", err);
        }
        _ => eprintln!("Error: {}", err),
    }

    ExitCode::from(exit_status(err))
}

/// 2 for a rejected move set, 1 for anything else
pub fn exit_status(err: &Error) -> u8 {
    match err {
        Error::InvalidConfiguration(_) => EXIT_USAGE,
        _ => 1,
    }
}

/// Recompute a commitment from the disclosed key and move, all as typed
/// by the user
pub fn verify_parts(key: &str, move_name: &str, commitment: &str) -> Result<bool> {
    let key: SecretKey = key.parse()?;
    let commitment: Commitment = commitment.parse()?;
    commitment.verify(move_name, &key)
}

/// Check a transcript written by `fairplay --transcript`
pub fn verify_transcript_file(path: &Path) -> Result<bool> {
    let transcript = RoundTranscript::from_json(&std::fs::read_to_string(path)?)?;
    tracing::debug!(round = %transcript.round_id, "verifying transcript");
    transcript.verify()
}

#[cfg(test)]
mod tests {
    use super::*;
    use fairplay_core::ConfigError;

    const KEY: &str = "abababababababababababababababababababababababababababababababab";
    const SPOCK: &str = "b8a9e678eec38760f6e984f09694705c3649ec0b25adad27608cc558b49f3019";

    #[test]
    fn test_verify_parts_match() {
        assert!(verify_parts(KEY, "spock", SPOCK).unwrap());
    }

    #[test]
    fn test_verify_parts_mismatch() {
        assert!(!verify_parts(KEY, "rock", SPOCK).unwrap());
        assert!(!verify_parts(&"cd".repeat(32), "spock", SPOCK).unwrap());
    }

    #[test]
    fn test_verify_parts_bad_hex() {
        assert!(matches!(
            verify_parts("nothex", "spock", SPOCK),
            Err(Error::InvalidKey(_))
        ));
        assert!(matches!(
            verify_parts(KEY, "spock", "1234"),
            Err(Error::InvalidKey(_))
        ));
    }

    #[test]
    fn test_verify_transcript_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("round.json");
        let json = format!(
            r#"{{"round_id":"67e55044-10b1-426f-9247-bb680e5fe0c8","commitment":"{}","player_move":"rock","opponent_move":"spock","outcome":"Lose","key":"{}"}}"#,
            SPOCK, KEY
        );
        std::fs::write(&path, &json).unwrap();
        assert!(verify_transcript_file(&path).unwrap());

        std::fs::write(&path, json.replace("\"spock\"", "\"paper\"")).unwrap();
        assert!(!verify_transcript_file(&path).unwrap());
    }

    #[test]
    fn test_verify_transcript_missing_or_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("round.json");
        assert!(matches!(verify_transcript_file(&path), Err(Error::Io(_))));

        std::fs::write(&path, "{").unwrap();
        assert!(matches!(verify_transcript_file(&path), Err(Error::Transcript(_))));
    }

    #[test]
    fn test_exit_status() {
        let config = Error::from(ConfigError::EvenCount { count: 4 });
        assert_eq!(exit_status(&config), EXIT_USAGE);

        assert_eq!(exit_status(&Error::InvalidInput("x".into())), 1);
        assert_eq!(exit_status(&Error::CryptoUnavailable("gone".into())), 1);
    }
}
