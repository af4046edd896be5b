//! End-to-end tests for a full round driven through the controller.
//!
//! Input is scripted and the random source is a seeded ChaCha generator, so
//! the opponent's move and key are reproducible.

use fairplay_core::{
    Commitment, Error, GameConfig, MoveSet, Outcome, RoundController, RoundEnd, SecretKey,
    WinRules,
};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::io::Cursor;

const RPSLS: [&str; 5] = ["rock", "paper", "scissors", "lizard", "spock"];

struct Session {
    end: Result<RoundEnd, Error>,
    output: String,
}

fn run(moves: &[&str], seed: u64, input: &str, config: GameConfig) -> Session {
    let rules = WinRules::build(MoveSet::new(moves.iter().copied()).unwrap());
    let mut controller = RoundController::new(rules, ChaCha20Rng::seed_from_u64(seed), config);
    let mut output = Vec::new();
    let end = controller.play(&mut Cursor::new(input.to_string()), &mut output);

    Session {
        end,
        output: String::from_utf8(output).unwrap(),
    }
}

fn labeled<'a>(output: &'a str, label: &str) -> &'a str {
    output
        .lines()
        .find_map(|l| l.strip_prefix(label))
        .unwrap_or_else(|| panic!("no line starting with {:?} in:\n{}", label, output))
}

#[test]
fn test_published_commitment_verifies_after_reveal() {
    let session = run(&RPSLS, 7, "4\n", GameConfig::default());

    let published: Commitment = labeled(&session.output, "HMAC: ").parse().unwrap();
    let opponent = labeled(&session.output, "Computer move: ");
    let key: SecretKey = labeled(&session.output, "HMAC key: ").parse().unwrap();

    assert!(published.verify(opponent, &key).unwrap());
    assert_eq!(Commitment::new(opponent, &key).unwrap(), published);

    match session.end.unwrap() {
        RoundEnd::Resolved(transcript) => {
            assert_eq!(transcript.commitment, published);
            assert_eq!(transcript.opponent_move, opponent);
            assert_eq!(transcript.player_move, "lizard");
            assert!(transcript.verify().unwrap());
        }
        other => panic!("expected resolved round, got {:?}", other),
    }
}

#[test]
fn test_session_output_order() {
    let session = run(&RPSLS, 11, "1\n", GameConfig::default());
    let lines: Vec<&str> = session.output.lines().collect();

    let position = |prefix: &str| {
        lines
            .iter()
            .position(|l| l.contains(prefix))
            .unwrap_or_else(|| panic!("missing {:?}", prefix))
    };

    let commitment = position("HMAC: ");
    let menu = position("Available moves:");
    let prompt = position("Enter your move: ");
    let player = position("Your move: ");
    let opponent = position("Computer move: ");
    let verdict = ["You win!", "You lose!", "It's a draw!"]
        .iter()
        .map(|v| position_or_max(&lines, v))
        .min()
        .unwrap();
    let key = position("HMAC key: ");

    assert_ne!(verdict, usize::MAX);
    assert_eq!(commitment, 0);
    assert!(commitment < menu && menu < prompt);
    assert!(prompt <= player && player < opponent && opponent < verdict && verdict < key);
    assert_eq!(key, lines.len() - 1);
}

fn position_or_max(lines: &[&str], needle: &str) -> usize {
    lines
        .iter()
        .position(|l| l.contains(needle))
        .unwrap_or(usize::MAX)
}

#[test]
fn test_outcome_line_matches_rules() {
    for seed in 0..20 {
        let session = run(&RPSLS, seed, "3\n", GameConfig::default());
        let rules = WinRules::build(MoveSet::new(RPSLS).unwrap());
        let opponent = labeled(&session.output, "Computer move: ");

        let expected = match rules.winner("scissors", opponent).unwrap() {
            Outcome::Win => "You win!",
            Outcome::Lose => "You lose!",
            Outcome::Draw => "It's a draw!",
        };
        assert!(session.output.lines().any(|l| l == expected), "seed {}", seed);
    }
}

#[test]
fn test_same_seed_same_round() {
    let first = run(&RPSLS, 42, "2\n", GameConfig::default());
    let second = run(&RPSLS, 42, "2\n", GameConfig::default());

    assert_eq!(
        labeled(&first.output, "HMAC: "),
        labeled(&second.output, "HMAC: ")
    );
    assert_eq!(
        labeled(&first.output, "HMAC key: "),
        labeled(&second.output, "HMAC key: ")
    );
}

#[test]
fn test_every_opponent_move_reachable() {
    let mut seen = std::collections::HashSet::new();
    for seed in 0..200 {
        let session = run(&RPSLS, seed, "1\n", GameConfig::default());
        seen.insert(labeled(&session.output, "Computer move: ").to_string());
    }

    assert_eq!(seen.len(), RPSLS.len());
}

#[test]
fn test_help_then_move() {
    let session = run(&["rock", "paper", "scissors"], 3, "?\n1\n", GameConfig::default());

    let table_start = session
        .output
        .lines()
        .position(|l| l.starts_with("| Moves"))
        .unwrap();
    let rows: Vec<Vec<&str>> = session
        .output
        .lines()
        .skip(table_start)
        .take(5)
        .filter(|l| l.starts_with('|'))
        .map(|l| l.split('|').map(str::trim).filter(|c| !c.is_empty()).collect())
        .collect();

    assert_eq!(rows[0], vec!["Moves", "rock", "paper", "scissors"]);
    assert_eq!(rows[1], vec!["rock", "Draw", "Win", "Lose"]);
    assert_eq!(rows[2], vec!["paper", "Lose", "Draw", "Win"]);
    assert_eq!(rows[3], vec!["scissors", "Win", "Lose", "Draw"]);
    assert!(matches!(session.end.unwrap(), RoundEnd::Resolved(_)));
}

#[test]
fn test_invalid_input_ends_round_without_reveal() {
    let session = run(&RPSLS, 5, "9\n", GameConfig::default());

    assert!(matches!(session.end, Err(Error::InvalidInput(_))));
    assert!(session.output.starts_with("HMAC: "));
    assert!(!session.output.contains("HMAC key: "));
}

#[test]
fn test_retry_mode_recovers() {
    let config = GameConfig::default().with_retry_invalid(true);
    let session = run(&RPSLS, 5, "9\nabc\n5\n", config);

    match session.end.unwrap() {
        RoundEnd::Resolved(transcript) => assert_eq!(transcript.player_move, "spock"),
        other => panic!("expected resolved round, got {:?}", other),
    }
}

#[test]
fn test_invalid_configurations_rejected() {
    assert!(MoveSet::new(["rock", "paper"]).is_err());
    assert!(MoveSet::new(["rock", "rock", "paper"]).is_err());
    assert!(MoveSet::new(["a", "b", "c", "d"]).is_err());
}
