use holdem_cli::{run, run_with_input};
use std::io::Cursor;

fn run_args(args: &[&str]) -> (i32, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let mut input = Cursor::new(Vec::new());
    let code = run_with_input(args, &mut input, &mut out, &mut err);
    (
        code,
        String::from_utf8_lossy(&out).into_owned(),
        String::from_utf8_lossy(&err).into_owned(),
    )
}

#[test]
fn version_prints_to_stdout() {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(["holdem", "--version"], &mut out, &mut err);
    assert_eq!(code, 0);
    assert!(String::from_utf8_lossy(&out).contains("holdem"));
}

#[test]
fn missing_subcommand_is_usage_error() {
    let (code, out, err) = run_args(&["holdem"]);
    assert_eq!(code, 2);
    assert!(out.is_empty());
    assert!(err.contains("Usage: holdem <command>"));
}

#[test]
fn sim_hands_zero_invalid() {
    let (code, _, err) = run_args(&["holdem", "sim", "--hands", "0"]);
    assert_eq!(code, 2);
    assert!(err.contains("hands must be >= 1"));
}

#[test]
fn play_hands_zero_invalid() {
    let (code, _, err) = run_args(&["holdem", "play", "--vs", "computer", "--hands", "0"]);
    assert_eq!(code, 2);
    assert!(err.contains("hands must be >= 1"));
}

#[test]
fn deal_same_seed_same_output() {
    let (code_a, a, _) = run_args(&["holdem", "deal", "--seed", "2024"]);
    let (code_b, b, _) = run_args(&["holdem", "deal", "--seed", "2024"]);
    assert_eq!((code_a, code_b), (0, 0));
    assert_eq!(a, b);
    assert!(a.contains("Seed: 2024"));
}

#[test]
fn eval_reports_category() {
    let (code, out, _) = run_args(&[
        "holdem",
        "eval",
        "--hole",
        "As Ad",
        "--board",
        "Ac Kd Ks 2h 3h",
    ]);
    assert_eq!(code, 0);
    assert!(out.contains("Category: Full House"));
}

#[test]
fn eval_accepts_commas_and_lowercase() {
    let (code, out, _) = run_args(&["holdem", "eval", "--hole", "5c,4c", "--board", "3c,2c,ad"]);
    assert_eq!(code, 0);
    assert!(out.contains("Category: Straight\n"));
}

#[test]
fn eval_rejects_malformed_card() {
    let (code, _, err) = run_args(&["holdem", "eval", "--hole", "As 1x", "--board", "Qh Jh Th"]);
    assert_eq!(code, 2);
    assert!(err.contains("invalid card '1x'"));
}

#[test]
fn eval_rejects_duplicate_card() {
    let (code, _, err) = run_args(&["holdem", "eval", "--hole", "As Kd", "--board", "Kd 2c 3c"]);
    assert_eq!(code, 2);
    assert!(err.contains("duplicate card Kd"));
}

#[test]
fn play_computer_session_completes() {
    let (code, out, _) = run_args(&[
        "holdem",
        "play",
        "--vs",
        "computer",
        "--difficulty",
        "medium",
        "--hands",
        "4",
        "--seed",
        "8",
    ]);
    assert_eq!(code, 0);
    assert!(out.contains("Hand 1 (dealer Player 1, blinds 5/10)"));
    assert!(out.contains("Hands played:"));
}

#[test]
fn play_human_session_through_stdin() {
    // Hand 1: Player 2 acts first and Player 1 folds. Hand 2: Player 2
    // holds the button, so Player 1 acts first and folds again.
    let mut out = Vec::new();
    let mut err = Vec::new();
    let mut input = Cursor::new(b"fold\nfold\n".to_vec());
    let code = run_with_input(
        [
            "holdem",
            "play",
            "--vs",
            "human",
            "--difficulty",
            "easy",
            "--hands",
            "2",
            "--seed",
            "3",
        ],
        &mut input,
        &mut out,
        &mut err,
    );
    let out = String::from_utf8(out).unwrap();
    assert_eq!(code, 0, "stderr: {}", String::from_utf8_lossy(&err));
    assert!(out.contains("Hand 2 (dealer Player 2"));
    assert_eq!(out.matches("Player 1: fold").count(), 2);
    assert!(out.contains("Hands played: 2"));
}
