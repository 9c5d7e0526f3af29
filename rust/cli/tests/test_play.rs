mod helpers;

use helpers::{run_cli, EnvGuard};
use serial_test::serial;

fn no_delay() -> EnvGuard {
    EnvGuard::apply(&[("RIDEBUS_REVEAL_DELAY_MS", "0")])
}

#[test]
#[serial]
fn quit_leaves_balance_untouched() {
    let _env = no_delay();
    let res = run_cli(&["play", "--seed", "1"], "quit\n");
    assert_eq!(res.code, 0);
    assert!(res.stdout.contains("Ride the Bus  seed=1"));
    assert!(res.stdout.contains("Final balance: $1000.00"));
}

#[test]
#[serial]
fn first_guess_is_judged() {
    let _env = no_delay();
    let res = run_cli(&["play", "--seed", "5"], "start 10\nred\nquit\n");
    assert_eq!(res.code, 0, "stderr: {}", res.stderr);
    assert!(res.stdout.contains("Bet: $10.00"));
    assert!(
        res.stdout.contains("correct! Multiplier x1.80")
            || res.stdout.contains("wrong. You lose $10.00"),
        "{}",
        res.stdout
    );
}

#[test]
#[serial]
fn wrong_stage_guess_is_reported_and_play_continues() {
    let _env = no_delay();
    let res = run_cli(&["play", "--seed", "5"], "start\nhigher\nstats\nquit\n");
    assert_eq!(res.code, 0);
    assert!(res.stderr.contains("not valid during stage"), "{}", res.stderr);
    assert!(res.stdout.contains("Games: 0"));
}

#[test]
#[serial]
fn cash_out_before_a_win_is_rejected_by_default() {
    let _env = no_delay();
    let res = run_cli(&["play", "--seed", "5"], "start\ncash\nquit\n");
    assert!(res.stderr.contains("Cannot cash out before the first correct guess"));
    assert!(res.stdout.contains("Round abandoned; $10.00 stays in your balance."));
}

#[test]
#[serial]
fn early_cashout_returns_the_bet() {
    let _env = EnvGuard::apply(&[
        ("RIDEBUS_REVEAL_DELAY_MS", "0"),
        ("RIDEBUS_EARLY_CASHOUT", "true"),
    ]);
    let res = run_cli(&["play", "--seed", "5", "--bet", "20"], "start\ncash\nquit\n");
    assert!(res.stdout.contains("Cashed out $20.00."), "{}", res.stdout);
    assert!(res.stdout.contains("Final balance: $1020.00"));
}

#[test]
#[serial]
fn oversized_bet_is_rejected() {
    let _env = no_delay();
    let res = run_cli(&["play", "--seed", "5"], "start 5000\nodds\nquit\n");
    assert!(res.stderr.contains("Invalid bet amount: 5000"));
    assert!(res.stdout.contains("No round in progress."));
}

#[test]
#[serial]
fn same_seed_same_session() {
    let _env = no_delay();
    let input = "start\nred\nhigher\nin\nhearts\nstart\nblack\nlower\nout\nspades\nquit\n";
    let a = run_cli(&["play", "--seed", "77"], input);
    let b = run_cli(&["play", "--seed", "77"], input);
    assert_eq!(a.stdout, b.stdout);
}

#[test]
#[serial]
fn resolved_rounds_are_written_to_output() {
    let _env = EnvGuard::apply(&[
        ("RIDEBUS_REVEAL_DELAY_MS", "0"),
        ("RIDEBUS_EARLY_CASHOUT", "1"),
    ]);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history").join("rounds.jsonl");
    let path_str = path.to_str().unwrap();

    let res = run_cli(
        &["play", "--seed", "3", "--output", path_str],
        "start 10\ncash\nstart 10\ncash\nquit\n",
    );
    assert_eq!(res.code, 0, "stderr: {}", res.stderr);

    let contents = std::fs::read_to_string(&path).unwrap();
    let records: Vec<serde_json::Value> = contents
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["resolution"], "cash_out");
    assert_eq!(records[0]["payout"], 10.0);
    assert!(records[1]["round_id"].as_str().unwrap().ends_with("-000002"));
}

#[test]
#[serial]
fn help_and_invalid_input() {
    let _env = no_delay();
    let res = run_cli(&["play"], "help\nfold\n");
    assert!(res.stdout.contains("start [amount]"));
    assert!(res.stderr.contains("Unrecognized input 'fold'"));
    // End of input ends the session cleanly
    assert_eq!(res.code, 0);
}

#[test]
#[serial]
fn non_positive_bet_flag_fails() {
    let _env = no_delay();
    let res = run_cli(&["play", "--bet", "0"], "quit\n");
    assert_eq!(res.code, 2);
    assert!(res.stderr.contains("bet must be > 0"));
}
