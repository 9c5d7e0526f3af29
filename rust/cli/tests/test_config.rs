mod helpers;

use helpers::{run_cli, EnvGuard};
use serde_json::Value;
use serial_test::serial;
use std::io::Write;

fn cfg_json() -> Value {
    let res = run_cli(&["cfg"], "");
    assert_eq!(res.code, 0, "stderr: {}", res.stderr);
    serde_json::from_str(&res.stdout).unwrap()
}

#[test]
#[serial]
fn defaults_are_reported_with_default_source() {
    let _env = EnvGuard::apply(&[]);
    let json = cfg_json();
    assert_eq!(json["initial_balance"]["value"], 1000.0);
    assert_eq!(json["initial_balance"]["source"], "default");
    assert_eq!(json["house_edge"]["value"], 0.9);
    assert_eq!(json["reveal_delay_ms"]["value"], 500);
    assert_eq!(json["seed"]["value"], Value::Null);
    assert_eq!(json["early_cashout"]["value"], false);
}

#[test]
#[serial]
fn env_overrides_file() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "seed = 11\ndefault_bet = 25.0\nearly_cashout = true").unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let _env = EnvGuard::apply(&[("RIDEBUS_CONFIG", path.as_str()), ("RIDEBUS_SEED", "99")]);
    let json = cfg_json();
    assert_eq!(json["seed"]["value"], 99);
    assert_eq!(json["seed"]["source"], "env");
    assert_eq!(json["default_bet"]["value"], 25.0);
    assert_eq!(json["default_bet"]["source"], "file");
    assert_eq!(json["early_cashout"]["source"], "file");
    assert_eq!(json["house_edge"]["source"], "default");
}

#[test]
#[serial]
fn invalid_house_edge_fails() {
    let _env = EnvGuard::apply(&[("RIDEBUS_HOUSE_EDGE", "1.5")]);
    let res = run_cli(&["cfg"], "");
    assert_eq!(res.code, 2);
    assert!(res.stderr.contains("house_edge"));
}

#[test]
#[serial]
fn unparseable_env_value_fails() {
    let _env = EnvGuard::apply(&[("RIDEBUS_SEED", "abc")]);
    let res = run_cli(&["cfg"], "");
    assert_eq!(res.code, 2);
    assert!(res.stderr.contains("Invalid seed"));
}

#[test]
#[serial]
fn unknown_file_key_fails() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "starting_stack = 20000").unwrap();
    let path = file.path().to_str().unwrap().to_string();
    let _env = EnvGuard::apply(&[("RIDEBUS_CONFIG", path.as_str())]);
    let res = run_cli(&["cfg"], "");
    assert_eq!(res.code, 2);
    assert!(res.stderr.contains("malformed config file"));
}

#[test]
#[serial]
fn configured_house_edge_changes_odds_payouts() {
    let _env = EnvGuard::apply(&[("RIDEBUS_HOUSE_EDGE", "1.0")]);
    let res = run_cli(&["odds"], "");
    assert_eq!(res.code, 0);
    assert!(res.stdout.contains("x2.00"), "{}", res.stdout);
}
