//! Shared fixtures for CLI integration tests.
#![allow(dead_code)]

use std::io::Cursor;

/// Variables that influence configuration resolution.
pub const CONFIG_VARS: &[&str] = &[
    "RIDEBUS_CONFIG",
    "RIDEBUS_INITIAL_BALANCE",
    "RIDEBUS_HOUSE_EDGE",
    "RIDEBUS_REVEAL_DELAY_MS",
    "RIDEBUS_DEFAULT_BET",
    "RIDEBUS_SEED",
    "RIDEBUS_EARLY_CASHOUT",
];

/// Sets environment variables for the lifetime of the guard, restoring the
/// previous values on drop. Config variables not listed are cleared.
/// Callers must be `#[serial]`.
pub struct EnvGuard {
    restores: Vec<(String, Option<String>)>,
}

impl EnvGuard {
    pub fn apply(pairs: &[(&str, &str)]) -> Self {
        let mut restores = Vec::new();
        for key in CONFIG_VARS {
            restores.push((key.to_string(), std::env::var(key).ok()));
            unsafe {
                std::env::remove_var(key);
            }
        }
        for (key, value) in pairs {
            if !CONFIG_VARS.contains(key) {
                restores.push((key.to_string(), std::env::var(key).ok()));
            }
            unsafe {
                std::env::set_var(key, value);
            }
        }
        EnvGuard { restores }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, previous) in self.restores.iter().rev() {
            unsafe {
                match previous {
                    Some(val) => std::env::set_var(key, val),
                    None => std::env::remove_var(key),
                }
            }
        }
    }
}

pub struct Output {
    pub code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Runs the CLI in-process with `input` as stdin.
pub fn run_cli(args: &[&str], input: &str) -> Output {
    let mut argv = vec!["ridebus"];
    argv.extend_from_slice(args);
    let mut stdin = Cursor::new(input.as_bytes().to_vec());
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = ridebus_cli::run_with_input(argv, &mut stdin, &mut out, &mut err);
    Output {
        code,
        stdout: String::from_utf8(out).expect("utf-8 stdout"),
        stderr: String::from_utf8(err).expect("utf-8 stderr"),
    }
}
