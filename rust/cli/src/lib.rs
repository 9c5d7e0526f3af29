//! # ridebus CLI Library
//!
//! Command-line front end for the ride-the-bus engine: interactive play,
//! strategy simulation, history statistics and odds lookup.
//!
//! ## Main Entry Point
//!
//! [`run`] parses arguments and dispatches to a command handler, writing to
//! the given streams and returning the process exit code.
//!
//! ```no_run
//! use std::io;
//! let args = vec!["ridebus", "sim", "--rounds", "100", "--seed", "7"];
//! let code = ridebus_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Interactive session on stdin
//! - `sim`: Let a strategy play a batch of rounds
//! - `stats`: Aggregate JSONL round histories
//! - `odds`: Odds table for a sequence of drawn cards
//! - `cfg`: Display resolved configuration

#[macro_use]
mod macros;

pub mod cli;
pub mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod ui;
pub mod validation;

use clap::Parser;
use std::io::{BufRead, Write};

use cli::{Commands, RidebusCli};
use commands::{
    handle_cfg_command, handle_odds_command, handle_play_command, handle_sim_command,
    handle_stats_command,
};

pub use error::CliError;

const COMMANDS: &[&str] = &["play", "sim", "stats", "odds", "cfg"];

/// Parses `args` and runs the selected command with stdin as play input.
///
/// Returns `0` on success and `2` on any error.
///
/// ```
/// use std::io;
/// let args = vec!["ridebus", "odds", "--cards", "7h,Qs"];
/// let code = ridebus_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    run_with_input(args, &mut stdin_lock, out, err)
}

/// Same as [`run`], reading interactive input from `input`.
pub fn run_with_input<I, S>(
    args: I,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match RidebusCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version go to stdout with success
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                if write!(out, "{}", e).is_err() {
                    return exit_code::ERROR;
                }
                return exit_code::SUCCESS;
            }
            write_or_exit!(err, "{}", e);
            write_or_exit!(err, "Usage: ridebus <command> [options]\n");
            write_or_exit!(err, "Commands:");
            for c in COMMANDS {
                write_or_exit!(err, "  {}", c);
            }
            write_or_exit!(err, "\nFor full help, run: ridebus --help");
            return exit_code::ERROR;
        }
    };

    let result = match cli.cmd {
        Commands::Play { bet, seed, output } => {
            handle_play_command(bet, seed, output, out, err, input)
        }
        Commands::Sim {
            rounds,
            bet,
            strategy,
            seed,
            output,
        } => handle_sim_command(rounds, bet, strategy, seed, output, out, err),
        Commands::Stats { input } => handle_stats_command(input, out, err),
        Commands::Odds { cards, stage } => handle_odds_command(&cards, stage, out),
        Commands::Cfg => handle_cfg_command(out, err),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_command_parses() {
        let commands = vec![
            vec!["ridebus", "cfg"],
            vec!["ridebus", "play"],
            vec!["ridebus", "play", "--bet", "25", "--seed", "1"],
            vec!["ridebus", "sim", "--rounds", "3"],
            vec!["ridebus", "stats", "--input", "rounds.jsonl"],
            vec!["ridebus", "odds", "--cards", "7h,Qs", "--stage", "2"],
        ];
        for args in commands {
            assert!(RidebusCli::try_parse_from(&args).is_ok(), "{:?}", args);
        }
        assert_eq!(COMMANDS.len(), 5);
    }

    #[test]
    fn odds_stage_out_of_range_is_rejected_by_clap() {
        let result = RidebusCli::try_parse_from(["ridebus", "odds", "--stage", "4"]);
        assert!(result.is_err());
    }

    #[test]
    fn sim_requires_rounds() {
        assert!(RidebusCli::try_parse_from(["ridebus", "sim"]).is_err());
    }

    #[test]
    fn odds_cards_split_on_commas() {
        let cli = RidebusCli::try_parse_from(["ridebus", "odds", "--cards", "7h,Qs"]).unwrap();
        match cli.cmd {
            Commands::Odds { cards, stage } => {
                assert_eq!(cards, vec!["7h".to_string(), "Qs".to_string()]);
                assert_eq!(stage, None);
            }
            other => panic!("expected odds, got {:?}", other),
        }
    }
}
