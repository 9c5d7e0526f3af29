//! # Play Command
//!
//! Interactive ride-the-bus session on stdin. The player starts a round with
//! a bet, then answers each stage prompt until the round is won, lost or
//! cashed out. Every reveal is held for the configured delay before the
//! result is shown.

use std::io::{BufRead, Write};
use std::path::Path;
use std::time::Duration;

use ridebus_engine::engine::{Advance, GuessOutcome, RoundEngine};
use ridebus_engine::logger::RoundLogger;
use ridebus_engine::rules::Stage;

use crate::config;
use crate::error::CliError;
use crate::formatters::{format_card, format_money, format_odds_table, stage_prompt};
use crate::io_utils::{ensure_parent_dir, read_stdin_line};
use crate::ui;
use crate::validation::{parse_play_input, ParseResult};

const HELP: &str = "\
Commands:
  start [amount]            place a bet and deal a new round
  red | black               stage 1
  higher | lower            stage 2 (equal value is a push)
  in | out                  stage 3 (between the first two cards or not)
  hearts | diamonds | clubs | spades
                            stage 4
  cash                      take the current multiplier
  odds                      show the odds for the current stage
  stats                     session statistics
  help                      this message
  quit                      leave the table";

/// Runs an interactive session until `quit` or end of input.
///
/// `bet` is the amount `start` uses without an argument; it falls back to the
/// configured default bet. Resolved rounds are appended to `output` when set.
pub fn handle_play_command(
    bet: Option<f64>,
    seed: Option<u64>,
    output: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let cfg = config::load()?;
    let default_bet = bet.unwrap_or(cfg.default_bet);
    if !(default_bet.is_finite() && default_bet > 0.0) {
        return Err(CliError::InvalidInput("bet must be > 0".to_string()));
    }

    let mut engine_cfg = cfg.engine_config(seed);
    engine_cfg.gate_reveals = true;
    let mut engine = RoundEngine::new(engine_cfg);
    let house_edge = cfg.house_edge;
    let delay = Duration::from_millis(cfg.reveal_delay_ms);

    let mut logger = match output.as_deref() {
        Some(p) => {
            ensure_parent_dir(Path::new(p))?;
            Some(RoundLogger::create(p)?)
        }
        None => None,
    };

    writeln!(out, "Ride the Bus  seed={}", engine.seed())?;
    ui::write_table(out, &engine.state())?;
    writeln!(out, "Type 'help' for commands.")?;

    loop {
        write!(out, "{} > ", stage_prompt(engine.stage()))?;
        out.flush()?;

        let Some(line) = read_stdin_line(stdin) else {
            writeln!(out)?;
            break;
        };
        if line.is_empty() {
            continue;
        }

        match parse_play_input(&line) {
            ParseResult::Quit => break,
            ParseResult::Help => writeln!(out, "{}", HELP)?,
            ParseResult::Stats => ui::write_stats(out, &engine.stats())?,
            ParseResult::Odds => write_odds(out, &engine, house_edge)?,
            ParseResult::Invalid(msg) => ui::write_error(err, &msg)?,
            ParseResult::Start(amount) => {
                match engine.start_round(amount.unwrap_or(default_bet)) {
                    Ok(state) => {
                        ui::write_table(out, &state)?;
                        write_odds(out, &engine, house_edge)?;
                    }
                    Err(e) => ui::write_error(err, &e.to_string())?,
                }
            }
            ParseResult::Guess(guess) => match engine.submit_guess(guess) {
                Ok(outcome) => {
                    reveal(&mut engine, delay, out)?;
                    write_outcome(out, &outcome)?;
                    record_finished(&mut engine, logger.as_mut())?;
                    ui::write_table(out, &engine.state())?;
                    if engine.stage().is_active() {
                        write_odds(out, &engine, house_edge)?;
                    }
                }
                Err(e) => ui::write_error(err, &e.to_string())?,
            },
            ParseResult::CashOut => match engine.cash_out() {
                Ok(winnings) => {
                    reveal(&mut engine, delay, out)?;
                    writeln!(out, "Cashed out {}.", format_money(winnings))?;
                    record_finished(&mut engine, logger.as_mut())?;
                    ui::write_table(out, &engine.state())?;
                }
                Err(e) => ui::write_error(err, &e.to_string())?,
            },
        }

        if engine.stage() == Stage::Idle && engine.balance() <= 0.0 {
            writeln!(out, "Out of money.")?;
            break;
        }
    }

    if let Some(bet) = engine.state().current_bet {
        writeln!(
            out,
            "Round abandoned; {} stays in your balance.",
            format_money(bet)
        )?;
    }
    writeln!(out, "Final balance: {}", format_money(engine.balance()))?;
    ui::write_stats(out, &engine.stats())?;
    Ok(())
}

fn reveal(engine: &mut RoundEngine, delay: Duration, out: &mut dyn Write) -> Result<(), CliError> {
    if !delay.is_zero() {
        write!(out, "Drawing...")?;
        out.flush()?;
        std::thread::sleep(delay);
        writeln!(out)?;
    }
    engine.complete_reveal();
    Ok(())
}

fn write_outcome(out: &mut dyn Write, outcome: &GuessOutcome) -> std::io::Result<()> {
    match outcome {
        GuessOutcome::Push { card } => writeln!(
            out,
            "{}: push! Same value as the last card. It goes back in the deck; guess again.",
            format_card(card)
        ),
        GuessOutcome::Correct {
            card,
            multiplier,
            next: Advance::Stage(_),
        } => writeln!(out, "{}: correct! Multiplier x{:.2}", format_card(card), multiplier),
        GuessOutcome::Correct {
            card,
            next: Advance::Win { winnings },
            ..
        } => writeln!(
            out,
            "{}: correct! You rode the bus and won {}.",
            format_card(card),
            format_money(*winnings)
        ),
        GuessOutcome::Incorrect { card, loss } => writeln!(
            out,
            "{}: wrong. You lose {}.",
            format_card(card),
            format_money(*loss)
        ),
    }
}

fn write_odds(out: &mut dyn Write, engine: &RoundEngine, house_edge: f64) -> std::io::Result<()> {
    if !engine.stage().is_active() {
        return writeln!(out, "No round in progress.");
    }
    for line in format_odds_table(&engine.odds(), house_edge) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

fn record_finished(
    engine: &mut RoundEngine,
    logger: Option<&mut RoundLogger>,
) -> Result<(), CliError> {
    if let Some(rec) = engine.take_finished_round()
        && let Some(logger) = logger
    {
        logger.write(&rec)?;
    }
    Ok(())
}
