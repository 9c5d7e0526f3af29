//! `sim`: lets an automated strategy play a batch of rounds.
//!
//! One engine (one wallet, one seeded deck) carries across all rounds. The
//! run stops early once the balance cannot cover the bet. A JSON summary is
//! printed to stdout; resolved rounds optionally go to a JSONL file.

use std::io::Write;

use ridebus_ai::{create_strategy, Decision, STRATEGY_NAMES};
use ridebus_engine::engine::RoundEngine;
use ridebus_engine::logger::{GuessResult, RoundLogger};
use tracing::info;

use crate::config;
use crate::error::CliError;
use crate::io_utils::ensure_parent_dir;
use crate::ui;

pub fn handle_sim_command(
    rounds: u32,
    bet: Option<f64>,
    strategy: String,
    seed: Option<u64>,
    output: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if rounds == 0 {
        return Err(CliError::InvalidInput("rounds must be >= 1".to_string()));
    }

    let cfg = config::load()?;
    let bet = bet.unwrap_or(cfg.default_bet);
    let mut engine = RoundEngine::new(cfg.engine_config(seed));
    let mut player = create_strategy(&strategy, engine.seed()).ok_or_else(|| {
        CliError::InvalidInput(format!(
            "unknown strategy '{}' (expected one of: {})",
            strategy,
            STRATEGY_NAMES.join(", ")
        ))
    })?;

    let mut logger = match output.as_deref() {
        Some(p) => {
            let p = std::path::Path::new(p);
            ensure_parent_dir(p)?;
            Some(RoundLogger::create(p)?)
        }
        None => None,
    };

    let mut played = 0u32;
    let mut pushes = 0u64;
    let mut net = 0.0;
    let mut stopped_early = false;

    for _ in 0..rounds {
        if engine.balance() < bet {
            ui::display_warning(
                err,
                &format!(
                    "balance {:.2} cannot cover bet {:.2}; stopping after {} round(s)",
                    engine.balance(),
                    bet,
                    played
                ),
            )?;
            stopped_early = true;
            break;
        }

        engine.start_round(bet)?;
        while engine.state().current_bet.is_some() {
            match player.decide(&engine.state(), &engine.odds()) {
                Decision::Guess(guess) => {
                    engine.submit_guess(guess)?;
                }
                Decision::CashOut => {
                    engine.cash_out()?;
                }
            }
        }
        played += 1;

        if let Some(rec) = engine.take_finished_round() {
            pushes += rec
                .guesses
                .iter()
                .filter(|g| g.result == GuessResult::Push)
                .count() as u64;
            net += rec.net();
            if let Some(l) = logger.as_mut() {
                l.write(&rec)?;
            }
        }
    }

    let stats = engine.stats();
    info!(
        strategy = player.name(),
        played,
        balance = engine.balance(),
        "simulation finished"
    );

    let summary = serde_json::json!({
        "strategy": player.name(),
        "seed": engine.seed(),
        "bet": bet,
        "rounds_requested": rounds,
        "rounds_played": played,
        "stopped_early": stopped_early,
        "wins": stats.wins,
        "losses": stats.losses,
        "win_rate": stats.win_rate(),
        "highest_win": stats.highest_win,
        "pushes": pushes,
        "net": (net * 100.0_f64).round() / 100.0,
        "final_balance": engine.balance(),
    });
    let json_str = serde_json::to_string_pretty(&summary).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
