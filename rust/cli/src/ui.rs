//! Terminal output helpers shared by the commands.

use std::io::Write;

use ridebus_engine::engine::RoundSnapshot;
use ridebus_engine::stats::Stats;

use crate::formatters::{format_cards, format_money, format_percent};

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

/// One status line: balance, bet and multiplier, followed by the table cards.
pub fn write_table(out: &mut dyn Write, state: &RoundSnapshot) -> std::io::Result<()> {
    match state.current_bet {
        Some(bet) => writeln!(
            out,
            "Balance: {}  Bet: {}  Multiplier: x{:.2}  Potential: {}",
            format_money(state.balance),
            format_money(bet),
            state.payout_multiplier,
            format_money(bet * state.payout_multiplier)
        )?,
        None => writeln!(out, "Balance: {}", format_money(state.balance))?,
    }
    if !state.drawn_cards.is_empty() {
        writeln!(out, "Table: {}", format_cards(&state.drawn_cards))?;
    }
    Ok(())
}

pub fn write_stats(out: &mut dyn Write, stats: &Stats) -> std::io::Result<()> {
    writeln!(
        out,
        "Games: {}  Wins: {}  Losses: {}  Win rate: {}  Highest win: {}",
        stats.total_games,
        stats.wins,
        stats.losses,
        format_percent(stats.win_rate()),
        format_money(stats.highest_win)
    )
}
