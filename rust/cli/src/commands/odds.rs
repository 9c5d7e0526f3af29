//! `odds`: the odds table for a given sequence of drawn cards, measured
//! against the rest of a full deck.

use std::io::Write;

use ridebus_engine::cards::full_deck;
use ridebus_engine::odds::compute_odds;
use ridebus_engine::rules::Stage;

use crate::config;
use crate::error::CliError;
use crate::formatters::{format_cards, format_odds_table, format_percent, stage_prompt};
use crate::validation::parse_cards;

pub fn handle_odds_command(
    cards: &[String],
    stage: Option<u8>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let house_edge = config::load()?.house_edge;
    let drawn = parse_cards(cards).map_err(CliError::InvalidInput)?;
    if drawn.len() > 3 {
        return Err(CliError::InvalidInput(format!(
            "at most 3 drawn cards, got {}",
            drawn.len()
        )));
    }

    let index = stage.map(|s| s as i8).unwrap_or(drawn.len() as i8);
    let stage = Stage::from_index(index)
        .filter(|s| s.is_active())
        .ok_or_else(|| CliError::InvalidInput(format!("stage must be 0-3, got {}", index)))?;

    let deck: Vec<_> = full_deck()
        .into_iter()
        .filter(|c| !drawn.contains(c))
        .collect();
    let odds = compute_odds(stage, &deck, &drawn)?;

    writeln!(out, "Drawn: {}", format_cards(&drawn))?;
    writeln!(out, "Stage {}: {}", stage.index() + 1, stage_prompt(stage))?;
    let lines = format_odds_table(&odds, house_edge);
    if lines.is_empty() {
        writeln!(out, "  no guess can win")?;
    }
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    if stage == Stage::HigherLower {
        let push = 1.0 - odds.total();
        writeln!(out, "  {:<9}{:>7}", "push", format_percent(push))?;
    }
    Ok(())
}
