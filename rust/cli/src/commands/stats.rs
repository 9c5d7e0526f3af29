//! `stats`: aggregates round histories written by `play --output` or
//! `sim --output`.
//!
//! Accepts a single `.jsonl`/`.jsonl.zst` file or a directory, walked
//! recursively. Unparseable lines are counted and reported, never fatal,
//! unless nothing valid was read from a single file.

use std::io::Write;
use std::path::Path;

use ridebus_engine::logger::{GuessResult, Resolution, RoundRecord};
use ridebus_engine::stats::Stats;

use crate::error::CliError;
use crate::io_utils::{is_history_file, read_text_auto};
use crate::ui;

#[derive(Debug, Default)]
struct Summary {
    stats: Stats,
    full_wins: u64,
    cash_outs: u64,
    pushes: u64,
    wagered: f64,
    net: f64,
    skipped: u64,
    corrupted: u64,
}

impl Summary {
    fn add(&mut self, rec: &RoundRecord) {
        self.stats.record(rec.resolution.is_win(), rec.payout);
        match rec.resolution {
            Resolution::Win => self.full_wins += 1,
            Resolution::CashOut => self.cash_outs += 1,
            Resolution::Loss => {}
        }
        self.pushes += rec
            .guesses
            .iter()
            .filter(|g| g.result == GuessResult::Push)
            .count() as u64;
        self.wagered += rec.bet;
        self.net += rec.net();
    }

    fn consume(&mut self, content: &str) {
        let has_trailing_nl = content.ends_with('\n');
        let lines: Vec<&str> = content.lines().filter(|l| !l.trim().is_empty()).collect();
        for (i, line) in lines.iter().enumerate() {
            match serde_json::from_str::<RoundRecord>(line) {
                Ok(rec) => self.add(&rec),
                // A torn final line is an interrupted write, not corruption
                Err(_) if i == lines.len() - 1 && !has_trailing_nl => self.skipped += 1,
                Err(_) => self.corrupted += 1,
            }
        }
    }
}

pub fn handle_stats_command(
    input: String,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let path = Path::new(&input);
    let mut summary = Summary::default();

    if path.is_dir() {
        let mut stack = vec![path.to_path_buf()];
        while let Some(dir) = stack.pop() {
            let Ok(entries) = std::fs::read_dir(&dir) else {
                continue;
            };
            for entry in entries.filter_map(Result::ok) {
                let p = entry.path();
                if p.is_dir() {
                    stack.push(p);
                } else if is_history_file(&p) {
                    match read_text_auto(&p) {
                        Ok(content) => summary.consume(&content),
                        Err(e) => {
                            ui::display_warning(
                                err,
                                &format!("Failed to read {}: {}", p.display(), e),
                            )?;
                            summary.corrupted += 1;
                        }
                    }
                }
            }
        }
    } else {
        let content = read_text_auto(path).map_err(|e| {
            CliError::InvalidInput(format!("Failed to read {}: {}", input, e))
        })?;
        summary.consume(&content);
    }

    if summary.corrupted > 0 {
        ui::display_warning(
            err,
            &format!("Skipped {} corrupted record(s)", summary.corrupted),
        )?;
    }
    if summary.skipped > 0 {
        ui::display_warning(
            err,
            &format!("Discarded {} incomplete final line(s)", summary.skipped),
        )?;
    }
    if !path.is_dir()
        && summary.stats.total_games == 0
        && (summary.corrupted > 0 || summary.skipped > 0)
    {
        return Err(CliError::InvalidInput(format!(
            "no valid round records in {}",
            input
        )));
    }

    let stats = &summary.stats;
    let report = serde_json::json!({
        "rounds": stats.total_games,
        "wins": stats.wins,
        "losses": stats.losses,
        "full_wins": summary.full_wins,
        "cash_outs": summary.cash_outs,
        "pushes": summary.pushes,
        "highest_win": stats.highest_win,
        "win_rate": stats.win_rate(),
        "wagered": round_cents(summary.wagered),
        "net": round_cents(summary.net),
        "corrupted": summary.corrupted,
    });
    let json_output = serde_json::to_string_pretty(&report).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_output)?;
    Ok(())
}

fn round_cents(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
