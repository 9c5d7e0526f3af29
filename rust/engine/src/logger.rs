use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::rules::{Guess, Stage};

/// How a single guess resolved.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuessResult {
    /// Equal value to the previous card; the card went back into the deck
    Push,
    Correct,
    Incorrect,
}

/// One guess and the card it was judged against.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct GuessRecord {
    pub stage: Stage,
    pub guess: Guess,
    pub card: Card,
    pub result: GuessResult,
}

/// How a round ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resolution {
    /// All four stages guessed correctly
    Win,
    /// Player took the current multiplier
    CashOut,
    Loss,
}

impl Resolution {
    pub fn is_win(self) -> bool {
        !matches!(self, Resolution::Loss)
    }
}

/// Complete record of a resolved round.
/// Serialized to JSONL format for round history storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Unique identifier (format: YYYYMMDD-NNNNNN); empty until written
    #[serde(default)]
    pub round_id: String,
    /// Seed of the session RNG (rounds in a session share one RNG stream)
    pub seed: Option<u64>,
    pub bet: f64,
    /// Chronological list of guesses, pushes included
    pub guesses: Vec<GuessRecord>,
    /// Cards kept on the table when the round ended
    pub drawn: Vec<Card>,
    pub resolution: Resolution,
    pub multiplier: f64,
    /// Amount credited on a win or cash-out, zero on a loss
    pub payout: f64,
    pub balance_after: f64,
    /// Timestamp when the round was written (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

impl RoundRecord {
    /// Balance change caused by this round.
    pub fn net(&self) -> f64 {
        match self.resolution {
            Resolution::Loss => -self.bet,
            _ => self.payout,
        }
    }
}

pub fn format_round_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Appends round records to a JSONL file, one object per line.
#[derive(Debug)]
pub struct RoundLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl RoundLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_round_id(&self.date, self.seq)
    }

    /// Writes `record`, assigning an id and timestamp when missing.
    /// Returns the record as written.
    pub fn write(&mut self, record: &RoundRecord) -> std::io::Result<RoundRecord> {
        let mut rec = record.clone();
        if rec.round_id.is_empty() {
            rec.round_id = self.next_id();
        }
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(rec)
    }
}
