//! Command-line argument definitions.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "ridebus",
    version,
    about = "Ride the bus: a four-stage card guessing game"
)]
pub struct RidebusCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play interactively on stdin
    Play {
        /// Bet used by `start` when no amount is given
        #[arg(long)]
        bet: Option<f64>,
        #[arg(long)]
        seed: Option<u64>,
        /// Append resolved rounds to this JSONL file
        #[arg(long)]
        output: Option<String>,
    },
    /// Let a strategy play a batch of rounds
    Sim {
        #[arg(long)]
        rounds: u32,
        #[arg(long)]
        bet: Option<f64>,
        /// favorite, cautious or random
        #[arg(long, default_value = "favorite")]
        strategy: String,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        output: Option<String>,
    },
    /// Summarize a round history file or directory
    Stats {
        #[arg(long)]
        input: String,
    },
    /// Show the odds table for a sequence of drawn cards
    Odds {
        /// Comma-separated cards already drawn, e.g. 7h,Qs
        #[arg(long, value_delimiter = ',')]
        cards: Vec<String>,
        /// Stage index 0-3; defaults to the number of cards given
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=3))]
        stage: Option<u8>,
    },
    /// Print the resolved configuration with sources
    Cfg,
}
