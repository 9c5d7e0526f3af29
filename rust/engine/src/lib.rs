//! # ridebus-engine: Ride-the-Bus Round Engine
//!
//! A deterministic engine for the single-player "ride the bus" card game: the
//! player bets, then guesses color, higher/lower, between/outside and suit of
//! successive cards. Every correct guess multiplies the payout by the
//! house-edged inverse of its probability; a miss loses the bet.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and deck construction
//! - [`deck`] - Seeded deck shuffling with ChaCha20 RNG
//! - [`rules`] - Stages, guess tokens, bet validation and guess evaluation
//! - [`odds`] - Stage odds and payout multipliers
//! - [`engine`] - The long-lived round engine (wallet, stats, state machine)
//! - [`stats`] - Session win/loss tally
//! - [`logger`] - RoundRecord serialization to JSONL
//! - [`errors`] - Error types for engine operations
//!
//! ## Quick Start
//!
//! ```rust
//! use ridebus_engine::engine::{EngineConfig, GuessOutcome, RoundEngine};
//!
//! let mut engine = RoundEngine::new(EngineConfig {
//!     seed: Some(42),
//!     ..EngineConfig::default()
//! });
//! engine.start_round(10.0).unwrap();
//!
//! // Pick the most likely guess on offer each time until the round ends
//! loop {
//!     let (guess, _) = engine.odds().favorite().unwrap();
//!     let outcome = engine.submit_guess(guess).unwrap();
//!     if outcome.ends_round() {
//!         break;
//!     }
//! }
//! assert!(engine.state().current_bet.is_none());
//! ```
//!
//! ## Odds and payouts
//!
//! ```rust
//! use ridebus_engine::odds::compute_payout;
//!
//! // Even odds pay 1.8x after the 10% house edge
//! assert_eq!(compute_payout(0.5).unwrap(), 1.8);
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod logger;
pub mod odds;
pub mod rules;
pub mod stats;
