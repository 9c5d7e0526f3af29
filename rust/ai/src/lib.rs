//! # ridebus-ai: Automated Ride-the-Bus Players
//!
//! Strategies that play rounds of the ride-the-bus engine without a human at
//! the keyboard. The CLI `sim` command uses them to play many rounds in a row.
//!
//! ## Core Components
//!
//! - [`Strategy`] - Trait every automated player implements
//! - [`Decision`] - What a strategy wants to do next
//! - [`favorite`] - Always takes the most likely guess
//! - [`cautious`] - Takes the most likely guess and banks early
//! - [`random`] - Picks uniformly among offered guesses
//! - [`create_strategy`] - Factory by name
//!
//! ## Quick Start
//!
//! ```rust
//! use ridebus_ai::{create_strategy, Decision};
//! use ridebus_engine::engine::{EngineConfig, RoundEngine};
//!
//! let mut strategy = create_strategy("favorite", 42).expect("known strategy");
//! let mut engine = RoundEngine::new(EngineConfig {
//!     seed: Some(42),
//!     ..EngineConfig::default()
//! });
//! engine.start_round(10.0).unwrap();
//!
//! while engine.state().current_bet.is_some() {
//!     match strategy.decide(&engine.state(), &engine.odds()) {
//!         Decision::Guess(guess) => {
//!             engine.submit_guess(guess).unwrap();
//!         }
//!         Decision::CashOut => {
//!             engine.cash_out().unwrap();
//!         }
//!     }
//! }
//! ```

use ridebus_engine::engine::RoundSnapshot;
use ridebus_engine::odds::Odds;
use ridebus_engine::rules::Guess;

pub mod cautious;
pub mod favorite;
pub mod random;

/// Next move chosen by a [`Strategy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Guess(Guess),
    CashOut,
}

/// Interface for automated players.
///
/// `decide` is only called while a round is active. A strategy must return a
/// guess that the odds actually offer, or a cash-out the engine will accept.
///
/// # Example Implementation
///
/// ```rust
/// use ridebus_ai::{Decision, Strategy};
/// use ridebus_engine::engine::RoundSnapshot;
/// use ridebus_engine::odds::Odds;
///
/// struct FirstOffered;
///
/// impl Strategy for FirstOffered {
///     fn decide(&mut self, _state: &RoundSnapshot, odds: &Odds) -> Decision {
///         let (guess, _) = odds.offered().next().expect("active stage offers a guess");
///         Decision::Guess(guess)
///     }
///
///     fn name(&self) -> &str {
///         "first"
///     }
/// }
/// ```
pub trait Strategy: Send {
    fn decide(&mut self, state: &RoundSnapshot, odds: &Odds) -> Decision;

    fn name(&self) -> &str;
}

/// Names accepted by [`create_strategy`].
pub const STRATEGY_NAMES: &[&str] = &["favorite", "cautious", "random"];

/// Builds a strategy by name. `seed` only matters for strategies that draw
/// random numbers. Returns `None` for unknown names.
///
/// ```rust
/// use ridebus_ai::create_strategy;
///
/// assert_eq!(create_strategy("cautious", 0).unwrap().name(), "cautious");
/// assert!(create_strategy("psychic", 0).is_none());
/// ```
pub fn create_strategy(name: &str, seed: u64) -> Option<Box<dyn Strategy>> {
    match name {
        "favorite" => Some(Box::new(favorite::Favorite::new())),
        "cautious" => Some(Box::new(cautious::Cautious::default())),
        "random" => Some(Box::new(random::RandomGuesser::new(seed))),
        _ => None,
    }
}

/// Decision when no guess is on offer. Only reachable with an exhausted deck.
fn fallback(odds: &Odds) -> Decision {
    match odds.entries().first() {
        Some(&(guess, _)) => Decision::Guess(guess),
        None => Decision::CashOut,
    }
}
