//! Favorite guesses, but banks the multiplier once a target stage is reached.

use ridebus_engine::engine::RoundSnapshot;
use ridebus_engine::odds::Odds;
use ridebus_engine::rules::Stage;

use crate::favorite::Favorite;
use crate::{Decision, Strategy};

#[derive(Debug, Clone)]
pub struct Cautious {
    /// Cash out on arriving at this stage instead of guessing it
    pub cash_at: Stage,
    inner: Favorite,
}

impl Cautious {
    /// `cash_at` must be past the color stage; the color stage is clamped to
    /// higher/lower since there is nothing to bank before the first win.
    pub fn new(cash_at: Stage) -> Self {
        let cash_at = match cash_at {
            Stage::Idle | Stage::Color => Stage::HigherLower,
            other => other,
        };
        Self {
            cash_at,
            inner: Favorite::new(),
        }
    }
}

impl Default for Cautious {
    fn default() -> Self {
        Self::new(Stage::Between)
    }
}

impl Strategy for Cautious {
    fn decide(&mut self, state: &RoundSnapshot, odds: &Odds) -> Decision {
        if state.stage.index() >= self.cash_at.index() {
            return Decision::CashOut;
        }
        self.inner.decide(state, odds)
    }

    fn name(&self) -> &str {
        "cautious"
    }
}
