//! Uniform choice among the offered guesses. Seeded for reproducible runs.

use rand::seq::IndexedRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use ridebus_engine::engine::RoundSnapshot;
use ridebus_engine::odds::Odds;
use ridebus_engine::rules::Guess;

use crate::{fallback, Decision, Strategy};

#[derive(Debug, Clone)]
pub struct RandomGuesser {
    rng: ChaCha20Rng,
}

impl RandomGuesser {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl Strategy for RandomGuesser {
    fn decide(&mut self, _state: &RoundSnapshot, odds: &Odds) -> Decision {
        let offered: Vec<Guess> = odds.offered().map(|(g, _)| g).collect();
        match offered.choose(&mut self.rng) {
            Some(&guess) => Decision::Guess(guess),
            None => fallback(odds),
        }
    }

    fn name(&self) -> &str {
        "random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ridebus_engine::cards::{full_deck, Card, Rank, Suit};
    use ridebus_engine::odds::compute_odds;
    use ridebus_engine::rules::Stage;

    fn snapshot(stage: Stage) -> RoundSnapshot {
        RoundSnapshot {
            stage,
            drawn_cards: vec![],
            payout_multiplier: 1.0,
            balance: 1000.0,
            current_bet: Some(10.0),
            deck_remaining: 51,
            reveal_pending: false,
        }
    }

    #[test]
    fn same_seed_same_choices() {
        let odds = compute_odds(Stage::Suit, &full_deck(), &[]).unwrap();
        let mut a = RandomGuesser::new(5);
        let mut b = RandomGuesser::new(5);
        for _ in 0..20 {
            assert_eq!(
                a.decide(&snapshot(Stage::Suit), &odds),
                b.decide(&snapshot(Stage::Suit), &odds)
            );
        }
    }

    #[test]
    fn only_picks_offered_guesses() {
        // Nothing is higher than an ace
        let ace = Card::new(Rank::Ace, Suit::Hearts);
        let deck: Vec<Card> = full_deck().into_iter().filter(|c| *c != ace).collect();
        let odds = compute_odds(Stage::HigherLower, &deck, &[ace]).unwrap();
        let mut ai = RandomGuesser::new(11);
        for _ in 0..50 {
            assert_eq!(
                ai.decide(&snapshot(Stage::HigherLower), &odds),
                Decision::Guess(Guess::Lower)
            );
        }
    }
}
