//! Always bets on the most likely outcome and rides the round to the end.

use ridebus_engine::engine::RoundSnapshot;
use ridebus_engine::odds::Odds;

use crate::{fallback, Decision, Strategy};

#[derive(Debug, Clone, Default)]
pub struct Favorite;

impl Favorite {
    pub fn new() -> Self {
        Self
    }
}

impl Strategy for Favorite {
    fn decide(&mut self, _state: &RoundSnapshot, odds: &Odds) -> Decision {
        match odds.favorite() {
            Some((guess, _)) => Decision::Guess(guess),
            None => fallback(odds),
        }
    }

    fn name(&self) -> &str {
        "favorite"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ridebus_engine::cards::{full_deck, Card, Rank, Suit};
    use ridebus_engine::odds::compute_odds;
    use ridebus_engine::rules::{Guess, Stage};

    fn snapshot(stage: Stage, drawn: Vec<Card>) -> RoundSnapshot {
        RoundSnapshot {
            stage,
            drawn_cards: drawn,
            payout_multiplier: 1.0,
            balance: 1000.0,
            current_bet: Some(10.0),
            deck_remaining: 50,
            reveal_pending: false,
        }
    }

    #[test]
    fn picks_lower_above_a_queen() {
        let queen = Card::new(Rank::Queen, Suit::Spades);
        let deck: Vec<Card> = full_deck().into_iter().filter(|c| *c != queen).collect();
        let odds = compute_odds(Stage::HigherLower, &deck, &[queen]).unwrap();
        let mut ai = Favorite::new();
        assert_eq!(
            ai.decide(&snapshot(Stage::HigherLower, vec![queen]), &odds),
            Decision::Guess(Guess::Lower)
        );
    }

    #[test]
    fn picks_outside_for_a_narrow_pair() {
        let a = Card::new(Rank::Six, Suit::Hearts);
        let b = Card::new(Rank::Nine, Suit::Clubs);
        let deck: Vec<Card> = full_deck()
            .into_iter()
            .filter(|c| *c != a && *c != b)
            .collect();
        let odds = compute_odds(Stage::Between, &deck, &[a, b]).unwrap();
        let mut ai = Favorite::new();
        assert_eq!(
            ai.decide(&snapshot(Stage::Between, vec![a, b]), &odds),
            Decision::Guess(Guess::Outside)
        );
    }

    #[test]
    fn never_cashes_out_while_a_guess_is_offered() {
        let odds = compute_odds(Stage::Color, &full_deck(), &[]).unwrap();
        let mut ai = Favorite::new();
        assert_eq!(
            ai.decide(&snapshot(Stage::Color, vec![]), &odds),
            Decision::Guess(Guess::Red)
        );
    }
}
