use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::GameError;

/// The drawable pool of a round. The top of the deck is the end of the vector.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep initial order until shuffle is called explicitly
        Self {
            cards: full_deck(),
            rng,
        }
    }

    /// Replaces the card order; the last card is drawn first.
    ///
    /// The order must be a permutation of the full 52-card deck. The RNG is
    /// kept, so later shuffles continue the same stream. Nothing changes on
    /// error.
    pub fn restack(&mut self, order: Vec<Card>) -> Result<(), GameError> {
        let unique = order.iter().collect::<HashSet<&Card>>().len();
        if order.len() != 52 || unique != 52 {
            return Err(GameError::MalformedDeck {
                cards: order.len(),
                unique,
            });
        }
        self.cards = order;
        Ok(())
    }

    /// Restores all 52 cards and shuffles them.
    pub fn shuffle(&mut self) {
        self.cards = full_deck();
        self.cards.shuffle(&mut self.rng);
    }

    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Puts a voided draw back and reshuffles what remains.
    pub fn return_and_reshuffle(&mut self, card: Card) {
        self.cards.push(card);
        self.cards.shuffle(&mut self.rng);
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }
}
