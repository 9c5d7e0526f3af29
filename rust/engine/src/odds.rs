//! Stage odds and payout multipliers.
//!
//! Odds are always measured against the cards still in the deck, before the
//! next card is drawn. The color stage is the exception: it is fixed at
//! 50/50 regardless of what has left the deck.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::GameError;
use crate::rules::{reference_pair, Guess, Stage};

/// Fraction of the fair payout returned to the player.
pub const HOUSE_EDGE: f64 = 0.9;

/// Probability of each guess token for one stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Odds {
    stage: Stage,
    entries: Vec<(Guess, f64)>,
}

impl Odds {
    pub fn empty(stage: Stage) -> Self {
        Self {
            stage,
            entries: Vec::new(),
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Probability for `guess`, or `None` when it does not belong to this stage.
    pub fn get(&self, guess: Guess) -> Option<f64> {
        self.entries
            .iter()
            .find(|(g, _)| *g == guess)
            .map(|&(_, p)| p)
    }

    pub fn entries(&self) -> &[(Guess, f64)] {
        &self.entries
    }

    /// Guesses that can be offered to the player: those with a non-zero chance.
    pub fn offered(&self) -> impl Iterator<Item = (Guess, f64)> + '_ {
        self.entries.iter().copied().filter(|&(_, p)| p > 0.0)
    }

    pub fn is_offered(&self, guess: Guess) -> bool {
        self.get(guess).is_some_and(|p| p > 0.0)
    }

    /// The offered guess with the highest probability. Ties keep display order.
    pub fn favorite(&self) -> Option<(Guess, f64)> {
        self.offered()
            .fold(None, |best: Option<(Guess, f64)>, cur| match best {
                Some(b) if b.1 >= cur.1 => Some(b),
                _ => Some(cur),
            })
    }

    pub fn total(&self) -> f64 {
        self.entries.iter().map(|(_, p)| p).sum()
    }
}

fn count_where(deck: &[Card], pred: impl Fn(&Card) -> bool) -> usize {
    deck.iter().filter(|&c| pred(c)).count()
}

fn share(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64
    }
}

/// Computes the odds of every guess for `stage`.
///
/// `deck` is the drawable pool and `drawn` the cards already drawn this round.
/// An empty deck yields zero for every guess, so nothing is offered.
///
/// # Errors
///
/// Returns [`GameError::MissingReference`] when `drawn` does not yet hold the
/// reference cards the stage compares against.
///
/// # Examples
///
/// ```
/// use ridebus_engine::cards::full_deck;
/// use ridebus_engine::odds::compute_odds;
/// use ridebus_engine::rules::{Guess, Stage};
///
/// let odds = compute_odds(Stage::Color, &full_deck(), &[]).unwrap();
/// assert_eq!(odds.get(Guess::Red), Some(0.5));
/// ```
pub fn compute_odds(stage: Stage, deck: &[Card], drawn: &[Card]) -> Result<Odds, GameError> {
    let needed = match stage {
        Stage::HigherLower => 1,
        Stage::Between => 2,
        _ => 0,
    };
    if drawn.len() < needed {
        return Err(GameError::MissingReference {
            stage,
            needed,
            drawn: drawn.len(),
        });
    }

    let total = deck.len();

    let entries = match stage {
        Stage::Idle => Vec::new(),
        Stage::Color => vec![(Guess::Red, 0.5), (Guess::Black, 0.5)],
        Stage::HigherLower => {
            let reference = drawn[drawn.len() - 1].value();
            vec![
                (Guess::Higher, share(count_where(deck, |c| c.value() > reference), total)),
                (Guess::Lower, share(count_where(deck, |c| c.value() < reference), total)),
            ]
        }
        Stage::Between => {
            let (low, high) = reference_pair(drawn).ok_or(GameError::MissingReference {
                stage,
                needed,
                drawn: drawn.len(),
            })?;
            let between = count_where(deck, |c| low < c.value() && c.value() < high);
            let outside = count_where(deck, |c| c.value() <= low || c.value() >= high);
            vec![
                (Guess::Between, share(between, total)),
                (Guess::Outside, share(outside, total)),
            ]
        }
        Stage::Suit => stage
            .guesses()
            .iter()
            .map(|&g| {
                let p = match g {
                    Guess::Suit(s) => share(count_where(deck, |c| c.suit == s), total),
                    _ => 0.0,
                };
                (g, p)
            })
            .collect(),
    };

    Ok(Odds { stage, entries })
}

/// Payout multiplier for a winning guess of probability `p`, using [`HOUSE_EDGE`].
///
/// # Examples
///
/// ```
/// use ridebus_engine::odds::compute_payout;
///
/// assert_eq!(compute_payout(0.5).unwrap(), 1.8);
/// assert!(compute_payout(0.0).is_err());
/// ```
pub fn compute_payout(probability: f64) -> Result<f64, GameError> {
    compute_payout_with_edge(probability, HOUSE_EDGE)
}

/// `round((1 / p) * edge, 2)`. `p` must lie in (0, 1].
pub fn compute_payout_with_edge(probability: f64, edge: f64) -> Result<f64, GameError> {
    if !(probability > 0.0 && probability <= 1.0) {
        return Err(GameError::DegenerateOdds { probability });
    }
    let raw = (1.0 / probability) * edge;
    Ok((raw * 100.0).round() / 100.0)
}
