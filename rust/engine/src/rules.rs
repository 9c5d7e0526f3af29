use serde::{Deserialize, Serialize};

use crate::cards::{Card, Color, Suit};
use crate::errors::GameError;

/// The four guessing stages of a round, plus the idle state between rounds.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// No round in progress (-1)
    Idle,
    /// Red or black (0)
    Color,
    /// Higher or lower than the first card (1)
    HigherLower,
    /// Between or outside the first two cards (2)
    Between,
    /// Exact suit (3)
    Suit,
}

impl Stage {
    /// Numeric stage index, -1 for idle.
    pub fn index(self) -> i8 {
        match self {
            Stage::Idle => -1,
            Stage::Color => 0,
            Stage::HigherLower => 1,
            Stage::Between => 2,
            Stage::Suit => 3,
        }
    }

    pub fn from_index(index: i8) -> Option<Stage> {
        match index {
            -1 => Some(Stage::Idle),
            0 => Some(Stage::Color),
            1 => Some(Stage::HigherLower),
            2 => Some(Stage::Between),
            3 => Some(Stage::Suit),
            _ => None,
        }
    }

    /// Stage entered after a correct guess; `None` once the suit stage is won.
    pub fn next(self) -> Option<Stage> {
        match self {
            Stage::Idle => Some(Stage::Color),
            Stage::Color => Some(Stage::HigherLower),
            Stage::HigherLower => Some(Stage::Between),
            Stage::Between => Some(Stage::Suit),
            Stage::Suit => None,
        }
    }

    pub fn is_active(self) -> bool {
        self != Stage::Idle
    }

    /// Every guess token that belongs to this stage, in display order.
    pub fn guesses(self) -> &'static [Guess] {
        match self {
            Stage::Idle => &[],
            Stage::Color => &[Guess::Red, Guess::Black],
            Stage::HigherLower => &[Guess::Higher, Guess::Lower],
            Stage::Between => &[Guess::Between, Guess::Outside],
            Stage::Suit => &[
                Guess::Suit(Suit::Hearts),
                Guess::Suit(Suit::Diamonds),
                Guess::Suit(Suit::Clubs),
                Guess::Suit(Suit::Spades),
            ],
        }
    }
}

/// A guess token submitted by the player.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Guess {
    Red,
    Black,
    Higher,
    Lower,
    Between,
    Outside,
    Suit(Suit),
}

impl Guess {
    /// The stage during which this guess may be submitted.
    pub fn stage(self) -> Stage {
        match self {
            Guess::Red | Guess::Black => Stage::Color,
            Guess::Higher | Guess::Lower => Stage::HigherLower,
            Guess::Between | Guess::Outside => Stage::Between,
            Guess::Suit(_) => Stage::Suit,
        }
    }
}

/// Sorted values of the first two cards of the round, used by the between stage.
pub fn reference_pair(drawn: &[Card]) -> Option<(u8, u8)> {
    match drawn {
        [a, b, ..] => {
            let (x, y) = (a.value(), b.value());
            Some((x.min(y), x.max(y)))
        }
        _ => None,
    }
}

/// Validates a bet against the current balance.
///
/// # Errors
///
/// Returns [`GameError::InvalidBet`] when the bet is zero, negative, not a
/// finite number, or larger than the balance.
///
/// # Examples
///
/// ```
/// use ridebus_engine::rules::validate_bet;
///
/// assert!(validate_bet(10.0, 1000.0).is_ok());
/// assert!(validate_bet(0.0, 1000.0).is_err());
/// assert!(validate_bet(1000.5, 1000.0).is_err());
/// ```
pub fn validate_bet(amount: f64, balance: f64) -> Result<f64, GameError> {
    if !amount.is_finite() || amount <= 0.0 || amount > balance {
        return Err(GameError::InvalidBet { amount, balance });
    }
    Ok(amount)
}

/// Decides whether `guess` wins against `card`.
///
/// `drawn` holds the cards drawn before `card` in this round. The guess is
/// assumed to belong to `stage`; anything else is a loss.
pub fn is_correct(stage: Stage, guess: Guess, card: Card, drawn: &[Card]) -> bool {
    match (stage, guess) {
        (Stage::Color, Guess::Red) => card.color() == Color::Red,
        (Stage::Color, Guess::Black) => card.color() == Color::Black,
        (Stage::HigherLower, Guess::Higher) => {
            drawn.first().is_some_and(|f| card.value() > f.value())
        }
        (Stage::HigherLower, Guess::Lower) => {
            drawn.first().is_some_and(|f| card.value() < f.value())
        }
        (Stage::Between, Guess::Between) => reference_pair(drawn)
            .is_some_and(|(low, high)| low < card.value() && card.value() < high),
        (Stage::Between, Guess::Outside) => reference_pair(drawn)
            .is_some_and(|(low, high)| card.value() <= low || card.value() >= high),
        (Stage::Suit, Guess::Suit(s)) => card.suit == s,
        _ => false,
    }
}
