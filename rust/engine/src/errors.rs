use thiserror::Error;

use crate::rules::{Guess, Stage};

/// Coarse classification of [`GameError`], matching how a caller should react.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The bet was rejected; ask for another amount.
    InvalidBet,
    /// The operation is not valid in the engine's current state.
    EngineState,
    /// The guess has no winning cards left, so no payout exists for it.
    DegenerateOdds,
}

#[derive(Debug, Error, PartialEq)]
pub enum GameError {
    #[error("Invalid bet amount: {amount} (balance: {balance})")]
    InvalidBet { amount: f64, balance: f64 },
    #[error("No round in progress")]
    NoActiveRound,
    #[error("A round is already in progress")]
    RoundInProgress,
    #[error("Previous guess is still being revealed")]
    GuessInFlight,
    #[error("Guess {guess:?} is not valid during stage {stage:?}")]
    WrongStage { guess: Guess, stage: Stage },
    #[error("Cannot cash out before the first correct guess")]
    NothingToCashOut,
    #[error("Deck is empty")]
    DeckExhausted,
    #[error("Malformed deck: {cards} cards, {unique} unique")]
    MalformedDeck { cards: usize, unique: usize },
    #[error("Stage {stage:?} needs {needed} drawn cards, got {drawn}")]
    MissingReference {
        stage: Stage,
        needed: usize,
        drawn: usize,
    },
    #[error("Probability {probability} has no defined payout")]
    DegenerateOdds { probability: f64 },
}

impl GameError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GameError::InvalidBet { .. } => ErrorKind::InvalidBet,
            GameError::DegenerateOdds { .. } => ErrorKind::DegenerateOdds,
            _ => ErrorKind::EngineState,
        }
    }
}
