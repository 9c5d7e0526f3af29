use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::logger::{GuessRecord, GuessResult, Resolution, RoundRecord};
use crate::odds::{compute_odds, compute_payout_with_edge, Odds, HOUSE_EDGE};
use crate::rules::{is_correct, validate_bet, Guess, Stage};
use crate::stats::Stats;

/// Balance a new session starts with.
pub const INITIAL_BALANCE: f64 = 1000.0;

/// Pause a presentation layer should leave before showing a transition.
/// The engine itself never waits.
pub const REVEAL_DELAY: Duration = Duration::from_millis(500);

/// Whether a player may cash out before any guess has paid.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CashOutPolicy {
    /// Cash-out needs at least one correct guess in the round
    AfterFirstWin,
    /// Cash-out is always allowed; before any guess it pays the bet at 1.0x
    Anytime,
}

/// Tunables for a [`RoundEngine`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub initial_balance: f64,
    pub house_edge: f64,
    /// Seed for the deck RNG; random when `None`
    pub seed: Option<u64>,
    pub cash_out: CashOutPolicy,
    /// Hold every resolution until [`RoundEngine::complete_reveal`] is called
    pub gate_reveals: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            initial_balance: INITIAL_BALANCE,
            house_edge: HOUSE_EDGE,
            seed: None,
            cash_out: CashOutPolicy::AfterFirstWin,
            gate_reveals: false,
        }
    }
}

/// What happens after a correct guess.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Advance {
    /// The round continues at this stage
    Stage(Stage),
    /// The suit stage was won and the round paid out
    Win { winnings: f64 },
}

/// Result of [`RoundEngine::submit_guess`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuessOutcome {
    /// Same value as the previous card: void draw, guess again
    Push { card: Card },
    Correct {
        card: Card,
        multiplier: f64,
        next: Advance,
    },
    Incorrect { card: Card, loss: f64 },
}

impl GuessOutcome {
    pub fn card(&self) -> Card {
        match *self {
            GuessOutcome::Push { card }
            | GuessOutcome::Correct { card, .. }
            | GuessOutcome::Incorrect { card, .. } => card,
        }
    }

    /// True when the outcome ended the round.
    pub fn ends_round(&self) -> bool {
        matches!(
            self,
            GuessOutcome::Incorrect { .. }
                | GuessOutcome::Correct {
                    next: Advance::Win { .. },
                    ..
                }
        )
    }
}

/// Read-only view of the engine for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    pub stage: Stage,
    pub drawn_cards: Vec<Card>,
    pub payout_multiplier: f64,
    pub balance: f64,
    /// Bet locked for the active round; `None` while idle
    pub current_bet: Option<f64>,
    pub deck_remaining: usize,
    pub reveal_pending: bool,
}

#[derive(Debug, Clone)]
struct Round {
    stage: Stage,
    drawn: Vec<Card>,
    multiplier: f64,
    guesses: Vec<GuessRecord>,
}

impl Round {
    fn idle() -> Self {
        Self {
            stage: Stage::Idle,
            drawn: Vec::with_capacity(4),
            multiplier: 1.0,
            guesses: Vec::new(),
        }
    }
}

#[derive(Debug, Clone)]
struct Wallet {
    balance: f64,
    current_bet: Option<f64>,
}

/// Long-lived session engine: owns the deck, the active round, the wallet
/// and the session stats.
///
/// # Examples
///
/// ```
/// use ridebus_engine::engine::{EngineConfig, RoundEngine};
/// use ridebus_engine::rules::{Guess, Stage};
///
/// let mut engine = RoundEngine::new(EngineConfig {
///     seed: Some(7),
///     ..EngineConfig::default()
/// });
/// let snapshot = engine.start_round(10.0).expect("valid bet");
/// assert_eq!(snapshot.stage, Stage::Color);
///
/// let outcome = engine.submit_guess(Guess::Red).expect("guess accepted");
/// println!("{:?}", outcome);
/// ```
#[derive(Debug)]
pub struct RoundEngine {
    config: EngineConfig,
    seed: u64,
    deck: Deck,
    round: Round,
    wallet: Wallet,
    stats: Stats,
    reveal_pending: bool,
    finished: Option<RoundRecord>,
}

impl RoundEngine {
    pub fn new(config: EngineConfig) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        Self {
            seed,
            deck: Deck::new_with_seed(seed),
            round: Round::idle(),
            wallet: Wallet {
                balance: config.initial_balance,
                current_bet: None,
            },
            stats: Stats::new(),
            reveal_pending: false,
            finished: None,
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn balance(&self) -> f64 {
        self.wallet.balance
    }

    pub fn stage(&self) -> Stage {
        self.round.stage
    }

    /// Starts a round with a freshly shuffled deck.
    ///
    /// # Errors
    ///
    /// [`GameError::InvalidBet`] for a bet outside `(0, balance]`;
    /// [`GameError::RoundInProgress`] or [`GameError::GuessInFlight`] when the
    /// engine is not ready for a new round. Nothing changes on error.
    pub fn start_round(&mut self, bet: f64) -> Result<RoundSnapshot, GameError> {
        self.check_can_start(bet)?;
        self.deck.shuffle();
        Ok(self.begin(bet))
    }

    /// Starts a round on a fixed card order instead of a shuffle. For tests
    /// and fixtures; see [`Deck::restack`] for the accepted orders.
    ///
    /// The session RNG is kept, so later rounds still follow the engine seed.
    pub fn start_round_with_order(
        &mut self,
        bet: f64,
        order: Vec<Card>,
    ) -> Result<RoundSnapshot, GameError> {
        self.check_can_start(bet)?;
        self.deck.restack(order).map_err(|e| self.reject(e))?;
        Ok(self.begin(bet))
    }

    fn check_can_start(&self, bet: f64) -> Result<(), GameError> {
        if self.reveal_pending {
            return Err(self.reject(GameError::GuessInFlight));
        }
        if self.round.stage.is_active() {
            return Err(self.reject(GameError::RoundInProgress));
        }
        validate_bet(bet, self.wallet.balance).map_err(|e| self.reject(e))?;
        Ok(())
    }

    fn begin(&mut self, bet: f64) -> RoundSnapshot {
        self.round = Round::idle();
        self.round.stage = Stage::Color;
        self.wallet.current_bet = Some(bet);
        self.finished = None;
        info!(bet, balance = self.wallet.balance, "round started");
        self.state()
    }

    /// Odds of every guess in the current stage, measured against the live deck.
    pub fn odds(&self) -> Odds {
        compute_odds(self.round.stage, self.deck.cards(), &self.round.drawn)
            .unwrap_or_else(|_| Odds::empty(self.round.stage))
    }

    /// Draws a card and judges `guess` against it.
    ///
    /// # Errors
    ///
    /// - [`GameError::NoActiveRound`] while idle
    /// - [`GameError::GuessInFlight`] while a previous reveal is pending
    /// - [`GameError::WrongStage`] for a guess from another stage
    /// - [`GameError::DegenerateOdds`] for a guess with no winning cards left
    ///
    /// The engine state is untouched on error.
    pub fn submit_guess(&mut self, guess: Guess) -> Result<GuessOutcome, GameError> {
        let stage = self.round.stage;
        let bet = self.active_bet()?;
        if guess.stage() != stage {
            return Err(self.reject(GameError::WrongStage { guess, stage }));
        }

        let odds = compute_odds(stage, self.deck.cards(), &self.round.drawn)
            .map_err(|e| self.reject(e))?;
        let probability = odds.get(guess).unwrap_or(0.0);
        let payout = compute_payout_with_edge(probability, self.config.house_edge)
            .map_err(|e| self.reject(e))?;

        let card = self
            .deck
            .draw()
            .ok_or_else(|| self.reject(GameError::DeckExhausted))?;
        debug!(?stage, ?guess, ?card, probability, "card drawn");

        let outcome = if self.is_push(card) {
            self.deck.return_and_reshuffle(card);
            self.log_guess(guess, card, GuessResult::Push);
            debug!(?card, remaining = self.deck.remaining(), "push, card returned");
            GuessOutcome::Push { card }
        } else if is_correct(stage, guess, card, &self.round.drawn) {
            self.round.drawn.push(card);
            self.log_guess(guess, card, GuessResult::Correct);
            self.round.multiplier *= payout;
            let multiplier = self.round.multiplier;
            let next = match stage.next() {
                Some(next) => {
                    self.round.stage = next;
                    debug!(?next, multiplier, "guess correct");
                    Advance::Stage(next)
                }
                None => {
                    let winnings = bet * multiplier;
                    self.resolve(Resolution::Win, winnings);
                    Advance::Win { winnings }
                }
            };
            GuessOutcome::Correct {
                card,
                multiplier,
                next,
            }
        } else {
            self.round.drawn.push(card);
            self.log_guess(guess, card, GuessResult::Incorrect);
            self.resolve(Resolution::Loss, 0.0);
            GuessOutcome::Incorrect { card, loss: bet }
        };

        self.reveal_pending = self.config.gate_reveals;
        Ok(outcome)
    }

    /// Takes the current multiplier and ends the round.
    ///
    /// # Errors
    ///
    /// [`GameError::NoActiveRound`], [`GameError::GuessInFlight`], and under
    /// [`CashOutPolicy::AfterFirstWin`] [`GameError::NothingToCashOut`] while
    /// still on the color stage.
    pub fn cash_out(&mut self) -> Result<f64, GameError> {
        let bet = self.active_bet()?;
        if self.config.cash_out == CashOutPolicy::AfterFirstWin
            && self.round.stage == Stage::Color
        {
            return Err(self.reject(GameError::NothingToCashOut));
        }
        let winnings = bet * self.round.multiplier;
        self.resolve(Resolution::CashOut, winnings);
        self.reveal_pending = self.config.gate_reveals;
        Ok(winnings)
    }

    /// Releases the reveal gate. Returns whether a reveal was pending.
    pub fn complete_reveal(&mut self) -> bool {
        std::mem::replace(&mut self.reveal_pending, false)
    }

    pub fn stats(&self) -> Stats {
        self.stats.clone()
    }

    pub fn state(&self) -> RoundSnapshot {
        RoundSnapshot {
            stage: self.round.stage,
            drawn_cards: self.round.drawn.clone(),
            payout_multiplier: self.round.multiplier,
            balance: self.wallet.balance,
            current_bet: self.wallet.current_bet,
            deck_remaining: self.deck.remaining(),
            reveal_pending: self.reveal_pending,
        }
    }

    /// Record of the most recently resolved round, handed out once.
    pub fn take_finished_round(&mut self) -> Option<RoundRecord> {
        self.finished.take()
    }

    fn active_bet(&self) -> Result<f64, GameError> {
        if self.reveal_pending {
            return Err(self.reject(GameError::GuessInFlight));
        }
        match (self.round.stage.is_active(), self.wallet.current_bet) {
            (true, Some(bet)) => Ok(bet),
            _ => Err(self.reject(GameError::NoActiveRound)),
        }
    }

    fn is_push(&self, card: Card) -> bool {
        self.round.stage != Stage::Color
            && self
                .round
                .drawn
                .last()
                .is_some_and(|last| last.value() == card.value())
    }

    fn log_guess(&mut self, guess: Guess, card: Card, result: GuessResult) {
        self.round.guesses.push(GuessRecord {
            stage: self.round.stage,
            guess,
            card,
            result,
        });
    }

    fn resolve(&mut self, resolution: Resolution, payout: f64) {
        let bet = self.wallet.current_bet.unwrap_or(0.0);
        match resolution {
            Resolution::Loss => {
                self.wallet.balance -= bet;
                self.stats.record(false, 0.0);
            }
            Resolution::Win | Resolution::CashOut => {
                self.wallet.balance += payout;
                self.stats.record(true, payout);
            }
        }
        info!(
            ?resolution,
            bet,
            multiplier = self.round.multiplier,
            payout,
            balance = self.wallet.balance,
            "round resolved"
        );

        let round = std::mem::replace(&mut self.round, Round::idle());
        self.finished = Some(RoundRecord {
            round_id: String::new(),
            seed: Some(self.seed),
            bet,
            guesses: round.guesses,
            drawn: round.drawn,
            resolution,
            multiplier: round.multiplier,
            payout,
            balance_after: self.wallet.balance,
            ts: None,
        });
        self.wallet.current_bet = None;
    }

    fn reject(&self, e: GameError) -> GameError {
        warn!(error = %e, stage = ?self.round.stage, "operation rejected");
        e
    }
}
