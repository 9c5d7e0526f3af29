mod helpers;

use helpers::seeded_engine;
use ridebus_engine::engine::INITIAL_BALANCE;
use ridebus_engine::errors::{ErrorKind, GameError};
use ridebus_engine::rules::Stage;

#[test]
fn zero_negative_and_oversized_bets_are_rejected() {
    let mut engine = seeded_engine(1);
    for bet in [0.0, -5.0, INITIAL_BALANCE + 0.01, f64::INFINITY] {
        let err = engine.start_round(bet).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidBet, "bet {bet}");
        assert_eq!(engine.stage(), Stage::Idle);
        assert_eq!(engine.balance(), INITIAL_BALANCE);
        assert_eq!(engine.state().current_bet, None);
    }
}

#[test]
fn nan_bet_is_rejected() {
    let mut engine = seeded_engine(1);
    assert!(matches!(
        engine.start_round(f64::NAN),
        Err(GameError::InvalidBet { .. })
    ));
}

#[test]
fn whole_balance_is_a_valid_bet() {
    let mut engine = seeded_engine(1);
    let snapshot = engine.start_round(INITIAL_BALANCE).unwrap();
    assert_eq!(snapshot.current_bet, Some(INITIAL_BALANCE));
    assert_eq!(snapshot.stage, Stage::Color);
    assert_eq!(snapshot.payout_multiplier, 1.0);
    assert!(snapshot.drawn_cards.is_empty());
    assert_eq!(snapshot.deck_remaining, 52);
}

#[test]
fn second_start_while_active_is_rejected() {
    let mut engine = seeded_engine(1);
    engine.start_round(10.0).unwrap();
    let err = engine.start_round(20.0).unwrap_err();
    assert_eq!(err, GameError::RoundInProgress);
    assert_eq!(err.kind(), ErrorKind::EngineState);
    assert_eq!(engine.state().current_bet, Some(10.0));
}
