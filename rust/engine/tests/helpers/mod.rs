//! Shared fixtures for engine integration tests.
#![allow(dead_code)]

use ridebus_engine::cards::{full_deck, Card, Rank, Suit};
use ridebus_engine::engine::{EngineConfig, RoundEngine};

pub fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

/// Card order whose first draws are `draws`, in order. The remaining cards
/// follow in factory order.
pub fn stacked(draws: &[Card]) -> Vec<Card> {
    let mut order: Vec<Card> = full_deck()
        .into_iter()
        .filter(|c| !draws.contains(c))
        .collect();
    order.extend(draws.iter().rev().copied());
    order
}

pub fn seeded_engine(seed: u64) -> RoundEngine {
    RoundEngine::new(EngineConfig {
        seed: Some(seed),
        ..EngineConfig::default()
    })
}

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
