//! Card, guess and odds formatters for terminal display.
//!
//! Suits render as Unicode symbols (♥ ♦ ♣ ♠) where the terminal supports
//! them, with h/d/c/s as the ASCII fallback.
//!
//! ```rust
//! use ridebus_engine::cards::{Card, Rank, Suit};
//! use ridebus_cli::formatters::format_card;
//!
//! let queen = Card::new(Rank::Queen, Suit::Spades);
//! assert!(format_card(&queen) == "Q♠" || format_card(&queen) == "Qs");
//! ```

use ridebus_engine::cards::{Card, Rank, Suit};
use ridebus_engine::odds::{compute_payout_with_edge, Odds};
use ridebus_engine::rules::{Guess, Stage};

/// On Windows only modern terminals are trusted with Unicode suit symbols.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: &Suit) -> String {
    if supports_unicode() {
        match suit {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
        }
        .to_string()
    } else {
        match suit {
            Suit::Hearts => "h",
            Suit::Diamonds => "d",
            Suit::Clubs => "c",
            Suit::Spades => "s",
        }
        .to_string()
    }
}

pub fn format_rank(rank: &Rank) -> String {
    match rank {
        Rank::Jack => "J".to_string(),
        Rank::Queen => "Q".to_string(),
        Rank::King => "K".to_string(),
        Rank::Ace => "A".to_string(),
        other => other.value().to_string(),
    }
}

pub fn format_card(card: &Card) -> String {
    format!("{}{}", format_rank(&card.rank), format_suit(&card.suit))
}

/// `[7♥ Q♠]`, or `[]` for no cards.
pub fn format_cards(cards: &[Card]) -> String {
    let parts: Vec<String> = cards.iter().map(format_card).collect();
    format!("[{}]", parts.join(" "))
}

/// The word a player types for `guess`.
pub fn format_guess(guess: &Guess) -> &'static str {
    match guess {
        Guess::Red => "red",
        Guess::Black => "black",
        Guess::Higher => "higher",
        Guess::Lower => "lower",
        Guess::Between => "in",
        Guess::Outside => "out",
        Guess::Suit(Suit::Hearts) => "hearts",
        Guess::Suit(Suit::Diamonds) => "diamonds",
        Guess::Suit(Suit::Clubs) => "clubs",
        Guess::Suit(Suit::Spades) => "spades",
    }
}

pub fn stage_prompt(stage: Stage) -> &'static str {
    match stage {
        Stage::Idle => "Place a bet with 'start [amount]'",
        Stage::Color => "Red or black?",
        Stage::HigherLower => "Higher or lower?",
        Stage::Between => "In between or outside?",
        Stage::Suit => "Which suit?",
    }
}

pub fn format_money(amount: f64) -> String {
    if amount < 0.0 {
        format!("-${:.2}", -amount)
    } else {
        format!("${:.2}", amount)
    }
}

pub fn format_percent(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

/// One line per offered guess: token, probability, payout multiplier.
/// Guesses with no winning cards left are omitted.
pub fn format_odds_table(odds: &Odds, house_edge: f64) -> Vec<String> {
    odds.offered()
        .filter_map(|(guess, p)| {
            let payout = compute_payout_with_edge(p, house_edge).ok()?;
            Some(format!(
                "  {:<9}{:>7}  x{:.2}",
                format_guess(&guess),
                format_percent(p),
                payout
            ))
        })
        .collect()
}
